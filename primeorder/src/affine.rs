//! Affine curve points.

#![allow(clippy::op_ref)]

use crate::{PrimeCurveParams, ProjectivePoint};
use core::{
    borrow::Borrow,
    fmt,
    ops::{Mul, Neg},
};
use ff::{Field, PrimeField};
use group::{GroupEncoding, UncompressedEncoding, prime::PrimeCurveAffine};
use primefield::{Error, Result};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};
use zeroize::DefaultIsZeroes;

#[cfg(feature = "serde")]
use serdect::serde::{Deserialize, Serialize, de, ser};

/// Point on a Weierstrass curve in affine coordinates.
#[derive(Clone, Copy, Debug)]
pub struct AffinePoint<C: PrimeCurveParams> {
    /// x-coordinate
    pub(crate) x: C::FieldElement,

    /// y-coordinate
    pub(crate) y: C::FieldElement,

    /// Is this point the point at infinity? 0 = no, 1 = yes
    ///
    /// This is a proxy for [`Choice`], but uses `u8` instead to permit `const`
    /// constructors for `IDENTITY` and `GENERATOR`.
    pub(crate) infinity: u8,
}

impl<C> AffinePoint<C>
where
    C: PrimeCurveParams,
{
    /// Additive identity of the group a.k.a. the point at infinity.
    pub const IDENTITY: Self = Self {
        x: C::FieldElement::ZERO,
        y: C::FieldElement::ZERO,
        infinity: 1,
    };

    /// Base point of the curve.
    pub const GENERATOR: Self = Self {
        x: C::GENERATOR.0,
        y: C::GENERATOR.1,
        infinity: 0,
    };

    /// Is this point the point at infinity?
    pub fn is_identity(&self) -> Choice {
        Choice::from(self.infinity)
    }

    /// Create a point from its affine coordinates, returning `None` if `(x, y)`
    /// does not satisfy the curve equation.
    pub fn from_affine_coordinates(x: C::FieldElement, y: C::FieldElement) -> CtOption<Self> {
        let point = Self { x, y, infinity: 0 };
        CtOption::new(point, point.is_on_curve())
    }

    /// Recover the point with the given `x`-coordinate whose `y`-coordinate has
    /// the requested parity.
    ///
    /// Returns `None` if `x³ + ax + b` is not a square.
    pub fn from_x(x: C::FieldElement, y_is_odd: Choice) -> CtOption<Self> {
        let alpha = x * &x * &x + &(C::EQUATION_A * &x) + &C::EQUATION_B;

        alpha.sqrt().and_then(|beta| {
            let y = C::FieldElement::conditional_select(
                &-beta,
                &beta,
                beta.is_odd().ct_eq(&y_is_odd),
            );

            // `y = 0` has a single parity
            CtOption::new(Self { x, y, infinity: 0 }, y.is_odd().ct_eq(&y_is_odd))
        })
    }

    /// Affine `x`-coordinate. Zero for the identity.
    pub fn x(&self) -> C::FieldElement {
        self.x
    }

    /// Affine `y`-coordinate. Zero for the identity.
    pub fn y(&self) -> C::FieldElement {
        self.y
    }

    /// Does this point satisfy the curve equation? Always true for the identity.
    pub fn is_on_curve(&self) -> Choice {
        let lhs = self.y.square();
        let rhs = self.x.square() * &self.x + &(C::EQUATION_A * &self.x) + &C::EQUATION_B;
        lhs.ct_eq(&rhs) | self.is_identity()
    }

    /// Serialize this point in compressed form: the little-endian `x`-coordinate
    /// with the parity of `y` stored in the most significant bit of the last byte.
    ///
    /// The identity is encoded as all zeros.
    pub fn to_compressed(&self) -> <C::FieldElement as PrimeField>::Repr {
        debug_assert!((C::FieldElement::NUM_BITS as usize) < 8 * self.x.to_repr().as_ref().len());

        let mut bytes = le_repr(&self.x);
        let sign = self.y.is_odd().unwrap_u8() << 7;

        if let Some(last) = bytes.as_mut().last_mut() {
            *last |= sign;
        }

        let zero = <C::FieldElement as PrimeField>::Repr::default();
        conditional_select_bytes(&bytes, &zero, self.is_identity())
    }

    /// Deserialize a compressed point, see [`AffinePoint::to_compressed`].
    ///
    /// Returns `None` if `x` is not canonical, if there is no point with this
    /// `x`-coordinate, or if the sign bit cannot be honored.
    pub fn from_compressed(bytes: &<C::FieldElement as PrimeField>::Repr) -> CtOption<Self> {
        let mut tmp = *bytes;
        let mut y_is_odd = Choice::from(0);

        if let Some(last) = tmp.as_mut().last_mut() {
            y_is_odd = Choice::from(*last >> 7);
            *last &= 0x7f;
        }

        from_le_repr::<C::FieldElement>(tmp).and_then(|x| {
            let is_identity = x.is_zero() & !y_is_odd;
            let point = Self::from_x(x, y_is_odd);
            CtOption::new(
                Self::conditional_select(
                    &point.unwrap_or(Self::IDENTITY),
                    &Self::IDENTITY,
                    is_identity,
                ),
                point.is_some() | is_identity,
            )
        })
    }

    /// Serialize this point in uncompressed form: `x_le || y_le`.
    ///
    /// The identity is encoded as all zeros.
    pub fn to_uncompressed(&self) -> C::Uncompressed {
        let mut out = C::Uncompressed::default();
        let x = le_repr(&self.x);
        let y = le_repr(&self.y);
        let (xs, ys) = out.as_mut().split_at_mut(x.as_ref().len());
        xs.copy_from_slice(x.as_ref());
        ys.copy_from_slice(y.as_ref());

        let zero = C::Uncompressed::default();
        conditional_select_bytes(&out, &zero, self.is_identity())
    }

    /// Deserialize an uncompressed point, see [`AffinePoint::to_uncompressed`].
    ///
    /// Returns `None` if either coordinate is not canonical or the point is not
    /// on the curve.
    pub fn from_uncompressed(bytes: &C::Uncompressed) -> CtOption<Self> {
        let mut x = <C::FieldElement as PrimeField>::Repr::default();
        let mut y = <C::FieldElement as PrimeField>::Repr::default();
        let len = x.as_ref().len();

        if bytes.as_ref().len() != 2 * len {
            return CtOption::new(Self::IDENTITY, Choice::from(0));
        }

        x.as_mut().copy_from_slice(&bytes.as_ref()[..len]);
        y.as_mut().copy_from_slice(&bytes.as_ref()[len..]);

        from_le_repr::<C::FieldElement>(x).and_then(|x| {
            from_le_repr::<C::FieldElement>(y).and_then(|y| {
                let is_identity = x.is_zero() & y.is_zero();
                let point = Self { x, y, infinity: 0 };
                let point = Self::conditional_select(&point, &Self::IDENTITY, is_identity);
                CtOption::new(point, point.is_on_curve())
            })
        })
    }
}

/// Big-endian field repr reversed into little-endian byte order.
pub(crate) fn le_repr<F: PrimeField>(fe: &F) -> F::Repr {
    let mut repr = fe.to_repr();
    repr.as_mut().reverse();
    repr
}

/// Decode a little-endian field element, rejecting non-canonical values.
pub(crate) fn from_le_repr<F: PrimeField>(mut repr: F::Repr) -> CtOption<F> {
    repr.as_mut().reverse();
    F::from_repr(repr)
}

fn conditional_select_bytes<T>(a: &T, b: &T, choice: Choice) -> T
where
    T: Copy + AsRef<[u8]> + AsMut<[u8]>,
{
    let mut out = *a;
    for (o, b) in out.as_mut().iter_mut().zip(b.as_ref()) {
        o.conditional_assign(b, choice);
    }
    out
}

/// Fixed-size byte array used as the uncompressed encoding of a point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UncompressedBytes<const N: usize>(pub [u8; N]);

impl<const N: usize> Default for UncompressedBytes<N> {
    fn default() -> Self {
        Self([0; N])
    }
}

impl<const N: usize> AsRef<[u8]> for UncompressedBytes<N> {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl<const N: usize> AsMut<[u8]> for UncompressedBytes<N> {
    fn as_mut(&mut self) -> &mut [u8] {
        &mut self.0
    }
}

impl<const N: usize> From<[u8; N]> for UncompressedBytes<N> {
    fn from(bytes: [u8; N]) -> Self {
        Self(bytes)
    }
}

impl<C> ConditionallySelectable for AffinePoint<C>
where
    C: PrimeCurveParams,
{
    #[inline(always)]
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            x: C::FieldElement::conditional_select(&a.x, &b.x, choice),
            y: C::FieldElement::conditional_select(&a.y, &b.y, choice),
            infinity: u8::conditional_select(&a.infinity, &b.infinity, choice),
        }
    }
}

impl<C> ConstantTimeEq for AffinePoint<C>
where
    C: PrimeCurveParams,
{
    fn ct_eq(&self, other: &Self) -> Choice {
        self.x.ct_eq(&other.x) & self.y.ct_eq(&other.y) & self.infinity.ct_eq(&other.infinity)
    }
}

impl<C> Default for AffinePoint<C>
where
    C: PrimeCurveParams,
{
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl<C> DefaultIsZeroes for AffinePoint<C> where C: PrimeCurveParams {}

impl<C> Eq for AffinePoint<C> where C: PrimeCurveParams {}

impl<C> PartialEq for AffinePoint<C>
where
    C: PrimeCurveParams,
{
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<C> fmt::Display for AffinePoint<C>
where
    C: PrimeCurveParams,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if bool::from(self.is_identity()) {
            write!(f, "Identity")
        } else {
            write!(f, "({:?}, {:?})", self.x, self.y)
        }
    }
}

impl<C> From<ProjectivePoint<C>> for AffinePoint<C>
where
    C: PrimeCurveParams,
{
    fn from(p: ProjectivePoint<C>) -> AffinePoint<C> {
        p.to_affine().unwrap_or(Self::IDENTITY)
    }
}

impl<C> From<&ProjectivePoint<C>> for AffinePoint<C>
where
    C: PrimeCurveParams,
{
    fn from(p: &ProjectivePoint<C>) -> AffinePoint<C> {
        AffinePoint::from(*p)
    }
}

impl<C> GroupEncoding for AffinePoint<C>
where
    C: PrimeCurveParams,
{
    type Repr = <C::FieldElement as PrimeField>::Repr;

    fn from_bytes(bytes: &Self::Repr) -> CtOption<Self> {
        Self::from_compressed(bytes)
    }

    fn from_bytes_unchecked(bytes: &Self::Repr) -> CtOption<Self> {
        // No unchecked conversion possible for compressed points
        Self::from_compressed(bytes)
    }

    fn to_bytes(&self) -> Self::Repr {
        self.to_compressed()
    }
}

impl<C> UncompressedEncoding for AffinePoint<C>
where
    C: PrimeCurveParams,
{
    type Uncompressed = C::Uncompressed;

    fn from_uncompressed(bytes: &Self::Uncompressed) -> CtOption<Self> {
        AffinePoint::from_uncompressed(bytes)
    }

    fn from_uncompressed_unchecked(bytes: &Self::Uncompressed) -> CtOption<Self> {
        AffinePoint::from_uncompressed(bytes)
    }

    fn to_uncompressed(&self) -> Self::Uncompressed {
        AffinePoint::to_uncompressed(self)
    }
}

impl<C> PrimeCurveAffine for AffinePoint<C>
where
    C: PrimeCurveParams,
{
    type Curve = ProjectivePoint<C>;
    type Scalar = C::Scalar;

    fn identity() -> AffinePoint<C> {
        Self::IDENTITY
    }

    fn generator() -> AffinePoint<C> {
        Self::GENERATOR
    }

    fn is_identity(&self) -> Choice {
        self.is_identity()
    }

    fn to_curve(&self) -> ProjectivePoint<C> {
        ProjectivePoint::from(*self)
    }
}

impl<C> TryFrom<&[u8]> for AffinePoint<C>
where
    C: PrimeCurveParams,
{
    type Error = Error;

    /// Decode either a compressed or an uncompressed point, by length.
    fn try_from(bytes: &[u8]) -> Result<Self> {
        let mut compressed = <C::FieldElement as PrimeField>::Repr::default();
        let mut uncompressed = C::Uncompressed::default();

        let point = if bytes.len() == compressed.as_ref().len() {
            compressed.as_mut().copy_from_slice(bytes);
            Self::from_compressed(&compressed)
        } else if bytes.len() == uncompressed.as_ref().len() {
            uncompressed.as_mut().copy_from_slice(bytes);
            Self::from_uncompressed(&uncompressed)
        } else {
            return Err(Error::InvalidEncoding);
        };

        Option::from(point).ok_or(Error::InvalidEncoding)
    }
}

//
// Arithmetic trait impls
//

impl<C, S> Mul<S> for AffinePoint<C>
where
    C: PrimeCurveParams,
    S: Borrow<C::Scalar>,
{
    type Output = ProjectivePoint<C>;

    fn mul(self, scalar: S) -> ProjectivePoint<C> {
        ProjectivePoint::mul(&ProjectivePoint::from(self), scalar.borrow())
    }
}

impl<C> Neg for AffinePoint<C>
where
    C: PrimeCurveParams,
{
    type Output = Self;

    fn neg(self) -> Self {
        AffinePoint {
            x: self.x,
            y: -self.y,
            infinity: self.infinity,
        }
    }
}

impl<C> Neg for &AffinePoint<C>
where
    C: PrimeCurveParams,
{
    type Output = AffinePoint<C>;

    fn neg(self) -> AffinePoint<C> {
        -(*self)
    }
}

//
// serde support
//

#[cfg(feature = "serde")]
impl<C> Serialize for AffinePoint<C>
where
    C: PrimeCurveParams,
{
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serdect::array::serialize_hex_lower_or_bin(&self.to_compressed(), serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, C> Deserialize<'de> for AffinePoint<C>
where
    C: PrimeCurveParams,
{
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        let mut bytes = <C::FieldElement as PrimeField>::Repr::default();
        serdect::array::deserialize_hex_or_bin(bytes.as_mut(), deserializer)?;
        Option::from(Self::from_compressed(&bytes))
            .ok_or_else(|| de::Error::custom("invalid curve point"))
    }
}
