use core::borrow::Borrow;
use core::fmt::{Display, Formatter, LowerHex, Result as FmtResult, UpperHex};
use core::iter::Sum;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::{
    Error, Result, Scalar,
    edwards::{AffinePoint, CompressedEdwardsY},
    field::{FieldElement, ORDER_BYTES},
};
use ff::Field;
use group::{
    Curve, Group, GroupEncoding,
    cofactor::{CofactorCurve, CofactorGroup},
    prime::PrimeGroup,
};
use rand_core::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};
use zeroize::DefaultIsZeroes;

#[cfg(feature = "serde")]
use serdect::serde::{Deserialize, Serialize, de, ser};

/// Point on edwards25519 in extended twisted Edwards coordinates:
/// `(x, y) = (X/Z, Y/Z)` with `T = X·Y/Z`.
///
/// The full group has order `8·ℓ`. Use [`EdwardsPoint::is_torsion_free`] to check
/// membership in the prime order subgroup.
#[derive(Copy, Clone, Debug)]
pub struct EdwardsPoint {
    pub(crate) X: FieldElement,
    pub(crate) Y: FieldElement,
    pub(crate) Z: FieldElement,
    pub(crate) T: FieldElement,
}

impl Default for EdwardsPoint {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Display for EdwardsPoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "{{ X: {:x}, Y: {:x}, Z: {:x}, T: {:x} }}",
            self.X, self.Y, self.Z, self.T
        )
    }
}

impl LowerHex for EdwardsPoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{:x}", self.compress())
    }
}

impl UpperHex for EdwardsPoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{:X}", self.compress())
    }
}

impl ConditionallySelectable for EdwardsPoint {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        EdwardsPoint {
            X: FieldElement::conditional_select(&a.X, &b.X, choice),
            Y: FieldElement::conditional_select(&a.Y, &b.Y, choice),
            Z: FieldElement::conditional_select(&a.Z, &b.Z, choice),
            T: FieldElement::conditional_select(&a.T, &b.T, choice),
        }
    }
}

impl ConstantTimeEq for EdwardsPoint {
    fn ct_eq(&self, other: &Self) -> Choice {
        let XZ = self.X * other.Z;
        let ZX = self.Z * other.X;

        let YZ = self.Y * other.Z;
        let ZY = self.Z * other.Y;

        XZ.ct_eq(&ZX) & YZ.ct_eq(&ZY)
    }
}

impl Eq for EdwardsPoint {}
impl PartialEq for EdwardsPoint {
    fn eq(&self, other: &EdwardsPoint) -> bool {
        self.ct_eq(other).into()
    }
}

impl Group for EdwardsPoint {
    type Scalar = Scalar;

    /// Map two uniformly random field elements with Elligator 2 and clear the
    /// cofactor, so the discrete logarithm of the result is unknown.
    fn random(mut rng: impl RngCore) -> Self {
        let u0 = FieldElement::random(&mut rng);
        let u1 = FieldElement::random(&mut rng);
        (Self::elligator2(&u0) + Self::elligator2(&u1)).mul_by_cofactor()
    }

    fn identity() -> Self {
        Self::IDENTITY
    }

    fn generator() -> Self {
        Self::GENERATOR
    }

    fn is_identity(&self) -> Choice {
        EdwardsPoint::is_identity(self)
    }

    fn double(&self) -> Self {
        EdwardsPoint::double(self)
    }
}

impl Curve for EdwardsPoint {
    type AffineRepr = AffinePoint;

    fn to_affine(&self) -> AffinePoint {
        EdwardsPoint::to_affine(self)
    }

    /// Normalize a batch of points sharing a single field inversion.
    fn batch_normalize(projective: &[Self], affine: &mut [AffinePoint]) {
        assert_eq!(projective.len(), affine.len());

        // Running products of the `Z` coordinates are stashed in the output `x`
        // coordinates. `Z` is never zero.
        let mut acc = FieldElement::ONE;

        for (p, q) in projective.iter().zip(affine.iter_mut()) {
            q.x = acc;
            acc *= p.Z;
        }

        let mut acc = acc.invert().unwrap_or(FieldElement::ZERO);

        for (p, q) in projective.iter().rev().zip(affine.iter_mut().rev()) {
            let z_inv = q.x * acc;
            acc *= p.Z;
            *q = AffinePoint {
                x: p.X * z_inv,
                y: p.Y * z_inv,
            };
        }
    }
}

impl GroupEncoding for EdwardsPoint {
    type Repr = [u8; 32];

    fn from_bytes(bytes: &Self::Repr) -> CtOption<Self> {
        CompressedEdwardsY(*bytes)
            .decompress()
            .map(|point| point.to_edwards())
    }

    fn from_bytes_unchecked(bytes: &Self::Repr) -> CtOption<Self> {
        Self::from_bytes(bytes)
    }

    fn to_bytes(&self) -> Self::Repr {
        self.compress().0
    }
}

impl CofactorGroup for EdwardsPoint {
    type Subgroup = EdwardsPoint;

    fn clear_cofactor(&self) -> Self::Subgroup {
        self.mul_by_cofactor()
    }

    fn into_subgroup(self) -> CtOption<Self::Subgroup> {
        CtOption::new(self, self.is_torsion_free())
    }

    fn is_torsion_free(&self) -> Choice {
        EdwardsPoint::is_torsion_free(self)
    }
}

impl CofactorCurve for EdwardsPoint {
    type Affine = AffinePoint;
}

// Required by `CofactorGroup::Subgroup`. Only points passing `is_torsion_free`
// actually lie in the prime order subgroup.
impl PrimeGroup for EdwardsPoint {}

impl DefaultIsZeroes for EdwardsPoint {}

impl TryFrom<&[u8]> for EdwardsPoint {
    type Error = Error;

    /// Decode either a compressed or an uncompressed point, by length.
    fn try_from(bytes: &[u8]) -> Result<Self> {
        AffinePoint::try_from(bytes).map(Self::from)
    }
}

impl From<EdwardsPoint> for AffinePoint {
    fn from(value: EdwardsPoint) -> Self {
        value.to_affine()
    }
}

impl From<&EdwardsPoint> for AffinePoint {
    fn from(value: &EdwardsPoint) -> Self {
        value.to_affine()
    }
}

impl From<AffinePoint> for EdwardsPoint {
    fn from(value: AffinePoint) -> Self {
        value.to_edwards()
    }
}

impl From<&AffinePoint> for EdwardsPoint {
    fn from(value: &AffinePoint) -> Self {
        value.to_edwards()
    }
}

impl EdwardsPoint {
    /// Identity point `(0, 1)`.
    pub const IDENTITY: Self = Self {
        X: FieldElement::ZERO,
        Y: FieldElement::ONE,
        Z: FieldElement::ONE,
        T: FieldElement::ZERO,
    };

    /// Generator of the prime order subgroup, the RFC 8032 basepoint.
    pub const GENERATOR: Self = Self {
        X: AffinePoint::GENERATOR.x,
        Y: AffinePoint::GENERATOR.y,
        Z: FieldElement::ONE,
        T: AffinePoint::GENERATOR.x.multiply(&AffinePoint::GENERATOR.y),
    };

    /// Build a point from fractional affine coordinates
    /// `(x_num / x_den, y_num / y_den)` without inverting the denominators.
    ///
    /// Yields the identity if either denominator is zero.
    pub fn from_fraction(
        x_num: FieldElement,
        x_den: FieldElement,
        y_num: FieldElement,
        y_den: FieldElement,
    ) -> Self {
        let point = Self {
            X: x_num * y_den,
            Y: y_num * x_den,
            Z: x_den * y_den,
            T: x_num * y_num,
        };

        Self::conditional_select(&point, &Self::IDENTITY, point.Z.is_zero())
    }

    /// Elligator 2 map of a single field element, without cofactor clearing.
    pub(crate) fn elligator2(u: &FieldElement) -> Self {
        let (xn, xd, yn, yd) = u.map_to_curve_elligator2_edwards25519();
        Self::from_fraction(xn, xd, yn, yd)
    }

    /// Sample a random point by mapping two random field elements.
    ///
    /// # Errors
    ///
    /// If `rng` fails.
    pub fn try_random(mut rng: impl RngCore) -> Result<Self> {
        let u0 = FieldElement::try_random(&mut rng)?;
        let u1 = FieldElement::try_random(&mut rng)?;
        Ok((Self::elligator2(&u0) + Self::elligator2(&u1)).mul_by_cofactor())
    }

    /// Add two points.
    ///
    /// Unified formula `add-2008-hwcd` from Hisil, Wong, Carter and Dawson,
    /// "Twisted Edwards Curves Revisited", section 3.1. It is complete on
    /// edwards25519 because `a` is a square and `d` is not.
    pub fn add(&self, other: &EdwardsPoint) -> Self {
        let A = self.X * other.X;
        let B = self.Y * other.Y;
        let C = self.T * FieldElement::EDWARDS_D * other.T;
        let D = self.Z * other.Z;
        let E = (self.X + self.Y) * (other.X + other.Y) - A - B;
        let F = D - C;
        let G = D + C;
        let H = B - FieldElement::EDWARDS_A * A;

        EdwardsPoint {
            X: E * F,
            Y: G * H,
            Z: F * G,
            T: E * H,
        }
    }

    /// Double this point with `dbl-2008-hwcd`.
    pub fn double(&self) -> Self {
        let A = self.X.square();
        let B = self.Y.square();
        let C = self.Z.square().double();
        let D = FieldElement::EDWARDS_A * A;
        let E = (self.X + self.Y).square() - A - B;
        let G = D + B;
        let F = G - C;
        let H = D - B;

        EdwardsPoint {
            X: E * F,
            Y: G * H,
            Z: F * G,
            T: E * H,
        }
    }

    /// Negate this point: `(x, y) -> (-x, y)`.
    pub fn negate(&self) -> Self {
        EdwardsPoint {
            X: -self.X,
            Y: self.Y,
            Z: self.Z,
            T: -self.T,
        }
    }

    /// Is this the identity point?
    pub fn is_identity(&self) -> Choice {
        self.X.is_zero() & self.Y.ct_eq(&self.Z)
    }

    /// Check if this point is on the curve.
    pub fn is_on_curve(&self) -> Choice {
        let XY = self.X * self.Y;
        let ZT = self.Z * self.T;

        // a·X^2 + Y^2 == Z^2 + d·T^2
        let lhs = FieldElement::EDWARDS_A * self.X.square() + self.Y.square();
        let rhs = self.Z.square() + FieldElement::EDWARDS_D * self.T.square();

        XY.ct_eq(&ZT) & lhs.ct_eq(&rhs) & !self.Z.is_zero()
    }

    /// Convert this point to an [`AffinePoint`].
    pub fn to_affine(&self) -> AffinePoint {
        let z_inv = self.Z.invert().unwrap_or(FieldElement::ZERO);

        AffinePoint {
            x: self.X * z_inv,
            y: self.Y * z_inv,
        }
    }

    /// RFC 8032 compressed encoding.
    pub fn compress(&self) -> CompressedEdwardsY {
        self.to_affine().compress()
    }

    /// Compute `[k] P` with a constant-time fixed window.
    pub fn mul(&self, k: &Scalar) -> Self {
        primeorder::mul::mul(self, k)
    }

    /// Compute `[k] P` where `k` is a big-endian integer of any length.
    pub fn mul_by_bytes(&self, k_be: &[u8]) -> Self {
        primeorder::mul::mul_by_bytes(self, k_be)
    }

    /// Compute `[k] G`.
    #[cfg(not(feature = "basepoint-table"))]
    pub fn mul_by_generator(k: &Scalar) -> Self {
        Self::GENERATOR.mul(k)
    }

    /// Compute `[k] G` using the precomputed basepoint table.
    #[cfg(feature = "basepoint-table")]
    pub fn mul_by_generator(k: &Scalar) -> Self {
        static BASEPOINT_TABLE: primeorder::BasepointTable<EdwardsPoint, 33> =
            primeorder::BasepointTable::new();
        BASEPOINT_TABLE.mul(k)
    }

    /// Constant-time multi-scalar multiplication, `Σ [kᵢ] Pᵢ`.
    ///
    /// # Errors
    ///
    /// If `points` and `scalars` differ in length.
    #[cfg(feature = "alloc")]
    pub fn multiscalar_mul(points: &[Self], scalars: &[Scalar]) -> Result<Self> {
        primeorder::msm::multi_scalar_mul(points, scalars)
    }

    /// Variable-time multi-scalar multiplication, for public scalars only.
    ///
    /// # Errors
    ///
    /// If `points` and `scalars` differ in length.
    #[cfg(feature = "alloc")]
    pub fn multiscalar_mul_vartime(points: &[Self], scalars: &[Scalar]) -> Result<Self> {
        primeorder::msm::multi_scalar_mul_vartime(points, scalars)
    }

    /// Multiply by the cofactor 8.
    pub fn mul_by_cofactor(&self) -> Self {
        self.double().double().double()
    }

    /// Is this point in the torsion subgroup `E[8]`?
    pub fn is_small_order(&self) -> Choice {
        self.mul_by_cofactor().is_identity()
    }

    /// Determine if this point is in the prime order subgroup, by checking
    /// `[ℓ] P = 0`.
    pub fn is_torsion_free(&self) -> Choice {
        self.mul_by_bytes(&ORDER_BYTES).is_identity()
    }
}

// ------------------------------------------------------------------------
// Addition and Subtraction
// ------------------------------------------------------------------------

impl Add<&EdwardsPoint> for &EdwardsPoint {
    type Output = EdwardsPoint;

    fn add(self, other: &EdwardsPoint) -> EdwardsPoint {
        self.add(other)
    }
}

define_binop_variants!(Add, add, LHS = EdwardsPoint, RHS = EdwardsPoint, Output = EdwardsPoint);
define_assign_variants!(AddAssign, add_assign, +, LHS = EdwardsPoint, RHS = EdwardsPoint);

impl Add<&AffinePoint> for &EdwardsPoint {
    type Output = EdwardsPoint;

    fn add(self, other: &AffinePoint) -> EdwardsPoint {
        self.add(&other.to_edwards())
    }
}

define_binop_variants!(Add, add, LHS = EdwardsPoint, RHS = AffinePoint, Output = EdwardsPoint);
define_assign_variants!(AddAssign, add_assign, +, LHS = EdwardsPoint, RHS = AffinePoint);

impl Add<&EdwardsPoint> for &AffinePoint {
    type Output = EdwardsPoint;

    fn add(self, other: &EdwardsPoint) -> EdwardsPoint {
        other.add(&self.to_edwards())
    }
}

define_binop_variants!(Add, add, LHS = AffinePoint, RHS = EdwardsPoint, Output = EdwardsPoint);

impl Sub<&EdwardsPoint> for &EdwardsPoint {
    type Output = EdwardsPoint;

    fn sub(self, other: &EdwardsPoint) -> EdwardsPoint {
        self.add(&other.negate())
    }
}

define_binop_variants!(Sub, sub, LHS = EdwardsPoint, RHS = EdwardsPoint, Output = EdwardsPoint);
define_assign_variants!(SubAssign, sub_assign, -, LHS = EdwardsPoint, RHS = EdwardsPoint);

impl Sub<&AffinePoint> for &EdwardsPoint {
    type Output = EdwardsPoint;

    fn sub(self, other: &AffinePoint) -> EdwardsPoint {
        self.add(&other.to_edwards().negate())
    }
}

define_binop_variants!(Sub, sub, LHS = EdwardsPoint, RHS = AffinePoint, Output = EdwardsPoint);
define_assign_variants!(SubAssign, sub_assign, -, LHS = EdwardsPoint, RHS = AffinePoint);

impl<T> Sum<T> for EdwardsPoint
where
    T: Borrow<EdwardsPoint>,
{
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = T>,
    {
        iter.fold(Self::IDENTITY, |acc, item| acc + item.borrow())
    }
}

// ------------------------------------------------------------------------
// Negation
// ------------------------------------------------------------------------

impl Neg for &EdwardsPoint {
    type Output = EdwardsPoint;

    fn neg(self) -> EdwardsPoint {
        self.negate()
    }
}

impl Neg for EdwardsPoint {
    type Output = EdwardsPoint;

    fn neg(self) -> EdwardsPoint {
        self.negate()
    }
}

// ------------------------------------------------------------------------
// Scalar multiplication
// ------------------------------------------------------------------------

impl Mul<&Scalar> for &EdwardsPoint {
    type Output = EdwardsPoint;

    /// Scalar multiplication: compute `scalar * self`.
    fn mul(self, scalar: &Scalar) -> EdwardsPoint {
        self.mul(scalar)
    }
}

define_binop_variants!(Mul, mul, LHS = EdwardsPoint, RHS = Scalar, Output = EdwardsPoint);
define_assign_variants!(MulAssign, mul_assign, *, LHS = EdwardsPoint, RHS = Scalar);

// ------------------------------------------------------------------------
// serde support
// ------------------------------------------------------------------------

#[cfg(feature = "serde")]
impl Serialize for EdwardsPoint {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        self.compress().serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for EdwardsPoint {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        AffinePoint::deserialize(deserializer).map(Self::from)
    }
}
