use crate::{
    Error, Result, Scalar,
    edwards::EdwardsPoint,
    field::{FieldElement, from_le_bytes, to_le_bytes},
};
use core::fmt::{Display, Formatter, LowerHex, Result as FmtResult, UpperHex};
use core::ops::{Mul, Neg};
use group::{GroupEncoding, UncompressedEncoding, cofactor::CofactorCurveAffine};
use subtle::{Choice, ConditionallyNegatable, ConditionallySelectable, ConstantTimeEq, CtOption};
use zeroize::DefaultIsZeroes;

#[cfg(feature = "serde")]
use serdect::serde::{Deserialize, Serialize, de, ser};

/// Uncompressed point encoding: `x_le || y_le`, all zeros for the identity.
pub type UncompressedEdwardsPoint = primeorder::UncompressedBytes<64>;

/// Affine point on edwards25519.
#[derive(Copy, Clone, Debug)]
pub struct AffinePoint {
    pub(crate) x: FieldElement,
    pub(crate) y: FieldElement,
}

impl AffinePoint {
    /// The identity point `(0, 1)`.
    pub const IDENTITY: AffinePoint = AffinePoint {
        x: FieldElement::ZERO,
        y: FieldElement::ONE,
    };

    /// The RFC 8032 basepoint, `y = 4/5` with even `x`.
    pub const GENERATOR: AffinePoint = AffinePoint {
        x: FieldElement::from_hex_vartime(
            "216936d3cd6e53fec0a4e231fdd6dc5c692cc7609525a7b2c9562d608f25d51a",
        ),
        y: FieldElement::from_hex_vartime(
            "6666666666666666666666666666666666666666666666666666666666666658",
        ),
    };

    /// Build a point from affine coordinates, returning `None` if it is not on the curve.
    pub fn from_coordinates(x: FieldElement, y: FieldElement) -> CtOption<Self> {
        let point = Self { x, y };
        CtOption::new(point, point.is_on_curve())
    }

    /// The `x` coordinate.
    pub fn x(&self) -> FieldElement {
        self.x
    }

    /// The `y` coordinate.
    pub fn y(&self) -> FieldElement {
        self.y
    }

    /// Is this the identity point?
    pub fn is_identity(&self) -> Choice {
        self.x.is_zero() & self.y.ct_eq(&FieldElement::ONE)
    }

    /// Check if this point is on the curve.
    pub fn is_on_curve(&self) -> Choice {
        // a·x^2 + y^2 == 1 + d·x^2·y^2
        let XX = self.x.square();
        let YY = self.y.square();
        let lhs = FieldElement::EDWARDS_A * XX + YY;
        let rhs = FieldElement::ONE + FieldElement::EDWARDS_D * XX * YY;

        lhs.ct_eq(&rhs)
    }

    /// Convert to extended coordinates.
    pub fn to_edwards(&self) -> EdwardsPoint {
        EdwardsPoint {
            X: self.x,
            Y: self.y,
            Z: FieldElement::ONE,
            T: self.x * self.y,
        }
    }

    /// RFC 8032 compression: little-endian `y` with the sign of `x` in the top bit.
    pub fn compress(&self) -> CompressedEdwardsY {
        let mut bytes = to_le_bytes(&self.y);
        bytes[31] |= self.x.is_odd().unwrap_u8() << 7;
        CompressedEdwardsY(bytes)
    }

    /// Serialize as `x_le || y_le`. The identity is encoded as all zeros.
    pub fn to_uncompressed(&self) -> UncompressedEdwardsPoint {
        let mut out = [0u8; 64];
        out[..32].copy_from_slice(&to_le_bytes(&self.x));
        out[32..].copy_from_slice(&to_le_bytes(&self.y));

        let is_identity = self.is_identity();
        for byte in out.iter_mut() {
            byte.conditional_assign(&0, is_identity);
        }

        out.into()
    }

    /// Deserialize an uncompressed point, see [`AffinePoint::to_uncompressed`].
    ///
    /// Returns `None` for non-canonical coordinates, points off the curve, and the
    /// explicit `(0, 1)` form of the identity.
    pub fn from_uncompressed(bytes: &UncompressedEdwardsPoint) -> CtOption<Self> {
        let mut x = [0u8; 32];
        let mut y = [0u8; 32];
        x.copy_from_slice(&bytes.0[..32]);
        y.copy_from_slice(&bytes.0[32..]);

        from_le_bytes(&x).and_then(|x| {
            from_le_bytes(&y).and_then(|y| {
                let all_zero = x.is_zero() & y.is_zero();
                let point = Self { x, y };
                CtOption::new(
                    Self::conditional_select(&point, &Self::IDENTITY, all_zero),
                    all_zero | (point.is_on_curve() & !point.is_identity()),
                )
            })
        })
    }
}

impl Default for AffinePoint {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Display for AffinePoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{{ x: {:x}, y: {:x} }}", self.x, self.y)
    }
}

impl ConstantTimeEq for AffinePoint {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.x.ct_eq(&other.x) & self.y.ct_eq(&other.y)
    }
}

impl ConditionallySelectable for AffinePoint {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            x: FieldElement::conditional_select(&a.x, &b.x, choice),
            y: FieldElement::conditional_select(&a.y, &b.y, choice),
        }
    }
}

impl Eq for AffinePoint {}
impl PartialEq for AffinePoint {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl DefaultIsZeroes for AffinePoint {}

impl GroupEncoding for AffinePoint {
    type Repr = [u8; 32];

    fn from_bytes(bytes: &Self::Repr) -> CtOption<Self> {
        CompressedEdwardsY(*bytes).decompress()
    }

    fn from_bytes_unchecked(bytes: &Self::Repr) -> CtOption<Self> {
        Self::from_bytes(bytes)
    }

    fn to_bytes(&self) -> Self::Repr {
        self.compress().0
    }
}

impl UncompressedEncoding for AffinePoint {
    type Uncompressed = UncompressedEdwardsPoint;

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

impl CofactorCurveAffine for AffinePoint {
    type Scalar = Scalar;
    type Curve = EdwardsPoint;

    fn identity() -> Self {
        Self::IDENTITY
    }

    fn generator() -> Self {
        Self::GENERATOR
    }

    fn is_identity(&self) -> Choice {
        AffinePoint::is_identity(self)
    }

    fn to_curve(&self) -> EdwardsPoint {
        self.to_edwards()
    }
}

impl TryFrom<&[u8]> for AffinePoint {
    type Error = Error;

    /// Decode either a compressed or an uncompressed point, by length.
    fn try_from(bytes: &[u8]) -> Result<Self> {
        let point = match bytes.len() {
            32 => CompressedEdwardsY::try_from(bytes)?.decompress(),
            64 => {
                let mut uncompressed = UncompressedEdwardsPoint::default();
                uncompressed.0.copy_from_slice(bytes);
                Self::from_uncompressed(&uncompressed)
            }
            _ => return Err(Error::InvalidEncoding),
        };

        Option::from(point).ok_or(Error::InvalidEncoding)
    }
}

impl Neg for AffinePoint {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: self.y,
        }
    }
}

impl Neg for &AffinePoint {
    type Output = AffinePoint;

    fn neg(self) -> AffinePoint {
        -*self
    }
}

impl Mul<&Scalar> for &AffinePoint {
    type Output = EdwardsPoint;

    #[inline]
    fn mul(self, scalar: &Scalar) -> EdwardsPoint {
        self.to_edwards() * scalar
    }
}

define_binop_variants!(Mul, mul, LHS = AffinePoint, RHS = Scalar, Output = EdwardsPoint);

#[cfg(feature = "serde")]
impl Serialize for AffinePoint {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        self.compress().serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for AffinePoint {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        let compressed = CompressedEdwardsY::deserialize(deserializer)?;
        Option::from(compressed.decompress()).ok_or_else(|| de::Error::custom("invalid point"))
    }
}

/// RFC 8032 compressed point: the little-endian `y` coordinate, with the sign of
/// `x` stored in the most significant bit.
#[derive(Copy, Clone, Debug, Default, Hash)]
pub struct CompressedEdwardsY(pub [u8; 32]);

impl CompressedEdwardsY {
    /// The identity point, `y = 1`.
    pub const IDENTITY: Self = {
        let mut bytes = [0u8; 32];
        bytes[0] = 1;
        Self(bytes)
    };

    /// Attempt to decompress to an [`AffinePoint`].
    ///
    /// Returns `None` if `y >= p`, if `y` has no matching `x`, or if the sign bit is
    /// set on `x = 0`.
    pub fn decompress(&self) -> CtOption<AffinePoint> {
        let mut y_bytes = self.0;
        let x_is_odd = Choice::from(y_bytes[31] >> 7);
        y_bytes[31] &= 0x7f;

        from_le_bytes(&y_bytes).and_then(|y| {
            // x^2 = (y^2 - 1) / (d·y^2 - a), and the denominator never vanishes
            // because d is not a square
            let YY = y.square();
            let u = YY - FieldElement::ONE;
            let v = FieldElement::EDWARDS_D * YY - FieldElement::EDWARDS_A;
            let xx = u * v.invert().unwrap_or(FieldElement::ZERO);

            xx.sqrt().and_then(|mut x| {
                let sign_is_honored = !(x.is_zero() & x_is_odd);
                let flip = x.is_odd() ^ x_is_odd;
                x.conditional_negate(flip);
                CtOption::new(AffinePoint { x, y }, sign_is_honored)
            })
        })
    }

    /// View this point as a byte slice.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Copy the encoding out as a byte array.
    pub fn to_bytes(&self) -> [u8; 32] {
        self.0
    }
}

impl Display for CompressedEdwardsY {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        LowerHex::fmt(self, f)
    }
}

impl LowerHex for CompressedEdwardsY {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for b in &self.0 {
            write!(f, "{b:02x}")?;
        }
        Ok(())
    }
}

impl UpperHex for CompressedEdwardsY {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for b in &self.0 {
            write!(f, "{b:02X}")?;
        }
        Ok(())
    }
}

impl ConstantTimeEq for CompressedEdwardsY {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl Eq for CompressedEdwardsY {}
impl PartialEq for CompressedEdwardsY {
    fn eq(&self, other: &CompressedEdwardsY) -> bool {
        self.ct_eq(other).into()
    }
}

impl DefaultIsZeroes for CompressedEdwardsY {}

impl AsRef<[u8]> for CompressedEdwardsY {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; 32]> for CompressedEdwardsY {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl From<CompressedEdwardsY> for [u8; 32] {
    fn from(value: CompressedEdwardsY) -> Self {
        value.0
    }
}

impl TryFrom<&[u8]> for CompressedEdwardsY {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        <[u8; 32]>::try_from(bytes)
            .map(Self)
            .map_err(|_| Error::InvalidEncoding)
    }
}

#[cfg(feature = "serde")]
impl Serialize for CompressedEdwardsY {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serdect::array::serialize_hex_lower_or_bin(&self.0, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for CompressedEdwardsY {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        let mut bytes = [0u8; 32];
        serdect::array::deserialize_hex_or_bin(&mut bytes, deserializer)?;
        Ok(Self(bytes))
    }
}
