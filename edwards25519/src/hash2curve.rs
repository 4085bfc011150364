//! RFC 9380 hashing to edwards25519 with the `edwards25519_XMD:SHA-512_ELL2_*` suites.

use crate::{Ed25519, EdwardsPoint, FieldElement, Scalar};
use hash2curve::{
    ExpandMsgXmd, ExpandMsgXmdError, FromOkm, GroupDigest, MapToCurve, Sgn0,
    generic_array::GenericArray,
    typenum::{U16, U48},
};
use sha2::Sha512;
use subtle::Choice;

/// Application tag prepended to the suite id to form the default DST.
pub const DEFAULT_APP_TAG: &[u8] = b"curves-h2c-v1_";

/// Suite id of the random oracle encoding, [`hash_to_curve`].
pub const HASH_SUITE_RO: &[u8] = b"edwards25519_XMD:SHA-512_ELL2_RO_";

/// Suite id of the nonuniform encoding, [`encode_to_curve`].
pub const HASH_SUITE_NU: &[u8] = b"edwards25519_XMD:SHA-512_ELL2_NU_";

/// Suite id of [`hash_to_scalar`].
pub const HASH_SUITE_SCALAR: &[u8] = b"edwards25519_XMD:SHA-512_ELL2_RO_SC_";

type Expander = ExpandMsgXmd<Sha512>;

/// Hash `msg` to a uniformly distributed point of the prime order subgroup.
///
/// # Errors
///
/// If `dst` is empty.
pub fn hash_to_curve(dst: &[u8], msg: &[u8]) -> Result<EdwardsPoint, ExpandMsgXmdError> {
    Ed25519::hash_from_bytes::<Expander>(&[msg], &[dst])
}

/// Encode `msg` to a point of the prime order subgroup with the nonuniform `_NU_` suite.
///
/// # Errors
///
/// If `dst` is empty.
pub fn encode_to_curve(dst: &[u8], msg: &[u8]) -> Result<EdwardsPoint, ExpandMsgXmdError> {
    Ed25519::encode_from_bytes::<Expander>(&[msg], &[dst])
}

/// Hash `msg` to a uniformly distributed scalar.
///
/// # Errors
///
/// If `dst` is empty.
pub fn hash_to_scalar(dst: &[u8], msg: &[u8]) -> Result<Scalar, ExpandMsgXmdError> {
    <Ed25519 as GroupDigest>::hash_to_scalar::<Expander>(&[msg], &[dst])
}

impl Ed25519 {
    /// Hash `msg` to a point under the default DST, `DEFAULT_APP_TAG || HASH_SUITE_RO`.
    pub fn hash(msg: &[u8]) -> EdwardsPoint {
        Ed25519::hash_from_bytes::<Expander>(&[msg], &[DEFAULT_APP_TAG, HASH_SUITE_RO])
            .unwrap_or(EdwardsPoint::IDENTITY)
    }
}

impl MapToCurve for Ed25519 {
    type SecurityLevel = U16;
    type FieldElement = FieldElement;
    type Scalar = Scalar;
    type Point = EdwardsPoint;

    fn map_to_fraction(
        u: &FieldElement,
    ) -> (FieldElement, FieldElement, FieldElement, FieldElement) {
        u.map_to_curve_elligator2_edwards25519()
    }

    fn from_fraction(
        x_num: FieldElement,
        x_den: FieldElement,
        y_num: FieldElement,
        y_den: FieldElement,
    ) -> EdwardsPoint {
        EdwardsPoint::from_fraction(x_num, x_den, y_num, y_den)
    }

    fn clear_cofactor(point: &EdwardsPoint) -> EdwardsPoint {
        point.mul_by_cofactor()
    }
}

impl FromOkm for FieldElement {
    type Length = U48;

    fn from_okm(data: &GenericArray<u8, U48>) -> Self {
        Self::from_wide_bytes(data)
    }
}

impl FromOkm for Scalar {
    type Length = U48;

    fn from_okm(data: &GenericArray<u8, U48>) -> Self {
        Self::from_wide_bytes(data)
    }
}

impl Sgn0 for FieldElement {
    fn sgn0(&self) -> Choice {
        self.is_odd()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use ff::PrimeField;
    use hex_literal::hex;

    #[test]
    fn map_to_curve_vector() {
        // u[0] of the `_RO_` vector for the empty message
        let u = FieldElement::from_repr(hex!(
            "03fef4813c8cb5f98c6eef88fae174e6e7d5380de2b007799ac7ee712d203f3a"
        ))
        .unwrap();

        let q = Ed25519::map_to_curve(&u).to_affine();
        assert_eq!(
            q.x().to_repr(),
            hex!("6549118f65bb617b9e8b438decedc73c496eaed496806d3b2eb9ee60b88e09a7")
        );
        assert_eq!(
            q.y().to_repr(),
            hex!("7315bcc8cf47ed68048d22bad602c6680b3382a08c7c5d3f439a973fb4cf9feb")
        );
    }

    #[test]
    fn default_dst_hash() {
        let dst: std::vec::Vec<u8> = [DEFAULT_APP_TAG, HASH_SUITE_RO].concat();
        let p = Ed25519::hash(b"hello");
        assert_eq!(p, hash_to_curve(&dst, b"hello").unwrap());
        assert!(bool::from(p.is_torsion_free()));
    }

    #[test]
    fn empty_dst_is_rejected() {
        assert!(hash_to_curve(b"", b"msg").is_err());
        assert!(encode_to_curve(b"", b"msg").is_err());
        assert!(hash_to_scalar(b"", b"msg").is_err());
    }
}
