//! RFC 9380 hashing to Pallas with the `pallas_XMD:BLAKE2b_SSWU_RO_` suite.
//!
//! Pallas has `A = 0`, so the simplified SWU map runs on the 3-isogenous curve
//! `E': y² = x³ + A'·x + 1265` and the image is pulled back through the isogeny.

use super::{
    field::{Fp, Fq},
    pallas::ProjectivePoint,
};
use crate::Pallas;
use blake2::Blake2b512;
use hash2curve::{
    ExpandMsgXmd, ExpandMsgXmdError, FromOkm, GroupDigest, Isogeny, IsogenyCoefficients,
    MapToCurve, OsswuMap, OsswuMapParams, Sgn0, generic_array::GenericArray,
    sswu_isogeny_map, typenum::{U16, U64},
};
use rand_core::RngCore;
use subtle::Choice;

/// Application tag prepended to the suite id to form the default DST.
pub const DEFAULT_APP_TAG: &[u8] = b"curves-h2c-v1_";

/// Suite id of the random oracle encoding, [`hash_to_curve`].
pub const HASH_SUITE_RO: &[u8] = b"pallas_XMD:BLAKE2b_SSWU_RO_";

/// Suite id of the nonuniform encoding, [`encode_to_curve`].
pub const HASH_SUITE_NU: &[u8] = b"pallas_XMD:BLAKE2b_SSWU_NU_";

/// Suite id of [`hash_to_scalar`].
pub const HASH_SUITE_SCALAR: &[u8] = b"pallas_XMD:BLAKE2b_SSWU_RO_SC_";

type Expander = ExpandMsgXmd<Blake2b512>;

/// Hash `msg` to a uniformly distributed Pallas point with the `_RO_` suite.
///
/// # Errors
///
/// If `dst` is empty.
pub fn hash_to_curve(dst: &[u8], msg: &[u8]) -> Result<ProjectivePoint, ExpandMsgXmdError> {
    Pallas::hash_from_bytes::<Expander>(&[msg], &[dst])
}

/// Encode `msg` to a Pallas point with the nonuniform `_NU_` suite.
///
/// # Errors
///
/// If `dst` is empty.
pub fn encode_to_curve(dst: &[u8], msg: &[u8]) -> Result<ProjectivePoint, ExpandMsgXmdError> {
    Pallas::encode_from_bytes::<Expander>(&[msg], &[dst])
}

/// Hash `msg` to a uniformly distributed Pallas scalar.
///
/// # Errors
///
/// If `dst` is empty.
pub fn hash_to_scalar(dst: &[u8], msg: &[u8]) -> Result<Fq, ExpandMsgXmdError> {
    <Pallas as GroupDigest>::hash_to_scalar::<Expander>(&[msg], &[dst])
}

impl Pallas {
    /// Hash `msg` to a point under the default DST, `DEFAULT_APP_TAG || HASH_SUITE_RO`.
    pub fn hash(msg: &[u8]) -> ProjectivePoint {
        // the default DST is short and non-empty, so expansion cannot fail
        Pallas::hash_from_bytes::<Expander>(&[msg], &[DEFAULT_APP_TAG, HASH_SUITE_RO])
            .unwrap_or(ProjectivePoint::IDENTITY)
    }

    /// Sample a uniformly random point by mapping two random base field elements.
    ///
    /// Unlike [`group::Group::random`], the discrete logarithm of the result is
    /// unknown to the caller.
    ///
    /// # Errors
    ///
    /// If `rng` fails.
    pub fn random_point(mut rng: impl RngCore) -> primeorder::Result<ProjectivePoint> {
        let u0 = Fp::try_random(&mut rng)?;
        let u1 = Fp::try_random(&mut rng)?;
        Ok(Self::map_to_curve(&u0) + Self::map_to_curve(&u1))
    }
}

impl MapToCurve for Pallas {
    type SecurityLevel = U16;
    type FieldElement = Fp;
    type Scalar = Fq;
    type Point = ProjectivePoint;

    fn map_to_fraction(u: &Fp) -> (Fp, Fp, Fp, Fp) {
        sswu_isogeny_map(u)
    }

    fn from_fraction(x_num: Fp, x_den: Fp, y_num: Fp, y_den: Fp) -> ProjectivePoint {
        ProjectivePoint::from_fraction(x_num, x_den, y_num, y_den)
    }

    /// Pallas has prime order, so this is the identity map.
    fn clear_cofactor(point: &ProjectivePoint) -> ProjectivePoint {
        *point
    }
}

impl FromOkm for Fp {
    type Length = U64;

    fn from_okm(data: &GenericArray<u8, U64>) -> Self {
        Self::from_wide_bytes(data)
    }
}

impl FromOkm for Fq {
    type Length = U64;

    fn from_okm(data: &GenericArray<u8, U64>) -> Self {
        Self::from_wide_bytes(data)
    }
}

impl Sgn0 for Fp {
    fn sgn0(&self) -> Choice {
        self.is_odd()
    }
}

impl OsswuMap for Fp {
    // p - 1 = 2^32 * c2
    const PARAMS: OsswuMapParams<Self> = OsswuMapParams {
        c1: 32,
        c2: &[
            0x094c_f91b_992d_30ed,
            0x0000_0000_2246_98fc,
            0x0000_0000_0000_0000,
            0x0000_0000_4000_0000,
        ],
        c3: &[
            0x04a6_7c8d_cc96_9876,
            0x0000_0000_1123_4c7e,
            0x0000_0000_0000_0000,
            0x0000_0000_2000_0000,
        ],
        c4: &[0xffff_ffff],
        c5: &[0x8000_0000],
        c6: Fp::from_hex_vartime(
            "3532c03204fba871900f0174278bfa48a84bde8a976e4e47a58f2ab23e9ea126",
        ),
        c7: Fp::from_hex_vartime(
            "3dc271c8308fca72f0b7a1a19440ccc7325f98710655bac58f7f70a4ccefc9e9",
        ),
        map_a: Fp::from_hex_vartime(
            "18354a2eb0ea8c9c49be2d7258370742b74134581a27a59f92bb4b0b657a014b",
        ),
        map_b: Fp::from_u64(1265),
        z: Fp::from_u64(13).neg(),
    };
}

impl Isogeny for Fp {
    const COEFFICIENTS: IsogenyCoefficients<Self> = IsogenyCoefficients {
        xnum: &[
            Fp::from_hex_vartime(
                "1c71c71c71c71c71c71c71c71c71c71c8102eea8e7b06eb6eebec06955555580",
            ),
            Fp::from_hex_vartime(
                "17329b9ec525375398c7d7ac3d98fd13380af066cfeb6d690eb64faef37ea4f7",
            ),
            Fp::from_hex_vartime(
                "3509afd51872d88e267c7ffa51cf412a0f93b82ee4b994958cf863b02814fb76",
            ),
            Fp::from_hex_vartime(
                "0e38e38e38e38e38e38e38e38e38e38e4081775473d8375b775f6034aaaaaaab",
            ),
        ],
        xden: &[
            Fp::from_hex_vartime(
                "325669becaecd5d11d13bf2a7f22b105b4abf9fb9a1fc81c2aa3af1eae5b6604",
            ),
            Fp::from_hex_vartime(
                "1d572e7ddc099cff5a607fcce0494a799c434ac1c96b6980c47f2ab668bcd71f",
            ),
            Fp::ONE,
        ],
        ynum: &[
            Fp::from_hex_vartime(
                "025ed097b425ed097b425ed097b425ed0ac03e8e134eb3e493e53ab371c71c4f",
            ),
            Fp::from_hex_vartime(
                "3fb98ff0d2ddcadd303216cce1db9ff11765e924f745937802e2be87d225b234",
            ),
            Fp::from_hex_vartime(
                "1a84d7ea8c396c47133e3ffd28e7a09507c9dc17725cca4ac67c31d8140a7dbb",
            ),
            Fp::from_hex_vartime(
                "1a12f684bda12f684bda12f684bda12f7642b01ad461bad25ad985b5e38e38e4",
            ),
        ],
        yden: &[
            Fp::from_hex_vartime(
                "40000000000000000000000000000000224698fc094cf91b992d30ecfffffde5",
            ),
            Fp::from_hex_vartime(
                "17033d3c60c68173573b3d7f7d681310d976bbfabbc5661d4d90ab820b12320a",
            ),
            Fp::from_hex_vartime(
                "0c02c5bcca0e6b7f0790bfb3506defb65941a3a4a97aa1b35a28279b1d1b42ae",
            ),
            Fp::ONE,
        ],
    };
}
