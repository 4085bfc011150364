//! The Pallas curve `y² = x³ + 5` over [`Fp`], of prime order `q`.

use super::field::{Fp, Fq};
use crate::Pallas;
use primeorder::{PrimeCurveParams, UncompressedBytes, point_arithmetic};

/// Element of the Pallas base field.
pub type Base = Fp;

/// Element of the Pallas scalar field.
pub type Scalar = Fq;

/// Pallas point in affine coordinates.
pub type AffinePoint = primeorder::AffinePoint<Pallas>;

/// Pallas point in projective coordinates.
pub type ProjectivePoint = primeorder::ProjectivePoint<Pallas>;

impl PrimeCurveParams for Pallas {
    type FieldElement = Fp;
    type Scalar = Fq;
    type PointArithmetic = point_arithmetic::EquationAIsZero;
    type Uncompressed = UncompressedBytes<64>;

    const EQUATION_A: Fp = Fp::ZERO;
    const EQUATION_B: Fp = Fp::from_u64(5);

    /// `(-1, 2)`
    const GENERATOR: (Fp, Fp) = (Fp::ONE.neg(), Fp::from_u64(2));

    #[cfg(feature = "basepoint-table")]
    fn mul_by_generator(k: &Fq) -> ProjectivePoint {
        static BASEPOINT_TABLE: primeorder::BasepointTable<ProjectivePoint, 33> =
            primeorder::BasepointTable::new();
        BASEPOINT_TABLE.mul(k)
    }
}

primeorder::scalar_mul_impls!(Pallas, Fq);
