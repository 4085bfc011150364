//! The Vesta curve `y² = x³ + 5` over [`Fq`], of prime order `p`.

use super::field::{Fq, Fp};
use crate::Vesta;
use primeorder::{PrimeCurveParams, UncompressedBytes, point_arithmetic};

/// Element of the Vesta base field.
pub type Base = Fq;

/// Element of the Vesta scalar field.
pub type Scalar = Fp;

/// Vesta point in affine coordinates.
pub type AffinePoint = primeorder::AffinePoint<Vesta>;

/// Vesta point in projective coordinates.
pub type ProjectivePoint = primeorder::ProjectivePoint<Vesta>;

impl PrimeCurveParams for Vesta {
    type FieldElement = Fq;
    type Scalar = Fp;
    type PointArithmetic = point_arithmetic::EquationAIsZero;
    type Uncompressed = UncompressedBytes<64>;

    const EQUATION_A: Fq = Fq::ZERO;
    const EQUATION_B: Fq = Fq::from_u64(5);

    /// `(-1, 2)`, as on Pallas
    const GENERATOR: (Fq, Fq) = (Fq::ONE.neg(), Fq::from_u64(2));

    #[cfg(feature = "basepoint-table")]
    fn mul_by_generator(k: &Fp) -> ProjectivePoint {
        static BASEPOINT_TABLE: primeorder::BasepointTable<ProjectivePoint, 33> =
            primeorder::BasepointTable::new();
        BASEPOINT_TABLE.mul(k)
    }
}

primeorder::scalar_mul_impls!(Vesta, Fp);
