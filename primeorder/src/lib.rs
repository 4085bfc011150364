#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]
#![doc = include_str!("../README.md")]

#[cfg(feature = "alloc")]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod point_arithmetic;

mod affine;
#[cfg(feature = "dev")]
mod dev;
mod lookup_table;
mod macros;
#[cfg(feature = "alloc")]
pub mod msm;
pub mod mul;
mod projective;

pub use crate::{
    affine::{AffinePoint, UncompressedBytes},
    lookup_table::{LookupTable, Radix16Digits},
    projective::ProjectivePoint,
};
pub use ff::{self, Field, PrimeField};
pub use group;
pub use primefield::{Error, Result};
pub use subtle;

#[cfg(feature = "basepoint-table")]
pub use crate::lookup_table::BasepointTable;

use core::fmt::Debug;

/// Parameters for elliptic curves of prime order which can be described by the
/// short Weierstrass equation `y² = x³ + ax + b`.
///
/// Both `FieldElement` and `Scalar` must use big-endian [`PrimeField::Repr`]
/// encodings. Point encodings reverse them into little-endian coordinates.
pub trait PrimeCurveParams:
    Copy + Clone + Debug + Default + Eq + PartialEq + Send + Sync + Sized + 'static
{
    /// Base field element type.
    type FieldElement: PrimeField;

    /// Scalar field element type.
    type Scalar: PrimeField;

    /// Point arithmetic formulas, selected by the properties of `a`.
    type PointArithmetic: point_arithmetic::PointArithmetic<Self>;

    /// Byte array holding an uncompressed point: `2 * NUM_BYTES` bytes.
    type Uncompressed: Copy + Default + Send + Sync + 'static + AsRef<[u8]> + AsMut<[u8]>;

    /// Coefficient `a` in the curve equation.
    const EQUATION_A: Self::FieldElement;

    /// Coefficient `b` in the curve equation.
    const EQUATION_B: Self::FieldElement;

    /// Generator point's affine coordinates: (x, y).
    const GENERATOR: (Self::FieldElement, Self::FieldElement);

    /// Compute `[k] G`.
    ///
    /// Curves with a precomputed basepoint table override this.
    fn mul_by_generator(k: &Self::Scalar) -> ProjectivePoint<Self> {
        ProjectivePoint::mul(&ProjectivePoint::GENERATOR, k)
    }
}
