pub(crate) mod affine;
pub(crate) mod extended;

pub use affine::{AffinePoint, CompressedEdwardsY, UncompressedEdwardsPoint};
pub use extended::EdwardsPoint;
