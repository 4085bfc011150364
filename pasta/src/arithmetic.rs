//! Pure Rust implementation of group operations on the Pallas and Vesta curves.
//!
//! Curve parameters can be found in the Zcash protocol specification, section
//! 5.4.9.6 "Pallas and Vesta":
//! <https://zips.z.cash/protocol/protocol.pdf>

pub(crate) mod field;
#[cfg(feature = "hash2curve")]
pub(crate) mod hash2curve;
pub mod pallas;
pub mod vesta;
