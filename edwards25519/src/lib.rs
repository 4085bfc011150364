#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![allow(non_snake_case)]
#![forbid(unsafe_code)]
#![warn(
    clippy::unwrap_used,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    trivial_casts,
    trivial_numeric_casts,
    unused,
    unused_attributes,
    unused_imports,
    unused_mut,
    unused_must_use
)]

// Internal macros. Must come first!
#[macro_use]
pub(crate) mod macros;

pub(crate) mod edwards;
pub(crate) mod field;
#[cfg(feature = "hash2curve")]
pub(crate) mod hash2curve;

pub use edwards::{AffinePoint, CompressedEdwardsY, EdwardsPoint, UncompressedEdwardsPoint};
pub use field::{FieldElement, ORDER_BYTES, Scalar};

#[cfg(feature = "hash2curve")]
pub use crate::hash2curve::{
    DEFAULT_APP_TAG, HASH_SUITE_NU, HASH_SUITE_RO, HASH_SUITE_SCALAR, encode_to_curve,
    hash_to_curve, hash_to_scalar,
};

pub use ff;
pub use group;
pub use primeorder::{Error, Result};
pub use rand_core;
pub use subtle;

/// The edwards25519 curve: `-x² + y² = 1 + d·x²·y²` over `GF(2^255 - 19)`.
///
/// The group has order `8·ℓ`; [`EdwardsPoint::GENERATOR`] spans the subgroup of prime
/// order `ℓ = 2^252 + 27742317777372353535851937790883648493`.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Ed25519;
