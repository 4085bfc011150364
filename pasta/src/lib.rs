#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]

mod arithmetic;

pub use crate::arithmetic::{
    pallas,
    vesta,
    field::{Fp, Fq},
};

#[cfg(feature = "hash2curve")]
pub use crate::arithmetic::hash2curve::{
    DEFAULT_APP_TAG, HASH_SUITE_NU, HASH_SUITE_RO, HASH_SUITE_SCALAR, encode_to_curve,
    hash_to_curve, hash_to_scalar,
};
#[cfg(feature = "hash2curve")]
pub use hash2curve;

pub use ff;
pub use group;
pub use primeorder::{self, Error, Result};

/// The Pallas curve: `y² = x³ + 5` over [`Fp`], of prime order `q`.
///
/// Its scalar field [`Fq`] is the base field of [`Vesta`], and vice versa,
/// which makes the pair a cycle of curves.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, PartialOrd, Ord)]
pub struct Pallas;

/// The Vesta curve: `y² = x³ + 5` over [`Fq`], of prime order `p`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, PartialOrd, Ord)]
pub struct Vesta;
