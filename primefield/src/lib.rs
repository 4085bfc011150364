#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]
#![doc = include_str!("../README.md")]

mod dev;
mod error;
mod macros;
mod monty;

pub use crate::{
    error::{Error, Result},
    monty::{MontyFieldElement, MontyFieldParams, compute_s, compute_t, num_bytes},
};
pub use bigint;
pub use ff;
pub use rand_core;
pub use subtle;
pub use zeroize;
