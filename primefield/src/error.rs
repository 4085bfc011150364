//! Error types.

use core::fmt;

/// Errors surfaced at the non-constant-time boundary of field and curve code: decoding,
/// randomness, and input validation.
///
/// Arithmetic on secret values never produces this type. It reports failure through
/// [`subtle::Choice`] and [`subtle::CtOption`], which callers convert at the API edge.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// Bytes do not encode a valid field element or point.
    InvalidEncoding,

    /// Inversion of zero.
    NotInvertible,

    /// Square root of a quadratic nonresidue.
    NonResidue,

    /// The random number generator failed.
    RandomSource,

    /// Paired inputs (e.g. points and scalars) have different lengths.
    LengthMismatch,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Error::InvalidEncoding => "invalid encoding",
            Error::NotInvertible => "element is not invertible",
            Error::NonResidue => "element is not a quadratic residue",
            Error::RandomSource => "random number generator failure",
            Error::LengthMismatch => "input lengths do not match",
        })
    }
}

impl core::error::Error for Error {}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
