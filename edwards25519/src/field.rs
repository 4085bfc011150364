mod element;
mod scalar;

pub use element::FieldElement;
pub use scalar::{ORDER_BYTES, Scalar};

/// Encode a field element as 32 little-endian bytes.
pub(crate) fn to_le_bytes(fe: &FieldElement) -> [u8; 32] {
    let mut bytes = fe.to_bytes();
    bytes.reverse();
    bytes
}

/// Decode a canonical little-endian field element, rejecting values `>= p`.
pub(crate) fn from_le_bytes(bytes: &[u8; 32]) -> subtle::CtOption<FieldElement> {
    let mut be = *bytes;
    be.reverse();
    FieldElement::from_bytes(&be)
}
