//! Scalars modulo the prime subgroup order `ℓ`.

use primefield::bigint::U256;

primefield::monty_field_params!(
    name: ScalarParams,
    modulus: "1000000000000000000000000000000014def9dea2f79cd65812631a5cf5d3ed",
    uint: U256,
    multiplicative_generator: 2,
    doc: "edwards25519 prime subgroup order: 2^252 + 27742317777372353535851937790883648493"
);

primefield::monty_field_element!(
    name: Scalar,
    params: ScalarParams,
    doc: "Integer modulo the order of the edwards25519 prime subgroup"
);

/// Big-endian encoding of the subgroup order `ℓ`.
pub const ORDER_BYTES: [u8; 32] = [
    0x10, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x14, 0xde, 0xf9, 0xde, 0xa2, 0xf7, 0x9c, 0xd6, 0x58, 0x12, 0x63, 0x1a, 0x5c, 0xf5, 0xd3, 0xed,
];

impl Scalar {
    /// Decode a canonical little-endian scalar, as used by RFC 8032.
    pub fn from_le_bytes(bytes: &[u8; 32]) -> subtle::CtOption<Self> {
        let mut be = *bytes;
        be.reverse();
        Self::from_bytes(&be)
    }

    /// Reduce a 64-byte little-endian integer modulo `ℓ`, as RFC 8032 does with
    /// SHA-512 outputs.
    pub fn from_bytes_mod_order_wide(bytes: &[u8; 64]) -> Self {
        let mut be = *bytes;
        be.reverse();
        Self::from_wide_bytes(&be)
    }

    /// Little-endian encoding.
    pub fn to_le_bytes(self) -> [u8; 32] {
        let mut bytes = self.to_bytes();
        bytes.reverse();
        bytes
    }
}
