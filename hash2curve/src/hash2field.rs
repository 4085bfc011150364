//! Traits for hashing to field elements.
//!
//! <https://www.rfc-editor.org/rfc/rfc9380.html>

mod expand_msg;

pub use expand_msg::{xmd::*, *};

use digest::generic_array::{ArrayLength, GenericArray, typenum::Unsigned};

/// The trait for helping to convert to a field element.
pub trait FromOkm {
    /// The number of bytes needed to convert to a field element: the `L`
    /// parameter of [section 5 of RFC9380](https://www.rfc-editor.org/rfc/rfc9380.html#section-5-6).
    type Length: ArrayLength<u8>;

    /// Convert a byte sequence into a field element by big-endian wide reduction.
    fn from_okm(data: &GenericArray<u8, Self::Length>) -> Self;
}

/// Convert an arbitrary byte sequence into `N` field elements.
///
/// <https://www.rfc-editor.org/rfc/rfc9380.html#name-hash_to_field-implementatio>
///
/// `len_in_bytes = T::Length * N`
///
/// # Errors
/// See implementors of [`ExpandMsg`] for errors:
/// - [`ExpandMsgXmd`]
pub fn hash_to_field<const N: usize, E, K, T>(
    data: &[&[u8]],
    domain: &[&[u8]],
) -> Result<[T; N], E::Error>
where
    E: ExpandMsg<K>,
    T: FromOkm,
{
    let len_in_bytes = T::Length::USIZE.saturating_mul(N);
    let mut tmp = GenericArray::<u8, T::Length>::default();
    let mut expander = E::expand_message(data, domain, len_in_bytes)?;

    Ok(core::array::from_fn(|_| {
        expander.fill_bytes(&mut tmp);
        T::from_okm(&tmp)
    }))
}

#[cfg(test)]
mod tests {
    use super::{ExpandMsg, ExpandMsgXmd, Expander, FromOkm, hash_to_field};
    use digest::generic_array::{GenericArray, typenum::U16};
    use hex_literal::hex;
    use sha2::Sha256;

    /// Keeps the raw okm chunk so the chunking can be checked.
    #[derive(Debug, PartialEq)]
    struct Chunk([u8; 16]);

    impl FromOkm for Chunk {
        type Length = U16;

        fn from_okm(data: &GenericArray<u8, U16>) -> Self {
            Chunk(data.as_slice().try_into().unwrap())
        }
    }

    const DST: &[u8] = b"QUUX-V01-CS02-with-expander-SHA256-128";

    #[test]
    fn splits_uniform_bytes_in_order() {
        let [a, b] =
            hash_to_field::<2, ExpandMsgXmd<Sha256>, U16, Chunk>(&[b"abc"], &[DST]).unwrap();

        let okm = hex!("d8ccab23b5985ccea865c6c97b6e5b8350e794e603b4b97902f53a8a0d605615");
        assert_eq!(a.0, okm[..16]);
        assert_eq!(b.0, okm[16..]);
    }

    #[test]
    fn message_pieces_are_concatenated() {
        let joined =
            hash_to_field::<1, ExpandMsgXmd<Sha256>, U16, Chunk>(&[b"abc"], &[DST]).unwrap();
        let pieces =
            hash_to_field::<1, ExpandMsgXmd<Sha256>, U16, Chunk>(&[b"a", b"", b"bc"], &[DST])
                .unwrap();
        assert_eq!(joined, pieces);

        let empty = hash_to_field::<1, ExpandMsgXmd<Sha256>, U16, Chunk>(&[], &[DST]).unwrap();
        let empty_piece =
            hash_to_field::<1, ExpandMsgXmd<Sha256>, U16, Chunk>(&[b""], &[DST]).unwrap();
        assert_eq!(empty, empty_piece);
    }

    #[test]
    fn expander_can_be_read_in_pieces() {
        let mut whole = [0u8; 48];
        <ExpandMsgXmd<Sha256> as ExpandMsg<U16>>::expand_message(&[b"abc"], &[DST], 48)
            .unwrap()
            .fill_bytes(&mut whole);

        let mut split = [0u8; 48];
        let mut expander =
            <ExpandMsgXmd<Sha256> as ExpandMsg<U16>>::expand_message(&[b"abc"], &[DST], 48)
                .unwrap();
        let (head, tail) = split.split_at_mut(20);
        expander.fill_bytes(head);
        expander.fill_bytes(tail);

        assert_eq!(whole, split);
    }
}
