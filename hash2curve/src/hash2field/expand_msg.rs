//! `expand_message` interface `for hash_to_field`.

pub(super) mod xmd;

use digest::{
    FixedOutput, Update,
    generic_array::{ArrayLength, GenericArray},
};

/// Salt when the DST is too long
const OVERSIZE_DST_SALT: &[u8] = b"H2C-OVERSIZE-DST-";
/// Maximum domain separation tag length
const MAX_DST_LEN: usize = 255;

/// Trait for types implementing expand_message interface for `hash_to_field`.
///
/// `K` is the target security level in bytes:
/// <https://www.rfc-editor.org/rfc/rfc9380.html#section-8.9-2.2>
/// <https://www.rfc-editor.org/rfc/rfc9380.html#name-target-security-levels>
///
/// # Errors
/// See implementors of [`ExpandMsg`] for errors.
pub trait ExpandMsg<K> {
    /// Type holding data for the [`Expander`].
    type Expander<'dst>: Expander + Sized;
    /// Error returned by [`ExpandMsg::expand_message`].
    type Error: core::error::Error;

    /// Expands `msg` to the required number of bytes.
    ///
    /// Returns an expander that can be used to call `read` until enough
    /// bytes have been consumed
    fn expand_message<'dst>(
        msg: &[&[u8]],
        dst: &'dst [&'dst [u8]],
        len_in_bytes: usize,
    ) -> Result<Self::Expander<'dst>, Self::Error>;
}

/// Expander that, call `read` until enough bytes have been consumed.
pub trait Expander {
    /// Fill the array with the expanded bytes
    fn fill_bytes(&mut self, okm: &mut [u8]);
}

/// The domain separation tag
///
/// Implements [section 5.3.3 of RFC9380][dst].
///
/// [dst]: https://www.rfc-editor.org/rfc/rfc9380.html#name-using-dsts-longer-than-255-
#[derive(Debug)]
pub(crate) enum Domain<'a, L: ArrayLength<u8>> {
    /// > 255
    Hashed(GenericArray<u8, L>),
    /// <= 255
    Array(&'a [&'a [u8]]),
}

impl<'a, L: ArrayLength<u8>> Domain<'a, L> {
    pub fn xmd<X>(dst: &'a [&'a [u8]]) -> Result<Self, xmd::ExpandMsgXmdError>
    where
        X: Default + FixedOutput<OutputSize = L> + Update,
    {
        let dst_len = dst.iter().map(|slice| slice.len()).sum::<usize>();

        // https://www.rfc-editor.org/rfc/rfc9380.html#section-3.1-4.2
        if dst_len == 0 {
            Err(xmd::ExpandMsgXmdError::EmptyDst)
        } else if dst_len > MAX_DST_LEN {
            if L::USIZE > u8::MAX.into() {
                return Err(xmd::ExpandMsgXmdError::DstHash);
            }
            Ok(Self::Hashed({
                let mut hash = X::default();
                hash.update(OVERSIZE_DST_SALT);

                for slice in dst {
                    hash.update(slice);
                }

                hash.finalize_fixed()
            }))
        } else {
            Ok(Self::Array(dst))
        }
    }

    pub fn update_hash<HashT: Update>(&self, hash: &mut HashT) {
        match self {
            Self::Hashed(d) => hash.update(d),
            Self::Array(d) => {
                for d in d.iter() {
                    hash.update(d)
                }
            }
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    pub fn len(&self) -> u8 {
        match self {
            // Can't overflow because it's checked on creation.
            Self::Hashed(_) => L::USIZE as u8,
            // Can't overflow because it's checked on creation.
            Self::Array(d) => d.iter().map(|d| d.len()).sum::<usize>() as u8,
        }
    }

    #[cfg(test)]
    pub fn assert_dst(&self, bytes: &[u8]) {
        let data: &[u8] = match self {
            Domain::Hashed(d) => d,
            Domain::Array(d) => {
                assert_eq!(d.len(), 1);
                d[0]
            }
        };
        assert_eq!(data, bytes);
        assert_eq!(usize::from(self.len()), bytes.len());
    }
}
