//! `expand_message_xmd` based on a hash function.

use core::{fmt, marker::PhantomData, ops::Mul};

use super::{Domain, ExpandMsg, Expander};
use digest::{
    FixedOutput, HashMarker, Output, Update,
    crypto_common::BlockSizeUser,
    generic_array::{
        GenericArray,
        typenum::{IsGreaterOrEqual, Prod, True, U2, Unsigned},
    },
};

/// Implements `expand_message_xmd` via the [`ExpandMsg`] trait:
/// <https://www.rfc-editor.org/rfc/rfc9380.html#name-expand_message_xmd>
///
/// # Errors
/// - `dst` contains no bytes
/// - `dst > 255 && HashT::OutputSize > 255`
/// - `len_in_bytes == 0`
/// - `len_in_bytes > u16::MAX`
/// - `len_in_bytes > 255 * HashT::OutputSize`
#[derive(Debug)]
pub struct ExpandMsgXmd<HashT>(PhantomData<HashT>)
where
    HashT: BlockSizeUser + Default + FixedOutput + HashMarker + Update;

/// Error type for [`ExpandMsgXmd`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ExpandMsgXmdError {
    /// The domain separation tag is empty.
    EmptyDst,
    /// An oversize domain separation tag needs a hash output of at most 255 bytes.
    DstHash,
    /// The requested length is zero or too large.
    Length,
}

impl fmt::Display for ExpandMsgXmdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDst => f.write_str("the domain separation tag is empty"),
            Self::DstHash => {
                f.write_str("oversize domain separation tag with hash output above 255 bytes")
            }
            Self::Length => f.write_str("requested output length is out of range"),
        }
    }
}

impl core::error::Error for ExpandMsgXmdError {}

impl<HashT, K> ExpandMsg<K> for ExpandMsgXmd<HashT>
where
    HashT: BlockSizeUser + Default + FixedOutput + HashMarker + Update,
    // If DST is larger than 255 bytes, the length of the computed DST will depend on the output
    // size of the hash, which is still not allowed to be larger than 255.
    // https://www.rfc-editor.org/rfc/rfc9380.html#section-5.3.1-6
    HashT::OutputSize: IsGreaterOrEqual<Prod<K, U2>, Output = True>,
    // The number of bits output by `HashT` MUST be at least `2 * k`.
    // https://www.rfc-editor.org/rfc/rfc9380.html#section-5.3.1-2.1
    K: Mul<U2>,
{
    type Expander<'dst> = ExpanderXmd<'dst, HashT>;
    type Error = ExpandMsgXmdError;

    fn expand_message<'dst>(
        msg: &[&[u8]],
        dst: &'dst [&'dst [u8]],
        len_in_bytes: usize,
    ) -> Result<Self::Expander<'dst>, Self::Error> {
        let len_in_bytes_u16 = u16::try_from(len_in_bytes)
            .ok()
            .filter(|len| *len != 0)
            .ok_or(ExpandMsgXmdError::Length)?;

        let b_in_bytes = HashT::OutputSize::USIZE;
        let ell = u8::try_from(len_in_bytes.div_ceil(b_in_bytes))
            .map_err(|_| ExpandMsgXmdError::Length)?;

        let domain = Domain::xmd::<HashT>(dst)?;
        let mut b_0 = HashT::default();
        b_0.update(&GenericArray::<u8, HashT::BlockSize>::default());

        for msg in msg {
            b_0.update(msg);
        }

        b_0.update(&len_in_bytes_u16.to_be_bytes());
        b_0.update(&[0]);
        domain.update_hash(&mut b_0);
        b_0.update(&[domain.len()]);
        let b_0 = b_0.finalize_fixed();

        let mut b_vals = HashT::default();
        b_vals.update(&b_0[..]);
        b_vals.update(&[1u8]);
        domain.update_hash(&mut b_vals);
        b_vals.update(&[domain.len()]);
        let b_vals = b_vals.finalize_fixed();

        Ok(ExpanderXmd {
            b_0,
            b_vals,
            domain,
            index: 1,
            offset: 0,
            ell,
        })
    }
}

/// [`Expander`] type for [`ExpandMsgXmd`].
#[derive(Debug)]
pub struct ExpanderXmd<'a, HashT>
where
    HashT: BlockSizeUser + Default + FixedOutput + HashMarker + Update,
{
    b_0: Output<HashT>,
    b_vals: Output<HashT>,
    domain: Domain<'a, HashT::OutputSize>,
    index: u8,
    offset: usize,
    ell: u8,
}

impl<HashT> ExpanderXmd<'_, HashT>
where
    HashT: BlockSizeUser + Default + FixedOutput + HashMarker + Update,
{
    fn next(&mut self) -> bool {
        if self.index < self.ell {
            self.index += 1;
            self.offset = 0;
            // b_0 XOR b_(idx - 1)
            let mut tmp = Output::<HashT>::default();
            self.b_0
                .iter()
                .zip(&self.b_vals[..])
                .enumerate()
                .for_each(|(j, (b0val, bi1val))| tmp[j] = b0val ^ bi1val);
            let mut b_vals = HashT::default();
            b_vals.update(&tmp);
            b_vals.update(&[self.index]);
            self.domain.update_hash(&mut b_vals);
            b_vals.update(&[self.domain.len()]);
            self.b_vals = b_vals.finalize_fixed();
            true
        } else {
            false
        }
    }
}

impl<HashT> Expander for ExpanderXmd<'_, HashT>
where
    HashT: BlockSizeUser + Default + FixedOutput + HashMarker + Update,
{
    fn fill_bytes(&mut self, okm: &mut [u8]) {
        for b in okm {
            if self.offset == self.b_vals.len() && !self.next() {
                return;
            }
            *b = self.b_vals[self.offset];
            self.offset += 1;
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use blake2::Blake2b512;
    use digest::generic_array::typenum::{U16, U32};
    use hex_literal::hex;
    use sha2::Sha256;

    const DST: &[u8] = b"QUUX-V01-CS02-with-expander-SHA256-128";

    fn expand<HashT, K>(msg: &[u8], dst: &[u8], out: &mut [u8]) -> Result<(), ExpandMsgXmdError>
    where
        HashT: BlockSizeUser + Default + FixedOutput + HashMarker + Update,
        HashT::OutputSize: IsGreaterOrEqual<Prod<K, U2>, Output = True>,
        K: Mul<U2>,
    {
        let dst = [dst];
        let mut expander =
            <ExpandMsgXmd<HashT> as ExpandMsg<K>>::expand_message(&[msg], &dst, out.len())?;
        expander.fill_bytes(out);
        Ok(())
    }

    /// RFC 9380 appendix K.1
    #[test]
    fn expand_message_xmd_sha256() {
        let vectors: &[(&[u8], &[u8])] = &[
            (
                b"",
                &hex!("68a985b87eb6b46952128911f2a4412bbc302a9d759667f87f7a21d803f07235"),
            ),
            (
                b"abc",
                &hex!("d8ccab23b5985ccea865c6c97b6e5b8350e794e603b4b97902f53a8a0d605615"),
            ),
            (
                b"abcdef0123456789",
                &hex!("eff31487c770a893cfb36f912fbfcbff40d5661771ca4b2cb4eafe524333f5c1"),
            ),
            (
                b"",
                &hex!(
                    "af84c27ccfd45d41914fdff5df25293e221afc53d8ad2ac06d5e3e29485dadbe"
                    "e0d121587713a3e0dd4d5e69e93eb7cd4f5df4cd103e188cf60cb02edc3edf18"
                    "eda8576c412b18ffb658e3dd6ec849469b979d444cf7b26911a08e63cf31f9dc"
                    "c541708d3491184472c2c29bb749d4286b004ceb5ee6b9a7fa5b646c993f0ced"
                ),
            ),
        ];

        for (msg, expected) in vectors {
            let mut out = [0u8; 128];
            let out = &mut out[..expected.len()];
            expand::<Sha256, U16>(msg, DST, out).unwrap();
            assert_eq!(out, *expected);
        }
    }

    #[test]
    fn expand_message_xmd_blake2b() {
        let mut out = [0u8; 32];
        expand::<Blake2b512, U32>(b"abc", b"QUUX-V01-CS02-with-expander-BLAKE2b", &mut out)
            .unwrap();
        assert_eq!(
            out,
            hex!("5f77694c9cb7ae3db85102df163fb283eb74228536e16f74f313f0ff72f3c423")
        );
    }

    #[test]
    fn oversize_dst_is_hashed() {
        let prefix: &[u8] = b"QUUX-V01-CS02-with-expander-SHA256-128-long-DST-";
        let ones = [b'1'; 235];
        let dst = [prefix, &ones[..]];

        let domain = Domain::<U32>::xmd::<Sha256>(&dst).unwrap();
        domain.assert_dst(&hex!(
            "a3187cde31f5baa4c2c0d372787e86c3f2b16c8a4e5cf229354b5e0489c1868e"
        ));

        let mut out = [0u8; 32];
        <ExpandMsgXmd<Sha256> as ExpandMsg<U16>>::expand_message(&[b""], &dst, 32)
            .unwrap()
            .fill_bytes(&mut out);
        assert_eq!(
            out,
            hex!("bcd49e8c85a1e64a3d3cd059696c8ce5ffbfad40ef85ea7364f4d8402d751d07")
        );
    }

    #[test]
    fn short_dst_is_used_verbatim() {
        let dst = [DST];
        let domain = Domain::<U32>::xmd::<Sha256>(&dst).unwrap();
        domain.assert_dst(DST);
    }

    #[test]
    fn rejects_bad_parameters() {
        let mut out = [0u8; 32];
        assert_eq!(
            expand::<Sha256, U16>(b"abc", b"", &mut out),
            Err(ExpandMsgXmdError::EmptyDst)
        );
        assert_eq!(
            expand::<Sha256, U16>(b"abc", DST, &mut []),
            Err(ExpandMsgXmdError::Length)
        );

        // ell = 256
        let result =
            <ExpandMsgXmd<Sha256> as ExpandMsg<U16>>::expand_message(&[b"abc"], &[DST], 255 * 32 + 1);
        assert_eq!(result.err(), Some(ExpandMsgXmdError::Length));
        let result =
            <ExpandMsgXmd<Sha256> as ExpandMsg<U16>>::expand_message(&[b"abc"], &[DST], 255 * 32);
        assert!(result.is_ok());

        let result =
            <ExpandMsgXmd<Sha256> as ExpandMsg<U16>>::expand_message(&[b"abc"], &[DST], 1 << 16);
        assert_eq!(result.err(), Some(ExpandMsgXmdError::Length));
    }
}
