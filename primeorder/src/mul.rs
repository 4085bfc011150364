//! Constant-time fixed-window scalar multiplication.
//!
//! Usable with any [`Group`] whose points can be selected in constant time, which
//! covers both the short Weierstrass points of this crate and twisted Edwards points.

use ff::PrimeField;
use group::Group;
use subtle::{ConditionallySelectable, ConstantTimeEq};

/// Number of entries in the window table: `[0]P ..= [15]P`.
const WINDOW_SIZE: usize = 16;

/// Compute `[k] P` where `k` is the big-endian encoding of a scalar.
pub fn mul<G>(point: &G, k: &G::Scalar) -> G
where
    G: Group + ConditionallySelectable,
{
    mul_by_bytes(point, k.to_repr().as_ref())
}

/// Compute `[k] P` where `k` is a big-endian integer of any length.
///
/// Four doublings and one addition per nibble, with the table entry picked by a
/// full constant-time scan. The sequence of group operations only depends on
/// `k_be.len()`.
pub fn mul_by_bytes<G>(point: &G, k_be: &[u8]) -> G
where
    G: Group + ConditionallySelectable,
{
    let mut table = [G::identity(); WINDOW_SIZE];
    table[1] = *point;

    for i in 2..WINDOW_SIZE {
        table[i] = if i % 2 == 0 {
            table[i / 2].double()
        } else {
            table[i - 1] + point
        };
    }

    let mut acc = G::identity();

    for byte in k_be {
        for nibble in [byte >> 4, byte & 0x0f] {
            acc = acc.double().double().double().double();
            acc += select(&table, nibble);
        }
    }

    acc
}

fn select<G>(table: &[G; WINDOW_SIZE], index: u8) -> G
where
    G: Group + ConditionallySelectable,
{
    let mut t = G::identity();

    for (i, entry) in table.iter().enumerate().skip(1) {
        t.conditional_assign(entry, index.ct_eq(&(i as u8)));
    }

    t
}
