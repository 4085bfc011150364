//! Multi-scalar multiplication: `Σ [kᵢ] Pᵢ`.

use crate::{LookupTable, Radix16Digits};
use alloc::vec::Vec;
use ff::PrimeField;
use group::Group;
use primefield::{Error, Result};
use subtle::ConditionallySelectable;

/// Smallest Pippenger window, in bits.
const MIN_WINDOW: usize = 4;

/// Largest Pippenger window, in bits.
const MAX_WINDOW: usize = 16;

/// Constant-time multi-scalar multiplication.
///
/// Interleaves signed radix-16 windows of every scalar, so the doublings are shared
/// across all terms. An empty input yields the identity.
pub fn multi_scalar_mul<G>(points: &[G], scalars: &[G::Scalar]) -> Result<G>
where
    G: Group + ConditionallySelectable,
{
    if points.len() != scalars.len() {
        return Err(Error::LengthMismatch);
    }

    let tables: Vec<LookupTable<G>> = points.iter().copied().map(LookupTable::new).collect();
    let digits: Vec<Radix16Digits> = scalars.iter().map(Radix16Digits::from_scalar).collect();

    let Some(num_digits) = digits.first().map(|d| d.as_slice().len()) else {
        return Ok(G::identity());
    };

    let mut acc = G::identity();

    for i in (0..num_digits).rev() {
        acc = acc.double().double().double().double();

        for (table, d) in tables.iter().zip(digits.iter()) {
            acc += table.select(d.as_slice()[i]);
        }
    }

    Ok(acc)
}

/// Variable-time multi-scalar multiplication using Pippenger's bucket method.
///
/// Only for public inputs: the running time depends on the scalar values.
pub fn multi_scalar_mul_vartime<G>(points: &[G], scalars: &[G::Scalar]) -> Result<G>
where
    G: Group,
{
    if points.len() != scalars.len() {
        return Err(Error::LengthMismatch);
    }
    if points.is_empty() {
        return Ok(G::identity());
    }

    let window = window_size(points.len());

    let scalars: Vec<<G::Scalar as PrimeField>::Repr> = scalars
        .iter()
        .map(|k| {
            let mut repr = k.to_repr();
            repr.as_mut().reverse();
            repr
        })
        .collect();

    let scalar_bits = scalars[0].as_ref().len() * 8;
    let num_windows = scalar_bits.div_ceil(window);

    let mut buckets = alloc::vec![G::identity(); (1 << window) - 1];
    let mut acc = G::identity();

    for w in (0..num_windows).rev() {
        for _ in 0..window {
            acc = acc.double();
        }

        buckets.iter_mut().for_each(|b| *b = G::identity());

        for (point, k) in points.iter().zip(scalars.iter()) {
            let digit = window_digit(k.as_ref(), w * window, window);
            if digit != 0 {
                buckets[digit - 1] += point;
            }
        }

        // Σ j·Bⱼ computed as a sum of suffix sums
        let mut running = G::identity();
        let mut window_sum = G::identity();

        for bucket in buckets.iter().rev() {
            running += bucket;
            window_sum += running;
        }

        acc += window_sum;
    }

    Ok(acc)
}

/// Pick a window of about `log₂(n) - 2` bits.
fn window_size(n: usize) -> usize {
    let log2 = (usize::BITS - n.leading_zeros()) as usize;
    log2.saturating_sub(2).clamp(MIN_WINDOW, MAX_WINDOW)
}

/// Read `width` bits of a little-endian integer starting at bit `offset`.
fn window_digit(k_le: &[u8], offset: usize, width: usize) -> usize {
    let mut digit = 0usize;

    for (i, byte) in k_le.iter().enumerate().skip(offset / 8).take(3) {
        digit |= (*byte as usize) << (8 * i - (offset / 8) * 8);
    }

    (digit >> (offset % 8)) & ((1 << width) - 1)
}

#[cfg(test)]
mod tests {
    use super::{window_digit, window_size};

    #[test]
    fn window_size_is_clamped() {
        assert_eq!(window_size(1), 4);
        assert_eq!(window_size(64), 5);
        assert_eq!(window_size(1024), 9);
        assert_eq!(window_size(usize::MAX), 16);
    }

    #[test]
    fn window_digit_spans_bytes() {
        let k = [0b1010_0000u8, 0b0000_0111, 0xff];
        assert_eq!(window_digit(&k, 5, 4), 0b1101);
        assert_eq!(window_digit(&k, 0, 16), 0x07a0);
        assert_eq!(window_digit(&k, 20, 16), 0xf);
    }
}
