//! Precomputed lookup tables of point multiples.

use ff::PrimeField;
use group::Group;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

#[cfg(all(
    feature = "basepoint-table",
    not(any(feature = "critical-section", feature = "std"))
))]
compile_error!("`basepoint-table` feature requires either `critical-section` or `std`");

#[cfg(feature = "basepoint-table")]
use core::ops::Deref;

#[cfg(all(feature = "basepoint-table", feature = "critical-section"))]
use once_cell::sync::Lazy as LazyLock;
#[cfg(all(
    feature = "basepoint-table",
    all(feature = "std", not(feature = "critical-section"))
))]
use std::sync::LazyLock;

/// Internal constant for the number of entries in a [`LookupTable`].
const LUT_SIZE: usize = 8;

/// Largest scalar encoding supported by [`Radix16Digits`], in bytes.
const MAX_SCALAR_BYTES: usize = 64;

/// Lookup table containing precomputed values `[p, 2p, 3p, ..., 8p]`
#[derive(Clone, Copy, Debug, Default)]
pub struct LookupTable<Point> {
    points: [Point; LUT_SIZE],
}

impl<Point> LookupTable<Point>
where
    Point: ConditionallySelectable + Group,
{
    /// Compute a new lookup table from the given point.
    pub fn new(p: Point) -> Self {
        let mut points = [p; LUT_SIZE];

        for j in 0..(LUT_SIZE - 1) {
            points[j + 1] = p + &points[j];
        }

        Self { points }
    }

    /// Given -8 <= x <= 8, returns x * p in constant time.
    pub fn select(&self, x: i8) -> Point {
        debug_assert!((-8..=8).contains(&x));

        // Compute xabs = |x|
        let xmask = x >> 7;
        let xabs = (x + xmask) ^ xmask;

        // Get an array element in constant time
        let mut t = Point::identity();

        for j in 1..(LUT_SIZE + 1) {
            let c = (xabs as u8).ct_eq(&(j as u8));
            t.conditional_assign(&self.points[j - 1], c);
        }
        // Now t == |x| * p.

        let neg_mask = Choice::from((xmask & 1) as u8);
        t.conditional_assign(&-t, neg_mask);
        // Now t == x * p.

        t
    }
}

/// Signed radix-16 recoding of a scalar: `k = Σ dᵢ·16ⁱ` with `-8 <= dᵢ < 8`,
/// least significant digit first.
///
/// The top digit absorbs the final carry and is either 0 or 1.
#[derive(Clone, Copy, Debug)]
pub struct Radix16Digits {
    digits: [i8; 2 * MAX_SCALAR_BYTES + 1],
    len: usize,
}

impl Radix16Digits {
    /// Recode a little-endian integer.
    ///
    /// # Panics
    ///
    /// If `bytes` is longer than 64 bytes.
    pub fn from_le_bytes(bytes: &[u8]) -> Self {
        assert!(bytes.len() <= MAX_SCALAR_BYTES, "scalar encoding too long");

        let mut digits = [0i8; 2 * MAX_SCALAR_BYTES + 1];

        for (i, byte) in bytes.iter().enumerate() {
            digits[2 * i] = (byte & 0x0f) as i8;
            digits[2 * i + 1] = (byte >> 4) as i8;
        }

        // Re-center each digit from [0, 16) into [-8, 8)
        for i in 0..(2 * bytes.len()) {
            let carry = (digits[i] + 8) >> 4;
            digits[i] -= carry << 4;
            digits[i + 1] += carry;
        }

        Self {
            digits,
            len: 2 * bytes.len() + 1,
        }
    }

    /// Recode a scalar field element from its big-endian repr.
    pub fn from_scalar<F: PrimeField>(k: &F) -> Self {
        let mut repr = k.to_repr();
        repr.as_mut().reverse();
        Self::from_le_bytes(repr.as_ref())
    }

    /// Digits, least significant first.
    pub fn as_slice(&self) -> &[i8] {
        &self.digits[..self.len]
    }
}

/// Precomputed lookup table of multiples of a base point, a.k.a. generator.
///
/// Table `i` holds `[1..=8] (256^i) G`; a scalar with `2N` or fewer radix-16 digits
/// is multiplied with `N` table lookups for each digit parity and only four doublings.
#[cfg(feature = "basepoint-table")]
pub struct BasepointTable<Point, const N: usize> {
    tables: LazyLock<[LookupTable<Point>; N]>,
}

#[cfg(feature = "basepoint-table")]
impl<Point, const N: usize> BasepointTable<Point, N>
where
    Point: ConditionallySelectable + Default + Group,
{
    /// Create a new [`BasepointTable`] which is lazily initialized on first use and can be bound
    /// to a constant.
    ///
    /// Computed using [`Point::generator()`] as the base point.
    pub const fn new() -> Self {
        /// Inner function to initialize the table.
        fn init_table<Point, const N: usize>() -> [LookupTable<Point>; N]
        where
            Point: ConditionallySelectable + Default + Group,
        {
            let mut generator = Point::generator();
            let mut res = [LookupTable::<Point>::default(); N];

            for i in 0..N {
                res[i] = LookupTable::new(generator);
                // We are storing tables spaced by two radix steps,
                // to decrease the size of the precomputed data.
                for _ in 0..8 {
                    generator = generator.double();
                }
            }

            res
        }

        Self {
            tables: LazyLock::new(init_table),
        }
    }

    /// Compute `[k] G` using the precomputed tables.
    pub fn mul(&self, k: &Point::Scalar) -> Point {
        let digits = Radix16Digits::from_scalar(k);
        let digits = digits.as_slice();
        debug_assert!(digits.len() <= 2 * N);

        let mut acc = Point::identity();

        for (i, table) in self.tables.iter().enumerate() {
            if let Some(&d) = digits.get(2 * i + 1) {
                acc += table.select(d);
            }
        }

        acc = acc.double().double().double().double();

        for (i, table) in self.tables.iter().enumerate() {
            if let Some(&d) = digits.get(2 * i) {
                acc += table.select(d);
            }
        }

        acc
    }
}

#[cfg(feature = "basepoint-table")]
impl<Point, const N: usize> Deref for BasepointTable<Point, N> {
    type Target = [LookupTable<Point>; N];

    #[inline]
    fn deref(&self) -> &[LookupTable<Point>; N] {
        &self.tables
    }
}
