//! Field elements which use an internal Montgomery form representation, implemented using
//! `crypto-bigint`'s [`Residue`].

mod sqrt;

use crate::{Error, Result};
use bigint::{
    Limb, Uint,
    modular::constant_mod::{Residue, ResidueParams},
};
use core::{
    cmp::Ordering,
    fmt,
    iter::{Product, Sum},
    ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};
use ff::{Field, FromUniformBytes, PrimeField};
use rand_core::RngCore;
use subtle::{
    Choice, ConditionallySelectable, ConstantTimeEq, ConstantTimeGreater, ConstantTimeLess,
    CtOption,
};

/// Largest integer, in bytes, which the byte codecs will pad into a [`Uint`].
const MAX_UINT_BYTES: usize = 128;

/// Extension trait for defining additional field parameters beyond the ones provided by
/// [`ResidueParams`], typically declared with [`monty_field_params!`](crate::monty_field_params).
///
/// The Montgomery constants (`R`, `R^2`, `R^3` and `-p^-1 mod 2^w`) come from [`ResidueParams`].
pub trait MontyFieldParams<const LIMBS: usize>: ResidueParams<LIMBS> {
    /// Serialized representation of a field element: a big-endian byte array.
    type Repr: Copy + Default + Send + Sync + 'static + AsRef<[u8]> + AsMut<[u8]>;

    /// Size of a field element when serialized as bytes.
    const NUM_BYTES: usize;

    /// Field modulus as a big-endian hexadecimal string.
    const MODULUS_HEX: &'static str;

    /// A fixed multiplicative generator of `modulus - 1` order.
    ///
    /// This element must also be a quadratic nonresidue.
    const MULTIPLICATIVE_GENERATOR: u64;
}

/// Field element type which uses an internal Montgomery form representation.
pub struct MontyFieldElement<MOD, const LIMBS: usize>
where
    MOD: MontyFieldParams<LIMBS>,
{
    inner: Residue<MOD, LIMBS>,
}

impl<MOD, const LIMBS: usize> MontyFieldElement<MOD, LIMBS>
where
    MOD: MontyFieldParams<LIMBS>,
{
    /// Zero element (additive identity).
    pub const ZERO: Self = Self {
        inner: Residue::ZERO,
    };

    /// Multiplicative identity.
    pub const ONE: Self = Self {
        inner: Residue::ONE,
    };

    /// Number of limbs used by the internal integer representation.
    pub const LIMBS: usize = LIMBS;

    /// Number of bits in the modulus.
    pub const NUM_BITS: u32 = MOD::MODULUS.bits_vartime() as u32;

    /// `p - 2`, the inversion exponent.
    const P_MINUS_2: Uint<LIMBS> = MOD::MODULUS.wrapping_sub(&Uint::from_u8(2));

    /// `(p - 1) / 2`, the Legendre symbol exponent.
    const P_MINUS_1_OVER_2: Uint<LIMBS> = MOD::MODULUS.shr_vartime(1);

    /// `2^(Limb::BITS * LIMBS) mod p`, the weight of one full-width chunk in a wide reduction.
    const CHUNK_WEIGHT: Residue<MOD, LIMBS> = Residue::new(&MOD::R);

    /// Decode field element from its canonical big-endian bytestring representation.
    ///
    /// Returns `None` unless the encoded integer is smaller than the modulus.
    #[inline]
    pub fn from_bytes(repr: &MOD::Repr) -> CtOption<Self> {
        Self::from_uint(&uint_from_be_slice(repr.as_ref()))
    }

    /// Decode field element from a canonical big-endian byte slice.
    ///
    /// The slice must be exactly [`MontyFieldParams::NUM_BYTES`] long.
    pub fn from_slice(slice: &[u8]) -> Result<Self> {
        if slice.len() != MOD::NUM_BYTES {
            return Err(Error::InvalidEncoding);
        }

        let mut repr = MOD::Repr::default();
        repr.as_mut().copy_from_slice(slice);
        Option::from(Self::from_bytes(&repr)).ok_or(Error::InvalidEncoding)
    }

    /// Reduce a big-endian integer of any length modulo `p`.
    ///
    /// This is the wide reduction used for hashing to the field and for uniform sampling: when
    /// the input is at least `k` bits longer than the modulus, the output bias is below `2^-k`.
    pub fn from_wide_bytes(bytes: &[u8]) -> Self {
        let chunk_len = Uint::<LIMBS>::BYTES;
        let (head, rest) = bytes.split_at(bytes.len() % chunk_len);
        let mut acc: Residue<MOD, LIMBS> = Residue::new(&uint_from_be_slice(head));

        for chunk in rest.chunks_exact(chunk_len) {
            let lo: Residue<MOD, LIMBS> = Residue::new(&Uint::from_be_slice(chunk));
            acc = Residue::add(&Residue::mul(&acc, &Self::CHUNK_WEIGHT), &lo);
        }

        Self { inner: acc }
    }

    /// Decode a field element from big-endian hex.
    ///
    /// This is primarily intended for defining constants using hex literals.
    ///
    /// # Panics
    ///
    /// - When hex is malformed
    /// - When input is the wrong length
    /// - If input overflows the modulus
    pub const fn from_hex_vartime(hex: &str) -> Self {
        let uint = Uint::<LIMBS>::from_be_hex(hex);
        let (_, borrow) = uint.sbb(&MOD::MODULUS, Limb::ZERO);
        assert!(borrow.0 != 0, "hex encoded field element overflows modulus");
        Self::from_uint_reduced(&uint)
    }

    /// Convert [`Uint`] into [`MontyFieldElement`], first converting it into Montgomery form:
    ///
    /// ```text
    /// w * R^2 * R^-1 mod p = wR mod p
    /// ```
    ///
    /// Reduces the input modulo `p`.
    #[inline]
    pub const fn from_uint_reduced(uint: &Uint<LIMBS>) -> Self {
        Self {
            inner: Residue::new(uint),
        }
    }

    /// Convert [`Uint`] into [`MontyFieldElement`].
    ///
    /// # Returns
    ///
    /// The `CtOption` equivalent of `None` if the input overflows the modulus.
    #[inline]
    pub fn from_uint(uint: &Uint<LIMBS>) -> CtOption<Self> {
        let is_some = uint.ct_lt(&MOD::MODULUS);
        CtOption::new(Self::from_uint_reduced(uint), is_some)
    }

    /// Convert a `u64` into a [`MontyFieldElement`].
    ///
    /// # Panics
    ///
    /// If the modulus is 64-bits or smaller.
    #[inline]
    pub const fn from_u64(w: u64) -> Self {
        if Self::NUM_BITS <= 64 {
            panic!("modulus is too small to ensure all u64s are in range");
        }

        Self::from_uint_reduced(&Uint::from_u64(w))
    }

    /// Returns the big-endian encoding of this field element.
    #[inline]
    pub fn to_bytes(self) -> MOD::Repr {
        let mut padded = [0u8; MAX_UINT_BYTES];
        let padded = &mut padded[MAX_UINT_BYTES - Uint::<LIMBS>::BYTES..];

        for (chunk, word) in padded
            .rchunks_exact_mut(Limb::BYTES)
            .zip(self.to_canonical().as_words())
        {
            chunk.copy_from_slice(&word.to_be_bytes());
        }

        let mut repr = MOD::Repr::default();
        let offset = padded.len() - MOD::NUM_BYTES;
        repr.as_mut().copy_from_slice(&padded[offset..]);
        repr
    }

    /// Determine if this field element is odd: `self mod 2 == 1`.
    ///
    /// This is `sgn0` for prime fields.
    #[inline]
    pub fn is_odd(&self) -> Choice {
        Choice::from((self.to_canonical().as_words()[0] & 1) as u8)
    }

    /// Determine if this field element is even: `self mod 2 == 0`.
    #[inline]
    pub fn is_even(&self) -> Choice {
        !self.is_odd()
    }

    /// Determine if this field element is zero.
    #[inline]
    pub fn is_zero(&self) -> Choice {
        self.ct_eq(&Self::ZERO)
    }

    /// Determine if this field element is one.
    #[inline]
    pub fn is_one(&self) -> Choice {
        self.ct_eq(&Self::ONE)
    }

    /// Translate field element out of the Montgomery domain, returning a [`Uint`] in canonical
    /// form.
    #[inline]
    pub const fn to_canonical(self) -> Uint<LIMBS> {
        self.inner.retrieve()
    }

    /// Add elements.
    #[inline]
    pub const fn add(&self, rhs: &Self) -> Self {
        Self {
            inner: Residue::add(&self.inner, &rhs.inner),
        }
    }

    /// Double element (add it to itself).
    #[inline]
    #[must_use]
    pub const fn double(&self) -> Self {
        self.add(self)
    }

    /// Subtract elements.
    #[inline]
    pub const fn sub(&self, rhs: &Self) -> Self {
        Self {
            inner: Residue::sub(&self.inner, &rhs.inner),
        }
    }

    /// Multiply elements.
    #[inline]
    pub const fn multiply(&self, rhs: &Self) -> Self {
        Self {
            inner: Residue::mul(&self.inner, &rhs.inner),
        }
    }

    /// Negate element.
    #[inline]
    pub const fn neg(&self) -> Self {
        Self {
            inner: Residue::neg(&self.inner),
        }
    }

    /// Compute modular square.
    #[inline]
    #[must_use]
    pub const fn square(&self) -> Self {
        Self {
            inner: Residue::square(&self.inner),
        }
    }

    /// Compute field inversion: `1 / self`.
    #[inline]
    pub fn invert(&self) -> CtOption<Self> {
        let (inner, is_some) = Residue::invert(&self.inner);
        CtOption::new(Self { inner }, is_some.into())
    }

    /// Compute field inversion, reporting [`Error::NotInvertible`] for zero.
    ///
    /// Branches on whether `self` is zero, so only use it where that is public.
    pub fn try_invert(&self) -> Result<Self> {
        Option::from(self.invert()).ok_or(Error::NotInvertible)
    }

    /// Compute field inversion as a `const fn`. Panics if `self` is zero.
    ///
    /// This is mainly intended for inverting constants at compile time.
    pub const fn const_invert(&self) -> Self {
        let words = self.inner.retrieve().to_words();
        let mut is_zero = true;
        let mut i = 0;
        while i < LIMBS {
            is_zero &= words[i] == 0;
            i += 1;
        }
        assert!(!is_zero, "input to invert should be non-zero");

        self.pow_uint(&Self::P_MINUS_2)
    }

    /// Compute `self / rhs`, or `None` if `rhs` is zero.
    pub fn try_div(&self, rhs: &Self) -> CtOption<Self> {
        rhs.invert().map(|inv| self.multiply(&inv))
    }

    /// Legendre symbol test: returns `Choice(1)` if `self` is a nonzero quadratic residue.
    pub fn is_square_nonzero(&self) -> Choice {
        self.pow_uint(&Self::P_MINUS_1_OVER_2).is_one()
    }

    /// Returns `self^exp` for an exponent of the same width as the modulus.
    ///
    /// Constant time with respect to both `self` and `exp`.
    pub(crate) const fn pow_uint(&self, exp: &Uint<LIMBS>) -> Self {
        Self {
            inner: Residue::pow(&self.inner, exp),
        }
    }

    /// Returns `self^exp`, where `exp` is a little-endian integer exponent.
    ///
    /// **This operation is variable time with respect to the exponent `exp`.**
    ///
    /// If `exp` is fixed, this operation is constant time. Note that `exp` will still be branched
    /// upon and should NOT be a secret.
    pub const fn pow_vartime(&self, exp: &[u64]) -> Self {
        let mut res = Self::ONE;
        let mut i = exp.len();

        while i > 0 {
            i -= 1;
            let mut j = 64;

            while j > 0 {
                j -= 1;
                res = res.square();

                if ((exp[i] >> j) & 1) == 1 {
                    res = res.multiply(self);
                }
            }
        }

        res
    }

    /// Returns `self^(2^n) mod p`.
    ///
    /// **This operation is variable time with respect to the exponent `n`.**
    ///
    /// If the exponent is fixed, this operation is constant time.
    pub const fn sqn_vartime(&self, n: usize) -> Self {
        let mut x = *self;
        let mut i = 0;
        while i < n {
            x = x.square();
            i += 1;
        }
        x
    }

    /// Generate a uniformly random field element by reducing `NUM_BYTES + 64` random bytes.
    pub fn random(mut rng: impl RngCore) -> Self {
        let mut bytes = [0u8; MAX_UINT_BYTES];
        let len = (MOD::NUM_BYTES + 64).min(bytes.len());
        rng.fill_bytes(&mut bytes[..len]);
        Self::from_wide_bytes(&bytes[..len])
    }

    /// Generate a uniformly random field element, surfacing RNG failures.
    pub fn try_random(mut rng: impl RngCore) -> Result<Self> {
        let mut bytes = [0u8; MAX_UINT_BYTES];
        let len = (MOD::NUM_BYTES + 64).min(bytes.len());
        rng.try_fill_bytes(&mut bytes[..len])
            .map_err(|_| Error::RandomSource)?;
        Ok(Self::from_wide_bytes(&bytes[..len]))
    }
}

//
// `ff` crate trait impls
//

impl<MOD, const LIMBS: usize> Field for MontyFieldElement<MOD, LIMBS>
where
    MOD: MontyFieldParams<LIMBS>,
{
    const ZERO: Self = Self::ZERO;
    const ONE: Self = Self::ONE;

    fn random(rng: impl RngCore) -> Self {
        Self::random(rng)
    }

    fn is_zero(&self) -> Choice {
        self.is_zero()
    }

    fn square(&self) -> Self {
        self.square()
    }

    fn double(&self) -> Self {
        self.double()
    }

    fn invert(&self) -> CtOption<Self> {
        self.invert()
    }

    fn sqrt(&self) -> CtOption<Self> {
        self.sqrt()
    }

    fn sqrt_ratio(num: &Self, div: &Self) -> (Choice, Self) {
        ff::helpers::sqrt_ratio_generic(num, div)
    }
}

impl<MOD, const LIMBS: usize> PrimeField for MontyFieldElement<MOD, LIMBS>
where
    MOD: MontyFieldParams<LIMBS>,
{
    type Repr = MOD::Repr;

    const MODULUS: &'static str = MOD::MODULUS_HEX;
    const NUM_BITS: u32 = Self::NUM_BITS;
    const CAPACITY: u32 = <Self as PrimeField>::NUM_BITS - 1;
    const TWO_INV: Self = Self::from_u64(2).const_invert();
    const MULTIPLICATIVE_GENERATOR: Self = Self::from_u64(MOD::MULTIPLICATIVE_GENERATOR);
    const S: u32 = compute_s(&MOD::MODULUS);
    const ROOT_OF_UNITY: Self =
        Self::from_u64(MOD::MULTIPLICATIVE_GENERATOR).pow_uint(&compute_t(&MOD::MODULUS));
    const ROOT_OF_UNITY_INV: Self = Self::ROOT_OF_UNITY.const_invert();
    const DELTA: Self = Self::from_u64(MOD::MULTIPLICATIVE_GENERATOR)
        .sqn_vartime(<Self as PrimeField>::S as usize);

    fn from_repr(bytes: Self::Repr) -> CtOption<Self> {
        Self::from_bytes(&bytes)
    }

    fn to_repr(&self) -> Self::Repr {
        self.to_bytes()
    }

    fn is_odd(&self) -> Choice {
        self.is_odd()
    }
}

impl<MOD, const LIMBS: usize> FromUniformBytes<64> for MontyFieldElement<MOD, LIMBS>
where
    MOD: MontyFieldParams<LIMBS>,
{
    fn from_uniform_bytes(bytes: &[u8; 64]) -> Self {
        Self::from_wide_bytes(bytes)
    }
}

//
// Arithmetic trait impls
//

/// Emit a `core::ops` trait wrapper for an inherent method.
macro_rules! monty_field_op {
    ($op:tt, $func:ident, $inner_func:ident) => {
        impl<MOD, const LIMBS: usize> $op for MontyFieldElement<MOD, LIMBS>
        where
            MOD: MontyFieldParams<LIMBS>,
        {
            type Output = MontyFieldElement<MOD, LIMBS>;

            #[inline]
            fn $func(self, rhs: MontyFieldElement<MOD, LIMBS>) -> MontyFieldElement<MOD, LIMBS> {
                <MontyFieldElement<MOD, LIMBS>>::$inner_func(&self, &rhs)
            }
        }

        impl<MOD, const LIMBS: usize> $op<&Self> for MontyFieldElement<MOD, LIMBS>
        where
            MOD: MontyFieldParams<LIMBS>,
        {
            type Output = MontyFieldElement<MOD, LIMBS>;

            #[inline]
            fn $func(self, rhs: &MontyFieldElement<MOD, LIMBS>) -> MontyFieldElement<MOD, LIMBS> {
                <MontyFieldElement<MOD, LIMBS>>::$inner_func(&self, rhs)
            }
        }

        impl<MOD, const LIMBS: usize> $op<Self> for &MontyFieldElement<MOD, LIMBS>
        where
            MOD: MontyFieldParams<LIMBS>,
        {
            type Output = MontyFieldElement<MOD, LIMBS>;

            #[inline]
            fn $func(self, rhs: &MontyFieldElement<MOD, LIMBS>) -> MontyFieldElement<MOD, LIMBS> {
                <MontyFieldElement<MOD, LIMBS>>::$inner_func(self, rhs)
            }
        }
    };
}

monty_field_op!(Add, add, add);
monty_field_op!(Sub, sub, sub);
monty_field_op!(Mul, mul, multiply);

impl<MOD, const LIMBS: usize> AddAssign<Self> for MontyFieldElement<MOD, LIMBS>
where
    MOD: MontyFieldParams<LIMBS>,
{
    #[inline]
    fn add_assign(&mut self, other: MontyFieldElement<MOD, LIMBS>) {
        *self = *self + other;
    }
}

impl<MOD, const LIMBS: usize> AddAssign<&Self> for MontyFieldElement<MOD, LIMBS>
where
    MOD: MontyFieldParams<LIMBS>,
{
    #[inline]
    fn add_assign(&mut self, other: &MontyFieldElement<MOD, LIMBS>) {
        *self = *self + other;
    }
}

impl<MOD, const LIMBS: usize> SubAssign<Self> for MontyFieldElement<MOD, LIMBS>
where
    MOD: MontyFieldParams<LIMBS>,
{
    #[inline]
    fn sub_assign(&mut self, other: MontyFieldElement<MOD, LIMBS>) {
        *self = *self - other;
    }
}

impl<MOD, const LIMBS: usize> SubAssign<&Self> for MontyFieldElement<MOD, LIMBS>
where
    MOD: MontyFieldParams<LIMBS>,
{
    #[inline]
    fn sub_assign(&mut self, other: &MontyFieldElement<MOD, LIMBS>) {
        *self = *self - other;
    }
}

impl<MOD, const LIMBS: usize> MulAssign<&Self> for MontyFieldElement<MOD, LIMBS>
where
    MOD: MontyFieldParams<LIMBS>,
{
    #[inline]
    fn mul_assign(&mut self, other: &MontyFieldElement<MOD, LIMBS>) {
        *self = *self * other;
    }
}

impl<MOD, const LIMBS: usize> MulAssign for MontyFieldElement<MOD, LIMBS>
where
    MOD: MontyFieldParams<LIMBS>,
{
    #[inline]
    fn mul_assign(&mut self, other: MontyFieldElement<MOD, LIMBS>) {
        *self = *self * other;
    }
}

impl<MOD, const LIMBS: usize> Neg for MontyFieldElement<MOD, LIMBS>
where
    MOD: MontyFieldParams<LIMBS>,
{
    type Output = MontyFieldElement<MOD, LIMBS>;

    #[inline]
    fn neg(self) -> MontyFieldElement<MOD, LIMBS> {
        <MontyFieldElement<MOD, LIMBS>>::neg(&self)
    }
}

impl<MOD, const LIMBS: usize> Neg for &MontyFieldElement<MOD, LIMBS>
where
    MOD: MontyFieldParams<LIMBS>,
{
    type Output = MontyFieldElement<MOD, LIMBS>;

    #[inline]
    fn neg(self) -> MontyFieldElement<MOD, LIMBS> {
        <MontyFieldElement<MOD, LIMBS>>::neg(self)
    }
}

impl<MOD, const LIMBS: usize> Sum for MontyFieldElement<MOD, LIMBS>
where
    MOD: MontyFieldParams<LIMBS>,
{
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.reduce(Add::add).unwrap_or(Self::ZERO)
    }
}

impl<'a, MOD, const LIMBS: usize> Sum<&'a Self> for MontyFieldElement<MOD, LIMBS>
where
    MOD: MontyFieldParams<LIMBS>,
{
    fn sum<I: Iterator<Item = &'a MontyFieldElement<MOD, LIMBS>>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl<MOD, const LIMBS: usize> Product for MontyFieldElement<MOD, LIMBS>
where
    MOD: MontyFieldParams<LIMBS>,
{
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.reduce(Mul::mul).unwrap_or(Self::ONE)
    }
}

impl<'a, MOD: MontyFieldParams<LIMBS>, const LIMBS: usize>
    Product<&'a MontyFieldElement<MOD, LIMBS>> for MontyFieldElement<MOD, LIMBS>
{
    fn product<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().product()
    }
}

//
// `subtle` trait impls
//

impl<MOD, const LIMBS: usize> ConditionallySelectable for MontyFieldElement<MOD, LIMBS>
where
    MOD: MontyFieldParams<LIMBS>,
{
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            inner: Residue::conditional_select(&a.inner, &b.inner, choice),
        }
    }
}

impl<MOD, const LIMBS: usize> ConstantTimeEq for MontyFieldElement<MOD, LIMBS>
where
    MOD: MontyFieldParams<LIMBS>,
{
    fn ct_eq(&self, other: &Self) -> Choice {
        self.inner.ct_eq(&other.inner)
    }
}

impl<MOD, const LIMBS: usize> ConstantTimeGreater for MontyFieldElement<MOD, LIMBS>
where
    MOD: MontyFieldParams<LIMBS>,
{
    fn ct_gt(&self, other: &Self) -> Choice {
        self.to_canonical().ct_gt(&other.to_canonical())
    }
}

impl<MOD, const LIMBS: usize> ConstantTimeLess for MontyFieldElement<MOD, LIMBS>
where
    MOD: MontyFieldParams<LIMBS>,
{
    fn ct_lt(&self, other: &Self) -> Choice {
        self.to_canonical().ct_lt(&other.to_canonical())
    }
}

//
// `core::fmt` trait impls
//

impl<MOD, const LIMBS: usize> fmt::Debug for MontyFieldElement<MOD, LIMBS>
where
    MOD: MontyFieldParams<LIMBS>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MontyFieldElement<p={}>(0x{:X})", MOD::MODULUS_HEX, self)
    }
}

impl<MOD, const LIMBS: usize> fmt::Display for MontyFieldElement<MOD, LIMBS>
where
    MOD: MontyFieldParams<LIMBS>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(self, f)
    }
}

impl<MOD, const LIMBS: usize> fmt::LowerHex for MontyFieldElement<MOD, LIMBS>
where
    MOD: MontyFieldParams<LIMBS>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.to_bytes().as_ref() {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl<MOD, const LIMBS: usize> fmt::UpperHex for MontyFieldElement<MOD, LIMBS>
where
    MOD: MontyFieldParams<LIMBS>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.to_bytes().as_ref() {
            write!(f, "{byte:02X}")?;
        }
        Ok(())
    }
}

//
// Miscellaneous trait impls
//

impl<MOD, const LIMBS: usize> Clone for MontyFieldElement<MOD, LIMBS>
where
    MOD: MontyFieldParams<LIMBS>,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<MOD, const LIMBS: usize> Copy for MontyFieldElement<MOD, LIMBS> where
    MOD: MontyFieldParams<LIMBS>
{
}

impl<MOD, const LIMBS: usize> Default for MontyFieldElement<MOD, LIMBS>
where
    MOD: MontyFieldParams<LIMBS>,
{
    fn default() -> Self {
        Self::ZERO
    }
}

impl<MOD: MontyFieldParams<LIMBS>, const LIMBS: usize> Eq for MontyFieldElement<MOD, LIMBS> {}
impl<MOD: MontyFieldParams<LIMBS>, const LIMBS: usize> PartialEq for MontyFieldElement<MOD, LIMBS> {
    fn eq(&self, rhs: &Self) -> bool {
        self.ct_eq(rhs).into()
    }
}

impl<MOD, const LIMBS: usize> From<u32> for MontyFieldElement<MOD, LIMBS>
where
    MOD: MontyFieldParams<LIMBS>,
{
    #[inline]
    fn from(n: u32) -> MontyFieldElement<MOD, LIMBS> {
        Self::from_u64(n.into())
    }
}

impl<MOD, const LIMBS: usize> From<u64> for MontyFieldElement<MOD, LIMBS>
where
    MOD: MontyFieldParams<LIMBS>,
{
    #[inline]
    fn from(n: u64) -> MontyFieldElement<MOD, LIMBS> {
        Self::from_u64(n)
    }
}

impl<MOD, const LIMBS: usize> From<u128> for MontyFieldElement<MOD, LIMBS>
where
    MOD: MontyFieldParams<LIMBS>,
{
    fn from(n: u128) -> MontyFieldElement<MOD, LIMBS> {
        Self::from_wide_bytes(&n.to_be_bytes())
    }
}

impl<MOD, const LIMBS: usize> TryFrom<&[u8]> for MontyFieldElement<MOD, LIMBS>
where
    MOD: MontyFieldParams<LIMBS>,
{
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::from_slice(bytes)
    }
}

impl<MOD: MontyFieldParams<LIMBS>, const LIMBS: usize> Ord for MontyFieldElement<MOD, LIMBS> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_canonical().cmp(&other.to_canonical())
    }
}

impl<MOD: MontyFieldParams<LIMBS>, const LIMBS: usize> PartialOrd
    for MontyFieldElement<MOD, LIMBS>
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<MOD: MontyFieldParams<LIMBS>, const LIMBS: usize> zeroize::DefaultIsZeroes
    for MontyFieldElement<MOD, LIMBS>
{
}

/// Compute `S = (modulus - 1).trailing_zeros()`
pub const fn compute_s<const LIMBS: usize>(modulus: &Uint<LIMBS>) -> u32 {
    modulus.wrapping_sub(&Uint::ONE).trailing_zeros() as u32
}

/// Compute `t = (modulus - 1) >> S`
pub const fn compute_t<const LIMBS: usize>(modulus: &Uint<LIMBS>) -> Uint<LIMBS> {
    modulus
        .wrapping_sub(&Uint::ONE)
        .shr_vartime(compute_s(modulus) as usize)
}

/// Decode a big-endian integer of at most `Uint::<LIMBS>::BYTES` bytes, zero padding on the left.
fn uint_from_be_slice<const LIMBS: usize>(bytes: &[u8]) -> Uint<LIMBS> {
    let mut padded = [0u8; MAX_UINT_BYTES];
    let padded = &mut padded[MAX_UINT_BYTES - Uint::<LIMBS>::BYTES..];
    let offset = padded.len() - bytes.len();
    padded[offset..].copy_from_slice(bytes);
    Uint::from_be_slice(padded)
}

/// Number of bytes in the canonical encoding of an element modulo the given hex modulus.
pub const fn num_bytes(modulus_hex: &str) -> usize {
    let bytes = modulus_hex.as_bytes();
    let mut i = 0;

    // Leading zero digits do not count towards the encoding size
    while i < bytes.len() && bytes[i] == b'0' {
        i += 1;
    }

    assert!(i < bytes.len(), "modulus must be nonzero");
    let nibbles = bytes.len() - i;

    let leading = match bytes[i] {
        b'1' => 1,
        b'2'..=b'3' => 2,
        b'4'..=b'7' => 3,
        _ => 4,
    };

    ((nibbles - 1) * 4 + leading).div_ceil(8)
}
