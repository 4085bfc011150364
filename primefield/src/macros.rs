//! Macros for defining field element types.

/// Creates a ZST representing the Montgomery parameters for a given field modulus.
///
/// Accepts the following parameters:
///
/// - name of the ZST representing the field modulus
/// - big-endian hex serialization of the modulus, as wide as the `uint` type
/// - `crypto-bigint` unsigned integer type (e.g. `U256`)
/// - multiplicative generator, which must be a quadratic nonresidue
/// - documentation string for the field modulus type
///
/// The Montgomery constants are derived by `crypto-bigint`'s `impl_modulus!`. The number of limbs
/// and the size of the byte encoding are exposed as `$name::LIMBS` and `$name::NUM_BYTES`.
///
/// ```
/// use primefield::bigint::U256;
///
/// primefield::monty_field_params!(
///     name: FieldParams,
///     modulus: "ffffffff00000001000000000000000000000000ffffffffffffffffffffffff",
///     uint: U256,
///     multiplicative_generator: 6,
///     doc: "P-256 field modulus"
/// );
///
/// assert_eq!(FieldParams::LIMBS, U256::LIMBS);
/// assert_eq!(FieldParams::NUM_BYTES, 32);
/// ```
#[macro_export]
macro_rules! monty_field_params {
    (
        name: $name:ident,
        modulus: $modulus_hex:expr,
        uint: $uint:ty,
        multiplicative_generator: $multiplicative_generator:expr,
        doc: $doc:expr
    ) => {
        $crate::bigint::impl_modulus!($name, $uint, $modulus_hex);

        #[doc = $doc]
        impl $name {
            /// Number of limbs in the internal representation.
            pub const LIMBS: usize = <$uint>::LIMBS;

            /// Number of bytes in the canonical encoding.
            pub const NUM_BYTES: usize = $crate::num_bytes($modulus_hex);
        }

        impl $crate::MontyFieldParams<{ <$uint>::LIMBS }> for $name {
            type Repr = [u8; $crate::num_bytes($modulus_hex)];
            const NUM_BYTES: usize = $name::NUM_BYTES;
            const MODULUS_HEX: &'static str = $modulus_hex;
            const MULTIPLICATIVE_GENERATOR: u64 = $multiplicative_generator;
        }
    };
}

/// Implements a field element newtype whose internal representation is a
/// [`MontyFieldElement`](crate::MontyFieldElement) in Montgomery form, providing a combination of
/// trait impls and inherent impls which are `const fn` where possible.
///
/// # Inherent impls
/// - `const ZERO: Self`
/// - `const ONE: Self` (multiplicative identity)
/// - `pub fn from_bytes` / `pub fn to_bytes`
/// - `pub fn from_slice`
/// - `pub fn from_wide_bytes`
/// - `pub const fn from_hex_vartime`
/// - `pub const fn from_u64`
/// - `pub const fn to_canonical`
/// - `pub fn is_odd` / `pub fn is_even` / `pub fn is_zero`
/// - `pub const fn add` / `sub` / `multiply` / `neg` / `double` / `square`
/// - `pub fn invert` / `pub fn try_invert` / `pub const fn const_invert` / `pub fn try_div`
/// - `pub fn sqrt` / `pub fn try_sqrt`
/// - `pub const fn pow_vartime` / `pub const fn sqn_vartime`
/// - `pub fn try_random`
///
/// # Trait impls
/// - `ConditionallySelectable`
/// - `ConstantTimeEq`
/// - `ConstantTimeGreater`
/// - `ConstantTimeLess`
/// - `Default`
/// - `DefaultIsZeroes`
/// - `Eq`
/// - `Field`
/// - `FromUniformBytes<64>`
/// - `PartialEq`
/// - `PrimeField`
///
/// ## Ops
/// - `Add`
/// - `AddAssign`
/// - `Sub`
/// - `SubAssign`
/// - `Mul`
/// - `MulAssign`
/// - `Neg`
#[macro_export]
macro_rules! monty_field_element {
    (
        name: $fe:tt,
        params: $params:ty,
        doc: $doc:expr
    ) => {
        #[doc = $crate::monty_field_element_doc!($doc)]
        #[derive(Clone, Copy, PartialOrd, Ord)]
        pub struct $fe(pub(crate) $crate::MontyFieldElement<$params, { <$params>::LIMBS }>);

        impl $fe {
            /// Zero element.
            pub const ZERO: Self =
                Self($crate::MontyFieldElement::<$params, { <$params>::LIMBS }>::ZERO);

            /// Multiplicative identity.
            pub const ONE: Self =
                Self($crate::MontyFieldElement::<$params, { <$params>::LIMBS }>::ONE);

            /// Create a [`
            #[doc = stringify!($fe)]
            /// `] from a canonical big-endian representation.
            pub fn from_bytes(
                repr: &<$params as $crate::MontyFieldParams<{ <$params>::LIMBS }>>::Repr,
            ) -> $crate::subtle::CtOption<Self> {
                $crate::MontyFieldElement::<$params, { <$params>::LIMBS }>::from_bytes(repr)
                    .map(Self)
            }

            /// Decode [`
            #[doc = stringify!($fe)]
            /// `] from a big endian byte slice.
            pub fn from_slice(slice: &[u8]) -> $crate::Result<Self> {
                $crate::MontyFieldElement::<$params, { <$params>::LIMBS }>::from_slice(slice)
                    .map(Self)
            }

            /// Reduce a big-endian integer of any length into a [`
            #[doc = stringify!($fe)]
            /// `].
            pub fn from_wide_bytes(bytes: &[u8]) -> Self {
                Self($crate::MontyFieldElement::<$params, { <$params>::LIMBS }>::from_wide_bytes(
                    bytes,
                ))
            }

            /// Decode a [`
            #[doc = stringify!($fe)]
            /// `] from big endian hex-encoded bytes.
            ///
            /// This is primarily intended for defining constants using hex literals.
            ///
            /// # Panics
            ///
            /// - When hex is malformed
            /// - When input is too long
            /// - If input overflows the modulus
            pub const fn from_hex_vartime(hex: &str) -> Self {
                Self($crate::MontyFieldElement::<$params, { <$params>::LIMBS }>::from_hex_vartime(
                    hex,
                ))
            }

            /// Convert a `u64` into a [`
            #[doc = stringify!($fe)]
            /// `].
            pub const fn from_u64(w: u64) -> Self {
                Self($crate::MontyFieldElement::<$params, { <$params>::LIMBS }>::from_u64(w))
            }

            /// Returns the big-endian encoding of this [`
            #[doc = stringify!($fe)]
            /// `].
            pub fn to_bytes(
                self,
            ) -> <$params as $crate::MontyFieldParams<{ <$params>::LIMBS }>>::Repr {
                self.0.to_bytes()
            }

            /// Translate [`
            #[doc = stringify!($fe)]
            /// `] out of the Montgomery domain, returning an integer in canonical form.
            pub const fn to_canonical(self) -> $crate::bigint::Uint<{ <$params>::LIMBS }> {
                self.0.to_canonical()
            }

            /// Determine if this [`
            #[doc = stringify!($fe)]
            /// `] is odd: `self mod 2 == 1`. This is the `sgn0` function of RFC 9380.
            pub fn is_odd(&self) -> $crate::subtle::Choice {
                self.0.is_odd()
            }

            /// Determine if this [`
            #[doc = stringify!($fe)]
            /// `] is even: `self mod 2 == 0`.
            pub fn is_even(&self) -> $crate::subtle::Choice {
                !self.is_odd()
            }

            /// Determine if this [`
            #[doc = stringify!($fe)]
            /// `] is zero.
            pub fn is_zero(&self) -> $crate::subtle::Choice {
                self.0.is_zero()
            }

            /// Add elements.
            #[inline]
            pub const fn add(&self, rhs: &Self) -> Self {
                Self(self.0.add(&rhs.0))
            }

            /// Double element (add it to itself).
            #[inline]
            #[must_use]
            pub const fn double(&self) -> Self {
                Self(self.0.double())
            }

            /// Subtract elements.
            #[inline]
            pub const fn sub(&self, rhs: &Self) -> Self {
                Self(self.0.sub(&rhs.0))
            }

            /// Multiply elements.
            #[inline]
            pub const fn multiply(&self, rhs: &Self) -> Self {
                Self(self.0.multiply(&rhs.0))
            }

            /// Negate element.
            #[inline]
            pub const fn neg(&self) -> Self {
                Self(self.0.neg())
            }

            /// Compute modular square.
            #[inline]
            #[must_use]
            pub const fn square(&self) -> Self {
                Self(self.0.square())
            }

            /// Compute
            #[doc = stringify!($fe)]
            /// inversion: `1 / self`.
            #[inline]
            pub fn invert(&self) -> $crate::subtle::CtOption<Self> {
                self.0.invert().map(Self)
            }

            /// Compute field inversion as a `const fn`. Panics if `self` is zero.
            ///
            /// This is mainly intended for inverting constants at compile time.
            pub const fn const_invert(&self) -> Self {
                Self(self.0.const_invert())
            }

            /// Compute
            #[doc = stringify!($fe)]
            /// inversion, returning `Error::NotInvertible` for zero.
            pub fn try_invert(&self) -> $crate::Result<Self> {
                self.0.try_invert().map(Self)
            }

            /// Compute `self / rhs`, or `None` if `rhs` is zero.
            pub fn try_div(&self, rhs: &Self) -> $crate::subtle::CtOption<Self> {
                self.0.try_div(&rhs.0).map(Self)
            }

            /// Returns the square root of `self`, or `None` if `self` is a nonresidue.
            pub fn sqrt(&self) -> $crate::subtle::CtOption<Self> {
                self.0.sqrt().map(Self)
            }

            /// Returns the square root of `self`, or `Error::NonResidue` if there is none.
            pub fn try_sqrt(&self) -> $crate::Result<Self> {
                self.0.try_sqrt().map(Self)
            }

            /// Returns `self^exp`, where `exp` is a little-endian integer exponent.
            ///
            /// **This operation is variable time with respect to the exponent `exp`.**
            ///
            /// If the exponent is fixed, this operation is constant time.
            pub const fn pow_vartime(&self, exp: &[u64]) -> Self {
                Self(self.0.pow_vartime(exp))
            }

            /// Returns `self^(2^n) mod p`.
            ///
            /// **This operation is variable time with respect to the exponent `n`.**
            ///
            /// If the exponent is fixed, this operation is constant time.
            pub const fn sqn_vartime(&self, n: usize) -> Self {
                Self(self.0.sqn_vartime(n))
            }

            /// Generate a uniformly random [`
            #[doc = stringify!($fe)]
            /// `], returning an error if the RNG fails.
            pub fn try_random(rng: impl $crate::rand_core::RngCore) -> $crate::Result<Self> {
                $crate::MontyFieldElement::<$params, { <$params>::LIMBS }>::try_random(rng)
                    .map(Self)
            }
        }

        impl $crate::ff::Field for $fe {
            const ZERO: Self = Self::ZERO;
            const ONE: Self = Self::ONE;

            fn random(rng: impl $crate::rand_core::RngCore) -> Self {
                Self($crate::MontyFieldElement::<$params, { <$params>::LIMBS }>::random(rng))
            }

            fn is_zero(&self) -> $crate::subtle::Choice {
                self.0.is_zero()
            }

            fn square(&self) -> Self {
                self.square()
            }

            fn double(&self) -> Self {
                self.double()
            }

            fn invert(&self) -> $crate::subtle::CtOption<Self> {
                self.invert()
            }

            fn sqrt(&self) -> $crate::subtle::CtOption<Self> {
                self.sqrt()
            }

            fn sqrt_ratio(num: &Self, div: &Self) -> ($crate::subtle::Choice, Self) {
                $crate::ff::helpers::sqrt_ratio_generic(num, div)
            }
        }

        impl $crate::ff::PrimeField for $fe {
            type Repr = <$params as $crate::MontyFieldParams<{ <$params>::LIMBS }>>::Repr;

            const MODULUS: &'static str =
                <$params as $crate::MontyFieldParams<{ <$params>::LIMBS }>>::MODULUS_HEX;
            const NUM_BITS: u32 = <$crate::MontyFieldElement<$params, { <$params>::LIMBS }> as
                $crate::ff::PrimeField>::NUM_BITS;
            const CAPACITY: u32 = <$crate::MontyFieldElement<$params, { <$params>::LIMBS }> as
                $crate::ff::PrimeField>::CAPACITY;
            const TWO_INV: Self = Self(<$crate::MontyFieldElement<$params, { <$params>::LIMBS }> as
                $crate::ff::PrimeField>::TWO_INV);
            const MULTIPLICATIVE_GENERATOR: Self = Self(
                <$crate::MontyFieldElement<$params, { <$params>::LIMBS }> as
                    $crate::ff::PrimeField>::MULTIPLICATIVE_GENERATOR,
            );
            const S: u32 = <$crate::MontyFieldElement<$params, { <$params>::LIMBS }> as
                $crate::ff::PrimeField>::S;
            const ROOT_OF_UNITY: Self = Self(
                <$crate::MontyFieldElement<$params, { <$params>::LIMBS }> as
                    $crate::ff::PrimeField>::ROOT_OF_UNITY,
            );
            const ROOT_OF_UNITY_INV: Self = Self(
                <$crate::MontyFieldElement<$params, { <$params>::LIMBS }> as
                    $crate::ff::PrimeField>::ROOT_OF_UNITY_INV,
            );
            const DELTA: Self = Self(<$crate::MontyFieldElement<$params, { <$params>::LIMBS }> as
                $crate::ff::PrimeField>::DELTA);

            #[inline]
            fn from_repr(bytes: Self::Repr) -> $crate::subtle::CtOption<Self> {
                Self::from_bytes(&bytes)
            }

            #[inline]
            fn to_repr(&self) -> Self::Repr {
                self.0.to_bytes()
            }

            #[inline]
            fn is_odd(&self) -> $crate::subtle::Choice {
                self.0.is_odd()
            }
        }

        impl $crate::ff::FromUniformBytes<64> for $fe {
            fn from_uniform_bytes(bytes: &[u8; 64]) -> Self {
                Self::from_wide_bytes(bytes)
            }
        }

        $crate::field_op!($fe, Add, add, add);
        $crate::field_op!($fe, Sub, sub, sub);
        $crate::field_op!($fe, Mul, mul, multiply);

        impl ::core::ops::AddAssign<$fe> for $fe {
            #[inline]
            fn add_assign(&mut self, other: $fe) {
                *self = *self + other;
            }
        }

        impl ::core::ops::AddAssign<&$fe> for $fe {
            #[inline]
            fn add_assign(&mut self, other: &$fe) {
                *self = *self + other;
            }
        }

        impl ::core::ops::SubAssign<$fe> for $fe {
            #[inline]
            fn sub_assign(&mut self, other: $fe) {
                *self = *self - other;
            }
        }

        impl ::core::ops::SubAssign<&$fe> for $fe {
            #[inline]
            fn sub_assign(&mut self, other: &$fe) {
                *self = *self - other;
            }
        }

        impl ::core::ops::MulAssign<&$fe> for $fe {
            #[inline]
            fn mul_assign(&mut self, other: &$fe) {
                *self = *self * other;
            }
        }

        impl ::core::ops::MulAssign for $fe {
            #[inline]
            fn mul_assign(&mut self, other: $fe) {
                *self = *self * other;
            }
        }

        impl ::core::ops::Neg for $fe {
            type Output = $fe;

            #[inline]
            fn neg(self) -> $fe {
                <$fe>::neg(&self)
            }
        }

        impl ::core::ops::Neg for &$fe {
            type Output = $fe;

            #[inline]
            fn neg(self) -> $fe {
                <$fe>::neg(self)
            }
        }

        impl ::core::fmt::Debug for $fe {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}(0x{:X})", stringify!($fe), &self.0)
            }
        }

        impl ::core::fmt::LowerHex for $fe {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::LowerHex::fmt(&self.0, f)
            }
        }

        impl ::core::fmt::UpperHex for $fe {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::UpperHex::fmt(&self.0, f)
            }
        }

        impl Default for $fe {
            fn default() -> Self {
                Self::ZERO
            }
        }

        impl Eq for $fe {}
        impl PartialEq for $fe {
            fn eq(&self, rhs: &Self) -> bool {
                $crate::subtle::ConstantTimeEq::ct_eq(&self.0, &rhs.0).into()
            }
        }

        impl From<u32> for $fe {
            fn from(n: u32) -> $fe {
                Self::from_u64(n.into())
            }
        }

        impl From<u64> for $fe {
            fn from(n: u64) -> $fe {
                Self::from_u64(n)
            }
        }

        impl From<u128> for $fe {
            fn from(n: u128) -> $fe {
                Self(n.into())
            }
        }

        impl From<$crate::MontyFieldElement::<$params, { <$params>::LIMBS }>> for $fe {
            fn from(fe: $crate::MontyFieldElement::<$params, { <$params>::LIMBS }>) -> $fe {
                $fe(fe)
            }
        }

        impl From<$fe> for $crate::MontyFieldElement<$params, { <$params>::LIMBS }> {
            fn from(fe: $fe) -> $crate::MontyFieldElement<$params, { <$params>::LIMBS }> {
                fe.0
            }
        }

        impl TryFrom<&[u8]> for $fe {
            type Error = $crate::Error;

            fn try_from(bytes: &[u8]) -> $crate::Result<Self> {
                Self::from_slice(bytes)
            }
        }

        impl ::core::iter::Sum for $fe {
            #[allow(unused_qualifications)]
            fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
                iter.reduce(core::ops::Add::add).unwrap_or(Self::ZERO)
            }
        }

        impl<'a> ::core::iter::Sum<&'a $fe> for $fe {
            fn sum<I: Iterator<Item = &'a $fe>>(iter: I) -> Self {
                iter.copied().sum()
            }
        }

        impl ::core::iter::Product for $fe {
            #[allow(unused_qualifications)]
            fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
                iter.reduce(core::ops::Mul::mul).unwrap_or(Self::ONE)
            }
        }

        impl<'a> ::core::iter::Product<&'a $fe> for $fe {
            fn product<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
                iter.copied().product()
            }
        }

        impl $crate::subtle::ConditionallySelectable for $fe {
            fn conditional_select(a: &Self, b: &Self, choice: $crate::subtle::Choice) -> Self {
                Self($crate::subtle::ConditionallySelectable::conditional_select(
                    &a.0, &b.0, choice,
                ))
            }
        }

        impl $crate::subtle::ConstantTimeEq for $fe {
            fn ct_eq(&self, other: &Self) -> $crate::subtle::Choice {
                $crate::subtle::ConstantTimeEq::ct_eq(&self.0, &other.0)
            }
        }

        impl $crate::subtle::ConstantTimeGreater for $fe {
            fn ct_gt(&self, other: &Self) -> $crate::subtle::Choice {
                $crate::subtle::ConstantTimeGreater::ct_gt(&self.0, &other.0)
            }
        }

        impl $crate::subtle::ConstantTimeLess for $fe {
            fn ct_lt(&self, other: &Self) -> $crate::subtle::Choice {
                $crate::subtle::ConstantTimeLess::ct_lt(&self.0, &other.0)
            }
        }

        impl $crate::zeroize::DefaultIsZeroes for $fe {}
    };
}

/// Emit a `core::ops` trait wrapper for an inherent method.
#[macro_export]
macro_rules! field_op {
    ($fe:path, $op:tt, $func:ident, $inner_func:ident) => {
        impl ::core::ops::$op for $fe {
            type Output = $fe;

            #[inline]
            fn $func(self, rhs: $fe) -> $fe {
                <$fe>::$inner_func(&self, &rhs)
            }
        }

        impl ::core::ops::$op<&$fe> for $fe {
            type Output = $fe;

            #[inline]
            fn $func(self, rhs: &$fe) -> $fe {
                <$fe>::$inner_func(&self, rhs)
            }
        }

        impl ::core::ops::$op<&$fe> for &$fe {
            type Output = $fe;

            #[inline]
            fn $func(self, rhs: &$fe) -> $fe {
                <$fe>::$inner_func(self, rhs)
            }
        }
    };
}

/// Write documentation for a field element type.
#[doc(hidden)]
#[macro_export]
#[rustfmt::skip]
macro_rules! monty_field_element_doc {
    ($about:expr) => {
        concat!(
            $about,
            "\n\n",
            "# Trait impls\n",
            "\n",
            "Much of the important functionality is provided by traits from the `ff` crate:\n",
            "\n",
            "- `Field` represents elements of finite fields and provides:\n",
            "  - `Field::random` generate a random field element\n",
            "  - `double`, `square`, and `invert` operations\n",
            "  - Bounds for `Add`, `Sub`, `Mul`, and `Neg` (and `*Assign` equivalents)\n",
            "  - Bounds for `ConditionallySelectable` from the `subtle` crate\n",
            "- `PrimeField` represents elements of prime fields and provides:\n",
            "  - `from_repr`/`to_repr` for converting field elements from/to big-endian bytes.\n",
            "  - `MULTIPLICATIVE_GENERATOR` and `ROOT_OF_UNITY` constants.\n",
            "- `FromUniformBytes<64>` reduces 64 uniformly random bytes into the field.\n",
            "\n",
            "Please see the documentation for the relevant traits for more information.\n"
        )
    };
}
