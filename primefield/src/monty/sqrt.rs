//! Modular square root implementations, adapted from <https://eprint.iacr.org/2012/685.pdf>.

use super::compute_t;
use crate::{Error, MontyFieldElement, MontyFieldParams, Result};
use bigint::Uint;
use ff::PrimeField;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

/// Square root algorithms.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
enum Algorithm {
    /// Atkins algorithm for `q ≡ 5 (mod 8)`.
    Atkins,

    /// Shanks algorithm for `q ≡ 3 (mod 4)`.
    Shanks,

    /// Tonelli-Shanks algorithm for any odd prime.
    #[default]
    TonelliShanks,
}

impl Algorithm {
    /// Determine the best algorithm to use with a particular modulus.
    const fn for_modulus<const LIMBS: usize>(p: &Uint<LIMBS>) -> Self {
        let p0 = p.as_words()[0];

        if p0 % 4 == 3 {
            Self::Shanks
        } else if p0 % 8 == 5 {
            Self::Atkins
        } else {
            Self::TonelliShanks
        }
    }
}

impl<MOD, const LIMBS: usize> MontyFieldElement<MOD, LIMBS>
where
    MOD: MontyFieldParams<LIMBS>,
{
    /// Returns the square root of self mod p, or `None` if no square root exists.
    #[inline]
    pub fn sqrt(&self) -> CtOption<Self> {
        match const { Algorithm::for_modulus(&MOD::MODULUS) } {
            Algorithm::Atkins => self.sqrt_atkins(),
            Algorithm::Shanks => self.sqrt_shanks(),
            Algorithm::TonelliShanks => self.sqrt_tonelli_shanks(),
        }
    }

    /// Returns the square root of self mod p, or [`Error::NonResidue`] if no square root exists.
    ///
    /// Branches on whether the root exists, so only use it where that is public.
    pub fn try_sqrt(&self) -> Result<Self> {
        Option::from(self.sqrt()).ok_or(Error::NonResidue)
    }

    /// Atkins algorithm for `q ≡ 5 (mod 8)`.
    ///
    /// From <https://eprint.iacr.org/2012/685.pdf> (page 10, algorithm 3)
    fn sqrt_atkins(&self) -> CtOption<Self> {
        debug_assert!(MOD::MODULUS.as_words()[0] % 8 == 5);

        // (q - 5) / 8, as q ≡ 5 (mod 8)
        let mod_minus_5_over_8 = const { MOD::MODULUS.shr_vartime(3) };
        let t = const { Self::from_u64(2).pow_uint(&MOD::MODULUS.shr_vartime(3)) };

        let a1 = self.pow_uint(&mod_minus_5_over_8);
        let a0 = (a1.square() * self).square();
        let b = t * a1;
        let ab = self * &b;
        let i = Self::from_u64(2) * ab * b;
        let x = ab * (i - Self::ONE);
        CtOption::new(x, !a0.ct_eq(&-Self::ONE))
    }

    /// Shanks algorithm for `q ≡ 3 (mod 4)`.
    ///
    /// For `q = 3 (mod 4)`, sqrt can be computed with only one exponentiation as
    /// `self^((q + 1) / 4) (mod q)`.
    ///
    /// From <https://eprint.iacr.org/2012/685.pdf> (page 12, algorithm 5)
    fn sqrt_shanks(&self) -> CtOption<Self> {
        debug_assert!(MOD::MODULUS.as_words()[0] % 4 == 3);

        // (q + 1) / 4 == (q - 3) / 4 + 1, which avoids overflowing a full-width modulus
        let mod_plus_1_over_4 = const { MOD::MODULUS.shr_vartime(2).wrapping_add(&Uint::ONE) };

        let sqrt = self.pow_uint(&mod_plus_1_over_4);
        CtOption::new(sqrt, (sqrt * sqrt).ct_eq(self))
    }

    /// Tonelli-Shanks algorithm works for every odd prime.
    ///
    /// From <https://eprint.iacr.org/2012/685.pdf> (page 12, algorithm 5)
    fn sqrt_tonelli_shanks(&self) -> CtOption<Self> {
        let t_minus_1_over_2 = const { compute_t(&MOD::MODULUS).shr_vartime(1) };
        let w = self.pow_uint(&t_minus_1_over_2);

        let mut v = <Self as PrimeField>::S;
        let mut x = *self * w;
        let mut b = x * w;
        let mut z = <Self as PrimeField>::ROOT_OF_UNITY;

        for max_v in (1..=<Self as PrimeField>::S).rev() {
            let mut k = 1;
            let mut tmp = b.square();
            let mut j_less_than_v = Choice::from(1);

            for j in 2..max_v {
                let tmp_is_one = tmp.ct_eq(&Self::ONE);
                let squared = Self::conditional_select(&tmp, &z, tmp_is_one).square();
                tmp = Self::conditional_select(&squared, &tmp, tmp_is_one);
                let new_z = Self::conditional_select(&z, &squared, tmp_is_one);
                j_less_than_v &= !j.ct_eq(&v);
                k = u32::conditional_select(&j, &k, tmp_is_one);
                z = Self::conditional_select(&z, &new_z, j_less_than_v);
            }

            let result = x * z;
            x = Self::conditional_select(&result, &x, b.ct_eq(&Self::ONE));
            z = z.square();
            b *= z;
            v = k;
        }

        CtOption::new(x, x.square().ct_eq(self))
    }
}

#[cfg(test)]
mod tests {
    use super::Algorithm;
    use crate::{MontyFieldElement, monty_field_params};
    use bigint::{U256, modular::constant_mod::ResidueParams};
    use ff::PrimeField;
    use subtle::CtOption;

    /// Generic sqrt test.
    fn sqrt_test<Fe: PrimeField, F: Fn(&Fe) -> CtOption<Fe>>(f: F) {
        for &n in &[1u64, 4, 9, 16, 25, 36, 49, 64] {
            let fe = Fe::from(n);
            let sqrt = f(&fe).unwrap();
            assert_eq!(sqrt.square(), fe);
        }

        assert_eq!(f(&Fe::ZERO).unwrap(), Fe::ZERO);
        assert!(bool::from(f(&Fe::MULTIPLICATIVE_GENERATOR).is_none()));
    }

    /// Tests the Atkins algorithm implementation
    #[test]
    fn atkins() {
        // Curve25519 base field
        monty_field_params!(
            name: Curve25519FieldParams,
            modulus: "7fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffed",
            uint: U256,
            multiplicative_generator: 2,
            doc: "Curve25519 field modulus"
        );

        assert_eq!(
            Algorithm::for_modulus(&Curve25519FieldParams::MODULUS),
            Algorithm::Atkins
        );

        type Fe = MontyFieldElement<Curve25519FieldParams, { U256::LIMBS }>;
        sqrt_test(Fe::sqrt_atkins);
    }

    /// Tests the Shanks algorithm implementation, where `p ≡ 3 mod 4`
    #[test]
    fn shanks() {
        // P-256 base field
        monty_field_params!(
            name: P256FieldParams,
            modulus: "ffffffff00000001000000000000000000000000ffffffffffffffffffffffff",
            uint: U256,
            multiplicative_generator: 6,
            doc: "P-256 field modulus"
        );

        assert_eq!(
            Algorithm::for_modulus(&P256FieldParams::MODULUS),
            Algorithm::Shanks
        );

        type Fe = MontyFieldElement<P256FieldParams, { U256::LIMBS }>;
        sqrt_test(Fe::sqrt_shanks);
    }

    /// Tests the generic Tonelli-Shanks implementation, where `p ≡ 1 mod 4`
    #[test]
    fn tonelli_shanks() {
        // Pallas base field, 2-adicity 32
        monty_field_params!(
            name: PallasFieldParams,
            modulus: "40000000000000000000000000000000224698fc094cf91b992d30ed00000001",
            uint: U256,
            multiplicative_generator: 5,
            doc: "Pallas field modulus"
        );

        assert_eq!(
            Algorithm::for_modulus(&PallasFieldParams::MODULUS),
            Algorithm::TonelliShanks
        );

        type Fe = MontyFieldElement<PallasFieldParams, { U256::LIMBS }>;
        sqrt_test(Fe::sqrt_tonelli_shanks);
    }
}
