//! The two prime fields of the Pasta cycle.
//!
//! `p` and `q` share their top limb and both have 2-adicity 32, so square roots use
//! Tonelli-Shanks and the RFC 9380 `sqrt_ratio` straight line runs for `c1 = 32`.

use primefield::bigint::U256;

/// Constant representing the Pallas base field modulus:
/// `p = 2^254 + 45560315531419706090280762371685220353`
const P_HEX: &str = "40000000000000000000000000000000224698fc094cf91b992d30ed00000001";

/// Constant representing the Vesta base field modulus:
/// `q = 2^254 + 45560315531506369815346746415080538113`
const Q_HEX: &str = "40000000000000000000000000000000224698fc0994a8dd8c46eb2100000001";

primefield::monty_field_params!(
    name: FpParams,
    modulus: P_HEX,
    uint: U256,
    multiplicative_generator: 5,
    doc: "Pallas base field modulus (the Vesta scalar field)"
);

primefield::monty_field_element!(
    name: Fp,
    params: FpParams,
    doc: "Element of the Pallas base field, which is also the Vesta scalar field"
);

primefield::monty_field_params!(
    name: FqParams,
    modulus: Q_HEX,
    uint: U256,
    multiplicative_generator: 5,
    doc: "Vesta base field modulus (the Pallas scalar field)"
);

primefield::monty_field_element!(
    name: Fq,
    params: FqParams,
    doc: "Element of the Vesta base field, which is also the Pallas scalar field"
);

#[cfg(test)]
mod tests {
    use super::{Fp, Fq};
    use ff::{Field, PrimeField};
    use hex_literal::hex;

    mod fp {
        use super::Fp;
        primefield::test_primefield!(Fp);
    }

    mod fq {
        use super::Fq;
        primefield::test_primefield!(Fq);
    }

    #[test]
    fn two_adicity() {
        assert_eq!(Fp::S, 32);
        assert_eq!(Fq::S, 32);
        assert_eq!(Fp::NUM_BITS, 255);
        assert_eq!(Fq::NUM_BITS, 255);
    }

    #[test]
    fn minus_one_encoding() {
        assert_eq!(
            (-Fp::ONE).to_repr(),
            hex!("40000000000000000000000000000000224698fc094cf91b992d30ed00000000")
        );
        assert_eq!(
            (-Fq::ONE).to_repr(),
            hex!("40000000000000000000000000000000224698fc0994a8dd8c46eb2100000000")
        );
    }

    #[test]
    fn modulus_is_rejected() {
        let p = hex!("40000000000000000000000000000000224698fc094cf91b992d30ed00000001");
        assert!(bool::from(Fp::from_repr(p).is_none()));

        // q > p, so the Vesta modulus is also out of range for `Fp`
        let q = hex!("40000000000000000000000000000000224698fc0994a8dd8c46eb2100000001");
        assert!(bool::from(Fp::from_repr(q).is_none()));
        assert!(bool::from(Fq::from_repr(q).is_none()));
        assert!(bool::from(Fq::from_repr(p).is_some()));
    }

    #[test]
    fn wide_reduction_wraps_modulus() {
        let p = hex!("40000000000000000000000000000000224698fc094cf91b992d30ed00000001");
        let mut wide = [0u8; 64];
        wide[32..].copy_from_slice(&p);
        assert_eq!(Fp::from_wide_bytes(&wide), Fp::ZERO);

        wide[63] += 7;
        assert_eq!(Fp::from_wide_bytes(&wide), Fp::from_u64(7));
    }

    #[test]
    fn sqrt_of_non_residue_fails() {
        assert!(bool::from(Fp::from_u64(5).sqrt().is_none()));
        assert!(bool::from(Fq::from_u64(5).sqrt().is_none()));

        let four = Fq::from_u64(4);
        let root = Field::sqrt(&four).unwrap();
        assert_eq!(root.square(), four);
    }
}
