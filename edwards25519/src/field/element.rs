//! The base field `GF(2^255 - 19)`.
//!
//! `p ≡ 5 (mod 8)`, so square roots use Atkins' algorithm and Elligator 2 uses the
//! `q ≡ 5 (mod 8)` straight line of RFC 9380 appendix G.2.1.

use primefield::bigint::U256;
use subtle::{ConditionallyNegatable, ConditionallySelectable, ConstantTimeEq};

primefield::monty_field_params!(
    name: FieldParams,
    modulus: "7fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffed",
    uint: U256,
    multiplicative_generator: 2,
    doc: "edwards25519 base field modulus: 2^255 - 19"
);

primefield::monty_field_element!(
    name: FieldElement,
    params: FieldParams,
    doc: "Element of the edwards25519 base field"
);

impl FieldElement {
    /// Coefficient `a = -1` of the twisted Edwards equation.
    pub const EDWARDS_A: Self = Self::ONE.neg();

    /// Coefficient `d = -121665 / 121666` of the twisted Edwards equation.
    pub const EDWARDS_D: Self =
        Self::from_hex_vartime("52036cee2b6ffe738cc740797779e89800700a4d4141d8ab75eb4dca135978a3");

    /// `sqrt(-1)`
    pub const SQRT_M1: Self =
        Self::from_hex_vartime("2b8324804fc1df0b2b4d00993dfbd7a72f431806ad2fe478c4ee1b274a0ea0b0");

    /// Coefficient `A = 486662` of the birationally equivalent Montgomery curve
    /// Curve25519, `v² = u³ + A·u² + u`.
    pub const J: Self = Self::from_u64(486662);

    /// `2^((p + 3) / 8)`
    const ELL2_C2: Self =
        Self::from_hex_vartime("2b8324804fc1df0b2b4d00993dfbd7a72f431806ad2fe478c4ee1b274a0ea0b1");

    /// `(p - 5) / 8 = 2^252 - 3`
    const ELL2_C4: [u64; 4] = [
        0xffff_ffff_ffff_fffd,
        0xffff_ffff_ffff_ffff,
        0xffff_ffff_ffff_ffff,
        0x0fff_ffff_ffff_ffff,
    ];

    /// `sqrt(-486664)` with `sgn0 = 0`, scaling Montgomery `u/v` to Edwards `x`.
    const ELL2_EDWARDS_C1: Self =
        Self::from_hex_vartime("0f26edf460a006bbd27b08dc03fc4f7ec5a1d3d14b7d1a82cc6e04aaff457e06");

    /// Elligator 2 onto Curve25519, returning `(xn, xd, y)` with `y` over a denominator
    /// of one.
    pub(crate) fn map_to_curve_elligator2_curve25519(&self) -> (Self, Self, Self) {
        // 1.  tv1 = u^2
        let tv1 = self.square();
        // 2.  tv1 = 2 * tv1
        let tv1 = tv1.double();
        // 3.   xd = tv1 + 1         # Nonzero: -1 is square (mod p), tv1 is not
        let xd = tv1 + Self::ONE;
        // 4.  x1n = -J              # x1 = x1n / xd = -J / (1 + 2 * u^2)
        let x1n = -Self::J;
        // 5.  tv2 = xd^2
        let tv2 = xd.square();
        // 6.  gxd = tv2 * xd        # gxd = xd^3
        let gxd = tv2 * xd;
        // 7.  gx1 = J * tv1         # x1n + J * xd
        let mut gx1 = Self::J * tv1;
        // 8.  gx1 = gx1 * x1n       # x1n^2 + J * x1n * xd
        gx1 *= x1n;
        // 9.  gx1 = gx1 + tv2       # x1n^2 + J * x1n * xd + xd^2
        gx1 += tv2;
        // 10. gx1 = gx1 * x1n       # x1n^3 + J * x1n^2 * xd + x1n * xd^2
        gx1 *= x1n;
        // 11. tv3 = gxd^2
        let tv3 = gxd.square();
        // 12. tv2 = tv3^2           # gxd^4
        let tv2 = tv3.square();
        // 13. tv3 = tv3 * gxd       # gxd^3
        let tv3 = tv3 * gxd;
        // 14. tv3 = tv3 * gx1       # gx1 * gxd^3
        let tv3 = tv3 * gx1;
        // 15. tv2 = tv2 * tv3       # gx1 * gxd^7
        let tv2 = tv2 * tv3;
        // 16. y11 = tv2^c4          # (gx1 * gxd^7)^((p - 5) / 8)
        let y11 = tv2.pow_vartime(&Self::ELL2_C4);
        // 17. y11 = y11 * tv3       # gx1 * gxd^3 * (gx1 * gxd^7)^((p - 5) / 8)
        let y11 = y11 * tv3;
        // 18. y12 = y11 * c3
        let y12 = y11 * Self::SQRT_M1;
        // 19. tv2 = y11^2
        let tv2 = y11.square();
        // 20. tv2 = tv2 * gxd
        let tv2 = tv2 * gxd;
        // 21.  e1 = tv2 == gx1
        let e1 = tv2.ct_eq(&gx1);
        // 22.  y1 = CMOV(y12, y11, e1)  # If g(x1) is square, this is its sqrt
        let y1 = Self::conditional_select(&y12, &y11, e1);
        // 23. x2n = x1n * tv1           # x2 = x2n / xd = 2 * u^2 * x1n / xd
        let x2n = x1n * tv1;
        // 24. y21 = y11 * u
        let y21 = y11 * self;
        // 25. y21 = y21 * c2
        let y21 = y21 * Self::ELL2_C2;
        // 26. y22 = y21 * c3
        let y22 = y21 * Self::SQRT_M1;
        // 27. gx2 = gx1 * tv1           # g(x2) = gx2 / gxd = 2 * u^2 * g(x1)
        let gx2 = gx1 * tv1;
        // 28. tv2 = y21^2
        let tv2 = y21.square();
        // 29. tv2 = tv2 * gxd
        let tv2 = tv2 * gxd;
        // 30.  e2 = tv2 == gx2
        let e2 = tv2.ct_eq(&gx2);
        // 31.  y2 = CMOV(y22, y21, e2)  # If g(x2) is square, this is its sqrt
        let y2 = Self::conditional_select(&y22, &y21, e2);
        // 32. tv2 = y1^2
        let tv2 = y1.square();
        // 33. tv2 = tv2 * gxd
        let tv2 = tv2 * gxd;
        // 34.  e3 = tv2 == gx1
        let e3 = tv2.ct_eq(&gx1);
        // 35.  xn = CMOV(x2n, x1n, e3)  # If e3, x = x1, else x = x2
        let xn = Self::conditional_select(&x2n, &x1n, e3);
        // 36.   y = CMOV(y2, y1, e3)    # If e3, y = y1, else y = y2
        let mut y = Self::conditional_select(&y2, &y1, e3);
        // 37.  e4 = sgn0(y) == 1        # Fix sign of y
        let e4 = y.is_odd();
        // 38.   y = CMOV(y, -y, e3 XOR e4)
        y.conditional_negate(e3 ^ e4);
        // 39. return (xn, xd, y, 1)
        (xn, xd, y)
    }

    /// Elligator 2 onto edwards25519 through the birational map from Curve25519,
    /// returning `(xn, xd, yn, yd)`.
    pub(crate) fn map_to_curve_elligator2_edwards25519(&self) -> (Self, Self, Self, Self) {
        // 1.  (xMn, xMd, yMn, yMd) = map_to_curve_elligator2_curve25519(u)
        let (xMn, xMd, yMn) = self.map_to_curve_elligator2_curve25519();
        // 2.  xn = xMn * yMd
        // 3.  xn = xn * c1
        let xn = xMn * Self::ELL2_EDWARDS_C1;
        // 4.  xd = xMd * yMn    # xn / xd = c1 * xM / yM
        let xd = xMd * yMn;
        // 5.  yn = xMn - xMd
        let yn = xMn - xMd;
        // 6.  yd = xMn + xMd    # (n / d - 1) / (n / d + 1) = (n - d) / (n + d)
        let yd = xMn + xMd;
        // 7. tv1 = xd * yd
        let tv1 = xd * yd;
        // 8.   e = tv1 == 0
        let e = tv1.is_zero();
        // 9.  xn = CMOV(xn, 0, e)
        // 10. xd = CMOV(xd, 1, e)
        // 11. yn = CMOV(yn, 1, e)
        // 12. yd = CMOV(yd, 1, e)
        // 13. return (xn, xd, yn, yd)
        (
            Self::conditional_select(&xn, &Self::ZERO, e),
            Self::conditional_select(&xd, &Self::ONE, e),
            Self::conditional_select(&yn, &Self::ONE, e),
            Self::conditional_select(&yd, &Self::ONE, e),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::FieldElement;
    use crate::Error;
    use ff::{Field, PrimeField};
    use hex_literal::hex;

    mod fe {
        use super::FieldElement;
        primefield::test_primefield!(FieldElement);
    }

    #[test]
    fn field_shape() {
        assert_eq!(FieldElement::S, 2);
        assert_eq!(FieldElement::NUM_BITS, 255);
    }

    #[test]
    fn curve_constants() {
        // d·121666 = -121665
        assert_eq!(
            FieldElement::EDWARDS_D * FieldElement::from_u64(121666),
            -FieldElement::from_u64(121665)
        );
        assert_eq!(FieldElement::SQRT_M1.square(), -FieldElement::ONE);
        assert!(bool::from(Field::sqrt(&FieldElement::EDWARDS_D).is_none()));
    }

    #[test]
    fn checked_sqrt_and_inversion() {
        let minus_one = -FieldElement::ONE;
        assert_eq!(minus_one.try_sqrt().unwrap().square(), minus_one);
        assert_eq!(FieldElement::EDWARDS_D.try_sqrt(), Err(Error::NonResidue));

        assert_eq!(FieldElement::ZERO.try_invert(), Err(Error::NotInvertible));
        assert_eq!(
            FieldElement::from_u64(121666).try_invert().unwrap(),
            FieldElement::from_u64(121666).invert().unwrap()
        );
    }

    #[test]
    fn elligator_constants() {
        assert_eq!(
            FieldElement::ELL2_EDWARDS_C1.square(),
            -FieldElement::from_u64(486664)
        );
        assert!(bool::from(FieldElement::ELL2_EDWARDS_C1.is_even()));

        // c2^2 = 2^((p + 3) / 4) = ±2·sqrt(-1)
        let c2_squared = FieldElement::ELL2_C2.square();
        let two = FieldElement::from_u64(2);
        assert!(
            c2_squared == two * FieldElement::SQRT_M1 || c2_squared == -two * FieldElement::SQRT_M1
        );
    }

    #[test]
    fn elligator_of_zero_is_identity() {
        let (xn, xd, yn, yd) = FieldElement::ZERO.map_to_curve_elligator2_edwards25519();
        assert_eq!(xn, FieldElement::ZERO);
        assert_eq!(xd, FieldElement::ONE);
        assert_eq!(yn, FieldElement::ONE);
        assert_eq!(yd, FieldElement::ONE);
    }

    #[test]
    fn elligator_lands_on_curve25519() {
        for n in [1u64, 2, 3, 5, 7, 1 << 40] {
            let u = FieldElement::from_u64(n);
            let (xn, xd, y) = u.map_to_curve_elligator2_curve25519();
            let x = xn * xd.invert().unwrap();
            let rhs = x.square() * x + FieldElement::J * x.square() + x;
            assert_eq!(y.square(), rhs);
        }
    }

    #[test]
    fn minus_one_encoding() {
        assert_eq!(
            (-FieldElement::ONE).to_repr(),
            hex!("7fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffec")
        );
    }
}
