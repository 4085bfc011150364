//! Optimized simplified Shallue-van de Woestijne-Ulas methods.
//!
//! <https://www.rfc-editor.org/rfc/rfc9380.html#name-simplified-shallue-van-de-w>

use ff::Field;
use subtle::Choice;

/// The `sgn0` function of RFC 9380: the parity of the canonical
/// representative.
///
/// <https://www.rfc-editor.org/rfc/rfc9380.html#name-the-sgn0-function>
pub trait Sgn0 {
    /// Return the sign of the field element.
    fn sgn0(&self) -> Choice;
}

/// The Optimized Simplified Shallue-van de Woestijne-Ulas parameters.
///
/// `q - 1 = 2^c1 * c2` with `c2` odd. `c2` to `c5` are integer exponents
/// given as little-endian `u64` limbs.
#[derive(Clone, Copy, Debug)]
pub struct OsswuMapParams<F>
where
    F: Field,
{
    /// The largest `c1` such that `2^c1` divides `q - 1`.
    pub c1: u32,
    /// `(q - 1) / 2^c1`
    pub c2: &'static [u64],
    /// `(c2 - 1) / 2`
    pub c3: &'static [u64],
    /// `2^c1 - 1`
    pub c4: &'static [u64],
    /// `2^(c1 - 1)`
    pub c5: &'static [u64],
    /// `Z^c2`
    pub c6: F,
    /// `Z^((c2 + 1) / 2)`
    pub c7: F,
    /// The curve parameter `A` of the curve the map lands on.
    pub map_a: F,
    /// The curve parameter `B` of the curve the map lands on.
    pub map_b: F,
    /// The non-square `Z` of the map.
    pub z: F,
}

/// Constant-time `sqrt_ratio` for any field.
///
/// Returns `(true, sqrt(u / v))` if `u / v` is square in the field and
/// `(false, sqrt(Z * u / v))` otherwise. `v` must not be zero.
///
/// <https://www.rfc-editor.org/rfc/rfc9380.html#name-sqrt_ratio-for-any-field>
pub fn sqrt_ratio<F: Field>(u: &F, v: &F, params: &OsswuMapParams<F>) -> (Choice, F) {
    let mut tv1 = params.c6;
    let mut tv2 = v.pow_vartime(params.c4);
    let mut tv3 = tv2.square();
    tv3 *= v;
    let mut tv5 = *u * tv3;
    tv5 = tv5.pow_vartime(params.c3);
    tv5 *= tv2;
    tv2 = tv5 * v;
    tv3 = tv5 * u;
    let mut tv4 = tv3 * tv2;
    tv5 = tv4.pow_vartime(params.c5);
    let is_qr = tv5.ct_eq(&F::ONE);
    tv2 = tv3 * params.c7;
    tv5 = tv4 * tv1;
    tv3 = F::conditional_select(&tv2, &tv3, is_qr);
    tv4 = F::conditional_select(&tv5, &tv4, is_qr);

    for i in (2..=params.c1).rev() {
        // tv4^(2^(i - 2))
        tv5 = tv4;
        for _ in 2..i {
            tv5 = tv5.square();
        }
        let e1 = tv5.ct_eq(&F::ONE);
        tv2 = tv3 * tv1;
        tv1 = tv1.square();
        tv5 = tv4 * tv1;
        tv3 = F::conditional_select(&tv2, &tv3, e1);
        tv4 = F::conditional_select(&tv5, &tv4, e1);
    }

    (is_qr, tv3)
}

/// Trait for determining the parameters and computing the simplified SWU map
/// for a field.
pub trait OsswuMap: Field + Sgn0 {
    /// The OSSWU parameters for mapping the field to affine points.
    /// For Weierstrass curves having A==0 or B==0, the parameters
    /// should be for isogeny where A≠0 and B≠0.
    const PARAMS: OsswuMapParams<Self>;

    /// Convenience wrapper around [`sqrt_ratio`] with [`Self::PARAMS`].
    fn sqrt_ratio(u: &Self, v: &Self) -> (Choice, Self) {
        sqrt_ratio(u, v, &Self::PARAMS)
    }

    /// Map a field element to a point on the curve given by [`Self::PARAMS`].
    ///
    /// Returns `(x_num, x_den, y)`; the denominator is never zero.
    ///
    /// <https://www.rfc-editor.org/rfc/rfc9380.html#name-simplified-swu-method>
    fn osswu(&self) -> (Self, Self, Self) {
        let params = &Self::PARAMS;

        let mut tv1 = self.square(); // u^2
        tv1 *= params.z; // Z * u^2
        let mut tv2 = tv1.square(); // tv1^2
        tv2 += tv1; // tv1^2 + tv1
        let mut tv3 = tv2 + Self::ONE; // tv2 + 1
        tv3 *= params.map_b; // B * tv3
        let mut tv4 = Self::conditional_select(&params.z, &-tv2, !tv2.is_zero());
        tv4 *= params.map_a; // A * tv4
        tv2 = tv3.square(); // tv3^2
        let mut tv6 = tv4.square(); // tv4^2
        let mut tv5 = params.map_a * tv6; // A * tv6
        tv2 += tv5; // tv2 + tv5
        tv2 *= tv3; // tv2 * tv3
        tv6 *= tv4; // tv6 * tv4
        tv5 = params.map_b * tv6; // B * tv6
        tv2 += tv5; // tv2 + tv5
        let mut x = tv1 * tv3; // tv1 * tv3
        let (is_gx1_square, y1) = <Self as OsswuMap>::sqrt_ratio(&tv2, &tv6);
        let mut y = tv1 * self; // tv1 * u
        y *= y1; // y * y1
        x.conditional_assign(&tv3, is_gx1_square);
        y.conditional_assign(&y1, is_gx1_square);
        let e1 = !(self.sgn0() ^ y.sgn0());
        y = Self::conditional_select(&-y, &y, e1);

        (x, tv4, y)
    }
}

#[cfg(test)]
mod tests {
    use super::{OsswuMap, OsswuMapParams, Sgn0, sqrt_ratio};
    use ff::Field;
    use primefield::{bigint::U256, monty_field_element, monty_field_params};
    use subtle::{Choice, ConditionallySelectable};

    monty_field_params!(
        name: FieldParams,
        modulus: "ffffffff00000001000000000000000000000000ffffffffffffffffffffffff",
        uint: U256,
        multiplicative_generator: 6,
        doc: "P-256 base field modulus"
    );

    monty_field_element!(
        name: FieldElement,
        params: FieldParams,
        doc: "Element of the P-256 base field"
    );

    impl Sgn0 for FieldElement {
        fn sgn0(&self) -> Choice {
            self.is_odd()
        }
    }

    /// `P256_XMD:SHA-256_SSWU_NU_`, where `q ≡ 3 (mod 4)` gives `c1 = 1`.
    impl OsswuMap for FieldElement {
        const PARAMS: OsswuMapParams<Self> = OsswuMapParams {
            c1: 1,
            c2: &[
                0xffff_ffff_ffff_ffff,
                0x0000_0000_7fff_ffff,
                0x8000_0000_0000_0000,
                0x7fff_ffff_8000_0000,
            ],
            c3: &[
                0xffff_ffff_ffff_ffff,
                0x0000_0000_3fff_ffff,
                0x4000_0000_0000_0000,
                0x3fff_ffff_c000_0000,
            ],
            c4: &[1],
            c5: &[1],
            c6: FieldElement::from_hex_vartime(
                "ffffffff00000001000000000000000000000000fffffffffffffffffffffffe",
            ),
            c7: FieldElement::from_hex_vartime(
                "da538e3be1d89b99c978fc675180aab27b8d1ff84c55d5b62ccd3427e433c47f",
            ),
            map_a: FieldElement::from_u64(3).neg(),
            map_b: FieldElement::from_hex_vartime(
                "5ac635d8aa3a93e7b3ebbd55769886bc651d06b0cc53b0f63bce3c3e27d2604b",
            ),
            z: FieldElement::from_u64(10).neg(),
        };
    }

    #[test]
    fn sqrt_ratio_squares_and_non_squares() {
        let params = &FieldElement::PARAMS;

        for (u, v) in [(4u64, 1u64), (9, 4), (2, 7), (5, 3), (1, 1)] {
            let (u, v) = (FieldElement::from_u64(u), FieldElement::from_u64(v));
            let (is_qr, r) = sqrt_ratio(&u, &v, params);

            let expected = FieldElement::conditional_select(&(params.z * u), &u, is_qr);
            assert_eq!(r.square() * v, expected);
            assert_eq!(bool::from(is_qr), bool::from((u * v.invert().unwrap()).sqrt().is_some()));
        }

        let (_, r) = sqrt_ratio(&FieldElement::ZERO, &FieldElement::from_u64(11), params);
        assert_eq!(r, FieldElement::ZERO);
    }

    /// RFC 9380 appendix J.1.2, before the final inversion.
    #[test]
    fn osswu_vectors() {
        let vectors = [
            (
                "b22d487045f80e9edcb0ecc8d4bf77833e2bf1f3a54004d7df1d57f4802d311f",
                "f871caad25ea3b59c16cf87c1894902f7e7b2c822c3d3f73596c5ace8ddd14d1",
                "87b9ae23335bee057b99bac1e68588b18b5691af476234b8971bc4f011ddc99b",
            ),
            (
                "c7f96eadac763e176629b09ed0c11992225b3a5ae99479760601cbd69c221e58",
                "fc3f5d734e8dce41ddac49f47dd2b8a57257522a865c124ed02b92b5237befa4",
                "fe4d197ecf5a62645b9690599e1d80e82c500b22ac705a0b421fac7b47157866",
            ),
        ];

        for (u, x, y) in vectors {
            let (x_num, x_den, y_out) = FieldElement::from_hex_vartime(u).osswu();
            assert_eq!(x_num * x_den.invert().unwrap(), FieldElement::from_hex_vartime(x));
            assert_eq!(y_out, FieldElement::from_hex_vartime(y));
        }
    }

    #[test]
    fn osswu_exceptional_input() {
        // u = 0 hits the `tv2 == 0` branch; the result must still be on the curve
        let (x_num, x_den, y) = FieldElement::ZERO.osswu();
        let params = &FieldElement::PARAMS;
        let x = x_num * x_den.invert().unwrap();
        assert_eq!(y.square(), x.square() * x + params.map_a * x + params.map_b);
    }
}
