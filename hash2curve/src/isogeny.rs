//! Traits for mapping an isogeny to another curve
//!
//! <https://www.rfc-editor.org/rfc/rfc9380.html#name-simplified-swu-for-ab-0>

use crate::OsswuMap;
use ff::Field;

/// The coefficients for mapping from one isogenous curve to another.
///
/// Every polynomial lists its constant term first.
#[derive(Clone, Copy, Debug)]
pub struct IsogenyCoefficients<F: Field + 'static> {
    /// The coefficients for the x numerator
    pub xnum: &'static [F],
    /// The coefficients for the x denominator
    pub xden: &'static [F],
    /// The coefficients for the y numerator
    pub ynum: &'static [F],
    /// The coefficients for the y denominator
    pub yden: &'static [F],
}

/// The [`Isogeny`] methods to map to another curve.
pub trait Isogeny: Field {
    /// The isogeny coefficients
    const COEFFICIENTS: IsogenyCoefficients<Self>;

    /// Map the point `(x_num / x_den, y)` through the isogeny.
    ///
    /// Returns `(x_num, x_den, y_num, y_den)` of the image without any inversion; a
    /// zero denominator marks the identity.
    fn isogeny(x_num: Self, x_den: Self, y: Self) -> (Self, Self, Self, Self) {
        let coefficients = &Self::COEFFICIENTS;

        let (xn, xn_deg) = eval_homogeneous(coefficients.xnum, x_num, x_den);
        let (xd, xd_deg) = eval_homogeneous(coefficients.xden, x_num, x_den);
        let (yn, yn_deg) = eval_homogeneous(coefficients.ynum, x_num, x_den);
        let (yd, yd_deg) = eval_homogeneous(coefficients.yden, x_num, x_den);

        // P(x) = P_h(x_num, x_den) / x_den^deg(P); rebalance the leftover powers
        let (xn, xd) = rebalance(xn, xn_deg, xd, xd_deg, x_den);
        let (yn, yd) = rebalance(yn * y, yn_deg, yd, yd_deg, x_den);

        (xn, xd, yn, yd)
    }
}

/// `(x_num, x_den, y_num, y_den)` of the simplified SWU map composed with the isogeny.
pub fn sswu_isogeny_map<F>(u: &F) -> (F, F, F, F)
where
    F: OsswuMap + Isogeny,
{
    let (x_num, x_den, y) = u.osswu();
    F::isogeny(x_num, x_den, y)
}

/// Evaluate `Σ cᵢ·Xⁱ·Z^(d-i)`, returning the value and the degree `d`.
fn eval_homogeneous<F: Field>(coefficients: &[F], x: F, z: F) -> (F, usize) {
    let Some((last, rest)) = coefficients.split_last() else {
        return (F::ZERO, 0);
    };

    let mut acc = *last;
    let mut z_pow = F::ONE;

    for c in rest.iter().rev() {
        z_pow *= z;
        acc = acc * x + *c * z_pow;
    }

    (acc, rest.len())
}

/// Turn `(n / z^n_deg) / (d / z^d_deg)` into a plain fraction.
fn rebalance<F: Field>(n: F, n_deg: usize, d: F, d_deg: usize, z: F) -> (F, F) {
    if n_deg >= d_deg {
        (n, d * z_pow(z, n_deg - d_deg))
    } else {
        (n * z_pow(z, d_deg - n_deg), d)
    }
}

fn z_pow<F: Field>(z: F, e: usize) -> F {
    (0..e).fold(F::ONE, |acc, _| acc * z)
}
