//! Traits for mapping field elements to points on the curve.

use crate::FromOkm;
use digest::generic_array::typenum::Unsigned;
use ff::Field;
use group::Group;

/// Trait for converting field elements into a point via a mapping method like
/// Simplified Shallue-van de Woestijne-Ulas or Elligator.
pub trait MapToCurve {
    /// The target security level in bytes:
    /// <https://www.rfc-editor.org/rfc/rfc9380.html#section-8.9-2.2>
    /// <https://www.rfc-editor.org/rfc/rfc9380.html#name-target-security-levels>
    type SecurityLevel: Unsigned;

    /// The field the map is defined over.
    type FieldElement: Field + FromOkm;

    /// The scalar field, for `hash_to_scalar`.
    type Scalar: FromOkm;

    /// The curve points produced by the map.
    type Point: Group;

    /// Map a field element to the affine point `(x_num / x_den, y_num / y_den)`.
    fn map_to_fraction(
        u: &Self::FieldElement,
    ) -> (
        Self::FieldElement,
        Self::FieldElement,
        Self::FieldElement,
        Self::FieldElement,
    );

    /// Build a point from fractional affine coordinates, cross multiplying the
    /// denominators instead of inverting them.
    fn from_fraction(
        x_num: Self::FieldElement,
        x_den: Self::FieldElement,
        y_num: Self::FieldElement,
        y_den: Self::FieldElement,
    ) -> Self::Point;

    /// Map a field element into a curve point.
    fn map_to_curve(u: &Self::FieldElement) -> Self::Point {
        let (x_num, x_den, y_num, y_den) = Self::map_to_fraction(u);
        Self::from_fraction(x_num, x_den, y_num, y_den)
    }

    /// Move a point into the prime order subgroup.
    ///
    /// The identity map for curves of prime order.
    fn clear_cofactor(point: &Self::Point) -> Self::Point;
}
