//! Macros for writing common patterns that interact with this crate.

/// Writes `scalar * point` impls for a curve's scalar type, so that scalar
/// multiplication commutes syntactically.
#[macro_export]
macro_rules! scalar_mul_impls {
    ($curve:path, $scalar:ty) => {
        impl ::core::ops::Mul<$crate::AffinePoint<$curve>> for $scalar {
            type Output = $crate::ProjectivePoint<$curve>;

            #[inline]
            fn mul(
                self,
                rhs: $crate::AffinePoint<$curve>,
            ) -> $crate::ProjectivePoint<$curve> {
                rhs * self
            }
        }

        impl ::core::ops::Mul<&$crate::AffinePoint<$curve>> for $scalar {
            type Output = $crate::ProjectivePoint<$curve>;

            #[inline]
            fn mul(
                self,
                rhs: &$crate::AffinePoint<$curve>,
            ) -> $crate::ProjectivePoint<$curve> {
                *rhs * self
            }
        }

        impl ::core::ops::Mul<$crate::AffinePoint<$curve>> for &$scalar {
            type Output = $crate::ProjectivePoint<$curve>;

            #[inline]
            fn mul(
                self,
                rhs: $crate::AffinePoint<$curve>,
            ) -> $crate::ProjectivePoint<$curve> {
                rhs * self
            }
        }

        impl ::core::ops::Mul<&$crate::AffinePoint<$curve>> for &$scalar {
            type Output = $crate::ProjectivePoint<$curve>;

            #[inline]
            fn mul(
                self,
                rhs: &$crate::AffinePoint<$curve>,
            ) -> $crate::ProjectivePoint<$curve> {
                *rhs * self
            }
        }

        impl ::core::ops::Mul<$crate::ProjectivePoint<$curve>> for $scalar {
            type Output = $crate::ProjectivePoint<$curve>;

            #[inline]
            fn mul(
                self,
                rhs: $crate::ProjectivePoint<$curve>,
            ) -> $crate::ProjectivePoint<$curve> {
                rhs * self
            }
        }

        impl ::core::ops::Mul<&$crate::ProjectivePoint<$curve>> for $scalar {
            type Output = $crate::ProjectivePoint<$curve>;

            #[inline]
            fn mul(
                self,
                rhs: &$crate::ProjectivePoint<$curve>,
            ) -> $crate::ProjectivePoint<$curve> {
                rhs * &self
            }
        }

        impl ::core::ops::Mul<$crate::ProjectivePoint<$curve>> for &$scalar {
            type Output = $crate::ProjectivePoint<$curve>;

            #[inline]
            fn mul(
                self,
                rhs: $crate::ProjectivePoint<$curve>,
            ) -> $crate::ProjectivePoint<$curve> {
                rhs * self
            }
        }

        impl ::core::ops::Mul<&$crate::ProjectivePoint<$curve>> for &$scalar {
            type Output = $crate::ProjectivePoint<$curve>;

            #[inline]
            fn mul(
                self,
                rhs: &$crate::ProjectivePoint<$curve>,
            ) -> $crate::ProjectivePoint<$curve> {
                rhs * self
            }
        }
    };
}
