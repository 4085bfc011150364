//! Development-related functionality.

/// Implement projective arithmetic tests.
///
/// Vectors are big-endian affine coordinates of `[1]G, [2]G, ...` for
/// `$add_vectors` and `(k, x, y)` triples with a big-endian scalar for
/// `$mul_vectors`.
#[macro_export]
macro_rules! impl_projective_arithmetic_tests {
    (
        $affine:tt,
        $projective:tt,
        $scalar:ty,
        $add_vectors:expr,
        $mul_vectors:expr
    ) => {
        /// Assert that the provided projective point matches the given test vector.
        macro_rules! assert_point_eq {
            ($actual:expr, $expected:expr) => {
                let (expected_x, expected_y) = $expected;
                let affine = $actual.to_affine().unwrap();

                assert_eq!(
                    &expected_x[..],
                    $crate::PrimeField::to_repr(&affine.x()).as_ref()
                );
                assert_eq!(
                    &expected_y[..],
                    $crate::PrimeField::to_repr(&affine.y()).as_ref()
                );
            };
        }

        #[test]
        fn affine_to_projective() {
            let basepoint_affine = $affine::GENERATOR;
            let basepoint_projective = $projective::GENERATOR;

            assert_eq!($projective::from(basepoint_affine), basepoint_projective);
            assert_eq!(basepoint_projective.to_affine().unwrap(), basepoint_affine);
            assert!(!bool::from(basepoint_affine.is_identity()));

            assert!(bool::from($projective::IDENTITY.to_affine().is_none()));
            assert!(bool::from($projective::from($affine::IDENTITY).is_identity()));
        }

        #[test]
        fn projective_identity_addition() {
            let identity = $projective::IDENTITY;
            let generator = $projective::GENERATOR;

            assert_eq!(identity + &generator, generator);
            assert_eq!(generator + &identity, generator);
            assert_eq!(identity + &identity, identity);
            assert!(bool::from((generator - &generator).is_identity()));
        }

        #[test]
        fn projective_mixed_addition() {
            let identity = $projective::IDENTITY;
            let basepoint_affine = $affine::GENERATOR;
            let basepoint_projective = $projective::GENERATOR;

            assert_eq!(identity + &basepoint_affine, basepoint_projective);
            assert_eq!(
                basepoint_projective + &basepoint_affine,
                basepoint_projective + &basepoint_projective
            );
        }

        #[test]
        fn test_vector_repeated_add() {
            let generator = $projective::GENERATOR;
            let mut p = generator;

            for i in 0..$add_vectors.len() {
                assert_point_eq!(p, $add_vectors[i]);
                p += &generator;
            }
        }

        #[test]
        fn test_vector_repeated_add_mixed() {
            let generator = $affine::GENERATOR;
            let mut p = $projective::GENERATOR;

            for i in 0..$add_vectors.len() {
                assert_point_eq!(p, $add_vectors[i]);
                p += &generator;
            }
        }

        #[test]
        fn test_vector_add_mixed_identity() {
            let generator = $projective::GENERATOR;
            let p0 = generator + $projective::IDENTITY;
            let p1 = generator + $affine::IDENTITY;
            assert_eq!(p0, p1);
        }

        #[test]
        fn test_vector_double_generator() {
            let generator = $projective::GENERATOR;
            let mut p = generator;

            for i in 0..2 {
                assert_point_eq!(p, $add_vectors[i]);
                p = p.double();
            }
        }

        #[test]
        fn projective_add_vs_double() {
            let generator = $projective::GENERATOR;
            assert_eq!(generator + &generator, generator.double());
            assert!(bool::from($projective::IDENTITY.double().is_identity()));
        }

        #[test]
        fn projective_add_and_sub() {
            let basepoint_affine = $affine::GENERATOR;
            let basepoint_projective = $projective::GENERATOR;

            assert_eq!(
                (basepoint_projective + &basepoint_projective) - &basepoint_projective,
                basepoint_projective
            );
            assert_eq!(
                (basepoint_projective + &basepoint_affine) - &basepoint_affine,
                basepoint_projective
            );
        }

        #[test]
        fn projective_double_and_sub() {
            let generator = $projective::GENERATOR;
            assert_eq!(generator.double() - &generator, generator);
        }

        #[test]
        fn projective_from_fraction() {
            let g = $affine::GENERATOR;
            let den = g.x() + g.y();
            let den2 = $crate::Field::square(&den);

            let p = $projective::from_fraction(g.x() * den, den, g.y() * den2, den2);
            assert_eq!(p, $projective::GENERATOR);

            let zero = den - den;
            let p = $projective::from_fraction(g.x(), zero, g.y(), den);
            assert!(bool::from(p.is_identity()));
        }

        #[test]
        fn test_vector_scalar_mult() {
            let generator = $projective::GENERATOR;

            for (k, coords) in $add_vectors
                .iter()
                .enumerate()
                .map(|(k, coords)| (<$scalar>::from(k as u64 + 1), *coords))
                .chain($mul_vectors.iter().cloned().map(|(k, x, y)| {
                    let mut repr = <$scalar as $crate::PrimeField>::Repr::default();
                    repr.as_mut().copy_from_slice(&k);
                    (
                        <$scalar as $crate::PrimeField>::from_repr(repr).unwrap(),
                        (x, y),
                    )
                }))
            {
                let p = generator * &k;
                assert_point_eq!(p, coords);
                assert_eq!($projective::mul_by_generator(&k), p);
            }
        }

        #[test]
        fn scalar_mult_edge_cases() {
            let generator = $projective::GENERATOR;
            let zero = <$scalar as $crate::Field>::ZERO;
            let one = <$scalar as $crate::Field>::ONE;

            assert!(bool::from((generator * &zero).is_identity()));
            assert_eq!(generator * &one, generator);
            assert_eq!(generator * &(-one), -generator);
            assert!(bool::from(($projective::IDENTITY * &one).is_identity()));
        }

        #[test]
        fn point_encoding_round_trip() {
            use $crate::group::{GroupEncoding, UncompressedEncoding};

            let mut p = $projective::GENERATOR;
            for _ in 0..8 {
                let affine = p.to_affine().unwrap();

                let compressed = affine.to_bytes();
                assert_eq!($affine::from_bytes(&compressed).unwrap(), affine);
                assert_eq!($projective::from_bytes(&compressed).unwrap(), p);

                let uncompressed = affine.to_uncompressed();
                assert_eq!($affine::from_uncompressed(&uncompressed).unwrap(), affine);

                p = p.double() + &$affine::GENERATOR;
            }

            let identity = $affine::IDENTITY.to_bytes();
            assert!(identity.as_ref().iter().all(|&b| b == 0));
            assert!(bool::from($affine::from_bytes(&identity).unwrap().is_identity()));

            let identity = $affine::IDENTITY.to_uncompressed();
            assert!(identity.as_ref().iter().all(|&b| b == 0));
            assert!(bool::from(
                $affine::from_uncompressed(&identity).unwrap().is_identity()
            ));
        }

        #[test]
        fn batch_normalize_with_identity() {
            use $crate::group::Curve;

            let g = $projective::GENERATOR;
            let points = [g, $projective::IDENTITY, g.double(), g.double() + &g];
            let mut affine = [$affine::IDENTITY; 4];
            $projective::batch_normalize(&points, &mut affine);

            for (p, a) in points.iter().zip(affine.iter()) {
                assert_eq!(Curve::to_affine(p), *a);
            }
            assert!(bool::from(affine[1].is_identity()));
        }
    };
}
