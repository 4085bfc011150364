//! Development-related functionality: test and benchmark macros shared by curve crates.

/// Write a series of `criterion`-based benchmarks for a field implementation.
#[macro_export]
macro_rules! bench_field {
    { $name:ident, $desc:expr, $fe_a:expr, $fe_b:expr } => {
        fn bench_add<M: ::criterion::measurement::Measurement>(
            group: &mut ::criterion::BenchmarkGroup<'_, M>,
        ) {
            let x = core::hint::black_box($fe_a);
            let y = core::hint::black_box($fe_b);
            group.bench_function("add", |b| b.iter(|| x + y));
        }

        fn bench_sub<M: ::criterion::measurement::Measurement>(
            group: &mut ::criterion::BenchmarkGroup<'_, M>,
        ) {
            let x = core::hint::black_box($fe_a);
            let y = core::hint::black_box($fe_b);
            group.bench_function("sub", |b| b.iter(|| x - y));
        }

        fn bench_mul<M: ::criterion::measurement::Measurement>(
            group: &mut ::criterion::BenchmarkGroup<'_, M>,
        ) {
            let x = core::hint::black_box($fe_a);
            let y = core::hint::black_box($fe_b);
            group.bench_function("mul", |b| b.iter(|| x * y));
        }

        fn bench_neg<M: ::criterion::measurement::Measurement>(
            group: &mut ::criterion::BenchmarkGroup<'_, M>,
        ) {
            let x = core::hint::black_box($fe_a);
            group.bench_function("neg", |b| b.iter(|| -x));
        }

        fn bench_invert<M: ::criterion::measurement::Measurement>(
            group: &mut ::criterion::BenchmarkGroup<'_, M>,
        ) {
            let x = core::hint::black_box($fe_a);
            group.bench_function("invert", |b| b.iter(|| x.invert()));
        }

        fn bench_square<'a, M: ::criterion::measurement::Measurement>(
            group: &mut ::criterion::BenchmarkGroup<'a, M>,
        ) {
            let x = core::hint::black_box($fe_a);
            group.bench_function("square", |b| b.iter(|| x.square()));
        }

        fn bench_sqrt<'a, M: ::criterion::measurement::Measurement>(
            group: &mut ::criterion::BenchmarkGroup<'a, M>,
        ) {
            use ::primefield::ff::Field;
            let x = core::hint::black_box($fe_a);
            group.bench_function("sqrt", |b| b.iter(|| x.sqrt()));
        }

        fn bench_wide<'a, M: ::criterion::measurement::Measurement>(
            group: &mut ::criterion::BenchmarkGroup<'a, M>,
        ) {
            use ::primefield::ff::FromUniformBytes;
            let bytes = core::hint::black_box([0xa5u8; 64]);
            group.bench_function("from_uniform_bytes", |b| {
                b.iter(|| <_ as FromUniformBytes<64>>::from_uniform_bytes(&bytes) == $fe_a)
            });
        }

        fn $name(c: &mut ::criterion::Criterion) {
            let mut group = c.benchmark_group($desc);
            bench_add(&mut group);
            bench_sub(&mut group);
            bench_mul(&mut group);
            bench_neg(&mut group);
            bench_invert(&mut group);
            bench_square(&mut group);
            bench_sqrt(&mut group);
            bench_wide(&mut group);
            group.finish();
        }
    };
}

/// Implement all tests for a type which impls the `PrimeField` trait.
#[macro_export]
macro_rules! test_primefield {
    ($fe:tt) => {
        $crate::test_primefield_constants!($fe);
        $crate::test_field_identity!($fe);
        $crate::test_field_invert!($fe);
        $crate::test_field_sqrt!($fe);
        $crate::test_field_uniform_bytes!($fe);
    };
}

/// Implement tests for constants defined by the `PrimeField` trait.
#[macro_export]
macro_rules! test_primefield_constants {
    ($fe:tt) => {
        #[test]
        fn multiplicative_generator_constant() {
            use $crate::ff::PrimeField as _;

            // The generator must be a quadratic nonresidue
            assert!(bool::from($crate::ff::Field::sqrt(&$fe::MULTIPLICATIVE_GENERATOR).is_none()));
        }

        #[test]
        fn root_of_unity_constant() {
            use $crate::ff::PrimeField as _;

            // ROOT_OF_UNITY^{2^s} mod m == 1
            let mut x = $fe::ROOT_OF_UNITY;
            for _ in 0..$fe::S {
                x = x.square();
            }
            assert_eq!(x, $fe::ONE);

            // ...and it has exactly that order
            let mut y = $fe::ROOT_OF_UNITY;
            for _ in 1..$fe::S {
                y = y.square();
            }
            assert_eq!(y, -$fe::ONE);
        }

        #[test]
        fn root_of_unity_inv_constant() {
            use $crate::ff::PrimeField as _;
            assert_eq!($fe::ROOT_OF_UNITY * $fe::ROOT_OF_UNITY_INV, $fe::ONE);
        }

        #[test]
        fn delta_constant() {
            use $crate::ff::PrimeField as _;

            // DELTA = MULTIPLICATIVE_GENERATOR^{2^s}
            let mut x = $fe::MULTIPLICATIVE_GENERATOR;
            for _ in 0..$fe::S {
                x = x.square();
            }
            assert_eq!(x, $fe::DELTA);
        }

        #[test]
        fn two_inv_constant() {
            use $crate::ff::PrimeField as _;
            assert_eq!($fe::from(2u32) * $fe::TWO_INV, $fe::ONE);
        }
    };
}

/// Implement field element identity tests.
#[macro_export]
macro_rules! test_field_identity {
    ($fe:tt) => {
        #[test]
        fn zero_is_additive_identity() {
            let zero = $fe::ZERO;
            let one = $fe::ONE;
            assert_eq!(zero.add(&zero), zero);
            assert_eq!(one.add(&zero), one);
            assert_eq!(one.sub(&one), zero);
            assert_eq!(-zero, zero);
        }

        #[test]
        fn one_is_multiplicative_identity() {
            let one = $fe::ONE;
            assert_eq!(one.multiply(&one), one);
            assert_eq!($fe::from(7u64).multiply(&one), $fe::from(7u64));
        }
    };
}

/// Implement field element inversion tests.
#[macro_export]
macro_rules! test_field_invert {
    ($fe:tt) => {
        #[test]
        fn invert() {
            let one = $fe::ONE;
            assert_eq!(one.invert().unwrap(), one);

            let three = one + &one + &one;
            let inv_three = three.invert().unwrap();
            assert_eq!(three * &inv_three, one);

            let minus_three = -three;
            let inv_minus_three = minus_three.invert().unwrap();
            assert_eq!(inv_minus_three, -inv_three);
            assert_eq!(three * &inv_minus_three, -one);

            assert!(bool::from($fe::ZERO.invert().is_none()));
        }
    };
}

/// Implement field element square root tests.
#[macro_export]
macro_rules! test_field_sqrt {
    ($fe:tt) => {
        #[test]
        fn sqrt() {
            for &n in &[1u64, 4, 9, 16, 25, 36, 49, 64] {
                let fe = $fe::from(n);
                let sqrt = $crate::ff::Field::sqrt(&fe).unwrap();
                assert_eq!(sqrt.square(), fe);
            }
        }

        #[test]
        fn sqrt_ratio() {
            let (is_square, root) =
                $crate::ff::Field::sqrt_ratio(&$fe::from(18u64), &$fe::from(2u64));
            assert!(bool::from(is_square));
            assert_eq!(root.square(), $fe::from(9u64));
        }
    };
}

/// Implement tests for wide reduction of uniform bytes.
#[macro_export]
macro_rules! test_field_uniform_bytes {
    ($fe:tt) => {
        #[test]
        fn from_uniform_bytes_reduces_small_values() {
            let mut bytes = [0u8; 64];
            bytes[63] = 42;
            assert_eq!(
                <$fe as $crate::ff::FromUniformBytes<64>>::from_uniform_bytes(&bytes),
                $fe::from(42u64)
            );
        }

        #[test]
        fn from_uniform_bytes_all_ones() {
            // 2^512 - 1 == (2^256)^2 - 1, computed through the field
            let bytes = [0xffu8; 64];
            let two_256 = $fe::from(2u64).pow_vartime(&[256]);
            assert_eq!(
                <$fe as $crate::ff::FromUniformBytes<64>>::from_uniform_bytes(&bytes),
                two_256.square() - $fe::ONE
            );
        }
    };
}
