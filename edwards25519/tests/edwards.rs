//! Extended coordinate arithmetic and encoding tests for edwards25519.

use edwards25519::{
    AffinePoint, CompressedEdwardsY, EdwardsPoint, Error, ORDER_BYTES, Scalar,
    UncompressedEdwardsPoint,
    ff::{Field, PrimeField},
    group::{Curve, Group, GroupEncoding, cofactor::CofactorGroup},
};
use hex_literal::hex;
use proptest::prelude::*;
use rand_core::OsRng;

/// `[k] G` for `k = 1..=5`, as big-endian `(x, y)`.
const ADD_TEST_VECTORS: &[([u8; 32], [u8; 32])] = &[
    (
        hex!("216936d3cd6e53fec0a4e231fdd6dc5c692cc7609525a7b2c9562d608f25d51a"),
        hex!("6666666666666666666666666666666666666666666666666666666666666658"),
    ),
    (
        hex!("36ab384c9f5a046c3d043b7d1833e7ac080d8e4515d7a45f83c5a14e2843ce0e"),
        hex!("2260cdf3092329c21da25ee8c9a21f5697390f51643851560e5f46ae6af8a3c9"),
    ),
    (
        hex!("67ae9c4a22928f491ff4ae743edac83a6343981981624886ac62485fd3f8e25c"),
        hex!("1267b1d177ee69aba126a18e60269ef79f16ec176724030402c3684878f5b4d4"),
    ),
    (
        hex!("203da8db56cff1468325d4b87a3520f91a739ec193ce1547493aa657c4c9f870"),
        hex!("47d0e827cb1595e1470eb88580d5716c4cf22832ea2f0ff0df38ab61ca32112f"),
    ),
    (
        hex!("49fda73eade3587bfcef7cf7d12da5de5c2819f93e1be1a591409cc0322ef233"),
        hex!("5f4825b298feae6fe02c6e148992466631282eca89430b5d10d21f83d676c8ed"),
    ),
];

/// RFC 8032 compressions of the points above.
const COMPRESSED_TEST_VECTORS: &[[u8; 32]] = &[
    hex!("5866666666666666666666666666666666666666666666666666666666666666"),
    hex!("c9a3f86aae465f0e56513864510f3997561fa2c9e85ea21dc2292309f3cd6022"),
    hex!("d4b4f5784868c3020403246717ec169ff79e26608ea126a1ab69ee77d1b16712"),
    hex!("2f1132ca61ab38dff00f2fea3228f24c6c71d58085b80e47e19515cb27e8d047"),
    hex!("edc876d6831fd2105d0b4389ca2e283166469289146e2ce06faefe98b22548df"),
];

/// `(k, [k] G)` for assorted big-endian scalars.
const MUL_TEST_VECTORS: &[([u8; 32], [u8; 32], [u8; 32])] = &[
    (
        hex!("0c49d52d0b5b4cd5d5ae4f7cda8e0e5d4ed74e08a95ae5e6f46b4e1ed9fb2c7d"),
        hex!("1e09050b9cc8876526a9b929c624b9c2d61692559f9ed800a1d061516651f645"),
        hex!("2672480a19afb6becf4b305003793dd590b2bf512010c02cc5815ecb114765f3"),
    ),
    (
        hex!("1000000000000000000000000000000014def9dea2f79cd65812631a5cf5d3ec"),
        hex!("5e96c92c3291ac013f5b1dce022923a396d3389f6ada584d36a9d29f70da2ad3"),
        hex!("6666666666666666666666666666666666666666666666666666666666666658"),
    ),
    (
        hex!("1000000000000000000000000000000000000000000000000000000000000000"),
        hex!("6a0c8b194571e874b82d904da36d43096bbe36d512e24ff8dcb2b00b57ffd3ec"),
        hex!("5f85adb7749cc735ec838bcccfe7d4b52902c6132998d7ac8e032cad031c42b8"),
    ),
];

/// A point of order 8.
const TORSION_POINT: [u8; 32] =
    hex!("c7176a703d4dd84fba3c0b760d10670f2a2053fa2c39ccc64ec7fd7792ac037a");

fn assert_point_eq(point: EdwardsPoint, (x, y): &([u8; 32], [u8; 32])) {
    let affine = point.to_affine();
    assert_eq!(&affine.x().to_repr(), x);
    assert_eq!(&affine.y().to_repr(), y);
}

#[test]
fn affine_to_extended() {
    let g_affine = AffinePoint::GENERATOR;
    let g = EdwardsPoint::GENERATOR;

    assert_eq!(EdwardsPoint::from(g_affine), g);
    assert_eq!(g.to_affine(), g_affine);
    assert!(!bool::from(g_affine.is_identity()));
    assert!(bool::from(EdwardsPoint::IDENTITY.to_affine().is_identity()));
    assert!(bool::from(EdwardsPoint::from(AffinePoint::IDENTITY).is_identity()));
}

#[test]
fn identity_addition() {
    let identity = EdwardsPoint::IDENTITY;
    let g = EdwardsPoint::GENERATOR;

    assert_eq!(identity + &g, g);
    assert_eq!(g + &identity, g);
    assert_eq!(identity + identity, identity);
    assert!(bool::from((g - &g).is_identity()));
}

#[test]
fn mixed_addition() {
    let g_affine = AffinePoint::GENERATOR;
    let g = EdwardsPoint::GENERATOR;

    assert_eq!(EdwardsPoint::IDENTITY + &g_affine, g);
    assert_eq!(g + &g_affine, g + &g);
    assert_eq!(g_affine + g, g.double());
    assert!(bool::from((g - g_affine).is_identity()));

    let mut p = g;
    p += g_affine;
    p -= &g;
    assert_eq!(p, g);
}

#[test]
fn repeated_addition() {
    let g = EdwardsPoint::GENERATOR;
    let mut p = g;

    for (i, expected) in ADD_TEST_VECTORS.iter().enumerate() {
        assert_point_eq(p, expected);
        assert_eq!(p.compress().0, COMPRESSED_TEST_VECTORS[i]);
        p += g;
    }
}

#[test]
fn repeated_doubling() {
    let g = EdwardsPoint::GENERATOR;
    assert_point_eq(g.double(), &ADD_TEST_VECTORS[1]);
    assert_point_eq(g.double().double(), &ADD_TEST_VECTORS[3]);
}

#[test]
fn scalar_multiplication() {
    let g = EdwardsPoint::GENERATOR;

    for (k, x, y) in MUL_TEST_VECTORS {
        let k = Scalar::from_repr(*k).unwrap();
        assert_point_eq(g * k, &(*x, *y));
        assert_point_eq(EdwardsPoint::mul_by_generator(&k), &(*x, *y));
        assert_point_eq(AffinePoint::GENERATOR * k, &(*x, *y));
    }

    for (i, expected) in ADD_TEST_VECTORS.iter().enumerate() {
        let k = Scalar::from(i as u64 + 1);
        assert_point_eq(g * &k, expected);
    }
}

#[test]
fn scalar_mul_edge_cases() {
    let g = EdwardsPoint::GENERATOR;
    assert!(bool::from((g * Scalar::ZERO).is_identity()));
    assert_eq!(g * Scalar::ONE, g);
    assert_eq!(g * -Scalar::ONE, -g);
    assert!(bool::from((EdwardsPoint::IDENTITY * Scalar::from(7u64)).is_identity()));

    let mut p = g;
    p *= Scalar::from(3u64);
    assert_eq!(p, g + g + g);
}

#[test]
fn group_order_annihilates_generator() {
    let p = EdwardsPoint::GENERATOR.mul_by_bytes(&ORDER_BYTES);
    assert!(bool::from(p.is_identity()));

    let p = EdwardsPoint::GENERATOR.mul_by_bytes(&hex!("02"));
    assert_eq!(p, EdwardsPoint::GENERATOR.double());
}

#[test]
fn negation() {
    let g = EdwardsPoint::GENERATOR;
    assert_eq!(-(-g), g);
    assert_ne!(-g, g);
    assert_eq!(-EdwardsPoint::IDENTITY, EdwardsPoint::IDENTITY);

    let g_affine = AffinePoint::GENERATOR;
    assert_eq!(-(-g_affine), g_affine);
    assert_eq!((-g_affine).y(), g_affine.y());
}

#[test]
fn compressed_identity_encoding() {
    assert_eq!(EdwardsPoint::IDENTITY.to_bytes(), CompressedEdwardsY::IDENTITY.0);
    assert_eq!(
        CompressedEdwardsY::IDENTITY.0,
        hex!("0100000000000000000000000000000000000000000000000000000000000000")
    );
    assert_eq!(
        EdwardsPoint::from_bytes(&CompressedEdwardsY::IDENTITY.0).unwrap(),
        EdwardsPoint::IDENTITY
    );
}

#[test]
fn decompression_round_trip() {
    for bytes in COMPRESSED_TEST_VECTORS {
        let p = EdwardsPoint::from_bytes(bytes).unwrap();
        assert!(bool::from(p.is_on_curve()));
        assert_eq!(&p.to_bytes(), bytes);
        assert_eq!(CompressedEdwardsY(*bytes).decompress().unwrap(), p.to_affine());
    }
}

#[test]
fn decode_rejects_bad_encodings() {
    // y = 2 has no x on the curve
    let bytes = hex!("0200000000000000000000000000000000000000000000000000000000000000");
    assert!(bool::from(EdwardsPoint::from_bytes(&bytes).is_none()));

    // y = p is not canonical
    let bytes = hex!("edffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff7f");
    assert!(bool::from(EdwardsPoint::from_bytes(&bytes).is_none()));

    // x = 0 with the sign bit set
    let bytes = hex!("0100000000000000000000000000000000000000000000000000000000000080");
    assert!(bool::from(EdwardsPoint::from_bytes(&bytes).is_none()));

    assert!(EdwardsPoint::try_from(&[0u8; 31][..]).is_err());
    assert_eq!(
        AffinePoint::try_from(&[0u8; 33][..]),
        Err(Error::InvalidEncoding)
    );
}

#[test]
fn order_two_point() {
    // (0, -1)
    let bytes = hex!("ecffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff7f");
    let p = EdwardsPoint::from_bytes(&bytes).unwrap();
    assert!(!bool::from(p.is_identity()));
    assert!(bool::from(p.double().is_identity()));
    assert!(bool::from(p.is_small_order()));
    assert!(!bool::from(p.is_torsion_free()));
}

#[test]
fn uncompressed_encoding() {
    let g = AffinePoint::GENERATOR;
    let bytes = g.to_uncompressed();
    assert_eq!(
        bytes.0,
        hex!(
            "1ad5258f602d56c9b2a7259560c72c695cdcd6fd31e2a4c0fe536ecdd3366921"
            "5866666666666666666666666666666666666666666666666666666666666666"
        )
    );
    assert_eq!(AffinePoint::from_uncompressed(&bytes).unwrap(), g);
    assert_eq!(AffinePoint::try_from(bytes.as_ref()).unwrap(), g);
    assert_eq!(EdwardsPoint::try_from(bytes.as_ref()).unwrap(), EdwardsPoint::GENERATOR);

    // the identity is all zeros, and the explicit (0, 1) form is refused
    let identity = AffinePoint::IDENTITY.to_uncompressed();
    assert_eq!(identity.0, [0u8; 64]);
    assert!(bool::from(AffinePoint::from_uncompressed(&identity).unwrap().is_identity()));

    let mut explicit = [0u8; 64];
    explicit[32] = 1;
    assert!(bool::from(
        AffinePoint::from_uncompressed(&UncompressedEdwardsPoint::from(explicit)).is_none()
    ));

    // (1, 1) is off the curve
    let mut off_curve = [0u8; 64];
    off_curve[0] = 1;
    off_curve[32] = 1;
    assert!(bool::from(
        AffinePoint::from_uncompressed(&UncompressedEdwardsPoint::from(off_curve)).is_none()
    ));
}

#[test]
fn torsion_subgroup() {
    let t8 = EdwardsPoint::from_bytes(&TORSION_POINT).unwrap();
    let g = EdwardsPoint::GENERATOR;

    assert!(bool::from(t8.is_small_order()));
    assert!(!bool::from(t8.is_torsion_free()));
    assert!(bool::from(g.is_torsion_free()));

    let mixed = g + t8;
    assert!(!bool::from(mixed.is_torsion_free()));
    assert_eq!(mixed.clear_cofactor(), g.mul_by_cofactor());
    assert!(bool::from(mixed.clear_cofactor().is_torsion_free()));
}

#[test]
fn batch_normalize() {
    let g = EdwardsPoint::GENERATOR;
    let points: Vec<EdwardsPoint> = (1..=5u64).map(|k| g * Scalar::from(k)).collect();
    let mut affine = vec![AffinePoint::IDENTITY; points.len()];
    EdwardsPoint::batch_normalize(&points, &mut affine);

    for (p, expected) in affine.iter().zip(ADD_TEST_VECTORS) {
        assert_eq!(&p.x().to_repr(), &expected.0);
        assert_eq!(&p.y().to_repr(), &expected.1);
    }
}

#[test]
fn sum_of_points() {
    let g = EdwardsPoint::GENERATOR;
    let points = [g, g, g];
    let owned: EdwardsPoint = points.into_iter().sum();
    let borrowed: EdwardsPoint = points.iter().sum();
    assert_eq!(owned, g * Scalar::from(3u64));
    assert_eq!(owned, borrowed);
}

#[test]
fn random_point_serialization() {
    let k = Scalar::random(&mut OsRng);
    let p = EdwardsPoint::generator() * k;

    let compressed = p.to_bytes();
    assert_eq!(EdwardsPoint::from_bytes(&compressed).unwrap(), p);

    let uncompressed = p.to_affine().to_uncompressed();
    assert_eq!(
        AffinePoint::from_uncompressed(&uncompressed).unwrap(),
        p.to_affine()
    );
}

#[test]
fn msm_matches_naive_sum() {
    let points: Vec<EdwardsPoint> = (0..17).map(|_| EdwardsPoint::random(&mut OsRng)).collect();
    let scalars: Vec<Scalar> = (0..17).map(|_| Scalar::random(&mut OsRng)).collect();

    let expected: EdwardsPoint = points.iter().zip(scalars.iter()).map(|(p, k)| p * k).sum();

    assert_eq!(EdwardsPoint::multiscalar_mul(&points, &scalars).unwrap(), expected);
    assert_eq!(
        EdwardsPoint::multiscalar_mul_vartime(&points, &scalars).unwrap(),
        expected
    );
    assert_eq!(
        EdwardsPoint::multiscalar_mul(&[], &[]).unwrap(),
        EdwardsPoint::IDENTITY
    );
}

#[test]
fn msm_rejects_mismatched_lengths() {
    let points = [EdwardsPoint::GENERATOR; 3];
    let scalars = [Scalar::ONE; 2];
    assert!(EdwardsPoint::multiscalar_mul(&points, &scalars).is_err());
    assert!(EdwardsPoint::multiscalar_mul_vartime(&points, &scalars).is_err());
}

proptest! {
    #[test]
    fn mul_is_consistent_with_addition(a in any::<u64>(), b in any::<u64>()) {
        let (a, b) = (Scalar::from(a), Scalar::from(b));
        let g = EdwardsPoint::GENERATOR;
        prop_assert_eq!(g * (a + b), g * a + g * b);
        prop_assert_eq!(g * (a * b), (g * a) * b);
    }

    #[test]
    fn addition_is_commutative_and_associative(a in any::<u64>(), b in any::<u64>(), c in any::<u64>()) {
        let g = EdwardsPoint::GENERATOR;
        let (p, q, r) = (g * Scalar::from(a), g * Scalar::from(b), g * Scalar::from(c));
        prop_assert_eq!(p + q, q + p);
        prop_assert_eq!((p + q) + r, p + (q + r));
        prop_assert!(bool::from((p - p).is_identity()));
        prop_assert!(bool::from(p.is_on_curve()));
    }

    #[test]
    fn compression_round_trips(k in any::<u64>()) {
        let p = EdwardsPoint::GENERATOR * Scalar::from(k);
        prop_assert_eq!(EdwardsPoint::from_bytes(&p.to_bytes()).unwrap(), p);
    }
}
