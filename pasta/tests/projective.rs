//! Projective arithmetic tests for Pallas and Vesta.

mod pallas {
    use hex_literal::hex;
    use pasta::{
        Fq,
        ff::Field,
        group::{Group, GroupEncoding, prime::PrimeCurveAffine},
        pallas::{AffinePoint, ProjectivePoint, Scalar},
        primeorder::{
            impl_projective_arithmetic_tests,
            msm::{multi_scalar_mul, multi_scalar_mul_vartime},
        },
    };
    use proptest::prelude::*;
    use rand_core::OsRng;

    /// `[k] G` for `k = 1..=5`.
    const ADD_TEST_VECTORS: &[([u8; 32], [u8; 32])] = &[
        (
            hex!("40000000000000000000000000000000224698fc094cf91b992d30ed00000000"),
            hex!("0000000000000000000000000000000000000000000000000000000000000002"),
        ),
        (
            hex!("1c0000000000000000000000000000000efee2ee4411acfc1303c567b0000003"),
            hex!("2b00000000000000000000000000000017076ec9563fb75e8aea5cdf3bfffffc"),
        ),
        (
            hex!("08e7566fbaa967edb84c45a7474edf4cfff647de5af5fc5cb7f08a3beb32d263"),
            hex!("301d0a4cc182e0f43897d34a1f5ef0cbc7c89e18de142df1187ffb7b17eb87c5"),
        ),
        (
            hex!("18db920d8e4a51c0c4a477d7e357919b4040698b612794f478b8bcfb8ebc86fc"),
            hex!("0d704e91a9bd6f5acbf46e1b97ea629a9a1503a7d7ba5091c2a901cb92f46ca2"),
        ),
        (
            hex!("330aaaecedffbd4ccd1e2d490ddb9ffdb3d7db2a600cb15d46fb61f4fd700ed1"),
            hex!("0470a2a2a4ab53eedb1671ab21adb4b908f751349a7926d827446ca1e8709285"),
        ),
    ];

    /// `(k, [k] G)` for assorted big-endian scalars.
    const MUL_TEST_VECTORS: &[([u8; 32], [u8; 32], [u8; 32])] = &[
        (
            hex!("2a1a4e6a42e4f2c1a5b5ccd3c0f3e6d2f56e1b7a9c8d0e3f4a5b6c7d8e9f0a1b"),
            hex!("3fe2407d60d40f31037582dddf10062234298353521329f5d907aab765cda30f"),
            hex!("157b6c73b4be6661c202d395f6c8575ae323f7c1e5c7d4c3d9e309702563c1ce"),
        ),
        (
            hex!("40000000000000000000000000000000224698fc0994a8dd8c46eb2100000000"),
            hex!("40000000000000000000000000000000224698fc094cf91b992d30ed00000000"),
            hex!("40000000000000000000000000000000224698fc094cf91b992d30ecffffffff"),
        ),
        (
            hex!("0000000000000100000000000000000000000000000000000000000000003039"),
            hex!("3bcaff0674a7d4a1a4a044c8933ca123f893317b51af5b823fad966f8204285d"),
            hex!("2fa0247984904f59942788a10341f425880c6ae94a8459b6f89b5cc74c41bb7c"),
        ),
    ];

    impl_projective_arithmetic_tests!(
        AffinePoint,
        ProjectivePoint,
        Scalar,
        ADD_TEST_VECTORS,
        MUL_TEST_VECTORS
    );

    #[test]
    fn generator_self_test() {
        let g = ProjectivePoint::generator();
        let g2 = g + g;
        assert_eq!(g2, g.double());

        let g3 = g2 + g;
        assert_eq!(g3, g * Scalar::from(3u64));
    }

    #[test]
    fn random_point_serialization() {
        let k = Scalar::random(&mut OsRng);
        let p = ProjectivePoint::generator() * k;

        let compressed = p.to_bytes();
        assert_eq!(compressed.len(), 32);
        assert_eq!(ProjectivePoint::from_bytes(&compressed).unwrap(), p);

        let affine = p.to_affine().unwrap();
        let uncompressed = affine.to_uncompressed();
        assert_eq!(uncompressed.as_ref().len(), 64);
        assert_eq!(AffinePoint::from_uncompressed(&uncompressed).unwrap(), affine);
        assert_eq!(AffinePoint::try_from(uncompressed.as_ref()).unwrap(), affine);
    }

    #[test]
    fn negation_is_an_involution() {
        let g = ProjectivePoint::generator();
        assert_eq!(-(-g), g);
        assert_ne!(-g, g);

        let identity = ProjectivePoint::identity();
        assert_eq!(-(-identity), identity);
        assert_eq!(-identity, identity);

        let g = AffinePoint::generator();
        assert_eq!(-(-g), g);
    }

    #[test]
    fn group_order_annihilates_generator() {
        let order = hex!("40000000000000000000000000000000224698fc0994a8dd8c46eb2100000001");
        let p = ProjectivePoint::GENERATOR.mul_by_bytes(&order);
        assert!(bool::from(p.is_identity()));

        let p = ProjectivePoint::GENERATOR.mul_by_bytes(&hex!("02"));
        assert_eq!(p, ProjectivePoint::GENERATOR.double());
    }

    #[test]
    fn compressed_generator_encoding() {
        // x = p - 1 in little-endian order, y = 2 is even
        let mut expected = hex!("40000000000000000000000000000000224698fc094cf91b992d30ed00000000");
        expected.reverse();
        assert_eq!(AffinePoint::GENERATOR.to_bytes(), expected);
    }

    #[test]
    fn decode_rejects_bad_encodings() {
        // x = 1 gives x³ + 5 = 6, not a square
        let mut bytes = [0u8; 32];
        bytes[0] = 1;
        assert!(bool::from(AffinePoint::from_bytes(&bytes).is_none()));

        // x = p is not canonical
        let mut bytes = hex!("40000000000000000000000000000000224698fc094cf91b992d30ed00000001");
        bytes.reverse();
        assert!(bool::from(AffinePoint::from_bytes(&bytes).is_none()));

        assert!(AffinePoint::try_from(&[0u8; 31][..]).is_err());
    }

    #[test]
    fn msm_matches_naive_sum() {
        let points: Vec<ProjectivePoint> =
            (0..17).map(|_| ProjectivePoint::random(&mut OsRng)).collect();
        let scalars: Vec<Fq> = (0..17).map(|_| Fq::random(&mut OsRng)).collect();

        let expected: ProjectivePoint =
            points.iter().zip(scalars.iter()).map(|(p, k)| p * k).sum();

        assert_eq!(multi_scalar_mul(&points, &scalars).unwrap(), expected);
        assert_eq!(multi_scalar_mul_vartime(&points, &scalars).unwrap(), expected);
    }

    #[test]
    fn msm_rejects_mismatched_lengths() {
        let points = [ProjectivePoint::GENERATOR; 3];
        let scalars = [Fq::ONE; 2];
        assert!(multi_scalar_mul(&points, &scalars).is_err());
        assert!(multi_scalar_mul_vartime(&points, &scalars).is_err());
    }

    proptest! {
        #[test]
        fn mul_is_consistent_with_addition(a in any::<u64>(), b in any::<u64>()) {
            let (a, b) = (Scalar::from(a), Scalar::from(b));
            let g = ProjectivePoint::GENERATOR;
            prop_assert_eq!(g * (a + b), g * a + g * b);
            prop_assert_eq!(g * (a * b), (g * a) * b);
        }

        #[test]
        fn addition_is_commutative_and_associative(a in any::<u64>(), b in any::<u64>(), c in any::<u64>()) {
            let g = ProjectivePoint::GENERATOR;
            let (p, q, r) = (g * Scalar::from(a), g * Scalar::from(b), g * Scalar::from(c));
            prop_assert_eq!(p + q, q + p);
            prop_assert_eq!((p + q) + r, p + (q + r));
            prop_assert!(bool::from((p - p).is_identity()));
        }
    }
}

mod vesta {
    use hex_literal::hex;
    use pasta::{
        group::{Group, GroupEncoding},
        primeorder::impl_projective_arithmetic_tests,
        vesta::{AffinePoint, ProjectivePoint, Scalar},
    };
    use rand_core::OsRng;

    /// `[k] G` for `k = 1..=5`.
    const ADD_TEST_VECTORS: &[([u8; 32], [u8; 32])] = &[
        (
            hex!("40000000000000000000000000000000224698fc0994a8dd8c46eb2100000000"),
            hex!("0000000000000000000000000000000000000000000000000000000000000002"),
        ),
        (
            hex!("1c0000000000000000000000000000000efee2ee443109e0ed5f06de70000003"),
            hex!("2b00000000000000000000000000000017076ec9566fe174da3fa5fa2bfffffc"),
        ),
        (
            hex!("377879a8395c9513c6f41a28d0a526b02402e1bada0d56155aee6feb6f55ce5f"),
            hex!("2006adf2119a4d16713baebef70862477b45d94acebc2a59e7bd83fc4ae53086"),
        ),
        (
            hex!("2be57b298030bf8e8f3a0764c099646164c666d826c34d79c0a2267ea73790f7"),
            hex!("257f509c18db376307a5af7b0ca26e106dab3f8d433f87d88c7c0aea5ff54191"),
        ),
        (
            hex!("23e8a52d2690506b2a5a5727f7cfc146cb6aa34db123a45bd70ab3ef1da38054"),
            hex!("13926ae0d3ac35a047c7c46cb7618b539108f6aab81f6a6b05830d42e7042db4"),
        ),
    ];

    /// `(k, [k] G)` for assorted big-endian scalars.
    const MUL_TEST_VECTORS: &[([u8; 32], [u8; 32], [u8; 32])] = &[
        (
            hex!("2a1a4e6a42e4f2c1a5b5ccd3c0f3e6d2f56e1b7a9c8d0e3f4a5b6c7d8e9f0a1b"),
            hex!("3680f05c620a31b36a9761202f82c2b2e0b69bfcafe71550667a3a13285baa5a"),
            hex!("3686d12a8bb38191e61f3d3e093ec58a76a5b499b0f9ed161c45d19b76f7c362"),
        ),
        (
            hex!("40000000000000000000000000000000224698fc094cf91b992d30ed00000000"),
            hex!("40000000000000000000000000000000224698fc0994a8dd8c46eb2100000000"),
            hex!("40000000000000000000000000000000224698fc0994a8dd8c46eb20ffffffff"),
        ),
        (
            hex!("0000000000000100000000000000000000000000000000000000000000003039"),
            hex!("3375d6c3cfe7e0b94d5ec7eb98a6b5cc0f0cdb5a7bc5c6b7290969ac5f4fec4e"),
            hex!("02c0a0de5e2d8d40818e8a32ae1893fbec0360333e0ae60ea457b849e88de7d6"),
        ),
    ];

    impl_projective_arithmetic_tests!(
        AffinePoint,
        ProjectivePoint,
        Scalar,
        ADD_TEST_VECTORS,
        MUL_TEST_VECTORS
    );

    #[test]
    fn group_order_annihilates_generator() {
        let order = hex!("40000000000000000000000000000000224698fc094cf91b992d30ed00000001");
        let p = ProjectivePoint::GENERATOR.mul_by_bytes(&order);
        assert!(bool::from(p.is_identity()));
    }

    #[test]
    fn random_point_round_trip() {
        let p = ProjectivePoint::random(&mut OsRng);
        assert_eq!(ProjectivePoint::from_bytes(&p.to_bytes()).unwrap(), p);
    }
}
