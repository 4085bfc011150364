//! Hashing to edwards25519 with the `edwards25519_XMD:SHA-512_ELL2_*` suites.

#![cfg(feature = "hash2curve")]

use edwards25519::{
    AffinePoint, DEFAULT_APP_TAG, EdwardsPoint, Ed25519, HASH_SUITE_RO, encode_to_curve,
    ff::PrimeField, hash_to_curve, hash_to_scalar,
};
use hex_literal::hex;

const DST_RO: &[u8] = b"QUUX-V01-CS02-with-edwards25519_XMD:SHA-512_ELL2_RO_";
const DST_NU: &[u8] = b"QUUX-V01-CS02-with-edwards25519_XMD:SHA-512_ELL2_NU_";
const DST_SC: &[u8] = b"QUUX-V01-CS02-with-edwards25519_XMD:SHA-512_ELL2_RO_SC_";

struct TestVector {
    msg: &'static [u8],
    p_x: [u8; 32],
    p_y: [u8; 32],
}

fn assert_point(p: EdwardsPoint, vector: &TestVector) {
    let p = AffinePoint::from(p);
    assert_eq!(p.x().to_repr(), vector.p_x, "x for {:?}", vector.msg);
    assert_eq!(p.y().to_repr(), vector.p_y, "y for {:?}", vector.msg);
}

#[test]
fn hash_to_curve_vectors() {
    const TEST_VECTORS: &[TestVector] = &[
        TestVector {
            msg: b"",
            p_x: hex!("3c3da6925a3c3c268448dcabb47ccde5439559d9599646a8260e47b1e4822fc6"),
            p_y: hex!("09a6c8561a0b22bef63124c588ce4c62ea83a3c899763af26d795302e115dc21"),
        },
        TestVector {
            msg: b"abc",
            p_x: hex!("608040b42285cc0d72cbb3985c6b04c935370c7361f4b7fbdb1ae7f8c1a8ecad"),
            p_y: hex!("1a8395b88338f22e435bbd301183e7f20a5f9de643f11882fb237f88268a5531"),
        },
        TestVector {
            msg: b"abcdef0123456789",
            p_x: hex!("6d7fabf47a2dc03fe7d47f7dddd21082c5fb8f86743cd020f3fb147d57161472"),
            p_y: hex!("53060a3d140e7fbcda641ed3cf42c88a75411e648a1add71217f70ea8ec561a6"),
        },
        TestVector {
            msg: b"q128_qqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqq",
            p_x: hex!("5fb0b92acedd16f3bcb0ef83f5c7b7a9466b5f1e0d8d217421878ea3686f8524"),
            p_y: hex!("2eca15e355fcfa39d2982f67ddb0eea138e2994f5956ed37b7f72eea5e89d2f7"),
        },
    ];

    for vector in TEST_VECTORS {
        let p = hash_to_curve(DST_RO, vector.msg).unwrap();
        assert!(bool::from(p.is_on_curve()));
        assert!(bool::from(p.is_torsion_free()));
        assert_point(p, vector);
    }

    let msg = [b"a512_".as_slice(), &[b'a'; 512]].concat();
    let p = AffinePoint::from(hash_to_curve(DST_RO, &msg).unwrap());
    assert_eq!(
        p.x().to_repr(),
        hex!("0efcfde5898a839b00997fbe40d2ebe950bc81181afbd5cd6b9618aa336c1e8c")
    );
    assert_eq!(
        p.y().to_repr(),
        hex!("6dc2fc04f266c5c27f236a80b14f92ccd051ef1ff027f26a07f8c0f327d8f995")
    );
}

#[test]
fn encode_to_curve_vectors() {
    const TEST_VECTORS: &[TestVector] = &[
        TestVector {
            msg: b"",
            p_x: hex!("1ff2b70ecf862799e11b7ae744e3489aa058ce805dd323a936375a84695e76da"),
            p_y: hex!("222e314d04a4d5725e9f2aff9fb2a6b69ef375a1214eb19021ceab2d687f0f9b"),
        },
        TestVector {
            msg: b"abc",
            p_x: hex!("5f13cc69c891d86927eb37bd4afc6672360007c63f68a33ab423a3aa040fd2a8"),
            p_y: hex!("67732d50f9a26f73111dd1ed5dba225614e538599db58ba30aaea1f5c827fa42"),
        },
    ];

    for vector in TEST_VECTORS {
        let p = encode_to_curve(DST_NU, vector.msg).unwrap();
        assert!(bool::from(p.is_torsion_free()));
        assert_point(p, vector);
    }
}

#[test]
fn hash_to_scalar_vector() {
    let k = hash_to_scalar(DST_SC, b"abc").unwrap();
    assert_eq!(
        k.to_repr(),
        hex!("021c0dc535cf169f714fd9db1ca204a98a1ed318442da903ec832dc16887dc62")
    );
}

#[test]
fn hashing_is_deterministic() {
    let p = hash_to_curve(DST_RO, b"").unwrap();
    assert_eq!(p, hash_to_curve(DST_RO, b"").unwrap());
    assert_ne!(p, hash_to_curve(DST_RO, &[1]).unwrap());

    // domain separation
    assert_ne!(p, hash_to_curve(DST_NU, b"").unwrap());
    assert_ne!(p, encode_to_curve(DST_RO, b"").unwrap());
}

#[test]
fn default_dst() {
    let dst = [DEFAULT_APP_TAG, HASH_SUITE_RO].concat();
    assert_eq!(dst, b"curves-h2c-v1_edwards25519_XMD:SHA-512_ELL2_RO_");
    assert_eq!(Ed25519::hash(b"abc"), hash_to_curve(&dst, b"abc").unwrap());
}

#[test]
fn empty_dst_is_rejected() {
    assert!(hash_to_curve(b"", b"abc").is_err());
    assert!(encode_to_curve(b"", b"abc").is_err());
    assert!(hash_to_scalar(b"", b"abc").is_err());
}
