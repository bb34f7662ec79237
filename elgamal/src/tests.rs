use super::*;
use crate::codec::encrypt_with_ephemeral;
use curve::{CurveError, DomainParams, KeyPair, Point};
use num_bigint::BigUint;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn test_encrypt_decrypt_every_toy_point() {
    let params = DomainParams::toy();
    let curve = params.curve();
    let mut rng = StdRng::seed_from_u64(42);
    let keys = KeyPair::generate(&params, &mut rng).expect("keygen");

    for k in 0..13u64 {
        let message = curve.mul_u64(params.generator(), k).expect("mul");
        let ct = encrypt(&params, keys.public_point(), &message, &mut rng).expect("encrypt");
        let decrypted = decrypt(&params, keys.private_scalar(), &ct).expect("decrypt");
        assert_eq!(decrypted, message, "k = {k}");
    }
}

#[test]
fn test_encrypt_decrypt_secp256k1() {
    let params = DomainParams::secp256k1();
    let mut rng = StdRng::seed_from_u64(42);
    let keys = KeyPair::generate(&params, &mut rng).expect("keygen");
    let message = params
        .mul_generator(&BigUint::from(0xfeed_u32))
        .expect("mul");

    let ct = encrypt(&params, keys.public_point(), &message, &mut rng).expect("encrypt");
    assert_ne!(ct.c2, message);
    assert_eq!(
        decrypt(&params, keys.private_scalar(), &ct).expect("decrypt"),
        message
    );
}

#[test]
fn test_known_ciphertext() {
    // d = 7, Q = 7G; M = 9G; y = 3:
    // C1 = 3G = (8, 3), C2 = 9G + 21G = 30G = 4G = (10, 2)
    let params = DomainParams::toy();
    let curve = params.curve();
    let keys = KeyPair::from_private(&params, BigUint::from(7u32)).expect("keys");
    let message = curve.point_u64(10, 9).expect("point");

    let ct = encrypt_with_ephemeral(&params, keys.public_point(), &message, &BigUint::from(3u32))
        .expect("encrypt");
    assert_eq!(ct.c1, curve.point_u64(8, 3).expect("point"));
    assert_eq!(ct.c2, curve.point_u64(10, 2).expect("point"));

    assert_eq!(
        decrypt(&params, keys.private_scalar(), &ct).expect("decrypt"),
        message
    );
}

#[test]
fn test_wrong_key_does_not_decrypt() {
    let params = DomainParams::secp256k1();
    let mut rng = StdRng::seed_from_u64(42);
    let keys = KeyPair::generate(&params, &mut rng).expect("keygen");
    let other = KeyPair::generate(&params, &mut rng).expect("keygen");
    let message = params.mul_generator(&BigUint::from(5u32)).expect("mul");

    let ct = encrypt(&params, keys.public_point(), &message, &mut rng).expect("encrypt");
    let wrong = decrypt(&params, other.private_scalar(), &ct).expect("decrypt");
    assert_ne!(wrong, message);
}

#[test]
fn test_ciphertexts_are_randomized() {
    let params = DomainParams::secp256k1();
    let mut rng = StdRng::seed_from_u64(42);
    let keys = KeyPair::generate(&params, &mut rng).expect("keygen");
    let message = params.mul_generator(&BigUint::from(5u32)).expect("mul");

    let a = encrypt(&params, keys.public_point(), &message, &mut rng).expect("encrypt");
    let b = encrypt(&params, keys.public_point(), &message, &mut rng).expect("encrypt");
    assert_ne!(a, b);
}

#[test]
fn test_rejects_invalid_inputs() {
    let params = DomainParams::toy();
    let field = params.curve().field();
    let mut rng = StdRng::seed_from_u64(42);
    let keys = KeyPair::from_private(&params, BigUint::from(4u32)).expect("keys");
    let off_curve = Point::Affine {
        x: field.from_u64(2),
        y: field.from_u64(5),
    };
    let message = params.generator().clone();

    assert_eq!(
        encrypt(&params, &Point::Infinity, &message, &mut rng),
        Err(ElGamalError::InvalidPublicKey)
    );
    assert_eq!(
        encrypt(&params, &off_curve, &message, &mut rng),
        Err(ElGamalError::InvalidPublicKey)
    );
    assert_eq!(
        encrypt(&params, keys.public_point(), &off_curve, &mut rng),
        Err(ElGamalError::InvalidMessage)
    );

    let ct = Ciphertext {
        c1: off_curve.clone(),
        c2: message.clone(),
    };
    assert_eq!(
        decrypt(&params, keys.private_scalar(), &ct),
        Err(ElGamalError::MalformedCiphertext)
    );

    let ct = encrypt(&params, keys.public_point(), &message, &mut rng).expect("encrypt");
    assert_eq!(
        decrypt(&params, &BigUint::from(0u32), &ct),
        Err(ElGamalError::Curve(CurveError::InvalidScalarRange))
    );
}

#[test]
fn test_ciphertext_serialization_roundtrip() {
    let params = DomainParams::toy();
    let mut rng = StdRng::seed_from_u64(42);
    let keys = KeyPair::generate(&params, &mut rng).expect("keygen");
    let message = Point::Infinity;

    let ct = encrypt(&params, keys.public_point(), &message, &mut rng).expect("encrypt");
    let bytes = bincode::serialize(&ct).expect("serialize");
    let ct2: Ciphertext = bincode::deserialize(&bytes).expect("deserialize");

    assert_eq!(ct2, ct);
    assert_eq!(
        decrypt(&params, keys.private_scalar(), &ct2).expect("decrypt"),
        Point::Infinity
    );
}
