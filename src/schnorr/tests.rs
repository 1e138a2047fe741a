use super::*;
use crate::ec::{Curve, Secp256k1, Secp256r1};
use crate::error::Error;
use crate::hashes::sha256;
use crate::keys::{KeyPair, PrivateKey};
use num_bigint::BigInt;
use rand::rngs::OsRng;

fn sample_pair() -> KeyPair<Secp256k1> {
    // d = SHA-256("secret")
    let private = PrivateKey::from_hex(
        "2bb80d537b1da3e38bd30361aa855686bde0eacd7162fef6a25fe97bf527a25b",
    )
    .unwrap();
    KeyPair::from_private(private)
}

#[test]
fn test_sign_known_answer() {
    let pair = sample_pair();
    let digest = sha256(b"hello");
    let sig = sign(&digest, &pair);
    assert_eq!(
        hex::encode(&sig.to_bytes()[..32]),
        "95ade2b0fd9caa90e4993e59232b774e4dc2082fdb8a30267abf21fc6a076715"
    );
    assert_eq!(
        hex::encode(&sig.to_bytes()[32..]),
        "f76f7d47137268c34437ec2b54ec07e63106b1856b37451727fed20ed2156f07"
    );
    assert!(verify(&digest, &sig, pair.public_key()));
}

#[test]
fn test_sign_is_deterministic() {
    let pair = sample_pair();
    let digest = sha256(b"same message, same signature");
    assert_eq!(sign(&digest, &pair), sign(&digest, &pair));
}

#[test]
fn test_distinct_digests_distinct_signatures() {
    let pair = sample_pair();
    let a = sign(&sha256(b"one"), &pair);
    let b = sign(&sha256(b"two"), &pair);
    assert_ne!(a, b);
}

#[test]
fn test_verify_rejects_tampering() {
    let pair = sample_pair();
    let digest = sha256(b"hello");
    let sig = sign(&digest, &pair);

    // Flipped digest bit.
    let mut flipped = digest;
    flipped[0] ^= 1;
    assert!(!verify(&flipped, &sig, pair.public_key()));

    // Tampered r.
    let tampered = Signature::<Secp256k1>::new(
        sig.r() + BigInt::from(1),
        sig.s().clone(),
    )
    .unwrap();
    assert!(!verify(&digest, &tampered, pair.public_key()));

    // Wrong public key.
    let mut rng = OsRng;
    let other = KeyPair::<Secp256k1>::generate(&mut rng);
    assert!(!verify(&digest, &sig, other.public_key()));
}

#[test]
fn test_roundtrip_random_keys() {
    let mut rng = OsRng;
    for _ in 0..5 {
        let pair = KeyPair::<Secp256k1>::generate(&mut rng);
        let digest = sha256(pair.public_key().to_hex().as_bytes());
        let sig = sign(&digest, &pair);
        assert!(verify(&digest, &sig, pair.public_key()));
    }
}

#[test]
fn test_works_on_secp256r1() {
    let mut rng = OsRng;
    let pair = KeyPair::<Secp256r1>::generate(&mut rng);
    let digest = sha256(b"other curve, same engine");
    let sig = sign(&digest, &pair);
    assert!(verify(&digest, &sig, pair.public_key()));
    let mut flipped = digest;
    flipped[31] ^= 1;
    assert!(!verify(&flipped, &sig, pair.public_key()));
}

#[test]
fn test_signature_encoding_roundtrip() {
    let pair = sample_pair();
    let sig = sign(&sha256(b"encode me"), &pair);
    let bytes = sig.to_bytes();
    assert_eq!(bytes.len(), 64);
    assert_eq!(Signature::<Secp256k1>::from_bytes(&bytes).unwrap(), sig);
}

#[test]
fn test_signature_rejects_out_of_range_components() {
    assert!(matches!(
        Signature::<Secp256k1>::new(BigInt::from(0), BigInt::from(1)).unwrap_err(),
        Error::InvalidScalar { .. }
    ));
    assert!(matches!(
        Signature::<Secp256k1>::new(BigInt::from(1), BigInt::from(0)).unwrap_err(),
        Error::InvalidScalar { .. }
    ));

    let order = Secp256k1::params().n.clone();
    assert!(Signature::<Secp256k1>::new(order.clone(), BigInt::from(1)).is_err());
    assert!(Signature::<Secp256k1>::new(BigInt::from(1), order).is_err());

    // Wrong length.
    assert!(matches!(
        Signature::<Secp256k1>::from_bytes(&[0u8; 63]).unwrap_err(),
        Error::Length { .. }
    ));
}
