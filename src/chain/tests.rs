use super::*;
use crate::error::Error;
use crate::keys::{KeyPair, PrivateKey, PublicKey};
use rand::rngs::OsRng;

// d = SHA-256("secret")
const SAMPLE_PRIV_HEX: &str = "2bb80d537b1da3e38bd30361aa855686bde0eacd7162fef6a25fe97bf527a25b";

fn sample_pair() -> KeyPair<crate::ec::Secp256k1> {
    KeyPair::from_private(PrivateKey::from_hex(SAMPLE_PRIV_HEX).unwrap())
}

#[test]
fn test_bitcoin_mainnet_addresses() {
    let pair = sample_pair();
    let address = PublicAddress::<Bitcoin>::from_key_pair(Network::Mainnet, &pair);

    assert_eq!(address.address(), "1CYGAH11BRDtTfX13SDSjBvrxJpmugRwSm");
    assert_eq!(
        address.uncompressed_address(),
        "18vqhhW4oPu3Y8hvzTqsHB8LDVrZHupXNC"
    );
    assert_eq!(address.hash().len(), 21);
    assert_eq!(address.hash()[0], 0x00);
}

#[test]
fn test_bitcoin_testnet_version_byte() {
    let pair = sample_pair();
    let mainnet = PublicAddress::<Bitcoin>::from_key_pair(Network::Mainnet, &pair);
    let testnet = PublicAddress::<Bitcoin>::from_key_pair(Network::Testnet, &pair);

    assert_eq!(testnet.hash()[0], 0x6f);
    assert_eq!(mainnet.hash()[1..], testnet.hash()[1..]);
    assert_ne!(mainnet.address(), testnet.address());
}

#[test]
fn test_zilliqa_address() {
    let pair = sample_pair();
    let address = PublicAddress::<Zilliqa>::from_key_pair(Network::Mainnet, &pair);

    assert_eq!(
        address.address(),
        "88cfecced32f5b5bbeff1f318502f8040e51bb75"
    );
    // No version byte, no checksum: 20 bytes of hash, 40 hex characters.
    assert_eq!(address.hash().len(), 20);
    // Network selection does not enter Zilliqa derivation.
    let testnet = PublicAddress::<Zilliqa>::from_key_pair(Network::Testnet, &pair);
    assert_eq!(address.address(), testnet.address());
}

#[test]
fn test_neo_uses_secp256r1() {
    let mut rng = OsRng;
    let pair = KeyPair::<crate::ec::Secp256r1>::generate(&mut rng);
    let address = PublicAddress::<Neo>::from_key_pair(Network::Mainnet, &pair);

    assert_eq!(address.hash().len(), 21);
    assert_eq!(address.hash()[0], 0x00);
    assert!(!address.address().is_empty());
}

#[test]
fn test_address_from_public_key_matches_key_pair() {
    let pair = sample_pair();
    let from_pair = PublicAddress::<Bitcoin>::from_key_pair(Network::Mainnet, &pair);
    let from_public = PublicAddress::<Bitcoin>::new(Network::Mainnet, pair.public_key());
    assert_eq!(from_pair, from_public);
}

#[test]
fn test_wif_known_vectors() {
    let pair = sample_pair();
    let private = pair.private_key();

    assert_eq!(
        wif_encode(Network::Mainnet, private, false),
        "5J9YKiVU3AWNkCa2zfQpj1f2NAeMQhLsYU51N8NM28J1bMnmrEQ"
    );
    assert_eq!(
        wif_encode(Network::Mainnet, private, true),
        "KxghFc8eLYxeyg4ooWY9eRtq2RZs5b4i5tUgcFXDMyC5cWbEoP29"
    );
}

#[test]
fn test_wif_roundtrip() {
    let mut rng = OsRng;
    for &compressed in &[false, true] {
        for &network in &[Network::Mainnet, Network::Testnet] {
            let key = PrivateKey::<crate::ec::Secp256k1>::generate(&mut rng);
            let wif = wif_encode(network, &key, compressed);
            let (decoded, decoded_compressed) = wif_decode(network, &wif).unwrap();
            assert_eq!(decoded, key);
            assert_eq!(decoded_compressed, compressed);
        }
    }
}

#[test]
fn test_wif_decode_rejects_bad_input() {
    let pair = sample_pair();
    let wif = wif_encode(Network::Mainnet, pair.private_key(), true);

    // Wrong network.
    assert!(matches!(
        wif_decode::<crate::ec::Secp256k1>(Network::Testnet, &wif).unwrap_err(),
        Error::InvalidEncoding { .. }
    ));

    // Corrupted checksum.
    let mut corrupted = wif.clone().into_bytes();
    let last = corrupted.len() - 1;
    corrupted[last] = if corrupted[last] == b'2' { b'3' } else { b'2' };
    let corrupted = String::from_utf8(corrupted).unwrap();
    assert!(wif_decode::<crate::ec::Secp256k1>(Network::Mainnet, &corrupted).is_err());

    // Not Base58 at all.
    assert!(wif_decode::<crate::ec::Secp256k1>(Network::Mainnet, "0OIl").is_err());
}

#[test]
fn test_address_string_decodes_to_hash() {
    let pair = sample_pair();
    let address = PublicAddress::<Bitcoin>::from_key_pair(Network::Mainnet, &pair);

    let decoded = bs58::decode(address.address())
        .with_check(None)
        .into_vec()
        .unwrap();
    assert_eq!(decoded, address.hash());

    // Zilliqa addresses are bare hex of the hash.
    let zilliqa = PublicAddress::<Zilliqa>::from_key_pair(Network::Mainnet, &pair);
    assert_eq!(hex::decode(zilliqa.address()).unwrap(), zilliqa.hash());
}

#[test]
fn test_wif_decoded_key_reproduces_address() {
    let pair = sample_pair();
    let wif = wif_encode(Network::Mainnet, pair.private_key(), true);
    let (key, _) = wif_decode::<crate::ec::Secp256k1>(Network::Mainnet, &wif).unwrap();

    let public = PublicKey::from_private(&key);
    let address = PublicAddress::<Bitcoin>::new(Network::Mainnet, &public);
    assert_eq!(address.address(), "1CYGAH11BRDtTfX13SDSjBvrxJpmugRwSm");
}
