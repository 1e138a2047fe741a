//! Zilliqa-style profile

use crate::chain::{ChainProfile, Network};
use crate::ec::Secp256k1;
use crate::hashes::sha256;

/// Zilliqa: secp256k1 keys, but the address is the last 20 bytes of a single
/// SHA-256 of the serialized key, rendered as bare lowercase hex. No network
/// version byte and no checksum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Zilliqa;

impl ChainProfile for Zilliqa {
    type Curve = Secp256k1;
    const NAME: &'static str = "zilliqa";

    fn address_hash(_network: Network, serialized_key: &[u8]) -> Vec<u8> {
        sha256(serialized_key)[12..].to_vec()
    }

    fn address_string(hash: &[u8]) -> String {
        hex::encode(hash)
    }
}
