//! The profile trait and derived public addresses

use crate::chain::Network;
use crate::ec::Curve;
use crate::hashes::hash160;
use crate::keys::{KeyPair, PublicKey};
use core::marker::PhantomData;

/// A chain's address-derivation recipe.
///
/// The defaults implement the Bitcoin-style pipeline: version byte followed
/// by `RIPEMD-160(SHA-256(key))`, rendered as Base58Check. Profiles override
/// the hash step, the rendering step, or both.
pub trait ChainProfile {
    /// The curve this chain's keys live on.
    type Curve: Curve;

    /// Chain name, e.g. `"bitcoin"`.
    const NAME: &'static str;

    /// Hash a serialized public key into the raw address payload.
    fn address_hash(network: Network, serialized_key: &[u8]) -> Vec<u8> {
        let mut out = Vec::with_capacity(21);
        out.push(network.pubkeyhash_prefix());
        out.extend_from_slice(&hash160(serialized_key));
        out
    }

    /// Render a raw address payload as the chain's address string.
    fn address_string(hash: &[u8]) -> String {
        bs58::encode(hash).with_check().into_string()
    }
}

/// A public key's addresses on a given chain and network, derived eagerly
/// for both the compressed and uncompressed key encodings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicAddress<P: ChainProfile> {
    network: Network,
    compressed_hash: Vec<u8>,
    uncompressed_hash: Vec<u8>,
    compressed: String,
    uncompressed: String,
    _profile: PhantomData<P>,
}

impl<P: ChainProfile> PublicAddress<P> {
    /// Derive the addresses of a public key.
    pub fn new(network: Network, public: &PublicKey<P::Curve>) -> Self {
        let compressed_hash = P::address_hash(network, &public.serialize_compressed());
        let uncompressed_hash = P::address_hash(network, &public.serialize_uncompressed());
        let compressed = P::address_string(&compressed_hash);
        let uncompressed = P::address_string(&uncompressed_hash);
        PublicAddress {
            network,
            compressed_hash,
            uncompressed_hash,
            compressed,
            uncompressed,
            _profile: PhantomData,
        }
    }

    /// Derive the addresses of a key pair's public half.
    pub fn from_key_pair(network: Network, pair: &KeyPair<P::Curve>) -> Self {
        Self::new(network, pair.public_key())
    }

    /// The network these addresses are for.
    pub fn network(&self) -> Network {
        self.network
    }

    /// The primary address string (compressed key encoding).
    pub fn address(&self) -> &str {
        &self.compressed
    }

    /// The address string of the uncompressed key encoding.
    pub fn uncompressed_address(&self) -> &str {
        &self.uncompressed
    }

    /// Raw address payload of the compressed key encoding.
    pub fn hash(&self) -> &[u8] {
        &self.compressed_hash
    }

    /// Raw address payload of the uncompressed key encoding.
    pub fn uncompressed_hash(&self) -> &[u8] {
        &self.uncompressed_hash
    }
}
