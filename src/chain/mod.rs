//! Chain profiles: per-network address and private key encodings
//!
//! A [`ChainProfile`] names a curve and the transformation from a serialized
//! public key to an address. The Bitcoin-style pipeline (version byte ‖
//! HASH160, Base58Check) is the trait's default behavior; profiles that
//! deviate override only the step that differs, the way Zilliqa swaps in a
//! bare SHA-256 tail rendered as hex.

mod address;
mod bitcoin;
mod neo;
mod wif;
mod zilliqa;

pub use address::{ChainProfile, PublicAddress};
pub use bitcoin::Bitcoin;
pub use neo::Neo;
pub use wif::{wif_decode, wif_encode};
pub use zilliqa::Zilliqa;

/// Deployment network, selecting the version bytes baked into addresses
/// and WIF strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Network {
    /// Production network.
    Mainnet,
    /// Test network.
    Testnet,
}

impl Network {
    /// Version byte prepended to public key hashes.
    pub fn pubkeyhash_prefix(&self) -> u8 {
        match self {
            Network::Mainnet => 0x00,
            Network::Testnet => 0x6f,
        }
    }

    /// Version byte prepended to WIF payloads.
    pub fn wif_prefix(&self) -> u8 {
        match self {
            Network::Mainnet => 0x80,
            Network::Testnet => 0xef,
        }
    }

    /// Suffix byte marking a WIF payload as a compressed-key import.
    pub fn wif_suffix(&self) -> u8 {
        0x01
    }
}

#[cfg(test)]
mod tests;
