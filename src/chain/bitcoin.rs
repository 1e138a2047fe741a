//! Bitcoin-style profile

use crate::chain::ChainProfile;
use crate::ec::Secp256k1;

/// Bitcoin: secp256k1 keys, version-prefixed HASH160 addresses in
/// Base58Check. Uses the trait defaults unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bitcoin;

impl ChainProfile for Bitcoin {
    type Curve = Secp256k1;
    const NAME: &'static str = "bitcoin";
}
