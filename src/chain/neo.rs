//! Neo-style profile

use crate::chain::ChainProfile;
use crate::ec::Secp256r1;

/// Neo: keys on secp256r1 rather than secp256k1; address derivation follows
/// the version-prefixed HASH160 defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neo;

impl ChainProfile for Neo {
    type Curve = Secp256r1;
    const NAME: &'static str = "neo";
}
