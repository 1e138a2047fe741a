//! Private/public key pairs

use crate::ec::Curve;
use crate::keys::{PrivateKey, PublicKey};
use rand::{CryptoRng, RngCore};

/// A private key together with its derived public key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyPair<C: Curve> {
    private: PrivateKey<C>,
    public: PublicKey<C>,
}

impl<C: Curve> KeyPair<C> {
    /// Generate a fresh random key pair.
    pub fn generate<R: CryptoRng + RngCore>(rng: &mut R) -> Self {
        Self::from_private(PrivateKey::generate(rng))
    }

    /// Derive the pair for an existing private key.
    pub fn from_private(private: PrivateKey<C>) -> Self {
        let public = PublicKey::from_private(&private);
        KeyPair { private, public }
    }

    /// The private half.
    pub fn private_key(&self) -> &PrivateKey<C> {
        &self.private
    }

    /// The public half.
    pub fn public_key(&self) -> &PublicKey<C> {
        &self.public
    }
}
