//! Public key points

use crate::ec::{AffinePoint, Curve};
use crate::error::{Error, Result};
use crate::keys::PrivateKey;

/// A public key for curve `C`: a validated, non-identity point.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicKey<C: Curve> {
    point: AffinePoint<C>,
}

impl<C: Curve> PublicKey<C> {
    /// Derive the public key `d·G` from a private key.
    pub fn from_private(private: &PrivateKey<C>) -> Self {
        let point = AffinePoint::generator().mul(private.scalar());
        // d ∈ [1, n−1] and G has order n, so d·G ≠ ∞.
        PublicKey { point }
    }

    /// Wrap an existing point, rejecting the identity.
    pub fn from_point(point: AffinePoint<C>) -> Result<Self> {
        if point.is_identity() {
            return Err(Error::PointNotOnCurve {
                context: "public key",
            });
        }
        Ok(PublicKey { point })
    }

    /// Parse a compressed (33-byte) or uncompressed (65-byte) encoding.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_point(AffinePoint::deserialize(bytes)?)
    }

    /// Parse a hex-encoded point.
    pub fn from_hex(s: &str) -> Result<Self> {
        let bytes = hex::decode(s).map_err(|_| Error::InvalidEncoding {
            context: "public key",
            reason: "not valid hex",
        })?;
        Self::from_bytes(&bytes)
    }

    /// The underlying curve point.
    pub fn point(&self) -> &AffinePoint<C> {
        &self.point
    }

    /// 33-byte compressed encoding.
    pub fn serialize_compressed(&self) -> Vec<u8> {
        self.point.serialize_compressed()
    }

    /// 65-byte uncompressed encoding.
    pub fn serialize_uncompressed(&self) -> Vec<u8> {
        self.point.serialize_uncompressed()
    }

    /// Lowercase hex of the compressed encoding.
    pub fn to_hex(&self) -> String {
        hex::encode(self.serialize_compressed())
    }

    /// Lowercase hex of the uncompressed encoding.
    pub fn to_hex_uncompressed(&self) -> String {
        hex::encode(self.serialize_uncompressed())
    }
}
