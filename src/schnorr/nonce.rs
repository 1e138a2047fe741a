//! Deterministic nonce generation
//!
//! An HMAC-SHA-256 DRBG in the RFC 6979 construction: seeded with the
//! private scalar and the message digest, so the same (key, message) pair
//! always yields the same nonce stream and no per-signature entropy is
//! required.

use crate::hashes::hmac_sha256;

pub(crate) struct HmacDrbg {
    key: [u8; 32],
    value: [u8; 32],
}

impl HmacDrbg {
    /// Instantiate from seed material, conventionally `d ‖ digest`.
    pub(crate) fn new(seed: &[u8]) -> Self {
        let mut drbg = HmacDrbg {
            key: [0x00; 32],
            value: [0x01; 32],
        };
        drbg.update(Some(seed));
        drbg
    }

    /// Produce the next 32-byte output block.
    pub(crate) fn generate(&mut self) -> [u8; 32] {
        self.value = hmac_sha256(&self.key, &self.value);
        let out = self.value;
        self.update(None);
        out
    }

    fn update(&mut self, seed: Option<&[u8]>) {
        let mut data = Vec::with_capacity(32 + 1 + seed.map_or(0, |s| s.len()));
        data.extend_from_slice(&self.value);
        data.push(0x00);
        if let Some(seed) = seed {
            data.extend_from_slice(seed);
        }
        self.key = hmac_sha256(&self.key, &data);
        self.value = hmac_sha256(&self.key, &self.value);

        if let Some(seed) = seed {
            let mut data = Vec::with_capacity(32 + 1 + seed.len());
            data.extend_from_slice(&self.value);
            data.push(0x01);
            data.extend_from_slice(seed);
            self.key = hmac_sha256(&self.key, &data);
            self.value = hmac_sha256(&self.key, &self.value);
        }
    }
}
