//! Schnorr-style signatures over a message digest
//!
//! Signing is deterministic: the nonce `k` comes from an HMAC-SHA-256 DRBG
//! seeded with `d ‖ digest` (RFC 6979 construction), so no per-signature
//! randomness is consumed. The challenge binds the commitment, the signer's
//! compressed public key, and the digest:
//!
//! ```text
//! r = (k·G).x mod n
//! e = SHA-256(r ‖ Q_compressed ‖ digest) mod n
//! s = (k + e·d) mod n
//! ```
//!
//! Verification recomputes `R′ = s·G − e·Q` and accepts iff `R′ ≠ ∞` and
//! `R′.x mod n = r`. Callers hash their message first; `digest` is the
//! 32-byte output of that hash, not the raw message.

mod nonce;

use crate::ec::{be_bytes_fixed, AffinePoint, Curve};
use crate::error::{validate, Result};
use crate::hashes::sha256;
use crate::keys::{KeyPair, PublicKey};
use nonce::HmacDrbg;
use num_bigint::{BigInt, Sign};
use num_integer::Integer;
use num_traits::Zero;

/// A Schnorr signature `(r, s)` with both components in `[1, n − 1]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signature<C: Curve> {
    r: BigInt,
    s: BigInt,
    _curve: core::marker::PhantomData<C>,
}

impl<C: Curve> Signature<C> {
    /// Build a signature from its components, validating their range.
    pub fn new(r: BigInt, s: BigInt) -> Result<Self> {
        let n = &C::params().n;
        validate::scalar(
            !r.is_zero() && r.sign() != Sign::Minus && &r < n,
            "signature r",
            "must be in [1, n − 1]",
        )?;
        validate::scalar(
            !s.is_zero() && s.sign() != Sign::Minus && &s < n,
            "signature s",
            "must be in [1, n − 1]",
        )?;
        Ok(Signature {
            r,
            s,
            _curve: core::marker::PhantomData,
        })
    }

    /// The commitment component.
    pub fn r(&self) -> &BigInt {
        &self.r
    }

    /// The response component.
    pub fn s(&self) -> &BigInt {
        &self.s
    }

    /// Fixed-width `r ‖ s` encoding (64 bytes for the 256-bit curves).
    pub fn to_bytes(&self) -> Vec<u8> {
        let len = C::params().scalar_len();
        let mut out = Vec::with_capacity(2 * len);
        out.extend_from_slice(&be_bytes_fixed(&self.r, len));
        out.extend_from_slice(&be_bytes_fixed(&self.s, len));
        out
    }

    /// Parse the fixed-width `r ‖ s` encoding.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let len = C::params().scalar_len();
        validate::length("signature", bytes.len(), 2 * len)?;
        let r = BigInt::from_bytes_be(Sign::Plus, &bytes[..len]);
        let s = BigInt::from_bytes_be(Sign::Plus, &bytes[len..]);
        Self::new(r, s)
    }
}

/// `e = SHA-256(r ‖ Q_compressed ‖ digest) mod n`.
fn challenge<C: Curve>(r: &BigInt, public: &PublicKey<C>, digest: &[u8; 32]) -> BigInt {
    let params = C::params();
    let mut data = Vec::with_capacity(params.scalar_len() + 33 + 32);
    data.extend_from_slice(&be_bytes_fixed(r, params.scalar_len()));
    data.extend_from_slice(&public.serialize_compressed());
    data.extend_from_slice(digest);
    BigInt::from_bytes_be(Sign::Plus, &sha256(&data)).mod_floor(&params.n)
}

/// Sign a 32-byte message digest.
///
/// Deterministic: the same key and digest always produce the same signature.
/// Draws nonces from the DRBG until one yields nonzero `r` and `s` (all but
/// certain on the first draw).
pub fn sign<C: Curve>(digest: &[u8; 32], key_pair: &KeyPair<C>) -> Signature<C> {
    let params = C::params();
    let private = key_pair.private_key();
    let public = key_pair.public_key();

    let mut seed = zeroize::Zeroizing::new(Vec::with_capacity(params.scalar_len() + 32));
    seed.extend_from_slice(&private.to_bytes());
    seed.extend_from_slice(digest);
    let mut drbg = HmacDrbg::new(&seed);

    loop {
        let k = BigInt::from_bytes_be(Sign::Plus, &drbg.generate());
        // Out-of-range candidates are discarded, not reduced.
        if k.is_zero() || k >= params.n {
            continue;
        }

        let r = AffinePoint::<C>::generator().mul(&k).x().mod_floor(&params.n);
        if r.is_zero() {
            continue;
        }

        let e = challenge(&r, public, digest);
        let s = (&k + &e * private.scalar()).mod_floor(&params.n);
        if s.is_zero() {
            continue;
        }

        return Signature {
            r,
            s,
            _curve: core::marker::PhantomData,
        };
    }
}

/// Verify a signature over a 32-byte message digest.
pub fn verify<C: Curve>(digest: &[u8; 32], signature: &Signature<C>, public: &PublicKey<C>) -> bool {
    let params = C::params();
    let e = challenge(&signature.r, public, digest);

    // R′ = s·G − e·Q
    let s_g = AffinePoint::<C>::generator().mul(&signature.s);
    let e_q = public.point().mul(&e);
    let r_point = s_g.add(&e_q.negate());

    if r_point.is_identity() {
        return false;
    }
    r_point.x().mod_floor(&params.n) == signature.r
}

#[cfg(test)]
mod tests;
