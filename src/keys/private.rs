//! Private key scalars

use crate::ec::{be_bytes_fixed, Curve};
use crate::error::{validate, Error, Result};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use core::fmt;
use core::marker::PhantomData;
use num_bigint::{BigInt, Sign};
use num_traits::Zero;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

/// A private key for curve `C`: a scalar `d` with `1 ≤ d < n`.
///
/// The byte encodings handed out by [`to_bytes`](Self::to_bytes) come wrapped
/// in [`Zeroizing`] so intermediate copies are wiped on drop. The scalar
/// itself lives in a heap-allocated big integer and is not wiped; callers
/// needing stronger hygiene should keep keys short-lived.
#[derive(Clone, PartialEq, Eq)]
pub struct PrivateKey<C: Curve> {
    scalar: BigInt,
    _curve: PhantomData<C>,
}

impl<C: Curve> PrivateKey<C> {
    /// Generate a uniformly random key by rejection sampling: draw
    /// `scalar_len` bytes, retry until the value lands in `[1, n − 1]`.
    pub fn generate<R: CryptoRng + RngCore>(rng: &mut R) -> Self {
        let params = C::params();
        let mut buf = Zeroizing::new(vec![0u8; params.scalar_len()]);
        loop {
            rng.fill_bytes(&mut buf);
            let candidate = BigInt::from_bytes_be(Sign::Plus, &buf);
            if !candidate.is_zero() && candidate < params.n {
                return PrivateKey {
                    scalar: candidate,
                    _curve: PhantomData,
                };
            }
        }
    }

    /// Build a key from a scalar, rejecting zero and out-of-range values.
    pub fn from_scalar(scalar: BigInt) -> Result<Self> {
        let params = C::params();
        validate::scalar(!scalar.is_zero(), "private key", "scalar must be nonzero")?;
        validate::scalar(
            scalar.sign() != Sign::Minus && scalar < params.n,
            "private key",
            "scalar must be below the curve order",
        )?;
        Ok(PrivateKey {
            scalar,
            _curve: PhantomData,
        })
    }

    /// Build a key from fixed-width big-endian bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        validate::length("private key", bytes.len(), C::params().scalar_len())?;
        Self::from_scalar(BigInt::from_bytes_be(Sign::Plus, bytes))
    }

    /// Build a key from a big-endian hex string.
    pub fn from_hex(s: &str) -> Result<Self> {
        let bytes = Zeroizing::new(hex::decode(s).map_err(|_| Error::InvalidEncoding {
            context: "private key",
            reason: "not valid hex",
        })?);
        Self::from_bytes(&bytes)
    }

    /// Build a key from standard base64.
    pub fn from_base64(s: &str) -> Result<Self> {
        let bytes = Zeroizing::new(BASE64.decode(s).map_err(|_| Error::InvalidEncoding {
            context: "private key",
            reason: "not valid base64",
        })?);
        Self::from_bytes(&bytes)
    }

    /// Fixed-width big-endian encoding, wiped on drop.
    pub fn to_bytes(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(be_bytes_fixed(&self.scalar, C::params().scalar_len()))
    }

    /// Lowercase hex encoding.
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes().as_slice())
    }

    /// Standard base64 encoding.
    pub fn to_base64(&self) -> String {
        BASE64.encode(self.to_bytes().as_slice())
    }

    pub(crate) fn scalar(&self) -> &BigInt {
        &self.scalar
    }
}

// The scalar never appears in debug output.
impl<C: Curve> fmt::Debug for PrivateKey<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("curve", &C::NAME)
            .field("scalar", &"<redacted>")
            .finish()
    }
}
