//! Wallet Import Format encoding of private keys
//!
//! `Base58Check(version ‖ d ‖ [0x01])`: the network's WIF version byte, the
//! fixed-width private scalar, and a trailing `0x01` iff the key is meant to
//! be imported as a compressed public key.

use crate::chain::Network;
use crate::ec::Curve;
use crate::error::{validate, Error, Result};
use crate::keys::PrivateKey;
use zeroize::Zeroizing;

/// Encode a private key as WIF for the given network.
pub fn wif_encode<C: Curve>(network: Network, private: &PrivateKey<C>, compressed: bool) -> String {
    let scalar_len = C::params().scalar_len();
    let mut payload = Zeroizing::new(Vec::with_capacity(1 + scalar_len + 1));
    payload.push(network.wif_prefix());
    payload.extend_from_slice(&private.to_bytes());
    if compressed {
        payload.push(network.wif_suffix());
    }
    bs58::encode(payload.as_slice()).with_check().into_string()
}

/// Decode a WIF string, returning the key and whether it carried the
/// compressed-import marker. The network's version byte must match.
pub fn wif_decode<C: Curve>(network: Network, wif: &str) -> Result<(PrivateKey<C>, bool)> {
    let payload = Zeroizing::new(bs58::decode(wif).with_check(None).into_vec().map_err(
        |_| Error::InvalidEncoding {
            context: "WIF",
            reason: "not valid Base58Check",
        },
    )?);

    let scalar_len = C::params().scalar_len();
    let compressed = match payload.len() {
        len if len == 1 + scalar_len => false,
        len if len == 2 + scalar_len => {
            validate::encoding(
                payload[1 + scalar_len] == network.wif_suffix(),
                "WIF",
                "compressed-key suffix must be 0x01",
            )?;
            true
        }
        len => {
            return Err(Error::Length {
                context: "WIF payload",
                expected: 1 + scalar_len,
                actual: len,
            })
        }
    };

    validate::encoding(
        payload[0] == network.wif_prefix(),
        "WIF",
        "version byte does not match the network",
    )?;

    let key = PrivateKey::from_bytes(&payload[1..1 + scalar_len])?;
    Ok((key, compressed))
}
