//! secp256k1 domain parameters
//!
//! The Koblitz curve `y² = x³ + 7` over `F_p` with `p = 2²⁵⁶ − 2³² − 977`,
//! used by the Bitcoin-like and Zilliqa-like chain profiles.

use crate::ec::{Curve, CurveParams};
use std::sync::OnceLock;

/// Marker type for the secp256k1 curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Secp256k1;

static PARAMS: OnceLock<CurveParams> = OnceLock::new();

impl Curve for Secp256k1 {
    const NAME: &'static str = "secp256k1";

    fn params() -> &'static CurveParams {
        PARAMS.get_or_init(|| {
            CurveParams::from_hex(
                "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFC2F",
                "0",
                "7",
                "79BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798",
                "483ADA7726A3C4655DA4FBFC0E1108A8FD17B448A68554199C47D08FFB10D4B8",
                "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141",
                1,
            )
        })
    }
}
