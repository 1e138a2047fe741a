//! secp256r1 (NIST P-256) domain parameters
//!
//! Also known as `prime256v1` or `P-256`; used by the Neo-like chain
//! profile. `a = p − 3`.

use crate::ec::{Curve, CurveParams};
use std::sync::OnceLock;

/// Marker type for the secp256r1 curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Secp256r1;

static PARAMS: OnceLock<CurveParams> = OnceLock::new();

impl Curve for Secp256r1 {
    const NAME: &'static str = "secp256r1";

    fn params() -> &'static CurveParams {
        PARAMS.get_or_init(|| {
            CurveParams::from_hex(
                "FFFFFFFF00000001000000000000000000000000FFFFFFFFFFFFFFFFFFFFFFFF",
                "FFFFFFFF00000001000000000000000000000000FFFFFFFFFFFFFFFFFFFFFFFC",
                "5AC635D8AA3A93E7B3EBBD55769886BC651D06B0CC53B0F63BCE3C3E27D2604B",
                "6B17D1F2E12C4247F8BCE6E563A440F277037D812DEB33A0F4A13945D898C296",
                "4FE342E2FE1A7F9B8EE7EB4A7C0F9E162BCE33576B315ECECBB6406837BF51F5",
                "FFFFFFFF00000000FFFFFFFFFFFFFFFFBCE6FAADA7179E84F3B9CAC2FC632551",
                1,
            )
        })
    }
}
