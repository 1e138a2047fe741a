//! Elliptic curve domains and point arithmetic
//!
//! Curves take the short Weierstrass form `y² ≡ x³ + ax + b (mod p)`. A
//! [`Curve`] implementation is a zero-sized marker binding a name to a set of
//! [`CurveParams`]; the affine/projective arithmetic in [`point`] is generic
//! over it and reused unchanged across curves.

pub mod point;
pub mod secp256k1;
pub mod secp256r1;

pub use point::{AffinePoint, ProjectivePoint};
pub use secp256k1::Secp256k1;
pub use secp256r1::Secp256r1;

use crate::field::FiniteField;
use core::fmt::Debug;
use num_bigint::BigInt;

/// A named short-Weierstrass curve, bound at compile time.
pub trait Curve: Debug + Clone + PartialEq + Eq + 'static {
    /// Canonical curve name, e.g. `"secp256k1"`.
    const NAME: &'static str;

    /// The curve's domain parameters, computed once per process.
    fn params() -> &'static CurveParams;
}

/// Domain parameters of a short-Weierstrass curve.
///
/// Invariants: `n` is prime, `G = (gx, gy)` satisfies the curve equation, and
/// the cofactor `h` relates the full group order to `n`. Instances are
/// immutable and created once per named curve.
pub struct CurveParams {
    /// The prime field the coordinates live in.
    pub field: FiniteField,
    /// Coefficient `a` of the curve equation.
    pub a: BigInt,
    /// Coefficient `b` of the curve equation.
    pub b: BigInt,
    /// x-coordinate of the base point `G`.
    pub gx: BigInt,
    /// y-coordinate of the base point `G`.
    pub gy: BigInt,
    /// Prime order of the base point's subgroup.
    pub n: BigInt,
    /// Cofactor.
    pub h: BigInt,
}

impl CurveParams {
    /// Build parameters from big-endian hex strings. Intended for the static
    /// per-curve initializers; panics on malformed constants.
    pub(crate) fn from_hex(
        p: &str,
        a: &str,
        b: &str,
        gx: &str,
        gy: &str,
        n: &str,
        h: u64,
    ) -> Self {
        let parse = |s: &str| {
            BigInt::parse_bytes(s.as_bytes(), 16).expect("curve constant must be valid hex")
        };
        CurveParams {
            field: FiniteField::new(parse(p)),
            a: parse(a),
            b: parse(b),
            gx: parse(gx),
            gy: parse(gy),
            n: parse(n),
            h: BigInt::from(h),
        }
    }

    /// Byte width of a field element (32 for the 256-bit curves).
    pub fn element_len(&self) -> usize {
        ((self.field.modulus().bits() + 7) / 8) as usize
    }

    /// Byte width of a scalar.
    pub fn scalar_len(&self) -> usize {
        ((self.n.bits() + 7) / 8) as usize
    }

    /// Right-hand side of the curve equation, `x³ + ax + b mod p`.
    pub fn equation_rhs(&self, x: &BigInt) -> BigInt {
        let x2 = x * x;
        let x3 = &x2 * x;
        self.field.reduce(&(x3 + &self.a * x + &self.b))
    }
}

/// Fixed-width big-endian encoding of a non-negative integer, preserving
/// leading zero bytes. The caller guarantees `x < 2^(8·len)`.
pub(crate) fn be_bytes_fixed(x: &BigInt, len: usize) -> Vec<u8> {
    let (_, bytes) = x.to_bytes_be();
    let mut out = vec![0u8; len];
    out[len - bytes.len()..].copy_from_slice(&bytes);
    out
}
