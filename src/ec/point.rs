//! Curve point representations and the group law
//!
//! [`AffinePoint`] carries `(x, y)` plus an identity flag and implements the
//! slope-based add/double formulas. [`ProjectivePoint`] uses Jacobian
//! coordinates (`(X, Y, Z)` representing the affine `(X/Z², Y/Z³)`) so scalar
//! multiplication can defer the field inversion to a single normalization at
//! the end; the two representations must agree for every input.

use crate::ec::{be_bytes_fixed, Curve};
use crate::error::{validate, Error, Result};
use core::marker::PhantomData;
use num_bigint::{BigInt, Sign};
use num_integer::Integer;
use num_traits::Zero;

/// A point on a curve `C` in affine coordinates, or the point at infinity.
#[derive(Clone, Debug)]
pub struct AffinePoint<C: Curve> {
    x: BigInt,
    y: BigInt,
    identity: bool,
    _curve: PhantomData<C>,
}

impl<C: Curve> PartialEq for AffinePoint<C> {
    fn eq(&self, other: &Self) -> bool {
        if self.identity || other.identity {
            return self.identity == other.identity;
        }
        self.x == other.x && self.y == other.y
    }
}

impl<C: Curve> Eq for AffinePoint<C> {}

impl<C: Curve> AffinePoint<C> {
    /// Create a point from coordinates, validating the curve equation.
    pub fn new(x: BigInt, y: BigInt) -> Result<Self> {
        let params = C::params();
        let x = params.field.reduce(&x);
        let y = params.field.reduce(&y);
        if params.field.reduce(&(&y * &y)) != params.equation_rhs(&x) {
            return Err(Error::PointNotOnCurve { context: C::NAME });
        }
        Ok(Self::from_coordinates_unchecked(x, y))
    }

    /// The point at infinity (group identity).
    pub fn identity() -> Self {
        AffinePoint {
            x: BigInt::zero(),
            y: BigInt::zero(),
            identity: true,
            _curve: PhantomData,
        }
    }

    /// The curve's base point `G`.
    pub fn generator() -> Self {
        let params = C::params();
        Self::from_coordinates_unchecked(params.gx.clone(), params.gy.clone())
    }

    pub(crate) fn from_coordinates_unchecked(x: BigInt, y: BigInt) -> Self {
        AffinePoint {
            x,
            y,
            identity: false,
            _curve: PhantomData,
        }
    }

    /// Whether this is the point at infinity.
    pub fn is_identity(&self) -> bool {
        self.identity
    }

    /// The x-coordinate (zero for the identity).
    pub fn x(&self) -> &BigInt {
        &self.x
    }

    /// The y-coordinate (zero for the identity).
    pub fn y(&self) -> &BigInt {
        &self.y
    }

    /// Whether the point satisfies the curve equation (the identity counts
    /// as valid).
    pub fn is_on_curve(&self) -> bool {
        if self.identity {
            return true;
        }
        let params = C::params();
        params.field.reduce(&(&self.y * &self.y)) == params.equation_rhs(&self.x)
    }

    /// The additive inverse `(x, p − y)`.
    pub fn negate(&self) -> Self {
        if self.identity {
            return Self::identity();
        }
        let params = C::params();
        Self::from_coordinates_unchecked(self.x.clone(), params.field.reduce(&(-&self.y)))
    }

    /// Group addition.
    pub fn add(&self, other: &Self) -> Self {
        if self.identity {
            return other.clone();
        }
        if other.identity {
            return self.clone();
        }
        if self.x == other.x {
            if self.y != other.y {
                // P + (−P) = ∞
                return Self::identity();
            }
            return self.double();
        }

        let field = &C::params().field;
        let lambda = field.divide(&(&other.y - &self.y), &(&other.x - &self.x));
        let x3 = field.reduce(&(&lambda * &lambda - &self.x - &other.x));
        let y3 = field.reduce(&(&lambda * (&self.x - &x3) - &self.y));
        Self::from_coordinates_unchecked(x3, y3)
    }

    /// Point doubling via the tangent-slope formula.
    pub fn double(&self) -> Self {
        // ∞ and y = 0 (vertical tangent) both double to ∞.
        if self.identity || self.y.is_zero() {
            return Self::identity();
        }

        let params = C::params();
        let field = &params.field;
        let x_sq = &self.x * &self.x;
        let lambda = field.divide(
            &(BigInt::from(3) * x_sq + &params.a),
            &(BigInt::from(2) * &self.y),
        );
        let x3 = field.reduce(&(&lambda * &lambda - BigInt::from(2) * &self.x));
        let y3 = field.reduce(&(&lambda * (&self.x - &x3) - &self.y));
        Self::from_coordinates_unchecked(x3, y3)
    }

    /// Scalar multiplication `k·P`.
    ///
    /// The scalar is reduced mod `n` first; `k ≡ 0` yields the identity.
    /// Binary double-and-add from the most significant bit down, on Jacobian
    /// coordinates internally.
    pub fn mul(&self, k: &BigInt) -> Self {
        let params = C::params();
        let k = k.mod_floor(&params.n);
        if k.is_zero() || self.identity {
            return Self::identity();
        }

        let scalar_bytes = be_bytes_fixed(&k, params.scalar_len());
        let base = ProjectivePoint::from_affine(self);
        let mut acc = ProjectivePoint::<C>::identity();
        for byte in scalar_bytes.iter() {
            for bit_pos in (0..8).rev() {
                acc = acc.double();
                if (byte >> bit_pos) & 1 == 1 {
                    acc = acc.add(&base);
                }
            }
        }
        acc.to_affine()
    }

    /// Serialize in compressed form: parity prefix (`0x02` even / `0x03`
    /// odd) followed by the big-endian x-coordinate. The identity serializes
    /// to an all-zero buffer.
    pub fn serialize_compressed(&self) -> Vec<u8> {
        let len = C::params().element_len();
        let mut out = vec![0u8; 1 + len];
        if self.identity {
            return out;
        }
        out[0] = if self.y.is_odd() { 0x03 } else { 0x02 };
        out[1..].copy_from_slice(&be_bytes_fixed(&self.x, len));
        out
    }

    /// Serialize in uncompressed form: `0x04 ‖ x ‖ y`. The identity
    /// serializes to an all-zero buffer.
    pub fn serialize_uncompressed(&self) -> Vec<u8> {
        let len = C::params().element_len();
        let mut out = vec![0u8; 1 + 2 * len];
        if self.identity {
            return out;
        }
        out[0] = 0x04;
        out[1..1 + len].copy_from_slice(&be_bytes_fixed(&self.x, len));
        out[1 + len..].copy_from_slice(&be_bytes_fixed(&self.y, len));
        out
    }

    /// Deserialize either point form, dispatching on length.
    pub fn deserialize(bytes: &[u8]) -> Result<Self> {
        let len = C::params().element_len();
        if bytes.len() == 1 + len {
            Self::deserialize_compressed(bytes)
        } else if bytes.len() == 1 + 2 * len {
            Self::deserialize_uncompressed(bytes)
        } else {
            Err(Error::Length {
                context: "serialized point",
                expected: 1 + len,
                actual: bytes.len(),
            })
        }
    }

    /// Deserialize a compressed point, recovering `y` from the curve
    /// equation and selecting the root matching the parity prefix.
    pub fn deserialize_compressed(bytes: &[u8]) -> Result<Self> {
        let params = C::params();
        let len = params.element_len();
        validate::length("compressed point", bytes.len(), 1 + len)?;
        if bytes.iter().all(|&b| b == 0) {
            return Ok(Self::identity());
        }

        let tag = bytes[0];
        validate::encoding(
            tag == 0x02 || tag == 0x03,
            "compressed point",
            "prefix byte must be 0x02 or 0x03",
        )?;
        let x = BigInt::from_bytes_be(Sign::Plus, &bytes[1..]);
        validate::encoding(
            &x < params.field.modulus(),
            "compressed point",
            "x-coordinate is not a field element",
        )?;

        let rhs = params.equation_rhs(&x);
        let roots = params.field.sqrt(&rhs);
        let root = roots
            .first()
            .ok_or(Error::PointNotOnCurve { context: C::NAME })?;

        let want_odd = tag == 0x03;
        let y = if root.is_odd() == want_odd {
            root.clone()
        } else {
            params.field.reduce(&(-root))
        };
        Ok(Self::from_coordinates_unchecked(x, y))
    }

    /// Deserialize an uncompressed point, validating the curve equation.
    pub fn deserialize_uncompressed(bytes: &[u8]) -> Result<Self> {
        let len = C::params().element_len();
        validate::length("uncompressed point", bytes.len(), 1 + 2 * len)?;
        if bytes.iter().all(|&b| b == 0) {
            return Ok(Self::identity());
        }
        validate::encoding(
            bytes[0] == 0x04,
            "uncompressed point",
            "prefix byte must be 0x04",
        )?;
        let x = BigInt::from_bytes_be(Sign::Plus, &bytes[1..1 + len]);
        let y = BigInt::from_bytes_be(Sign::Plus, &bytes[1 + len..]);
        Self::new(x, y)
    }
}

/// A point in Jacobian projective coordinates.
///
/// `(X, Y, Z)` represents the affine point `(X/Z², Y/Z³)`; `Z = 0` is the
/// identity. Used internally by scalar multiplication to avoid a field
/// inversion per group operation; conversion back is one-directional via
/// [`ProjectivePoint::to_affine`].
#[derive(Clone, Debug)]
pub struct ProjectivePoint<C: Curve> {
    x: BigInt,
    y: BigInt,
    z: BigInt,
    _curve: PhantomData<C>,
}

impl<C: Curve> ProjectivePoint<C> {
    /// The identity element.
    pub fn identity() -> Self {
        ProjectivePoint {
            x: BigInt::from(1),
            y: BigInt::from(1),
            z: BigInt::zero(),
            _curve: PhantomData,
        }
    }

    /// Lift an affine point (`Z = 1`).
    pub fn from_affine(point: &AffinePoint<C>) -> Self {
        if point.is_identity() {
            return Self::identity();
        }
        ProjectivePoint {
            x: point.x.clone(),
            y: point.y.clone(),
            z: BigInt::from(1),
            _curve: PhantomData,
        }
    }

    /// Whether this is the identity (`Z = 0`).
    pub fn is_identity(&self) -> bool {
        self.z.is_zero()
    }

    /// Group addition in Jacobian coordinates.
    pub fn add(&self, other: &Self) -> Self {
        if self.is_identity() {
            return other.clone();
        }
        if other.is_identity() {
            return self.clone();
        }

        let field = &C::params().field;
        let z1_sq = field.reduce(&(&self.z * &self.z));
        let z2_sq = field.reduce(&(&other.z * &other.z));
        let u1 = field.reduce(&(&self.x * &z2_sq));
        let u2 = field.reduce(&(&other.x * &z1_sq));
        let s1 = field.reduce(&(&self.y * &z2_sq * &other.z));
        let s2 = field.reduce(&(&other.y * &z1_sq * &self.z));

        if u1 == u2 {
            if s1 == s2 {
                return self.double();
            }
            // Same x, opposite y: P + (−P) = ∞.
            return Self::identity();
        }

        let h = field.reduce(&(&u2 - &u1));
        let r = field.reduce(&(&s2 - &s1));
        let h_sq = field.reduce(&(&h * &h));
        let h_cu = field.reduce(&(&h_sq * &h));
        let v = field.reduce(&(&u1 * &h_sq));

        let x3 = field.reduce(&(&r * &r - &h_cu - BigInt::from(2) * &v));
        let y3 = field.reduce(&(&r * (&v - &x3) - &s1 * &h_cu));
        let z3 = field.reduce(&(&self.z * &other.z * &h));

        ProjectivePoint {
            x: x3,
            y: y3,
            z: z3,
            _curve: PhantomData,
        }
    }

    /// Point doubling in Jacobian coordinates, generic in the curve
    /// coefficient `a` (`M = 3X² + aZ⁴`).
    pub fn double(&self) -> Self {
        let params = C::params();
        let field = &params.field;
        if self.is_identity() || field.reduce(&self.y).is_zero() {
            return Self::identity();
        }

        let y_sq = field.reduce(&(&self.y * &self.y));
        let s = field.reduce(&(BigInt::from(4) * &self.x * &y_sq));
        let z_sq = field.reduce(&(&self.z * &self.z));
        let z_4 = field.reduce(&(&z_sq * &z_sq));
        let m = field.reduce(&(BigInt::from(3) * &self.x * &self.x + &params.a * &z_4));

        let x3 = field.reduce(&(&m * &m - BigInt::from(2) * &s));
        let y_4 = field.reduce(&(&y_sq * &y_sq));
        let y3 = field.reduce(&(&m * (&s - &x3) - BigInt::from(8) * &y_4));
        let z3 = field.reduce(&(BigInt::from(2) * &self.y * &self.z));

        ProjectivePoint {
            x: x3,
            y: y3,
            z: z3,
            _curve: PhantomData,
        }
    }

    /// Normalize back to affine coordinates with a single field inversion.
    pub fn to_affine(&self) -> AffinePoint<C> {
        if self.is_identity() {
            return AffinePoint::identity();
        }
        let field = &C::params().field;
        let z_inv = field.invert(&self.z);
        let z_inv_sq = field.reduce(&(&z_inv * &z_inv));
        let z_inv_cu = field.reduce(&(&z_inv_sq * &z_inv));
        AffinePoint::from_coordinates_unchecked(
            field.reduce(&(&self.x * &z_inv_sq)),
            field.reduce(&(&self.y * &z_inv_cu)),
        )
    }
}
