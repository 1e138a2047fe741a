//! Prime-field arithmetic
//!
//! A [`FiniteField`] wraps a prime modulus `p` and provides the reduction,
//! inversion and square-root operations the point arithmetic engine is built
//! on. Values are arbitrary-precision integers; reduction always normalizes
//! into `[0, p)`, including for negative inputs.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

/// A prime field F_p
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FiniteField {
    modulus: BigInt,
}

impl FiniteField {
    /// Create a field with the given prime modulus.
    ///
    /// Panics if `modulus <= 1`; the modulus is a curve-domain constant, not
    /// user input.
    pub fn new(modulus: BigInt) -> Self {
        assert!(modulus > BigInt::one(), "field modulus must exceed 1");
        FiniteField { modulus }
    }

    /// The field modulus `p`.
    pub fn modulus(&self) -> &BigInt {
        &self.modulus
    }

    /// Reduce `x` into `[0, p)`, also for negative `x`.
    pub fn reduce(&self, x: &BigInt) -> BigInt {
        x.mod_floor(&self.modulus)
    }

    /// Modular exponentiation `base^exp mod p`.
    pub fn pow(&self, base: &BigInt, exp: &BigInt) -> BigInt {
        self.reduce(base).modpow(exp, &self.modulus)
    }

    /// Multiplicative inverse `w⁻¹ mod p` via the extended Euclidean
    /// algorithm.
    ///
    /// Panics when `w ≡ 0 (mod p)`: no inverse exists, and reaching this
    /// state through the guarded point formulas is an implementation bug,
    /// not recoverable input.
    pub fn invert(&self, w: &BigInt) -> BigInt {
        let w = self.reduce(w);
        assert!(
            !w.is_zero(),
            "modular inverse of zero is undefined (mod {})",
            self.modulus
        );
        let (gcd, bezout) = extended_gcd(&w, &self.modulus);
        debug_assert!(gcd.is_one(), "modulus must be prime");
        self.reduce(&bezout)
    }

    /// `v · w⁻¹ mod p`.
    pub fn divide(&self, v: &BigInt, w: &BigInt) -> BigInt {
        self.reduce(&(v * self.invert(w)))
    }

    /// Legendre symbol of `x`: `1` for a quadratic residue, `-1` for a
    /// non-residue, `0` for `x ≡ 0`.
    pub fn legendre(&self, x: &BigInt) -> i8 {
        let exp = (&self.modulus - BigInt::one()) / BigInt::from(2);
        let symbol = self.pow(x, &exp);
        if symbol == &self.modulus - BigInt::one() {
            return -1;
        }
        if symbol.is_zero() {
            return 0;
        }
        debug_assert!(symbol.is_one());
        1
    }

    /// The square roots of `x` modulo `p`.
    ///
    /// Returns the empty vector when `x` is a quadratic non-residue, `[0]`
    /// when `x ≡ 0`, and the pair `[r, p − r]` otherwise. Fast paths cover
    /// `p ≡ 3 (mod 4)` and `p ≡ 5 (mod 8)`; the general odd-prime case runs
    /// Tonelli–Shanks.
    pub fn sqrt(&self, x: &BigInt) -> Vec<BigInt> {
        let p = &self.modulus;
        let x = self.reduce(x);

        if x.is_zero() {
            return vec![BigInt::zero()];
        }
        if *p == BigInt::from(2) {
            return vec![x];
        }
        if self.legendre(&x) != 1 {
            return Vec::new();
        }

        if p.mod_floor(&BigInt::from(4)) == BigInt::from(3) {
            let r = self.pow(&x, &((p + BigInt::one()) / BigInt::from(4)));
            return vec![r.clone(), p - r];
        }

        if p.mod_floor(&BigInt::from(8)) == BigInt::from(5) {
            // Atkin's case: x^((p+3)/8) squares to ±x.
            let candidate = self.pow(&x, &((p + BigInt::from(3)) / BigInt::from(8)));
            if self.reduce(&(&candidate * &candidate)) == x {
                return vec![candidate.clone(), p - candidate];
            }
            // Squared to −x; fix up with a square root of −1.
            let roots_of_minus_one = self.tonelli_shanks(&(p - BigInt::one()));
            let Some(i) = roots_of_minus_one.first() else {
                return Vec::new();
            };
            let r = self.reduce(&(i * &candidate));
            return vec![r.clone(), p - r];
        }

        self.tonelli_shanks(&x)
    }

    /// Tonelli–Shanks for a general odd prime modulus. `x` must already be
    /// reduced and non-zero.
    fn tonelli_shanks(&self, x: &BigInt) -> Vec<BigInt> {
        let p = &self.modulus;
        let one = BigInt::one();
        let two = BigInt::from(2);

        // Factor p − 1 = q · 2^s with q odd.
        let mut s: u64 = 0;
        let mut q = p - &one;
        while q.is_even() {
            s += 1;
            q /= &two;
        }

        if s == 1 {
            let r = self.pow(x, &((p + &one) / &BigInt::from(4)));
            if self.reduce(&(&r * &r)) == *x {
                return vec![r.clone(), p - r];
            }
            return Vec::new();
        }

        // First quadratic non-residue, found by brute-force search.
        let mut z = one.clone();
        while self.legendre(&z) != -1 {
            z += &one;
        }
        let mut c = self.pow(&z, &q);

        let mut r = self.pow(x, &((&q + &one) / &two));
        let mut t = self.pow(x, &q);
        let mut m = s;

        while !t.is_one() {
            // Lowest i with t^(2^i) = 1.
            let mut i: u64 = 0;
            let mut tt = t.clone();
            while !tt.is_one() {
                tt = self.reduce(&(&tt * &tt));
                i += 1;
                if i == m {
                    return Vec::new();
                }
            }

            let b = self.pow(&c, &(BigInt::one() << (m - i - 1)));
            c = self.reduce(&(&b * &b));
            r = self.reduce(&(&r * &b));
            t = self.reduce(&(&t * &c));
            m = i;
        }

        if self.reduce(&(&r * &r)) == *x {
            return vec![r.clone(), p - r];
        }
        Vec::new()
    }
}

/// Extended Euclidean algorithm: returns `(gcd(a, m), s)` with
/// `s·a ≡ gcd (mod m)`.
fn extended_gcd(a: &BigInt, m: &BigInt) -> (BigInt, BigInt) {
    let mut old_r = a.clone();
    let mut r = m.clone();
    let mut old_s = BigInt::one();
    let mut s = BigInt::zero();

    while !r.is_zero() {
        let q = &old_r / &r;
        let next_r = &old_r - &q * &r;
        old_r = r;
        r = next_r;
        let next_s = &old_s - &q * &s;
        old_s = s;
        s = next_s;
    }

    (old_r.abs(), old_s)
}
