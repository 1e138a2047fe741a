//! Generic elliptic curve engine over short-Weierstrass curves
//!
//! This crate provides finite-field arithmetic, affine/projective curve-point
//! algebra, key material, a Schnorr-style signature scheme, and the per-chain
//! address/WIF encodings used by Bitcoin-, Zilliqa- and Neo-style networks.
//!
//! The arithmetic core is generic over a [`Curve`]: a named, immutable bundle
//! of domain parameters (`p`, `a`, `b`, `G`, `n`, `h`) bound at compile time.
//! Adding a curve means supplying a new parameter set; the engine is reused
//! unchanged. Two curves are provided: [`Secp256k1`] and [`Secp256r1`].
//!
//! Hash functions, big-integer arithmetic, and Base58Check are external
//! collaborators (the `sha2`/`ripemd`/`hmac`, `num-bigint`, and `bs58` crates);
//! this crate composes them but implements none of them.
//!
//! Operations here are variable-time. Resistance to timing side-channels is
//! an explicit non-goal of this library.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Finite-field arithmetic
pub mod field;
pub use field::FiniteField;

// Curve domain parameters and point arithmetic
pub mod ec;
pub use ec::{AffinePoint, Curve, CurveParams, ProjectivePoint, Secp256k1, Secp256r1};

// Digest-pipeline glue over the external hash collaborators
pub mod hashes;

// Key material
pub mod keys;
pub use keys::{KeyPair, PrivateKey, PublicKey};

// Schnorr-style signing
pub mod schnorr;
pub use schnorr::{sign, verify, Signature};

// Chain profiles, addresses and WIF
pub mod chain;
pub use chain::{
    wif_decode, wif_encode, Bitcoin, ChainProfile, Neo, Network, PublicAddress, Zilliqa,
};
