//! Key material: private scalars, public points, and paired keys
//!
//! A [`PrivateKey`] is a scalar in `[1, n − 1]`; a [`PublicKey`] is the
//! non-identity point `d·G`. Construction from external bytes or strings is
//! validating; once built, a key is always in range.

mod keypair;
mod private;
mod public;

pub use keypair::KeyPair;
pub use private::PrivateKey;
pub use public::PublicKey;
