//! Error handling for curve and key operations
//!
//! User-facing constructors (keys, points, signatures built from external
//! bytes or strings) return [`Error`] on bad input. Internal arithmetic
//! invariant violations — a modular inverse of zero reached through guarded
//! code — indicate an implementation bug and panic instead of propagating.
//! A requested square root with no solution is an empty result set from
//! [`FiniteField::sqrt`](crate::field::FiniteField::sqrt), not an error.

use core::fmt;

/// The error type for curve, key and encoding operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Scalar value is zero or not below the curve order
    InvalidScalar {
        /// Context where the invalid scalar was encountered
        context: &'static str,
        /// Reason why the scalar is invalid
        reason: &'static str,
    },

    /// Malformed hex/base64/Base58 input
    InvalidEncoding {
        /// Context where the encoding error occurred
        context: &'static str,
        /// Reason why the input could not be decoded
        reason: &'static str,
    },

    /// A deserialized or reconstructed point fails the curve equation check
    PointNotOnCurve {
        /// Context where the point was rejected
        context: &'static str,
    },

    /// Wrong-length input (the length facet of an invalid encoding)
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },
}

/// Result type for curve and key operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidScalar { context, reason } => {
                write!(f, "Invalid scalar for {}: {}", context, reason)
            }
            Error::InvalidEncoding { context, reason } => {
                write!(f, "Invalid encoding for {}: {}", context, reason)
            }
            Error::PointNotOnCurve { context } => {
                write!(f, "Point not on curve: {}", context)
            }
            Error::Length {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Invalid length for {}: expected {}, got {}",
                    context, expected, actual
                )
            }
        }
    }
}

impl std::error::Error for Error {}

// Include the validation submodule
pub mod validate;
