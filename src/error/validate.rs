//! Validation utilities for externally supplied input

use super::{Error, Result};

/// Validate an exact length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::Length {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate a scalar-range condition
#[inline(always)]
pub fn scalar(condition: bool, context: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::InvalidScalar { context, reason });
    }
    Ok(())
}

/// Validate an encoding condition
#[inline(always)]
pub fn encoding(condition: bool, context: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::InvalidEncoding { context, reason });
    }
    Ok(())
}
