//! Validation helpers shared by the gostec crates.

use super::{Error, Result};

/// Validate an exact byte length.
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

/// Validate a maximum byte length.
#[inline(always)]
pub fn max_length(context: &'static str, actual: usize, max: usize) -> Result<()> {
    if actual > max {
        return Err(Error::Length {
            context,
            expected: max,
            actual,
        });
    }
    Ok(())
}

/// Validate an encoding condition.
#[inline(always)]
pub fn encoding(condition: bool, context: &'static str, message: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::Encoding { context, message });
    }
    Ok(())
}

/// Validate a mathematical domain condition.
#[inline(always)]
pub fn domain(condition: bool, context: &'static str, message: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::Domain { context, message });
    }
    Ok(())
}
