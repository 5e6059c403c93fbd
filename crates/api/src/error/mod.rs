//! Error handling for the gostec crates.

pub mod validate;

#[cfg(test)]
mod tests;

/// Primary error type for all gostec operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A parameter set lacks a field required by the requested operation,
    /// or a supplied parameter set is structurally unusable.
    Configuration {
        /// Operation that rejected the parameter set
        context: &'static str,
        /// What is missing or unusable
        message: &'static str,
    },

    /// An input byte string has the wrong length.
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// An input byte string is the right size but malformed
    /// (e.g. a bad point-format byte).
    Encoding {
        /// Encoding being parsed
        context: &'static str,
        /// What is malformed
        message: &'static str,
    },

    /// A value lies outside its mathematical domain: a field inverse of
    /// zero, an off-curve point, or a scalar outside its valid range.
    Domain {
        /// Operation that rejected the value
        context: &'static str,
        /// Which domain rule was violated
        message: &'static str,
    },
}

/// Result type for gostec operations.
pub type Result<T> = core::result::Result<T, Error>;

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Configuration { context, message } => {
                write!(f, "{}: {}", context, message)
            }
            Self::Length {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "{}: invalid length (expected {}, got {})",
                    context, expected, actual
                )
            }
            Self::Encoding { context, message } => {
                write!(f, "{}: {}", context, message)
            }
            Self::Domain { context, message } => {
                write!(f, "{}: {}", context, message)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
