//! Error type for external color input.

use thiserror::Error;

/// Failure to interpret caller-supplied color input.
///
/// Numeric conversions clamp rather than fail; only string parsing at the
/// crate boundary can reject input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The hex string has the wrong length or contains non-hex characters.
    #[error("invalid hex color {input:?}: expected 3 or 6 hex digits, `#` optional")]
    InvalidFormat {
        /// The rejected input, verbatim.
        input: String,
    },
}

impl ColorError {
    pub(crate) fn invalid(input: &str) -> Self {
        Self::InvalidFormat {
            input: input.to_string(),
        }
    }
}
