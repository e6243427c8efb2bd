// SPDX-License-Identifier: MIT
//
// Error type for the color codec.
//
// Only text parsing can fail. Numeric input is clamped, never rejected, so
// live edits in a color field (a half-typed channel value) never error out.

use thiserror::Error;

/// Errors produced while parsing color text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The text does not match the expected notation.
    #[error("invalid color {input:?}: expected {expected}")]
    InvalidFormat {
        /// The offending input, verbatim.
        input: String,
        /// Human-readable description of the accepted notation.
        expected: &'static str,
    },
}

impl ColorError {
    pub(crate) fn invalid(input: &str, expected: &'static str) -> Self {
        Self::InvalidFormat {
            input: input.to_string(),
            expected,
        }
    }
}

/// Result alias for codec operations.
pub type Result<T> = std::result::Result<T, ColorError>;
