//! Engine error type.
//!
//! All engine errors are local and recoverable: a UI handler that receives
//! one should ignore or defer the triggering edit, never abort.

use swatch_color::ColorError;
use thiserror::Error;

/// Errors returned by engine operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Malformed hex or HSL text.
    #[error(transparent)]
    InvalidFormat(#[from] ColorError),

    /// A previous palette or lock mask does not match the requested length.
    #[error("length mismatch: expected {expected} slots, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// A history or slot index past the end (usually a stale UI index).
    #[error("index {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// A palette needs at least one color.
    #[error("palette must contain at least one color")]
    EmptyPalette,
}

/// Result alias for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;
