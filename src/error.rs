//! Error types for purge matrix computation.
//!
//! The core volume calculation itself is infallible: an unparseable color
//! token falls back to black and an achromatic input gets hue 0. Errors only
//! arise at the presentation boundary (matrix computation, output writing).

use thiserror::Error;

/// Main error type for the calculator.
#[derive(Debug, Error)]
pub enum PurgeError {
    #[error("Invalid multiplier: {value} (must be finite and positive)")]
    InvalidMultiplier { value: f64 },

    #[error("No colors supplied for the purge matrix")]
    NoColors,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for calculator operations.
pub type Result<T> = std::result::Result<T, PurgeError>;
