//! Error types for depth-field operations.

use thiserror::Error;

/// Result type for depth-field operations.
pub type FieldResult<T> = Result<T, FieldError>;

/// Errors that can occur while building a canonical depth field.
#[derive(Debug, Error)]
pub enum FieldError {
    /// No depth source was supplied.
    #[error("no depth source specified: supply a pixel buffer or a float-map")]
    MissingSource,

    /// A pixel buffer's sample count does not match its dimensions.
    #[error("pixel count mismatch: expected {expected} samples, got {got}")]
    PixelCountMismatch {
        /// Expected sample count (`width * height`).
        expected: usize,
        /// Actual sample count supplied.
        got: usize,
    },
}
