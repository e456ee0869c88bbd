//! Error types for the backdrop pipeline.

use thiserror::Error;

/// Result type for backdrop pipeline operations.
pub type BackdropResult<T> = Result<T, BackdropError>;

/// Errors that can occur while generating a backdrop mesh.
///
/// Every error is fatal to the current invocation; nothing is retried
/// internally and no partial mesh is ever produced.
#[derive(Debug, Error)]
pub enum BackdropError {
    /// A configuration value is outside its supported range.
    #[error("invalid parameter: {reason}")]
    InvalidParameter {
        /// Description of why the parameter is invalid.
        reason: String,
    },

    /// Error from depth-field construction (missing source, bad buffer).
    #[error(transparent)]
    Field(#[from] depth_field::FieldError),

    /// Error from float-map decoding.
    #[error(transparent)]
    Io(#[from] depth_io::IoError),
}

impl BackdropError {
    /// Create an `InvalidParameter` error with the given reason.
    #[must_use]
    pub fn invalid_parameter(reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            reason: reason.into(),
        }
    }
}
