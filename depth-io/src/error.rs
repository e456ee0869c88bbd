//! Error types for float-map I/O.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for float-map I/O operations.
pub type IoResult<T> = Result<T, IoError>;

/// Errors that can occur while reading or writing a float-map.
#[derive(Debug, Error)]
pub enum IoError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path that was not found.
        path: PathBuf,
    },

    /// The magic token was not the single-channel `Pf` variant.
    #[error("invalid float-map magic: expected \"Pf\", found {found:?}")]
    InvalidMagic {
        /// The token that was read instead.
        found: String,
    },

    /// The scale token did not indicate little-endian byte order.
    #[error("invalid float-map scale {scale}: expected a negative value")]
    InvalidScale {
        /// The scale value that was rejected.
        scale: f32,
    },

    /// Malformed header content.
    #[error("invalid float-map header: {message}")]
    InvalidHeader {
        /// Description of what was invalid.
        message: String,
    },

    /// The sample payload ended early.
    #[error("unexpected end of float-map payload at sample {position}")]
    UnexpectedEof {
        /// Row-major index of the sample that could not be read.
        position: u64,
    },

    /// A sample decoded to NaN or an infinity.
    #[error("non-finite float-map sample at position {position}")]
    NonFiniteSample {
        /// Row-major index of the offending sample.
        position: u64,
    },

    /// I/O error from the standard library.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Integer parsing error in the dimensions token.
    #[error("integer parsing error: {0}")]
    ParseInt(#[from] std::num::ParseIntError),

    /// Float parsing error in the scale token.
    #[error("float parsing error: {0}")]
    ParseFloat(#[from] std::num::ParseFloatError),
}

impl IoError {
    /// Create an `InvalidHeader` error with the given message.
    #[must_use]
    pub fn invalid_header(message: impl Into<String>) -> Self {
        Self::InvalidHeader {
            message: message.into(),
        }
    }
}
