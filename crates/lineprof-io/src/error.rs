//! Error types for reading images and writing profiles.

use std::io;
use thiserror::Error;

/// I/O operation error.
#[derive(Debug, Error)]
pub enum IoError {
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Invalid or corrupted image data.
    #[error("decode error: {0}")]
    DecodeError(String),

    /// Pixel layout this crate can't represent.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Decoded buffer doesn't form a valid image.
    #[error(transparent)]
    Core(#[from] lineprof_core::Error),
}

/// Result type for I/O operations.
pub type IoResult<T> = Result<T, IoError>;
