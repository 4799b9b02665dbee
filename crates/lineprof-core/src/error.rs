//! Error types for lineprof-core operations.
//!
//! Only image construction can fail in this crate. The failure modes are:
//! - a shape whose rank is neither 2 (grayscale) nor 3 (channels last)
//! - a zero extent along any axis
//! - a buffer whose length doesn't match the requested shape
//!
//! # Usage
//!
//! ```rust
//! use lineprof_core::{Error, ImageView};
//!
//! let data = [0u8; 12];
//! let err = ImageView::from_shape(&data, &[2, 2, 3, 1]).unwrap_err();
//! assert!(matches!(err, Error::InvalidShape { rank: 4 }));
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building image views and buffers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Shape rank is not 2 or 3.
    ///
    /// Images are `[rows, cols]` or `[rows, cols, channels]`; anything else
    /// has no defined channel structure.
    #[error("unsupported image rank {rank}: expected 2 (rows, cols) or 3 (rows, cols, channels)")]
    InvalidShape {
        /// Rank of the rejected shape
        rank: usize,
    },

    /// One of the extents is zero.
    #[error("invalid dimensions: {rows}x{cols}x{channels} ({reason})")]
    InvalidDimensions {
        /// Number of rows
        rows: usize,
        /// Number of columns
        cols: usize,
        /// Number of channels
        channels: usize,
        /// Why the dimensions were rejected
        reason: String,
    },

    /// Buffer length doesn't match the shape.
    #[error("size mismatch: shape needs {expected} elements, buffer has {actual}")]
    SizeMismatch {
        /// Elements required by the shape
        expected: usize,
        /// Elements actually supplied
        actual: usize,
    },
}

impl Error {
    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(
        rows: usize,
        cols: usize,
        channels: usize,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidDimensions {
            rows,
            cols,
            channels,
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::SizeMismatch`] error.
    #[inline]
    pub fn size_mismatch(expected: usize, actual: usize) -> Self {
        Self::SizeMismatch { expected, actual }
    }
}
