//! Error types for profile operations.

use lineprof_core::Point;
use thiserror::Error;

/// Error type for profile operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OpsError {
    /// Endpoints are identical or not finite.
    #[error("invalid line geometry {start} -> {end}: {reason}")]
    InvalidGeometry {
        /// First endpoint
        start: Point,
        /// Second endpoint
        end: Point,
        /// What is wrong with them
        reason: &'static str,
    },

    /// Line width is zero, negative or not finite.
    #[error("invalid line width {0}: must be a finite positive number")]
    InvalidWidth(f64),

    /// The sampling window doesn't touch the image at all.
    #[error("scan line {start} -> {end} lies entirely outside the {rows}x{cols} image")]
    OutOfBounds {
        /// First endpoint
        start: Point,
        /// Second endpoint
        end: Point,
        /// Image rows
        rows: usize,
        /// Image columns
        cols: usize,
    },

    /// Image channel structure doesn't fit the operation.
    #[error("channel mismatch: {0}")]
    ChannelMismatch(String),

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Image construction failed.
    #[error(transparent)]
    Core(lineprof_core::Error),
}

impl From<lineprof_core::Error> for OpsError {
    /// Rank errors surface as [`OpsError::ChannelMismatch`]; they are the
    /// only way an image can have an undefined channel structure.
    fn from(err: lineprof_core::Error) -> Self {
        match err {
            lineprof_core::Error::InvalidShape { .. } => Self::ChannelMismatch(err.to_string()),
            other => Self::Core(other),
        }
    }
}

/// Result type for profile operations.
pub type OpsResult<T> = Result<T, OpsError>;
