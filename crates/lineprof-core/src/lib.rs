//! # lineprof-core
//!
//! Core types for line profile sampling.
//!
//! This crate provides the foundational types used throughout lineprof:
//!
//! - [`ImageView`], [`Image`] - Rank-2/rank-3 numeric image buffers
//! - [`Sample`] - Trait for image element types and their display ranges
//! - [`Point`] - Pixel-space coordinates
//! - [`Error`] - Image construction errors
//!
//! ## Crate Structure
//!
//! ```text
//! lineprof-core (this crate)
//!    ^
//!    |
//!    +-- lineprof-ops (sampling, limits, line tool)
//!    +-- lineprof-io (PNG input, profile output)
//!    +-- lineprof-cli
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod geom;
pub mod image;
pub mod sample;

pub use error::{Error, Result};
pub use geom::Point;
pub use image::{Image, ImageView};
pub use sample::Sample;

/// Prelude module for convenient imports.
///
/// ```
/// use lineprof_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::geom::Point;
    pub use crate::image::{Image, ImageView};
    pub use crate::sample::Sample;
}
