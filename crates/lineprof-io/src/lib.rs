//! # lineprof-io
//!
//! Image input and profile output.
//!
//! - [`read_png`] - Decode a PNG into [`ImageData`]
//! - [`write_csv`], [`write_json`] - Serialize a [`Profile`](lineprof_ops::Profile)
//!
//! # Example
//!
//! ```rust,ignore
//! use lineprof_io::{read_png, write_csv};
//! use lineprof_ops::profile_line;
//!
//! let image = read_png("scan.png")?;
//! let profile = profile_line(&image.view_u8()?, (10.0, 5.0), (90.0, 40.0), 3.0)?;
//! write_csv(std::io::stdout().lock(), &profile)?;
//! ```

#![warn(missing_docs)]

mod error;
mod image;
mod output;
pub mod png;

pub use crate::error::{IoError, IoResult};
pub use crate::image::{ImageData, PixelData};
pub use crate::output::{write_csv, write_json, ProfileReport};
pub use crate::png::read_png;
