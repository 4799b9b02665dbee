//! # lineprof-ops
//!
//! Intensity profiles along scan lines.
//!
//! # Modules
//!
//! - [`profile`] - Line sampling: [`profile_line`], [`Profile`]
//! - [`interp`] - Nearest and bilinear sub-pixel sampling
//! - [`border`] - Boundary extension modes
//! - [`limits`] - Display limit policies for profile plots
//! - [`line_tool`] - Headless thick-line state (endpoints, width, picking)
//! - [`session`] - Image + line + profile, updated per interaction
//!
//! # Example
//!
//! ```rust
//! use lineprof_core::Image;
//! use lineprof_ops::profile_line;
//!
//! // 3-channel image, constant (1, 2, 3)
//! let img = Image::filled(10, 10, &[1.0f32, 2.0, 3.0]);
//! let profile = profile_line(&img.view(), (4.0, 1.0), (4.0, 8.0), 1.0).unwrap();
//!
//! assert_eq!(profile.shape(), (8, 3));
//! assert_eq!(profile.row(0), &[1.0, 2.0, 3.0]);
//! ```
//!
//! # Feature Flags
//!
//! - `parallel` (default) - Compute oblique profile positions with rayon
//! - `serde` - `Serialize` for [`Profile`]

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod border;
pub mod interp;
pub mod limits;
pub mod line_tool;
pub mod profile;
pub mod session;

pub use border::BorderMode;
pub use error::{OpsError, OpsResult};
pub use interp::Interpolation;
pub use limits::Limits;
pub use line_tool::ThickLine;
pub use profile::{profile_array, profile_line, profile_line_with, Profile, ProfileOptions};
pub use session::{LineProfile, LineProfileConfig};
