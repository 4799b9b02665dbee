//! Display limits for plotted profiles.
//!
//! A renderer needs a y-axis range for the profile plot. [`Limits`] names the
//! policy and [`Limits::resolve`] turns it into a concrete range for a given
//! image:
//!
//! - [`Limits::Auto`] - `None`, rescale to the data on every redraw
//! - [`Limits::Image`] - min/max over the whole image (fixed while the image is shown)
//! - [`Limits::Dtype`] - nominal range of the element type, see [`Sample::DTYPE_RANGE`]
//! - [`Limits::Fixed`] - an explicit `(min, max)`
//!
//! # Example
//!
//! ```rust
//! use lineprof_core::Image;
//! use lineprof_ops::Limits;
//!
//! let img = Image::from_fn(4, 4, |r, c| (r * 4 + c) as u8);
//! assert_eq!(Limits::Image.resolve(&img.view()), Some((0.0, 15.0)));
//! assert_eq!(Limits::Dtype.resolve(&img.view()), Some((0.0, 255.0)));
//! assert_eq!(Limits::Auto.resolve(&img.view()), None);
//! ```

use std::fmt;
use std::str::FromStr;

use lineprof_core::{ImageView, Sample};

use crate::{OpsError, OpsResult};

/// Policy for the intensity axis of a profile plot.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Limits {
    /// Rescale to the profile data.
    Auto,
    /// Fixed to the min/max intensity of the image.
    #[default]
    Image,
    /// Fixed to the nominal range of the image element type.
    Dtype,
    /// Fixed to an explicit range.
    Fixed(f32, f32),
}

impl Limits {
    /// Creates [`Limits::Fixed`], checking the range.
    ///
    /// # Errors
    ///
    /// [`OpsError::InvalidParameter`] unless both bounds are finite and
    /// `min < max`.
    pub fn fixed(min: f32, max: f32) -> OpsResult<Self> {
        if !min.is_finite() || !max.is_finite() || min >= max {
            return Err(OpsError::InvalidParameter(format!(
                "limits ({}, {}) must be finite with min < max",
                min, max
            )));
        }
        Ok(Self::Fixed(min, max))
    }

    /// Resolves the policy against `image`.
    ///
    /// `None` means autoscale. [`Limits::Image`] on an all-NaN image also
    /// resolves to `None`.
    pub fn resolve<T: Sample>(&self, image: &ImageView<'_, T>) -> Option<(f32, f32)> {
        match *self {
            Self::Auto => None,
            Self::Image => image.min_max(),
            Self::Dtype => Some(T::DTYPE_RANGE),
            Self::Fixed(min, max) => Some((min, max)),
        }
    }
}

impl fmt::Display for Limits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Image => write!(f, "image"),
            Self::Dtype => write!(f, "dtype"),
            Self::Fixed(min, max) => write!(f, "{},{}", min, max),
        }
    }
}

impl FromStr for Limits {
    type Err = OpsError;

    /// Parses `auto` (or `none`), `image`, `dtype`, or `<min>,<max>`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" | "none" => Ok(Self::Auto),
            "image" => Ok(Self::Image),
            "dtype" => Ok(Self::Dtype),
            other => {
                let (min, max) = other.split_once(',').ok_or_else(|| {
                    OpsError::InvalidParameter(format!(
                        "unrecognized limits '{}'. Valid: auto, image, dtype, <min>,<max>",
                        s
                    ))
                })?;
                let parse = |v: &str| {
                    v.trim()
                        .parse::<f32>()
                        .map_err(|e| OpsError::InvalidParameter(format!("limit '{}': {}", v.trim(), e)))
                };
                Self::fixed(parse(min)?, parse(max)?)
            }
        }
    }
}
