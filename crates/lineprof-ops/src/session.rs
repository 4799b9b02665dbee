//! Headless profile session.
//!
//! [`LineProfile`] is what an interactive viewer drives: it borrows the
//! displayed image, owns a [`ThickLine`], resolves the display limits once on
//! attach, and recomputes the profile on every line change.
//!
//! A failed recomputation (degenerate line, line dragged off the image)
//! returns the error and leaves the previous line and profile in place, so
//! the viewer keeps showing the last valid profile.
//!
//! # Example
//!
//! ```rust
//! use lineprof_core::{Image, Point};
//! use lineprof_ops::{LineProfile, LineProfileConfig};
//!
//! let img = Image::from_fn(30, 60, |_, c| c as f32);
//! let mut session = LineProfile::attach(img.view(), &LineProfileConfig::default()).unwrap();
//!
//! // Default line spans columns 20..=40 on row 15.
//! let (ends, profile) = session.get_profile();
//! assert_eq!(ends[0], Point::new(20.0, 15.0));
//! assert_eq!(profile.len(), 21);
//!
//! session.line_changed([Point::new(0.0, 0.0), Point::new(0.0, 9.0)]).unwrap();
//! assert_eq!(session.get_profile().1.len(), 10);
//! ```

use lineprof_core::{ImageView, Point, Sample};
use tracing::{debug, warn};

use crate::line_tool::{ThickLine, DEFAULT_MAXDIST};
use crate::limits::Limits;
use crate::profile::{profile_line_with, Profile, ProfileOptions};
use crate::OpsResult;

/// Settings applied when a session attaches to an image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineProfileConfig {
    /// Endpoint pick radius in pixels.
    pub maxdist: f64,
    /// Intensity axis policy.
    pub limits: Limits,
    /// Sampling options for oblique lines.
    pub options: ProfileOptions,
}

impl Default for LineProfileConfig {
    fn default() -> Self {
        Self {
            maxdist: DEFAULT_MAXDIST,
            limits: Limits::Image,
            options: ProfileOptions::default(),
        }
    }
}

/// Scan line bound to an image, with its current profile.
#[derive(Debug, Clone)]
pub struct LineProfile<'a, T> {
    image: ImageView<'a, T>,
    line: ThickLine,
    limits: Option<(f32, f32)>,
    options: ProfileOptions,
    profile: Profile,
}

impl<'a, T: Sample> LineProfile<'a, T> {
    /// Attaches to `image`: resolves limits, places the default line and
    /// computes the first profile.
    pub fn attach(image: ImageView<'a, T>, config: &LineProfileConfig) -> OpsResult<Self> {
        let line = ThickLine::centered(image.cols(), image.rows(), config.maxdist);
        let limits = config.limits.resolve(&image);
        let [start, end] = line.end_points;
        let profile = profile_line_with(&image, start, end, line.width(), &config.options)?;
        debug!(?limits, len = profile.len(), "line profile attached");
        Ok(Self {
            image,
            line,
            limits,
            options: config.options,
            profile,
        })
    }

    /// Recomputes the profile for new endpoints.
    ///
    /// On error the previous endpoints and profile are kept.
    pub fn line_changed(&mut self, end_points: [Point; 2]) -> OpsResult<&Profile> {
        let mut line = self.line;
        line.set_end_points(end_points);
        self.update(line)
    }

    /// Sets the line width and recomputes.
    pub fn set_width(&mut self, width: f64) -> OpsResult<&Profile> {
        let mut line = self.line;
        line.set_width(width);
        self.update(line)
    }

    /// Widens the line by one pixel and recomputes.
    pub fn widen(&mut self) -> OpsResult<&Profile> {
        let mut line = self.line;
        line.widen();
        self.update(line)
    }

    /// Narrows the line by one pixel and recomputes.
    pub fn narrow(&mut self) -> OpsResult<&Profile> {
        let mut line = self.line;
        line.narrow();
        self.update(line)
    }

    /// Drags whichever endpoint lies within the pick radius of `from` to `to`.
    ///
    /// Returns `Ok(None)` when nothing was picked.
    pub fn drag(&mut self, from: impl Into<Point>, to: impl Into<Point>) -> OpsResult<Option<&Profile>> {
        let Some(idx) = self.line.hit_test(from) else {
            return Ok(None);
        };
        let mut line = self.line;
        line.move_endpoint(idx, to);
        self.update(line).map(Some)
    }

    /// Current endpoints and profile.
    pub fn get_profile(&self) -> ([Point; 2], &Profile) {
        (self.line.end_points, &self.profile)
    }

    /// Current line geometry.
    pub fn line(&self) -> &ThickLine {
        &self.line
    }

    /// Resolved intensity axis range; `None` means autoscale.
    pub fn limits(&self) -> Option<(f32, f32)> {
        self.limits
    }

    /// The attached image.
    pub fn image(&self) -> &ImageView<'a, T> {
        &self.image
    }

    fn update(&mut self, line: ThickLine) -> OpsResult<&Profile> {
        let [start, end] = line.end_points;
        match profile_line_with(&self.image, start, end, line.width(), &self.options) {
            Ok(profile) => {
                self.line = line;
                self.profile = profile;
                Ok(&self.profile)
            }
            Err(err) => {
                warn!(%err, "profile update rejected, keeping previous line");
                Err(err)
            }
        }
    }
}
