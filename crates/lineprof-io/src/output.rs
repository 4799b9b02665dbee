//! Profile writers.
//!
//! - [`write_csv`] - One row per position: `index,c0,c1,...`
//! - [`write_json`] - A [`ProfileReport`] with the sampling parameters

use std::io::Write;

use lineprof_core::Point;
use lineprof_ops::{Profile, ProfileOptions};
use serde::Serialize;

use crate::IoResult;

/// Writes a profile as CSV with a header row.
///
/// ```
/// use lineprof_io::write_csv;
/// use lineprof_ops::Profile;
///
/// let profile = Profile::from_vec(vec![1.0, 2.0, 3.0, 4.0], 2).unwrap();
/// let mut out = Vec::new();
/// write_csv(&mut out, &profile).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "index,c0,c1\n0,1,2\n1,3,4\n");
/// ```
pub fn write_csv<W: Write>(mut writer: W, profile: &Profile) -> IoResult<()> {
    write!(writer, "index")?;
    for c in 0..profile.channels() {
        write!(writer, ",c{}", c)?;
    }
    writeln!(writer)?;

    for (i, row) in profile.rows().enumerate() {
        write!(writer, "{}", i)?;
        for v in row {
            write!(writer, ",{}", v)?;
        }
        writeln!(writer)?;
    }
    writer.flush()?;
    Ok(())
}

/// Profile plus the parameters that produced it.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileReport {
    /// Source image path, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// First endpoint `[x, y]`.
    pub start: [f64; 2],
    /// Second endpoint `[x, y]`.
    pub end: [f64; 2],
    /// Line width in pixels.
    pub width: f64,
    /// Interpolation name.
    pub interpolation: String,
    /// Border mode name.
    pub border: String,
    /// Intensity axis range; absent means autoscale.
    pub limits: Option<[f32; 2]>,
    /// Sampled values.
    pub profile: Profile,
}

impl ProfileReport {
    /// Builds a report for a profile sampled between `start` and `end`.
    pub fn new(
        start: Point,
        end: Point,
        width: f64,
        options: &ProfileOptions,
        limits: Option<(f32, f32)>,
        profile: Profile,
    ) -> Self {
        Self {
            source: None,
            start: [start.x, start.y],
            end: [end.x, end.y],
            width,
            interpolation: options.interpolation.to_string(),
            border: options.border.to_string(),
            limits: limits.map(|(lo, hi)| [lo, hi]),
            profile,
        }
    }

    /// Sets the source path.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

/// Writes a report as pretty-printed JSON.
pub fn write_json<W: Write>(mut writer: W, report: &ProfileReport) -> IoResult<()> {
    serde_json::to_writer_pretty(&mut writer, report)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
