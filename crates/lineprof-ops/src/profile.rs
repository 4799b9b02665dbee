//! Intensity profiles along a scan line.
//!
//! [`profile_line`] samples an image along the segment from `start` to `end`,
//! averaging `width` samples taken perpendicular to the line at every
//! position. The result is a [`Profile`] of shape `(L, C)`: one row per
//! position along the line, one column per image channel. Grayscale images
//! still get a channel axis of size 1.
//!
//! # Paths
//!
//! - **Vertical** (`x1 == x2`) and **horizontal** (`y1 == y2`) lines read
//!   whole pixels straight out of the image. The along-line span is
//!   `round(min) ..= round(max)`, so `L` is the pixel span plus one. The
//!   perpendicular band is `max(1, round(width))` pixels wide and centred on
//!   the line. Coordinates on the pixel area `[-0.5, len - 0.5]` are pulled
//!   onto `[0, len - 1]` before rounding, then both ranges are clamped to
//!   the image.
//! - **Oblique** lines take `L = ceil(hypot(dx, dy))` evenly spaced positions
//!   on the line and, at each, `max(1, round(width))` points spread over a
//!   perpendicular span of total length `width`. Every point is interpolated
//!   (bilinear by default) and resolved through a [`BorderMode`] when it
//!   falls outside the image (edge replication by default). Lines longer
//!   than [`MAX_OBLIQUE_LEN`] positions are rejected before any allocation.
//!
//! In every path the profile runs from `start` toward `end`.
//!
//! # Perpendicular offsets
//!
//! On oblique lines the perpendicular row coordinates are spread evenly over
//! `y ± |width·cos(θ)/2|`, and each column coordinate is derived from its row
//! through the line slope `a`:
//!
//! ```text
//! px = -a·py + (x + a·y)
//! ```
//!
//! The offset `(-a·t, t)` is orthogonal to the direction `(1, a)`, and with
//! `|t| <= |width·cos(θ)/2|` its length never exceeds `width / 2`. A single
//! perpendicular sample sits on the line.
//!
//! # Example
//!
//! ```rust
//! use lineprof_core::Image;
//! use lineprof_ops::profile_line;
//!
//! let img = Image::filled(10, 10, &[5u8]);
//! let profile = profile_line(&img.view(), (1.0, 5.0), (8.0, 5.0), 1.0).unwrap();
//! assert_eq!(profile.shape(), (8, 1));
//! assert!(profile.as_slice().iter().all(|&v| v == 5.0));
//! ```

use lineprof_core::{ImageView, Point, Sample};
use tracing::{debug, trace};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::border::BorderMode;
use crate::interp::{self, Interpolation};
use crate::{OpsError, OpsResult};

/// Sampling choices for the oblique path.
///
/// Axis-aligned lines read whole pixels and ignore both settings.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ProfileOptions {
    /// Interpolation for off-grid sample points.
    pub interpolation: Interpolation,
    /// Value policy for sample points outside the image.
    pub border: BorderMode,
}

impl ProfileOptions {
    /// Sets the interpolation.
    pub fn with_interpolation(mut self, interpolation: Interpolation) -> Self {
        self.interpolation = interpolation;
        self
    }

    /// Sets the border mode.
    pub fn with_border(mut self, border: BorderMode) -> Self {
        self.border = border;
        self
    }
}

/// Sampled intensity profile of shape `(len, channels)`, row-major.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Profile {
    len: usize,
    channels: usize,
    data: Vec<f32>,
}

impl Profile {
    /// Wraps a row-major `(len, channels)` buffer.
    ///
    /// # Errors
    ///
    /// [`OpsError::ChannelMismatch`] if `channels` is zero, `data` is empty,
    /// or `data.len()` isn't a multiple of `channels`.
    pub fn from_vec(data: Vec<f32>, channels: usize) -> OpsResult<Self> {
        if channels == 0 || data.is_empty() || data.len() % channels != 0 {
            return Err(OpsError::ChannelMismatch(format!(
                "{} values can't form a profile with {} channels",
                data.len(),
                channels
            )));
        }
        Ok(Self {
            len: data.len() / channels,
            channels,
            data,
        })
    }

    /// Number of positions along the line (`L`).
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always `false`; a profile has at least one position.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of channels (`C`).
    #[inline]
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// `(L, C)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.len, self.channels)
    }

    /// Value at position `i`, channel `c`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    #[inline]
    pub fn get(&self, i: usize, c: usize) -> f32 {
        assert!(c < self.channels, "channel {} out of range", c);
        self.data[i * self.channels + c]
    }

    /// All channels at position `i`.
    #[inline]
    pub fn row(&self, i: usize) -> &[f32] {
        &self.data[i * self.channels..(i + 1) * self.channels]
    }

    /// Iterates positions, yielding one channel slice each.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[f32]> + '_ {
        self.data.chunks_exact(self.channels)
    }

    /// Iterates one channel along the line.
    ///
    /// # Panics
    ///
    /// Panics if `c >= channels()`.
    pub fn channel(&self, c: usize) -> impl Iterator<Item = f32> + '_ {
        assert!(c < self.channels, "channel {} out of range", c);
        self.data.iter().skip(c).step_by(self.channels).copied()
    }

    /// Row-major values.
    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Consumes the profile and returns its row-major values.
    #[inline]
    pub fn into_vec(self) -> Vec<f32> {
        self.data
    }

    /// Minimum and maximum over all values, ignoring NaN.
    pub fn min_max(&self) -> Option<(f32, f32)> {
        self.data
            .iter()
            .copied()
            .filter(|v| !v.is_nan())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }

    /// Same profile with the positions in opposite order.
    pub fn reversed(&self) -> Self {
        let mut data = Vec::with_capacity(self.data.len());
        for row in self.data.chunks_exact(self.channels).rev() {
            data.extend_from_slice(row);
        }
        Self {
            len: self.len,
            channels: self.channels,
            data,
        }
    }
}

/// Upper bound on the number of positions along an oblique line.
pub const MAX_OBLIQUE_LEN: usize = 1 << 24;

/// Number of samples taken across the line for a given width.
///
/// ```
/// use lineprof_ops::profile::perpendicular_samples;
///
/// assert_eq!(perpendicular_samples(1.0), 1);
/// assert_eq!(perpendicular_samples(0.3), 1);
/// assert_eq!(perpendicular_samples(2.5), 3);
/// ```
#[inline]
pub fn perpendicular_samples(width: f64) -> usize {
    (width.round() as usize).max(1)
}

/// Samples the profile from `start` to `end` with default [`ProfileOptions`].
///
/// # Arguments
///
/// * `image` - Rank-2 or rank-3 image
/// * `start`, `end` - Endpoints `(x, y)` in pixel coordinates
/// * `width` - Line thickness in pixels
///
/// # Errors
///
/// - [`OpsError::InvalidGeometry`] for identical or non-finite endpoints
/// - [`OpsError::InvalidWidth`] for a width that isn't finite and positive
/// - [`OpsError::OutOfBounds`] when no sample touches the image
pub fn profile_line<T: Sample>(
    image: &ImageView<'_, T>,
    start: impl Into<Point>,
    end: impl Into<Point>,
    width: f64,
) -> OpsResult<Profile> {
    profile_line_with(image, start, end, width, &ProfileOptions::default())
}

/// Samples the profile from `start` to `end` with explicit options.
///
/// See [`profile_line`].
pub fn profile_line_with<T: Sample>(
    image: &ImageView<'_, T>,
    start: impl Into<Point>,
    end: impl Into<Point>,
    width: f64,
    options: &ProfileOptions,
) -> OpsResult<Profile> {
    let start = start.into();
    let end = end.into();
    trace!(
        x1 = start.x, y1 = start.y, x2 = end.x, y2 = end.y, width,
        rows = image.rows(), cols = image.cols(), channels = image.channels(),
        "profile_line"
    );
    validate(start, end, width)?;

    if start.x == end.x {
        axis_aligned(image, start, end, width, Axis::Vertical)
    } else if start.y == end.y {
        axis_aligned(image, start, end, width, Axis::Horizontal)
    } else {
        oblique(image, start, end, width, options)
    }
}

/// Samples a profile straight from a buffer and a declared shape.
///
/// For callers holding array data rather than an [`ImageView`]. A shape
/// whose rank isn't 2 or 3 fails with [`OpsError::ChannelMismatch`].
///
/// ```
/// use lineprof_ops::{profile_array, OpsError};
///
/// let data = vec![1u8; 4 * 4];
/// let p = profile_array(&data, &[4, 4], (0.0, 1.0), (3.0, 1.0), 1.0).unwrap();
/// assert_eq!(p.shape(), (4, 1));
///
/// let err = profile_array(&data, &[16], (0.0, 1.0), (3.0, 1.0), 1.0).unwrap_err();
/// assert!(matches!(err, OpsError::ChannelMismatch(_)));
/// ```
pub fn profile_array<T: Sample>(
    data: &[T],
    shape: &[usize],
    start: impl Into<Point>,
    end: impl Into<Point>,
    width: f64,
) -> OpsResult<Profile> {
    let view = ImageView::from_shape(data, shape)?;
    profile_line(&view, start, end, width)
}

fn validate(start: Point, end: Point, width: f64) -> OpsResult<()> {
    if !start.is_finite() || !end.is_finite() {
        return Err(OpsError::InvalidGeometry {
            start,
            end,
            reason: "endpoint coordinates must be finite",
        });
    }
    if start == end {
        return Err(OpsError::InvalidGeometry {
            start,
            end,
            reason: "endpoints are identical",
        });
    }
    if !width.is_finite() || width <= 0.0 {
        return Err(OpsError::InvalidWidth(width));
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    /// Constant x, walks rows.
    Vertical,
    /// Constant y, walks columns.
    Horizontal,
}

/// Clamps the inclusive pixel range `[lo, hi]` to `[0, len)`.
fn clamp_span(lo: f64, hi: f64, len: usize) -> Option<(usize, usize)> {
    let last = len.checked_sub(1)? as f64;
    if hi < 0.0 || lo > last {
        return None;
    }
    Some((lo.max(0.0) as usize, hi.min(last) as usize))
}

/// Pulls a coordinate on the pixel area `[-0.5, len - 0.5]` onto the
/// pixel-centre range `[0, len - 1]`; coordinates off the image are kept.
#[inline]
fn snap(v: f64, len: usize) -> f64 {
    let last = len.saturating_sub(1) as f64;
    if (-0.5..=last + 0.5).contains(&v) {
        v.clamp(0.0, last)
    } else {
        v
    }
}

/// Whether segment `a`-`b` meets the box `[min.x, max.x] × [min.y, max.y]`.
fn segment_meets_box(a: Point, b: Point, min: Point, max: Point) -> bool {
    let (dx, dy) = (b.x - a.x, b.y - a.y);
    let (mut t0, mut t1) = (0.0f64, 1.0f64);
    let edges = [
        (-dx, a.x - min.x),
        (dx, max.x - a.x),
        (-dy, a.y - min.y),
        (dy, max.y - a.y),
    ];
    for (p, q) in edges {
        if p == 0.0 {
            if q < 0.0 {
                return false;
            }
        } else {
            let r = q / p;
            if p < 0.0 {
                t0 = t0.max(r);
            } else {
                t1 = t1.min(r);
            }
            if t0 > t1 {
                return false;
            }
        }
    }
    true
}

fn axis_aligned<T: Sample>(
    image: &ImageView<'_, T>,
    start: Point,
    end: Point,
    width: f64,
    axis: Axis,
) -> OpsResult<Profile> {
    let (a1, a2, center, along_len, across_len) = match axis {
        Axis::Vertical => (start.y, end.y, start.x, image.rows(), image.cols()),
        Axis::Horizontal => (start.x, end.x, start.y, image.cols(), image.rows()),
    };
    let (a1, a2) = (snap(a1, along_len), snap(a2, along_len));
    let center = snap(center, across_len);
    let n = perpendicular_samples(width);
    let band_lo = (center - (n as f64 - 1.0) / 2.0).round();
    let band_hi = band_lo + (n - 1) as f64;

    let along = clamp_span(a1.min(a2).round(), a1.max(a2).round(), along_len);
    let across = clamp_span(band_lo, band_hi, across_len);
    let ((along_lo, along_hi), (across_lo, across_hi)) = along.zip(across).ok_or(OpsError::OutOfBounds {
        start,
        end,
        rows: image.rows(),
        cols: image.cols(),
    })?;

    let ch = image.channels();
    let count = along_hi - along_lo + 1;
    let band = (across_hi - across_lo + 1) as f32;
    let reverse = a2 < a1;
    debug!(?axis, count, band, reverse, "axis-aligned profile");

    let mut data = vec![0.0f32; count * ch];
    for (k, a) in (along_lo..=along_hi).enumerate() {
        let i = if reverse { count - 1 - k } else { k };
        let out = &mut data[i * ch..(i + 1) * ch];
        for b in across_lo..=across_hi {
            let (row, col) = match axis {
                Axis::Vertical => (a, b),
                Axis::Horizontal => (b, a),
            };
            for (o, v) in out.iter_mut().zip(image.pixel(row, col)) {
                *o += v.value();
            }
        }
        for o in out.iter_mut() {
            *o /= band;
        }
    }

    Profile::from_vec(data, ch)
}

/// `i`-th of `num` evenly spaced values from `start` to `stop` inclusive.
#[inline]
fn linspace_at(start: f64, stop: f64, num: usize, i: usize) -> f64 {
    if num == 1 {
        start
    } else if i == num - 1 {
        stop
    } else {
        start + (stop - start) * i as f64 / (num - 1) as f64
    }
}

/// Geometry of an oblique scan line, in the line-equation form `y = a·x + b`.
#[derive(Debug, Clone, Copy)]
struct ObliqueLine {
    start: Point,
    end: Point,
    slope: f64,
    intercept: f64,
    y_half: f64,
    count: usize,
    across: usize,
}

impl ObliqueLine {
    fn new(start: Point, end: Point, width: f64) -> Self {
        let dx = end.x - start.x;
        let dy = end.y - start.y;
        let theta = dy.atan2(dx);
        let slope = dy / dx;
        let length = dx.hypot(dy);
        Self {
            start,
            end,
            slope,
            intercept: start.y - slope * start.x,
            y_half: (width * theta.cos() / 2.0).abs(),
            count: (length.ceil() as usize).max(1),
            across: perpendicular_samples(width),
        }
    }

    /// Position `i` on the line.
    #[inline]
    fn along(&self, i: usize) -> (f64, f64) {
        let x = linspace_at(self.start.x, self.end.x, self.count, i);
        (x, self.slope * x + self.intercept)
    }

    /// Perpendicular sample `j` around the line position `(x, y)`.
    #[inline]
    fn across(&self, x: f64, y: f64, j: usize) -> (f64, f64) {
        if self.across == 1 {
            return (x, y);
        }
        let py = linspace_at(y - self.y_half, y + self.y_half, self.across, j);
        let px = -self.slope * py + (x + self.slope * y);
        (px, py)
    }
}

fn oblique<T: Sample>(
    image: &ImageView<'_, T>,
    start: Point,
    end: Point,
    width: f64,
    options: &ProfileOptions,
) -> OpsResult<Profile> {
    let out_of_bounds = || OpsError::OutOfBounds {
        start,
        end,
        rows: image.rows(),
        cols: image.cols(),
    };

    // Every sample lies within width/2 of the centre line.
    let margin = width / 2.0 + 0.5;
    let area_min = Point::new(-margin, -margin);
    let area_max = Point::new(
        image.cols() as f64 - 1.0 + margin,
        image.rows() as f64 - 1.0 + margin,
    );
    if !segment_meets_box(start, end, area_min, area_max) {
        return Err(out_of_bounds());
    }
    if start.distance(end).ceil() > MAX_OBLIQUE_LEN as f64 {
        return Err(OpsError::InvalidGeometry {
            start,
            end,
            reason: "line is longer than MAX_OBLIQUE_LEN samples",
        });
    }

    let line = ObliqueLine::new(start, end, width);
    let ch = image.channels();
    debug!(
        count = line.count, across = line.across, slope = line.slope,
        interpolation = %options.interpolation, border = %options.border,
        "oblique profile"
    );

    let (max_x, max_y) = (image.cols() as f64 - 0.5, image.rows() as f64 - 0.5);
    // Fills one position; returns whether any sample landed on the image.
    let fill = |i: usize, out: &mut [f32]| -> bool {
        let (x, y) = line.along(i);
        let mut scratch = vec![0.0f32; ch];
        let mut touched = false;
        for j in 0..line.across {
            let (px, py) = line.across(x, y, j);
            touched |= px >= -0.5 && px <= max_x && py >= -0.5 && py <= max_y;
            interp::sample(image, px, py, options.interpolation, options.border, &mut scratch);
            for (o, v) in out.iter_mut().zip(&scratch) {
                *o += v;
            }
        }
        let n = line.across as f32;
        for o in out.iter_mut() {
            *o /= n;
        }
        touched
    };

    let mut data = vec![0.0f32; line.count * ch];

    #[cfg(feature = "parallel")]
    let touched = data
        .par_chunks_mut(ch)
        .enumerate()
        .map(|(i, out)| fill(i, out))
        .reduce(|| false, |a, b| a || b);

    #[cfg(not(feature = "parallel"))]
    let touched = data
        .chunks_mut(ch)
        .enumerate()
        .fold(false, |acc, (i, out)| fill(i, out) || acc);

    if !touched {
        return Err(out_of_bounds());
    }

    Profile::from_vec(data, ch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use lineprof_core::Image;

    #[test]
    fn test_constant_horizontal_scenario() {
        let img = Image::filled(10, 10, &[5u8]);
        let p = profile_line(&img.view(), (1.0, 5.0), (8.0, 5.0), 1.0).unwrap();
        assert_eq!(p.shape(), (8, 1));
        assert!(p.channel(0).all(|v| v == 5.0));
    }

    #[test]
    fn test_vertical_rgb_scenario() {
        let img = Image::filled(10, 10, &[1u8, 2, 3]);
        let p = profile_line(&img.view(), (4.0, 2.0), (4.0, 7.0), 3.0).unwrap();
        assert_eq!(p.shape(), (6, 3));
        for row in p.rows() {
            assert_eq!(row, &[1.0, 2.0, 3.0]);
        }
    }

    #[test]
    fn test_vertical_reads_column() {
        // value = row * 10 + col
        let img = Image::from_fn(6, 6, |r, c| (r * 10 + c) as f32);
        let p = profile_line(&img.view(), (2.0, 1.0), (2.0, 4.0), 1.0).unwrap();
        assert_eq!(p.as_slice(), &[12.0, 22.0, 32.0, 42.0]);
    }

    #[test]
    fn test_horizontal_band_average() {
        let img = Image::from_fn(6, 6, |r, _| r as f32);
        // Width 3 around row 2 averages rows 1, 2, 3.
        let p = profile_line(&img.view(), (0.0, 2.0), (5.0, 2.0), 3.0).unwrap();
        assert_eq!(p.len(), 6);
        assert!(p.channel(0).all(|v| v == 2.0));
    }

    #[test]
    fn test_even_width_band() {
        let img = Image::from_fn(6, 6, |_, c| c as f32);
        // Width 2 around column 2 covers columns 2 and 3 (half rounds away from zero).
        let p = profile_line(&img.view(), (2.0, 0.0), (2.0, 3.0), 2.0).unwrap();
        assert!(p.channel(0).all(|v| v == 2.5));
    }

    #[test]
    fn test_axis_aligned_reversed_order() {
        let img = Image::from_fn(5, 5, |_, c| c as f32);
        let fwd = profile_line(&img.view(), (0.0, 2.0), (4.0, 2.0), 1.0).unwrap();
        let rev = profile_line(&img.view(), (4.0, 2.0), (0.0, 2.0), 1.0).unwrap();
        assert_eq!(fwd.as_slice(), &[0.0, 1.0, 2.0, 3.0, 4.0]);
        assert_eq!(rev, fwd.reversed());
    }

    #[test]
    fn test_axis_aligned_clamps_to_image() {
        let img = Image::from_fn(5, 5, |r, _| r as f32);
        let p = profile_line(&img.view(), (2.0, -3.0), (2.0, 2.0), 1.0).unwrap();
        assert_eq!(p.as_slice(), &[0.0, 1.0, 2.0]);

        // Band partly outside: only column 0 remains.
        let img = Image::from_fn(5, 5, |_, c| c as f32 + 1.0);
        let p = profile_line(&img.view(), (0.0, 0.0), (0.0, 4.0), 3.0).unwrap();
        assert!(p.channel(0).all(|v| v == 1.5));
    }

    #[test]
    fn test_axis_aligned_fully_outside() {
        let img = Image::filled(5, 5, &[1u8]);
        let err = profile_line(&img.view(), (9.0, 0.0), (9.0, 4.0), 1.0).unwrap_err();
        assert!(matches!(err, OpsError::OutOfBounds { .. }));

        let err = profile_line(&img.view(), (0.0, 7.0), (4.0, 7.0), 1.0).unwrap_err();
        assert!(matches!(err, OpsError::OutOfBounds { .. }));
    }

    #[test]
    fn test_oblique_length() {
        let img = Image::filled(20, 20, &[0.0f32]);
        let p = profile_line(&img.view(), (1.0, 1.0), (4.0, 5.0), 1.0).unwrap();
        assert_eq!(p.len(), 5);
        let p = profile_line(&img.view(), (0.0, 0.0), (10.0, 3.0), 1.0).unwrap();
        assert_eq!(p.len(), (10f64.hypot(3.0)).ceil() as usize);
    }

    #[test]
    fn test_oblique_diagonal_hits_pixels() {
        let img = Image::from_fn(8, 8, |r, c| (r * 8 + c) as f32);
        // Length sqrt(2)*4 -> ceil = 6 samples; endpoints land on pixel centres.
        let p = profile_line(&img.view(), (1.0, 1.0), (5.0, 5.0), 1.0).unwrap();
        assert_eq!(p.len(), 6);
        assert_abs_diff_eq!(p.get(0, 0), 9.0, epsilon = 1e-4);
        assert_abs_diff_eq!(p.get(5, 0), 45.0, epsilon = 1e-4);
    }

    #[test]
    fn test_oblique_linear_ramp_is_exact() {
        // Bilinear reproduces a linear function exactly.
        let img = Image::from_fn(16, 16, |r, c| (2 * r + c) as f32);
        let p = profile_line(&img.view(), (2.0, 3.0), (11.0, 9.0), 1.0).unwrap();
        let n = p.len();
        for i in 0..n {
            let x = 2.0 + 9.0 * i as f64 / (n - 1) as f64;
            let y = 3.0 + 6.0 * i as f64 / (n - 1) as f64;
            assert_abs_diff_eq!(p.get(i, 0) as f64, 2.0 * y + x, epsilon = 1e-3);
        }
    }

    #[test]
    fn test_oblique_width_keeps_count() {
        let img = Image::from_fn(32, 32, |r, c| ((r * 7 + c * 3) % 11) as f32);
        let view = img.view();
        let base = profile_line(&view, (3.0, 4.0), (25.0, 19.0), 1.0).unwrap();
        for w in [2.0, 3.0, 5.0, 7.5] {
            let p = profile_line(&view, (3.0, 4.0), (25.0, 19.0), w).unwrap();
            assert_eq!(p.len(), base.len());
        }
    }

    #[test]
    fn test_oblique_width_on_symmetric_ramp() {
        // Perpendicular averaging of a linear field centred on the line
        // leaves the value on the line unchanged.
        let img = Image::from_fn(32, 32, |r, c| (r + 2 * c) as f32);
        let view = img.view();
        let thin = profile_line(&view, (5.0, 6.0), (20.0, 14.0), 1.0).unwrap();
        let thick = profile_line(&view, (5.0, 6.0), (20.0, 14.0), 5.0).unwrap();
        for (a, b) in thin.channel(0).zip(thick.channel(0)) {
            assert_abs_diff_eq!(a, b, epsilon = 1e-3);
        }
    }

    #[test]
    fn test_oblique_reversal() {
        let img = Image::from_fn(20, 20, |r, c| (r * r + 3 * c) as f32);
        let view = img.view();
        let fwd = profile_line(&view, (2.0, 3.0), (15.0, 11.0), 3.0).unwrap();
        let rev = profile_line(&view, (15.0, 11.0), (2.0, 3.0), 3.0).unwrap();
        for (a, b) in fwd.channel(0).zip(rev.reversed().channel(0)) {
            assert_abs_diff_eq!(a, b, epsilon = 1e-3);
        }
    }

    #[test]
    fn test_oblique_outside_uses_border() {
        let img = Image::filled(4, 4, &[7.0f32]);
        let view = img.view();
        // Starts inside, leaves the image: clamp keeps replicating 7.
        let p = profile_line(&view, (1.0, 1.0), (8.0, 6.0), 1.0).unwrap();
        assert!(p.channel(0).all(|v| (v - 7.0).abs() < 1e-5));

        let opts = ProfileOptions::default().with_border(BorderMode::Constant(0.0));
        let p = profile_line_with(&view, (1.0, 1.0), (8.0, 6.0), 1.0, &opts).unwrap();
        assert_abs_diff_eq!(p.get(0, 0), 7.0, epsilon = 1e-5);
        assert_abs_diff_eq!(p.get(p.len() - 1, 0), 0.0, epsilon = 1e-5);
    }

    #[test]
    fn test_oblique_fully_outside() {
        let img = Image::filled(4, 4, &[1u8]);
        let err = profile_line(&img.view(), (10.0, 10.0), (20.0, 14.0), 1.0).unwrap_err();
        assert!(matches!(err, OpsError::OutOfBounds { rows: 4, cols: 4, .. }));
    }

    #[test]
    fn test_short_oblique_line_has_one_sample() {
        let img = Image::filled(4, 4, &[3u16]);
        let p = profile_line(&img.view(), (1.0, 1.0), (1.5, 1.5), 1.0).unwrap();
        assert_eq!(p.len(), 1);
        assert_eq!(p.get(0, 0), 3.0);
    }

    #[test]
    fn test_nearest_interpolation() {
        let img = Image::from_fn(8, 8, |r, c| (r * 8 + c) as f32);
        let opts = ProfileOptions::default().with_interpolation(Interpolation::Nearest);
        let p = profile_line_with(&img.view(), (0.0, 0.0), (6.0, 3.0), 1.0, &opts).unwrap();
        for v in p.channel(0) {
            assert_eq!(v.fract(), 0.0);
        }
    }

    #[test]
    fn test_invalid_inputs() {
        let img = Image::filled(4, 4, &[1u8]);
        let view = img.view();

        let err = profile_line(&view, (1.0, 1.0), (1.0, 1.0), 1.0).unwrap_err();
        assert!(matches!(err, OpsError::InvalidGeometry { .. }));

        let err = profile_line(&view, (f64::NAN, 1.0), (2.0, 1.0), 1.0).unwrap_err();
        assert!(matches!(err, OpsError::InvalidGeometry { .. }));

        for w in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = profile_line(&view, (0.0, 1.0), (3.0, 1.0), w).unwrap_err();
            assert!(matches!(err, OpsError::InvalidWidth(_)), "width {}", w);
        }
    }

    #[test]
    fn test_profile_from_vec() {
        let p = Profile::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 3).unwrap();
        assert_eq!(p.shape(), (2, 3));
        assert_eq!(p.row(1), &[4.0, 5.0, 6.0]);
        assert_eq!(p.channel(1).collect::<Vec<_>>(), vec![2.0, 5.0]);
        assert_eq!(p.min_max(), Some((1.0, 6.0)));
        assert!(!p.is_empty());

        assert!(Profile::from_vec(vec![1.0; 5], 2).is_err());
        assert!(Profile::from_vec(Vec::new(), 1).is_err());
        assert!(Profile::from_vec(vec![1.0], 0).is_err());
    }

    #[test]
    fn test_half_pixel_line_on_single_row() {
        let img = Image::from_fn(1, 30, |_, c| c as f32);
        let p = profile_line(&img.view(), (2.0, 0.5), (9.0, 0.5), 1.0).unwrap();
        assert_eq!(p.as_slice(), &[2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);

        // Wider bands clamp to the single row.
        let p = profile_line(&img.view(), (2.0, 0.5), (9.0, 0.5), 3.0).unwrap();
        assert_eq!(p.len(), 8);
        assert_eq!(p.get(0, 0), 2.0);

        // Past the pixel area on either side.
        for y in [0.6, -0.6] {
            let err = profile_line(&img.view(), (2.0, y), (9.0, y), 1.0).unwrap_err();
            assert!(matches!(err, OpsError::OutOfBounds { .. }), "y = {}", y);
        }
    }

    #[test]
    fn test_half_pixel_line_on_single_column() {
        let img = Image::from_fn(30, 1, |r, _| r as f32);
        let p = profile_line(&img.view(), (-0.5, 3.0), (-0.5, 6.0), 1.0).unwrap();
        assert_eq!(p.as_slice(), &[3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_oblique_on_pixel_area_edge_is_in_bounds() {
        let img = Image::filled(1, 10, &[4.0f32]);
        // Only the first sample touches the image, on its lower edge.
        let p = profile_line(&img.view(), (0.0, 0.5), (3.0, 4.5), 1.0).unwrap();
        assert_eq!(p.len(), 5);
        assert!(p.channel(0).all(|v| (v - 4.0).abs() < 1e-5));
    }

    #[test]
    fn test_long_oblique_line_rejected_before_allocation() {
        let img = Image::filled(4, 4, &[1u8]);
        let err = profile_line(&img.view(), (0.0, 0.0), (1e11, 1e11 + 1.0), 1.0).unwrap_err();
        assert!(matches!(err, OpsError::InvalidGeometry { .. }));

        // Far away and long: outside wins.
        let err = profile_line(&img.view(), (1e11, 1e11), (2e11, 2e11 + 1.0), 1.0).unwrap_err();
        assert!(matches!(err, OpsError::OutOfBounds { .. }));

        // Long lines up to the limit still sample.
        let p = profile_line(&img.view(), (0.0, 0.0), (600.0, 800.0), 1.0).unwrap();
        assert_eq!(p.len(), 1000);
    }

    #[test]
    fn test_segment_meets_box() {
        let (lo, hi) = (Point::new(0.0, 0.0), Point::new(4.0, 4.0));
        assert!(segment_meets_box(Point::new(-5.0, 2.0), Point::new(10.0, 2.0), lo, hi));
        assert!(segment_meets_box(Point::new(1.0, 1.0), Point::new(2.0, 3.0), lo, hi));
        assert!(!segment_meets_box(Point::new(5.0, 0.0), Point::new(9.0, 3.0), lo, hi));
        assert!(!segment_meets_box(Point::new(-1.0, 5.0), Point::new(3.0, 9.0), lo, hi));
    }

    #[test]
    fn test_clamp_span_empty_axis() {
        assert_eq!(clamp_span(0.0, 3.0, 0), None);
        assert_eq!(clamp_span(-2.0, 9.0, 5), Some((0, 4)));
    }

    #[test]
    fn test_linspace_matches_endpoints() {
        assert_eq!(linspace_at(1.0, 8.0, 8, 0), 1.0);
        assert_eq!(linspace_at(1.0, 8.0, 8, 7), 8.0);
        assert_eq!(linspace_at(1.0, 8.0, 8, 3), 4.0);
        assert_eq!(linspace_at(2.0, 5.0, 1, 0), 2.0);
    }
}
