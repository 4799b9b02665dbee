//! Sub-pixel image sampling.
//!
//! Coordinates follow the pixel-centre convention: `(x, y) = (3.0, 2.0)` is
//! the centre of column 3, row 2. Nearest-neighbour rounds to the closest
//! centre; bilinear blends the floor-based 2x2 neighbourhood.
//!
//! Pixels outside the image are resolved through [`BorderMode`].
//!
//! # Example
//!
//! ```rust
//! use lineprof_core::ImageView;
//! use lineprof_ops::{interp::{sample, Interpolation}, BorderMode};
//!
//! let data = [0u8, 10, 20, 30];
//! let view = ImageView::gray(&data, 2, 2).unwrap();
//! let mut out = [0.0f32];
//! sample(&view, 0.5, 0.5, Interpolation::Bilinear, BorderMode::Clamp, &mut out);
//! assert_eq!(out[0], 15.0);
//! ```

use std::fmt;
use std::str::FromStr;

use lineprof_core::{ImageView, Sample};

use crate::border::{map_index, BorderMode};
use crate::OpsError;

/// Interpolation used for off-grid coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Interpolation {
    /// Value of the closest pixel centre.
    Nearest,
    /// Floor-based 2x2 linear blend.
    #[default]
    Bilinear,
}

/// Samples every channel of `img` at column `x`, row `y` into `out`.
///
/// `out` must hold at least `img.channels()` values; only that many are
/// written.
pub fn sample<T: Sample>(
    img: &ImageView<'_, T>,
    x: f64,
    y: f64,
    interpolation: Interpolation,
    border: BorderMode,
    out: &mut [f32],
) {
    let out = &mut out[..img.channels()];
    match interpolation {
        Interpolation::Nearest => {
            let col = x.round() as isize;
            let row = y.round() as isize;
            tap(img, col, row, border, out);
        }
        Interpolation::Bilinear => sample_bilinear(img, x, y, border, out),
    }
}

fn sample_bilinear<T: Sample>(
    img: &ImageView<'_, T>,
    x: f64,
    y: f64,
    border: BorderMode,
    out: &mut [f32],
) {
    let x0 = x.floor();
    let y0 = y.floor();
    let fx = (x - x0) as f32;
    let fy = (y - y0) as f32;
    let (x0, y0) = (x0 as isize, y0 as isize);

    out.fill(0.0);
    let mut px = [0.0f32; 16];
    let mut heap;
    let px: &mut [f32] = if out.len() <= px.len() {
        &mut px[..out.len()]
    } else {
        heap = vec![0.0f32; out.len()];
        &mut heap
    };

    let taps = [
        (x0, y0, (1.0 - fx) * (1.0 - fy)),
        (x0 + 1, y0, fx * (1.0 - fy)),
        (x0, y0 + 1, (1.0 - fx) * fy),
        (x0 + 1, y0 + 1, fx * fy),
    ];
    for (col, row, weight) in taps {
        // Zero-weight taps may sit past the edge; skip them so a NaN
        // constant border can't leak in.
        if weight == 0.0 {
            continue;
        }
        tap(img, col, row, border, px);
        for (o, v) in out.iter_mut().zip(px.iter()) {
            *o += weight * v;
        }
    }
}

/// Reads one pixel through the border policy.
fn tap<T: Sample>(img: &ImageView<'_, T>, col: isize, row: isize, border: BorderMode, out: &mut [f32]) {
    let mapped = map_index(col, img.cols(), border).zip(map_index(row, img.rows(), border));
    match (mapped, border) {
        (Some((c, r)), _) => {
            for (o, v) in out.iter_mut().zip(img.pixel(r, c)) {
                *o = v.value();
            }
        }
        (None, BorderMode::Constant(v)) => out.fill(v),
        // Only Constant maps to None on a non-empty image.
        (None, _) => out.fill(0.0),
    }
}

impl fmt::Display for Interpolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nearest => write!(f, "nearest"),
            Self::Bilinear => write!(f, "bilinear"),
        }
    }
}

impl FromStr for Interpolation {
    type Err = OpsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "nearest" | "nn" | "0" => Ok(Self::Nearest),
            "bilinear" | "linear" | "1" => Ok(Self::Bilinear),
            _ => Err(OpsError::InvalidParameter(format!(
                "unknown interpolation '{}'. Valid: nearest, bilinear",
                s
            ))),
        }
    }
}
