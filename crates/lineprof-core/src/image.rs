//! Image buffer types for line profile sampling.
//!
//! This module provides the image containers the sampler reads from:
//! - [`ImageView`] - Immutable borrowed view over a numeric buffer
//! - [`Image`] - Owned buffer that hands out views
//!
//! # Shape
//!
//! Images are rank 2 (`[rows, cols]`, one implicit channel) or rank 3
//! (`[rows, cols, channels]`, any channel count). Row is `y`, column is `x`.
//! The rank is checked explicitly at construction; there is no guessing of
//! channel structure later on.
//!
//! # Memory Layout
//!
//! Elements are stored **row-major** with channels interleaved:
//!
//! ```text
//! Memory: [c0 c1 c2 c0 c1 c2 ...]  ← Row 0
//!         [c0 c1 c2 c0 c1 c2 ...]  ← Row 1
//!         ...
//! ```
//!
//! # Usage
//!
//! ```rust
//! use lineprof_core::ImageView;
//!
//! let data = vec![0u8; 4 * 5 * 3];
//! let view = ImageView::from_shape(&data, &[4, 5, 3]).unwrap();
//! assert_eq!(view.rows(), 4);
//! assert_eq!(view.cols(), 5);
//! assert_eq!(view.channels(), 3);
//! assert_eq!(view.shape(), &[4, 5, 3]);
//! ```

use crate::{Error, Result, Sample};

/// Borrowed, read-only image.
///
/// Cheap to copy; it is a slice plus the shape. Nothing that takes an
/// `ImageView` can mutate the underlying pixels.
#[derive(Debug, Clone, Copy)]
pub struct ImageView<'a, T> {
    data: &'a [T],
    shape: [usize; 3],
    rank: usize,
}

impl<'a, T> ImageView<'a, T> {
    /// Creates a view from a buffer and an explicit shape.
    ///
    /// `shape` must be `[rows, cols]` or `[rows, cols, channels]`.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidShape`] if the rank is neither 2 nor 3
    /// - [`Error::InvalidDimensions`] if any extent is zero
    /// - [`Error::SizeMismatch`] if `data.len()` doesn't match the shape
    pub fn from_shape(data: &'a [T], shape: &[usize]) -> Result<Self> {
        let (shape, rank) = match *shape {
            [rows, cols] => ([rows, cols, 1], 2),
            [rows, cols, channels] => ([rows, cols, channels], 3),
            _ => return Err(Error::InvalidShape { rank: shape.len() }),
        };
        let [rows, cols, channels] = shape;

        if rows == 0 || cols == 0 || channels == 0 {
            return Err(Error::invalid_dimensions(
                rows,
                cols,
                channels,
                "every extent must be non-zero",
            ));
        }

        let expected = rows
            .checked_mul(cols)
            .and_then(|n| n.checked_mul(channels))
            .ok_or_else(|| Error::invalid_dimensions(rows, cols, channels, "element count overflows"))?;
        if data.len() != expected {
            return Err(Error::size_mismatch(expected, data.len()));
        }

        Ok(Self { data, shape, rank })
    }

    /// Creates a rank-2 (single channel) view.
    #[inline]
    pub fn gray(data: &'a [T], rows: usize, cols: usize) -> Result<Self> {
        Self::from_shape(data, &[rows, cols])
    }

    /// Creates a rank-3 view with `channels` interleaved channels.
    #[inline]
    pub fn interleaved(data: &'a [T], rows: usize, cols: usize, channels: usize) -> Result<Self> {
        Self::from_shape(data, &[rows, cols, channels])
    }

    /// Number of rows (image height).
    #[inline]
    pub fn rows(&self) -> usize {
        self.shape[0]
    }

    /// Number of columns (image width).
    #[inline]
    pub fn cols(&self) -> usize {
        self.shape[1]
    }

    /// Number of channels; 1 for rank-2 images.
    #[inline]
    pub fn channels(&self) -> usize {
        self.shape[2]
    }

    /// Rank of the declared shape, 2 or 3.
    #[inline]
    pub fn rank(&self) -> usize {
        self.rank
    }

    /// Declared shape, `[rows, cols]` or `[rows, cols, channels]`.
    #[inline]
    pub fn shape(&self) -> &[usize] {
        &self.shape[..self.rank]
    }

    /// Raw element buffer.
    #[inline]
    pub fn data(&self) -> &'a [T] {
        self.data
    }

    /// Elements of the pixel at (`row`, `col`), one per channel.
    ///
    /// # Panics
    ///
    /// Panics if (`row`, `col`) is out of bounds.
    #[inline]
    pub fn pixel(&self, row: usize, col: usize) -> &'a [T] {
        debug_assert!(row < self.rows() && col < self.cols(), "pixel out of bounds");
        let ch = self.channels();
        let start = (row * self.cols() + col) * ch;
        &self.data[start..start + ch]
    }
}

impl<T: Sample> ImageView<'_, T> {
    /// Raw value of one channel at (`row`, `col`).
    ///
    /// # Panics
    ///
    /// Panics if any index is out of bounds.
    #[inline]
    pub fn value(&self, row: usize, col: usize, channel: usize) -> f32 {
        debug_assert!(channel < self.channels(), "channel out of bounds");
        self.data[(row * self.cols() + col) * self.channels() + channel].value()
    }

    /// Minimum and maximum over every element, ignoring NaN.
    ///
    /// Returns `None` when every element is NaN.
    ///
    /// ```
    /// use lineprof_core::ImageView;
    ///
    /// let data = [3u8, 9, 1, 4];
    /// let view = ImageView::gray(&data, 2, 2).unwrap();
    /// assert_eq!(view.min_max(), Some((1.0, 9.0)));
    /// ```
    pub fn min_max(&self) -> Option<(f32, f32)> {
        self.data
            .iter()
            .map(|v| v.value())
            .filter(|v| !v.is_nan())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }
}

/// Owned image buffer.
///
/// Mostly a convenience for building test images and for I/O; the sampler
/// itself only ever sees [`ImageView`]s.
///
/// # Example
///
/// ```rust
/// use lineprof_core::Image;
///
/// let img = Image::filled(10, 10, &[1.0f32, 2.0, 3.0]);
/// assert_eq!(img.shape(), &[10, 10, 3]);
/// assert_eq!(img.view().pixel(4, 4), &[1.0, 2.0, 3.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Image<T> {
    data: Vec<T>,
    shape: [usize; 3],
    rank: usize,
}

impl<T> Image<T> {
    /// Creates an image from a buffer and an explicit shape.
    ///
    /// Same rules as [`ImageView::from_shape`].
    pub fn from_shape(data: Vec<T>, shape: &[usize]) -> Result<Self> {
        let (shape, rank) = {
            let view = ImageView::from_shape(&data, shape)?;
            (view.shape, view.rank)
        };
        Ok(Self { data, shape, rank })
    }

    /// Borrows the image as a view.
    #[inline]
    pub fn view(&self) -> ImageView<'_, T> {
        ImageView {
            data: &self.data,
            shape: self.shape,
            rank: self.rank,
        }
    }

    /// Declared shape, `[rows, cols]` or `[rows, cols, channels]`.
    #[inline]
    pub fn shape(&self) -> &[usize] {
        &self.shape[..self.rank]
    }

    /// Raw element buffer.
    #[inline]
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Consumes the image and returns its buffer.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Sets one element.
    ///
    /// # Panics
    ///
    /// Panics if any index is out of bounds.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, channel: usize, value: T) {
        let [_, cols, channels] = self.shape;
        self.data[(row * cols + col) * channels + channel] = value;
    }
}

impl<T: Copy> Image<T> {
    /// Creates an image where every pixel equals `pixel`.
    ///
    /// A one-element `pixel` gives a rank-2 image; longer slices give a
    /// rank-3 image with `pixel.len()` channels.
    ///
    /// # Panics
    ///
    /// Panics if `rows`, `cols` or `pixel.len()` is zero.
    pub fn filled(rows: usize, cols: usize, pixel: &[T]) -> Self {
        assert!(rows > 0 && cols > 0 && !pixel.is_empty(), "empty image");
        let mut data = Vec::with_capacity(rows * cols * pixel.len());
        for _ in 0..rows * cols {
            data.extend_from_slice(pixel);
        }
        let (shape, rank) = if pixel.len() == 1 {
            ([rows, cols, 1], 2)
        } else {
            ([rows, cols, pixel.len()], 3)
        };
        Self { data, shape, rank }
    }

    /// Creates a rank-2 image from a function of (`row`, `col`).
    ///
    /// ```
    /// use lineprof_core::Image;
    ///
    /// let ramp = Image::from_fn(3, 4, |_, col| col as f32);
    /// assert_eq!(ramp.view().pixel(2, 3), &[3.0]);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `rows` or `cols` is zero.
    pub fn from_fn(rows: usize, cols: usize, f: impl Fn(usize, usize) -> T) -> Self {
        assert!(rows > 0 && cols > 0, "empty image");
        let mut data = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                data.push(f(row, col));
            }
        }
        Self {
            data,
            shape: [rows, cols, 1],
            rank: 2,
        }
    }
}
