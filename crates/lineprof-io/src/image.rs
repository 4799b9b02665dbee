//! Decoded image buffers.

use lineprof_core::{ImageView, Sample};

use crate::{IoError, IoResult};

/// Raw pixel data storage.
#[derive(Debug, Clone, PartialEq)]
pub enum PixelData {
    /// 8-bit unsigned data.
    U8(Vec<u8>),
    /// 16-bit unsigned data.
    U16(Vec<u16>),
}

impl PixelData {
    /// Sample type name, as reported by [`Sample::NAME`].
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::U8(_) => u8::NAME,
            Self::U16(_) => u16::NAME,
        }
    }

    /// Number of stored samples.
    pub fn len(&self) -> usize {
        match self {
            Self::U8(v) => v.len(),
            Self::U16(v) => v.len(),
        }
    }

    /// `true` when no samples are stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Decoded image: interleaved channels, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageData {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Number of channels; 1 means grayscale.
    pub channels: u32,
    /// Raw pixel data.
    pub data: PixelData,
}

impl ImageData {
    /// Wraps 8-bit data.
    pub fn from_u8(width: u32, height: u32, channels: u32, data: Vec<u8>) -> Self {
        Self {
            width,
            height,
            channels,
            data: PixelData::U8(data),
        }
    }

    /// Wraps 16-bit data.
    pub fn from_u16(width: u32, height: u32, channels: u32, data: Vec<u16>) -> Self {
        Self {
            width,
            height,
            channels,
            data: PixelData::U16(data),
        }
    }

    /// Array shape: `[rows, cols]` for grayscale, `[rows, cols, channels]`
    /// otherwise.
    pub fn shape(&self) -> Vec<usize> {
        let (rows, cols) = (self.height as usize, self.width as usize);
        if self.channels == 1 {
            vec![rows, cols]
        } else {
            vec![rows, cols, self.channels as usize]
        }
    }

    /// Borrows 8-bit data as an image view.
    ///
    /// # Errors
    ///
    /// [`IoError::UnsupportedFormat`] if the data isn't 8-bit, or
    /// [`IoError::Core`] if the buffer doesn't match the dimensions.
    pub fn view_u8(&self) -> IoResult<ImageView<'_, u8>> {
        match &self.data {
            PixelData::U8(v) => Ok(ImageView::from_shape(v, &self.shape())?),
            other => Err(mismatch(u8::NAME, other)),
        }
    }

    /// Borrows 16-bit data as an image view.
    ///
    /// # Errors
    ///
    /// [`IoError::UnsupportedFormat`] if the data isn't 16-bit, or
    /// [`IoError::Core`] if the buffer doesn't match the dimensions.
    pub fn view_u16(&self) -> IoResult<ImageView<'_, u16>> {
        match &self.data {
            PixelData::U16(v) => Ok(ImageView::from_shape(v, &self.shape())?),
            other => Err(mismatch(u16::NAME, other)),
        }
    }
}

fn mismatch(wanted: &str, data: &PixelData) -> IoError {
    IoError::UnsupportedFormat(format!(
        "requested {} view of {} data",
        wanted,
        data.type_name()
    ))
}
