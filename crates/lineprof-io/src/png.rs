//! PNG input.
//!
//! Every PNG decodes to 8- or 16-bit samples:
//!
//! - 1/2/4-bit grayscale is expanded to 8-bit
//! - palette images are expanded to RGB, or RGBA with a `tRNS` chunk
//! - 16-bit data stays 16-bit (big-endian on disk)
//!
//! Grayscale stays single-channel, so it maps to a rank-2 image.
//!
//! # Example
//!
//! ```rust,ignore
//! use lineprof_io::read_png;
//!
//! let image = read_png("input.png")?;
//! let view = image.view_u8()?;
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use tracing::debug;

use crate::{ImageData, IoError, IoResult, PixelData};

/// Reads a PNG file from the given path.
pub fn read_png<P: AsRef<Path>>(path: P) -> IoResult<ImageData> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let mut decoder = png::Decoder::new(BufReader::new(file));
    decoder.set_transformations(png::Transformations::EXPAND);
    let mut reader = decoder
        .read_info()
        .map_err(|e: png::DecodingError| IoError::DecodeError(e.to_string()))?;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("cannot determine output buffer size".into()))?;
    let (color_type, bit_depth) = reader.output_color_type();
    let mut buf = vec![0u8; buf_size];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e: png::DecodingError| IoError::DecodeError(e.to_string()))?;
    buf.truncate(info.buffer_size());

    let channels = match color_type {
        png::ColorType::Grayscale => 1,
        png::ColorType::GrayscaleAlpha => 2,
        png::ColorType::Rgb => 3,
        png::ColorType::Rgba => 4,
        png::ColorType::Indexed => {
            return Err(IoError::UnsupportedFormat("unexpanded palette image".into()));
        }
    };
    let data = match bit_depth {
        png::BitDepth::Eight => PixelData::U8(buf),
        png::BitDepth::Sixteen => PixelData::U16(bytes_to_u16(&buf)),
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "{:?} {:?} after expansion",
                color_type, other
            )));
        }
    };

    debug!(
        path = %path.display(),
        width = info.width,
        height = info.height,
        channels,
        sample = data.type_name(),
        "read png"
    );

    Ok(ImageData {
        width: info.width,
        height: info.height,
        channels,
        data,
    })
}

/// Converts big-endian byte slice to u16 vector.
fn bytes_to_u16(bytes: &[u8]) -> Vec<u16> {
    bytes
        .chunks_exact(2)
        .map(|chunk| u16::from_be_bytes([chunk[0], chunk[1]]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bytes_to_u16_big_endian() {
        assert_eq!(bytes_to_u16(&[0x01, 0x02, 0xff, 0x00]), vec![0x0102, 0xff00]);
    }

    #[test]
    fn test_missing_file() {
        let err = read_png("/nonexistent/lineprof/missing.png").unwrap_err();
        assert!(matches!(err, IoError::Io(_)));
    }
}
