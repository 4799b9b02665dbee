//! Reads PNGs written with the png encoder and samples them.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use approx::assert_abs_diff_eq;
use lineprof_io::{read_png, write_csv, IoError, PixelData};
use lineprof_ops::profile_line;

fn write_png(path: &Path, width: u32, height: u32, color: png::ColorType, depth: png::BitDepth, data: &[u8]) {
    let file = File::create(path).unwrap();
    let mut encoder = png::Encoder::new(BufWriter::new(file), width, height);
    encoder.set_color(color);
    encoder.set_depth(depth);
    let mut writer = encoder.write_header().unwrap();
    writer.write_image_data(data).unwrap();
    writer.finish().unwrap();
}

#[test]
fn test_gray8_is_rank2() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gray.png");
    let data: Vec<u8> = (0..6 * 4).map(|i| (i % 6) as u8 * 10).collect();
    write_png(&path, 6, 4, png::ColorType::Grayscale, png::BitDepth::Eight, &data);

    let img = read_png(&path).unwrap();
    assert_eq!((img.width, img.height, img.channels), (6, 4, 1));
    assert_eq!(img.data, PixelData::U8(data));

    let view = img.view_u8().unwrap();
    assert_eq!(view.rank(), 2);
    let profile = profile_line(&view, (0.0, 2.0), (5.0, 2.0), 1.0).unwrap();
    assert_eq!(profile.as_slice(), &[0.0, 10.0, 20.0, 30.0, 40.0, 50.0]);
}

#[test]
fn test_rgb8_vertical_profile() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rgb.png");
    let data: Vec<u8> = [1u8, 2, 3].iter().copied().cycle().take(8 * 8 * 3).collect();
    write_png(&path, 8, 8, png::ColorType::Rgb, png::BitDepth::Eight, &data);

    let img = read_png(&path).unwrap();
    assert_eq!(img.shape(), vec![8, 8, 3]);
    let profile = profile_line(&img.view_u8().unwrap(), (3.0, 1.0), (3.0, 6.0), 3.0).unwrap();
    assert_eq!(profile.shape(), (6, 3));
    for row in profile.rows() {
        assert_eq!(row, &[1.0, 2.0, 3.0]);
    }
}

#[test]
fn test_gray16_keeps_depth() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gray16.png");
    let values: Vec<u16> = vec![0, 1000, 40000, 65535];
    let bytes: Vec<u8> = values.iter().flat_map(|v| v.to_be_bytes()).collect();
    write_png(&path, 2, 2, png::ColorType::Grayscale, png::BitDepth::Sixteen, &bytes);

    let img = read_png(&path).unwrap();
    assert_eq!(img.data, PixelData::U16(values));
    assert!(matches!(img.view_u8(), Err(IoError::UnsupportedFormat(_))));

    let view = img.view_u16().unwrap();
    let profile = profile_line(&view, (0.0, 1.0), (1.0, 1.0), 1.0).unwrap();
    assert_abs_diff_eq!(profile.get(1, 0), 65535.0);
}

#[test]
fn test_low_bit_depth_expands_to_u8() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bilevel.png");
    // 8x1 at 1 bit: alternating black and white.
    write_png(&path, 8, 1, png::ColorType::Grayscale, png::BitDepth::One, &[0b1010_1010]);

    let img = read_png(&path).unwrap();
    assert_eq!(img.channels, 1);
    let PixelData::U8(data) = &img.data else {
        panic!("expected 8-bit data");
    };
    assert_eq!(data.len(), 8);
    assert_ne!(data[0], data[1]);
    assert_eq!(data[0], data[2]);
}

#[test]
fn test_corrupt_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.png");
    std::fs::write(&path, b"not a png at all").unwrap();
    assert!(matches!(read_png(&path), Err(IoError::DecodeError(_))));
}

#[test]
fn test_csv_from_png_profile() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ramp.png");
    let data: Vec<u8> = (0..4u8).cycle().take(16).collect();
    write_png(&path, 4, 4, png::ColorType::Grayscale, png::BitDepth::Eight, &data);

    let img = read_png(&path).unwrap();
    let profile = profile_line(&img.view_u8().unwrap(), (0.0, 0.0), (3.0, 0.0), 1.0).unwrap();
    let mut out = Vec::new();
    write_csv(&mut out, &profile).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "index,c0\n0,0\n1,1\n2,2\n3,3\n");
}
