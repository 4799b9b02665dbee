//! CLI command implementations

pub mod info;
pub mod sample;

use anyhow::{Context, Result};
use lineprof_io::ImageData;
use std::path::Path;

/// Load image from path
pub fn load_image(path: &Path) -> Result<ImageData> {
    lineprof_io::read_png(path).with_context(|| format!("Failed to load: {}", path.display()))
}
