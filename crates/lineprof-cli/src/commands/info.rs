//! Image info command.
//!
//! Shows dimensions, sample type, value ranges and where an interactive
//! session would place its initial scan line.

use crate::InfoArgs;
use anyhow::Result;
use lineprof_core::{ImageView, Sample};
use lineprof_io::PixelData;
use lineprof_ops::{LineProfile, LineProfileConfig};
use std::path::Path;

/// Runs the info command for every input.
pub fn run(args: InfoArgs, verbose: u8) -> Result<()> {
    for (i, path) in args.input.iter().enumerate() {
        if i > 0 {
            println!();
        }
        let image = super::load_image(path)?;
        println!("{}", path.display());
        println!("  Resolution: {}x{}", image.width, image.height);
        println!("  Channels:   {}", image.channels);
        match &image.data {
            PixelData::U8(_) => print_view(path, &image.view_u8()?, verbose),
            PixelData::U16(_) => print_view(path, &image.view_u16()?, verbose),
        }
    }
    Ok(())
}

fn print_view<T: Sample>(path: &Path, view: &ImageView<'_, T>, verbose: u8) {
    let (lo, hi) = T::DTYPE_RANGE;
    println!("  Sample:     {} (range {} .. {})", T::NAME, lo, hi);
    match view.min_max() {
        Some((min, max)) => println!("  Values:     {} .. {}", min, max),
        None => println!("  Values:     (all NaN)"),
    }

    if verbose == 0 {
        return;
    }
    match LineProfile::attach(*view, &LineProfileConfig::default()) {
        Ok(session) => {
            let ([start, end], profile) = session.get_profile();
            println!("  Line:       {} -> {} ({} samples)", start, end, profile.len());
        }
        Err(err) => tracing::warn!(path = %path.display(), %err, "no default line"),
    }
}
