//! Profile sampling command.

use crate::{OutputFormat, SampleArgs};
use anyhow::{Context, Result};
use lineprof_core::{ImageView, Sample};
use lineprof_io::{write_csv, write_json, PixelData, ProfileReport};
use lineprof_ops::{profile_line_with, Profile, ProfileOptions};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use tracing::info;

/// Samples the profile and writes it to the output file or stdout.
pub fn run(args: SampleArgs, _verbose: u8) -> Result<()> {
    let image = super::load_image(&args.input)?;
    let options = ProfileOptions::default()
        .with_interpolation(args.interp)
        .with_border(args.border);

    let (profile, limits) = match &image.data {
        PixelData::U8(_) => sample_view(&image.view_u8()?, &args, &options)?,
        PixelData::U16(_) => sample_view(&image.view_u16()?, &args, &options)?,
    };
    info!(
        from = %args.from,
        to = %args.to,
        width = args.width,
        len = profile.len(),
        channels = profile.channels(),
        ?limits,
        "sampled {}",
        args.input.display()
    );

    let report = ProfileReport::new(args.from, args.to, args.width, &options, limits, profile)
        .with_source(args.input.display().to_string());

    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create: {}", path.display()))?;
            write_output(BufWriter::new(file), args.format, &report)
                .with_context(|| format!("Failed to write: {}", path.display()))
        }
        None => write_output(io::stdout().lock(), args.format, &report).context("Failed to write profile"),
    }
}

fn sample_view<T: Sample>(
    view: &ImageView<'_, T>,
    args: &SampleArgs,
    options: &ProfileOptions,
) -> Result<(Profile, Option<(f32, f32)>)> {
    let profile = profile_line_with(view, args.from, args.to, args.width, options)
        .with_context(|| format!("Failed to sample {} -> {}", args.from, args.to))?;
    Ok((profile, args.limits.resolve(view)))
}

fn write_output<W: Write>(writer: W, format: OutputFormat, report: &ProfileReport) -> Result<()> {
    match format {
        OutputFormat::Csv => write_csv(writer, &report.profile)?,
        OutputFormat::Json => write_json(writer, report)?,
    }
    Ok(())
}
