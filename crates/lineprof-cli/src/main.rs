//! lineprof - intensity profiles along image scan lines

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use lineprof_core::Point;
use lineprof_ops::{BorderMode, Interpolation, Limits};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "lineprof")]
#[command(author, version, about = "Sample intensity profiles along image scan lines")]
#[command(long_about = "
Samples a PNG along a thick scan line and prints the per-channel profile.

Coordinates are (x, y) = (column, row) in pixels, pixel centres at integers.

Examples:
  lineprof info scan.png                                # Size, type, value range
  lineprof sample scan.png --from 10,40 --to 200,40     # Horizontal profile as CSV
  lineprof sample scan.png --from 5,5 --to 90,60 -w 5 -f json -o profile.json
  lineprof sample scan.png --from 0,0 --to 63,63 --interp nearest --border reflect
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Sample a profile along a line
    #[command(visible_alias = "s")]
    Sample(SampleArgs),

    /// Display image information
    #[command(visible_alias = "i")]
    Info(InfoArgs),
}

#[derive(Args)]
struct SampleArgs {
    /// Input PNG
    input: PathBuf,

    /// First endpoint as X,Y
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    from: Point,

    /// Second endpoint as X,Y
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    to: Point,

    /// Line width in pixels
    #[arg(short, long, default_value = "1")]
    width: f64,

    /// Interpolation for oblique lines: bilinear, nearest
    #[arg(long, default_value = "bilinear")]
    interp: Interpolation,

    /// Outside-image policy: clamp, reflect, constant:V
    #[arg(long, default_value = "clamp")]
    border: BorderMode,

    /// Intensity axis range: auto, image, dtype, MIN,MAX
    #[arg(long, default_value = "image", allow_hyphen_values = true)]
    limits: Limits,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,

    /// Output file (stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Args)]
struct InfoArgs {
    /// Input image(s)
    #[arg(required = true)]
    input: Vec<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// `index,c0,c1,...` rows
    Csv,
    /// Profile with its sampling parameters
    Json,
}

/// Parses `X,Y` into a point.
fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got '{}'", s))?;
    let x: f64 = x.trim().parse().map_err(|e| format!("bad x in '{}': {}", s, e))?;
    let y: f64 = y.trim().parse().map_err(|e| format!("bad y in '{}': {}", s, e))?;
    Ok(Point::new(x, y))
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    match cli.command {
        Commands::Sample(args) => commands::sample::run(args, cli.verbose),
        Commands::Info(args) => commands::info::run(args, cli.verbose),
    }
}
