//! rastr - 8-bit raster processing CLI
//!
//! One subcommand per operation, plus YAML recipes for chaining them.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use rastr_cli::FlipAxis;
use rastr_core::ColorSpace;
use rastr_ops::BlendMode;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod commands;

#[derive(Parser)]
#[command(name = "rastr")]
#[command(author, version, about = "8-bit raster transform and compositing tool")]
#[command(long_about = "
Pixel-exact adjustments, transforms, filters and compositing on 8-bit
BGR images. Color files are processed as BGR, grayscale files are
promoted to BGR by every operation.

Examples:
  rastr info photo.png                         # Dimensions, value range, means
  rastr brightness photo.png 40 -o out.png
  rastr contrast photo.png -10 -o out.png
  rastr rotate photo.png 30 --pivot-x 0 --pivot-y 0 -o out.png
  rastr crop photo.png --top 10 --left 10 --bottom 200 --right 300 -o out.png
  rastr blend a.png b.png -m overlay -o out.png
  rastr merge a.png b.png --mask mask.png --weighted -o out.png
  rastr run recipe.yaml photo.png -o out.png
  rastr run recipe.yaml 'shots/*.png' -o processed/
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,

    /// Also write logs to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Display image information
    #[command(visible_alias = "i")]
    Info(InfoArgs),

    /// Add a constant to every channel
    Brightness(DeltaArgs),

    /// Stretch the value range
    Contrast(DeltaArgs),

    /// Add a constant to saturation
    Saturation(DeltaArgs),

    /// Binarize on the channel average
    Threshold(ThresholdArgs),

    /// Photographic negative
    Invert(IoArgs),

    /// Mirror horizontally or vertically
    Flip(FlipArgs),

    /// Quarter turn clockwise
    Rotate90(IoArgs),

    /// Rotate by an arbitrary angle about a pivot
    Rotate(RotateArgs),

    /// Extract a region
    Crop(CropArgs),

    /// Cyclic shift with wraparound
    Translate(TranslateArgs),

    /// Nearest-neighbor resize
    #[command(visible_alias = "r")]
    Resize(ResizeArgs),

    /// Box blur
    Blur(FilterArgs),

    /// Per-channel minimum filter
    Erode(FilterArgs),

    /// Per-channel maximum filter
    Dilate(FilterArgs),

    /// Blend two images (add, difference, product, screen, overlay)
    #[command(visible_alias = "comp")]
    Blend(BlendArgs),

    /// Merge two images through a mask
    Merge(MergeArgs),

    /// Convert between grayscale and BGR
    #[command(visible_alias = "c")]
    Convert(ConvertArgs),

    /// Apply a YAML recipe to one file or a glob of files
    Run(RunArgs),
}

#[derive(Args)]
struct InfoArgs {
    /// Input image(s)
    #[arg(required = true)]
    input: Vec<PathBuf>,
}

#[derive(Args)]
struct IoArgs {
    /// Input image
    input: PathBuf,

    /// Output image
    #[arg(short, long)]
    output: PathBuf,
}

#[derive(Args)]
struct DeltaArgs {
    /// Input image
    input: PathBuf,

    /// Signed amount
    #[arg(allow_negative_numbers = true)]
    delta: i32,

    /// Output image
    #[arg(short, long)]
    output: PathBuf,
}

#[derive(Args)]
struct ThresholdArgs {
    /// Input image
    input: PathBuf,

    /// Cutoff (clamped to 0..255)
    #[arg(allow_negative_numbers = true)]
    value: i32,

    /// Output image
    #[arg(short, long)]
    output: PathBuf,
}

#[derive(Args)]
struct FlipArgs {
    /// Input image
    input: PathBuf,

    /// Output image
    #[arg(short, long)]
    output: PathBuf,

    /// Mirror axis
    #[arg(short, long, value_enum, default_value = "horizontal")]
    axis: FlipAxis,
}

#[derive(Args)]
struct RotateArgs {
    /// Input image
    input: PathBuf,

    /// Angle in degrees, positive is clockwise
    #[arg(allow_negative_numbers = true)]
    angle: f32,

    /// Output image
    #[arg(short, long)]
    output: PathBuf,

    /// Pivot column (default: image center)
    #[arg(long, allow_negative_numbers = true, requires = "pivot_y")]
    pivot_x: Option<i32>,

    /// Pivot row (default: image center)
    #[arg(long, allow_negative_numbers = true, requires = "pivot_x")]
    pivot_y: Option<i32>,
}

#[derive(Args)]
struct CropArgs {
    /// Input image
    input: PathBuf,

    /// Output image
    #[arg(short, long)]
    output: PathBuf,

    /// First row
    #[arg(long, default_value = "0")]
    top: u32,

    /// First column
    #[arg(long, default_value = "0")]
    left: u32,

    /// Row past the last
    #[arg(long)]
    bottom: u32,

    /// Column past the last
    #[arg(long)]
    right: u32,
}

#[derive(Args)]
struct TranslateArgs {
    /// Input image
    input: PathBuf,

    /// Columns to shift right
    #[arg(allow_negative_numbers = true)]
    dx: i32,

    /// Rows to shift down
    #[arg(allow_negative_numbers = true)]
    dy: i32,

    /// Output image
    #[arg(short, long)]
    output: PathBuf,
}

#[derive(Args)]
struct ResizeArgs {
    /// Input image
    input: PathBuf,

    /// Output image
    #[arg(short, long)]
    output: PathBuf,

    /// Target width
    #[arg(short, long)]
    width: u32,

    /// Target height
    #[arg(short = 'H', long)]
    height: u32,
}

#[derive(Args)]
struct FilterArgs {
    /// Input image
    input: PathBuf,

    /// Output image
    #[arg(short, long)]
    output: PathBuf,

    /// Window radius (side is 2r+1)
    #[arg(short, long, default_value = "1")]
    radius: u32,
}

#[derive(Args)]
struct BlendArgs {
    /// First image
    a: PathBuf,

    /// Second image
    b: PathBuf,

    /// Output image
    #[arg(short, long)]
    output: PathBuf,

    /// Blend mode: add, difference, product, screen, overlay
    #[arg(short, long, default_value = "add")]
    mode: BlendMode,
}

#[derive(Args)]
struct MergeArgs {
    /// Image shown where the mask is black
    a: PathBuf,

    /// Image shown where the mask is set
    b: PathBuf,

    /// Mask image (reduced to grayscale, resized to fit)
    #[arg(short, long)]
    mask: PathBuf,

    /// Output image
    #[arg(short, long)]
    output: PathBuf,

    /// Blend by mask intensity instead of selecting
    #[arg(long)]
    weighted: bool,
}

/// Color spaces the encoder can write.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Target {
    /// Single-channel luma
    Gray,
    /// Three-channel color
    Bgr,
}

impl From<Target> for ColorSpace {
    fn from(target: Target) -> Self {
        match target {
            Target::Gray => ColorSpace::Grayscale,
            Target::Bgr => ColorSpace::Bgr,
        }
    }
}

#[derive(Args)]
struct ConvertArgs {
    /// Input image
    input: PathBuf,

    /// Output image
    output: PathBuf,

    /// Target color space
    #[arg(short, long, value_enum, default_value = "bgr")]
    to: Target,
}

#[derive(Args)]
struct RunArgs {
    /// Recipe file (YAML)
    recipe: PathBuf,

    /// Input image or glob pattern
    input: String,

    /// Output image, or output directory for a glob
    #[arg(short, long)]
    output: PathBuf,

    /// Output format extension for batch runs (default: keep input's)
    #[arg(short, long)]
    format: Option<String>,
}

/// Installs the global subscriber. The returned guard flushes the log file
/// on drop and must live until exit.
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let stderr = fmt::layer().with_writer(std::io::stderr).with_target(false);

    match log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file: {}", path.display()))?;
            let (writer, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::registry()
                .with(filter)
                .with(stderr)
                .with(fmt::layer().with_writer(writer).with_ansi(false))
                .init();
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::registry().with(filter).with(stderr).init();
            Ok(None)
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _guard = init_logging(cli.verbose, cli.log_file.as_deref())?;

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    let v = cli.verbose;
    match cli.command {
        Commands::Info(args) => commands::info::run(args, v),
        Commands::Brightness(args) => commands::adjust::run_brightness(args, v),
        Commands::Contrast(args) => commands::adjust::run_contrast(args, v),
        Commands::Saturation(args) => commands::adjust::run_saturation(args, v),
        Commands::Threshold(args) => commands::adjust::run_threshold(args, v),
        Commands::Invert(args) => commands::adjust::run_invert(args, v),
        Commands::Flip(args) => commands::transform::run_flip(args, v),
        Commands::Rotate90(args) => commands::transform::run_rotate90(args, v),
        Commands::Rotate(args) => commands::transform::run_rotate(args, v),
        Commands::Crop(args) => commands::transform::run_crop(args, v),
        Commands::Translate(args) => commands::transform::run_translate(args, v),
        Commands::Resize(args) => commands::transform::run_resize(args, v),
        Commands::Blur(args) => commands::filter::run_blur(args, v),
        Commands::Erode(args) => commands::filter::run_erode(args, v),
        Commands::Dilate(args) => commands::filter::run_dilate(args, v),
        Commands::Blend(args) => commands::composite::run_blend(args, v),
        Commands::Merge(args) => commands::composite::run_merge(args, v),
        Commands::Convert(args) => commands::convert::run(args, v),
        Commands::Run(args) => commands::run::run(args, v),
    }
}
