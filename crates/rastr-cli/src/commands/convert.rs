//! Color space conversion command

use crate::ConvertArgs;
#[allow(unused_imports)]
use tracing::{debug, info, trace};
use anyhow::Result;
use rastr_cli::{load_image, save_image};
use rastr_color::convert;
use rastr_core::ColorSpace;

pub fn run(args: ConvertArgs, verbose: u8) -> Result<()> {
    trace!(input = %args.input.display(), to = ?args.to, "convert::run");

    let image = load_image(&args.input)?;
    let from = if image.is_gray() { ColorSpace::Grayscale } else { ColorSpace::Bgr };
    let to = ColorSpace::from(args.to);
    info!(%from, %to, "Converting");

    if verbose > 0 {
        println!("Converting {} ({} -> {})", args.input.display(), from, to);
    }

    let result = convert(&image, from, to)?;
    save_image(&args.output, &result)?;

    if verbose > 0 {
        println!("Done.");
    }
    Ok(())
}
