//! CLI command implementations

pub mod adjust;
pub mod composite;
pub mod convert;
pub mod filter;
pub mod info;
pub mod run;
pub mod transform;

use anyhow::Result;
use rastr_cli::{Recipe, Step, load_image, save_image};
use std::path::Path;
#[allow(unused_imports)]
use tracing::{debug, info, trace};

/// Loads `input`, runs a single step and saves the result to `output`.
pub fn apply_step(input: &Path, output: &Path, step: Step, verbose: u8) -> Result<()> {
    trace!(input = %input.display(), output = %output.display(), %step, "commands::apply_step");

    let image = load_image(input)?;
    info!(step = %step, w = image.width(), h = image.height(), "Applying");
    if verbose > 0 {
        println!("Applying {} to {}", step, input.display());
    }

    let result = Recipe::new(vec![step]).apply(&image)?;
    save_image(output, &result)?;

    if verbose > 0 {
        println!("Wrote {} ({}x{})", output.display(), result.width(), result.height());
    }
    Ok(())
}
