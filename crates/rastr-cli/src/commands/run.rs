//! Recipe command.
//!
//! Runs a YAML recipe on one file, or on every file a glob matches. Batch
//! runs process files in parallel and write `<stem>.<ext>` into the output
//! directory.

use crate::RunArgs;
#[allow(unused_imports)]
use tracing::{debug, info, trace};
use anyhow::{Result, bail};
use rastr_cli::{Recipe, load_image, save_image};
use rayon::prelude::*;
use std::path::{Path, PathBuf};

pub fn run(args: RunArgs, verbose: u8) -> Result<()> {
    trace!(recipe = %args.recipe.display(), input = %args.input, "run::run");

    let recipe = Recipe::from_file(&args.recipe)?;
    info!(
        name = recipe.name.as_deref().unwrap_or("-"),
        steps = recipe.steps.len(),
        "Loaded recipe"
    );

    if is_pattern(&args.input) {
        run_batch(&recipe, &args.input, &args.output, args.format.as_deref(), verbose)
    } else {
        process_file(&recipe, Path::new(&args.input), &args.output, verbose)
    }
}

fn is_pattern(input: &str) -> bool {
    input.contains(['*', '?', '['])
}

fn run_batch(
    recipe: &Recipe,
    pattern: &str,
    output_dir: &Path,
    format: Option<&str>,
    verbose: u8,
) -> Result<()> {
    let files: Vec<PathBuf> = glob::glob(pattern)?.filter_map(|r| r.ok()).collect();

    if files.is_empty() {
        bail!("No files match pattern: {}", pattern);
    }

    info!(files = files.len(), pattern, "Starting batch processing");
    if verbose > 0 {
        println!("Found {} files matching '{}'", files.len(), pattern);
    }

    std::fs::create_dir_all(output_dir)?;

    let results: Vec<(PathBuf, Result<()>)> = files
        .par_iter()
        .map(|input| {
            let output = output_path(input, output_dir, format);
            (input.clone(), process_file(recipe, input, &output, verbose))
        })
        .collect();

    let mut failed = 0;
    for (input, result) in &results {
        if let Err(e) = result {
            failed += 1;
            eprintln!("Error: {}: {:#}", input.display(), e);
        }
    }
    let success = results.len() - failed;

    info!(success, failed, "Batch processing complete");
    println!("Processed: {} success, {} failed", success, failed);

    if failed > 0 {
        bail!("{} files failed", failed);
    }
    Ok(())
}

/// `<output_dir>/<stem>.<ext>`, keeping the input's extension unless overridden.
fn output_path(input: &Path, output_dir: &Path, format: Option<&str>) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    let ext = format.unwrap_or_else(|| input.extension().and_then(|s| s.to_str()).unwrap_or("png"));
    output_dir.join(format!("{}.{}", stem, ext))
}

fn process_file(recipe: &Recipe, input: &Path, output: &Path, verbose: u8) -> Result<()> {
    if verbose > 0 {
        println!("Processing {} -> {}", input.display(), output.display());
    }
    let image = load_image(input)?;
    let result = recipe.apply(&image)?;
    save_image(output, &result)?;
    debug!(output = %output.display(), w = result.width(), h = result.height(), "written");
    Ok(())
}
