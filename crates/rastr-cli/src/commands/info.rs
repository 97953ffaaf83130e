//! Image info command.
//!
//! Prints dimensions, channel layout, the HSV value range that contrast
//! stretches, and per-channel means.

use crate::InfoArgs;
use anyhow::Result;
use rastr_cli::load_image;
use rastr_core::PixelBuffer;
use rastr_ops::adjust::value_range;
use std::path::Path;

/// Runs the info command over every input.
pub fn run(args: InfoArgs, verbose: u8) -> Result<()> {
    for path in &args.input {
        let image = load_image(path)?;
        print_text(path, &image, verbose);

        if args.input.len() > 1 {
            println!();
        }
    }
    Ok(())
}

fn print_text(path: &Path, image: &PixelBuffer, verbose: u8) {
    println!("{}", path.display());
    println!("  Resolution: {}x{}", image.width(), image.height());
    println!(
        "  Channels:   {} ({})",
        image.channels(),
        if image.is_gray() { "gray" } else { "bgr" }
    );
    println!("  Pixels:     {}", image.pixel_count());

    match value_range(image) {
        Ok((lo, hi)) => println!("  Value:      {}..{}", lo, hi),
        Err(_) => println!("  Value:      n/a"),
    }

    let means = channel_means(image);
    let labels: &[&str] = if image.is_gray() { &["y"] } else { &["b", "g", "r"] };
    let parts: Vec<String> = labels
        .iter()
        .zip(&means)
        .map(|(label, mean)| format!("{}={:.2}", label, mean))
        .collect();
    println!("  Mean:       {}", parts.join(" "));

    if verbose > 0 {
        println!("  Bytes:      {}", image.data().len());
    }
}

/// Mean of each channel, zero for an empty image.
fn channel_means(image: &PixelBuffer) -> Vec<f64> {
    let ch = image.channels();
    let mut sums = vec![0u64; ch];
    for px in image.data().chunks_exact(ch) {
        for (sum, &v) in sums.iter_mut().zip(px) {
            *sum += v as u64;
        }
    }
    let count = image.pixel_count().max(1) as f64;
    sums.into_iter().map(|s| s as f64 / count).collect()
}
