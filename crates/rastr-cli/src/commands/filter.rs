//! Window filter commands (blur, erode, dilate)

use crate::FilterArgs;
use anyhow::Result;
use rastr_cli::Step;

pub fn run_blur(args: FilterArgs, verbose: u8) -> Result<()> {
    super::apply_step(&args.input, &args.output, Step::Blur { radius: args.radius }, verbose)
}

pub fn run_erode(args: FilterArgs, verbose: u8) -> Result<()> {
    super::apply_step(&args.input, &args.output, Step::Erode { radius: args.radius }, verbose)
}

pub fn run_dilate(args: FilterArgs, verbose: u8) -> Result<()> {
    super::apply_step(&args.input, &args.output, Step::Dilate { radius: args.radius }, verbose)
}
