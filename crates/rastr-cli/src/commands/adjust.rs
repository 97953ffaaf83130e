//! Pointwise adjustment commands

use crate::{DeltaArgs, IoArgs, ThresholdArgs};
use anyhow::Result;
use rastr_cli::Step;

pub fn run_brightness(args: DeltaArgs, verbose: u8) -> Result<()> {
    super::apply_step(&args.input, &args.output, Step::Brightness { delta: args.delta }, verbose)
}

pub fn run_contrast(args: DeltaArgs, verbose: u8) -> Result<()> {
    super::apply_step(&args.input, &args.output, Step::Contrast { delta: args.delta }, verbose)
}

pub fn run_saturation(args: DeltaArgs, verbose: u8) -> Result<()> {
    super::apply_step(&args.input, &args.output, Step::Saturation { delta: args.delta }, verbose)
}

pub fn run_threshold(args: ThresholdArgs, verbose: u8) -> Result<()> {
    super::apply_step(&args.input, &args.output, Step::Threshold { value: args.value }, verbose)
}

pub fn run_invert(args: IoArgs, verbose: u8) -> Result<()> {
    super::apply_step(&args.input, &args.output, Step::Invert, verbose)
}
