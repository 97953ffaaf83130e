//! Geometric transform commands (flip, rotate, crop, translate, resize)

use crate::{CropArgs, FlipArgs, IoArgs, ResizeArgs, RotateArgs, TranslateArgs};
use anyhow::Result;
use rastr_cli::Step;

pub fn run_flip(args: FlipArgs, verbose: u8) -> Result<()> {
    super::apply_step(&args.input, &args.output, Step::Flip { axis: args.axis }, verbose)
}

pub fn run_rotate90(args: IoArgs, verbose: u8) -> Result<()> {
    super::apply_step(&args.input, &args.output, Step::Rotate90, verbose)
}

pub fn run_rotate(args: RotateArgs, verbose: u8) -> Result<()> {
    // clap requires both coordinates together
    let pivot = args.pivot_x.zip(args.pivot_y).map(|(x, y)| [x, y]);
    let step = Step::Rotate { angle: args.angle, pivot };
    super::apply_step(&args.input, &args.output, step, verbose)
}

pub fn run_crop(args: CropArgs, verbose: u8) -> Result<()> {
    let step = Step::Crop {
        top: args.top,
        left: args.left,
        bottom: args.bottom,
        right: args.right,
    };
    super::apply_step(&args.input, &args.output, step, verbose)
}

pub fn run_translate(args: TranslateArgs, verbose: u8) -> Result<()> {
    super::apply_step(&args.input, &args.output, Step::Translate { dx: args.dx, dy: args.dy }, verbose)
}

pub fn run_resize(args: ResizeArgs, verbose: u8) -> Result<()> {
    let step = Step::Resize { width: args.width, height: args.height };
    super::apply_step(&args.input, &args.output, step, verbose)
}
