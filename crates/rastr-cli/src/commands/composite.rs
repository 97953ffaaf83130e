//! Two-image commands (blend, merge)

use crate::{BlendArgs, MergeArgs};
#[allow(unused_imports)]
use tracing::{debug, info, trace};
use anyhow::Result;
use rastr_cli::{load_image, save_image};
use rastr_ops::composite::{binary_merge, blend, weighted_merge};

pub fn run_blend(args: BlendArgs, verbose: u8) -> Result<()> {
    trace!(a = %args.a.display(), b = %args.b.display(), mode = %args.mode, "composite::run_blend");

    let a = load_image(&args.a)?;
    let b = load_image(&args.b)?;
    if !a.same_size(&b) {
        info!(a = ?a.dimensions(), b = ?b.dimensions(), "Inputs differ in size, cropping to common area");
    }
    if verbose > 0 {
        println!("Blending {} {} {}", args.a.display(), args.mode, args.b.display());
    }

    let result = blend(&a, &b, args.mode)?;
    save_image(&args.output, &result)?;

    if verbose > 0 {
        println!("Wrote {} ({}x{})", args.output.display(), result.width(), result.height());
    }
    Ok(())
}

pub fn run_merge(args: MergeArgs, verbose: u8) -> Result<()> {
    trace!(a = %args.a.display(), b = %args.b.display(), mask = %args.mask.display(), weighted = args.weighted, "composite::run_merge");

    let a = load_image(&args.a)?;
    let b = load_image(&args.b)?;
    let mask = load_image(&args.mask)?;
    let kind = if args.weighted { "weighted" } else { "binary" };
    info!(kind, a = ?a.dimensions(), mask = ?mask.dimensions(), "Merging");
    if verbose > 0 {
        println!("{} merge of {} and {} through {}", kind, args.a.display(), args.b.display(), args.mask.display());
    }

    let result = if args.weighted {
        weighted_merge(&a, &b, &mask)?
    } else {
        binary_merge(&a, &b, &mask)?
    };
    save_image(&args.output, &result)?;

    if verbose > 0 {
        println!("Wrote {} ({}x{})", args.output.display(), result.width(), result.height());
    }
    Ok(())
}
