//! YAML processing recipes.
//!
//! A recipe is an ordered list of single-image steps:
//!
//! ```yaml
//! name: thumbnail
//! steps:
//!   - op: contrast
//!     delta: 20
//!   - op: rotate
//!     angle: 12.5
//!     pivot: [64, 64]
//!   - op: crop
//!     top: 0
//!     left: 0
//!     bottom: 128
//!     right: 128
//!   - op: flip
//!     axis: horizontal
//!   - op: blur
//!     radius: 1
//! ```
//!
//! Every command-line operation on a single image is expressed as a [`Step`],
//! so a one-step recipe behaves exactly like the matching subcommand.

use std::fmt;
use std::path::Path;

use anyhow::{Context, Result, bail};
use rastr_core::{PixelBuffer, Region};
use rastr_ops::{OpsResult, Pivot, adjust, filter, resize, transform};
use serde::{Deserialize, Serialize};
#[allow(unused_imports)]
use tracing::{debug, trace};

/// Mirror axis for [`Step::Flip`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FlipAxis {
    /// Left to right.
    #[value(alias = "h")]
    #[serde(alias = "h")]
    Horizontal,
    /// Top to bottom.
    #[value(alias = "v")]
    #[serde(alias = "v")]
    Vertical,
}

/// One single-image operation with its parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    /// Add `delta` to every channel.
    Brightness {
        /// Signed offset.
        delta: i32,
    },
    /// Stretch the HSV value range by `delta` on each side.
    Contrast {
        /// Signed stretch.
        delta: i32,
    },
    /// Add `delta` to HSV saturation.
    Saturation {
        /// Signed offset.
        delta: i32,
    },
    /// Binarize on the channel average.
    Threshold {
        /// Cutoff, clamped to 0..=255.
        value: i32,
    },
    /// Photographic negative.
    Invert,
    /// Mirror.
    Flip {
        /// Mirror axis.
        axis: FlipAxis,
    },
    /// Quarter turn clockwise.
    Rotate90,
    /// Arbitrary rotation; the pivot defaults to the image center.
    Rotate {
        /// Degrees, positive is clockwise on screen.
        angle: f32,
        /// `[x, y]` pivot.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pivot: Option<[i32; 2]>,
    },
    /// Extract a region.
    Crop {
        /// First row.
        top: u32,
        /// First column.
        left: u32,
        /// Row past the last.
        bottom: u32,
        /// Column past the last.
        right: u32,
    },
    /// Cyclic shift.
    Translate {
        /// Columns to the right.
        dx: i32,
        /// Rows down.
        dy: i32,
    },
    /// Nearest-neighbor scale.
    Resize {
        /// Target width.
        width: u32,
        /// Target height.
        height: u32,
    },
    /// Box blur.
    Blur {
        /// Window radius.
        radius: u32,
    },
    /// Per-channel minimum filter.
    Erode {
        /// Window radius.
        radius: u32,
    },
    /// Per-channel maximum filter.
    Dilate {
        /// Window radius.
        radius: u32,
    },
}

impl Step {
    /// Operation name as written in recipes.
    pub fn name(&self) -> &'static str {
        match self {
            Step::Brightness { .. } => "brightness",
            Step::Contrast { .. } => "contrast",
            Step::Saturation { .. } => "saturation",
            Step::Threshold { .. } => "threshold",
            Step::Invert => "invert",
            Step::Flip { .. } => "flip",
            Step::Rotate90 => "rotate90",
            Step::Rotate { .. } => "rotate",
            Step::Crop { .. } => "crop",
            Step::Translate { .. } => "translate",
            Step::Resize { .. } => "resize",
            Step::Blur { .. } => "blur",
            Step::Erode { .. } => "erode",
            Step::Dilate { .. } => "dilate",
        }
    }

    /// Runs the step on `image`.
    pub fn apply(&self, image: &PixelBuffer) -> OpsResult<PixelBuffer> {
        trace!(step = %self, "recipe::apply");
        match *self {
            Step::Brightness { delta } => adjust::brightness(image, delta),
            Step::Contrast { delta } => adjust::contrast(image, delta),
            Step::Saturation { delta } => adjust::saturation(image, delta),
            Step::Threshold { value } => adjust::threshold(image, value),
            Step::Invert => adjust::invert(image),
            Step::Flip { axis: FlipAxis::Horizontal } => transform::flip_h(image),
            Step::Flip { axis: FlipAxis::Vertical } => transform::flip_v(image),
            Step::Rotate90 => transform::rotate_90_cw(image),
            Step::Rotate { angle, pivot } => {
                let pivot = pivot
                    .map(|[x, y]| Pivot::new(x, y))
                    .unwrap_or_else(|| Pivot::center_of(image));
                transform::rotate(image, angle, pivot)
            }
            Step::Crop { top, left, bottom, right } => {
                transform::crop(image, Region::new(top, left, bottom, right))
            }
            Step::Translate { dx, dy } => transform::translate(image, dx, dy),
            Step::Resize { width, height } => resize::resize(image, width, height),
            Step::Blur { radius } => filter::blur(image, radius),
            Step::Erode { radius } => filter::erode(image, radius),
            Step::Dilate { radius } => filter::dilate(image, radius),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Brightness { delta } | Step::Contrast { delta } | Step::Saturation { delta } => {
                write!(f, "{} {:+}", self.name(), delta)
            }
            Step::Threshold { value } => write!(f, "threshold {}", value),
            Step::Flip { axis } => write!(f, "flip {:?}", axis),
            Step::Rotate { angle, pivot: Some([x, y]) } => write!(f, "rotate {} about ({}, {})", angle, x, y),
            Step::Rotate { angle, pivot: None } => write!(f, "rotate {} about center", angle),
            Step::Crop { top, left, bottom, right } => {
                write!(f, "crop {}", Region::new(*top, *left, *bottom, *right))
            }
            Step::Translate { dx, dy } => write!(f, "translate ({:+}, {:+})", dx, dy),
            Step::Resize { width, height } => write!(f, "resize {}x{}", width, height),
            Step::Blur { radius } | Step::Erode { radius } | Step::Dilate { radius } => {
                write!(f, "{} r={}", self.name(), radius)
            }
            Step::Invert | Step::Rotate90 => f.write_str(self.name()),
        }
    }
}

/// A named sequence of steps.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Recipe {
    /// Optional label shown in logs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Steps, applied in order.
    pub steps: Vec<Step>,
}

impl Recipe {
    /// Wraps a list of steps.
    pub fn new(steps: Vec<Step>) -> Self {
        Self { name: None, steps }
    }

    /// Loads a recipe from a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read recipe: {}", path.display()))?;
        Self::from_yaml_str(&content).with_context(|| format!("Invalid recipe: {}", path.display()))
    }

    /// Parses a recipe from YAML text.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let recipe: Recipe = serde_yaml::from_str(yaml)?;
        if recipe.steps.is_empty() {
            bail!("recipe has no steps");
        }
        Ok(recipe)
    }

    /// Serializes the recipe to YAML.
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Runs every step in order, stopping at the first failure.
    pub fn apply(&self, image: &PixelBuffer) -> Result<PixelBuffer> {
        let mut current = image.clone();
        for (i, step) in self.steps.iter().enumerate() {
            debug!(index = i, step = %step, "applying");
            current = step
                .apply(&current)
                .with_context(|| format!("step {} ({}) failed", i + 1, step))?;
        }
        Ok(current)
    }
}
