//! Two-image blending and masked merges.
//!
//! Every operation here promotes both inputs to BGR and crops them to their
//! common top-left area (see [`normalize_pair`]) before doing per-pixel
//! work. The output has the normalized size.
//!
//! # Blend Modes
//!
//! With `a` and `b` the samples of the first and second image:
//!
//! | Mode | Sample |
//! |---|---|
//! | [`BlendMode::Add`] | `clamp(a + b)` |
//! | [`BlendMode::Difference`] | `clamp(a - b)` |
//! | [`BlendMode::Product`] | `a * b / 255` |
//! | [`BlendMode::Screen`] | `255 - (255 - a) * (255 - b) / 255` |
//! | [`BlendMode::Overlay`] | Product where `a`'s pixel is dark, Screen elsewhere |
//!
//! Difference is one-sided: where `b > a` the result is black.
//!
//! # Example
//!
//! ```rust
//! use rastr_core::PixelBuffer;
//! use rastr_ops::composite::{binary_merge, screen};
//!
//! let a = PixelBuffer::filled(4, 4, &[0, 0, 0]);
//! let b = PixelBuffer::filled(4, 4, &[128, 64, 255]);
//! assert_eq!(screen(&a, &b).unwrap(), b);
//!
//! let mask = PixelBuffer::filled(2, 2, &[0]);
//! assert_eq!(binary_merge(&a, &b, &mask).unwrap(), a);
//! ```

use std::fmt;
use std::str::FromStr;

use crate::guard::ensure_non_empty;
use crate::normalize::normalize_pair;
use crate::parallel::render;
use crate::resize::resize_nearest;
use crate::{OpsError, OpsResult};
use rastr_color::{to_bgr, to_gray};
use rastr_core::{PixelBuffer, saturate};
#[allow(unused_imports)]
use tracing::{debug, trace};

/// Per-channel blend operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BlendMode {
    /// Saturating sum.
    #[default]
    Add,
    /// Saturating `a - b`.
    Difference,
    /// Scaled multiply, darkens.
    Product,
    /// Inverse multiply, lightens.
    Screen,
    /// Product or Screen chosen per pixel by the brightness of `a`.
    Overlay,
}

impl BlendMode {
    /// Every mode, in declaration order.
    pub const ALL: [BlendMode; 5] = [
        BlendMode::Add,
        BlendMode::Difference,
        BlendMode::Product,
        BlendMode::Screen,
        BlendMode::Overlay,
    ];

    /// Lowercase name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            BlendMode::Add => "add",
            BlendMode::Difference => "difference",
            BlendMode::Product => "product",
            BlendMode::Screen => "screen",
            BlendMode::Overlay => "overlay",
        }
    }
}

impl fmt::Display for BlendMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BlendMode {
    type Err = OpsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "add" => Ok(BlendMode::Add),
            "difference" | "diff" => Ok(BlendMode::Difference),
            "product" | "multiply" => Ok(BlendMode::Product),
            "screen" => Ok(BlendMode::Screen),
            "overlay" => Ok(BlendMode::Overlay),
            other => Err(OpsError::InvalidParameter(format!(
                "unknown blend mode '{}' (expected add, difference, product, screen or overlay)",
                other
            ))),
        }
    }
}

/// Overlay takes Product below this channel average of `a`, Screen at or above.
const OVERLAY_SPLIT: u32 = 128;

/// Blends one pair of samples.
///
/// For [`BlendMode::Overlay`] the sample `a` stands in for the pixel
/// average, which is exact for gray pixels.
#[inline]
pub fn blend_channel(a: u8, b: u8, mode: BlendMode) -> u8 {
    let (a, b) = (a as i32, b as i32);
    match mode {
        BlendMode::Add => saturate(a + b),
        BlendMode::Difference => saturate(a - b),
        BlendMode::Product => saturate(a * b / 255),
        BlendMode::Screen => saturate(255 - (255 - a) * (255 - b) / 255),
        BlendMode::Overlay if (a as u32) < OVERLAY_SPLIT => saturate(a * b / 255),
        BlendMode::Overlay => saturate(255 - (255 - a) * (255 - b) / 255),
    }
}

/// Blends one BGR pixel pair.
#[inline]
pub fn blend_pixel(a: &[u8], b: &[u8], mode: BlendMode, out: &mut [u8]) {
    let mode = match mode {
        BlendMode::Overlay => {
            let avg = (a[0] as u32 + a[1] as u32 + a[2] as u32) / 3;
            if avg < OVERLAY_SPLIT {
                BlendMode::Product
            } else {
                BlendMode::Screen
            }
        }
        other => other,
    };
    for ((o, &av), &bv) in out.iter_mut().zip(a).zip(b) {
        *o = blend_channel(av, bv, mode);
    }
}

/// Promotes both inputs and crops them to their common size.
fn prepare(a: &PixelBuffer, b: &PixelBuffer) -> OpsResult<(PixelBuffer, PixelBuffer)> {
    normalize_pair(&to_bgr(a), &to_bgr(b))
}

/// Blends `a` with `b` in the given mode.
///
/// # Example
///
/// ```rust
/// use rastr_core::PixelBuffer;
/// use rastr_ops::composite::blend;
/// use rastr_ops::BlendMode;
///
/// let a = PixelBuffer::filled(2, 2, &[200, 100, 10]);
/// let b = PixelBuffer::filled(2, 2, &[100, 100, 100]);
/// let out = blend(&a, &b, BlendMode::Difference).unwrap();
/// assert_eq!(out.pixel(0, 0), &[100, 0, 0]);
/// ```
pub fn blend(a: &PixelBuffer, b: &PixelBuffer, mode: BlendMode) -> OpsResult<PixelBuffer> {
    trace!(%mode, a_w = a.width(), a_h = a.height(), b_w = b.width(), b_h = b.height(), "composite::blend");
    let (a, b) = prepare(a, b)?;
    render(a.width(), a.height(), 3, |y, row| {
        let (ra, rb) = (a.row(y), b.row(y));
        for ((out, pa), pb) in row
            .chunks_exact_mut(3)
            .zip(ra.chunks_exact(3))
            .zip(rb.chunks_exact(3))
        {
            blend_pixel(pa, pb, mode, out);
        }
    })
}

/// [`blend`] with [`BlendMode::Add`].
pub fn add(a: &PixelBuffer, b: &PixelBuffer) -> OpsResult<PixelBuffer> {
    blend(a, b, BlendMode::Add)
}

/// [`blend`] with [`BlendMode::Difference`].
pub fn difference(a: &PixelBuffer, b: &PixelBuffer) -> OpsResult<PixelBuffer> {
    blend(a, b, BlendMode::Difference)
}

/// [`blend`] with [`BlendMode::Product`].
pub fn product(a: &PixelBuffer, b: &PixelBuffer) -> OpsResult<PixelBuffer> {
    blend(a, b, BlendMode::Product)
}

/// [`blend`] with [`BlendMode::Screen`].
pub fn screen(a: &PixelBuffer, b: &PixelBuffer) -> OpsResult<PixelBuffer> {
    blend(a, b, BlendMode::Screen)
}

/// [`blend`] with [`BlendMode::Overlay`].
pub fn overlay(a: &PixelBuffer, b: &PixelBuffer) -> OpsResult<PixelBuffer> {
    blend(a, b, BlendMode::Overlay)
}

/// Normalizes the pair and brings the mask to grayscale at their size.
fn prepare_masked(
    a: &PixelBuffer,
    b: &PixelBuffer,
    mask: &PixelBuffer,
    op: &str,
) -> OpsResult<(PixelBuffer, PixelBuffer, PixelBuffer)> {
    ensure_non_empty(mask, op)?;
    let (a, b) = prepare(a, b)?;
    let mask = to_gray(mask);
    if a.is_empty() {
        return Ok((a, b, mask));
    }
    let mask = if mask.dimensions() == a.dimensions() {
        mask
    } else {
        debug!(
            from_w = mask.width(),
            from_h = mask.height(),
            to_w = a.width(),
            to_h = a.height(),
            "resizing mask"
        );
        resize_nearest(&mask, a.width(), a.height())?
    };
    Ok((a, b, mask))
}

/// Picks `a` where the mask is 0 and `b` everywhere else.
///
/// The mask is reduced to grayscale and resized (nearest-neighbor) to the
/// normalized size of `a`.
///
/// # Errors
///
/// [`OpsError::DimensionMismatch`] if the mask has zero area.
pub fn binary_merge(a: &PixelBuffer, b: &PixelBuffer, mask: &PixelBuffer) -> OpsResult<PixelBuffer> {
    trace!(a_w = a.width(), a_h = a.height(), m_w = mask.width(), m_h = mask.height(), "composite::binary_merge");
    let (a, b, mask) = prepare_masked(a, b, mask, "binary_merge")?;
    render(a.width(), a.height(), 3, |y, row| {
        let (ra, rb, rm) = (a.row(y), b.row(y), mask.row(y));
        for (x, out) in row.chunks_exact_mut(3).enumerate() {
            let src = if rm[x] == 0 { ra } else { rb };
            out.copy_from_slice(&src[x * 3..x * 3 + 3]);
        }
    })
}

/// Linear blend weighted by mask intensity.
///
/// With `m` the mask sample and `w = m / 255`, each channel is
/// `trunc(a * w + b * (1 - w))`, evaluated exactly in integers as
/// `(a * m + b * (255 - m)) / 255`. A black mask yields `b`, a white one
/// yields `a`.
///
/// # Errors
///
/// [`OpsError::DimensionMismatch`] if the mask has zero area.
pub fn weighted_merge(a: &PixelBuffer, b: &PixelBuffer, mask: &PixelBuffer) -> OpsResult<PixelBuffer> {
    trace!(a_w = a.width(), a_h = a.height(), m_w = mask.width(), m_h = mask.height(), "composite::weighted_merge");
    let (a, b, mask) = prepare_masked(a, b, mask, "weighted_merge")?;
    render(a.width(), a.height(), 3, |y, row| {
        let (ra, rb, rm) = (a.row(y), b.row(y), mask.row(y));
        for (i, out) in row.iter_mut().enumerate() {
            let m = rm[i / 3] as i32;
            *out = saturate((ra[i] as i32 * m + rb[i] as i32 * (255 - m)) / 255);
        }
    })
}
