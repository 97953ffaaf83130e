//! Square-window spatial filters.
//!
//! Blur, erosion and dilation all reduce the samples of a `(2r+1) x (2r+1)`
//! window centered on each pixel, per channel. The window is clipped to the
//! image: samples past the border are left out, never padded, so a corner
//! pixel averages over fewer samples than an interior one.
//!
//! Because a clipped square window is still a rectangle, each reduction is
//! done as a horizontal pass followed by a vertical pass, which gives the
//! same result as visiting the full window.
//!
//! # Example
//!
//! ```rust
//! use rastr_core::PixelBuffer;
//! use rastr_ops::filter::{blur, erode};
//!
//! let src = PixelBuffer::from_data(3, 1, 1, vec![0, 30, 90]).unwrap();
//!
//! let blurred = blur(&src, 1).unwrap();
//! assert_eq!(blurred.pixel(0, 0), &[15, 15, 15]);
//! assert_eq!(blurred.pixel(1, 0), &[40, 40, 40]);
//!
//! let eroded = erode(&src, 1).unwrap();
//! assert_eq!(eroded.pixel(2, 0), &[30, 30, 30]);
//! ```

use crate::guard::ensure_radius;
use crate::parallel::{render, render_rows};
use crate::OpsResult;
use rastr_color::to_bgr;
use rastr_core::PixelBuffer;
#[allow(unused_imports)]
use tracing::{debug, trace};

/// How a filter window collapses to one sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reduce {
    /// Integer mean over the in-bounds samples (box blur).
    Mean,
    /// Minimum (erosion).
    Min,
    /// Maximum (dilation).
    Max,
}

impl Reduce {
    fn span(self, values: impl Iterator<Item = u64>) -> u64 {
        match self {
            Reduce::Mean => values.sum(),
            Reduce::Min => values.min().unwrap_or(0),
            Reduce::Max => values.max().unwrap_or(0),
        }
    }
}

/// Inclusive window bounds around `i` clipped to `0..len`.
#[inline]
fn clip(i: usize, radius: usize, len: usize) -> (usize, usize) {
    (i.saturating_sub(radius), i.saturating_add(radius).min(len - 1))
}

/// Applies `reduce` over a clipped square window of the given radius.
///
/// Grayscale input is promoted to BGR. Radius 0 returns a copy of the
/// (promoted) input.
///
/// # Errors
///
/// [`OpsError::InvalidParameter`](crate::OpsError::InvalidParameter) if the
/// window side `2 * radius + 1` does not fit in a `u32`.
pub fn window_reduce(image: &PixelBuffer, radius: u32, reduce: Reduce) -> OpsResult<PixelBuffer> {
    let side = ensure_radius(radius, "window_reduce")?;
    trace!(radius, side, ?reduce, width = image.width(), height = image.height(), "filter::window_reduce");

    let src = to_bgr(image);
    let (w, h) = (src.width() as usize, src.height() as usize);
    let r = radius as usize;

    // Horizontal pass: per-row window sums or extrema, kept wide
    let rows: Vec<u64> = render_rows(src.width(), src.height(), 3, |y, row| {
        let src_row = src.row(y);
        for x in 0..w {
            let (x0, x1) = clip(x, r, w);
            for c in 0..3 {
                row[x * 3 + c] = reduce.span((x0..=x1).map(|sx| src_row[sx * 3 + c] as u64));
            }
        }
    });

    // Vertical pass over the horizontal results
    render(src.width(), src.height(), 3, |y, row| {
        let (y0, y1) = clip(y as usize, r, h);
        for x in 0..w {
            let (x0, x1) = clip(x, r, w);
            let count = ((x1 - x0 + 1) * (y1 - y0 + 1)) as u64;
            for c in 0..3 {
                let v = reduce.span((y0..=y1).map(|sy| rows[(sy * w + x) * 3 + c]));
                let v = match reduce {
                    Reduce::Mean => v / count,
                    Reduce::Min | Reduce::Max => v,
                };
                row[x * 3 + c] = v as u8;
            }
        }
    })
}

/// Box blur: per-channel integer mean over the clipped window.
pub fn blur(image: &PixelBuffer, radius: u32) -> OpsResult<PixelBuffer> {
    window_reduce(image, radius, Reduce::Mean)
}

/// Per-channel minimum over the clipped window.
///
/// Channels are eroded independently, so the output pixel need not be a
/// color present in the input.
pub fn erode(image: &PixelBuffer, radius: u32) -> OpsResult<PixelBuffer> {
    window_reduce(image, radius, Reduce::Min)
}

/// Per-channel maximum over the clipped window.
pub fn dilate(image: &PixelBuffer, radius: u32) -> OpsResult<PixelBuffer> {
    window_reduce(image, radius, Reduce::Max)
}
