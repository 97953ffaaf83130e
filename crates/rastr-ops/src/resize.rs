//! Nearest-neighbor image scaling.
//!
//! Output pixel `(x, y)` copies source pixel
//! `(floor(x * src_w / new_w), floor(y * src_h / new_h))`. The sampling is
//! done in exact integer arithmetic, so no column or row ever rounds past
//! the source edge.
//!
//! # Example
//!
//! ```rust
//! use rastr_core::PixelBuffer;
//! use rastr_ops::resize::resize;
//!
//! let src = PixelBuffer::filled(64, 64, &[10, 20, 30]);
//! let dst = resize(&src, 32, 48).unwrap();
//! assert_eq!(dst.dimensions(), (32, 48));
//! assert_eq!(dst.pixel(31, 47), &[10, 20, 30]);
//! ```

use crate::guard::{ensure_non_empty, ensure_target_size};
use crate::parallel::render;
use crate::OpsResult;
use rastr_color::to_bgr;
use rastr_core::PixelBuffer;
#[allow(unused_imports)]
use tracing::{debug, trace};

/// Scales the image to `new_width x new_height`, nearest-neighbor.
///
/// Grayscale input is promoted to BGR.
///
/// # Errors
///
/// - [`OpsError::InvalidParameter`] if either target dimension is zero
/// - [`OpsError::DimensionMismatch`] if the source has zero area
///
/// [`OpsError::InvalidParameter`]: crate::OpsError::InvalidParameter
/// [`OpsError::DimensionMismatch`]: crate::OpsError::DimensionMismatch
pub fn resize(image: &PixelBuffer, new_width: u32, new_height: u32) -> OpsResult<PixelBuffer> {
    trace!(
        src_w = image.width(),
        src_h = image.height(),
        new_width,
        new_height,
        "resize::resize"
    );
    ensure_target_size(new_width, new_height, "resize")?;
    ensure_non_empty(image, "resize")?;
    resize_nearest(&to_bgr(image), new_width, new_height)
}

/// Nearest-neighbor resize that keeps the source channel count.
///
/// Used for merge masks, which stay single-channel.
///
/// # Errors
///
/// Same as [`resize`].
pub fn resize_nearest(src: &PixelBuffer, new_width: u32, new_height: u32) -> OpsResult<PixelBuffer> {
    ensure_target_size(new_width, new_height, "resize")?;
    ensure_non_empty(src, "resize")?;

    let ch = src.channels();
    let (src_w, src_h) = (src.width() as u64, src.height() as u64);
    let (dst_w, dst_h) = (new_width as u64, new_height as u64);

    // Column lookup shared by every row
    let cols: Vec<usize> = (0..dst_w)
        .map(|x| (x * src_w / dst_w) as usize * ch)
        .collect();

    render(new_width, new_height, ch, |y, row| {
        let sy = (y as u64 * src_h / dst_h) as u32;
        let src_row = src.row(sy);
        for (out, &sx) in row.chunks_exact_mut(ch).zip(&cols) {
            out.copy_from_slice(&src_row[sx..sx + ch]);
        }
    })
}
