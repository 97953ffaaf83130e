//! Geometric transformation operations.
//!
//! Provides flips, rotations, crop and cyclic translation. All of them are
//! inverse mappings: each output pixel is pulled from exactly one source
//! pixel (or left black), so no sample is ever computed, only copied.
//!
//! # Operations
//!
//! - [`flip_h`] - Horizontal flip (mirror)
//! - [`flip_v`] - Vertical flip
//! - [`rotate_90_cw`] - Quarter turn clockwise
//! - [`rotate`] - Arbitrary angle about a pivot, nearest-neighbor
//! - [`crop`] - Extract a region
//! - [`translate`] - Toroidal shift
//!
//! # Example
//!
//! ```rust
//! use rastr_core::{PixelBuffer, Region};
//! use rastr_ops::transform::{crop, flip_h};
//!
//! let data: Vec<u8> = (0..100).collect();
//! let src = PixelBuffer::from_data(10, 10, 1, data).unwrap();
//!
//! let cropped = crop(&src, Region::new(2, 2, 6, 6)).unwrap();
//! assert_eq!(cropped.dimensions(), (4, 4));
//! assert_eq!(cropped.pixel(0, 0), &[22, 22, 22]);
//!
//! let flipped = flip_h(&src).unwrap();
//! assert_eq!(flipped.pixel(0, 0), &[9, 9, 9]);
//! ```

use crate::guard::ensure_non_empty;
use crate::parallel::render;
use crate::{OpsError, OpsResult};
use rastr_color::to_bgr;
use rastr_core::{PixelBuffer, Region};
#[allow(unused_imports)]
use tracing::{debug, trace};

/// Center of rotation in pixel coordinates.
///
/// May lie outside the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pivot {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl Pivot {
    /// Creates a pivot at `(x, y)`.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The pixel at `(width / 2, height / 2)`.
    pub fn center_of(image: &PixelBuffer) -> Self {
        Self {
            x: (image.width() / 2) as i32,
            y: (image.height() / 2) as i32,
        }
    }
}

/// Mirrors the image left to right.
pub fn flip_h(image: &PixelBuffer) -> OpsResult<PixelBuffer> {
    trace!(width = image.width(), height = image.height(), "transform::flip_h");
    let src = to_bgr(image);
    render(src.width(), src.height(), 3, |y, row| {
        for (out, px) in row.chunks_exact_mut(3).zip(src.row(y).chunks_exact(3).rev()) {
            out.copy_from_slice(px);
        }
    })
}

/// Mirrors the image top to bottom.
pub fn flip_v(image: &PixelBuffer) -> OpsResult<PixelBuffer> {
    trace!(width = image.width(), height = image.height(), "transform::flip_v");
    let src = to_bgr(image);
    let last = src.height().saturating_sub(1);
    render(src.width(), src.height(), 3, |y, row| {
        row.copy_from_slice(src.row(last - y));
    })
}

/// Rotates a quarter turn clockwise.
///
/// A `w x h` input becomes `h x w`; input pixel `(x, y)` lands at
/// `(h - 1 - y, x)`.
pub fn rotate_90_cw(image: &PixelBuffer) -> OpsResult<PixelBuffer> {
    trace!(width = image.width(), height = image.height(), "transform::rotate_90_cw");
    let src = to_bgr(image);
    let (w, h) = src.dimensions();
    render(h, w, 3, |y, row| {
        for (x, out) in row.chunks_exact_mut(3).enumerate() {
            out.copy_from_slice(src.pixel(y, h - 1 - x as u32));
        }
    })
}

/// Rotates by `angle_deg` degrees about `pivot`, nearest-neighbor.
///
/// Positive angles turn the picture clockwise on screen (rows grow
/// downward). Each output pixel `(x, y)` samples the source at
///
/// ```text
/// a = pivot.x + trunc(cos(t) * (x - pivot.x) - sin(t) * (y - pivot.y))
/// b = pivot.y + trunc(sin(t) * (x - pivot.x) + cos(t) * (y - pivot.y))
/// ```
///
/// with `t = -angle_deg` in radians. Samples that land outside the source
/// stay black. Output size equals input size, so corners are clipped.
///
/// # Errors
///
/// [`OpsError::InvalidParameter`] if the angle is NaN or infinite.
///
/// # Example
///
/// ```rust
/// use rastr_core::PixelBuffer;
/// use rastr_ops::transform::{rotate, Pivot};
///
/// let img = PixelBuffer::filled(5, 5, &[9, 9, 9]);
/// let same = rotate(&img, 0.0, Pivot::center_of(&img)).unwrap();
/// assert_eq!(same, img);
/// ```
pub fn rotate(image: &PixelBuffer, angle_deg: f32, pivot: Pivot) -> OpsResult<PixelBuffer> {
    trace!(angle_deg, px = pivot.x, py = pivot.y, "transform::rotate");
    if !angle_deg.is_finite() {
        return Err(OpsError::InvalidParameter(format!(
            "rotation angle must be finite, got {}",
            angle_deg
        )));
    }

    let src = to_bgr(image);
    let (w, h) = (src.width() as i64, src.height() as i64);
    let theta = -angle_deg.to_radians();
    let (st, ct) = theta.sin_cos();
    let (px, py) = (pivot.x as i64, pivot.y as i64);

    render(src.width(), src.height(), 3, |y, row| {
        let dy = (y as i64 - py) as f32;
        for (x, out) in row.chunks_exact_mut(3).enumerate() {
            let dx = (x as i64 - px) as f32;
            let a = px + (ct * dx - st * dy) as i64;
            let b = py + (st * dx + ct * dy) as i64;
            if (0..w).contains(&a) && (0..h).contains(&b) {
                out.copy_from_slice(src.pixel(a as u32, b as u32));
            }
        }
    })
}

/// Extracts `region` from the image.
///
/// Output is `region.width() x region.height()`; output `(x, y)` is source
/// `(left + x, top + y)`.
///
/// # Errors
///
/// [`OpsError::InvalidRegion`] if the region is unordered or extends past
/// the image.
pub fn crop(image: &PixelBuffer, region: Region) -> OpsResult<PixelBuffer> {
    trace!(%region, width = image.width(), height = image.height(), "transform::crop");
    crop_region(&to_bgr(image), region)
}

/// Crop that keeps the source channel count.
pub(crate) fn crop_region(src: &PixelBuffer, region: Region) -> OpsResult<PixelBuffer> {
    region.validate(src.width(), src.height())?;
    let ch = src.channels();
    let x0 = region.left as usize * ch;
    let x1 = region.right as usize * ch;
    render(region.width(), region.height(), ch, |y, row| {
        row.copy_from_slice(&src.row(region.top + y)[x0..x1]);
    })
}

/// Shifts the image by `(dx, dy)` with wraparound on both axes.
///
/// Source pixel `(x, y)` moves to `((x + dx) mod w, (y + dy) mod h)`.
/// Offsets of any size and sign are reduced modulo the dimension.
///
/// # Errors
///
/// [`OpsError::DimensionMismatch`] for a zero-area image.
pub fn translate(image: &PixelBuffer, dx: i32, dy: i32) -> OpsResult<PixelBuffer> {
    trace!(dx, dy, width = image.width(), height = image.height(), "transform::translate");
    ensure_non_empty(image, "translate")?;

    let src = to_bgr(image);
    let (w, h) = (src.width() as i64, src.height() as i64);
    let sx = (dx as i64).rem_euclid(w) as usize;
    let sy = (dy as i64).rem_euclid(h);
    debug!(sx, sy, "normalized offsets");

    let split = (w as usize - sx) * 3;
    render(src.width(), src.height(), 3, |y, row| {
        let src_y = (y as i64 - sy).rem_euclid(h) as u32;
        let src_row = src.row(src_y);
        // out[sx..] = src[..w - sx], out[..sx] = src[w - sx..]
        let (head, tail) = row.split_at_mut(sx * 3);
        head.copy_from_slice(&src_row[split..]);
        tail.copy_from_slice(&src_row[..split]);
    })
}
