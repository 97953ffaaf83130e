//! Row scheduling for image operations.
//!
//! Every operation in this crate reads from an immutable source and fills a
//! freshly allocated output one row at a time. Rows never depend on one
//! another's output, so with the `parallel` feature the rows are handed to
//! Rayon; without it they run in order. The numeric result is identical
//! either way.
//!
//! # Example
//!
//! ```rust
//! use rastr_ops::parallel::render;
//!
//! // 4x2 horizontal ramp, one channel
//! let img = render(4, 2, 1, |_y, row| {
//!     for (x, v) in row.iter_mut().enumerate() {
//!         *v = (x * 50) as u8;
//!     }
//! })
//! .unwrap();
//! assert_eq!(img.row(1), &[0, 50, 100, 150]);
//! ```

use crate::OpsResult;
use rastr_core::PixelBuffer;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Fills a `width x height x channels` sample grid row by row.
///
/// `f` receives the row index and the row's `width * channels` samples,
/// initialized to `T::default()`.
pub fn render_rows<T, F>(width: u32, height: u32, channels: usize, f: F) -> Vec<T>
where
    T: Copy + Default + Send,
    F: Fn(u32, &mut [T]) + Sync + Send,
{
    let row_len = width as usize * channels;
    let mut out = vec![T::default(); row_len * height as usize];
    if row_len == 0 {
        return out;
    }

    #[cfg(feature = "parallel")]
    out.par_chunks_mut(row_len)
        .enumerate()
        .for_each(|(y, row)| f(y as u32, row));

    #[cfg(not(feature = "parallel"))]
    out.chunks_mut(row_len)
        .enumerate()
        .for_each(|(y, row)| f(y as u32, row));

    out
}

/// Builds a [`PixelBuffer`] by filling each output row.
///
/// Unwritten samples stay 0, so "black unless set" falls out naturally.
pub fn render<F>(width: u32, height: u32, channels: usize, f: F) -> OpsResult<PixelBuffer>
where
    F: Fn(u32, &mut [u8]) + Sync + Send,
{
    let data = render_rows(width, height, channels, f);
    Ok(PixelBuffer::from_data(width, height, channels, data)?)
}

/// Builds a same-size buffer by mapping each source pixel.
///
/// `f` receives the source pixel's samples and the matching output pixel.
pub fn map_pixels<F>(src: &PixelBuffer, out_channels: usize, f: F) -> OpsResult<PixelBuffer>
where
    F: Fn(&[u8], &mut [u8]) + Sync + Send,
{
    let channels = src.channels();
    render(src.width(), src.height(), out_channels, |y, row| {
        let src_row = src.row(y);
        for (out_px, src_px) in row
            .chunks_exact_mut(out_channels)
            .zip(src_row.chunks_exact(channels))
        {
            f(src_px, out_px);
        }
    })
}

/// Builds a same-shape buffer by mapping every sample independently.
pub fn map_samples<F>(src: &PixelBuffer, f: F) -> OpsResult<PixelBuffer>
where
    F: Fn(u8) -> u8 + Sync + Send,
{
    render(src.width(), src.height(), src.channels(), |y, row| {
        for (out, &v) in row.iter_mut().zip(src.row(y)) {
            *out = f(v);
        }
    })
}
