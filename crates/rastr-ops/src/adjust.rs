//! Pointwise tone adjustments.
//!
//! Every function here promotes grayscale input to BGR and returns a new
//! three-channel buffer.
//!
//! # Operations
//!
//! - [`brightness`] - Add a constant to every channel
//! - [`contrast`] - Stretch the HSV value range about its extremes
//! - [`saturation`] - Add a constant to HSV saturation
//! - [`threshold`] - Binarize on the channel average
//! - [`invert`] - Photographic negative
//!
//! # Example
//!
//! ```rust
//! use rastr_core::PixelBuffer;
//! use rastr_ops::adjust::{brightness, invert};
//!
//! let img = PixelBuffer::filled(4, 4, &[100, 100, 100]);
//! let bright = brightness(&img, 200).unwrap();
//! assert_eq!(bright.pixel(0, 0), &[255, 255, 255]);
//!
//! let neg = invert(&img).unwrap();
//! assert_eq!(neg.pixel(3, 3), &[155, 155, 155]);
//! ```

use crate::guard::ensure_non_empty;
use crate::parallel::{map_pixels, map_samples};
use crate::{OpsError, OpsResult};
use rastr_color::{bgr_to_hsv_buffer, hsv_to_bgr_buffer, to_bgr};
use rastr_core::{PixelBuffer, saturate, saturate_wide};
#[allow(unused_imports)]
use tracing::{debug, trace};

/// Adds `delta` to every channel of every pixel, saturating.
pub fn brightness(image: &PixelBuffer, delta: i32) -> OpsResult<PixelBuffer> {
    trace!(delta, width = image.width(), height = image.height(), "adjust::brightness");
    let src = to_bgr(image);
    map_samples(&src, |c| saturate((c as i32).saturating_add(delta)))
}

/// Returns the minimum and maximum HSV value (`max(b, g, r)`) over the image.
///
/// # Errors
///
/// [`OpsError::DimensionMismatch`] for a zero-area image.
pub fn value_range(image: &PixelBuffer) -> OpsResult<(u8, u8)> {
    ensure_non_empty(image, "value_range")?;
    let hsv = bgr_to_hsv_buffer(&to_bgr(image));
    Ok(hsv_value_range(&hsv))
}

fn hsv_value_range(hsv: &PixelBuffer) -> (u8, u8) {
    hsv.data()
        .chunks_exact(3)
        .fold((u8::MAX, u8::MIN), |(lo, hi), px| (lo.min(px[2]), hi.max(px[2])))
}

/// Stretches the HSV value channel.
///
/// With `min`/`max` the value extremes of the image, the target range is
/// `[min - delta, max + delta]` and each value is remapped linearly:
///
/// ```text
/// v' = clamp(new_min + (new_max - new_min) * (v - min) / (max - min))
/// ```
///
/// using integer division. Hue and saturation pass through unchanged.
/// A negative `delta` narrows the range, and past `-(max - min) / 2` it
/// inverts it.
///
/// # Errors
///
/// - [`OpsError::DimensionMismatch`] for a zero-area image
/// - [`OpsError::DegenerateRange`] if every pixel has the same value
///
/// # Example
///
/// ```rust
/// use rastr_core::PixelBuffer;
/// use rastr_ops::adjust::contrast;
/// use rastr_ops::OpsError;
///
/// let flat = PixelBuffer::filled(8, 8, &[60, 60, 60]);
/// assert_eq!(contrast(&flat, 10), Err(OpsError::DegenerateRange { value: 60 }));
/// ```
pub fn contrast(image: &PixelBuffer, delta: i32) -> OpsResult<PixelBuffer> {
    trace!(delta, width = image.width(), height = image.height(), "adjust::contrast");
    ensure_non_empty(image, "contrast")?;

    let hsv = bgr_to_hsv_buffer(&to_bgr(image));
    let (min, max) = hsv_value_range(&hsv);
    if min == max {
        return Err(OpsError::DegenerateRange { value: min });
    }

    let (min, max) = (min as i64, max as i64);
    let new_max = max + delta as i64;
    let new_min = min - delta as i64;
    let span = new_max - new_min;
    let range = max - min;
    debug!(min, max, new_min, new_max, "contrast range");

    let stretched = map_pixels(&hsv, 3, |px, out| {
        let v = px[2] as i64;
        out[0] = px[0];
        out[1] = px[1];
        out[2] = saturate_wide(new_min + span * (v - min) / range);
    })?;
    Ok(hsv_to_bgr_buffer(&stretched))
}

/// Adds `delta` to the HSV saturation channel, saturating.
pub fn saturation(image: &PixelBuffer, delta: i32) -> OpsResult<PixelBuffer> {
    trace!(delta, width = image.width(), height = image.height(), "adjust::saturation");
    let hsv = bgr_to_hsv_buffer(&to_bgr(image));
    let shifted = map_pixels(&hsv, 3, |px, out| {
        out[0] = px[0];
        out[1] = saturate((px[1] as i32).saturating_add(delta));
        out[2] = px[2];
    })?;
    Ok(hsv_to_bgr_buffer(&shifted))
}

/// Binarizes the image on the integer channel average.
///
/// `t` is clamped to `[0, 255]` first. Pixels whose `(b + g + r) / 3`
/// exceeds it become white, the rest black.
pub fn threshold(image: &PixelBuffer, t: i32) -> OpsResult<PixelBuffer> {
    let t = saturate(t) as u32;
    trace!(t, width = image.width(), height = image.height(), "adjust::threshold");
    let src = to_bgr(image);
    map_pixels(&src, 3, |px, out| {
        let avg = (px[0] as u32 + px[1] as u32 + px[2] as u32) / 3;
        out.fill(if avg > t { 255 } else { 0 });
    })
}

/// Replaces every channel `c` with `255 - c`.
pub fn invert(image: &PixelBuffer) -> OpsResult<PixelBuffer> {
    trace!(width = image.width(), height = image.height(), "adjust::invert");
    let src = to_bgr(image);
    map_samples(&src, |c| 255 - c)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(width: u32, height: u32) -> PixelBuffer {
        let data = (0..width * height * 3).map(|i| (i * 7 % 256) as u8).collect();
        PixelBuffer::from_data(width, height, 3, data).unwrap()
    }

    #[test]
    fn test_brightness_saturates() {
        let img = PixelBuffer::filled(4, 4, &[100, 100, 100]);
        let up = brightness(&img, 200).unwrap();
        assert!(up.data().iter().all(|&v| v == 255));
        let down = brightness(&img, -150).unwrap();
        assert!(down.data().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_brightness_extreme_delta() {
        let img = PixelBuffer::filled(2, 2, &[1, 2, 3]);
        assert!(brightness(&img, i32::MAX).unwrap().data().iter().all(|&v| v == 255));
        assert!(brightness(&img, i32::MIN).unwrap().data().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_brightness_promotes_gray() {
        let img = PixelBuffer::filled(3, 2, &[40]);
        let out = brightness(&img, 10).unwrap();
        assert_eq!(out.channels(), 3);
        assert_eq!(out.pixel(2, 1), &[50, 50, 50]);
    }

    #[test]
    fn test_contrast_degenerate() {
        let img = PixelBuffer::filled(5, 5, &[0, 0, 200]);
        assert_eq!(contrast(&img, 20), Err(OpsError::DegenerateRange { value: 200 }));
    }

    #[test]
    fn test_contrast_empty() {
        let img = PixelBuffer::new(0, 3, 3);
        assert!(matches!(contrast(&img, 5), Err(OpsError::DimensionMismatch(_))));
    }

    #[test]
    fn test_contrast_stretches_grays() {
        // Values 100 and 150, delta 50: range becomes [50, 200]
        let img = PixelBuffer::from_data(2, 1, 3, vec![100, 100, 100, 150, 150, 150]).unwrap();
        let out = contrast(&img, 50).unwrap();
        assert_eq!(out.pixel(0, 0), &[50, 50, 50]);
        assert_eq!(out.pixel(1, 0), &[200, 200, 200]);
    }

    #[test]
    fn test_contrast_negative_delta_inverts() {
        // range [100, 150] becomes [150, 100]
        let img = PixelBuffer::from_data(2, 1, 1, vec![100, 150]).unwrap();
        let out = contrast(&img, -50).unwrap();
        assert_eq!(out.data(), &[150, 150, 150, 100, 100, 100]);
    }

    #[test]
    fn test_contrast_negative_span_truncates_toward_zero() {
        // delta -30: target [130, 120], span -10; 121 maps to 130 + (-210 / 50) = 126
        let img = PixelBuffer::from_data(3, 1, 1, vec![100, 121, 150]).unwrap();
        let out = contrast(&img, -30).unwrap();
        assert_eq!(out.data(), &[130, 130, 130, 126, 126, 126, 120, 120, 120]);
    }

    #[test]
    fn test_contrast_zero_delta_keeps_values() {
        let img = PixelBuffer::from_data(3, 1, 1, vec![10, 90, 250]).unwrap();
        let out = contrast(&img, 0).unwrap();
        assert_eq!(out.data(), &[10, 10, 10, 90, 90, 90, 250, 250, 250]);
    }

    #[test]
    fn test_contrast_clamps() {
        let img = PixelBuffer::from_data(2, 1, 1, vec![0, 255]).unwrap();
        let out = contrast(&img, 1000).unwrap();
        assert_eq!(out.pixel(0, 0), &[0, 0, 0]);
        assert_eq!(out.pixel(1, 0), &[255, 255, 255]);
    }

    #[test]
    fn test_value_range() {
        let img = PixelBuffer::from_data(2, 1, 3, vec![10, 40, 20, 5, 5, 90]).unwrap();
        assert_eq!(value_range(&img).unwrap(), (40, 90));
    }

    #[test]
    fn test_saturation_gray_stays_gray_at_zero() {
        // Achromatic pixels have hue 0; raising saturation tints them red
        let img = PixelBuffer::filled(2, 2, &[128, 128, 128]);
        let same = saturation(&img, 0).unwrap();
        assert_eq!(same, img);
        let tinted = saturation(&img, 255).unwrap();
        assert_eq!(tinted.pixel(0, 0), &[0, 0, 128]);
    }

    #[test]
    fn test_saturation_desaturate() {
        let img = PixelBuffer::filled(2, 2, &[255, 0, 0]);
        let out = saturation(&img, -255).unwrap();
        assert_eq!(out.pixel(1, 1), &[255, 255, 255]);
    }

    #[test]
    fn test_threshold_binary() {
        let img = ramp(16, 16);
        for t in [-10, 0, 64, 127, 200, 255, 999] {
            let out = threshold(&img, t).unwrap();
            assert!(out.data().chunks(3).all(|px| px == [0, 0, 0] || px == [255, 255, 255]));
        }
    }

    #[test]
    fn test_threshold_strictly_greater() {
        let img = PixelBuffer::from_data(2, 1, 3, vec![99, 100, 101, 101, 100, 102]).unwrap();
        // averages: 100, 101
        let out = threshold(&img, 100).unwrap();
        assert_eq!(out.pixel(0, 0), &[0, 0, 0]);
        assert_eq!(out.pixel(1, 0), &[255, 255, 255]);
    }

    #[test]
    fn test_invert_self_inverse() {
        let img = ramp(9, 5);
        assert_eq!(invert(&invert(&img).unwrap()).unwrap(), img);
    }
}
