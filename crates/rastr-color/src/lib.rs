//! # rastr-color
//!
//! Color space adapter for 8-bit buffers.
//!
//! Converts [`PixelBuffer`]s between single-channel grayscale, three-channel
//! BGR and three-channel HSV. The arithmetic follows the widely used 8-bit
//! fixed-point formulas bit for bit, since contrast, saturation and the mask
//! demotion in merges all depend on the exact values produced here.
//!
//! # Modules
//!
//! - [`gray`] - BGR ↔ grayscale
//! - [`hsv`] - BGR ↔ HSV
//!
//! # Example
//!
//! ```rust
//! use rastr_color::{convert, to_bgr};
//! use rastr_core::{ColorSpace, PixelBuffer};
//!
//! let gray = PixelBuffer::filled(4, 4, &[90]);
//! let bgr = to_bgr(&gray);
//! assert_eq!(bgr.pixel(0, 0), &[90, 90, 90]);
//!
//! let hsv = convert(&bgr, ColorSpace::Bgr, ColorSpace::Hsv).unwrap();
//! assert_eq!(hsv.pixel(0, 0), &[0, 0, 90]);
//! ```

#![warn(missing_docs)]

pub mod gray;
pub mod hsv;

pub use gray::{bgr_to_gray, to_bgr, to_gray};
pub use hsv::{bgr_to_hsv, bgr_to_hsv_buffer, hsv_to_bgr, hsv_to_bgr_buffer};

use rastr_core::{ColorSpace, Error, PixelBuffer, Result};

/// Converts `buffer` from color space `from` to color space `to`.
///
/// Same-space conversion returns a clone (shared storage). Grayscale ↔ HSV
/// passes through BGR.
///
/// # Errors
///
/// Returns [`Error::ChannelMismatch`] if `buffer` does not have the channel
/// count `from` implies.
///
/// # Example
///
/// ```rust
/// use rastr_color::convert;
/// use rastr_core::{ColorSpace, PixelBuffer};
///
/// let red = PixelBuffer::filled(2, 2, &[0, 0, 255]);
/// let gray = convert(&red, ColorSpace::Bgr, ColorSpace::Grayscale).unwrap();
/// assert_eq!(gray.pixel(0, 0), &[76]);
/// ```
pub fn convert(buffer: &PixelBuffer, from: ColorSpace, to: ColorSpace) -> Result<PixelBuffer> {
    if buffer.channels() != from.channels() {
        return Err(Error::ChannelMismatch {
            expected: from.channels(),
            got: buffer.channels(),
        });
    }

    let out = match (from, to) {
        (ColorSpace::Grayscale, ColorSpace::Grayscale)
        | (ColorSpace::Bgr, ColorSpace::Bgr)
        | (ColorSpace::Hsv, ColorSpace::Hsv) => buffer.clone(),
        (ColorSpace::Grayscale, ColorSpace::Bgr) => to_bgr(buffer),
        (ColorSpace::Bgr, ColorSpace::Grayscale) => to_gray(buffer),
        (ColorSpace::Bgr, ColorSpace::Hsv) => bgr_to_hsv_buffer(buffer),
        (ColorSpace::Hsv, ColorSpace::Bgr) => hsv_to_bgr_buffer(buffer),
        (ColorSpace::Grayscale, ColorSpace::Hsv) => bgr_to_hsv_buffer(&to_bgr(buffer)),
        (ColorSpace::Hsv, ColorSpace::Grayscale) => to_gray(&hsv_to_bgr_buffer(buffer)),
    };
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_identity_shares() {
        let img = PixelBuffer::filled(3, 3, &[1, 2, 3]);
        let out = convert(&img, ColorSpace::Bgr, ColorSpace::Bgr).unwrap();
        assert_eq!(out.data().as_ptr(), img.data().as_ptr());
    }

    #[test]
    fn test_convert_channel_mismatch() {
        let gray = PixelBuffer::filled(3, 3, &[1]);
        let err = convert(&gray, ColorSpace::Bgr, ColorSpace::Hsv).unwrap_err();
        assert_eq!(err, Error::ChannelMismatch { expected: 3, got: 1 });
    }

    #[test]
    fn test_convert_gray_to_hsv() {
        let gray = PixelBuffer::filled(2, 2, &[200]);
        let hsv = convert(&gray, ColorSpace::Grayscale, ColorSpace::Hsv).unwrap();
        assert_eq!(hsv.pixel(1, 1), &[0, 0, 200]);
    }

    #[test]
    fn test_convert_hsv_to_gray() {
        // Pure blue in HSV
        let hsv = PixelBuffer::filled(1, 1, &[120, 255, 255]);
        let gray = convert(&hsv, ColorSpace::Hsv, ColorSpace::Grayscale).unwrap();
        assert_eq!(gray.pixel(0, 0), &[bgr_to_gray(255, 0, 0)]);
    }
}
