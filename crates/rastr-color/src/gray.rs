//! Grayscale ↔ BGR conversion.
//!
//! Luma uses the Rec.601 weights in 14-bit fixed point:
//!
//! ```text
//! Y = (1868·B + 9617·G + 4899·R + 2^13) >> 14
//! ```
//!
//! Promotion replicates the gray sample into all three channels.

use rastr_core::PixelBuffer;

const SHIFT: u32 = 14;
const B2Y: u32 = 1868;
const G2Y: u32 = 9617;
const R2Y: u32 = 4899;

/// Computes the 8-bit luma of one BGR pixel.
///
/// # Example
///
/// ```rust
/// use rastr_color::bgr_to_gray;
///
/// assert_eq!(bgr_to_gray(255, 255, 255), 255);
/// assert_eq!(bgr_to_gray(0, 0, 0), 0);
/// assert_eq!(bgr_to_gray(0, 255, 0), 150);
/// ```
#[inline]
pub fn bgr_to_gray(b: u8, g: u8, r: u8) -> u8 {
    let y = (b as u32 * B2Y + g as u32 * G2Y + r as u32 * R2Y + (1 << (SHIFT - 1))) >> SHIFT;
    // Weights sum to 2^14, so y <= 255.
    y as u8
}

/// Promotes a grayscale buffer to BGR.
///
/// Three-channel input is returned as a clone sharing storage.
pub fn to_bgr(buffer: &PixelBuffer) -> PixelBuffer {
    if buffer.is_bgr() {
        return buffer.clone();
    }
    buffer.map_pixels(|&[y]: &[u8; 1]| [y, y, y])
}

/// Demotes a BGR buffer to grayscale.
///
/// Single-channel input is returned as a clone sharing storage.
pub fn to_gray(buffer: &PixelBuffer) -> PixelBuffer {
    if buffer.is_gray() {
        return buffer.clone();
    }
    buffer.map_pixels(|&[b, g, r]: &[u8; 3]| [bgr_to_gray(b, g, r)])
}
