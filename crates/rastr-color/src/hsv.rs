//! BGR ↔ HSV conversion for 8-bit samples.
//!
//! Hue is stored halved so it fits a byte: `H ∈ [0, 180)`, while saturation
//! and value use the full `[0, 255]` range.
//!
//! The forward transform is integer-only, using 12-bit fixed-point
//! reciprocal tables. The inverse decomposes hue into six sectors in `f32`
//! and rounds half-to-even on the way back to bytes.

use rastr_core::PixelBuffer;
use std::sync::LazyLock;

const HSV_SHIFT: u32 = 12;
const HALF: i32 = 1 << (HSV_SHIFT - 1);
const HUE_RANGE: i32 = 180;

/// `round((255 << 12) / v)`, 0 for v = 0.
static SDIV: LazyLock<[i32; 256]> = LazyLock::new(|| {
    let mut table = [0i32; 256];
    for (v, slot) in table.iter_mut().enumerate().skip(1) {
        *slot = ((255 << HSV_SHIFT) as f64 / v as f64).round() as i32;
    }
    table
});

/// `round((180 << 12) / (6 * d))`, 0 for d = 0.
static HDIV: LazyLock<[i32; 256]> = LazyLock::new(|| {
    let mut table = [0i32; 256];
    for (d, slot) in table.iter_mut().enumerate().skip(1) {
        *slot = ((HUE_RANGE << HSV_SHIFT) as f64 / (6.0 * d as f64)).round() as i32;
    }
    table
});

/// Sector lookup: which of `[v, p, q, t]` feeds B, G and R.
const SECTOR_TAB: [[usize; 3]; 6] = [
    [1, 3, 0],
    [1, 0, 2],
    [3, 0, 1],
    [0, 2, 1],
    [0, 1, 3],
    [2, 1, 0],
];

/// Converts one BGR pixel to HSV.
///
/// # Example
///
/// ```rust
/// use rastr_color::bgr_to_hsv;
///
/// assert_eq!(bgr_to_hsv([0, 0, 255]), [0, 255, 255]);   // red
/// assert_eq!(bgr_to_hsv([0, 255, 0]), [60, 255, 255]);  // green
/// assert_eq!(bgr_to_hsv([255, 0, 0]), [120, 255, 255]); // blue
/// assert_eq!(bgr_to_hsv([70, 70, 70]), [0, 0, 70]);     // gray
/// ```
#[inline]
pub fn bgr_to_hsv([b, g, r]: [u8; 3]) -> [u8; 3] {
    let (b, g, r) = (b as i32, g as i32, r as i32);
    let v = b.max(g).max(r);
    let vmin = b.min(g).min(r);
    let diff = v - vmin;

    let s = (diff * SDIV[v as usize] + HALF) >> HSV_SHIFT;

    let h = if v == r {
        g - b
    } else if v == g {
        b - r + 2 * diff
    } else {
        r - g + 4 * diff
    };
    let mut h = (h * HDIV[diff as usize] + HALF) >> HSV_SHIFT;
    if h < 0 {
        h += HUE_RANGE;
    }

    [h as u8, s as u8, v as u8]
}

/// Converts one HSV pixel back to BGR.
///
/// # Example
///
/// ```rust
/// use rastr_color::hsv_to_bgr;
///
/// assert_eq!(hsv_to_bgr([0, 255, 255]), [0, 0, 255]);
/// assert_eq!(hsv_to_bgr([90, 0, 33]), [33, 33, 33]);
/// ```
#[inline]
pub fn hsv_to_bgr([h, s, v]: [u8; 3]) -> [u8; 3] {
    let s = s as f32 * (1.0 / 255.0);
    let v = v as f32 * (1.0 / 255.0);

    let (b, g, r) = if s == 0.0 {
        (v, v, v)
    } else {
        let mut h = h as f32 * (6.0 / HUE_RANGE as f32);
        while h < 0.0 {
            h += 6.0;
        }
        while h >= 6.0 {
            h -= 6.0;
        }
        let mut sector = h.floor() as usize;
        h -= sector as f32;
        if sector >= 6 {
            sector = 0;
            h = 0.0;
        }

        let tab = [
            v,
            v * (1.0 - s),
            v * (1.0 - s * h),
            v * (1.0 - s * (1.0 - h)),
        ];
        let idx = SECTOR_TAB[sector];
        (tab[idx[0]], tab[idx[1]], tab[idx[2]])
    };

    [to_byte(b), to_byte(g), to_byte(r)]
}

#[inline]
fn to_byte(unit: f32) -> u8 {
    (unit * 255.0).round_ties_even().clamp(0.0, 255.0) as u8
}

/// Converts a BGR buffer to HSV.
///
/// # Panics
///
/// Panics if `buffer` is not three-channel.
pub fn bgr_to_hsv_buffer(buffer: &PixelBuffer) -> PixelBuffer {
    buffer.map_pixels(|px: &[u8; 3]| bgr_to_hsv(*px))
}

/// Converts an HSV buffer to BGR.
///
/// # Panics
///
/// Panics if `buffer` is not three-channel.
pub fn hsv_to_bgr_buffer(buffer: &PixelBuffer) -> PixelBuffer {
    buffer.map_pixels(|px: &[u8; 3]| hsv_to_bgr(*px))
}
