//! Saturating conversion into the 8-bit sample range.
//!
//! Every value computed for a pixel channel passes through one of these
//! before it is stored. Raw copies (crop, flips, permutations) never need to.

/// Clamps an integer into `[0, 255]`.
///
/// # Example
///
/// ```rust
/// use rastr_core::saturate;
///
/// assert_eq!(saturate(-20), 0);
/// assert_eq!(saturate(128), 128);
/// assert_eq!(saturate(300), 255);
/// ```
#[inline]
pub fn saturate(value: i32) -> u8 {
    value.clamp(0, 255) as u8
}

/// Clamps a wide integer into `[0, 255]`.
///
/// For intermediate results that can leave the `i32` range, such as the
/// contrast remap with extreme deltas.
#[inline]
pub fn saturate_wide(value: i64) -> u8 {
    value.clamp(0, 255) as u8
}

/// Clamps a real value into `[0, 255]`, truncating the fraction.
///
/// NaN maps to 0.
///
/// # Example
///
/// ```rust
/// use rastr_core::saturate_f32;
///
/// assert_eq!(saturate_f32(254.9), 254);
/// assert_eq!(saturate_f32(-0.5), 0);
/// assert_eq!(saturate_f32(1e9), 255);
/// ```
#[inline]
pub fn saturate_f32(value: f32) -> u8 {
    // `as` saturates and sends NaN to 0.
    value.clamp(0.0, 255.0) as u8
}
