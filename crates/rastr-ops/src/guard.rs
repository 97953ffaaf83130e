//! Parameter validation guards.
//!
//! Operations call these before any pixel work so failures never leave a
//! half-built result behind.
//!
//! # Example
//!
//! ```rust
//! use rastr_core::PixelBuffer;
//! use rastr_ops::guard::ensure_non_empty;
//!
//! let empty = PixelBuffer::new(0, 4, 3);
//! assert!(ensure_non_empty(&empty, "translate").is_err());
//! ```

use crate::{OpsError, OpsResult};
use rastr_core::PixelBuffer;

/// Fails with [`OpsError::DimensionMismatch`] if `image` has zero area.
pub fn ensure_non_empty(image: &PixelBuffer, op: &str) -> OpsResult<()> {
    if image.is_empty() {
        return Err(OpsError::DimensionMismatch(format!(
            "{} requires a non-empty image, got {}x{}",
            op,
            image.width(),
            image.height()
        )));
    }
    Ok(())
}

/// Checks that a square window of side `2 * radius + 1` is representable.
///
/// Returns the window side on success.
pub fn ensure_radius(radius: u32, op: &str) -> OpsResult<u32> {
    radius
        .checked_mul(2)
        .and_then(|v| v.checked_add(1))
        .ok_or_else(|| {
            OpsError::InvalidParameter(format!("{} radius {} too large, window overflows", op, radius))
        })
}

/// Fails with [`OpsError::InvalidParameter`] if a target dimension is zero.
pub fn ensure_target_size(width: u32, height: u32, op: &str) -> OpsResult<()> {
    if width == 0 || height == 0 {
        return Err(OpsError::InvalidParameter(format!(
            "{} target must be positive, got {}x{}",
            op, width, height
        )));
    }
    Ok(())
}
