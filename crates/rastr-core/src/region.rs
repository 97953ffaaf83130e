//! Rectangular regions in pixel coordinates.
//!
//! A [`Region`] is given by its four edges, `(top, left, bottom, right)`,
//! with `top`/`left` inclusive and `bottom`/`right` exclusive. It is used
//! by crop and by the size normalizer.
//!
//! # Coordinate System
//!
//! ```text
//! (0,0) ────────► column (x)
//!   │
//!   │   top ┌──────────┐
//!   │       │  Region  │
//!   │bottom └──────────┘
//!   ▼     left        right
//!  row (y)
//! ```
//!
//! # Usage
//!
//! ```rust
//! use rastr_core::Region;
//!
//! let region = Region::new(2, 2, 6, 6);
//! assert_eq!(region.height(), 4);
//! assert_eq!(region.width(), 4);
//! assert!(region.fits(10, 10));
//! assert!(!region.fits(5, 5));
//! ```

use crate::{Error, Result};

/// A rectangle defined by its top, left, bottom and right edges.
///
/// # Invariants
///
/// A well-formed region has `top <= bottom` and `left <= right`. The type
/// does not enforce this on construction; [`Region::validate`] checks it
/// together with the bounds of a target buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Region {
    /// First row (inclusive)
    pub top: u32,
    /// First column (inclusive)
    pub left: u32,
    /// Last row (exclusive)
    pub bottom: u32,
    /// Last column (exclusive)
    pub right: u32,
}

impl Region {
    /// Creates a region from its four edges.
    #[inline]
    pub const fn new(top: u32, left: u32, bottom: u32, right: u32) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// Creates a region anchored at the origin covering `height` rows and
    /// `width` columns.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rastr_core::Region;
    ///
    /// let r = Region::from_size(640, 480);
    /// assert_eq!((r.top, r.left, r.bottom, r.right), (0, 0, 480, 640));
    /// ```
    #[inline]
    pub const fn from_size(width: u32, height: u32) -> Self {
        Self::new(0, 0, height, width)
    }

    /// Returns the width in columns (0 for an unordered region).
    #[inline]
    pub fn width(&self) -> u32 {
        self.right.saturating_sub(self.left)
    }

    /// Returns the height in rows (0 for an unordered region).
    #[inline]
    pub fn height(&self) -> u32 {
        self.bottom.saturating_sub(self.top)
    }

    /// Returns the number of pixels covered.
    #[inline]
    pub fn area(&self) -> u64 {
        self.width() as u64 * self.height() as u64
    }

    /// Returns `true` if the region covers no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Returns `true` if `top <= bottom` and `left <= right`.
    #[inline]
    pub fn is_ordered(&self) -> bool {
        self.top <= self.bottom && self.left <= self.right
    }

    /// Returns `true` if the region is ordered and lies within a
    /// `width x height` buffer.
    #[inline]
    pub fn fits(&self, width: u32, height: u32) -> bool {
        self.is_ordered() && self.bottom <= height && self.right <= width
    }

    /// Checks the region against a `width x height` buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRegion`] if the region is unordered or
    /// exceeds the buffer.
    pub fn validate(&self, width: u32, height: u32) -> Result<()> {
        if self.fits(width, height) {
            Ok(())
        } else {
            Err(Error::InvalidRegion {
                top: self.top,
                left: self.left,
                bottom: self.bottom,
                right: self.right,
                width,
                height,
            })
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}..{}, {}..{}] ({}x{})",
            self.top,
            self.bottom,
            self.left,
            self.right,
            self.width(),
            self.height()
        )
    }
}
