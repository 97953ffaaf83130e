//! # rastr-core
//!
//! Core types for 8-bit raster processing.
//!
//! This crate provides the foundational types used throughout the rastr workspace:
//!
//! - [`PixelBuffer`] - Owned grid of 8-bit samples, one or three channels
//! - [`Region`] - Rectangle in `(top, left, bottom, right)` form
//! - [`ColorSpace`] - Tag describing how a buffer's channels are read
//! - [`saturate`] - The clamp every computed sample goes through
//!
//! ## Crate Structure
//!
//! ```text
//! rastr-core (this crate)
//!    ^
//!    |
//!    +-- rastr-color (grayscale / BGR / HSV adapter)
//!    +-- rastr-ops (adjustments, transforms, filters, compositing)
//!    +-- rastr-cli (the `rastr` binary)
//! ```
//!
//! A buffer never records its own color space. Callers pair a buffer with a
//! [`ColorSpace`] when they need to, and operations that assume BGR input
//! promote single-channel buffers themselves.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod buffer;
pub mod colorspace;
pub mod error;
pub mod region;
pub mod saturate;

pub use buffer::PixelBuffer;
pub use colorspace::ColorSpace;
pub use error::{Error, Result};
pub use region::Region;
pub use saturate::{saturate, saturate_f32, saturate_wide};

/// Prelude module for convenient imports.
///
/// ```
/// use rastr_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::buffer::PixelBuffer;
    pub use crate::colorspace::ColorSpace;
    pub use crate::error::{Error, Result};
    pub use crate::region::Region;
    pub use crate::saturate::{saturate, saturate_f32, saturate_wide};
}
