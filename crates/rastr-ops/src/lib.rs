//! # rastr-ops
//!
//! Pixel operations for 8-bit BGR rasters.
//!
//! Every operation is a pure function: it borrows its inputs, validates
//! parameters up front, and returns a freshly allocated [`PixelBuffer`].
//! Single-channel inputs are promoted to BGR before any work.
//!
//! # Modules
//!
//! - [`adjust`] - Brightness, contrast, saturation, threshold, invert
//! - [`transform`] - Flips, rotations, crop, cyclic translate
//! - [`resize`] - Nearest-neighbor scaling
//! - [`filter`] - Box blur, erosion, dilation
//! - [`normalize`] - Cropping image sets to a common size
//! - [`composite`] - Blend modes and masked merges
//! - [`parallel`] - Row scheduling shared by all of the above
//!
//! # Example
//!
//! ```rust
//! use rastr_core::PixelBuffer;
//! use rastr_ops::{composite, transform, BlendMode};
//!
//! let a = PixelBuffer::filled(8, 8, &[200, 100, 50]);
//! let b = PixelBuffer::filled(6, 10, &[100, 100, 100]);
//!
//! // Blending crops both inputs to their common 6x8 top-left area
//! let out = composite::blend(&a, &b, BlendMode::Add).unwrap();
//! assert_eq!(out.dimensions(), (6, 8));
//! assert_eq!(out.pixel(0, 0), &[255, 200, 150]);
//!
//! let flipped = transform::flip_h(&out).unwrap();
//! assert_eq!(flipped.dimensions(), (6, 8));
//! ```
//!
//! # Parallelism
//!
//! With the default `parallel` feature, output rows are filled on the Rayon
//! global pool. Results are bit-identical with the feature off.
//!
//! [`PixelBuffer`]: rastr_core::PixelBuffer

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod adjust;
pub mod composite;
pub mod filter;
pub mod guard;
pub mod normalize;
pub mod parallel;
pub mod resize;
pub mod transform;

pub use composite::BlendMode;
pub use error::{OpsError, OpsResult};
pub use filter::Reduce;
pub use transform::Pivot;
