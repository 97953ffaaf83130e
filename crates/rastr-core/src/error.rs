//! Error types for rastr-core.
//!
//! The [`Error`] enum covers failures that can occur while building or
//! slicing a [`crate::PixelBuffer`]:
//! - Region bounds checking
//! - Raw sample vectors of the wrong length
//! - Channel counts outside the supported set, or wrong for a color space
//!
//! # Usage
//!
//! ```rust
//! use rastr_core::{Error, PixelBuffer};
//!
//! let err = PixelBuffer::from_data(4, 4, 3, vec![0; 10]).unwrap_err();
//! assert!(matches!(err, Error::DimensionMismatch(_)));
//! ```

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by buffer construction and region checks.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Region is unordered or extends beyond the buffer.
    ///
    /// Returned when `top > bottom`, `left > right`, or the region's far
    /// edges exceed the buffer's height/width.
    #[error(
        "region (top={top}, left={left}, bottom={bottom}, right={right}) invalid for buffer {width}x{height}"
    )]
    InvalidRegion {
        /// Region top row (inclusive)
        top: u32,
        /// Region left column (inclusive)
        left: u32,
        /// Region bottom row (exclusive)
        bottom: u32,
        /// Region right column (exclusive)
        right: u32,
        /// Buffer width
        width: u32,
        /// Buffer height
        height: u32,
    },

    /// Sample storage or dimensions do not agree.
    #[error("dimension mismatch: {0}")]
    DimensionMismatch(String),

    /// Channel count is not what the color space or operation expects.
    #[error("channel mismatch: expected {expected}, got {got}")]
    ChannelMismatch {
        /// Expected channel count
        expected: usize,
        /// Actual channel count
        got: usize,
    },

    /// Channel count outside the supported set.
    ///
    /// Buffers hold either 1 (grayscale) or 3 (BGR/HSV) channels.
    #[error("unsupported channel count {0}, expected 1 or 3")]
    UnsupportedChannels(usize),
}

impl Error {
    /// Creates a [`Error::DimensionMismatch`] describing a `width x height`
    /// buffer.
    pub fn dimension_mismatch(width: u32, height: u32, reason: impl Into<String>) -> Self {
        Self::DimensionMismatch(format!("{}x{}: {}", width, height, reason.into()))
    }
}
