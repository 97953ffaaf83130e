//! The pixel buffer shared by every operation.
//!
//! # Memory Layout
//!
//! Samples are stored **row-major**, top-to-bottom, channels interleaved:
//!
//! ```text
//! 3 channels: [B G R B G R B G R ...]  ← Row 0
//!             [B G R B G R B G R ...]  ← Row 1
//! 1 channel:  [Y Y Y Y ...]            ← Row 0
//! ```
//!
//! There is no row padding, so the stride is always `width * channels`.
//!
//! # Ownership
//!
//! The sample vector sits behind an [`Arc`], so cloning a buffer is cheap
//! and shares storage. Buffers expose no mutable access to their samples:
//! operations read a source buffer and build a new one.
//!
//! # Usage
//!
//! ```rust
//! use rastr_core::PixelBuffer;
//!
//! let img = PixelBuffer::filled(4, 2, &[10, 20, 30]);
//! assert_eq!(img.dimensions(), (4, 2));
//! assert_eq!(img.channels(), 3);
//! assert_eq!(img.pixel(3, 1), &[10, 20, 30]);
//! ```

use crate::{Error, Region, Result};
use std::sync::Arc;

/// Owned 2D grid of 8-bit samples with 1 or 3 channels.
///
/// The `(width, height, channels)` triple is fixed at construction;
/// operations that change dimensions return a new buffer.
#[derive(Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    /// Interleaved samples (Arc for cheap cloning)
    data: Arc<Vec<u8>>,
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Samples per pixel (1 or 3)
    channels: usize,
}

impl PixelBuffer {
    /// Creates a zero-filled (black) buffer.
    ///
    /// # Panics
    ///
    /// Panics if `channels` is not 1 or 3.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rastr_core::PixelBuffer;
    ///
    /// let img = PixelBuffer::new(8, 6, 3);
    /// assert!(img.data().iter().all(|&v| v == 0));
    /// ```
    pub fn new(width: u32, height: u32, channels: usize) -> Self {
        assert!(
            channels == 1 || channels == 3,
            "unsupported channel count {channels}"
        );
        let len = width as usize * height as usize * channels;
        Self {
            data: Arc::new(vec![0; len]),
            width,
            height,
            channels,
        }
    }

    /// Creates a buffer with every pixel set to `fill`.
    ///
    /// The fill color's length fixes the channel count.
    ///
    /// # Panics
    ///
    /// Panics if `fill` is not 1 or 3 samples long.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rastr_core::PixelBuffer;
    ///
    /// let white = PixelBuffer::filled(16, 16, &[255, 255, 255]);
    /// let gray = PixelBuffer::filled(16, 16, &[128]);
    /// assert_eq!(white.channels(), 3);
    /// assert_eq!(gray.channels(), 1);
    /// ```
    pub fn filled(width: u32, height: u32, fill: &[u8]) -> Self {
        let channels = fill.len();
        assert!(
            channels == 1 || channels == 3,
            "unsupported channel count {channels}"
        );
        let pixel_count = width as usize * height as usize;
        let data = fill.repeat(pixel_count);
        Self {
            data: Arc::new(data),
            width,
            height,
            channels,
        }
    }

    /// Wraps existing samples.
    ///
    /// # Errors
    ///
    /// - [`Error::UnsupportedChannels`] if `channels` is not 1 or 3
    /// - [`Error::DimensionMismatch`] if `data.len() != width * height * channels`
    ///
    /// # Example
    ///
    /// ```rust
    /// use rastr_core::PixelBuffer;
    ///
    /// let img = PixelBuffer::from_data(2, 1, 3, vec![1, 2, 3, 4, 5, 6]).unwrap();
    /// assert_eq!(img.pixel(1, 0), &[4, 5, 6]);
    /// ```
    pub fn from_data(width: u32, height: u32, channels: usize, data: Vec<u8>) -> Result<Self> {
        if channels != 1 && channels != 3 {
            return Err(Error::UnsupportedChannels(channels));
        }
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|v| v.checked_mul(channels))
            .ok_or_else(|| Error::dimension_mismatch(width, height, "sample count overflows"))?;
        if data.len() != expected {
            return Err(Error::dimension_mismatch(
                width,
                height,
                format!("expected {} samples, got {}", expected, data.len()),
            ));
        }
        Ok(Self {
            data: Arc::new(data),
            width,
            height,
            channels,
        })
    }

    /// Returns the width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Returns the number of samples per pixel.
    #[inline]
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Returns `true` for single-channel buffers.
    #[inline]
    pub fn is_gray(&self) -> bool {
        self.channels == 1
    }

    /// Returns `true` for three-channel buffers.
    #[inline]
    pub fn is_bgr(&self) -> bool {
        self.channels == 3
    }

    /// Returns the number of samples in one row.
    #[inline]
    pub fn row_len(&self) -> usize {
        self.width as usize * self.channels
    }

    /// Returns the total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Returns `true` if the buffer has zero area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Returns a region covering the whole buffer.
    #[inline]
    pub fn bounds(&self) -> Region {
        Region::from_size(self.width, self.height)
    }

    /// Returns the raw samples.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Returns row `y` as a slice of `width * channels` samples.
    #[inline]
    pub fn row(&self, y: u32) -> &[u8] {
        let len = self.row_len();
        let start = y as usize * len;
        &self.data[start..start + len]
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * self.channels
    }

    /// Returns the samples of the pixel at column `x`, row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is out of bounds.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> &[u8] {
        debug_assert!(x < self.width && y < self.height, "pixel out of bounds");
        let offset = self.offset(x, y);
        &self.data[offset..offset + self.channels]
    }

    /// Returns the pixel at `(x, y)`, or `None` if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<&[u8]> {
        if x < self.width && y < self.height {
            Some(self.pixel(x, y))
        } else {
            None
        }
    }

    /// Returns `true` if both buffers share width and height.
    #[inline]
    pub fn same_size(&self, other: &PixelBuffer) -> bool {
        self.dimensions() == other.dimensions()
    }

    /// Builds a new buffer of the same size by mapping every pixel.
    ///
    /// `N` is the source channel count and `M` the output channel count,
    /// which lets the same helper promote, demote or recolor.
    ///
    /// # Panics
    ///
    /// Panics if `N` differs from [`channels`](Self::channels) or `M` is
    /// not 1 or 3.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rastr_core::PixelBuffer;
    ///
    /// let gray = PixelBuffer::filled(2, 2, &[40]);
    /// let bgr = gray.map_pixels(|&[y]: &[u8; 1]| [y, y, y]);
    /// assert_eq!(bgr.pixel(1, 1), &[40, 40, 40]);
    /// ```
    pub fn map_pixels<const N: usize, const M: usize>(
        &self,
        f: impl Fn(&[u8; N]) -> [u8; M],
    ) -> PixelBuffer {
        assert_eq!(N, self.channels, "source channel count mismatch");
        assert!(M == 1 || M == 3, "unsupported channel count {M}");

        let mut data = Vec::with_capacity(self.pixel_count() * M);
        let mut px = [0u8; N];
        for chunk in self.data.chunks_exact(N) {
            px.copy_from_slice(chunk);
            data.extend_from_slice(&f(&px));
        }
        Self {
            data: Arc::new(data),
            width: self.width,
            height: self.height,
            channels: M,
        }
    }

    /// Consumes the buffer and returns its samples.
    ///
    /// Copies only if the storage is shared with another clone.
    pub fn into_data(self) -> Vec<u8> {
        Arc::try_unwrap(self.data).unwrap_or_else(|shared| (*shared).clone())
    }
}

impl std::fmt::Debug for PixelBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixelBuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("channels", &self.channels)
            .finish()
    }
}
