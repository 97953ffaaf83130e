//! Color space tags.
//!
//! A [`ColorSpace`] says how to read a buffer's channels. Buffers do not
//! carry one; it is passed alongside a buffer when converting.

use std::fmt;
use std::str::FromStr;

/// The three channel interpretations the engine knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorSpace {
    /// One intensity channel.
    Grayscale,
    /// Blue, green, red (in that order).
    #[default]
    Bgr,
    /// Hue in `[0, 180)` (degrees halved), saturation, value.
    Hsv,
}

impl ColorSpace {
    /// Returns the number of channels a buffer in this space holds.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rastr_core::ColorSpace;
    ///
    /// assert_eq!(ColorSpace::Grayscale.channels(), 1);
    /// assert_eq!(ColorSpace::Hsv.channels(), 3);
    /// ```
    #[inline]
    pub const fn channels(self) -> usize {
        match self {
            Self::Grayscale => 1,
            Self::Bgr | Self::Hsv => 3,
        }
    }

    /// Returns the canonical lowercase name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Grayscale => "gray",
            Self::Bgr => "bgr",
            Self::Hsv => "hsv",
        }
    }
}

impl fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorSpace {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "gray" | "grey" | "grayscale" | "greyscale" | "luma" => Ok(Self::Grayscale),
            "bgr" | "color" | "colour" => Ok(Self::Bgr),
            "hsv" => Ok(Self::Hsv),
            other => Err(format!("unknown color space: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channels() {
        assert_eq!(ColorSpace::Grayscale.channels(), 1);
        assert_eq!(ColorSpace::Bgr.channels(), 3);
        assert_eq!(ColorSpace::Hsv.channels(), 3);
    }

    #[test]
    fn test_parse() {
        assert_eq!("Gray".parse::<ColorSpace>(), Ok(ColorSpace::Grayscale));
        assert_eq!("BGR".parse::<ColorSpace>(), Ok(ColorSpace::Bgr));
        assert_eq!("hsv".parse::<ColorSpace>(), Ok(ColorSpace::Hsv));
        assert!("lab".parse::<ColorSpace>().is_err());
    }

    #[test]
    fn test_display_roundtrip() {
        for cs in [ColorSpace::Grayscale, ColorSpace::Bgr, ColorSpace::Hsv] {
            assert_eq!(cs.to_string().parse::<ColorSpace>(), Ok(cs));
        }
    }
}
