//! Decode/encode boundary between image files and [`PixelBuffer`]s.
//!
//! Files are read and written with the `image` crate. Color files load as
//! 3-channel BGR (the red and blue channels are swapped on the way in and
//! back on the way out); grayscale files load as a single channel. Alpha
//! is dropped.

use std::path::Path;

use anyhow::{Context, Result};
use image::{ColorType, DynamicImage, GrayImage, RgbImage};
use rastr_core::PixelBuffer;
#[allow(unused_imports)]
use tracing::{debug, trace};

/// Loads an image file.
pub fn load_image(path: &Path) -> Result<PixelBuffer> {
    trace!(path = %path.display(), "io::load_image");
    let img = image::open(path).with_context(|| format!("Failed to load: {}", path.display()))?;
    let buffer = decode(img).with_context(|| format!("Failed to decode: {}", path.display()))?;
    debug!(w = buffer.width(), h = buffer.height(), ch = buffer.channels(), "loaded");
    Ok(buffer)
}

/// Saves a buffer; the format follows the file extension.
pub fn save_image(path: &Path, image: &PixelBuffer) -> Result<()> {
    trace!(path = %path.display(), w = image.width(), h = image.height(), "io::save_image");
    encode(image)?
        .save(path)
        .with_context(|| format!("Failed to save: {}", path.display()))
}

/// Converts a decoded image to a pixel buffer.
pub fn decode(img: DynamicImage) -> Result<PixelBuffer> {
    let buffer = match img.color() {
        ColorType::L8 | ColorType::L16 | ColorType::La8 | ColorType::La16 => {
            let gray = img.into_luma8();
            let (w, h) = gray.dimensions();
            PixelBuffer::from_data(w, h, 1, gray.into_raw())?
        }
        _ => {
            let rgb = img.into_rgb8();
            let (w, h) = rgb.dimensions();
            let mut data = rgb.into_raw();
            swap_red_blue(&mut data);
            PixelBuffer::from_data(w, h, 3, data)?
        }
    };
    Ok(buffer)
}

/// Converts a pixel buffer to an encodable image.
pub fn encode(image: &PixelBuffer) -> Result<DynamicImage> {
    let (w, h) = image.dimensions();
    let encoded = if image.is_gray() {
        GrayImage::from_raw(w, h, image.data().to_vec()).map(DynamicImage::ImageLuma8)
    } else {
        let mut data = image.data().to_vec();
        swap_red_blue(&mut data);
        RgbImage::from_raw(w, h, data).map(DynamicImage::ImageRgb8)
    };
    encoded.with_context(|| format!("{}x{} buffer does not match its sample count", w, h))
}

fn swap_red_blue(data: &mut [u8]) {
    for px in data.chunks_exact_mut(3) {
        px.swap(0, 2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Luma, Rgb};

    #[test]
    fn test_decode_rgb_swaps() {
        let rgb = RgbImage::from_pixel(2, 1, Rgb([10, 20, 30]));
        let buffer = decode(DynamicImage::ImageRgb8(rgb)).unwrap();
        assert_eq!(buffer.channels(), 3);
        assert_eq!(buffer.pixel(1, 0), &[30, 20, 10]);
    }

    #[test]
    fn test_decode_gray_single_channel() {
        let gray = GrayImage::from_pixel(3, 2, Luma([99]));
        let buffer = decode(DynamicImage::ImageLuma8(gray)).unwrap();
        assert_eq!(buffer.channels(), 1);
        assert_eq!(buffer.pixel(2, 1), &[99]);
    }

    #[test]
    fn test_encode_swaps_back() {
        let buffer = PixelBuffer::filled(1, 1, &[1, 2, 3]);
        let img = encode(&buffer).unwrap().into_rgb8();
        assert_eq!(img.get_pixel(0, 0), &Rgb([3, 2, 1]));
    }

    #[test]
    fn test_png_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rt.png");
        let data = (0..4 * 3 * 3).map(|i| (i * 11) as u8).collect();
        let buffer = PixelBuffer::from_data(4, 3, 3, data).unwrap();
        save_image(&path, &buffer).unwrap();
        assert_eq!(load_image(&path).unwrap(), buffer);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_image(Path::new("/nonexistent/missing.png")).unwrap_err();
        assert!(err.to_string().contains("Failed to load"));
    }
}
