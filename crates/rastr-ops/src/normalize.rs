//! Size reconciliation for multi-image operations.
//!
//! Images of differing dimensions are never scaled. Instead every image is
//! cropped to the top-left `min_width x min_height` area shared by all of
//! them. Channel counts are left alone.

use crate::transform::crop_region;
use crate::{OpsError, OpsResult};
use rastr_core::{PixelBuffer, Region};
#[allow(unused_imports)]
use tracing::{debug, trace};

/// Smallest width and smallest height across `images`.
///
/// # Errors
///
/// [`OpsError::DimensionMismatch`] for an empty set.
pub fn common_size(images: &[&PixelBuffer]) -> OpsResult<(u32, u32)> {
    let width = images.iter().map(|img| img.width()).min();
    let height = images.iter().map(|img| img.height()).min();
    match (width, height) {
        (Some(w), Some(h)) => Ok((w, h)),
        _ => Err(OpsError::DimensionMismatch(
            "cannot normalize an empty set of images".into(),
        )),
    }
}

/// Crops every image to the common top-left area.
///
/// If all images already share dimensions they are returned as-is
/// (cheap clones sharing storage).
///
/// # Example
///
/// ```rust
/// use rastr_core::PixelBuffer;
/// use rastr_ops::normalize::normalize;
///
/// // 5 rows x 5 cols and 8 rows x 3 cols
/// let a = PixelBuffer::new(5, 5, 3);
/// let b = PixelBuffer::new(3, 8, 3);
/// let out = normalize(&[a, b]).unwrap();
/// assert!(out.iter().all(|img| img.dimensions() == (3, 5)));
/// ```
pub fn normalize(images: &[PixelBuffer]) -> OpsResult<Vec<PixelBuffer>> {
    let refs: Vec<&PixelBuffer> = images.iter().collect();
    let (w, h) = common_size(&refs)?;
    trace!(count = images.len(), w, h, "normalize::normalize");

    if images.iter().all(|img| img.dimensions() == (w, h)) {
        return Ok(images.to_vec());
    }

    debug!(w, h, "cropping to common size");
    let region = Region::from_size(w, h);
    images.iter().map(|img| crop_region(img, region)).collect()
}

/// [`normalize`] for exactly two images.
pub fn normalize_pair(a: &PixelBuffer, b: &PixelBuffer) -> OpsResult<(PixelBuffer, PixelBuffer)> {
    let (w, h) = common_size(&[a, b])?;
    if a.dimensions() == (w, h) && b.dimensions() == (w, h) {
        return Ok((a.clone(), b.clone()));
    }
    debug!(w, h, "cropping pair to common size");
    let region = Region::from_size(w, h);
    Ok((crop_region(a, region)?, crop_region(b, region)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(width: u32, height: u32) -> PixelBuffer {
        let data = (0..width * height).map(|i| i as u8).collect();
        PixelBuffer::from_data(width, height, 1, data).unwrap()
    }

    #[test]
    fn test_common_size() {
        let a = PixelBuffer::new(5, 5, 3);
        let b = PixelBuffer::new(3, 8, 3);
        assert_eq!(common_size(&[&a, &b]).unwrap(), (3, 5));
        assert!(matches!(common_size(&[]), Err(OpsError::DimensionMismatch(_))));
    }

    #[test]
    fn test_same_size_untouched() {
        let a = numbered(4, 4);
        let b = numbered(4, 4);
        let out = normalize(&[a.clone(), b]).unwrap();
        assert_eq!(out[0].data().as_ptr(), a.data().as_ptr());
    }

    #[test]
    fn test_crops_top_left() {
        let a = numbered(5, 5);
        let b = numbered(3, 8);
        let (na, nb) = normalize_pair(&a, &b).unwrap();
        assert_eq!(na.dimensions(), (3, 5));
        assert_eq!(nb.dimensions(), (3, 5));
        assert_eq!(na.row(1), &[5, 6, 7]);
        assert_eq!(nb.row(4), &[12, 13, 14]);
    }

    #[test]
    fn test_keeps_channels() {
        let a = numbered(4, 2);
        let b = PixelBuffer::new(2, 4, 3);
        let out = normalize(&[a, b]).unwrap();
        assert_eq!(out[0].channels(), 1);
        assert_eq!(out[1].channels(), 3);
        assert!(out.iter().all(|img| img.dimensions() == (2, 2)));
    }

    #[test]
    fn test_empty_set() {
        assert!(normalize(&[]).is_err());
    }
}
