//! Canny edge detection.

use image::GrayImage;
use imageproc::edges::canny;

use super::TransformError;
use crate::decode::PixelGrid;
use crate::luminance::luma_plane;
use crate::params::{CANNY_HIGH_THRESHOLD, CANNY_LOW_THRESHOLD};

/// Binary edge map of the luma channel, expanded to RGB.
///
/// Edge pixels are white and everything else black. Thresholds are fixed at
/// 100/200.
pub fn detect_edges(image: &PixelGrid) -> Result<PixelGrid, TransformError> {
    let gray = GrayImage::from_raw(image.width, image.height, luma_plane(&image.pixels))
        .ok_or(TransformError::InvalidImage {
            width: image.width,
            height: image.height,
            len: image.pixels.len(),
        })?;

    let edges = canny(&gray, CANNY_LOW_THRESHOLD, CANNY_HIGH_THRESHOLD);
    Ok(PixelGrid::from_gray_image(&edges))
}
