//! Baseline JPEG encoding.
//!
//! Used by the JPEG compression transform: the processed image shown to the
//! user is the decoded form of exactly the bytes offered for download.

use image::codecs::jpeg::JpegEncoder;
use image::ExtendedColorType;
use image::ImageEncoder;
use thiserror::Error;

use crate::decode::PixelGrid;

/// Lowest quality the encoder accepts. Requests below it are raised to it.
pub const MIN_ENCODER_QUALITY: u8 = 1;

/// Highest JPEG quality.
pub const MAX_ENCODER_QUALITY: u8 = 100;

/// Errors that can occur during JPEG encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 3), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// JPEG encoding failed
    #[error("JPEG encoding failed: {0}")]
    EncodingFailed(String),
}

/// Encode a pixel grid to JPEG bytes.
///
/// `quality` follows the usual 0-100 scale; 0 is encoded as 1, the lowest
/// quality the baseline encoder supports.
pub fn encode_jpeg(image: &PixelGrid, quality: u8) -> Result<Vec<u8>, EncodeError> {
    encode_jpeg_raw(&image.pixels, image.width, image.height, quality)
}

/// Encode raw RGB pixel data (3 bytes per pixel, row-major) to JPEG bytes.
pub fn encode_jpeg_raw(
    pixels: &[u8],
    width: u32,
    height: u32,
    quality: u8,
) -> Result<Vec<u8>, EncodeError> {
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }

    let expected = (width as usize) * (height as usize) * 3;
    if pixels.len() != expected {
        return Err(EncodeError::InvalidPixelData {
            expected,
            actual: pixels.len(),
        });
    }

    let quality = quality.clamp(MIN_ENCODER_QUALITY, MAX_ENCODER_QUALITY);

    let mut buffer = Vec::new();
    JpegEncoder::new_with_quality(&mut buffer, quality)
        .write_image(pixels, width, height, ExtendedColorType::Rgb8)
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer)
}
