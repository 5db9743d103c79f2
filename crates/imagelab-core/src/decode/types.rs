//! Core types for image decoding.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error types for image decoding operations.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// No bytes were supplied.
    #[error("Empty image data")]
    Empty,

    /// The file format is not recognized at all.
    #[error("Invalid or unsupported image format")]
    InvalidFormat,

    /// The format was recognized but only JPEG and PNG uploads are accepted.
    #[error("Unsupported image format: {0} (expected JPEG or PNG)")]
    UnsupportedFormat(String),

    /// The image file is corrupted or incomplete.
    #[error("Corrupted or incomplete image file: {0}")]
    CorruptedFile(String),
}

/// Upload formats accepted by the loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    Jpeg,
    Png,
}

impl ImageFormat {
    /// MIME type for this format, as used by upload pickers and downloads.
    pub fn mime_type(self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::Png => "image/png",
        }
    }

    /// Convert to the image crate's format enum.
    pub fn to_image_format(self) -> image::ImageFormat {
        match self {
            ImageFormat::Jpeg => image::ImageFormat::Jpeg,
            ImageFormat::Png => image::ImageFormat::Png,
        }
    }
}

/// An 8-bit RGB image held in memory.
///
/// Every transform reads a `PixelGrid` and produces a new one; the source is
/// never modified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// RGB pixel data in row-major order (3 bytes per pixel).
    /// Length should be width * height * 3.
    pub pixels: Vec<u8>,
}

impl PixelGrid {
    /// Create a new PixelGrid with the given dimensions and pixel data.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            (width as usize) * (height as usize) * 3,
            "Pixel buffer size mismatch"
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Create a grid where every pixel has the same color.
    pub fn filled(width: u32, height: u32, rgb: [u8; 3]) -> Self {
        let count = (width as usize) * (height as usize);
        let pixels = rgb.iter().copied().cycle().take(count * 3).collect();
        Self::new(width, height, pixels)
    }

    /// Create a PixelGrid from an image::RgbImage.
    pub fn from_rgb_image(img: image::RgbImage) -> Self {
        let (width, height) = img.dimensions();
        let pixels = img.into_raw();
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Expand a single-channel image into three identical RGB channels.
    pub fn from_gray_image(img: &image::GrayImage) -> Self {
        let (width, height) = img.dimensions();
        let pixels = img.as_raw().iter().flat_map(|&v| [v, v, v]).collect();
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Convert to an image::RgbImage for further processing.
    ///
    /// Returns `None` if the buffer length does not match the dimensions.
    pub fn to_rgb_image(&self) -> Option<image::RgbImage> {
        image::RgbImage::from_raw(self.width, self.height, self.pixels.clone())
    }

    /// Get the RGB value at (x, y), or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = ((y as usize) * (self.width as usize) + x as usize) * 3;
        let px = self.pixels.get(idx..idx + 3)?;
        Some([px[0], px[1], px[2]])
    }

    /// Get the total number of pixels.
    pub fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Get the size of the pixel buffer in bytes.
    pub fn byte_size(&self) -> usize {
        self.pixels.len()
    }

    /// Check that the buffer holds exactly `width * height` RGB pixels.
    pub fn is_well_formed(&self) -> bool {
        self.byte_size() == self.pixel_count() * 3
    }

    /// Check whether two grids have the same width and height.
    pub fn same_dimensions(&self, other: &PixelGrid) -> bool {
        self.width == other.width && self.height == other.height
    }
}
