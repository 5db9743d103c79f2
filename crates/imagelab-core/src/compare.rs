//! Side-by-side comparison of an original and its processed form.
//!
//! A [`Comparison`] carries both grids and their labels. When the processed
//! image came from JPEG compression it also reports the encoded size and
//! offers the bytes as a `compressed.jpg` download. No other mode has a
//! download.

use thiserror::Error;

use crate::decode::PixelGrid;
use crate::transform::{CompressedJpeg, TransformResult};

pub const ORIGINAL_LABEL: &str = "Original";
pub const PROCESSED_LABEL: &str = "Processed";

pub const DOWNLOAD_FILE_NAME: &str = "compressed.jpg";
pub const DOWNLOAD_MIME: &str = "image/jpeg";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CompareError {
    /// The two images cannot be overlaid.
    #[error("Cannot compare {left_width}x{left_height} with {right_width}x{right_height}")]
    DimensionMismatch {
        left_width: u32,
        left_height: u32,
        right_width: u32,
        right_height: u32,
    },

    /// A pixel buffer that does not hold `width * height` RGB pixels.
    #[error("Invalid image: {width}x{height} with {len} bytes")]
    InvalidImage { width: u32, height: u32, len: usize },
}

/// A file offered for download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    pub file_name: &'static str,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

/// Original and processed images, ready to be shown together.
#[derive(Debug, Clone)]
pub struct Comparison {
    pub original: PixelGrid,
    pub processed: PixelGrid,
    pub original_label: &'static str,
    pub processed_label: &'static str,
    compressed: Option<CompressedJpeg>,
}

impl Comparison {
    pub fn new(original: PixelGrid, result: TransformResult) -> Self {
        Self {
            original,
            processed: result.processed,
            original_label: ORIGINAL_LABEL,
            processed_label: PROCESSED_LABEL,
            compressed: result.compressed,
        }
    }

    /// Encoded size in bytes, for JPEG compression only.
    pub fn compressed_size(&self) -> Option<usize> {
        self.compressed.as_ref().map(CompressedJpeg::size)
    }

    /// Human-readable size line, for JPEG compression only.
    pub fn size_report(&self) -> Option<String> {
        self.compressed_size()
            .map(|size| format!("Compressed Size: {} bytes", size))
    }

    /// The encoded JPEG as a downloadable file, for JPEG compression only.
    pub fn download(&self) -> Option<Download> {
        self.compressed.as_ref().map(|jpeg| Download {
            file_name: DOWNLOAD_FILE_NAME,
            mime: DOWNLOAD_MIME,
            bytes: jpeg.bytes.clone(),
        })
    }

    /// Slider view at `position`; see [`render_split`].
    pub fn render_split(&self, position: f32) -> Result<PixelGrid, CompareError> {
        render_split(&self.original, &self.processed, position)
    }
}

/// Compose the slider view of two equally sized images.
///
/// Columns left of `position * width` come from `original` and the rest
/// from `processed`. `position` is clamped to `[0, 1]`; NaN is treated as 0.5.
pub fn render_split(
    original: &PixelGrid,
    processed: &PixelGrid,
    position: f32,
) -> Result<PixelGrid, CompareError> {
    for grid in [original, processed] {
        if !grid.is_well_formed() {
            return Err(CompareError::InvalidImage {
                width: grid.width,
                height: grid.height,
                len: grid.pixels.len(),
            });
        }
    }
    if !original.same_dimensions(processed) {
        return Err(CompareError::DimensionMismatch {
            left_width: original.width,
            left_height: original.height,
            right_width: processed.width,
            right_height: processed.height,
        });
    }

    let position = if position.is_nan() {
        0.5
    } else {
        position.clamp(0.0, 1.0)
    };
    let split = ((original.width as f32 * position).round() as usize).min(original.width as usize);

    let row_len = original.width as usize * 3;
    let cut = split * 3;
    let mut pixels = Vec::with_capacity(original.pixels.len());
    for (left, right) in original
        .pixels
        .chunks_exact(row_len.max(1))
        .zip(processed.pixels.chunks_exact(row_len.max(1)))
    {
        pixels.extend_from_slice(&left[..cut]);
        pixels.extend_from_slice(&right[cut..]);
    }

    Ok(PixelGrid::new(original.width, original.height, pixels))
}
