//! Transform dispatch.
//!
//! [`apply_transform`] maps a [`Transform`] request onto one of the eight
//! image operations. The source grid is only read; each call allocates a new
//! output grid. Parameters are clamped to their declared ranges first.
//!
//! | Mode | Operation |
//! |---|---|
//! | Threshold | [`point::threshold`] |
//! | PowerLaw | [`point::power_law`] |
//! | HistogramEqualization | [`equalize::equalize_histogram`] |
//! | GaussianBlur | [`blur::gaussian_blur`] |
//! | Canny | [`edges::detect_edges`] |
//! | SaltAndPepper | [`noise::salt_and_pepper`] |
//! | Complement | [`point::complement`] |
//! | Jpeg | [`compress::jpeg_round_trip`] |

pub mod blur;
pub mod compress;
pub mod edges;
pub mod equalize;
pub mod noise;
pub mod point;

use log::debug;
use thiserror::Error;

use crate::decode::{DecodeError, PixelGrid};
use crate::encode::EncodeError;
use crate::params::Transform;

pub use blur::{gaussian_blur, gaussian_kernel};
pub use compress::jpeg_round_trip;
pub use edges::detect_edges;
pub use equalize::equalize_histogram;
pub use noise::{add_salt_and_pepper, median_denoise, salt_and_pepper};
pub use point::{complement, power_law, threshold};

/// Errors produced while running a transform.
#[derive(Debug, Error)]
pub enum TransformError {
    /// The pixel buffer does not match the grid's dimensions.
    #[error("Invalid pixel grid: {width}x{height} with {len} bytes")]
    InvalidImage { width: u32, height: u32, len: usize },

    /// JPEG encoding failed.
    #[error(transparent)]
    Encode(#[from] EncodeError),

    /// Decoding the re-encoded JPEG failed.
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// Encoded output of the JPEG compression mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressedJpeg {
    /// The encoded file, byte for byte.
    pub bytes: Vec<u8>,
}

impl CompressedJpeg {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Encoded size in bytes.
    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

/// Output of a single transform run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformResult {
    pub processed: PixelGrid,
    /// Only set by the JPEG compression mode.
    pub compressed: Option<CompressedJpeg>,
}

impl TransformResult {
    fn image(processed: PixelGrid) -> Self {
        Self {
            processed,
            compressed: None,
        }
    }
}

/// Run `transform` on `image`.
///
/// # Errors
///
/// Returns `TransformError::InvalidImage` if the grid's buffer length does
/// not match its dimensions, or an encode/decode error from the JPEG mode.
pub fn apply_transform(
    image: &PixelGrid,
    transform: &Transform,
) -> Result<TransformResult, TransformError> {
    check_grid(image)?;
    let transform = transform.sanitized();
    debug!(
        "applying {} to {}x{} image",
        transform.mode().key(),
        image.width,
        image.height
    );

    let result = match transform {
        Transform::Threshold(p) => TransformResult::image(threshold(image, p.low, p.high)),
        Transform::PowerLaw(p) => TransformResult::image(power_law(image, p.gamma)),
        Transform::HistogramEqualization => TransformResult::image(equalize_histogram(image)),
        Transform::GaussianBlur(p) => TransformResult::image(gaussian_blur(image, p.kernel_size)?),
        Transform::Canny => TransformResult::image(detect_edges(image)?),
        Transform::SaltAndPepper(p) => {
            TransformResult::image(salt_and_pepper(image, p.amount, p.apply_median, p.seed)?)
        }
        Transform::Complement => TransformResult::image(complement(image)),
        Transform::Jpeg(p) => {
            let (processed, jpeg) = jpeg_round_trip(image, p.quality)?;
            debug!("jpeg quality {} -> {} bytes", p.quality, jpeg.size());
            TransformResult {
                processed,
                compressed: Some(jpeg),
            }
        }
    };

    Ok(result)
}

fn check_grid(image: &PixelGrid) -> Result<(), TransformError> {
    if !image.is_well_formed() {
        return Err(TransformError::InvalidImage {
            width: image.width,
            height: image.height,
            len: image.pixels.len(),
        });
    }
    Ok(())
}

pub(crate) fn to_rgb(image: &PixelGrid) -> Result<image::RgbImage, TransformError> {
    image.to_rgb_image().ok_or(TransformError::InvalidImage {
        width: image.width,
        height: image.height,
        len: image.pixels.len(),
    })
}
