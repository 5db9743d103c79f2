//! Lossy JPEG re-encoding.

use super::{CompressedJpeg, TransformError};
use crate::decode::{decode_with_format, ImageFormat, PixelGrid};
use crate::encode::encode_jpeg;

/// Encode at `quality`, then decode the result.
///
/// Returns the decoded pixels (what the compressed file looks like) and the
/// encoded bytes exactly as they would be saved.
pub fn jpeg_round_trip(
    image: &PixelGrid,
    quality: u8,
) -> Result<(PixelGrid, CompressedJpeg), TransformError> {
    let bytes = encode_jpeg(image, quality)?;
    let decoded = decode_with_format(&bytes, ImageFormat::Jpeg)?;
    Ok((decoded, CompressedJpeg::new(bytes)))
}
