//! Upload decoding for JPEG and PNG files.

use std::io::Cursor;

use image::ImageReader;
use log::debug;

use super::{DecodeError, ImageFormat, PixelGrid};

/// Detect the upload format from magic bytes.
///
/// Returns `None` for anything that is not a JPEG or PNG.
pub fn detect_format(bytes: &[u8]) -> Option<ImageFormat> {
    match image::guess_format(bytes).ok()? {
        image::ImageFormat::Jpeg => Some(ImageFormat::Jpeg),
        image::ImageFormat::Png => Some(ImageFormat::Png),
        _ => None,
    }
}

/// Decode uploaded JPEG or PNG bytes into an RGB pixel grid.
///
/// Grayscale, alpha and 16-bit sources are converted to 8-bit RGB. EXIF
/// orientation is not applied; pixels keep their stored order.
///
/// # Errors
///
/// * `DecodeError::Empty` - `bytes` is empty
/// * `DecodeError::InvalidFormat` - the magic bytes match no known format
/// * `DecodeError::UnsupportedFormat` - a known format other than JPEG/PNG
/// * `DecodeError::CorruptedFile` - the data is truncated or malformed
pub fn decode_image(bytes: &[u8]) -> Result<PixelGrid, DecodeError> {
    if bytes.is_empty() {
        return Err(DecodeError::Empty);
    }

    let guessed = image::guess_format(bytes).map_err(|_| DecodeError::InvalidFormat)?;
    let format = match guessed {
        image::ImageFormat::Jpeg => ImageFormat::Jpeg,
        image::ImageFormat::Png => ImageFormat::Png,
        other => return Err(DecodeError::UnsupportedFormat(format!("{:?}", other))),
    };

    let img = decode_with_format(bytes, format)?;
    debug!(
        "decoded {:?} upload: {}x{} ({} bytes)",
        format,
        img.width,
        img.height,
        bytes.len()
    );
    Ok(img)
}

/// Decode bytes that are already known to be in `format`.
///
/// Used by the JPEG re-encode transform to read back its own output.
pub fn decode_with_format(bytes: &[u8], format: ImageFormat) -> Result<PixelGrid, DecodeError> {
    let mut reader = ImageReader::new(Cursor::new(bytes));
    reader.set_format(format.to_image_format());

    let img = reader
        .decode()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    Ok(PixelGrid::from_rgb_image(img.into_rgb8()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::codecs::png::PngEncoder;
    use image::{ExtendedColorType, ImageEncoder};

    // Minimal valid JPEG bytes (1x1 grayscale pixel)
    const MINIMAL_JPEG: &[u8] = &[
        0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x4A, 0x46, 0x49, 0x46, 0x00, 0x01, 0x01, 0x00, 0x00,
        0x01, 0x00, 0x01, 0x00, 0x00, 0xFF, 0xDB, 0x00, 0x43, 0x00, 0x08, 0x06, 0x06, 0x07, 0x06,
        0x05, 0x08, 0x07, 0x07, 0x07, 0x09, 0x09, 0x08, 0x0A, 0x0C, 0x14, 0x0D, 0x0C, 0x0B, 0x0B,
        0x0C, 0x19, 0x12, 0x13, 0x0F, 0x14, 0x1D, 0x1A, 0x1F, 0x1E, 0x1D, 0x1A, 0x1C, 0x1C, 0x20,
        0x24, 0x2E, 0x27, 0x20, 0x22, 0x2C, 0x23, 0x1C, 0x1C, 0x28, 0x37, 0x29, 0x2C, 0x30, 0x31,
        0x34, 0x34, 0x34, 0x1F, 0x27, 0x39, 0x3D, 0x38, 0x32, 0x3C, 0x2E, 0x33, 0x34, 0x32, 0xFF,
        0xC0, 0x00, 0x0B, 0x08, 0x00, 0x01, 0x00, 0x01, 0x01, 0x01, 0x11, 0x00, 0xFF, 0xC4, 0x00,
        0x1F, 0x00, 0x00, 0x01, 0x05, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0A, 0x0B,
        0xFF, 0xC4, 0x00, 0xB5, 0x10, 0x00, 0x02, 0x01, 0x03, 0x03, 0x02, 0x04, 0x03, 0x05, 0x05,
        0x04, 0x04, 0x00, 0x00, 0x01, 0x7D, 0x01, 0x02, 0x03, 0x00, 0x04, 0x11, 0x05, 0x12, 0x21,
        0x31, 0x41, 0x06, 0x13, 0x51, 0x61, 0x07, 0x22, 0x71, 0x14, 0x32, 0x81, 0x91, 0xA1, 0x08,
        0x23, 0x42, 0xB1, 0xC1, 0x15, 0x52, 0xD1, 0xF0, 0x24, 0x33, 0x62, 0x72, 0x82, 0x09, 0x0A,
        0x16, 0x17, 0x18, 0x19, 0x1A, 0x25, 0x26, 0x27, 0x28, 0x29, 0x2A, 0x34, 0x35, 0x36, 0x37,
        0x38, 0x39, 0x3A, 0x43, 0x44, 0x45, 0x46, 0x47, 0x48, 0x49, 0x4A, 0x53, 0x54, 0x55, 0x56,
        0x57, 0x58, 0x59, 0x5A, 0x63, 0x64, 0x65, 0x66, 0x67, 0x68, 0x69, 0x6A, 0x73, 0x74, 0x75,
        0x76, 0x77, 0x78, 0x79, 0x7A, 0x83, 0x84, 0x85, 0x86, 0x87, 0x88, 0x89, 0x8A, 0x92, 0x93,
        0x94, 0x95, 0x96, 0x97, 0x98, 0x99, 0x9A, 0xA2, 0xA3, 0xA4, 0xA5, 0xA6, 0xA7, 0xA8, 0xA9,
        0xAA, 0xB2, 0xB3, 0xB4, 0xB5, 0xB6, 0xB7, 0xB8, 0xB9, 0xBA, 0xC2, 0xC3, 0xC4, 0xC5, 0xC6,
        0xC7, 0xC8, 0xC9, 0xCA, 0xD2, 0xD3, 0xD4, 0xD5, 0xD6, 0xD7, 0xD8, 0xD9, 0xDA, 0xE1, 0xE2,
        0xE3, 0xE4, 0xE5, 0xE6, 0xE7, 0xE8, 0xE9, 0xEA, 0xF1, 0xF2, 0xF3, 0xF4, 0xF5, 0xF6, 0xF7,
        0xF8, 0xF9, 0xFA, 0xFF, 0xDA, 0x00, 0x08, 0x01, 0x01, 0x00, 0x00, 0x3F, 0x00, 0xFB, 0xD5,
        0xDB, 0x20, 0xA8, 0xF1, 0x7E, 0xFF, 0xD9,
    ];

    fn png_bytes(width: u32, height: u32, data: &[u8], color: ExtendedColorType) -> Vec<u8> {
        let mut out = Vec::new();
        PngEncoder::new(&mut out)
            .write_image(data, width, height, color)
            .unwrap();
        out
    }

    #[test]
    fn test_decode_valid_jpeg() {
        let img = decode_image(MINIMAL_JPEG).unwrap();
        assert_eq!(img.width, 1);
        assert_eq!(img.height, 1);
        assert_eq!(img.pixels.len(), 3); // grayscale source expanded to RGB
    }

    #[test]
    fn test_decode_rgb_png_is_lossless() {
        let data = vec![255, 0, 0, 0, 255, 0, 0, 0, 255, 10, 20, 30];
        let bytes = png_bytes(2, 2, &data, ExtendedColorType::Rgb8);

        let img = decode_image(&bytes).unwrap();
        assert_eq!((img.width, img.height), (2, 2));
        assert_eq!(img.pixels, data);
    }

    #[test]
    fn test_decode_rgba_png_drops_alpha() {
        let data = vec![1, 2, 3, 0, 4, 5, 6, 255];
        let bytes = png_bytes(2, 1, &data, ExtendedColorType::Rgba8);

        let img = decode_image(&bytes).unwrap();
        assert_eq!(img.pixels, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_decode_gray_png_expands_channels() {
        let bytes = png_bytes(2, 1, &[7, 200], ExtendedColorType::L8);
        let img = decode_image(&bytes).unwrap();
        assert_eq!(img.pixels, vec![7, 7, 7, 200, 200, 200]);
    }

    #[test]
    fn test_detect_format() {
        assert_eq!(detect_format(MINIMAL_JPEG), Some(ImageFormat::Jpeg));
        let png = png_bytes(1, 1, &[0, 0, 0], ExtendedColorType::Rgb8);
        assert_eq!(detect_format(&png), Some(ImageFormat::Png));
        assert_eq!(detect_format(b"GIF89a\x01\x00\x01\x00"), None);
        assert_eq!(detect_format(&[0x00, 0x01]), None);
    }

    #[test]
    fn test_decode_empty_bytes() {
        assert!(matches!(decode_image(&[]), Err(DecodeError::Empty)));
    }

    #[test]
    fn test_decode_garbage_is_invalid_format() {
        let result = decode_image(&[0x00, 0x01, 0x02, 0x03]);
        assert!(matches!(result, Err(DecodeError::InvalidFormat)));
    }

    #[test]
    fn test_decode_gif_is_unsupported() {
        let result = decode_image(b"GIF89a\x01\x00\x01\x00\x00\x00\x00");
        match result {
            Err(DecodeError::UnsupportedFormat(name)) => assert_eq!(name, "Gif"),
            other => panic!("Expected UnsupportedFormat, got: {:?}", other),
        }
    }

    #[test]
    fn test_decode_truncated_jpeg() {
        let truncated = &MINIMAL_JPEG[0..20];
        let result = decode_image(truncated);
        assert!(matches!(result, Err(DecodeError::CorruptedFile(_))));
    }

    #[test]
    fn test_decode_with_format_mismatch_fails() {
        let png = png_bytes(1, 1, &[0, 0, 0], ExtendedColorType::Rgb8);
        assert!(decode_with_format(&png, ImageFormat::Jpeg).is_err());
    }
}
