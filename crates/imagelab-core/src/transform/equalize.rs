//! Contrast enhancement by equalizing the luma histogram.

use crate::decode::PixelGrid;
use crate::histogram::equalize_channel;
use crate::luminance::{rgb_to_yuv, yuv_to_rgb};

/// Equalize the Y channel in YUV space and convert back to RGB.
///
/// Chroma is untouched, so hues are preserved while global contrast is
/// stretched across the full 0-255 range.
pub fn equalize_histogram(image: &PixelGrid) -> PixelGrid {
    let yuv: Vec<[u8; 3]> = image
        .pixels
        .chunks_exact(3)
        .map(|px| rgb_to_yuv(px[0], px[1], px[2]))
        .collect();

    let luma: Vec<u8> = yuv.iter().map(|p| p[0]).collect();
    let equalized = equalize_channel(&luma);

    let pixels = yuv
        .iter()
        .zip(equalized)
        .flat_map(|(&[_, u, v], y)| yuv_to_rgb(y, u, v))
        .collect();
    PixelGrid::new(image.width, image.height, pixels)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_gray_levels_stretch_to_black_and_white() {
        let img = PixelGrid::new(
            2,
            2,
            vec![100, 100, 100, 150, 150, 150, 100, 100, 100, 150, 150, 150],
        );
        let out = equalize_histogram(&img);
        assert_eq!(
            out.pixels,
            vec![0, 0, 0, 255, 255, 255, 0, 0, 0, 255, 255, 255]
        );
    }

    #[test]
    fn test_uniform_gray_unchanged() {
        let img = PixelGrid::filled(4, 4, [128, 128, 128]);
        assert_eq!(equalize_histogram(&img), img);
    }

    #[test]
    fn test_gray_stays_gray() {
        let pixels: Vec<u8> = (0..64u8).flat_map(|v| [v + 60, v + 60, v + 60]).collect();
        let img = PixelGrid::new(8, 8, pixels);
        let out = equalize_histogram(&img);
        for px in out.pixels.chunks_exact(3) {
            assert_eq!(px[0], px[1]);
            assert_eq!(px[1], px[2]);
        }
        // Narrow 60..=123 range is stretched to the full range
        assert_eq!(out.pixel(0, 0), Some([0, 0, 0]));
        assert_eq!(out.pixel(7, 7), Some([255, 255, 255]));
    }

    #[test]
    fn test_color_keeps_channel_order() {
        // Reddish pixels stay reddish after equalization
        let img = PixelGrid::new(2, 1, vec![120, 60, 50, 160, 100, 90]);
        let out = equalize_histogram(&img);
        for px in out.pixels.chunks_exact(3) {
            assert!(px[0] >= px[1] && px[0] >= px[2], "{:?}", px);
        }
    }

    #[test]
    fn test_dimensions_preserved() {
        let img = PixelGrid::filled(7, 3, [10, 20, 30]);
        let out = equalize_histogram(&img);
        assert_eq!((out.width, out.height), (7, 3));
        assert_eq!(out.byte_size(), img.byte_size());
    }
}
