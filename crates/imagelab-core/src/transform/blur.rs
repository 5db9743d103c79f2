//! Gaussian blur with an explicit kernel size.

use image::{ImageBuffer, Rgb};
use imageproc::filter::separable_filter_equal;

use super::TransformError;
use crate::decode::PixelGrid;

// Binomial taps used for the small kernel sizes when sigma is derived
// automatically.
const TAPS_1: [f32; 1] = [1.0];
const TAPS_3: [f32; 3] = [0.25, 0.5, 0.25];
const TAPS_5: [f32; 5] = [0.0625, 0.25, 0.375, 0.25, 0.0625];
const TAPS_7: [f32; 7] = [
    0.03125, 0.109375, 0.21875, 0.28125, 0.21875, 0.109375, 0.03125,
];

/// Standard deviation derived from an odd kernel size.
pub fn sigma_for_kernel(size: u32) -> f32 {
    0.3 * ((size as f32 - 1.0) * 0.5 - 1.0) + 0.8
}

/// Normalized 1-D Gaussian kernel of odd length `size`.
///
/// Even sizes are rounded up to the next odd length.
pub fn gaussian_kernel(size: u32) -> Vec<f32> {
    let size = size.max(1) | 1;
    match size {
        1 => return TAPS_1.to_vec(),
        3 => return TAPS_3.to_vec(),
        5 => return TAPS_5.to_vec(),
        7 => return TAPS_7.to_vec(),
        _ => {}
    }

    let sigma = sigma_for_kernel(size);
    let center = (size / 2) as f32;
    let denom = 2.0 * sigma * sigma;
    let mut taps: Vec<f32> = (0..size)
        .map(|i| {
            let d = i as f32 - center;
            (-(d * d) / denom).exp()
        })
        .collect();

    let sum: f32 = taps.iter().sum();
    for t in &mut taps {
        *t /= sum;
    }
    taps
}

/// Blur with a `kernel_size` x `kernel_size` Gaussian.
///
/// Edge pixels are replicated past the border and the output keeps the input
/// dimensions. A kernel size of 1 returns the image unchanged.
///
/// Both passes run in `f32` and the result is rounded once at the end.
pub fn gaussian_blur(image: &PixelGrid, kernel_size: u32) -> Result<PixelGrid, TransformError> {
    let kernel = gaussian_kernel(kernel_size);
    if kernel.len() == 1 {
        return Ok(image.clone());
    }

    let levels = image.pixels.iter().map(|&v| f32::from(v)).collect();
    let float: ImageBuffer<Rgb<f32>, Vec<f32>> =
        ImageBuffer::from_raw(image.width, image.height, levels).ok_or(
            TransformError::InvalidImage {
                width: image.width,
                height: image.height,
                len: image.pixels.len(),
            },
        )?;

    let blurred = separable_filter_equal(&float, &kernel);
    let pixels = blurred
        .into_raw()
        .into_iter()
        .map(|v| v.round().clamp(0.0, 255.0) as u8)
        .collect();
    Ok(PixelGrid::new(image.width, image.height, pixels))
}
