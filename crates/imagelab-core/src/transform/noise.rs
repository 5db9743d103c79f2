//! Salt-and-pepper noise and median denoising.

use imageproc::filter::median_filter;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{to_rgb, TransformError};
use crate::decode::PixelGrid;

/// Replace a random fraction of pixels with pure black or pure white.
///
/// Each pixel is picked independently with probability `amount` (clamped to
/// `[0, 1]`); a picked pixel turns white or black with equal odds on all
/// three channels. The same `seed` always produces the same noise.
pub fn add_salt_and_pepper(image: &PixelGrid, amount: f64, seed: u64) -> PixelGrid {
    let amount = if amount.is_finite() {
        amount.clamp(0.0, 1.0)
    } else {
        0.0
    };

    let mut rng = StdRng::seed_from_u64(seed);
    let mut pixels = image.pixels.clone();
    for px in pixels.chunks_exact_mut(3) {
        if rng.gen::<f64>() < amount {
            let v = if rng.gen_bool(0.5) { 255 } else { 0 };
            px.fill(v);
        }
    }
    PixelGrid::new(image.width, image.height, pixels)
}

/// 3x3 median filter applied to each channel independently.
///
/// Border pixels use replicated edges.
pub fn median_denoise(image: &PixelGrid) -> Result<PixelGrid, TransformError> {
    let rgb = to_rgb(image)?;
    Ok(PixelGrid::from_rgb_image(median_filter(&rgb, 1, 1)))
}

/// Noise injection followed by an optional median pass.
pub fn salt_and_pepper(
    image: &PixelGrid,
    amount: f64,
    apply_median: bool,
    seed: u64,
) -> Result<PixelGrid, TransformError> {
    let noisy = add_salt_and_pepper(image, amount, seed);
    if apply_median {
        median_denoise(&noisy)
    } else {
        Ok(noisy)
    }
}
