//! Per-pixel transforms: luma thresholding, power-law brightness and
//! complement.

use crate::decode::PixelGrid;
use crate::luminance::luma_u8;

/// Binary mask of pixels whose luma falls in `[low, high]`.
///
/// Matching pixels become white, the rest black, on all three channels.
/// An inverted band (`low > high`) matches nothing.
pub fn threshold(image: &PixelGrid, low: u8, high: u8) -> PixelGrid {
    let pixels = image
        .pixels
        .chunks_exact(3)
        .flat_map(|px| {
            let y = luma_u8(px[0], px[1], px[2]);
            let v = if (low..=high).contains(&y) { 255 } else { 0 };
            [v, v, v]
        })
        .collect();
    PixelGrid::new(image.width, image.height, pixels)
}

/// Build the power-law lookup table: `trunc((v / 255)^gamma * 255)`.
pub fn power_law_lut(gamma: f64) -> [u8; 256] {
    let mut lut = [0u8; 256];
    for (v, slot) in lut.iter_mut().enumerate() {
        let normalized = v as f64 / 255.0;
        *slot = (normalized.powf(gamma) * 255.0).clamp(0.0, 255.0) as u8;
    }
    lut
}

/// Gamma correction. `gamma < 1` brightens, `gamma > 1` darkens.
pub fn power_law(image: &PixelGrid, gamma: f64) -> PixelGrid {
    let lut = power_law_lut(gamma);
    let pixels = image.pixels.iter().map(|&v| lut[v as usize]).collect();
    PixelGrid::new(image.width, image.height, pixels)
}

/// Bitwise complement: `255 - v` on every channel.
pub fn complement(image: &PixelGrid) -> PixelGrid {
    let pixels = image.pixels.iter().map(|&v| !v).collect();
    PixelGrid::new(image.width, image.height, pixels)
}
