//! Luma and YUV conversions using ITU-R BT.601 coefficients.
//!
//! Thresholding and edge detection work on BT.601 luma; histogram
//! equalization round-trips through analog YUV so chroma survives while
//! the luma channel is remapped.

/// ITU-R BT.601 coefficient for red channel in luma calculation.
pub const LUMA_R: f32 = 0.299;

/// ITU-R BT.601 coefficient for green channel in luma calculation.
pub const LUMA_G: f32 = 0.587;

/// ITU-R BT.601 coefficient for blue channel in luma calculation.
pub const LUMA_B: f32 = 0.114;

const U_SCALE: f32 = 0.492;
const V_SCALE: f32 = 0.877;
const CHROMA_OFFSET: f32 = 128.0;

/// Calculate luma from u8 RGB values (0 to 255), rounded to the nearest level.
#[inline]
pub fn luma_u8(r: u8, g: u8, b: u8) -> u8 {
    let y = LUMA_R * r as f32 + LUMA_G * g as f32 + LUMA_B * b as f32;
    y.clamp(0.0, 255.0).round() as u8
}

/// Convert an RGB pixel to YUV with chroma centered on 128.
#[inline]
pub fn rgb_to_yuv(r: u8, g: u8, b: u8) -> [u8; 3] {
    let (rf, bf) = (r as f32, b as f32);
    let y = LUMA_R * rf + LUMA_G * g as f32 + LUMA_B * bf;
    let u = U_SCALE * (bf - y) + CHROMA_OFFSET;
    let v = V_SCALE * (rf - y) + CHROMA_OFFSET;
    [to_u8(y), to_u8(u), to_u8(v)]
}

/// Convert a YUV pixel (chroma centered on 128) back to RGB.
#[inline]
pub fn yuv_to_rgb(y: u8, u: u8, v: u8) -> [u8; 3] {
    let y = y as f32;
    let u = u as f32 - CHROMA_OFFSET;
    let v = v as f32 - CHROMA_OFFSET;
    let r = y + v / V_SCALE;
    let b = y + u / U_SCALE;
    let g = (y - LUMA_R * r - LUMA_B * b) / LUMA_G;
    [to_u8(r), to_u8(g), to_u8(b)]
}

/// Extract the luma plane of a row-major RGB buffer.
pub fn luma_plane(pixels: &[u8]) -> Vec<u8> {
    pixels
        .chunks_exact(3)
        .map(|px| luma_u8(px[0], px[1], px[2]))
        .collect()
}

#[inline]
fn to_u8(value: f32) -> u8 {
    value.clamp(0.0, 255.0).round() as u8
}
