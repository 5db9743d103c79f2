//! WASM-compatible wrapper types for image data.
//!
//! This module provides JavaScript-friendly types that wrap the core Imagelab types,
//! handling the conversion between Rust and JavaScript data representations.

use std::fmt::Display;

use imagelab_core::decode::PixelGrid;
use wasm_bindgen::prelude::*;

/// An RGB pixel grid wrapper for JavaScript.
///
/// # Memory Management
///
/// The pixel data is stored in WASM memory. When you call `pixels()`, a copy is made
/// to JavaScript memory as a `Uint8Array`.
///
/// The `free()` method can be called to explicitly release WASM memory, but this is
/// optional as wasm-bindgen's finalizer will handle cleanup automatically.
#[wasm_bindgen]
pub struct JsPixelGrid {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

#[wasm_bindgen]
impl JsPixelGrid {
    /// Create a new JsPixelGrid from dimensions and pixel data.
    ///
    /// # Arguments
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    /// * `pixels` - RGB pixel data (3 bytes per pixel, row-major order)
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> JsPixelGrid {
        JsPixelGrid {
            width,
            height,
            pixels,
        }
    }

    /// Get the image width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the number of bytes in the pixel buffer (width * height * 3 for RGB)
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.pixels.len()
    }

    /// Returns RGB pixel data as Uint8Array (copied).
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }

    /// Returns RGBA pixel data with opaque alpha, ready for `ImageData`.
    pub fn rgba_pixels(&self) -> Vec<u8> {
        self.pixels
            .chunks_exact(3)
            .flat_map(|px| [px[0], px[1], px[2], 255])
            .collect()
    }

    /// Explicitly free WASM memory.
    pub fn free(self) {
        // Dropping self releases the memory
    }
}

impl JsPixelGrid {
    pub(crate) fn from_grid(img: PixelGrid) -> Self {
        Self {
            width: img.width,
            height: img.height,
            pixels: img.pixels,
        }
    }

    /// Convert back to a core PixelGrid (clones the pixel data).
    pub(crate) fn to_grid(&self) -> PixelGrid {
        PixelGrid {
            width: self.width,
            height: self.height,
            pixels: self.pixels.clone(),
        }
    }
}

/// Turn a core error into a thrown JS error, logging it to the console.
pub(crate) fn js_error(err: impl Display) -> JsValue {
    let message = err.to_string();
    #[cfg(target_arch = "wasm32")]
    web_sys::console::error_1(&JsValue::from_str(&message));
    JsValue::from_str(&message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_js_pixel_grid_creation() {
        let img = JsPixelGrid::new(100, 50, vec![0u8; 100 * 50 * 3]);
        assert_eq!(img.width(), 100);
        assert_eq!(img.height(), 50);
        assert_eq!(img.byte_length(), 15000);
    }

    #[test]
    fn test_js_pixel_grid_pixels() {
        let pixels = vec![255u8, 128, 64, 32, 16, 8];
        let img = JsPixelGrid::new(2, 1, pixels.clone());
        assert_eq!(img.pixels(), pixels);
    }

    #[test]
    fn test_rgba_pixels() {
        let img = JsPixelGrid::new(2, 1, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(img.rgba_pixels(), vec![1, 2, 3, 255, 4, 5, 6, 255]);
    }

    #[test]
    fn test_grid_conversion() {
        let grid = PixelGrid::filled(5, 4, [9, 8, 7]);
        let js = JsPixelGrid::from_grid(grid.clone());
        assert_eq!(js.width(), 5);
        assert_eq!(js.height(), 4);
        assert_eq!(js.to_grid(), grid);
    }
}
