//! Upload decoding WASM bindings.
//!
//! # Example
//!
//! ```typescript
//! import { load_image, accepted_mime_types } from '@imagelab/wasm';
//!
//! input.accept = accepted_mime_types().join(',');
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const image = load_image(bytes);
//! console.log(`Loaded ${image.width}x${image.height}`);
//! ```

use crate::types::{js_error, JsPixelGrid};
use imagelab_core::decode::{self, ImageFormat};
use wasm_bindgen::prelude::*;

/// Decode an uploaded JPEG or PNG file.
///
/// # Errors
///
/// Throws if the bytes are empty, not an image, a format other than
/// JPEG/PNG, or corrupted.
#[wasm_bindgen]
pub fn load_image(bytes: &[u8]) -> Result<JsPixelGrid, JsValue> {
    decode::decode_image(bytes)
        .map(JsPixelGrid::from_grid)
        .map_err(js_error)
}

/// MIME type of the upload, or `undefined` if it is not JPEG/PNG.
#[wasm_bindgen]
pub fn detect_mime_type(bytes: &[u8]) -> Option<String> {
    decode::detect_format(bytes).map(|f| f.mime_type().to_string())
}

/// MIME types the uploader should accept.
#[wasm_bindgen]
pub fn accepted_mime_types() -> Vec<String> {
    [ImageFormat::Jpeg, ImageFormat::Png]
        .iter()
        .map(|f| f.mime_type().to_string())
        .collect()
}


/// WASM-specific tests that require JsValue.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use imagelab_core::decode::PixelGrid;
    use imagelab_core::encode::encode_jpeg;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_load_image() {
        let jpeg = encode_jpeg(&PixelGrid::filled(6, 3, [1, 2, 3]), 90).unwrap();
        let img = load_image(&jpeg).unwrap();
        assert_eq!(img.width(), 6);
        assert_eq!(img.height(), 3);
    }

    #[wasm_bindgen_test]
    fn test_load_invalid_image() {
        assert!(load_image(&[0x00, 0x01, 0x02]).is_err());
    }
}
