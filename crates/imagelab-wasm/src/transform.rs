//! Transform dispatch bindings.
//!
//! # Example (TypeScript)
//!
//! ```typescript
//! const result = apply_transform(image, { mode: "jpeg", quality: 25 });
//! show(result.processed);
//! if (result.compressed_size !== undefined) {
//!   console.log(`${result.compressed_size} bytes`);
//! }
//! ```

use crate::types::{js_error, JsPixelGrid};
use imagelab_core::params::Transform;
use imagelab_core::transform::{self, TransformResult};
use wasm_bindgen::prelude::*;

/// Output of a single transform run.
#[wasm_bindgen]
pub struct JsTransformResult {
    processed: JsPixelGrid,
    compressed: Option<Vec<u8>>,
}

#[wasm_bindgen]
impl JsTransformResult {
    /// The processed image (copied).
    #[wasm_bindgen(getter)]
    pub fn processed(&self) -> JsPixelGrid {
        JsPixelGrid::from_grid(self.processed.to_grid())
    }

    /// Encoded size in bytes; only set for JPEG compression.
    #[wasm_bindgen(getter)]
    pub fn compressed_size(&self) -> Option<usize> {
        self.compressed.as_ref().map(Vec::len)
    }

    /// Encoded JPEG bytes; only set for JPEG compression.
    pub fn compressed_bytes(&self) -> Option<Vec<u8>> {
        self.compressed.clone()
    }
}

impl From<TransformResult> for JsTransformResult {
    fn from(result: TransformResult) -> Self {
        Self {
            processed: JsPixelGrid::from_grid(result.processed),
            compressed: result.compressed.map(|jpeg| jpeg.bytes),
        }
    }
}

/// Apply a transform request to an image.
///
/// `request` is an object such as `{ mode: "threshold", low: 100, high: 150 }`.
/// Omitted parameters take their defaults and out-of-range values are
/// clamped.
///
/// # Errors
///
/// Throws if the request names an unknown mode or has mistyped fields, or
/// if JPEG encoding fails.
#[wasm_bindgen]
pub fn apply_transform(
    image: &JsPixelGrid,
    request: JsValue,
) -> Result<JsTransformResult, JsValue> {
    let request = parse_request(request)?;
    run(image, &request).map_err(js_error)
}

pub(crate) fn parse_request(request: JsValue) -> Result<Transform, JsValue> {
    serde_wasm_bindgen::from_value(request)
        .map_err(|e| js_error(format!("Invalid transform request: {}", e)))
}

fn run(
    image: &JsPixelGrid,
    request: &Transform,
) -> Result<JsTransformResult, transform::TransformError> {
    transform::apply_transform(&image.to_grid(), request).map(JsTransformResult::from)
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn request(json: &str) -> JsValue {
        js_sys::JSON::parse(json).unwrap()
    }

    #[wasm_bindgen_test]
    fn test_apply_transform_from_js_object() {
        let img = JsPixelGrid::new(4, 4, vec![128u8; 48]);
        let req = request(r#"{"mode":"threshold","low":200,"high":255}"#);
        let result = apply_transform(&img, req).unwrap();
        assert_eq!(result.processed().pixels(), vec![0u8; 48]);
    }

    #[wasm_bindgen_test]
    fn test_apply_transform_saturates_out_of_range_quality() {
        let img = JsPixelGrid::new(8, 8, vec![128u8; 192]);
        let result = apply_transform(&img, request(r#"{"mode":"jpeg","quality":300}"#)).unwrap();
        assert!(result.compressed_size().is_some());
    }

    #[wasm_bindgen_test]
    fn test_apply_transform_unknown_mode() {
        let img = JsPixelGrid::new(1, 1, vec![0, 0, 0]);
        assert!(apply_transform(&img, request(r#"{"mode":"sepia"}"#)).is_err());
    }
}
