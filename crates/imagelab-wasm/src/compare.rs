//! Session and comparison bindings.
//!
//! A session holds one upload; each `run` produces a fresh comparison from
//! the untouched original.
//!
//! ```typescript
//! const session = new JsSession(bytes);
//! const cmp = session.run({ mode: "jpeg", quality: 30 });
//! draw(cmp.render_split(0.5));
//! if (cmp.has_download) {
//!   save(cmp.download_bytes(), cmp.download_file_name, cmp.download_mime);
//! }
//! ```

use crate::transform::parse_request;
use crate::types::{js_error, JsPixelGrid};
use imagelab_core::compare::{self, Comparison};
use imagelab_core::session::Session;
use wasm_bindgen::prelude::*;

/// A loaded upload that transforms are run against.
#[wasm_bindgen]
pub struct JsSession {
    inner: Session,
}

#[wasm_bindgen]
impl JsSession {
    /// Decode `bytes` (JPEG or PNG) and start a session.
    ///
    /// # Errors
    /// Throws if the bytes cannot be decoded.
    #[wasm_bindgen(constructor)]
    pub fn new(bytes: &[u8]) -> Result<JsSession, JsValue> {
        Session::from_upload(bytes)
            .map(|inner| JsSession { inner })
            .map_err(js_error)
    }

    /// The decoded upload (copied).
    #[wasm_bindgen(getter)]
    pub fn original(&self) -> JsPixelGrid {
        JsPixelGrid::from_grid(self.inner.original().clone())
    }

    /// Run a transform request against the original.
    pub fn run(&self, request: JsValue) -> Result<JsComparison, JsValue> {
        let request = parse_request(request)?;
        self.inner
            .run(&request)
            .map(JsComparison::from)
            .map_err(js_error)
    }
}

/// Original and processed images with their labels.
#[wasm_bindgen]
pub struct JsComparison {
    inner: Comparison,
}

impl From<Comparison> for JsComparison {
    fn from(inner: Comparison) -> Self {
        Self { inner }
    }
}

#[wasm_bindgen]
impl JsComparison {
    #[wasm_bindgen(getter)]
    pub fn original(&self) -> JsPixelGrid {
        JsPixelGrid::from_grid(self.inner.original.clone())
    }

    #[wasm_bindgen(getter)]
    pub fn processed(&self) -> JsPixelGrid {
        JsPixelGrid::from_grid(self.inner.processed.clone())
    }

    #[wasm_bindgen(getter)]
    pub fn original_label(&self) -> String {
        self.inner.original_label.to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn processed_label(&self) -> String {
        self.inner.processed_label.to_string()
    }

    /// "Compressed Size: N bytes" for JPEG compression, otherwise undefined.
    #[wasm_bindgen(getter)]
    pub fn size_report(&self) -> Option<String> {
        self.inner.size_report()
    }

    #[wasm_bindgen(getter)]
    pub fn compressed_size(&self) -> Option<usize> {
        self.inner.compressed_size()
    }

    #[wasm_bindgen(getter)]
    pub fn has_download(&self) -> bool {
        self.inner.download().is_some()
    }

    /// Bytes of `compressed.jpg`, if this comparison offers a download.
    pub fn download_bytes(&self) -> Option<Vec<u8>> {
        self.inner.download().map(|d| d.bytes)
    }

    #[wasm_bindgen(getter)]
    pub fn download_file_name(&self) -> String {
        compare::DOWNLOAD_FILE_NAME.to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn download_mime(&self) -> String {
        compare::DOWNLOAD_MIME.to_string()
    }

    /// Original on the left of `position` (0..1), processed on the right.
    pub fn render_split(&self, position: f32) -> Result<JsPixelGrid, JsValue> {
        self.inner
            .render_split(position)
            .map(JsPixelGrid::from_grid)
            .map_err(js_error)
    }
}

/// Overlay two same-sized images split at `position` (0..1).
///
/// # Errors
/// Throws if the images differ in size.
#[wasm_bindgen]
pub fn render_split(
    original: &JsPixelGrid,
    processed: &JsPixelGrid,
    position: f32,
) -> Result<JsPixelGrid, JsValue> {
    compare::render_split(&original.to_grid(), &processed.to_grid(), position)
        .map(JsPixelGrid::from_grid)
        .map_err(js_error)
}
