//! Imagelab WASM - WebAssembly bindings for Imagelab
//!
//! This crate exposes the imagelab-core transforms to JavaScript/TypeScript
//! applications.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper types for image data
//! - `decode` - Upload decoding bindings (JPEG, PNG)
//! - `params` - Mode list, parameter schema and default requests
//! - `transform` - Single transform dispatch
//! - `compare` - Sessions, comparisons, size report and download
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsSession, default_request } from '@imagelab/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const session = new JsSession(bytes);
//! const request = default_request("histogram_equalization");
//! const cmp = session.run(request);
//! console.log(`${cmp.original_label} vs ${cmp.processed_label}`);
//! ```

use wasm_bindgen::prelude::*;

mod compare;
mod decode;
mod params;
mod transform;
mod types;

// Re-export public types
pub use compare::{render_split, JsComparison, JsSession};
pub use decode::{accepted_mime_types, detect_mime_type, load_image};
pub use params::{default_request, mode_keys, mode_labels, param_schema};
pub use transform::{apply_transform, JsTransformResult};
pub use types::JsPixelGrid;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
