//! Image loading for Imagelab.
//!
//! Uploaded files arrive as raw bytes. This module sniffs the format,
//! accepts JPEG and PNG, and turns the data into an RGB [`PixelGrid`]
//! that every transform works on.
//!
//! All operations are synchronous and single-threaded within WASM.

mod loader;
mod types;

pub use loader::{decode_image, decode_with_format, detect_format};
pub use types::{DecodeError, ImageFormat, PixelGrid};
