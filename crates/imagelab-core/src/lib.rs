//! Imagelab Core - Image transformation library
//!
//! This crate loads an uploaded JPEG/PNG into an RGB [`PixelGrid`], applies
//! one of eight pixel-level transforms selected by a [`Transform`] request,
//! and pairs the result with the original for side-by-side comparison.
//!
//! # Module Structure
//!
//! - `decode` - Upload decoding into RGB pixel grids
//! - `encode` - JPEG encoding
//! - `params` - Mode selection, parameter schema and clamping
//! - `transform` - Dispatch onto the individual image operations
//! - `compare` - Comparison, size report and download
//! - `session` - Per-upload processing context

pub mod compare;
pub mod decode;
pub mod encode;
pub mod histogram;
pub mod luminance;
pub mod params;
pub mod session;
pub mod transform;

pub use compare::{render_split, CompareError, Comparison, Download};
pub use decode::{decode_image, DecodeError, ImageFormat, PixelGrid};
pub use encode::{encode_jpeg, EncodeError};
pub use params::{Mode, ParamKind, ParamSpec, ParseModeError, Transform};
pub use session::Session;
pub use transform::{apply_transform, CompressedJpeg, TransformError, TransformResult};
