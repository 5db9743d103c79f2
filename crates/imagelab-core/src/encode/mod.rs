//! Image encoding for Imagelab.
//!
//! Only JPEG is produced: it backs the lossy re-encode transform and the
//! `compressed.jpg` download.

mod jpeg;

pub use jpeg::{encode_jpeg, encode_jpeg_raw, EncodeError, MAX_ENCODER_QUALITY, MIN_ENCODER_QUALITY};
