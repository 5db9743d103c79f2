//! Per-upload processing context.
//!
//! A [`Session`] owns one decoded upload. Every [`Session::run`] starts again
//! from that original, so results never depend on earlier requests. Sessions
//! share nothing with each other.

use crate::compare::Comparison;
use crate::decode::{decode_image, DecodeError, PixelGrid};
use crate::params::Transform;
use crate::transform::{apply_transform, TransformError};

#[derive(Debug, Clone)]
pub struct Session {
    original: PixelGrid,
}

impl Session {
    /// Decode an upload and start a session around it.
    pub fn from_upload(bytes: &[u8]) -> Result<Self, DecodeError> {
        Ok(Self::new(decode_image(bytes)?))
    }

    /// Start a session around an already decoded image.
    pub fn new(original: PixelGrid) -> Self {
        Self { original }
    }

    pub fn original(&self) -> &PixelGrid {
        &self.original
    }

    /// Run `transform` against the original and pair it with the result.
    pub fn run(&self, transform: &Transform) -> Result<Comparison, TransformError> {
        let result = apply_transform(&self.original, transform)?;
        Ok(Comparison::new(self.original.clone(), result))
    }
}
