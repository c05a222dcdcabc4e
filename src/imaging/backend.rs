//! Image decode/encode backend trait and shared types.
//!
//! The [`ImageBackend`] trait covers the two I/O operations a run needs:
//! load a file (remembering its format) and save pixels back in a given
//! format. Pixel work happens outside the backend, in
//! [`operations`](super::operations).
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend).

use image::{DynamicImage, ImageFormat, RgbaImage};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Processing failed: {0}")]
    ProcessingFailed(String),
    #[error("Unsupported image format: {0}")]
    UnsupportedFormat(String),
}

/// A decoded image and the format it was stored in.
#[derive(Debug, Clone)]
pub struct LoadedImage {
    pub image: DynamicImage,
    pub format: ImageFormat,
}

/// Trait for image I/O backends.
pub trait ImageBackend {
    /// Decode an image, detecting its format.
    fn load(&self, path: &Path) -> Result<LoadedImage, BackendError>;

    /// Encode `image` as `format` and write it to `path`, replacing any
    /// existing file.
    fn save(
        &self,
        image: &RgbaImage,
        path: &Path,
        format: ImageFormat,
    ) -> Result<(), BackendError>;
}
