//! Pure Rust image backend over the `image` crate.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Format detection | `ImageReader::with_guessed_format` (magic bytes, then extension) |
//! | Decode (JPEG, PNG, TIFF, WebP) | `image` crate decoders |
//! | Encode | `ImageBuffer::write_to` into memory, then one `fs::write` |
//!
//! Encoding finishes in memory before the file is opened for writing, so a
//! failed encode leaves the original file as it was.

use super::backend::{BackendError, ImageBackend, LoadedImage};
use image::{DynamicImage, ImageFormat, ImageReader, RgbaImage};
use std::io::Cursor;
use std::path::Path;

/// Backend using the `image` crate's built-in codecs.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// JPEG has no alpha channel; everything else we can write keeps RGBA.
fn supports_alpha(format: ImageFormat) -> bool {
    !matches!(format, ImageFormat::Jpeg)
}

/// Encode into an in-memory buffer in the requested format.
fn encode(image: &RgbaImage, format: ImageFormat) -> Result<Vec<u8>, BackendError> {
    let mut buf = Cursor::new(Vec::new());
    let result = if supports_alpha(format) {
        image.write_to(&mut buf, format)
    } else {
        DynamicImage::ImageRgba8(image.clone())
            .to_rgb8()
            .write_to(&mut buf, format)
    };
    result.map_err(|e| {
        BackendError::ProcessingFailed(format!("{format:?} encode failed: {e}"))
    })?;
    Ok(buf.into_inner())
}

impl ImageBackend for RustBackend {
    fn load(&self, path: &Path) -> Result<LoadedImage, BackendError> {
        let reader = ImageReader::open(path)?.with_guessed_format()?;
        let format = reader.format().ok_or_else(|| {
            BackendError::UnsupportedFormat(format!("cannot detect format of {}", path.display()))
        })?;
        if !format.reading_enabled() || !format.writing_enabled() {
            return Err(BackendError::UnsupportedFormat(format!(
                "{format:?} ({})",
                path.display()
            )));
        }
        let image = reader.decode().map_err(|e| {
            BackendError::ProcessingFailed(format!("Failed to decode {}: {}", path.display(), e))
        })?;
        Ok(LoadedImage { image, format })
    }

    fn save(
        &self,
        image: &RgbaImage,
        path: &Path,
        format: ImageFormat,
    ) -> Result<(), BackendError> {
        if !format.writing_enabled() {
            return Err(BackendError::UnsupportedFormat(format!("{format:?}")));
        }
        let bytes = encode(image, format)?;
        std::fs::write(path, bytes)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{create_test_jpeg, create_test_png, test_pattern};

    #[test]
    fn load_png_detects_format() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("tile.png");
        create_test_png(&path, 20, 10);

        let loaded = RustBackend::new().load(&path).unwrap();
        assert_eq!(loaded.format, ImageFormat::Png);
        assert_eq!(loaded.image.width(), 20);
        assert_eq!(loaded.image.height(), 10);
    }

    #[test]
    fn load_sniffs_content_over_extension() {
        let tmp = tempfile::TempDir::new().unwrap();
        let png = tmp.path().join("real.png");
        create_test_png(&png, 4, 4);
        let disguised = tmp.path().join("tile.dat");
        std::fs::copy(&png, &disguised).unwrap();

        let loaded = RustBackend::new().load(&disguised).unwrap();
        assert_eq!(loaded.format, ImageFormat::Png);
    }

    #[test]
    fn load_nonexistent_file_errors() {
        let result = RustBackend::new().load(Path::new("/nonexistent/tile.png"));
        assert!(matches!(result, Err(BackendError::Io(_))));
    }

    #[test]
    fn load_corrupt_png_errors() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("broken.png");
        // PNG signature followed by garbage
        let mut bytes = vec![0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
        bytes.extend_from_slice(b"not really a png");
        std::fs::write(&path, bytes).unwrap();

        let result = RustBackend::new().load(&path);
        assert!(matches!(result, Err(BackendError::ProcessingFailed(_))));
    }

    #[test]
    fn load_unknown_content_errors() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("notes.txt");
        std::fs::write(&path, "just text").unwrap();

        let result = RustBackend::new().load(&path);
        assert!(matches!(result, Err(BackendError::UnsupportedFormat(_))));
    }

    #[test]
    fn save_png_is_lossless_with_alpha() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("out.png");
        let image = test_pattern(16, 12);

        let backend = RustBackend::new();
        backend.save(&image, &path, ImageFormat::Png).unwrap();

        let loaded = backend.load(&path).unwrap();
        assert_eq!(loaded.format, ImageFormat::Png);
        assert_eq!(loaded.image.to_rgba8(), image);
    }

    #[test]
    fn save_jpeg_drops_alpha_and_stays_jpeg() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("photo.jpg");
        create_test_jpeg(&path, 32, 24);

        let backend = RustBackend::new();
        let loaded = backend.load(&path).unwrap();
        assert_eq!(loaded.format, ImageFormat::Jpeg);

        backend
            .save(&loaded.image.to_rgba8(), &path, ImageFormat::Jpeg)
            .unwrap();

        let reloaded = backend.load(&path).unwrap();
        assert_eq!(reloaded.format, ImageFormat::Jpeg);
        assert_eq!(reloaded.image.width(), 32);
        assert!(!reloaded.image.color().has_alpha());
    }

    #[test]
    fn save_webp_keeps_format_and_size() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("leaf.webp");
        let backend = RustBackend::new();
        backend
            .save(&test_pattern(8, 6), &path, ImageFormat::WebP)
            .unwrap();

        let loaded = backend.load(&path).unwrap();
        assert_eq!(loaded.format, ImageFormat::WebP);
        assert_eq!((loaded.image.width(), loaded.image.height()), (8, 6));
    }

    #[test]
    fn save_unsupported_format_leaves_file_untouched() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("anim.gif");
        std::fs::write(&path, b"original").unwrap();

        let result = RustBackend::new().save(&test_pattern(2, 2), &path, ImageFormat::Gif);
        assert!(matches!(result, Err(BackendError::UnsupportedFormat(_))));
        assert_eq!(std::fs::read(&path).unwrap(), b"original");
    }

    #[test]
    fn supports_alpha_only_excludes_jpeg() {
        assert!(!supports_alpha(ImageFormat::Jpeg));
        assert!(supports_alpha(ImageFormat::Png));
        assert!(supports_alpha(ImageFormat::WebP));
        assert!(supports_alpha(ImageFormat::Tiff));
    }
}
