//! Shared test utilities: synthetic images and scratch directory trees.

use image::{ImageEncoder, Rgba, RgbaImage};
use std::path::{Path, PathBuf};

// =========================================================================
// Synthetic images
// =========================================================================

/// A small RGBA image with varied color and alpha in every pixel.
pub fn test_pattern(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| {
        Rgba([
            (x * 29 % 256) as u8,
            (y * 41 % 256) as u8,
            ((x ^ y) * 13 % 256) as u8,
            ((x + 2 * y) * 17 % 256) as u8,
        ])
    })
}

/// Write [`test_pattern`] as a PNG, creating parent directories.
pub fn create_test_png(path: &Path, width: u32, height: u32) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    test_pattern(width, height)
        .save_with_format(path, image::ImageFormat::Png)
        .unwrap();
}

/// Write a small RGB JPEG.
pub fn create_test_jpeg(path: &Path, width: u32, height: u32) {
    let img = image::RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    });
    let file = std::fs::File::create(path).unwrap();
    let writer = std::io::BufWriter::new(file);
    image::codecs::jpeg::JpegEncoder::new(writer)
        .write_image(img.as_raw(), width, height, image::ExtendedColorType::Rgb8)
        .unwrap();
}

// =========================================================================
// Directory trees
// =========================================================================

/// Create an empty file, including parent directories.
pub fn touch(path: &Path) {
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, b"").unwrap();
}

/// The built-in excluded segment names.
pub fn excluded() -> Vec<String> {
    vec!["characters".to_string(), "ui".to_string()]
}

/// Paths relative to `base`, as strings, in the original order.
pub fn relative_files(files: &[PathBuf], base: &Path) -> Vec<String> {
    files
        .iter()
        .map(|p| {
            p.strip_prefix(base)
                .unwrap_or_else(|_| panic!("{} is not under {}", p.display(), base.display()))
                .to_string_lossy()
                .into_owned()
        })
        .collect()
}
