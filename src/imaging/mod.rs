//! Image color variation in pure Rust.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Decode** | `image::ImageReader` with content-sniffed format |
//! | **RGB ⇄ HSV** | [`rgb_to_hsv`] / [`hsv_to_rgb`], 8-bit per channel |
//! | **Vary** | [`vary_pixels`]: hue shift + saturation/value scaling, alpha untouched |
//! | **Encode** | `image::DynamicImage::write_to` in the source format |
//!
//! The module is split into:
//! - **HSV**: Pure per-pixel color space conversions (unit testable)
//! - **Parameters**: Variation values and the ranges they are drawn from
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]
//! - **Operations**: Per-channel and per-image variation built on the above

pub mod backend;
mod hsv;
pub mod operations;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, ImageBackend, LoadedImage};
pub use hsv::{Hsv, hsv_to_rgb, rgb_to_hsv};
pub use operations::{scale_channel, shift_hue, vary_hsv, vary_pixels};
pub use params::{Variation, VariationRanges};
pub use rust_backend::RustBackend;
