//! Color variation operations.
//!
//! Per-channel helpers, the per-pixel [`vary_hsv`], and [`vary_pixels`] which
//! applies one [`Variation`] to a whole image.

use super::hsv::{Hsv, hsv_to_rgb, rgb_to_hsv};
use super::params::Variation;
use image::{DynamicImage, Rgba, RgbaImage};

/// Rotate a hue channel by `shift`, wrapping around the 0–255 circle.
pub fn shift_hue(h: u8, shift: i32) -> u8 {
    (i32::from(h) + shift).rem_euclid(256) as u8
}

/// Multiply a channel, truncate toward zero, and clamp to 0–255.
pub fn scale_channel(c: u8, mult: f64) -> u8 {
    (f64::from(c) * mult).clamp(0.0, 255.0) as u8
}

/// Apply a variation to one HSV pixel.
pub fn vary_hsv(hsv: Hsv, variation: &Variation) -> Hsv {
    Hsv {
        h: shift_hue(hsv.h, variation.hue_shift),
        s: scale_channel(hsv.s, variation.saturation),
        v: scale_channel(hsv.v, variation.brightness),
    }
}

/// Apply a variation to every pixel of an image.
///
/// The image is normalized to RGBA8 first. Color channels go through HSV;
/// alpha is carried over unchanged.
pub fn vary_pixels(image: &DynamicImage, variation: &Variation) -> RgbaImage {
    let mut rgba = image.to_rgba8();
    for pixel in rgba.pixels_mut() {
        let Rgba([r, g, b, a]) = *pixel;
        let (r, g, b) = hsv_to_rgb(vary_hsv(rgb_to_hsv(r, g, b), variation));
        *pixel = Rgba([r, g, b, a]);
    }
    rgba
}
