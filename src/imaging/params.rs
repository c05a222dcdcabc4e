//! Parameter types for color variation.
//!
//! - [`VariationRanges`]: inclusive bounds each value is drawn from.
//! - [`Variation`]: the concrete values drawn for one image.
//!
//! Ranges are sampled once per image, so every pixel of a file moves the same
//! way while different files move independently.

use rand::Rng;

/// Concrete variation applied to one image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Variation {
    /// Added to hue, modulo 256.
    pub hue_shift: i32,
    /// Saturation multiplier.
    pub saturation: f64,
    /// Value (brightness) multiplier.
    pub brightness: f64,
}

impl Variation {
    /// A variation that leaves every HSV channel where it was.
    pub fn identity() -> Self {
        Self {
            hue_shift: 0,
            saturation: 1.0,
            brightness: 1.0,
        }
    }
}

/// Inclusive `[low, high]` bounds for each variation value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VariationRanges {
    pub hue_shift: [i32; 2],
    pub saturation: [f64; 2],
    pub brightness: [f64; 2],
}

impl Default for VariationRanges {
    /// Subtle enough that a tile set still reads as one set.
    fn default() -> Self {
        Self {
            hue_shift: [-3, 3],
            saturation: [0.98, 1.02],
            brightness: [0.98, 1.02],
        }
    }
}

impl VariationRanges {
    /// Draw an independent variation. Callers must pass ordered ranges
    /// (see [`VaryConfig::validate`](crate::config::VaryConfig::validate)).
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Variation {
        let [hue_lo, hue_hi] = self.hue_shift;
        let [sat_lo, sat_hi] = self.saturation;
        let [val_lo, val_hi] = self.brightness;
        Variation {
            hue_shift: rng.random_range(hue_lo..=hue_hi),
            saturation: rng.random_range(sat_lo..=sat_hi),
            brightness: rng.random_range(val_lo..=val_hi),
        }
    }

    /// Whether `variation` could have been drawn from these ranges.
    #[cfg(test)]
    pub fn contains(&self, variation: &Variation) -> bool {
        let in_range = |[lo, hi]: [f64; 2], x: f64| lo <= x && x <= hi;
        let [hue_lo, hue_hi] = self.hue_shift;
        (hue_lo..=hue_hi).contains(&variation.hue_shift)
            && in_range(self.saturation, variation.saturation)
            && in_range(self.brightness, variation.brightness)
    }
}
