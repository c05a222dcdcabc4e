//! Run configuration.
//!
//! Every value has a built-in default, so the tool runs with no config file at
//! all. A `vary-colors.toml` in the working directory can override any subset
//! of them.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [scan]
//! roots = ["assets/tiles", "assets/plants"]  # Relative to the working directory
//! extension = "png"                          # Exact, case-sensitive, no dot
//! exclude = ["characters", "ui"]             # Any path segment with these names is skipped
//!
//! [variation]
//! hue_shift = [-3, 3]         # Integer hue offset on the 0-255 scale (inclusive)
//! saturation = [0.98, 1.02]   # Saturation multiplier (inclusive)
//! brightness = [0.98, 1.02]   # Value multiplier (inclusive)
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse. Override just the values you want:
//!
//! ```toml
//! [variation]
//! hue_shift = [-6, 6]
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::imaging::VariationRanges;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "vary-colors.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VaryConfig {
    /// Which files to touch.
    pub scan: ScanConfig,
    /// How much to vary them.
    pub variation: VariationConfig,
}

/// File discovery settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScanConfig {
    pub roots: Vec<PathBuf>,
    pub extension: String,
    pub exclude: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            roots: vec![PathBuf::from("assets/tiles"), PathBuf::from("assets/plants")],
            extension: "png".to_string(),
            exclude: vec!["characters".to_string(), "ui".to_string()],
        }
    }
}

impl ScanConfig {
    /// Roots joined onto `base`. Absolute roots are left as they are.
    pub fn resolve_roots(&self, base: &Path) -> Vec<PathBuf> {
        self.roots.iter().map(|root| base.join(root)).collect()
    }
}

/// Variation ranges, each `[low, high]` inclusive.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VariationConfig {
    pub hue_shift: [i32; 2],
    pub saturation: [f64; 2],
    pub brightness: [f64; 2],
}

impl Default for VariationConfig {
    fn default() -> Self {
        let ranges = VariationRanges::default();
        Self {
            hue_shift: ranges.hue_shift,
            saturation: ranges.saturation,
            brightness: ranges.brightness,
        }
    }
}

impl VariationConfig {
    pub fn ranges(&self) -> VariationRanges {
        VariationRanges {
            hue_shift: self.hue_shift,
            saturation: self.saturation,
            brightness: self.brightness,
        }
    }
}

impl VaryConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.scan.roots.is_empty() {
            return Err(ConfigError::Validation(
                "scan.roots must not be empty".into(),
            ));
        }
        let ext = &self.scan.extension;
        if ext.is_empty() || ext.starts_with('.') {
            return Err(ConfigError::Validation(format!(
                "scan.extension must be a bare extension like \"png\", got {ext:?}"
            )));
        }
        if self.scan.exclude.iter().any(|name| name.is_empty()) {
            return Err(ConfigError::Validation(
                "scan.exclude entries must not be empty".into(),
            ));
        }

        let [lo, hi] = self.variation.hue_shift;
        if lo > hi {
            return Err(ConfigError::Validation(format!(
                "variation.hue_shift low ({lo}) must not exceed high ({hi})"
            )));
        }
        if lo < -255 || hi > 255 {
            return Err(ConfigError::Validation(
                "variation.hue_shift must lie within -255..=255".into(),
            ));
        }

        validate_multiplier("variation.saturation", self.variation.saturation)?;
        validate_multiplier("variation.brightness", self.variation.brightness)?;
        Ok(())
    }
}

fn validate_multiplier(key: &str, [lo, hi]: [f64; 2]) -> Result<(), ConfigError> {
    if !lo.is_finite() || !hi.is_finite() || lo < 0.0 {
        return Err(ConfigError::Validation(format!(
            "{key} must be finite and non-negative"
        )));
    }
    if lo > hi {
        return Err(ConfigError::Validation(format!(
            "{key} low ({lo}) must not exceed high ({hi})"
        )));
    }
    Ok(())
}

/// Load config from `vary-colors.toml` in the given directory.
///
/// A missing file yields the defaults. A present file is parsed sparsely on
/// top of the defaults, with unknown keys rejected, then validated.
pub fn load_config(dir: &Path) -> Result<VaryConfig, ConfigError> {
    let path = dir.join(CONFIG_FILE_NAME);
    let config = if path.exists() {
        let content = fs::read_to_string(&path)?;
        toml::from_str(&content)?
    } else {
        VaryConfig::default()
    };
    config.validate()?;
    Ok(config)
}
