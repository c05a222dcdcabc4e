//! CLI output formatting.
//!
//! # Output Format
//!
//! ```text
//! Skipping missing root: assets/plants
//! Processing 3 PNGs...
//!
//! [1/3] ✔ Varied assets/tiles/grass.png (hue +2, sat x1.013, val x0.991)
//! [2/3] ✔ Varied assets/tiles/water.png (hue -1, sat x0.984, val x1.007)
//! [3/3] ✔ Varied assets/tiles/autumn/leaves.png (hue 0, sat x1.002, val x0.980)
//!
//! Done! Varied 3 files.
//! ```
//!
//! Paths are shown relative to the directory the run started from.
//!
//! # Architecture
//!
//! Each step has a `format_*` function (returns `Vec<String>`) for testability
//! and a `print_*` wrapper that writes to stdout. Format functions are pure:
//! no I/O, no side effects.

use crate::imaging::Variation;
use crate::scan::Discovery;
use crate::vary::{VaryEvent, VarySummary};
use std::path::Path;

// ============================================================================
// Shared helpers
// ============================================================================

/// Show `path` relative to `base` when it lives under it.
fn display_path(path: &Path, base: &Path) -> String {
    path.strip_prefix(base)
        .unwrap_or(path)
        .display()
        .to_string()
}

/// Signed hue shift: `+2`, `-1`, `0`.
fn format_hue_shift(shift: i32) -> String {
    if shift > 0 {
        format!("+{shift}")
    } else {
        shift.to_string()
    }
}

/// `(hue +2, sat x1.013, val x0.991)`
fn format_variation(variation: &Variation) -> String {
    format!(
        "(hue {}, sat x{:.3}, val x{:.3})",
        format_hue_shift(variation.hue_shift),
        variation.saturation,
        variation.brightness
    )
}

fn plural(count: usize, word: &str) -> String {
    if count == 1 {
        format!("{count} {word}")
    } else {
        format!("{count} {word}s")
    }
}

// ============================================================================
// Scan
// ============================================================================

/// Format the discovery summary printed before any file is touched.
pub fn format_scan_output(discovery: &Discovery, extension: &str, base: &Path) -> Vec<String> {
    let mut lines: Vec<String> = discovery
        .missing_roots
        .iter()
        .map(|root| format!("Skipping missing root: {}", display_path(root, base)))
        .collect();

    lines.push(format!(
        "Processing {}...",
        plural(discovery.files.len(), &extension.to_uppercase())
    ));
    lines.push(String::new());
    lines
}

pub fn print_scan_output(discovery: &Discovery, extension: &str, base: &Path) {
    for line in format_scan_output(discovery, extension, base) {
        println!("{}", line);
    }
}

// ============================================================================
// Vary
// ============================================================================

/// Format a single progress event as display lines.
pub fn format_vary_event(event: &VaryEvent, base: &Path) -> Vec<String> {
    match event {
        VaryEvent::Varied {
            index,
            total,
            path,
            variation,
        } => vec![format!(
            "[{index}/{total}] ✔ Varied {} {}",
            display_path(path, base),
            format_variation(variation)
        )],
    }
}

/// Format the closing summary.
pub fn format_summary(summary: &VarySummary) -> Vec<String> {
    vec![
        String::new(),
        format!("Done! Varied {}.", plural(summary.varied, "file")),
    ]
}

pub fn print_summary(summary: &VarySummary) {
    for line in format_summary(summary) {
        println!("{}", line);
    }
}
