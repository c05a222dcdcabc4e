//! # Vary Colors
//!
//! Gives a set of image assets a subtle, per-file color variation so that
//! repeated tiles and sprites don't look stamped out of the same mold. Every
//! matching file under the configured roots is decoded, nudged in hue,
//! saturation and brightness by a small random amount, and written back over
//! itself in its original format.
//!
//! # Pipeline
//!
//! ```text
//! 1. Scan   roots     →  file list     (walk, filter by extension, skip excluded dirs)
//! 2. Vary   each file →  same file     (decode → HSV jitter → encode, one at a time)
//! ```
//!
//! There is no intermediate state: a file is either untouched or fully
//! rewritten. The first error aborts the run.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | Built-in defaults plus an optional sparse `vary-colors.toml` override |
//! | [`scan`] | Recursive file discovery with excluded path segments |
//! | [`imaging`] | HSV conversion, variation parameters, decode/encode backend |
//! | [`vary`] | The sequential run loop that overwrites files in place |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## 8-bit HSV
//!
//! Hue, saturation and value are all kept on the 0–255 scale, the same
//! layout common image libraries use for their `HSV` mode. A hue shift of
//! `±3` is therefore about ±4°, and wraps around the color circle rather
//! than clamping. Saturation and value are multiplied and clamped.
//!
//! ## Alpha Is Never Touched
//!
//! Only the color channels pass through HSV. The alpha channel is copied
//! byte for byte, so sprite edges and cut-outs stay exactly where they were.
//!
//! ## Randomness Is a Parameter
//!
//! The run loop takes any [`rand::Rng`]. The binary hands it the thread-local
//! generator; tests hand it a seeded one.

pub mod config;
pub mod imaging;
pub mod output;
pub mod scan;
pub mod vary;

#[cfg(test)]
pub(crate) mod test_helpers;
