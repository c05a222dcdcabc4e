//! The run loop: decode, vary, overwrite.
//!
//! Files are handled strictly one at a time. Each gets its own freshly drawn
//! [`Variation`], is re-encoded in the format it was loaded in, and replaces
//! the original. There is no retry and no skip-on-error: the first failure
//! stops the run and is returned with the offending path. Files varied before
//! the failure stay varied.

use crate::imaging::{BackendError, ImageBackend, Variation, VariationRanges, vary_pixels};
use rand::Rng;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VaryError {
    #[error("Failed to vary {}: {source}", path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: BackendError,
    },
}

/// Progress event emitted after each file.
#[derive(Debug, Clone, PartialEq)]
pub enum VaryEvent {
    Varied {
        /// 1-based position in the run.
        index: usize,
        /// Number of files in the run.
        total: usize,
        path: PathBuf,
        variation: Variation,
    },
}

/// Totals for a finished run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VarySummary {
    pub varied: usize,
}

/// Vary a single file in place with the given variation.
pub fn vary_file(
    backend: &impl ImageBackend,
    path: &Path,
    variation: &Variation,
) -> Result<(), VaryError> {
    let wrap = |source| VaryError::Image {
        path: path.to_path_buf(),
        source,
    };
    let loaded = backend.load(path).map_err(wrap)?;
    let varied = vary_pixels(&loaded.image, variation);
    backend.save(&varied, path, loaded.format).map_err(wrap)
}

/// Vary every path in order, drawing a new variation for each.
pub fn vary_files<R: Rng>(
    backend: &impl ImageBackend,
    paths: &[PathBuf],
    ranges: &VariationRanges,
    rng: &mut R,
    mut on_event: impl FnMut(&VaryEvent),
) -> Result<VarySummary, VaryError> {
    let mut summary = VarySummary::default();

    for (i, path) in paths.iter().enumerate() {
        let variation = ranges.sample(rng);
        vary_file(backend, path, &variation)?;
        summary.varied += 1;
        on_event(&VaryEvent::Varied {
            index: i + 1,
            total: paths.len(),
            path: path.clone(),
            variation,
        });
    }

    Ok(summary)
}
