//! File discovery.
//!
//! Walks each root recursively and collects files with the target extension,
//! skipping anything whose path has an excluded segment.
//!
//! ```text
//! assets/
//! ├── tiles/                # root
//! │   ├── grass.png         # ✔ varied
//! │   ├── Grass.PNG         #   skipped: extension match is exact
//! │   └── ui/
//! │       └── button.png    #   skipped: `ui` segment
//! └── plants/               # root
//!     ├── fern.png          # ✔ varied
//!     └── characters/
//!         └── gnome.png     #   skipped: `characters` segment
//! ```
//!
//! Symlinked files count as files; symlinked directories are not descended.
//!
//! A root that doesn't exist is reported back in [`Discovery::missing_roots`]
//! rather than failing the scan. Files are returned sorted by name within each
//! directory, roots in the order given.

use std::path::{Component, Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Failed to walk {}: {source}", root.display())]
    Walk {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

/// Result of a discovery pass.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Discovery {
    /// Matching files, in walk order.
    pub files: Vec<PathBuf>,
    /// Roots that did not exist and were skipped.
    pub missing_roots: Vec<PathBuf>,
}

/// Whether any segment of `path` is one of the `excluded` names.
pub fn is_excluded(path: &Path, excluded: &[String]) -> bool {
    path.components().any(|component| match component {
        Component::Normal(segment) => excluded.iter().any(|name| segment == name.as_str()),
        _ => false,
    })
}

/// Collect every file under `roots` with the given extension that is not in
/// an excluded directory.
pub fn discover(
    roots: &[PathBuf],
    extension: &str,
    excluded: &[String],
) -> Result<Discovery, ScanError> {
    let mut discovery = Discovery::default();

    for root in roots {
        if !root.exists() {
            discovery.missing_roots.push(root.clone());
            continue;
        }
        if is_excluded(root, excluded) {
            continue;
        }

        let walker = WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            // Prune excluded directories instead of walking into them
            .filter_entry(|entry| {
                entry.depth() == 0
                    || !(entry.file_type().is_dir()
                        && excluded.iter().any(|name| entry.file_name() == name.as_str()))
            });

        for entry in walker {
            let entry = entry.map_err(|source| ScanError::Walk {
                root: root.clone(),
                source,
            })?;
            let path = entry.path();
            // Resolves symlinks, so a linked image is varied through its target
            if !path.is_file() {
                continue;
            }
            if path.extension().is_some_and(|ext| ext == extension)
                && !is_excluded(path, excluded)
            {
                discovery.files.push(path.to_path_buf());
            }
        }
    }

    Ok(discovery)
}
