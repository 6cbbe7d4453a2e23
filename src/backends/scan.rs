//! Candidate discovery
//!
//! Uses walkdir to find every regular file under root with the target
//! extension. Hidden paths are returned too; the caller decides what to skip.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::core::error::{NormalizeError, Result};
use crate::core::paths::has_extension;

/// Collect files matching `**/*.<ext>` under `root`, in walk order.
///
/// Only entries below `root` are candidates, so a root that is itself a file
/// yields nothing. Symlinks are not followed and never returned. Any
/// traversal error, including a missing root, aborts the scan.
pub fn collect_candidates(root: &Path, ext: &str) -> Result<Vec<PathBuf>> {
    let mut candidates = Vec::new();

    for entry in WalkDir::new(root).min_depth(1) {
        let entry = entry.map_err(|source| NormalizeError::Traverse {
            path: source.path().unwrap_or(root).to_path_buf(),
            source,
        })?;

        if !entry.file_type().is_file() {
            continue;
        }

        if has_extension(entry.path(), ext) {
            candidates.push(entry.into_path());
        }
    }

    Ok(candidates)
}
