//! Path utilities
//!
//! Reported paths use '/' as separator and are relative to root.

use std::path::{Component, Path};

/// Leading character that marks a hidden or internal path segment
pub const MARKER: char = '.';

/// Extension selected when none is given on the command line
pub const DEFAULT_EXTENSION: &str = "cs";

/// Normalize a path to use '/' as separator (for cross-platform consistency)
pub fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Make a path relative to the root directory
pub fn make_relative(path: &Path, root: &Path) -> Option<String> {
    path.strip_prefix(root).ok().map(normalize_path)
}

/// Segments of `path` below `root`, file name included
pub fn relative_segments(path: &Path, root: &Path) -> Vec<String> {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect()
}

/// True if any segment starts with the marker character.
///
/// The file name counts as a segment, so `src/.hidden.cs` is excluded as well
/// as `.git/hooks/x.cs`.
pub fn is_excluded<S: AsRef<str>>(segments: &[S]) -> bool {
    segments
        .iter()
        .any(|segment| segment.as_ref().starts_with(MARKER))
}

/// Strip a leading '.' so both `cs` and `.cs` select the same files
pub fn clean_extension(ext: &str) -> &str {
    ext.strip_prefix('.').unwrap_or(ext)
}

/// Check whether the final component has exactly the given extension
pub fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == ext)
        .unwrap_or(false)
}
