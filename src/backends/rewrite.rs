//! Single-file rewrite
//!
//! Reads the whole file as UTF-8, normalizes line endings and writes the
//! result back over the same path. The file is always rewritten, even when
//! it was already LF-only.

use std::fs;
use std::path::Path;

use crate::core::eol::{count_line_endings, normalize_line_endings};
use crate::core::error::{NormalizeError, Result};

/// What a rewrite did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RewriteStats {
    /// CRLF and CR terminators replaced with LF
    pub replaced: usize,
    /// Bytes written
    pub size: u64,
}

/// Normalize the line endings of `path` in place
pub fn rewrite_file(path: &Path) -> Result<RewriteStats> {
    let bytes = fs::read(path).map_err(|source| NormalizeError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let text = String::from_utf8(bytes).map_err(|source| NormalizeError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    let replaced = count_line_endings(&text).non_lf();
    let normalized = normalize_line_endings(&text);

    fs::write(path, normalized.as_bytes()).map_err(|source| NormalizeError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(RewriteStats {
        replaced,
        size: normalized.len() as u64,
    })
}
