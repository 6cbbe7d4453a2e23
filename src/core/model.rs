//! Per-file outcome model
//!
//! Every candidate file seen during a run maps to one `FileOutcome`. The
//! outcomes are collected into a `Report` that the renderer turns into output.

use serde::{Deserialize, Serialize};

/// What the run did with a candidate file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Rewritten with at least one line ending replaced
    Rewritten,
    /// Rewritten, but the content was already LF-only
    Unchanged,
    /// Left alone because a path segment is hidden
    Skipped,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Rewritten => "rewritten",
            Status::Unchanged => "unchanged",
            Status::Skipped => "skipped",
        }
    }
}

/// Outcome for a single candidate file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileOutcome {
    /// Path relative to root, using '/' as separator
    pub path: String,

    pub status: Status,

    /// Number of CRLF or CR terminators replaced with LF
    #[serde(default)]
    pub replaced: usize,

    /// File size in bytes after the run
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
}

impl FileOutcome {
    /// Create an outcome for a file that was written back
    pub fn written(path: impl Into<String>, replaced: usize, size: u64) -> Self {
        Self {
            path: path.into(),
            status: if replaced > 0 {
                Status::Rewritten
            } else {
                Status::Unchanged
            },
            replaced,
            size: Some(size),
        }
    }

    /// Create an outcome for an excluded file
    pub fn skipped(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            status: Status::Skipped,
            replaced: 0,
            size: None,
        }
    }
}

/// Totals over a report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub rewritten: usize,
    pub unchanged: usize,
    pub skipped: usize,
    pub replaced: usize,
}

/// All outcomes of one run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Report {
    pub items: Vec<FileOutcome>,
}

impl Report {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn push(&mut self, item: FileOutcome) {
        self.items.push(item);
    }

    #[cfg_attr(not(feature = "parallel"), allow(dead_code))]
    pub fn extend(&mut self, items: impl IntoIterator<Item = FileOutcome>) {
        self.items.extend(items);
    }

    /// Sort items by path for stable output
    pub fn sort(&mut self) {
        self.items.sort_by(|a, b| a.path.cmp(&b.path));
    }

    pub fn summary(&self) -> Summary {
        self.items
            .iter()
            .fold(Summary::default(), |mut summary, item| {
                match item.status {
                    Status::Rewritten => summary.rewritten += 1,
                    Status::Unchanged => summary.unchanged += 1,
                    Status::Skipped => summary.skipped += 1,
                }
                summary.replaced += item.replaced;
                summary
            })
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl FromIterator<FileOutcome> for Report {
    fn from_iter<T: IntoIterator<Item = FileOutcome>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
