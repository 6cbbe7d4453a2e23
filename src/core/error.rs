//! Error types for the normalization pass
//!
//! Every variant carries the path it failed on. There is no recovery: the
//! first error ends the run.

use std::path::PathBuf;
use std::string::FromUtf8Error;

use thiserror::Error;

/// Shared `Result` alias for the library modules
pub type Result<T> = std::result::Result<T, NormalizeError>;

#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("cannot traverse {path}: {source}")]
    Traverse {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} is not valid UTF-8 text: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: FromUtf8Error,
    },

    #[error("cannot write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl NormalizeError {
    /// Stable machine-parseable error code
    pub fn code(&self) -> &'static str {
        match self {
            NormalizeError::Traverse { .. } => "TRAVERSE_FAILED",
            NormalizeError::Read { .. } => "READ_FAILED",
            NormalizeError::Decode { .. } => "DECODE_FAILED",
            NormalizeError::Write { .. } => "WRITE_FAILED",
        }
    }
}
