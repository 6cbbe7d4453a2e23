//! Backends module - File system operations
//!
//! Provides:
//! - scan: Candidate discovery with walkdir
//! - rewrite: In-place line ending normalization of one file

pub mod rewrite;
pub mod scan;
