//! Core module - Contains the fundamental data structures and utilities
//!
//! This module provides:
//! - Line ending normalization
//! - Path helpers and the exclusion predicate
//! - Error taxonomy
//! - Per-file outcome model
//! - Rendering functions for report formats

pub mod eol;
pub mod error;
pub mod model;
pub mod paths;
pub mod render;
