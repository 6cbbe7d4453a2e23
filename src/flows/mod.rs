//! Flows module - End-to-end operations composed from backends
//!
//! Provides:
//! - normalize: The full enumerate / filter / rewrite pass

pub mod normalize;
