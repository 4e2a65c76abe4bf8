//! Filesystem-facing components
//!
//! - `workspace`: walking one side into relative paths
//! - `comparison`: the session owning both sides and the output writer

pub mod comparison;
pub mod workspace;
