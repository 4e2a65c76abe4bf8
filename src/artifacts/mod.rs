//! Comparison data structures and algorithms
//!
//! - `entry`: per-path facts about both sides and the inspector producing them
//! - `tree`: arena tree, builder and line renderers
//! - `filter`: synchronized visibility filtering of both trees
//! - `decoration`: palette and per-side label decoration
//! - `compositor`: column layout of two rendered trees
//! - `core`: shared utilities (pager wrapper, etc.)

pub mod compositor;
pub mod core;
pub mod decoration;
pub mod entry;
pub mod filter;
pub mod tree;
