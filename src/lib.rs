//! diffee: side-by-side directory tree comparison
//!
//! Two directory trees are reduced to the sorted union of their relative paths,
//! turned into two structurally identical in-memory trees, filtered in lockstep
//! and rendered as aligned columns.
//!
//! - `areas`: filesystem-facing components (walker, comparison session)
//! - `artifacts`: trees, entries, filters, decoration and composition
//! - `commands`: output modes (side-by-side, flat, plain)

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod logging;

use clap::ValueEnum;

/// Line layout used when rendering a tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum RenderStyle {
    /// Box-drawing branches (`├── `, `└── `)
    #[default]
    Tree,
    /// Dotted hierarchical numbering (`2.1. `)
    Numbered,
    /// One tab per depth level
    Tabs,
    /// Expand/collapse glyphs (`▼`, `▶`)
    Folder,
}

/// The single active file comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompareMode {
    #[default]
    None,
    Size,
    Time,
    Checksum,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrphanFilter {
    #[default]
    All,
    /// Show only paths that are orphans on either side
    Only,
    /// Hide paths that are orphans on either side
    Hide,
    OnlyLeft,
    OnlyRight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KindFilter {
    #[default]
    All,
    FilesOnly,
    FoldersOnly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentFilter {
    #[default]
    All,
    /// Show only files that differ under the active comparison
    Diff,
    /// Show only files that are the same under the active comparison
    Same,
}
