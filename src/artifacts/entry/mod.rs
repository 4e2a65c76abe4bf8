//! Per-path comparison facts
//!
//! An [`Entry`] records what is known about one relative path on both sides of
//! a comparison. Entries are produced by the [`inspector::Inspector`] and are
//! read-only afterwards: builders, filters and decorators only consume them.
//!
//! ## Invariants
//!
//! - `is_orphan` on one side is true iff the other side is missing
//! - a side is never both missing and orphan on the same entry

pub mod inspector;

use crate::artifacts::tree::Label;
use chrono::{DateTime, Local};
use derive_new::new;
use std::path::PathBuf;
use std::rc::Rc;

/// Identifies one of the two compared directories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

impl From<Side> for &str {
    fn from(side: Side) -> Self {
        match side {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let side_str: &str = (*self).into();
        write!(f, "{}", side_str)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SizeState {
    #[default]
    SameSize,
    Bigger,
    Smaller,
}

impl SizeState {
    pub fn compare(this: u64, other: u64) -> Self {
        match this.cmp(&other) {
            std::cmp::Ordering::Greater => SizeState::Bigger,
            std::cmp::Ordering::Less => SizeState::Smaller,
            std::cmp::Ordering::Equal => SizeState::SameSize,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeState {
    #[default]
    SameTime,
    Newer,
    Older,
}

impl TimeState {
    pub fn compare(this: Option<DateTime<Local>>, other: Option<DateTime<Local>>) -> Self {
        match this.cmp(&other) {
            std::cmp::Ordering::Greater => TimeState::Newer,
            std::cmp::Ordering::Less => TimeState::Older,
            std::cmp::Ordering::Equal => TimeState::SameTime,
        }
    }
}

/// Facts about a path on one side
#[derive(Debug, Clone, Default, new)]
pub struct SideFacts {
    /// Full path including the side's root
    pub path: PathBuf,
    pub size: u64,
    pub mod_time: Option<DateTime<Local>>,
    pub checksum: Option<String>,
    pub is_missing: bool,
    pub is_orphan: bool,
    pub size_state: SizeState,
    pub time_state: TimeState,
}

#[derive(Debug, Clone)]
pub struct Entry {
    /// Relative path, trailing `/` iff a directory
    pub norm_path: String,
    /// Final path component, trailing `/` kept for directories
    pub name: String,
    pub is_dir: bool,
    pub is_dotfile: bool,
    pub is_diff: bool,
    pub left: SideFacts,
    pub right: SideFacts,
}

impl Entry {
    /// Build an entry whose name and kind are derived from the relative path
    pub fn new(norm_path: impl Into<String>, left: SideFacts, right: SideFacts) -> Self {
        let norm_path = norm_path.into();
        let name = basename(&norm_path).to_string();
        let is_dir = norm_path.ends_with('/');
        let is_dotfile = name.starts_with('.');
        let is_diff = left.checksum != right.checksum;

        Entry {
            norm_path,
            name,
            is_dir,
            is_dotfile,
            is_diff,
            left,
            right,
        }
    }

    pub fn side(&self, side: Side) -> &SideFacts {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn is_orphan_anywhere(&self) -> bool {
        self.left.is_orphan || self.right.is_orphan
    }
}

impl Label for Entry {
    fn label(&self) -> String {
        self.name.clone()
    }
}

/// Final component of a relative path, keeping a directory's trailing `/`
pub fn basename(norm_path: &str) -> &str {
    let trimmed = norm_path.trim_end_matches('/');
    let start = trimmed.rfind('/').map(|i| i + 1).unwrap_or(0);
    &norm_path[start..]
}

/// The sorted sequence of entries for one comparison, root excluded
#[derive(Debug, Clone, new)]
pub struct DirContents {
    pub left_root: PathBuf,
    pub right_root: PathBuf,
    pub entries: Vec<Rc<Entry>>,
}

impl DirContents {
    pub fn root(&self, side: Side) -> &PathBuf {
        match side {
            Side::Left => &self.left_root,
            Side::Right => &self.right_root,
        }
    }
}
