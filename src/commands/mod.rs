//! Output modes
//!
//! Each mode is an `impl Comparison` block rendering the compared contents:
//!
//! - `side_by_side`: two aligned trees (default)
//! - `flat`: one decorated relative path per side and line
//! - `plain`: quoted path pairs for scripting

pub mod flat;
pub mod plain;
pub mod side_by_side;

use crate::areas::workspace::WalkOptions;
use crate::artifacts::decoration::Decorator;
use crate::artifacts::decoration::palette::Palette;
use crate::artifacts::filter::FilterOptions;
use crate::{CompareMode, ContentFilter, RenderStyle};

/// Everything the output modes need to know, assembled from the command line
#[derive(Debug, Clone, Default)]
pub struct DiffOptions {
    pub walk: WalkOptions,
    pub filter: FilterOptions,
    /// Append size, time or checksum to differing files
    pub info: bool,
    pub color: bool,
    pub style: RenderStyle,
    pub swap: bool,
    pub left_alias: Option<String>,
    pub right_alias: Option<String>,
    /// Collapse directories at this depth, 0 keeps everything expanded
    pub collapse_depth: usize,
    /// Wraps each path in plain output
    pub quote: String,
}

impl DiffOptions {
    pub fn decorator(&self) -> Decorator {
        let palette = if self.color {
            Palette::default()
        } else {
            Palette::plain()
        };
        Decorator::new(palette, self.filter.compare, self.info)
    }

    /// Content filters without an explicit comparison fall back to checksums
    pub fn needs_checksum(&self) -> bool {
        match self.filter.compare {
            CompareMode::Checksum => true,
            CompareMode::None => self.filter.content != ContentFilter::All,
            CompareMode::Size | CompareMode::Time => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checksum_needed_for_content_filter_without_comparison() {
        let mut options = DiffOptions::default();
        assert!(!options.needs_checksum());

        options.filter.content = ContentFilter::Diff;
        assert!(options.needs_checksum());

        options.filter.compare = CompareMode::Size;
        assert!(!options.needs_checksum());

        options.filter.compare = CompareMode::Checksum;
        options.filter.content = ContentFilter::All;
        assert!(options.needs_checksum());
    }
}
