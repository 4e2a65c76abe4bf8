//! Per-node label decoration
//!
//! The first matching rule decides how a name is shown on one side:
//!
//! 1. missing on this side: a placeholder as wide as the real name
//! 2. orphan on this side: the orphan treatment
//! 3. a file under the active comparison (size, time or checksum) that
//!    differs: the matching treatment, optionally followed by details
//! 4. otherwise the plain name
//!
//! Directories only ever get the missing or orphan treatment.

pub mod palette;

use crate::CompareMode;
use crate::artifacts::decoration::palette::{Palette, Treatment};
use crate::artifacts::entry::{Entry, Side, SizeState, TimeState};
use chrono::SecondsFormat;
use derive_new::new;
use unicode_width::UnicodeWidthStr;

const PLACEHOLDER: char = '░';

#[derive(Debug, Clone, new)]
pub struct Decorator {
    palette: Palette,
    compare: CompareMode,
    /// Append size, timestamp or checksum to differing files
    info: bool,
}

impl Decorator {
    /// No colors, no comparison
    pub fn plain() -> Self {
        Decorator::new(Palette::plain(), CompareMode::None, false)
    }

    pub fn root(&self, text: &str) -> String {
        self.palette.paint(text, Treatment::Root)
    }

    pub fn decorate(&self, entry: &Entry, side: Side) -> String {
        self.decorate_text(entry, side, &entry.name)
    }

    /// Decorate `text` (the name or any other rendering of the entry's path)
    pub fn decorate_text(&self, entry: &Entry, side: Side, text: &str) -> String {
        let facts = entry.side(side);

        if facts.is_missing {
            return self.palette.paint(&placeholder(text), Treatment::Missing);
        }
        if facts.is_orphan {
            return self.palette.paint(text, Treatment::Orphan);
        }
        if entry.is_dir {
            return self.palette.paint(text, Treatment::Plain);
        }

        let (treatment, details) = match self.compare {
            CompareMode::Size => match facts.size_state {
                SizeState::SameSize => (Treatment::Plain, None),
                state => (
                    if state == SizeState::Bigger {
                        Treatment::Bigger
                    } else {
                        Treatment::Smaller
                    },
                    Some(format!("{} bytes", facts.size)),
                ),
            },
            CompareMode::Time => match facts.time_state {
                TimeState::SameTime => (Treatment::Plain, None),
                state => (
                    if state == TimeState::Newer {
                        Treatment::Newer
                    } else {
                        Treatment::Older
                    },
                    facts
                        .mod_time
                        .map(|time| time.to_rfc3339_opts(SecondsFormat::Secs, true)),
                ),
            },
            CompareMode::Checksum if entry.is_diff => (Treatment::Diff, facts.checksum.clone()),
            CompareMode::Checksum | CompareMode::None => (Treatment::Plain, None),
        };

        let mut label = self.palette.paint(text, treatment);
        if self.info {
            if let Some(details) = details {
                label.push_str(&format!(" ({})", details));
            }
        }
        label
    }
}

/// Filler with the same display width as `text`
pub fn placeholder(text: &str) -> String {
    PLACEHOLDER.to_string().repeat(text.width())
}
