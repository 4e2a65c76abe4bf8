//! Side-by-side column layout
//!
//! Left lines are padded to the widest left line, measured in terminal columns
//! with escape sequences ignored, so colored labels keep the right column
//! aligned. Tabs are expanded to spaces first, since a tab inside the right
//! column would otherwise stop at a terminal column that depends on the
//! left line.

use derive_new::new;
use std::borrow::Cow;
use unicode_width::UnicodeWidthStr;

pub const DEFAULT_GAP: usize = 4;
pub const TAB_WIDTH: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct Compositor {
    /// Blank columns between the widest left line and the right column
    gap: usize,
}

impl Default for Compositor {
    fn default() -> Self {
        Compositor::new(DEFAULT_GAP)
    }
}

impl Compositor {
    /// Zip both columns into output lines. The shorter column is padded with
    /// empty lines, trailing blanks are never emitted.
    pub fn compose(&self, left: &[String], right: &[String]) -> Vec<String> {
        let left = left.iter().map(|line| expand_tabs(line)).collect::<Vec<_>>();
        let right = right.iter().map(|line| expand_tabs(line)).collect::<Vec<_>>();

        let column = left.iter().map(|line| visual_width(line)).max().unwrap_or(0);
        let rows = left.len().max(right.len());

        (0..rows)
            .map(|row| {
                let l = left.get(row).map(|line| &**line).unwrap_or("");
                match right.get(row) {
                    Some(r) if !r.is_empty() => {
                        let padding = column - visual_width(l) + self.gap;
                        format!("{}{}{}", l, " ".repeat(padding), r)
                    }
                    _ => l.to_string(),
                }
            })
            .collect()
    }
}

/// Replace tabs with spaces up to the next multiple of `TAB_WIDTH`
pub fn expand_tabs(line: &str) -> Cow<'_, str> {
    if !line.contains('\t') {
        return Cow::Borrowed(line);
    }

    let mut expanded = String::with_capacity(line.len() + TAB_WIDTH);
    for (i, segment) in line.split('\t').enumerate() {
        if i > 0 {
            let stop = TAB_WIDTH - visual_width(&expanded) % TAB_WIDTH;
            expanded.push_str(&" ".repeat(stop));
        }
        expanded.push_str(segment);
    }
    Cow::Owned(expanded)
}

/// Terminal columns taken by `text` once escape sequences are removed
pub fn visual_width(text: &str) -> usize {
    let stripped = strip_ansi_escapes::strip(text.as_bytes());
    std::str::from_utf8(&stripped).unwrap_or(text).width()
}
