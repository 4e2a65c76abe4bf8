use colored::{Color, Colorize};

/// Visual treatment applied to a label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Treatment {
    Plain,
    Root,
    Missing,
    Orphan,
    Bigger,
    Smaller,
    Newer,
    Older,
    Diff,
}

/// Colors used for each treatment, `None` leaves the text untouched
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    root: Option<Color>,
    missing: Option<Color>,
    orphan: Option<Color>,
    bigger: Option<Color>,
    smaller: Option<Color>,
    newer: Option<Color>,
    older: Option<Color>,
    diff: Option<Color>,
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            root: Some(Color::BrightYellow),
            missing: Some(Color::Blue),
            orphan: Some(Color::BrightBlue),
            bigger: Some(Color::BrightGreen),
            smaller: Some(Color::BrightRed),
            newer: Some(Color::BrightGreen),
            older: Some(Color::BrightRed),
            diff: Some(Color::BrightMagenta),
        }
    }
}

impl Palette {
    pub fn plain() -> Self {
        Palette {
            root: None,
            missing: None,
            orphan: None,
            bigger: None,
            smaller: None,
            newer: None,
            older: None,
            diff: None,
        }
    }

    fn color_of(&self, treatment: Treatment) -> Option<Color> {
        match treatment {
            Treatment::Plain => None,
            Treatment::Root => self.root,
            Treatment::Missing => self.missing,
            Treatment::Orphan => self.orphan,
            Treatment::Bigger => self.bigger,
            Treatment::Smaller => self.smaller,
            Treatment::Newer => self.newer,
            Treatment::Older => self.older,
            Treatment::Diff => self.diff,
        }
    }

    pub fn paint(&self, text: &str, treatment: Treatment) -> String {
        match self.color_of(treatment) {
            Some(color) => text.color(color).to_string(),
            None => text.to_string(),
        }
    }
}
