use crate::areas::comparison::Comparison;
use crate::artifacts::compositor::Compositor;
use crate::artifacts::entry::{DirContents, Side};
use crate::commands::DiffOptions;

impl Comparison {
    pub fn flat(&self, options: &DiffOptions) -> anyhow::Result<()> {
        let contents = self.contents(&options.walk, options.needs_checksum());

        for line in flat_lines(&contents, options) {
            writeln!(self.writer(), "{}", line)?;
        }

        Ok(())
    }
}

/// Root labels, then one relative path per side for every shown entry
pub fn flat_lines(contents: &DirContents, options: &DiffOptions) -> Vec<String> {
    let decorator = options.decorator();
    let (first, second) = if options.swap {
        (Side::Right, Side::Left)
    } else {
        (Side::Left, Side::Right)
    };

    let root_label = |side: Side| {
        let alias = match side {
            Side::Left => options.left_alias.clone(),
            Side::Right => options.right_alias.clone(),
        };
        decorator.root(&alias.unwrap_or_else(|| contents.root(side).display().to_string()))
    };

    let mut left = vec![root_label(first)];
    let mut right = vec![root_label(second)];

    for entry in contents
        .entries
        .iter()
        .filter(|entry| !options.filter.hides_entry(entry))
    {
        left.push(decorator.decorate_text(entry, first, &entry.norm_path));
        right.push(decorator.decorate_text(entry, second, &entry.norm_path));
    }

    Compositor::default().compose(&left, &right)
}
