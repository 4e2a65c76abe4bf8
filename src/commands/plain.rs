use crate::areas::comparison::Comparison;
use crate::artifacts::entry::{DirContents, Side};
use crate::commands::DiffOptions;

impl Comparison {
    pub fn plain(&self, options: &DiffOptions) -> anyhow::Result<()> {
        let contents = self.contents(&options.walk, options.needs_checksum());

        for line in plain_lines(&contents, options) {
            writeln!(self.writer(), "{}", line)?;
        }

        Ok(())
    }
}

/// `<q>left path<q> <q>right path<q>` for every shown entry, without decoration
pub fn plain_lines(contents: &DirContents, options: &DiffOptions) -> Vec<String> {
    let (first, second) = if options.swap {
        (Side::Right, Side::Left)
    } else {
        (Side::Left, Side::Right)
    };
    let q = options.quote.as_str();

    contents
        .entries
        .iter()
        .filter(|entry| !options.filter.hides_entry(entry))
        .map(|entry| {
            format!(
                "{q}{}{q} {q}{}{q}",
                entry.side(first).path.display(),
                entry.side(second).path.display(),
            )
        })
        .collect()
}
