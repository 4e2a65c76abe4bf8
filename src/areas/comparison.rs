use crate::areas::workspace::{WalkOptions, Workspace, union_paths};
use crate::artifacts::entry::inspector::Inspector;
use crate::artifacts::entry::DirContents;
use std::cell::{RefCell, RefMut};
use std::path::PathBuf;
use std::rc::Rc;

/// A comparison session between two directory roots
pub struct Comparison {
    left: Workspace,
    right: Workspace,
    writer: RefCell<Box<dyn std::io::Write>>,
}

impl Comparison {
    pub fn new(left: &str, right: &str, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let left = normalize_root(left);
        let right = normalize_root(right);

        for root in [&left, &right] {
            if !root.is_dir() {
                anyhow::bail!("The specified path is not a directory: {:?}", root);
            }
        }

        Ok(Comparison {
            left: Workspace::new(left.into_boxed_path()),
            right: Workspace::new(right.into_boxed_path()),
            writer: RefCell::new(writer),
        })
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    /// Walk both sides and inspect every path of their union
    pub fn contents(&self, walk: &WalkOptions, with_checksum: bool) -> DirContents {
        let paths = union_paths(&self.left, &self.right, walk);
        let inspector = Inspector::new(self.left.path(), self.right.path(), with_checksum);

        let entries = paths
            .iter()
            .map(|norm_path| Rc::new(inspector.inspect(norm_path)))
            .collect::<Vec<_>>();

        tracing::debug!(entries = entries.len(), "compared directory contents");
        DirContents::new(
            self.left.path().to_path_buf(),
            self.right.path().to_path_buf(),
            entries,
        )
    }
}

/// A root always ends with exactly one `/`
pub fn normalize_root(root: &str) -> PathBuf {
    let trimmed = root.trim_end_matches('/');
    if trimmed.is_empty() && root.starts_with('/') {
        return PathBuf::from("/");
    }
    PathBuf::from(format!("{}/", trimmed))
}
