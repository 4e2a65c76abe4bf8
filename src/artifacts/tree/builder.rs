//! Tree construction from a sorted path sequence
//!
//! Paths must be sorted byte-lexicographically, free of duplicates, and
//! directories must end with `/`. Under that ordering every path directly
//! follows its parent or a sibling subtree, so a single pass with a stack of
//! open ancestors (one per depth) rebuilds the nesting without splitting paths.
//! Unsorted input is not detected and yields an arbitrary shape.

use crate::artifacts::decoration::Decorator;
use crate::artifacts::entry::{DirContents, Entry, Side};
use crate::artifacts::tree::{Label, NodeId, ROOT, Tree};
use std::rc::Rc;

/// Nesting depth below the root: `a` and `a/` are 0, `a/b` is 1
pub fn path_depth(path: &str) -> usize {
    let separators = path.matches('/').count();
    if path.ends_with('/') {
        separators - 1
    } else {
        separators
    }
}

/// Build a tree whose node texts are taken from `text_of`
pub fn build_with<T, P, I, F>(root_text: impl Into<String>, items: I, mut text_of: F) -> Tree<T>
where
    P: AsRef<str>,
    I: IntoIterator<Item = (P, T)>,
    F: FnMut(&T) -> String,
{
    let mut tree = Tree::new(root_text);
    let mut stack: Vec<NodeId> = vec![ROOT];

    for (path, data) in items {
        let depth = path_depth(path.as_ref());

        // descend into the node added last, one level per step
        while stack.len() <= depth {
            let top = stack[stack.len() - 1];
            match tree.child(top, -1) {
                Some(last) => stack.push(last),
                None => break,
            }
        }
        stack.truncate(depth + 1);

        let parent = stack[stack.len() - 1];
        let text = text_of(&data);
        tree.add_child_with_text(parent, data, text);
    }

    tracing::debug!(nodes = tree.len(), "built tree");
    tree
}

/// Build a tree labelling every node with its payload's label
pub fn build<T, P, I>(root_text: impl Into<String>, items: I) -> Tree<T>
where
    T: Label,
    P: AsRef<str>,
    I: IntoIterator<Item = (P, T)>,
{
    build_with(root_text, items, |data| data.label())
}

/// Build one side of a comparison, decorating every label for `side`
pub fn build_side_tree(
    contents: &DirContents,
    side: Side,
    decorator: &Decorator,
) -> Tree<Rc<Entry>> {
    let root_text = decorator.root(&contents.root(side).display().to_string());
    let items = contents
        .entries
        .iter()
        .map(|entry| (entry.norm_path.clone(), Rc::clone(entry)));

    build_with(root_text, items, |entry| decorator.decorate(entry, side))
}
