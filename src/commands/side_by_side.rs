use crate::areas::comparison::Comparison;
use crate::artifacts::compositor::Compositor;
use crate::artifacts::decoration::Decorator;
use crate::artifacts::entry::{DirContents, Entry, Side};
use crate::artifacts::filter::filter_trees;
use crate::artifacts::tree::builder::build_side_tree;
use crate::artifacts::tree::{ROOT, Tree};
use crate::commands::DiffOptions;
use std::rc::Rc;

/// Extra left padding of the right tree in the tree style
pub const RIGHT_TREE_OFFSET: usize = 6;

impl Comparison {
    pub fn side_by_side(&self, options: &DiffOptions) -> anyhow::Result<()> {
        let contents = self.contents(&options.walk, options.needs_checksum());

        for line in side_by_side_lines(&contents, options) {
            writeln!(self.writer(), "{}", line)?;
        }

        Ok(())
    }
}

pub fn side_by_side_lines(contents: &DirContents, options: &DiffOptions) -> Vec<String> {
    let decorator = options.decorator();
    let mut left = side_tree(contents, Side::Left, &decorator, options.left_alias.as_deref());
    let mut right = side_tree(contents, Side::Right, &decorator, options.right_alias.as_deref());

    if options.collapse_depth > 0 {
        collapse(&mut left, options.collapse_depth);
        collapse(&mut right, options.collapse_depth);
    }

    filter_trees(&mut left, &mut right, &options.filter);

    if options.swap {
        std::mem::swap(&mut left, &mut right);
    }

    left.set_render_style(options.style);
    right
        .set_render_style(options.style)
        .set_render_offset(RIGHT_TREE_OFFSET);

    Compositor::default().compose(&left.render(), &right.render())
}

fn side_tree(
    contents: &DirContents,
    side: Side,
    decorator: &Decorator,
    alias: Option<&str>,
) -> Tree<Rc<Entry>> {
    let mut tree = build_side_tree(contents, side, decorator);
    if let Some(alias) = alias {
        tree.set_text(ROOT, decorator.root(alias));
    }
    tree
}

/// Fold every directory at `depth` (top-level entries are at depth 1)
fn collapse(tree: &mut Tree<Rc<Entry>>, depth: usize) {
    let folded = tree
        .iterate(ROOT, |node| node.depth() == depth && !node.children().is_empty())
        .collect::<Vec<_>>();

    for id in folded {
        tree.hide_children(id, true);
    }
}
