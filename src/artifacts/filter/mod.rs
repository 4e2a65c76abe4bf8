//! Synchronized visibility filtering
//!
//! Both trees of a comparison are walked in lockstep, children before parents,
//! and a single hide decision per path is applied to the node on each side.
//! Because children are decided first, a directory can look at how many of its
//! children survived.
//!
//! Roots are never hidden.

use crate::artifacts::entry::Entry;
use crate::artifacts::tree::{NodeId, ROOT, Tree};
use crate::{CompareMode, ContentFilter, KindFilter, OrphanFilter};
use derive_new::new;
use std::borrow::Borrow;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, new)]
pub struct FilterOptions {
    pub orphans: OrphanFilter,
    pub kind: KindFilter,
    pub content: ContentFilter,
    /// Hide directories without visible children on both sides
    pub hide_empty: bool,
    pub compare: CompareMode,
}

impl FilterOptions {
    /// Whether `entry` is hidden, given how its node looks after its children
    /// were filtered. `has_visible_children` is true when either side still
    /// shows a child.
    pub fn decide(&self, entry: &Entry, has_visible_children: bool) -> bool {
        // a directory keeping visible descendants is not hidden by the orphan
        // scope, otherwise those descendants could never be rendered
        let orphan_scoped = !(entry.is_dir && has_visible_children) && self.hides_orphan(entry);

        orphan_scoped
            || if entry.is_dir {
                self.kind == KindFilter::FilesOnly || (self.hide_empty && !has_visible_children)
            } else {
                self.kind == KindFilter::FoldersOnly || self.hides_content(entry)
            }
    }

    /// Per-entry decision without tree context, used by the listing modes.
    /// The empty directory rule does not apply here.
    pub fn hides_entry(&self, entry: &Entry) -> bool {
        self.hides_orphan(entry)
            || if entry.is_dir {
                self.kind == KindFilter::FilesOnly
            } else {
                self.kind == KindFilter::FoldersOnly || self.hides_content(entry)
            }
    }

    fn hides_orphan(&self, entry: &Entry) -> bool {
        match self.orphans {
            OrphanFilter::All => false,
            OrphanFilter::Only => !entry.is_orphan_anywhere(),
            OrphanFilter::Hide => entry.is_orphan_anywhere(),
            OrphanFilter::OnlyLeft => !entry.left.is_orphan,
            OrphanFilter::OnlyRight => !entry.right.is_orphan,
        }
    }

    fn hides_content(&self, entry: &Entry) -> bool {
        match self.content {
            ContentFilter::All => false,
            ContentFilter::Diff => self.is_same(entry),
            ContentFilter::Same => !self.is_same(entry),
        }
    }

    /// Without an explicit comparison, content is compared by checksum
    pub fn is_same(&self, entry: &Entry) -> bool {
        use crate::artifacts::entry::{SizeState, TimeState};

        match self.compare {
            CompareMode::Size => {
                entry.left.size_state == SizeState::SameSize
                    && entry.right.size_state == SizeState::SameSize
            }
            CompareMode::Time => {
                entry.left.time_state == TimeState::SameTime
                    && entry.right.time_state == TimeState::SameTime
            }
            CompareMode::Checksum | CompareMode::None => !entry.is_diff,
        }
    }
}

/// Filter two trees built from the same path sequence
pub fn filter_trees<T: Borrow<Entry>>(
    left: &mut Tree<T>,
    right: &mut Tree<T>,
    options: &FilterOptions,
) {
    filter_nodes(left, right, ROOT, ROOT, options);
}

fn filter_nodes<T: Borrow<Entry>>(
    left: &mut Tree<T>,
    right: &mut Tree<T>,
    left_id: NodeId,
    right_id: NodeId,
    options: &FilterOptions,
) {
    let left_children = left.children(left_id).to_vec();
    let right_children = right.children(right_id).to_vec();

    if left_children.len() != right_children.len() {
        tracing::debug!(
            left = left_children.len(),
            right = right_children.len(),
            node = left.text(left_id),
            "trees diverge, skipping subtree"
        );
        return;
    }

    for (&l, &r) in left_children.iter().zip(&right_children) {
        filter_nodes(left, right, l, r, options);
    }

    if left.parent(left_id).is_none() {
        return;
    }

    let Some(entry) = left.data(left_id) else {
        return;
    };
    let has_visible_children =
        left.count_children(left_id, true) > 0 || right.count_children(right_id, true) > 0;
    let hide = options.decide(entry.borrow(), has_visible_children);

    left.hide_node(left_id, hide);
    right.hide_node(right_id, hide);
}
