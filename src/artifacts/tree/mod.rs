//! Arena backed display tree
//!
//! A [`Tree`] owns every [`Node`] in a flat vector; nodes refer to their parent
//! and children by [`NodeId`]. Children are kept in insertion order and the
//! parent link is only used for traversal.
//!
//! Nodes carry two independent visibility flags:
//!
//! - `hidden`: the node and its whole subtree are left out of rendering
//! - `hide_children`: the node is rendered, its descendants are not
//!
//! Both flags only affect rendering; the structure itself never shrinks.

pub mod builder;
pub mod render;

use crate::artifacts::tree::render::{Level, LineRenderer, RenderContext};
use crate::RenderStyle;
use std::rc::Rc;

pub type NodeId = usize;

/// Id of the root node of every tree
pub const ROOT: NodeId = 0;

/// Produces the default display text of a payload
pub trait Label {
    fn label(&self) -> String;
}

impl Label for str {
    fn label(&self) -> String {
        self.to_string()
    }
}

impl Label for String {
    fn label(&self) -> String {
        self.clone()
    }
}

impl<T: Label + ?Sized> Label for Rc<T> {
    fn label(&self) -> String {
        self.as_ref().label()
    }
}

#[derive(Debug, Clone)]
pub struct Node<T> {
    data: Option<T>,
    text: String,
    hidden: bool,
    hide_children: bool,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    depth: usize,
}

impl<T> Node<T> {
    fn new(data: Option<T>, text: String, parent: Option<NodeId>, depth: usize) -> Self {
        Node {
            data,
            text,
            hidden: false,
            hide_children: false,
            parent,
            children: Vec::new(),
            depth,
        }
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn depth(&self) -> usize {
        self.depth
    }
}

#[derive(Debug)]
pub struct Tree<T> {
    nodes: Vec<Node<T>>,
    offset: usize,
    renderer: Box<dyn LineRenderer>,
}

impl<T> Tree<T> {
    /// A tree holding only a root labelled `text`, rendered in the tree style
    pub fn new(text: impl Into<String>) -> Self {
        Tree {
            nodes: vec![Node::new(None, text.into(), None, 0)],
            offset: 0,
            renderer: Box::new(RenderStyle::Tree),
        }
    }

    pub fn root(&self) -> NodeId {
        ROOT
    }

    /// Panics if `id` was not handed out by this tree
    pub fn node(&self, id: NodeId) -> &Node<T> {
        &self.nodes[id]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    pub fn data(&self, id: NodeId) -> Option<&T> {
        self.node(id).data()
    }

    pub fn text(&self, id: NodeId) -> &str {
        self.node(id).text()
    }

    pub fn set_text(&mut self, id: NodeId, text: impl Into<String>) -> &mut Self {
        self.nodes[id].text = text.into();
        self
    }

    pub fn is_hidden(&self, id: NodeId) -> bool {
        self.node(id).is_hidden()
    }

    pub fn hide_node(&mut self, id: NodeId, hidden: bool) -> &mut Self {
        self.nodes[id].hidden = hidden;
        self
    }

    pub fn hide_children(&mut self, id: NodeId, hidden: bool) -> &mut Self {
        self.nodes[id].hide_children = hidden;
        self
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent()
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node(id).children()
    }

    pub fn depth(&self, id: NodeId) -> usize {
        self.node(id).depth()
    }

    /// Attach a child with an explicit display text
    pub fn add_child_with_text(
        &mut self,
        parent: NodeId,
        data: T,
        text: impl Into<String>,
    ) -> NodeId {
        let id = self.nodes.len();
        let depth = self.nodes[parent].depth + 1;
        self.nodes
            .push(Node::new(Some(data), text.into(), Some(parent), depth));
        self.nodes[parent].children.push(id);
        id
    }

    /// `n > 0` counts from the front starting at 1, `n < 0` from the back
    /// (`-1` is the last child). `0` and out of range give `None`.
    pub fn child(&self, id: NodeId, n: isize) -> Option<NodeId> {
        let children = self.children(id);
        let index = match n {
            0 => return None,
            n if n > 0 => n - 1,
            n => children.len() as isize + n,
        };
        if index < 0 {
            return None;
        }
        children.get(index as usize).copied()
    }

    /// All children, or only those that are not hidden
    pub fn count_children(&self, id: NodeId, visible: bool) -> usize {
        let children = self.children(id);
        if visible {
            children.iter().filter(|&&c| !self.nodes[c].hidden).count()
        } else {
            children.len()
        }
    }

    /// Pre-order walk starting at `from`, each call traverses afresh
    pub fn iter_from(&self, from: NodeId) -> PreOrder<'_, T> {
        PreOrder {
            tree: self,
            stack: vec![from],
        }
    }

    /// Pre-order walk from `from` yielding only nodes accepted by `predicate`
    pub fn iterate<'t, P>(
        &'t self,
        from: NodeId,
        predicate: P,
    ) -> impl Iterator<Item = NodeId> + 't
    where
        P: Fn(&Node<T>) -> bool + 't,
    {
        self.iter_from(from).filter(move |&id| predicate(&self.nodes[id]))
    }

    pub fn set_render_style(&mut self, renderer: impl LineRenderer + 'static) -> &mut Self {
        self.renderer = Box::new(renderer);
        self
    }

    pub fn set_render_offset(&mut self, offset: usize) -> &mut Self {
        self.offset = offset;
        self
    }

    /// One line per visible node in visible pre-order.
    ///
    /// Hidden nodes are skipped together with their subtree and do not count
    /// as siblings; collapsed nodes are emitted without their descendants.
    pub fn render(&self) -> Vec<String> {
        let mut lines = Vec::new();
        let mut levels = Vec::new();
        self.render_node(ROOT, &mut levels, &mut lines);
        lines
    }

    fn render_node(&self, id: NodeId, levels: &mut Vec<Level>, lines: &mut Vec<String>) {
        let node = &self.nodes[id];
        let visible_children = self.count_children(id, true);
        lines.push(self.renderer.render_line(&RenderContext {
            offset: self.offset,
            levels: levels.as_slice(),
            text: &node.text,
            collapsed: node.hide_children,
            visible_children,
        }));

        if node.hide_children {
            return;
        }

        levels.push(Level::new(0, visible_children));
        for &child in &node.children {
            if self.nodes[child].hidden {
                continue;
            }
            if let Some(level) = levels.last_mut() {
                level.current_child += 1;
            }
            self.render_node(child, levels, lines);
        }
        levels.pop();
    }
}

impl<T: Label> Tree<T> {
    /// Attach a child whose text is the payload's label
    pub fn add_child(&mut self, parent: NodeId, data: T) -> NodeId {
        let text = data.label();
        self.add_child_with_text(parent, data, text)
    }

    /// Attach a node after the last child of `id`'s parent; `None` for the root
    pub fn add_sibling(&mut self, id: NodeId, data: T) -> Option<NodeId> {
        let parent = self.parent(id)?;
        Some(self.add_child(parent, data))
    }

    /// Replace the payload and reset the text to its label
    pub fn set_data(&mut self, id: NodeId, data: T) -> &mut Self {
        let node = &mut self.nodes[id];
        node.text = data.label();
        node.data = Some(data);
        self
    }
}

pub struct PreOrder<'t, T> {
    tree: &'t Tree<T>,
    stack: Vec<NodeId>,
}

impl<T> Iterator for PreOrder<'_, T> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        self.stack
            .extend(self.tree.nodes[id].children.iter().rev().copied());
        Some(id)
    }
}
