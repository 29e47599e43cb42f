//! TreeSurface - in-memory reference implementation of `EditSurface`.
//!
//! Applies every write synchronously, so hosts built on it can call the
//! controller's `on_rendered` hook immediately after a structural change.

use crate::measure::WidthHint;

use super::node::SurfaceNode;
use super::selection::{Caret, CaretNode, Selection};
use super::EditSurface;

/// In-memory editable surface: an ordered node list plus a selection range.
#[derive(Debug, Clone, Default)]
pub struct TreeSurface {
    nodes: Vec<SurfaceNode>,
    hints: Vec<Option<WidthHint>>,
    selection: Option<Selection>,
    focused: bool,
}

impl TreeSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a surface with the given children (test/host convenience).
    pub fn with_nodes(nodes: Vec<SurfaceNode>) -> Self {
        let hints = vec![None; nodes.len()];
        Self {
            nodes,
            hints,
            selection: None,
            focused: false,
        }
    }

    /// All children, in document order.
    pub fn nodes(&self) -> &[SurfaceNode] {
        &self.nodes
    }

    /// The width hint last written back for the node at `index`.
    pub fn width_hint(&self, index: usize) -> Option<WidthHint> {
        self.hints.get(index).copied().flatten()
    }

    /// Whether focus has been requested since the last structural reset.
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Keep a caret addressable when the node at `removed` goes away:
    /// a caret inside the removed node degrades to the root slot it
    /// occupied, later positions shift down by one.
    fn shift_caret_after_remove(caret: Caret, removed: usize) -> Caret {
        match caret.node {
            CaretNode::Child(i) if i == removed => Caret::root(removed),
            CaretNode::Child(i) if i > removed => Caret::in_child(i - 1, caret.offset),
            CaretNode::Root if caret.offset > removed => Caret::root(caret.offset - 1),
            _ => caret,
        }
    }

    fn shift_caret_after_insert(caret: Caret, inserted: usize) -> Caret {
        match caret.node {
            CaretNode::Child(i) if i >= inserted => Caret::in_child(i + 1, caret.offset),
            CaretNode::Root if caret.offset >= inserted => Caret::root(caret.offset + 1),
            _ => caret,
        }
    }
}

impl EditSurface for TreeSurface {
    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn node(&self, index: usize) -> Option<&SurfaceNode> {
        self.nodes.get(index)
    }

    fn replace_children(&mut self, nodes: Vec<SurfaceNode>) {
        self.hints = vec![None; nodes.len()];
        self.nodes = nodes;
        self.selection = None;
    }

    fn insert_node(&mut self, index: usize, node: SurfaceNode) {
        let index = index.min(self.nodes.len());
        self.nodes.insert(index, node);
        self.hints.insert(index, None);
        if let Some(sel) = self.selection {
            self.selection = Some(Selection::new(
                Self::shift_caret_after_insert(sel.anchor, index),
                Self::shift_caret_after_insert(sel.focus, index),
            ));
        }
    }

    fn remove_node(&mut self, index: usize) {
        if index >= self.nodes.len() {
            return;
        }
        self.nodes.remove(index);
        self.hints.remove(index);
        if let Some(sel) = self.selection {
            self.selection = Some(Selection::new(
                Self::shift_caret_after_remove(sel.anchor, index),
                Self::shift_caret_after_remove(sel.focus, index),
            ));
        }
    }

    fn set_node_text(&mut self, index: usize, text: &str) {
        let Some(node) = self.nodes.get_mut(index) else {
            return;
        };
        match node {
            SurfaceNode::Text(content) => *content = text.to_string(),
            SurfaceNode::Field { content, .. } => *content = text.to_string(),
        }
        // Clamp any caret that pointed past the new end of this node.
        let char_len = self.nodes[index].char_len();
        if let Some(sel) = &mut self.selection {
            for caret in [&mut sel.anchor, &mut sel.focus] {
                if caret.node == CaretNode::Child(index) && caret.offset > char_len {
                    caret.offset = char_len;
                }
            }
        }
    }

    fn selection(&self) -> Option<Selection> {
        self.selection
    }

    fn set_selection(&mut self, selection: Selection) {
        self.selection = Some(selection);
    }

    fn focus(&mut self) {
        self.focused = true;
    }

    fn set_width_hint(&mut self, index: usize, hint: Option<WidthHint>) {
        if index >= self.nodes.len() || !self.nodes[index].is_field() {
            return;
        }
        self.hints[index] = hint;
    }
}
