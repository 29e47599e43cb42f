//! Caret and selection types for the editable surface.
//!
//! Mirrors the container/offset addressing of host selection APIs: a caret
//! either sits inside a child node at a character offset, or in a root slot
//! between children (the analogue of "before node i").

/// The container a caret offset is interpreted against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaretNode {
    /// The surface root; the offset is a child index (a slot between nodes).
    Root,
    /// A child node; the offset is a character offset into its text.
    /// Fields are leaves: the offset indexes their content.
    Child(usize),
}

/// A single caret position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caret {
    pub node: CaretNode,
    pub offset: usize,
}

impl Caret {
    /// Caret inside child `index` at character `offset`.
    pub fn in_child(index: usize, offset: usize) -> Self {
        Self {
            node: CaretNode::Child(index),
            offset,
        }
    }

    /// Caret in the root slot before child `index` (after the last child
    /// when `index` equals the child count).
    pub fn root(index: usize) -> Self {
        Self {
            node: CaretNode::Root,
            offset: index,
        }
    }
}

/// A selection range with a fixed anchor and a moving focus.
/// Collapsed (a bare caret) when the two coincide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    /// Where the selection started (fixed point)
    pub anchor: Caret,
    /// Where the caret is (moving point)
    pub focus: Caret,
}

impl Selection {
    pub fn new(anchor: Caret, focus: Caret) -> Self {
        Self { anchor, focus }
    }

    /// Create a collapsed selection (caret with no range)
    pub fn collapsed(caret: Caret) -> Self {
        Self {
            anchor: caret,
            focus: caret,
        }
    }

    /// Check if the selection is a bare caret (anchor == focus)
    pub fn is_collapsed(&self) -> bool {
        self.anchor == self.focus
    }
}
