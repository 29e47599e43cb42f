//! The editable surface abstraction.
//!
//! The surface is the externally-owned, mutable node tree plus live
//! selection that the editor core reads and writes. `EditSurface` is the
//! port; `TreeSurface` is the in-memory reference implementation used by
//! tests and simple hosts. A platform host (a widget toolkit, a terminal
//! line editor) implements the same trait over its own node storage.

mod node;
mod selection;
mod tree;

pub use node::SurfaceNode;
pub use selection::{Caret, CaretNode, Selection};
pub use tree::TreeSurface;

use crate::measure::WidthHint;

/// Read/write port onto the editable surface.
///
/// All indices address the surface's ordered top-level children; all text
/// offsets are character offsets. Writes that reference an out-of-range
/// index are no-ops; the document may have been re-rendered under a stale
/// caller.
pub trait EditSurface {
    /// Number of top-level children.
    fn node_count(&self) -> usize;

    /// Read a child node, `None` if out of range.
    fn node(&self, index: usize) -> Option<&SurfaceNode>;

    /// Replace all children at once (full re-render, never incremental).
    /// Implementations must drop any existing selection, since every
    /// previously-addressable position is gone.
    fn replace_children(&mut self, nodes: Vec<SurfaceNode>);

    /// Insert a node before `index` (append when `index` == count).
    fn insert_node(&mut self, index: usize, node: SurfaceNode);

    /// Remove the node at `index`.
    fn remove_node(&mut self, index: usize);

    /// Overwrite a node's text: a text run's content, or a field's user
    /// text (the field's placeholder is untouched).
    fn set_node_text(&mut self, index: usize, text: &str);

    /// Current selection range, `None` when the surface has no selection.
    fn selection(&self) -> Option<Selection>;

    /// Move the selection range.
    fn set_selection(&mut self, selection: Selection);

    /// Request input focus.
    fn focus(&mut self);

    /// Write back a rendering width hint for the field at `index`
    /// (`None` clears it). Ignored for non-field nodes.
    fn set_width_hint(&mut self, index: usize, hint: Option<WidthHint>);

    /// Check if the surface has no children.
    fn is_empty(&self) -> bool {
        self.node_count() == 0
    }
}
