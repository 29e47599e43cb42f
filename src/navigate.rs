//! Caret navigation across field boundaries.
//!
//! Fields must feel like single tokens you step over with Left/Right, yet
//! still be enterable at their edges for editing. Each call is stateless:
//! the decision is a pure function of the current selection and node tree.
//! Anything not covered by the boundary rules passes through to the
//! surface's native caret movement.

use crate::keys::{Key, KeyDisposition};
use crate::sentinel::{field_is_empty, is_sentinel_run};
use crate::surface::{Caret, CaretNode, EditSurface, Selection, SurfaceNode};

/// Handle an ArrowLeft/ArrowRight press. Returns `Handled` when the caret
/// was repositioned at a segment boundary, `PassThrough` otherwise (range
/// selections, plain text interiors, stale positions).
pub fn handle_arrow<S: EditSurface>(surface: &mut S, key: Key) -> KeyDisposition {
    if !matches!(key, Key::ArrowLeft | Key::ArrowRight) {
        return KeyDisposition::PassThrough;
    }
    let Some(selection) = surface.selection() else {
        return KeyDisposition::PassThrough;
    };
    if !selection.is_collapsed() {
        return KeyDisposition::PassThrough;
    }

    let caret = selection.focus;
    let CaretNode::Child(index) = caret.node else {
        // Root slots have no boundary rule of their own.
        return KeyDisposition::PassThrough;
    };
    let Some(node) = surface.node(index) else {
        // Stale caret after a re-render: not ours to fix.
        return KeyDisposition::PassThrough;
    };

    let target = match node {
        SurfaceNode::Field { content, .. } if field_is_empty(content) => match key {
            // Step out of an empty field to just before/after it.
            Key::ArrowLeft => Some(Caret::root(index)),
            _ => Some(Caret::root(index + 1)),
        },
        SurfaceNode::Field { .. } => None,
        SurfaceNode::Text(text) if is_sentinel_run(text) => match key {
            Key::ArrowLeft => match field_end(surface, index.checked_sub(1)) {
                Some(inside) => Some(inside),
                None => Some(Caret::root(index)),
            },
            _ => match field_start(surface, Some(index + 1)) {
                Some(inside) => Some(inside),
                None => Some(Caret::root(index + 1)),
            },
        },
        SurfaceNode::Text(text) => {
            let at_start = caret.offset == 0;
            let at_end = caret.offset == text.chars().count();
            match key {
                Key::ArrowLeft if at_start => field_end(surface, index.checked_sub(1)),
                Key::ArrowRight if at_end => field_start(surface, Some(index + 1)),
                _ => None,
            }
        }
    };

    match target {
        Some(caret) => {
            tracing::trace!(?key, ?caret, "caret repositioned at field boundary");
            surface.set_selection(Selection::collapsed(caret));
            KeyDisposition::Handled
        }
        None => KeyDisposition::PassThrough,
    }
}

/// Caret inside the field at `index`, collapsed to its end — if that node
/// exists and is a field.
fn field_end<S: EditSurface>(surface: &S, index: Option<usize>) -> Option<Caret> {
    let index = index?;
    match surface.node(index) {
        Some(node @ SurfaceNode::Field { .. }) => Some(Caret::in_child(index, node.char_len())),
        _ => None,
    }
}

/// Caret inside the field at `index`, collapsed to its start.
fn field_start<S: EditSurface>(surface: &S, index: Option<usize>) -> Option<Caret> {
    let index = index?;
    match surface.node(index) {
        Some(SurfaceNode::Field { .. }) => Some(Caret::in_child(index, 0)),
        _ => None,
    }
}
