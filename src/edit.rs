//! Backspace and Delete semantics around fields.
//!
//! Fields are cleared as a unit once down to their last character, and an
//! emptied field is removed outright when deleted from its sentinel run.
//! The first Backspace behind a non-empty field enters it instead of
//! deleting through it. Everything else is native surface editing.

use crate::sentinel::{field_is_empty, is_sentinel_run};
use crate::surface::{Caret, CaretNode, EditSurface, Selection, SurfaceNode};

/// What an edit command did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// Not covered by the field rules; the surface edits natively.
    PassThrough,
    /// Only the caret moved (enter/exit a field), nothing deleted.
    Repositioned,
    /// The node tree changed (field cleared or removed).
    Mutated,
}

impl EditOutcome {
    /// Whether the core consumed the key press.
    pub fn is_handled(&self) -> bool {
        !matches!(self, EditOutcome::PassThrough)
    }
}

/// Handle a Backspace press with a collapsed selection.
pub fn handle_backspace<S: EditSurface>(surface: &mut S) -> EditOutcome {
    let Some(caret) = collapsed_caret(surface) else {
        return EditOutcome::PassThrough;
    };
    let CaretNode::Child(index) = caret.node else {
        return EditOutcome::PassThrough;
    };

    // Snapshot the facts before mutating; surface reads borrow it.
    enum Spot {
        SentinelAfterField { field: usize, field_len: usize, empty: bool },
        Field { char_len: usize },
        Other,
    }

    let spot = match surface.node(index) {
        Some(SurfaceNode::Text(text)) if is_sentinel_run(text) => {
            match index.checked_sub(1).and_then(|i| surface.node(i)) {
                Some(node @ SurfaceNode::Field { content, .. }) => Spot::SentinelAfterField {
                    field: index - 1,
                    field_len: node.char_len(),
                    empty: field_is_empty(content),
                },
                _ => Spot::Other,
            }
        }
        Some(node @ SurfaceNode::Field { .. }) => Spot::Field {
            char_len: node.char_len(),
        },
        _ => Spot::Other,
    };

    match spot {
        // Emptied field behind the caret: delete it and its sentinel.
        Spot::SentinelAfterField { field, empty: true, .. } => {
            tracing::debug!(field, "backspace removes emptied field");
            surface.remove_node(index);
            surface.remove_node(field);
            surface.set_selection(Selection::collapsed(nearest_neighbor(surface, field)));
            EditOutcome::Mutated
        }
        // Non-empty field behind the caret: first Backspace enters it.
        Spot::SentinelAfterField {
            field,
            field_len,
            empty: false,
        } => {
            surface.set_selection(Selection::collapsed(Caret::in_child(field, field_len)));
            EditOutcome::Repositioned
        }
        Spot::Field { char_len } if char_len == 1 && caret.offset == 1 => {
            // Down to its last character: clear the whole field so it never
            // sits showing a single stray character. Longer content deletes
            // natively, character by character.
            tracing::debug!(index, "backspace clears field to empty");
            surface.set_node_text(index, "");
            surface.set_selection(Selection::collapsed(Caret::in_child(index, 0)));
            EditOutcome::Mutated
        }
        Spot::Field { .. } if caret.offset == 0 => {
            // Exit the field instead of deleting backward into the
            // previous literal run.
            surface.set_selection(Selection::collapsed(Caret::root(index)));
            EditOutcome::Repositioned
        }
        _ => EditOutcome::PassThrough,
    }
}

/// Handle a forward Delete press with a collapsed selection. Symmetric to
/// Backspace cases 1 and 3 only: forward deletion at a field's end is
/// allowed to continue into the next segment natively.
pub fn handle_delete<S: EditSurface>(surface: &mut S) -> EditOutcome {
    let Some(caret) = collapsed_caret(surface) else {
        return EditOutcome::PassThrough;
    };

    match caret.node {
        // Caret in a root slot directly before an empty field.
        CaretNode::Root => {
            let index = caret.offset;
            if field_at(surface, index).is_some_and(|empty| empty) {
                remove_field_and_sentinel(surface, index);
                surface.set_selection(Selection::collapsed(Caret::root(index)));
                EditOutcome::Mutated
            } else {
                EditOutcome::PassThrough
            }
        }
        CaretNode::Child(index) => {
            let Some(node) = surface.node(index) else {
                return EditOutcome::PassThrough;
            };
            match node {
                SurfaceNode::Text(text) => {
                    // A sentinel run is zero-width: any offset counts as its
                    // end for boundary purposes.
                    let at_end =
                        caret.offset == node.char_len() || is_sentinel_run(text);
                    if at_end && field_at(surface, index + 1).is_some_and(|empty| empty) {
                        tracing::debug!(field = index + 1, "delete removes emptied field");
                        remove_field_and_sentinel(surface, index + 1);
                        surface.set_selection(Selection::collapsed(caret));
                        EditOutcome::Mutated
                    } else {
                        EditOutcome::PassThrough
                    }
                }
                node @ SurfaceNode::Field { .. } => {
                    let char_len = node.char_len();
                    // Down to its last character: clear the whole field.
                    if char_len == 1 && caret.offset == 0 {
                        tracing::debug!(index, "delete clears field to empty");
                        surface.set_node_text(index, "");
                        surface.set_selection(Selection::collapsed(Caret::in_child(index, 0)));
                        EditOutcome::Mutated
                    } else {
                        EditOutcome::PassThrough
                    }
                }
            }
        }
    }
}

/// The collapsed caret, or `None` for missing/range selections (ranges are
/// always native).
fn collapsed_caret<S: EditSurface>(surface: &S) -> Option<Caret> {
    let selection = surface.selection()?;
    selection.is_collapsed().then_some(selection.focus)
}

/// If the node at `index` is a field, whether it is empty.
fn field_at<S: EditSurface>(surface: &S, index: usize) -> Option<bool> {
    match surface.node(index) {
        Some(SurfaceNode::Field { content, .. }) => Some(field_is_empty(content)),
        _ => None,
    }
}

/// Remove the field at `index` together with its trailing sentinel run.
fn remove_field_and_sentinel<S: EditSurface>(surface: &mut S, index: usize) {
    let has_sentinel = matches!(
        surface.node(index + 1),
        Some(SurfaceNode::Text(text)) if is_sentinel_run(text)
    );
    if has_sentinel {
        surface.remove_node(index + 1);
    }
    surface.remove_node(index);
}

/// Caret at the nearest remaining neighbor of a removed node pair:
/// previous node's end, else next node's start, else document start.
fn nearest_neighbor<S: EditSurface>(surface: &S, removed: usize) -> Caret {
    if let Some(prev) = removed.checked_sub(1) {
        if let Some(node) = surface.node(prev) {
            return Caret::in_child(prev, node.char_len());
        }
    }
    if surface.node(removed).is_some() {
        return Caret::in_child(removed, 0);
    }
    Caret::root(0)
}
