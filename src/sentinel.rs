//! Zero-width sentinel handling.
//!
//! A zero-width space is kept directly after every field node so the caret
//! has a stable landing position distinguishable from "inside the field".
//! Sentinels are a rendering convention only: they never appear in the
//! extracted value and never count as content.

use crate::surface::{EditSurface, SurfaceNode};

/// Zero-width space used for caret positioning around fields.
pub const SENTINEL: char = '\u{200B}';

/// Check if text consists solely of sentinel characters.
/// Empty text is vacuously sentinel-only.
pub fn is_sentinel_only(text: &str) -> bool {
    text.chars().all(|c| c == SENTINEL)
}

/// Check if a text node holds a sentinel run (non-empty, all sentinels).
pub fn is_sentinel_run(text: &str) -> bool {
    !text.is_empty() && is_sentinel_only(text)
}

/// Strip all sentinel characters from text.
pub fn strip_sentinels(text: &str) -> String {
    text.chars().filter(|c| *c != SENTINEL).collect()
}

/// Check if a field's content is empty once sentinels are stripped.
pub fn field_is_empty(content: &str) -> bool {
    strip_sentinels(content).trim().is_empty()
}

/// A sentinel text node.
pub fn sentinel_node() -> SurfaceNode {
    SurfaceNode::Text(SENTINEL.to_string())
}

/// Ensure every field node is directly followed by a sentinel run,
/// inserting one where missing. Idempotent.
pub fn ensure_sentinels<S: EditSurface>(surface: &mut S) {
    let mut i = 0;
    while i < surface.node_count() {
        let is_field = surface.node(i).is_some_and(SurfaceNode::is_field);
        if is_field {
            let has_run = matches!(
                surface.node(i + 1),
                Some(SurfaceNode::Text(text)) if is_sentinel_run(text)
            );
            if !has_run {
                surface.insert_node(i + 1, sentinel_node());
            }
        }
        i += 1;
    }
}
