//! Value synchronization.
//!
//! The flat string value is always re-derived from the surface; it is never
//! stored as a second source of truth. Sentinels are invisible here.

use crate::sentinel::{is_sentinel_run, strip_sentinels};
use crate::surface::{EditSurface, SurfaceNode};

/// Reconstruct the flat value: text runs and field contents in document
/// order, sentinel characters excluded. Fields are leaves — their content
/// is taken whole, never double-counted.
pub fn extract_value<S: EditSurface>(surface: &S) -> String {
    let mut value = String::new();
    for i in 0..surface.node_count() {
        if let Some(node) = surface.node(i) {
            value.push_str(&strip_sentinels(node.node_text()));
        }
    }
    value
}

/// Whether a derived value counts as real content.
pub fn has_content(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Drop structural debris left behind by host edits: empty text nodes, and
/// sentinel runs that no longer sit directly after a field. Literal
/// whitespace runs are kept — they may be template text.
pub fn cleanup<S: EditSurface>(surface: &mut S) {
    let mut i = 0;
    while i < surface.node_count() {
        let remove = match surface.node(i) {
            Some(SurfaceNode::Text(text)) => {
                if text.is_empty() {
                    true
                } else if is_sentinel_run(text) {
                    let after_field = i > 0 && surface.node(i - 1).is_some_and(SurfaceNode::is_field);
                    !after_field
                } else {
                    false
                }
            }
            _ => false,
        };
        if remove {
            tracing::trace!(index = i, "removing orphaned surface node");
            surface.remove_node(i);
        } else {
            i += 1;
        }
    }
}
