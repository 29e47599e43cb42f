//! Document rendering.
//!
//! Materializes parsed segments onto the editable surface as literal text
//! nodes and field nodes, each field followed by its caret sentinel. Always
//! a full child replacement — re-render only happens on template change or
//! reset, never per keystroke.

use std::collections::HashMap;

use crate::measure::{self, TextMeasure};
use crate::sentinel::{sentinel_node, strip_sentinels};
use crate::surface::{EditSurface, SurfaceNode};
use crate::template::Segment;

/// What a render produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOutcome {
    /// Index of the first field node, `None` when the document has none
    /// (fieldless template, or literal-text fallback).
    pub first_field: Option<usize>,
    /// False when a supplied value could not be aligned against the
    /// template and was rendered as one literal run instead.
    pub aligned: bool,
}

/// Render segments onto the surface.
///
/// With no value (or a value equal to the raw template text) every field is
/// seeded from `initial_values`. A differing value is re-aligned against the
/// segments; on alignment failure the whole value becomes a single literal
/// run — degraded but still editable, never corrupted.
pub fn render<S: EditSurface>(
    surface: &mut S,
    segments: &[Segment],
    template: &str,
    value: Option<&str>,
    initial_values: &HashMap<String, String>,
    measure: &dyn TextMeasure,
) -> RenderOutcome {
    let (nodes, aligned) = match value {
        None => (seed_nodes(segments, initial_values), true),
        Some(v) if v == template => (seed_nodes(segments, initial_values), true),
        Some(v) => match align_nodes(segments, v) {
            Some(nodes) => (nodes, true),
            None => {
                tracing::debug!(value = v, "value does not align with template, rendering literal");
                (vec![SurfaceNode::text(v)], false)
            }
        },
    };

    let first_field = nodes.iter().position(SurfaceNode::is_field);
    surface.replace_children(nodes);
    refresh_width_hints(surface, measure);

    RenderOutcome {
        first_field,
        aligned,
    }
}

/// Recompute and write back the width hint of every field on the surface.
pub fn refresh_width_hints<S: EditSurface>(surface: &mut S, measure: &dyn TextMeasure) {
    let fields: Vec<(usize, String, String)> = (0..surface.node_count())
        .filter_map(|i| match surface.node(i) {
            Some(SurfaceNode::Field {
                placeholder,
                content,
            }) => Some((i, placeholder.clone(), strip_sentinels(content))),
            _ => None,
        })
        .collect();

    for (i, placeholder, content) in fields {
        let hint = measure::advise_for_field(&placeholder, &content, measure);
        surface.set_width_hint(i, hint);
    }
}

/// Fresh document: literals verbatim, fields seeded from initial values,
/// a sentinel after every field.
fn seed_nodes(segments: &[Segment], initial_values: &HashMap<String, String>) -> Vec<SurfaceNode> {
    let mut nodes = Vec::with_capacity(segments.len() * 2);
    for segment in segments {
        match segment {
            Segment::Text(text) => nodes.push(SurfaceNode::text(text.clone())),
            Segment::Field { placeholder } => {
                let content = initial_values.get(placeholder).cloned().unwrap_or_default();
                nodes.push(SurfaceNode::field(placeholder.clone(), content));
                nodes.push(sentinel_node());
            }
        }
    }
    nodes
}

/// Re-align a previously-emitted value against the segments by walking both
/// in lockstep. A literal must match the value at the current offset; a
/// field consumes everything up to the first occurrence of the next
/// literal's text (or the remainder when no literal follows). `None` when
/// the value cannot be mapped.
///
/// The boundary is the first occurrence: a field whose content happens to
/// contain the next literal's text is cut at that occurrence.
fn align_nodes(segments: &[Segment], value: &str) -> Option<Vec<SurfaceNode>> {
    let mut nodes = Vec::with_capacity(segments.len() * 2);
    let mut at = 0;

    for (i, segment) in segments.iter().enumerate() {
        match segment {
            Segment::Text(text) => {
                if !value[at..].starts_with(text.as_str()) {
                    return None;
                }
                nodes.push(SurfaceNode::text(text.clone()));
                at += text.len();
            }
            Segment::Field { placeholder } => {
                let next_literal = segments[i + 1..].iter().find_map(|s| match s {
                    Segment::Text(t) => Some(t.as_str()),
                    _ => None,
                });
                let content = match next_literal {
                    Some(literal) => {
                        let found = value[at..].find(literal)?;
                        &value[at..at + found]
                    }
                    None => &value[at..],
                };
                nodes.push(SurfaceNode::field(placeholder.clone(), content));
                nodes.push(sentinel_node());
                at += content.len();
            }
        }
    }

    Some(nodes)
}
