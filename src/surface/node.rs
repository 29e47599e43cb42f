//! Node types for the editable surface.

use serde::{Deserialize, Serialize};

/// A single top-level child of the editable surface.
///
/// The document is a flat sequence of these: literal text runs interleaved
/// with atomic field tokens. Fields are containers on the host side but are
/// treated as leaves here — their `content` is the full serialized text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SurfaceNode {
    /// Plain literal text run.
    Text(String),
    /// Fill-in field with its placeholder label and current user text.
    Field {
        /// Empty-state label, copied from the parsed segment.
        placeholder: String,
        /// Current user text, may be empty.
        content: String,
    },
}

impl SurfaceNode {
    /// Create a text run node.
    pub fn text(content: impl Into<String>) -> Self {
        SurfaceNode::Text(content.into())
    }

    /// Create a field node.
    pub fn field(placeholder: impl Into<String>, content: impl Into<String>) -> Self {
        SurfaceNode::Field {
            placeholder: placeholder.into(),
            content: content.into(),
        }
    }

    /// Check if this node is a field token.
    pub fn is_field(&self) -> bool {
        matches!(self, SurfaceNode::Field { .. })
    }

    /// The node's serialized text: a text run's content, or a field's
    /// current user text.
    pub fn node_text(&self) -> &str {
        match self {
            SurfaceNode::Text(text) => text,
            SurfaceNode::Field { content, .. } => content,
        }
    }

    /// Length of the node's text in characters (caret offsets are
    /// character-based, the document may contain multi-byte text).
    pub fn char_len(&self) -> usize {
        self.node_text().chars().count()
    }
}
