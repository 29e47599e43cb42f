//! Template parsing.
//!
//! A template is a plain string with `[placeholder]` blanks, e.g.
//! `"请撰写 [文章类型] 字的 [主题]"`. Parsing splits it into an ordered
//! sequence of literal and field segments whose concatenation reconstructs
//! the template exactly.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Non-greedy bracket match: first `[` up to the next `]`. Nested brackets
/// are undefined behavior; unmatched brackets stay literal text.
static FIELD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[(.*?)\]").expect("valid regex"));

/// A parsed unit of a template: a literal run or a fill-in field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Segment {
    /// Literal text between fields, rendered verbatim.
    Text(String),
    /// A fill-in blank; the placeholder is the bracketed text.
    Field { placeholder: String },
}

impl Segment {
    pub fn text(content: impl Into<String>) -> Self {
        Segment::Text(content.into())
    }

    pub fn field(placeholder: impl Into<String>) -> Self {
        Segment::Field {
            placeholder: placeholder.into(),
        }
    }

    pub fn is_field(&self) -> bool {
        matches!(self, Segment::Field { .. })
    }
}

/// Parse a template string into ordered segments. Deterministic, best-effort
/// on malformed bracket syntax, no side effects.
///
/// An empty capture (`[]`) yields a field with an empty placeholder, which
/// still renders as an empty, addressable field.
pub fn parse(template: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut current = 0;

    for capture in FIELD_RE.captures_iter(template) {
        let whole = capture.get(0).expect("match has group 0");
        if whole.start() > current {
            segments.push(Segment::Text(template[current..whole.start()].to_string()));
        }
        let placeholder = capture.get(1).map_or("", |m| m.as_str());
        segments.push(Segment::field(placeholder));
        current = whole.end();
    }

    if current < template.len() {
        segments.push(Segment::Text(template[current..].to_string()));
    }

    segments
}

/// Rebuild the raw template text from segments (`Text` verbatim, fields as
/// `[placeholder]`). Inverse of [`parse`].
pub fn reconstruct(segments: &[Segment]) -> String {
    let mut out = String::new();
    for segment in segments {
        match segment {
            Segment::Text(text) => out.push_str(text),
            Segment::Field { placeholder } => {
                out.push('[');
                out.push_str(placeholder);
                out.push(']');
            }
        }
    }
    out
}
