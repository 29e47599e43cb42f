//! Field width hints.
//!
//! A field should be as wide as whatever it currently shows — its content,
//! or its placeholder when empty — without growing unboundedly. Measurement
//! itself is delegated to a `TextMeasure` collaborator so the core works
//! against any typographic backend; `MonospaceMeasure` is the bundled
//! terminal-cell implementation.

use serde::{Deserialize, Serialize};
use unicode_width::UnicodeWidthStr;

/// Floor for an empty field showing only its placeholder.
pub const PLACEHOLDER_MIN_EM: f32 = 1.5;
/// Floor for a field with real content.
pub const CONTENT_MIN_EM: f32 = 2.0;
/// Above this the field switches to wrapping instead of growing.
pub const WRAP_THRESHOLD_EM: f32 = 20.0;

/// Result of measuring candidate text with the field's typographic rules.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextMetrics {
    /// Rendered width in pixels.
    pub width: f32,
    /// Font size in pixels (the em unit).
    pub font_size: f32,
}

/// Text measurement collaborator. Returns `None` when measurement is
/// unavailable; the field then renders at its built-in minimum.
pub trait TextMeasure {
    fn measure(&self, text: &str) -> Option<TextMetrics>;
}

/// Width hint written back onto a rendered field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WidthHint {
    /// Minimum width in em units.
    pub min_em: f32,
    /// Upper bound, set only in wrapping mode.
    pub max_em: Option<f32>,
    /// Whether the field should wrap onto multiple lines.
    pub wrap: bool,
}

/// Derive a width hint for candidate text:
/// `max(default_min, ceil(width / font_size))` em, where the default floor
/// is smaller for placeholder text. Past the cap the hint switches to
/// wrapping mode rather than growing further.
pub fn advise(text: &str, is_placeholder: bool, measure: &dyn TextMeasure) -> Option<WidthHint> {
    let metrics = measure.measure(text)?;
    if metrics.font_size <= 0.0 {
        tracing::debug!(font_size = metrics.font_size, "unusable font metrics");
        return None;
    }

    let default_min = if is_placeholder {
        PLACEHOLDER_MIN_EM
    } else {
        CONTENT_MIN_EM
    };
    let min_em = default_min.max((metrics.width / metrics.font_size).ceil());

    if min_em > WRAP_THRESHOLD_EM {
        Some(WidthHint {
            min_em,
            max_em: Some(WRAP_THRESHOLD_EM),
            wrap: true,
        })
    } else {
        Some(WidthHint {
            min_em,
            max_em: None,
            wrap: false,
        })
    }
}

/// Hint for a field as rendered: content when non-blank, otherwise the
/// placeholder (or no hint at all when both are blank).
pub fn advise_for_field(
    placeholder: &str,
    content: &str,
    measure: &dyn TextMeasure,
) -> Option<WidthHint> {
    if !content.trim().is_empty() {
        advise(content, false, measure)
    } else if !placeholder.is_empty() {
        advise(placeholder, true, measure)
    } else {
        None
    }
}

/// Terminal-cell measurement: one display column is one em, wide (CJK)
/// characters span two. Zero-width characters measure zero, so sentinels
/// never influence a hint.
#[derive(Debug, Clone, Copy)]
pub struct MonospaceMeasure {
    /// Cell width in pixels.
    pub cell_px: f32,
}

impl Default for MonospaceMeasure {
    fn default() -> Self {
        Self { cell_px: 8.0 }
    }
}

impl TextMeasure for MonospaceMeasure {
    fn measure(&self, text: &str) -> Option<TextMetrics> {
        Some(TextMetrics {
            width: text.width() as f32 * self.cell_px,
            font_size: self.cell_px,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Measurement collaborator that is always unavailable.
    struct NoMeasure;

    impl TextMeasure for NoMeasure {
        fn measure(&self, _text: &str) -> Option<TextMetrics> {
            None
        }
    }

    #[test]
    fn test_placeholder_floor() {
        let measure = MonospaceMeasure::default();
        let hint = advise("a", true, &measure).unwrap();
        assert_eq!(hint.min_em, PLACEHOLDER_MIN_EM);
        assert!(!hint.wrap);
    }

    #[test]
    fn test_content_floor() {
        let measure = MonospaceMeasure::default();
        let hint = advise("a", false, &measure).unwrap();
        assert_eq!(hint.min_em, CONTENT_MIN_EM);
    }

    #[test]
    fn test_cjk_width_counts_double() {
        let measure = MonospaceMeasure::default();
        // 4 CJK chars = 8 columns = 8 em
        let hint = advise("文章类型", false, &measure).unwrap();
        assert_eq!(hint.min_em, 8.0);
    }

    #[test]
    fn test_wrap_past_cap() {
        let measure = MonospaceMeasure::default();
        let hint = advise(&"x".repeat(25), false, &measure).unwrap();
        assert!(hint.wrap);
        assert_eq!(hint.max_em, Some(WRAP_THRESHOLD_EM));
        assert_eq!(hint.min_em, 25.0);
    }

    #[test]
    fn test_measurement_failure_skips_hint() {
        assert_eq!(advise("abc", false, &NoMeasure), None);
    }

    #[test]
    fn test_advise_for_field_prefers_content() {
        let measure = MonospaceMeasure::default();
        let hint = advise_for_field("文章类型", "ok", &measure).unwrap();
        assert_eq!(hint.min_em, CONTENT_MIN_EM);
    }

    #[test]
    fn test_advise_for_field_empty_everything() {
        let measure = MonospaceMeasure::default();
        assert_eq!(advise_for_field("", "", &measure), None);
    }

    #[test]
    fn test_sentinel_measures_zero() {
        let measure = MonospaceMeasure::default();
        let metrics = measure.measure("\u{200B}").unwrap();
        assert_eq!(metrics.width, 0.0);
    }
}
