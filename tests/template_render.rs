//! Template rendering scenarios - round trips, re-alignment, resets

mod common;

use common::Harness;
use fillin::{Caret, EditSurface, Selection, SurfaceNode, TemplateOptions};

// ========================================================================
// Round trips
// ========================================================================

#[test]
fn test_round_trip_with_initial_values() {
    let harness = Harness::new(
        TemplateOptions::new("请撰写 [文章类型] 字的 [主题]")
            .with_initial_value("文章类型", "800")
            .with_initial_value("主题", "春天的游记"),
    );
    assert_eq!(harness.editor.value(), "请撰写 800 字的 春天的游记");
}

#[test]
fn test_round_trip_without_initial_values_is_literal_skeleton() {
    let harness = Harness::mounted("你好 [称呼]，感谢您的 [事项]");
    assert_eq!(harness.editor.value(), "你好 ，感谢您的 ");
}

#[test]
fn test_greeting_scenario() {
    // Template "你好 [称呼]，感谢您的 [事项]" with 称呼 seeded.
    let mut harness = Harness::new(
        TemplateOptions::new("你好 [称呼]，感谢您的 [事项]")
            .with_initial_value("称呼", "先生")
            .with_initial_value("事项", ""),
    );
    assert_eq!(harness.editor.value(), "你好 先生，感谢您的 ");

    // Caret lands in the first field, at the end of its seeded content.
    assert_eq!(harness.caret(), Caret::in_child(1, 2));

    // Typing into the empty field flows straight into the value.
    harness.type_into_field(1, "支持");
    assert_eq!(harness.editor.value(), "你好 先生，感谢您的 支持");
}

// ========================================================================
// Re-alignment of a previously-emitted value
// ========================================================================

#[test]
fn test_realign_previous_value() {
    let harness = Harness::new(
        TemplateOptions::new("你好 [称呼]，感谢您的 [事项]")
            .with_value("你好 女士，感谢您的 帮助"),
    );
    assert_eq!(harness.editor.value(), "你好 女士，感谢您的 帮助");

    let surface = harness.editor.surface();
    assert_eq!(surface.node(1), Some(&SurfaceNode::field("称呼", "女士")));
    assert_eq!(surface.node(4), Some(&SurfaceNode::field("事项", "帮助")));
}

#[test]
fn test_realign_is_idempotent() {
    let mut first = Harness::new(
        TemplateOptions::new("你好 [称呼]，感谢您的 [事项]").with_initial_value("称呼", "先生"),
    );
    first.type_into_field(1, "支持");
    let value = first.editor.value().to_string();

    let second = Harness::new(
        TemplateOptions::new("你好 [称呼]，感谢您的 [事项]").with_value(value.clone()),
    );
    assert_eq!(second.editor.value(), value);
}

#[test]
fn test_unalignable_value_degrades_to_plain_text() {
    let harness =
        Harness::new(TemplateOptions::new("你好 [称呼]").with_value("something unrelated"));
    assert_eq!(harness.editor.value(), "something unrelated");
    assert_eq!(
        harness.editor.surface().nodes(),
        &[SurfaceNode::text("something unrelated")]
    );
    // No fields: the pending caret resolved to the document end.
    assert_eq!(harness.caret(), Caret::root(1));
    // Still editable, still reports content.
    assert!(harness.editor.has_content());
}

// ========================================================================
// Template switching and resets
// ========================================================================

#[test]
fn test_set_template_fully_resets() {
    let mut harness = Harness::new(
        TemplateOptions::new("你好 [称呼]，感谢您的 [事项]").with_initial_value("称呼", "先生"),
    );
    harness.type_into_field(1, "支持");

    harness
        .editor
        .set_template(TemplateOptions::new("请评价 [产品]"));
    harness.editor.on_rendered();

    // No leftover field nodes from the previous template.
    let surface = harness.editor.surface();
    let fields: Vec<_> = surface.nodes().iter().filter(|n| n.is_field()).collect();
    assert_eq!(fields, vec![&SurfaceNode::field("产品", "")]);
    assert_eq!(harness.editor.value(), "请评价 ");
}

#[test]
fn test_reset_fields_restores_initial_values() {
    let mut harness = Harness::new(
        TemplateOptions::new("你好 [称呼]").with_initial_value("称呼", "先生"),
    );
    harness.type_into_field(0, "女士");
    assert_eq!(harness.editor.value(), "你好 女士");

    harness.editor.reset_fields();
    harness.editor.on_rendered();
    assert_eq!(harness.editor.value(), "你好 先生");
    // Caret parked at the document end.
    assert_eq!(
        harness.editor.surface().selection(),
        Some(Selection::collapsed(Caret::root(3)))
    );
}

#[test]
fn test_empty_placeholder_field_is_addressable() {
    let harness = Harness::mounted("a[]b");
    let surface = harness.editor.surface();
    assert_eq!(surface.node(1), Some(&SurfaceNode::field("", "")));
    assert_eq!(harness.editor.value(), "ab");
}

#[test]
fn test_fieldless_template_renders_and_parks_caret_at_end() {
    let harness = Harness::mounted("no blanks at all");
    assert_eq!(harness.editor.value(), "no blanks at all");
    assert_eq!(harness.caret(), Caret::root(1));
}
