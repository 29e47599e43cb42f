//! TemplateEditor - the controller tying parsing, rendering, value
//! synchronization, caret navigation, and edit commands together.
//!
//! One controller owns one surface. All operations are synchronous; the
//! single ordering requirement is that hosts call [`TemplateEditor::on_rendered`]
//! after the surface has applied a structural render, since placing a caret
//! before the nodes exist is undefined.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::edit;
use crate::keys::{self, Key, KeyDisposition, KeyEvent, SubmitTrigger};
use crate::measure::TextMeasure;
use crate::navigate;
use crate::render;
use crate::sentinel;
use crate::surface::{Caret, EditSurface, Selection, SurfaceNode};
use crate::template::{self, Segment};
use crate::value;

/// Configuration for one template editing session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplateOptions {
    /// Template string with `[placeholder]` blanks.
    pub template: String,
    /// Previously-emitted value to re-align against the template.
    #[serde(default)]
    pub value: Option<String>,
    /// Seed content per placeholder.
    #[serde(default)]
    pub initial_values: HashMap<String, String>,
    /// Which key combination submits.
    #[serde(default)]
    pub submit_trigger: SubmitTrigger,
}

impl TemplateOptions {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            ..Self::default()
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_initial_value(
        mut self,
        placeholder: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        self.initial_values
            .insert(placeholder.into(), content.into());
        self
    }

    pub fn with_submit_trigger(mut self, trigger: SubmitTrigger) -> Self {
        self.submit_trigger = trigger;
        self
    }
}

/// Notifications delivered to the host through the event sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorEvent {
    /// The flat value changed.
    ValueChanged(String),
    /// The document crossed between empty and non-empty (edge-triggered).
    ContentStatusChanged(bool),
    /// The submit trigger fired on a non-blank value (already trimmed).
    SubmitRequested(String),
    /// The value became blank; hosts typically exit template mode.
    EmptyContent,
}

/// Where to place the caret once the host reports the render as applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CaretTarget {
    FieldStart(usize),
    FieldEnd(usize),
    DocumentEnd,
}

/// Host-facing event callback.
pub type EventSink = Box<dyn FnMut(EditorEvent)>;

/// The template-field editor controller.
///
/// Generic over the surface backend and the text-measurement collaborator,
/// the same way the document/editing split works elsewhere in this crate:
/// the controller holds the orchestration state, the surface holds the
/// document.
pub struct TemplateEditor<S: EditSurface, M: TextMeasure> {
    surface: S,
    measure: M,
    options: TemplateOptions,
    segments: Vec<Segment>,
    /// Last derived flat value; re-derived from the surface after every
    /// mutation, never edited directly.
    value: String,
    has_content: bool,
    composing: bool,
    pending_caret: Option<CaretTarget>,
    sink: EventSink,
}

impl<S: EditSurface, M: TextMeasure> TemplateEditor<S, M> {
    /// Create a controller and render the initial template.
    pub fn new(surface: S, measure: M, options: TemplateOptions, sink: EventSink) -> Self {
        let mut editor = Self {
            surface,
            measure,
            options,
            segments: Vec::new(),
            value: String::new(),
            has_content: false,
            composing: false,
            pending_caret: None,
            sink,
        };
        editor.apply_template();
        editor
    }

    /// Swap in new options, re-parse, and fully re-render. Equivalent to a
    /// fresh mount: nothing from the previous template survives.
    pub fn set_template(&mut self, options: TemplateOptions) {
        tracing::debug!(template = %options.template, "setting template");
        self.options = options;
        self.apply_template();
    }

    /// Called by the host after every native surface mutation (typing,
    /// paste). Re-derives the value and reports transitions.
    pub fn handle_input(&mut self) {
        if self.composing {
            return;
        }
        value::cleanup(&mut self.surface);
        sentinel::ensure_sentinels(&mut self.surface);
        render::refresh_width_hints(&mut self.surface, &self.measure);
        self.sync_after_edit();
    }

    /// Dispatch a key press. `Handled` means the host must suppress the
    /// native default.
    pub fn handle_key(&mut self, event: &KeyEvent) -> KeyDisposition {
        if self.composing {
            return KeyDisposition::PassThrough;
        }

        let plain = !event.ctrl && !event.alt && !event.meta;
        match event.key {
            Key::ArrowLeft | Key::ArrowRight if plain && !event.shift => {
                navigate::handle_arrow(&mut self.surface, event.key)
            }
            Key::Backspace if plain => {
                let outcome = edit::handle_backspace(&mut self.surface);
                if outcome.is_handled() {
                    self.sync_after_command();
                    KeyDisposition::Handled
                } else {
                    KeyDisposition::PassThrough
                }
            }
            Key::Delete if plain => {
                let outcome = edit::handle_delete(&mut self.surface);
                if outcome.is_handled() {
                    self.sync_after_command();
                    KeyDisposition::Handled
                } else {
                    KeyDisposition::PassThrough
                }
            }
            Key::Enter if keys::is_submit(event, self.options.submit_trigger) => {
                if value::has_content(&self.value) {
                    let submitted = self.value.trim().to_string();
                    tracing::debug!(value = %submitted, "submit requested");
                    self.emit(EditorEvent::SubmitRequested(submitted));
                    KeyDisposition::Handled
                } else {
                    KeyDisposition::PassThrough
                }
            }
            _ => KeyDisposition::PassThrough,
        }
    }

    /// Re-render every field back to its initial value (or empty), re-emit
    /// the rebuilt value, and queue the caret for the document end.
    pub fn reset_fields(&mut self) {
        render::render(
            &mut self.surface,
            &self.segments,
            &self.options.template,
            None,
            &self.options.initial_values,
            &self.measure,
        );
        let rebuilt = value::extract_value(&self.surface);
        self.value = rebuilt.clone();
        self.emit(EditorEvent::ValueChanged(rebuilt));
        self.sync_content_status();
        self.pending_caret = Some(CaretTarget::DocumentEnd);
    }

    /// Move the caret into the first field if one exists, else to the
    /// document end. No structural change, so it applies immediately.
    pub fn activate_first_field(&mut self) {
        let first_field = (0..self.surface.node_count())
            .find(|&i| self.surface.node(i).is_some_and(SurfaceNode::is_field));
        let target = match first_field {
            Some(index) => self.field_entry_target(index),
            None => CaretTarget::DocumentEnd,
        };
        let selection = self.resolve_caret(target);
        self.surface.set_selection(selection);
        self.surface.focus();
    }

    /// Synchronous read of the current flat value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Whether the current value has non-whitespace content.
    pub fn has_content(&self) -> bool {
        self.has_content
    }

    /// Host hook: the surface has applied the last structural render, so
    /// the deferred caret placement is now well-defined.
    pub fn on_rendered(&mut self) {
        if let Some(target) = self.pending_caret.take() {
            let selection = self.resolve_caret(target);
            self.surface.set_selection(selection);
            self.surface.focus();
        }
    }

    /// Gate for IME composition: while composing, input and key handling
    /// pass through untouched.
    pub fn set_composing(&mut self, composing: bool) {
        self.composing = composing;
    }

    pub fn options(&self) -> &TemplateOptions {
        &self.options
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable surface access for the host's native editing path. Call
    /// [`Self::handle_input`] after mutating.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    fn apply_template(&mut self) {
        self.segments = template::parse(&self.options.template);
        let outcome = render::render(
            &mut self.surface,
            &self.segments,
            &self.options.template,
            self.options.value.as_deref(),
            &self.options.initial_values,
            &self.measure,
        );

        // The baseline for change detection is what the host thinks the
        // value is; seeding fields from initial values may already differ.
        self.value = self.options.value.clone().unwrap_or_default();
        let derived = value::extract_value(&self.surface);
        if derived != self.value {
            self.value = derived.clone();
            self.emit(EditorEvent::ValueChanged(derived));
        }
        self.sync_content_status();

        self.pending_caret = Some(match outcome.first_field {
            Some(index) => self.field_entry_target(index),
            None => CaretTarget::DocumentEnd,
        });
    }

    /// Entering a field lands at its content end when seeded, at its start
    /// when empty.
    fn field_entry_target(&self, index: usize) -> CaretTarget {
        match self.surface.node(index) {
            Some(SurfaceNode::Field { content, .. }) if !content.is_empty() => {
                CaretTarget::FieldEnd(index)
            }
            _ => CaretTarget::FieldStart(index),
        }
    }

    fn resolve_caret(&self, target: CaretTarget) -> Selection {
        let caret = match target {
            CaretTarget::FieldStart(index) if self.surface.node(index).is_some() => {
                Caret::in_child(index, 0)
            }
            CaretTarget::FieldEnd(index) => match self.surface.node(index) {
                Some(node) => Caret::in_child(index, node.char_len()),
                None => Caret::root(self.surface.node_count()),
            },
            _ => Caret::root(self.surface.node_count()),
        };
        Selection::collapsed(caret)
    }

    /// Post-processing shared by handled Backspace/Delete commands: a
    /// deletion can shrink a field's minimum width, and the value must be
    /// re-derived either way.
    fn sync_after_command(&mut self) {
        render::refresh_width_hints(&mut self.surface, &self.measure);
        self.sync_after_edit();
    }

    fn sync_after_edit(&mut self) {
        let derived = value::extract_value(&self.surface);
        if derived != self.value {
            let was_blank = !value::has_content(&self.value);
            self.value = derived.clone();
            self.emit(EditorEvent::ValueChanged(derived));
            if !was_blank && !value::has_content(&self.value) {
                self.emit(EditorEvent::EmptyContent);
            }
        }
        self.sync_content_status();
    }

    /// Edge-triggered content-status reporting: hosts only hear about
    /// empty/non-empty crossings, not every keystroke.
    fn sync_content_status(&mut self) {
        let has_content = value::has_content(&self.value);
        if has_content != self.has_content {
            self.has_content = has_content;
            self.emit(EditorEvent::ContentStatusChanged(has_content));
        }
    }

    fn emit(&mut self, event: EditorEvent) {
        (self.sink)(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measure::MonospaceMeasure;
    use crate::surface::TreeSurface;

    fn quiet_editor(options: TemplateOptions) -> TemplateEditor<TreeSurface, MonospaceMeasure> {
        TemplateEditor::new(
            TreeSurface::new(),
            MonospaceMeasure::default(),
            options,
            Box::new(|_| {}),
        )
    }

    #[test]
    fn test_new_renders_template() {
        let editor = quiet_editor(
            TemplateOptions::new("你好 [称呼]，感谢您的 [事项]")
                .with_initial_value("称呼", "先生"),
        );
        assert_eq!(editor.value(), "你好 先生，感谢您的 ");
        assert!(editor.has_content());
    }

    #[test]
    fn test_on_rendered_places_caret_in_seeded_field() {
        let mut editor = quiet_editor(
            TemplateOptions::new("你好 [称呼]").with_initial_value("称呼", "先生"),
        );
        editor.on_rendered();
        let selection = editor.surface().selection().unwrap();
        // First field is node 1, caret at its content end.
        assert_eq!(selection, Selection::collapsed(Caret::in_child(1, 2)));
        assert!(editor.surface().is_focused());
    }

    #[test]
    fn test_on_rendered_without_fields_goes_to_document_end() {
        let mut editor = quiet_editor(TemplateOptions::new("no fields here"));
        editor.on_rendered();
        let selection = editor.surface().selection().unwrap();
        assert_eq!(selection, Selection::collapsed(Caret::root(1)));
    }

    #[test]
    fn test_options_serde_round_trip() {
        let options = TemplateOptions::new("[a]")
            .with_initial_value("a", "x")
            .with_submit_trigger(SubmitTrigger::CtrlEnter);
        let json = serde_json::to_string(&options).unwrap();
        assert_eq!(
            serde_json::from_str::<TemplateOptions>(&json).unwrap(),
            options
        );
    }
}
