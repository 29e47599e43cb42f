//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use fillin::{
    Caret, EditSurface, EditorEvent, Key, KeyDisposition, KeyEvent, MonospaceMeasure, Selection,
    TemplateEditor, TemplateOptions, TreeSurface,
};

/// Install the test log subscriber once per process. Honors `RUST_LOG`,
/// writes through the test capture so output stays attached to the
/// failing test.
pub fn init_logging() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A mounted editor over a `TreeSurface` with captured events.
pub struct Harness {
    pub editor: TemplateEditor<TreeSurface, MonospaceMeasure>,
    events: Rc<RefCell<Vec<EditorEvent>>>,
}

impl Harness {
    /// Build an editor from options and complete the initial render
    /// (TreeSurface applies writes synchronously, so `on_rendered` follows
    /// immediately).
    pub fn new(options: TemplateOptions) -> Self {
        init_logging();
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink_events = Rc::clone(&events);
        let mut editor = TemplateEditor::new(
            TreeSurface::new(),
            MonospaceMeasure::default(),
            options,
            Box::new(move |event| sink_events.borrow_mut().push(event)),
        );
        editor.on_rendered();
        Self { editor, events }
    }

    /// Editor over a bare template with no initial values.
    pub fn mounted(template: &str) -> Self {
        Self::new(TemplateOptions::new(template))
    }

    /// Take all events captured so far.
    pub fn drain_events(&mut self) -> Vec<EditorEvent> {
        self.events.borrow_mut().drain(..).collect()
    }

    /// Node index of the nth field (0-based).
    pub fn field_index(&self, nth: usize) -> usize {
        let surface = self.editor.surface();
        (0..surface.node_count())
            .filter(|&i| surface.node(i).unwrap().is_field())
            .nth(nth)
            .expect("field exists")
    }

    /// Simulate the user typing a replacement into the nth field: the host
    /// mutates the surface natively, then reports the input.
    pub fn type_into_field(&mut self, nth: usize, text: &str) {
        let index = self.field_index(nth);
        let surface = self.editor.surface_mut();
        surface.set_node_text(index, text);
        surface.set_selection(Selection::collapsed(Caret::in_child(
            index,
            text.chars().count(),
        )));
        self.editor.handle_input();
    }

    pub fn set_caret(&mut self, caret: Caret) {
        self.editor
            .surface_mut()
            .set_selection(Selection::collapsed(caret));
    }

    pub fn caret(&self) -> Caret {
        self.editor.surface().selection().expect("selection").focus
    }

    /// Press a key with no modifiers.
    pub fn press(&mut self, key: Key) -> KeyDisposition {
        self.editor.handle_key(&KeyEvent::plain(key))
    }
}
