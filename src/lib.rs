//! fillin - embeddable fill-in-the-blanks template editor core
//!
//! Turns a template string like `"请撰写 [文章类型] 字的 [主题]"` into an
//! editable document of literal runs and atomic field tokens, keeps a flat
//! string value synchronized with the edited structure, and intercepts
//! caret movement and deletion so fields behave as single tokens.
//!
//! The rendering host is abstracted behind [`surface::EditSurface`]; the
//! crate ships [`surface::TreeSurface`] as an in-memory implementation.
//! [`editor::TemplateEditor`] is the entry point.

pub mod edit;
pub mod editor;
pub mod keys;
pub mod measure;
pub mod navigate;
pub mod render;
pub mod sentinel;
pub mod surface;
pub mod template;
pub mod value;

// Re-export commonly used types
pub use editor::{EditorEvent, EventSink, TemplateEditor, TemplateOptions};
pub use keys::{Key, KeyDisposition, KeyEvent, SubmitTrigger};
pub use measure::{MonospaceMeasure, TextMeasure, TextMetrics, WidthHint};
pub use surface::{Caret, CaretNode, EditSurface, Selection, SurfaceNode, TreeSurface};
pub use template::{parse, Segment};
