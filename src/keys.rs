//! Host-agnostic key event model.
//!
//! Hosts translate their native key events into this shape before handing
//! them to the controller; the disposition tells them whether to suppress
//! the native default.

use serde::{Deserialize, Serialize};

/// Keys the editor core cares about. Anything else maps to `Other` and
/// always passes through to the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Backspace,
    Delete,
    Enter,
    Char(char),
    Other,
}

/// A key press with its modifier state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    /// Cmd on macOS, Win elsewhere.
    pub meta: bool,
}

impl KeyEvent {
    /// A key press with no modifiers.
    pub fn plain(key: Key) -> Self {
        Self {
            key,
            shift: false,
            ctrl: false,
            alt: false,
            meta: false,
        }
    }

    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn with_meta(mut self) -> Self {
        self.meta = true;
        self
    }
}

/// Which key combination submits the composed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SubmitTrigger {
    /// Plain Enter (Shift+Enter inserts a line break natively).
    #[default]
    Enter,
    /// Ctrl+Enter, or Cmd+Enter on macOS.
    CtrlEnter,
    /// Shift+Enter.
    ShiftEnter,
}

/// Check whether a key press matches the configured submit trigger.
pub fn is_submit(event: &KeyEvent, trigger: SubmitTrigger) -> bool {
    if event.key != Key::Enter {
        return false;
    }
    match trigger {
        SubmitTrigger::Enter => !event.shift && !event.ctrl && !event.meta,
        SubmitTrigger::CtrlEnter => (event.ctrl || event.meta) && !event.shift,
        SubmitTrigger::ShiftEnter => event.shift && !event.ctrl && !event.meta,
    }
}

/// Whether the core consumed a key press or the surface should handle it
/// natively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDisposition {
    /// Consumed; the host must suppress the native default.
    Handled,
    /// Not ours; let the surface apply its native behavior.
    PassThrough,
}
