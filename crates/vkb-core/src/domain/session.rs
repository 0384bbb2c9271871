//! A keyboard paired with the text it has typed.
//!
//! [`TypingSession`] is what a page (or the WebSocket service) drives: every
//! input event is forwarded to the controller, and on a "down" event
//! (`keydown` / `mousedown`) for a known key the key is also committed into
//! the text buffer.  Committing after the state change means a Shift press
//! that arrives together with a letter already affects that letter.

use std::sync::Arc;

use crate::domain::event::EventKind;
use crate::domain::keyboard::VirtualKeyboard;
use crate::domain::text::TextBuffer;
use crate::layout::Layout;
use crate::store::LanguageStore;

pub struct TypingSession {
    keyboard: VirtualKeyboard,
    text: TextBuffer,
}

impl TypingSession {
    /// Wraps an existing controller with an empty text buffer.
    pub fn new(keyboard: VirtualKeyboard) -> Self {
        Self {
            keyboard,
            text: TextBuffer::new(),
        }
    }

    /// Builds a controller over `layout` and wraps it.
    pub fn with_layout(layout: Layout, store: Arc<dyn LanguageStore>) -> Self {
        Self::new(VirtualKeyboard::new(layout, store))
    }

    /// Handles one input event.
    ///
    /// Returns `true` if `code` is a key of the layout (whether or not it
    /// typed anything), `false` if the event was ignored.
    pub fn handle(&mut self, code: &str, kind: EventKind) -> bool {
        if !self.keyboard.layout().contains(code) {
            return false;
        }
        self.keyboard.change_state(code, kind);
        if kind.is_commit() {
            self.keyboard.commit(code, &mut self.text);
        }
        true
    }

    pub fn keyboard(&self) -> &VirtualKeyboard {
        &self.keyboard
    }

    /// The text typed so far.
    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    /// Empties the text buffer without touching keyboard state.
    pub fn clear_text(&mut self) {
        self.text.clear();
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
