//! Input event kinds consumed by the keyboard controller.
//!
//! The names follow the DOM event types the virtual keyboard receives:
//! physical keys produce `keydown` / `keyup`, on-screen buttons produce
//! `mousedown` and then `click` when the pointer is released.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The kind of input event that triggered a state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    /// A physical key went down (DOM `keydown`).
    #[serde(rename = "keydown")]
    KeyDown,
    /// A physical key went up (DOM `keyup`).
    #[serde(rename = "keyup")]
    KeyUp,
    /// A pointer was pressed on an on-screen key (DOM `mousedown`).
    #[serde(rename = "mousedown")]
    PointerDown,
    /// A pointer was released after pressing (DOM `click`).
    #[serde(rename = "click")]
    PointerClick,
}

impl EventKind {
    /// Returns `true` for the events after which a key is typed into the
    /// text buffer.
    pub fn is_commit(self) -> bool {
        matches!(self, EventKind::KeyDown | EventKind::PointerDown)
    }

    /// The DOM event type name.
    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::KeyDown => "keydown",
            EventKind::KeyUp => "keyup",
            EventKind::PointerDown => "mousedown",
            EventKind::PointerClick => "click",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
