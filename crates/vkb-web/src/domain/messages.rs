//! JSON message types for the browser-facing WebSocket protocol.
//!
//! # Message flow
//!
//! ```text
//! Browser → Service:  JSON text frame  →  BrowserToServerMsg
//! Service → Browser:  ServerToBrowserMsg  →  JSON text frame
//! ```
//!
//! # JSON discriminant
//!
//! Every message is a JSON object with a `"type"` field that identifies the
//! variant.  All other fields are flattened into the same object:
//!
//! ```json
//! {"type":"Key","code":"KeyA","event":"keydown"}
//! ```
//!
//! Serde's `#[serde(tag = "type")]` attribute handles this automatically.
//!
//! # Why two enums?
//!
//! The browser only ever reports input; the service only ever reports
//! render state.  Two distinct enums make it a compile-time error to send a
//! message in the wrong direction.

use serde::{Deserialize, Serialize};
use vkb_core::{EventKind, Language};

// ── Browser → Service messages ────────────────────────────────────────────────

/// All messages a browser can send to the service.
///
/// # Serde representation
///
/// ```json
/// {"type":"Key","code":"ShiftLeft","event":"keydown"}
/// {"type":"Key","code":"KeyQ","event":"mousedown"}
/// {"type":"Sync"}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum BrowserToServerMsg {
    /// A key or on-screen button event.
    Key {
        /// DOM `KeyboardEvent.code` of the key (for on-screen buttons, the
        /// code the button was tagged with).
        code: String,
        /// One of `keydown`, `keyup`, `mousedown`, `click`.
        event: EventKind,
    },

    /// Ask for the current state again (e.g. after the page regained focus).
    Sync,
}

// ── Service → Browser messages ────────────────────────────────────────────────

/// All messages the service sends to a browser.
///
/// # Serde representation
///
/// ```json
/// {"type":"Layout","title":"Virtual Keyboard","hint":"…","rows":[[{"code":"Backquote","label":"`","special":false}]]}
/// {"type":"State","language":"en","caps_lock":false,"text":"hi","keys":[{"code":"KeyA","label":"a","active":false}]}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ServerToBrowserMsg {
    /// Everything needed to build the on-screen keyboard.  Sent once after
    /// the WebSocket handshake.
    Layout {
        /// Page heading.
        title: String,
        /// How to switch language, shown under the keyboard.
        hint: String,
        /// One inner list per visual row, keys in table order.
        rows: Vec<Vec<KeyJson>>,
    },

    /// Current render state.  Sent after connecting and after every handled
    /// browser message.
    State {
        /// Active layout language (`"en"` or `"ru"`).
        language: Language,
        /// Caps-lock toggle.
        caps_lock: bool,
        /// Full contents of the text area.
        text: String,
        /// Every key in layout order.
        keys: Vec<KeyStateJson>,
    },
}

/// One key of the `Layout` message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyJson {
    pub code: String,
    /// Initial label.
    pub label: String,
    /// `true` for non-printable keys (the page styles them differently).
    pub special: bool,
}

/// One key of the `State` message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyStateJson {
    pub code: String,
    pub label: String,
    /// Highlighted (held, or caps-lock on).
    pub active: bool,
}

// ── Tests ─────────────────────────────────────────────────────────────────────
