//! Keyboard service logic.
//!
//! Pure functions that translate between the browser JSON protocol and a
//! [`TypingSession`]:
//!
//! ```text
//! Browser → Service:  BrowserToServerMsg → TypingSession::handle()
//!                     call: apply_browser_msg()
//!
//! Service → Browser:  VirtualKeyboard / TypingSession → ServerToBrowserMsg
//!                     call: layout_message(), state_message()
//! ```
//!
//! No I/O happens here, so every path is unit-testable without a socket.

use tracing::debug;
use vkb_core::{TypingSession, VirtualKeyboard};

use crate::domain::messages::{BrowserToServerMsg, KeyJson, KeyStateJson, ServerToBrowserMsg};

/// Text shown under the keyboard explaining the language shortcut.
pub const LANGUAGE_HINT: &str =
    "Сделано на OC Windows. Чтобы переключить язык, нажмите LeftCtrl + LeftAlt.";

/// Builds the one-off `Layout` message for a freshly connected page.
pub fn layout_message(title: &str, keyboard: &VirtualKeyboard) -> ServerToBrowserMsg {
    let view = keyboard.view();
    let rows = keyboard
        .layout()
        .rows()
        .into_iter()
        .map(|row| {
            row.iter()
                .map(|key| KeyJson {
                    code: key.code.to_string(),
                    label: view
                        .button(key.code)
                        .map(|button| button.label.clone())
                        .unwrap_or_default(),
                    special: key.is_special(),
                })
                .collect()
        })
        .collect();

    ServerToBrowserMsg::Layout {
        title: title.to_string(),
        hint: LANGUAGE_HINT.to_string(),
        rows,
    }
}

/// Snapshots the session into a `State` message.
pub fn state_message(session: &TypingSession) -> ServerToBrowserMsg {
    let keyboard = session.keyboard();
    let keys = keyboard
        .view()
        .iter()
        .map(|(code, button)| KeyStateJson {
            code: code.to_string(),
            label: button.label.clone(),
            active: button.active,
        })
        .collect();

    ServerToBrowserMsg::State {
        language: keyboard.language(),
        caps_lock: keyboard.caps_lock(),
        text: session.text().to_string(),
        keys,
    }
}

/// Applies one browser message and returns the state to send back.
///
/// Unknown key codes are ignored by the keyboard; the reply is still the
/// current state so the page stays in sync.
pub fn apply_browser_msg(session: &mut TypingSession, msg: &BrowserToServerMsg) -> ServerToBrowserMsg {
    match msg {
        BrowserToServerMsg::Key { code, event } => {
            if !session.handle(code, *event) {
                debug!("ignored {event} for unknown key code {code:?}");
            }
        }
        BrowserToServerMsg::Sync => {}
    }
    state_message(session)
}

/// Returns a short type-name string for a `BrowserToServerMsg` variant.
///
/// Used in debug log messages so typed keys are not written to the log.
pub fn browser_msg_type_name(msg: &BrowserToServerMsg) -> &'static str {
    match msg {
        BrowserToServerMsg::Key { .. } => "Key",
        BrowserToServerMsg::Sync => "Sync",
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
