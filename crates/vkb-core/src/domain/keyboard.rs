//! The keyboard controller: the input-state machine of the virtual keyboard.
//!
//! [`VirtualKeyboard`] owns the current language, the caps-lock flag, and the
//! set of held key codes.  Every input event goes through
//! [`VirtualKeyboard::change_state`], which:
//!
//! 1. updates the held set / caps-lock flag,
//! 2. refreshes the highlight state of every button,
//! 3. switches the language when AltLeft + ControlLeft become held together,
//! 4. re-renders every button label for the current modifiers.
//!
//! # Press/release table
//!
//! | event        | CapsLock          | any other key      |
//! |--------------|-------------------|--------------------|
//! | `keydown`    | nothing           | add if absent      |
//! | `mousedown`  | toggle caps-lock  | add if absent      |
//! | `keyup`      | toggle caps-lock  | remove if present  |
//! | `click`      | nothing           | remove if present  |
//!
//! Caps-lock toggles on an edge, never while held, and is never a member of
//! the held set.
//!
//! Codes that are not in the layout are ignored: no state change, no error.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::event::EventKind;
use crate::domain::language::Language;
use crate::domain::text::{ControlAction, TextBuffer};
use crate::domain::view::KeyboardView;
use crate::layout::{KeyDescriptor, Layout};
use crate::store::{LanguageStore, LANG_KEY};

/// Key code of the caps-lock toggle.
pub const CAPS_LOCK: &str = "CapsLock";

/// Keys that must be held together to switch language.
pub const LANGUAGE_SWITCH_COMBO: [&str; 2] = ["AltLeft", "ControlLeft"];

/// Key codes that count as "Shift held".
const SHIFT_KEYS: [&str; 2] = ["ShiftLeft", "ShiftRight"];

/// Mutable state of one keyboard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardState {
    /// Active layout language.
    pub language: Language,
    /// Caps-lock toggle.
    pub caps_lock: bool,
    /// Held key codes in press order.
    pressed: Vec<&'static str>,
}

impl KeyboardState {
    /// Held key codes in the order they were pressed.
    pub fn pressed(&self) -> &[&'static str] {
        &self.pressed
    }

    /// Returns `true` if exactly `code` is held.
    pub fn is_pressed(&self, code: &str) -> bool {
        self.pressed.iter().any(|held| *held == code)
    }

    fn press(&mut self, code: &'static str) {
        if !self.is_pressed(code) {
            self.pressed.push(code);
        }
    }

    fn release(&mut self, code: &str) {
        self.pressed.retain(|held| *held != code);
    }
}

/// The keyboard controller.
///
/// Construct one per keyboard with the layout and the store that remembers
/// the language.  The controller is single-threaded: callers serialise
/// events, exactly like a UI event loop does.
pub struct VirtualKeyboard {
    layout: Layout,
    state: KeyboardState,
    view: KeyboardView,
    store: Arc<dyn LanguageStore>,
    /// `true` while the language-switch combination is held, so it fires
    /// once per press of the combination.
    switch_latched: bool,
}

impl VirtualKeyboard {
    /// Creates a controller, restoring the language from `store`.
    ///
    /// An absent or unrecognised stored value falls back to English.
    pub fn new(layout: Layout, store: Arc<dyn LanguageStore>) -> Self {
        let language = load_language(store.as_ref());
        let mut keyboard = Self {
            view: KeyboardView::build(&layout),
            layout,
            state: KeyboardState {
                language,
                ..KeyboardState::default()
            },
            store,
            switch_latched: false,
        };
        keyboard.refresh_view();
        keyboard
    }

    /// Creates a controller over [`Layout::standard`].
    pub fn with_standard_layout(store: Arc<dyn LanguageStore>) -> Self {
        Self::new(Layout::standard(), store)
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn state(&self) -> &KeyboardState {
        &self.state
    }

    pub fn language(&self) -> Language {
        self.state.language
    }

    pub fn caps_lock(&self) -> bool {
        self.state.caps_lock
    }

    /// Current render state of every key.
    pub fn view(&self) -> &KeyboardView {
        &self.view
    }

    /// Applies one input event to the keyboard.
    ///
    /// Unknown codes are ignored.
    pub fn change_state(&mut self, code: &str, kind: EventKind) {
        let Some(key) = self.layout.find(code) else {
            debug!("ignoring {kind} for unmapped key code {code:?}");
            return;
        };

        self.apply_press(key.code, kind);
        self.refresh_highlights();
        self.switch_language_on_combo();
        self.refresh_labels();
    }

    /// Returns `current_text` with the effect of committing `code` applied.
    ///
    /// - Special keys apply their fixed [`ControlAction`].
    /// - Printable keys append the shift glyph if Shift is held, otherwise
    ///   the uppercased base glyph if caps-lock is on, otherwise the base
    ///   glyph of the active language.
    /// - Unknown codes return the text unchanged.
    pub fn resolve_character(&self, code: &str, current_text: &str) -> String {
        let mut buffer = TextBuffer::from(current_text);
        self.commit(code, &mut buffer);
        buffer.into_string()
    }

    /// Applies the effect of committing `code` to `buffer` in place.
    ///
    /// Returns `false` (and leaves the buffer untouched) for unknown codes.
    pub fn commit(&self, code: &str, buffer: &mut TextBuffer) -> bool {
        let Some(key) = self.layout.find(code) else {
            return false;
        };
        if key.is_special() {
            buffer.apply(ControlAction::for_code(key.code));
        } else {
            buffer.push_str(&self.label_for(key));
        }
        true
    }

    /// Returns `true` if `code` is CapsLock and caps-lock is on, or if
    /// exactly `code` is held.
    pub fn is_active(&self, code: &str) -> bool {
        if code == CAPS_LOCK {
            return self.state.caps_lock;
        }
        self.state.is_pressed(code)
    }

    /// Returns `true` if either Shift key is held.
    pub fn shift_held(&self) -> bool {
        SHIFT_KEYS.iter().any(|code| self.is_active(code))
    }

    /// Flips the language between English and Russian, persists the new
    /// value, and re-renders every label.
    ///
    /// A failed write is logged; the in-memory language still changes.
    pub fn toggle_language(&mut self) {
        let language = self.state.language.toggled();
        self.state.language = language;
        info!("keyboard language switched to {language}");

        if let Err(e) = self.store.set(LANG_KEY, language.as_str()) {
            warn!("failed to persist keyboard language {language}: {e}");
        }

        self.refresh_labels();
    }

    // ── State transitions ─────────────────────────────────────────────────────

    fn apply_press(&mut self, code: &'static str, kind: EventKind) {
        if code == CAPS_LOCK {
            if matches!(kind, EventKind::KeyUp | EventKind::PointerDown) {
                self.state.caps_lock = !self.state.caps_lock;
                debug!("caps-lock {}", if self.state.caps_lock { "on" } else { "off" });
            }
            return;
        }

        match kind {
            EventKind::KeyDown | EventKind::PointerDown => self.state.press(code),
            EventKind::KeyUp | EventKind::PointerClick => self.state.release(code),
        }
        debug!("{kind} {code}: held={:?}", self.state.pressed);
    }

    fn switch_language_on_combo(&mut self) {
        let combo_held = LANGUAGE_SWITCH_COMBO.iter().all(|code| self.is_active(code));
        if combo_held && !self.switch_latched {
            self.toggle_language();
        }
        self.switch_latched = combo_held;
    }

    // ── Rendering ─────────────────────────────────────────────────────────────

    fn label_for(&self, key: &KeyDescriptor) -> String {
        key.label(self.state.language, self.shift_held(), self.state.caps_lock)
    }

    fn refresh_view(&mut self) {
        self.refresh_highlights();
        self.refresh_labels();
    }

    fn refresh_highlights(&mut self) {
        for key in self.layout.keys() {
            let active = self.is_active(key.code);
            if let Some(button) = self.view.button_mut(key.code) {
                button.active = active;
            }
        }
    }

    fn refresh_labels(&mut self) {
        for key in self.layout.keys() {
            let label = self.label_for(key);
            if let Some(button) = self.view.button_mut(key.code) {
                button.label = label;
            }
        }
    }
}

/// Reads the persisted language, defaulting to English.
fn load_language(store: &dyn LanguageStore) -> Language {
    match store.get(LANG_KEY) {
        Some(tag) => tag.parse().unwrap_or_else(|e| {
            warn!("ignoring stored keyboard language: {e}");
            Language::default()
        }),
        None => Language::default(),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
