//! # vkb-core
//!
//! Shared library for the virtual keyboard containing the key layout table,
//! the keyboard input-state machine, the text buffer, and the persistence
//! port used to remember the selected language.
//!
//! It has zero dependencies on OS APIs, UI frameworks, or network sockets.
//!
//! # Architecture overview (for beginners)
//!
//! A virtual keyboard is drawn on screen as a grid of buttons.  The user can
//! type either by clicking those buttons or by pressing keys on a physical
//! keyboard; in both cases the matching on-screen button lights up and the
//! resulting character is echoed into a text area.
//!
//! This crate (`vkb-core`) is the part that decides *what happens* on each
//! event.  It defines:
//!
//! - **`layout`** – The static table of keys: which row each key lives on,
//!   what it prints in English and Russian, and what it prints with Shift.
//!
//! - **`domain`** – The keyboard controller (pressed keys, caps-lock,
//!   language switching, character resolution), the text buffer, and the
//!   typing session that glues them together.
//!
//! - **`store`** – The key-value persistence port used to remember the
//!   selected language between sessions.

pub mod domain;
pub mod layout;
pub mod store;

// Re-export the most-used types at the crate root so callers can write
// `vkb_core::VirtualKeyboard` instead of `vkb_core::domain::keyboard::VirtualKeyboard`.
pub use domain::event::EventKind;
pub use domain::keyboard::{KeyboardState, VirtualKeyboard};
pub use domain::language::Language;
pub use domain::session::TypingSession;
pub use domain::text::{ControlAction, TextBuffer};
pub use domain::view::{ButtonView, KeyboardView};
pub use layout::{Glyphs, KeyDescriptor, KeyKind, Layout};
pub use store::{LanguageStore, MemoryStore, StoreError, LANG_KEY};
