//! Integration tests for the vkb-core public API.
//!
//! These tests drive a [`TypingSession`] the way a page does (physical key
//! events and on-screen clicks interleaved) and check the typed text, the
//! rendered labels, and the persisted language together.

use std::sync::Arc;

use vkb_core::{
    EventKind, Language, LanguageStore, Layout, MemoryStore, TypingSession, VirtualKeyboard,
    LANG_KEY,
};

fn session_with(store: Arc<MemoryStore>) -> TypingSession {
    TypingSession::with_layout(Layout::standard(), store)
}

/// Physical key press: keydown then keyup.
fn tap(session: &mut TypingSession, code: &str) {
    session.handle(code, EventKind::KeyDown);
    session.handle(code, EventKind::KeyUp);
}

/// On-screen key press: mousedown then click.
fn click(session: &mut TypingSession, code: &str) {
    session.handle(code, EventKind::PointerDown);
    session.handle(code, EventKind::PointerClick);
}

fn switch_language(session: &mut TypingSession) {
    session.handle("ControlLeft", EventKind::KeyDown);
    session.handle("AltLeft", EventKind::KeyDown);
    session.handle("AltLeft", EventKind::KeyUp);
    session.handle("ControlLeft", EventKind::KeyUp);
}

#[test]
fn test_type_mixed_sentence() {
    // Arrange
    let mut session = session_with(Arc::new(MemoryStore::new()));

    // Act: "Hi, 2!" typed with shift held for capitals and punctuation
    session.handle("ShiftLeft", EventKind::KeyDown);
    tap(&mut session, "KeyH");
    session.handle("ShiftLeft", EventKind::KeyUp);
    click(&mut session, "KeyI");
    tap(&mut session, "Comma");
    click(&mut session, "Space");
    tap(&mut session, "Digit2");
    session.handle("ShiftRight", EventKind::KeyDown);
    tap(&mut session, "Digit1");
    session.handle("ShiftRight", EventKind::KeyUp);

    // Assert
    assert_eq!(session.text(), "Hi, 2!");
    assert!(session.keyboard().state().pressed().is_empty());
}

#[test]
fn test_caps_lock_then_backspace() {
    let mut session = session_with(Arc::new(MemoryStore::new()));

    tap(&mut session, "CapsLock");
    tap(&mut session, "KeyA");
    tap(&mut session, "KeyB");
    tap(&mut session, "Digit3");
    tap(&mut session, "Backspace");
    tap(&mut session, "CapsLock");
    tap(&mut session, "KeyC");

    assert_eq!(session.text(), "ABc");
    assert!(!session.keyboard().caps_lock());
}

#[test]
fn test_language_switch_and_russian_typing() {
    // Arrange
    let mut session = session_with(Arc::new(MemoryStore::new()));

    // Act
    switch_language(&mut session);
    tap(&mut session, "KeyG");
    tap(&mut session, "KeyJ");
    tap(&mut session, "KeyK");
    session.handle("ShiftLeft", EventKind::KeyDown);
    tap(&mut session, "Digit3");
    session.handle("ShiftLeft", EventKind::KeyUp);

    // Assert
    assert_eq!(session.keyboard().language(), Language::Ru);
    assert_eq!(session.text(), "пол№");
    assert_eq!(
        session.keyboard().view().button("KeyG").map(|b| b.label.as_str()),
        Some("п")
    );
}

#[test]
fn test_switching_twice_returns_to_english() {
    let mut session = session_with(Arc::new(MemoryStore::new()));
    switch_language(&mut session);
    switch_language(&mut session);
    assert_eq!(session.keyboard().language(), Language::En);
}

#[test]
fn test_language_persists_across_sessions() {
    // Arrange
    let store = Arc::new(MemoryStore::new());
    let mut first = session_with(store.clone());

    // Act
    switch_language(&mut first);
    drop(first);
    let mut second = session_with(store.clone());
    tap(&mut second, "KeyQ");

    // Assert
    assert_eq!(store.get(LANG_KEY).as_deref(), Some("ru"));
    assert_eq!(second.keyboard().language(), Language::Ru);
    assert_eq!(second.text(), "й");
}

#[test]
fn test_invalid_stored_language_falls_back_to_english() {
    let store = Arc::new(MemoryStore::with_entry(LANG_KEY, "klingon"));
    let kb = VirtualKeyboard::with_standard_layout(store);
    assert_eq!(kb.language(), Language::En);
}

#[test]
fn test_every_printable_key_types_its_label() {
    // Arrange
    let kb = VirtualKeyboard::with_standard_layout(Arc::new(MemoryStore::new()));

    for key in kb.layout().keys().iter().filter(|k| !k.is_special()) {
        // Act
        let typed = kb.resolve_character(key.code, "");

        // Assert
        let label = kb.view().button(key.code).map(|b| b.label.clone());
        assert_eq!(Some(typed), label, "label mismatch for {}", key.code);
    }
}

#[test]
fn test_active_codes_follow_held_keys() {
    let mut session = session_with(Arc::new(MemoryStore::new()));
    session.handle("ShiftLeft", EventKind::KeyDown);
    session.handle("KeyA", EventKind::PointerDown);
    tap(&mut session, "CapsLock");

    let active = session.keyboard().view().active_codes();

    assert_eq!(active, vec!["CapsLock", "KeyA", "ShiftLeft"]);
}
