//! Domain entities for the virtual keyboard.
//!
//! This module contains pure business logic with no infrastructure dependencies.
//!
//! # What is "domain" in Clean Architecture? (for beginners)
//!
//! Clean Architecture organises code into concentric layers.  The innermost
//! layer is called the **domain**.  Domain code:
//!
//! - Contains the core rules of the application.
//! - Has **no** imports from OS APIs, network libraries, storage drivers, or UI
//!   frameworks.
//! - Can be compiled and tested on any platform without any external setup.
//!
//! Here the rules are: which keys are held, whether caps-lock is on, which
//! language is active, and what each keystroke does to the text.  Whether the
//! keyboard is drawn in a browser, a terminal, or not at all is decided by
//! outer layers.

/// Input event kinds (`keydown`, `keyup`, `mousedown`, `click`).
pub mod event;

/// The keyboard controller: the core state machine.
///
/// See [`keyboard::VirtualKeyboard`] for the main type.
pub mod keyboard;

/// The active layout language.
pub mod language;

/// A controller paired with its text buffer.
pub mod session;

/// The text buffer and its control actions.
pub mod text;

/// Per-key render state maintained by the controller.
pub mod view;
