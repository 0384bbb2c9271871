//! vkb-web library crate.
//!
//! This crate serves the virtual keyboard to a web page over WebSocket.  The
//! page renders the buttons and forwards DOM key/pointer events; the service
//! runs the keyboard state machine and sends back labels, highlights and the
//! typed text.
//!
//! # Architecture (clean architecture)
//!
//! ```text
//! Browser (JSON over WebSocket)
//!         ↕
//! [vkb-web]
//!   ├── domain/           Pure types: JSON message enums, ServerConfig
//!   ├── application/      Keyboard service: JSON ↔ TypingSession
//!   └── infrastructure/
//!         ├── ws_server/  WebSocket accept loop (tokio-tungstenite)
//!         └── storage/    TOML settings file (remembers the language)
//! ```
//!
//! # Layer rules
//!
//! - `domain` has no I/O (no async, no sockets, no files).
//! - `application` depends on `domain` and `vkb-core` only.
//! - `infrastructure` depends on all other layers plus `tokio` and `tungstenite`.

/// Domain layer: pure business-logic types (no I/O).
pub mod domain;

/// Application layer: applies browser messages to a typing session.
pub mod application;

/// Infrastructure layer: WebSocket server and settings file.
pub mod infrastructure;
