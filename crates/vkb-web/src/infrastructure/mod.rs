//! Infrastructure layer for vkb-web.
//!
//! Handles all I/O:
//!
//! - Binding a TCP listener and performing the WebSocket upgrade handshake
//! - Spawning one Tokio task per browser session
//! - Reading and writing the TOML settings file
//! - Stopping on the shutdown signal
//!
//! Message types live in the domain layer and the keyboard logic in the
//! application layer; configuration parsing happens in `main.rs`.

pub mod storage;
pub mod ws_server;

pub use ws_server::{run_server, serve};
