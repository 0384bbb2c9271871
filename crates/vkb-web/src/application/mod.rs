//! Application layer for vkb-web.
//!
//! Knows *what* to do with a browser message (feed it to the typing session,
//! produce the reply) but not *how* messages travel; sockets and task
//! spawning live in the infrastructure layer.

pub mod keyboard_service;

pub use keyboard_service::{
    apply_browser_msg, browser_msg_type_name, layout_message, state_message, LANGUAGE_HINT,
};
