//! Domain layer for vkb-web.
//!
//! Pure types with no dependencies on I/O or networking:
//!
//! - Message types (the JSON "language" between browser and service)
//! - Configuration structures

pub mod config;
pub mod messages;

pub use config::ServerConfig;
pub use messages::{BrowserToServerMsg, KeyJson, KeyStateJson, ServerToBrowserMsg};
