//! Service configuration types.
//!
//! [`ServerConfig`] holds every runtime setting.  It is built from CLI
//! arguments in `main.rs` or from [`Default`] in tests; the domain never
//! reads environment variables itself.

use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;

/// Default WebSocket port.
pub const DEFAULT_WS_PORT: u16 = 24810;

/// Default page title sent in the `Layout` message.
pub const DEFAULT_TITLE: &str = "Virtual Keyboard";

/// All runtime configuration for the keyboard service.
///
/// # Example
///
/// ```rust
/// use vkb_web::domain::ServerConfig;
///
/// let cfg = ServerConfig::default();
/// assert_eq!(cfg.ws_bind_addr.port(), 24810);
/// ```
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// The address and port the WebSocket server binds to.
    ///
    /// Defaults to loopback: the keyboard page normally runs on the same
    /// machine as the service.
    pub ws_bind_addr: SocketAddr,

    /// Explicit settings file.  `None` means the platform config directory.
    pub settings_path: Option<PathBuf>,

    /// Title shown above the keyboard.
    pub title: String,
}

impl Default for ServerConfig {
    /// | Field          | Default                  |
    /// |----------------|--------------------------|
    /// | ws_bind_addr   | `127.0.0.1:24810`        |
    /// | settings_path  | `None` (platform dir)    |
    /// | title          | `Virtual Keyboard`       |
    fn default() -> Self {
        Self {
            ws_bind_addr: SocketAddr::from((Ipv4Addr::LOCALHOST, DEFAULT_WS_PORT)),
            settings_path: None,
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ws_port_is_24810() {
        // Arrange / Act
        let cfg = ServerConfig::default();
        // Assert
        assert_eq!(cfg.ws_bind_addr.port(), 24810);
    }

    #[test]
    fn test_default_bind_is_loopback() {
        let cfg = ServerConfig::default();
        assert!(cfg.ws_bind_addr.ip().is_loopback());
    }

    #[test]
    fn test_default_uses_platform_settings_dir() {
        let cfg = ServerConfig::default();
        assert!(cfg.settings_path.is_none());
        assert_eq!(cfg.title, DEFAULT_TITLE);
    }

    #[test]
    fn test_config_custom_values() {
        let cfg = ServerConfig {
            ws_bind_addr: "0.0.0.0:9000".parse().unwrap(),
            settings_path: Some(PathBuf::from("/tmp/vkb.toml")),
            title: "Demo".to_string(),
        };
        assert_eq!(cfg.ws_bind_addr.port(), 9000);
        assert_eq!(cfg.settings_path.as_deref(), Some(std::path::Path::new("/tmp/vkb.toml")));
    }
}
