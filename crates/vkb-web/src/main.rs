//! Virtual keyboard WebSocket service: entry point.
//!
//! This binary serves the virtual keyboard to a web page.  The page draws the
//! buttons and forwards every physical key and pointer event over a
//! WebSocket; the service runs the keyboard state machine and answers with
//! the labels, highlights and typed text to display.
//!
//! # Usage
//!
//! ```text
//! vkb-web [OPTIONS]
//!
//! Options:
//!   --ws-port  <PORT>  WebSocket listener port [default: 24810]
//!   --ws-bind  <ADDR>  Address to bind [default: 127.0.0.1]
//!   --settings <PATH>  Settings file [default: platform config dir]
//!   --title    <TEXT>  Heading shown above the keyboard [default: Virtual Keyboard]
//! ```
//!
//! # Environment variable overrides
//!
//! CLI args take precedence when both are present.
//!
//! | Variable        | Default            | Description             |
//! |-----------------|--------------------|-------------------------|
//! | `VKB_WS_PORT`   | `24810`            | WebSocket listener port |
//! | `VKB_WS_BIND`   | `127.0.0.1`        | Bind address            |
//! | `VKB_SETTINGS`  | platform dir       | Settings file path      |
//! | `VKB_TITLE`     | `Virtual Keyboard` | Page heading            |

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use vkb_web::domain::config::{DEFAULT_TITLE, DEFAULT_WS_PORT};
use vkb_web::domain::ServerConfig;
use vkb_web::infrastructure::run_server;

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Virtual keyboard WebSocket service.
#[derive(Debug, Parser)]
#[command(
    name = "vkb-web",
    about = "WebSocket service that drives the virtual keyboard from a web page",
    version
)]
struct Cli {
    /// TCP port for the WebSocket server to listen on.
    #[arg(long, default_value_t = DEFAULT_WS_PORT, env = "VKB_WS_PORT")]
    ws_port: u16,

    /// IP address to bind the WebSocket server to.
    ///
    /// Use `0.0.0.0` to serve other machines on the network.
    #[arg(long, default_value = "127.0.0.1", env = "VKB_WS_BIND")]
    ws_bind: String,

    /// Settings file that remembers the keyboard language.
    ///
    /// Defaults to `settings.toml` in the platform config directory.
    #[arg(long, env = "VKB_SETTINGS")]
    settings: Option<PathBuf>,

    /// Heading shown above the keyboard.
    #[arg(long, default_value = DEFAULT_TITLE, env = "VKB_TITLE")]
    title: String,
}

impl Cli {
    /// Converts the parsed CLI arguments into a [`ServerConfig`].
    ///
    /// # Errors
    ///
    /// Returns an error if `--ws-bind` is not a valid IP address.
    fn into_server_config(self) -> anyhow::Result<ServerConfig> {
        let ws_bind_addr: SocketAddr = format!("{}:{}", self.ws_bind, self.ws_port)
            .parse()
            .with_context(|| {
                format!(
                    "invalid WebSocket bind address: '{}:{}'",
                    self.ws_bind, self.ws_port
                )
            })?;

        Ok(ServerConfig {
            ws_bind_addr,
            settings_path: self.settings,
            title: self.title,
        })
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

/// Program entry point.
///
/// 1. `tracing_subscriber` is initialised; `RUST_LOG` controls the level.
/// 2. CLI arguments are parsed into a [`ServerConfig`].
/// 3. A Ctrl+C handler clears a shared `AtomicBool`.
/// 4. [`run_server`] serves browsers until the flag is cleared.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // `EnvFilter::try_from_default_env()` reads `RUST_LOG`; fall back to `info`.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = cli.into_server_config()?;

    info!("virtual keyboard service starting on ws://{}", config.ws_bind_addr);

    // ── Graceful shutdown flag ─────────────────────────────────────────────────
    let running = Arc::new(AtomicBool::new(true));
    let running_clone = Arc::clone(&running);

    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("received Ctrl+C, shutting down");
                running_clone.store(false, Ordering::Relaxed);
            }
            Err(e) => {
                tracing::error!("failed to listen for Ctrl+C signal: {e}");
            }
        }
    });

    run_server(config, running).await?;

    info!("virtual keyboard service stopped");
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
