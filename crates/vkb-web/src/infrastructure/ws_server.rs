//! WebSocket server: accept loop and per-session task management.
//!
//! This module is responsible for:
//!
//! 1. Opening the settings file that remembers the keyboard language.
//! 2. Binding a TCP listener on the configured address.
//! 3. Upgrading each accepted connection to a WebSocket session.
//! 4. Running one [`TypingSession`] per browser: every JSON frame is applied
//!    to the session and answered with the new `State`.
//! 5. Stopping when the `running` flag is cleared.
//!
//! # Sharing between sessions
//!
//! Each browser gets its own keyboard and text buffer.  Only the settings
//! store is shared, so a language switch in one tab becomes the starting
//! language of the next tab that connects.

use std::net::SocketAddr;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use std::time::Duration;

use anyhow::Context;
use futures_util::{Sink, SinkExt, StreamExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::time::timeout;
use tokio_tungstenite::{
    accept_async,
    tungstenite::{Error as WsError, Message as WsMessage},
};
use tracing::{debug, error, info, warn};
use uuid::Uuid;
use vkb_core::{LanguageStore, Layout, TypingSession};

use crate::application::{apply_browser_msg, browser_msg_type_name, layout_message, state_message};
use crate::domain::config::ServerConfig;
use crate::domain::messages::{BrowserToServerMsg, ServerToBrowserMsg};
use crate::infrastructure::storage::SettingsFile;

/// How often the accept loop re-checks the shutdown flag.
const ACCEPT_POLL: Duration = Duration::from_millis(200);

// ── Public API ────────────────────────────────────────────────────────────────

/// Runs the keyboard service until `running` is set to `false`.
///
/// Opens the settings file (explicit path or platform default), binds
/// `config.ws_bind_addr`, and hands every accepted connection to its own
/// Tokio task.
///
/// # Errors
///
/// Returns an error if the settings file cannot be read or parsed, or if the
/// TCP listener cannot be bound.
pub async fn run_server(config: ServerConfig, running: Arc<AtomicBool>) -> anyhow::Result<()> {
    let settings = SettingsFile::open_configured(config.settings_path.as_deref())
        .context("failed to open keyboard settings")?;
    info!("keyboard settings file: {}", settings.path().display());

    let listener = TcpListener::bind(config.ws_bind_addr)
        .await
        .with_context(|| format!("failed to bind WebSocket listener on {}", config.ws_bind_addr))?;

    info!("virtual keyboard service listening on {}", config.ws_bind_addr);

    serve(listener, config, Arc::new(settings), running).await
}

/// Accept loop over an already-bound listener.
///
/// Split out of [`run_server`] so tests can bind port 0 and inject an
/// in-memory store.
pub async fn serve(
    listener: TcpListener,
    config: ServerConfig,
    store: Arc<dyn LanguageStore>,
    running: Arc<AtomicBool>,
) -> anyhow::Result<()> {
    let config = Arc::new(config);

    loop {
        if !running.load(Ordering::Relaxed) {
            info!("shutdown flag set; stopping accept loop");
            break;
        }

        // Short timeout so the loop notices the shutdown flag even when no
        // browser is connecting.
        match timeout(ACCEPT_POLL, listener.accept()).await {
            Ok(Ok((stream, peer_addr))) => {
                info!("new browser connection from {peer_addr}");
                let cfg = Arc::clone(&config);
                let store = Arc::clone(&store);
                tokio::spawn(async move {
                    handle_browser_session(stream, peer_addr, cfg, store).await;
                });
            }
            Ok(Err(e)) => {
                // Transient accept error (e.g., too many open file descriptors).
                error!("accept error: {e}");
            }
            Err(_) => {
                // No connection in the last poll interval.
            }
        }
    }

    Ok(())
}

// ── Per-session handler ───────────────────────────────────────────────────────

/// Top-level handler for a single browser session; logs how it ended.
async fn handle_browser_session(
    raw_stream: TcpStream,
    peer_addr: SocketAddr,
    config: Arc<ServerConfig>,
    store: Arc<dyn LanguageStore>,
) {
    match run_session(raw_stream, peer_addr, config, store).await {
        Ok(()) => info!("session {peer_addr} closed normally"),
        Err(e) => warn!("session {peer_addr} closed with error: {e:#}"),
    }
}

/// Runs the complete lifecycle of a single browser session.
///
/// 1. Completes the WebSocket handshake.
/// 2. Sends `Layout` and the initial `State`.
/// 3. Applies each text frame to the session and replies with `State`,
///    until the browser closes the connection.
///
/// # Errors
///
/// Returns an error if the handshake fails or a reply cannot be sent.
async fn run_session(
    raw_stream: TcpStream,
    peer_addr: SocketAddr,
    config: Arc<ServerConfig>,
    store: Arc<dyn LanguageStore>,
) -> anyhow::Result<()> {
    let ws_stream = accept_async(raw_stream)
        .await
        .with_context(|| format!("WebSocket handshake failed with {peer_addr}"))?;

    let session_id = Uuid::new_v4();
    info!("session {session_id}: WebSocket established with {peer_addr}");

    let (mut ws_tx, mut ws_rx) = ws_stream.split();
    let mut session = TypingSession::with_layout(Layout::standard(), store);

    send_json(&mut ws_tx, &layout_message(&config.title, session.keyboard())).await?;
    send_json(&mut ws_tx, &state_message(&session)).await?;

    loop {
        let ws_msg = match ws_rx.next().await {
            Some(Ok(msg)) => msg,
            Some(Err(WsError::ConnectionClosed | WsError::Protocol(_))) => {
                debug!("session {session_id}: browser WebSocket closed");
                break;
            }
            Some(Err(e)) => {
                warn!("session {session_id}: browser WebSocket error: {e}");
                break;
            }
            None => {
                debug!("session {session_id}: browser stream ended");
                break;
            }
        };

        match ws_msg {
            WsMessage::Text(json_str) => {
                let browser_msg: BrowserToServerMsg = match serde_json::from_str(&json_str) {
                    Ok(m) => m,
                    Err(e) => {
                        // One bad frame does not end the session.
                        warn!("session {session_id}: invalid JSON from browser: {e}");
                        continue;
                    }
                };

                debug!(
                    "session {session_id}: browser → service: {}",
                    browser_msg_type_name(&browser_msg)
                );

                let reply = apply_browser_msg(&mut session, &browser_msg);
                send_json(&mut ws_tx, &reply)
                    .await
                    .with_context(|| format!("session {session_id}: failed to send state"))?;
            }

            WsMessage::Binary(_) => {
                warn!("session {session_id}: unexpected binary WebSocket frame (ignored)");
            }

            WsMessage::Ping(data) => {
                // tokio-tungstenite queues the Pong reply itself.
                debug!("session {session_id}: WebSocket ping ({} bytes)", data.len());
            }

            WsMessage::Pong(_) => {
                debug!("session {session_id}: WebSocket pong received");
            }

            WsMessage::Close(_) => {
                debug!("session {session_id}: WebSocket Close frame received");
                break;
            }

            WsMessage::Frame(_) => {
                debug!("session {session_id}: raw frame (ignored)");
            }
        }
    }

    Ok(())
}

// ── Helper ────────────────────────────────────────────────────────────────────

/// Serializes `msg` and sends it as one text frame.
async fn send_json<S>(sink: &mut S, msg: &ServerToBrowserMsg) -> anyhow::Result<()>
where
    S: Sink<WsMessage, Error = WsError> + Unpin,
{
    let json = serde_json::to_string(msg).context("failed to serialize message")?;
    sink.send(WsMessage::Text(json))
        .await
        .context("WebSocket send failed")?;
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_tungstenite::connect_async;
    use vkb_core::{Language, MemoryStore, LANG_KEY};

    /// Starts `serve` on an ephemeral port and returns its address and the
    /// shutdown flag.
    async fn start_server(store: Arc<dyn LanguageStore>) -> (SocketAddr, Arc<AtomicBool>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let running = Arc::new(AtomicBool::new(true));
        let flag = Arc::clone(&running);
        tokio::spawn(async move {
            serve(listener, ServerConfig::default(), store, flag).await.unwrap();
        });
        (addr, running)
    }

    /// Reads frames until the next text frame and parses it.
    async fn next_msg<S>(rx: &mut S) -> ServerToBrowserMsg
    where
        S: futures_util::Stream<Item = Result<WsMessage, WsError>> + Unpin,
    {
        loop {
            match rx.next().await {
                Some(Ok(WsMessage::Text(json))) => return serde_json::from_str(&json).unwrap(),
                Some(Ok(_)) => continue,
                other => panic!("expected a text frame, got {other:?}"),
            }
        }
    }

    fn key_frame(code: &str, event: &str) -> WsMessage {
        WsMessage::Text(format!(r#"{{"type":"Key","code":"{code}","event":"{event}"}}"#))
    }

    #[tokio::test]
    async fn test_session_sends_layout_then_state_on_connect() {
        // Arrange
        let (addr, running) = start_server(Arc::new(MemoryStore::new())).await;

        // Act
        let (ws, _) = connect_async(format!("ws://{addr}")).await.unwrap();
        let (_tx, mut rx) = ws.split();
        let first = next_msg(&mut rx).await;
        let second = next_msg(&mut rx).await;

        // Assert
        assert!(matches!(first, ServerToBrowserMsg::Layout { .. }));
        match second {
            ServerToBrowserMsg::State { language, text, .. } => {
                assert_eq!(language, Language::En);
                assert_eq!(text, "");
            }
            other => panic!("expected State, got {other:?}"),
        }

        running.store(false, Ordering::Relaxed);
    }

    #[tokio::test]
    async fn test_session_types_and_switches_language() {
        // Arrange
        let store = Arc::new(MemoryStore::new());
        let (addr, running) = start_server(store.clone()).await;
        let (ws, _) = connect_async(format!("ws://{addr}")).await.unwrap();
        let (mut tx, mut rx) = ws.split();
        next_msg(&mut rx).await;
        next_msg(&mut rx).await;

        // Act
        for frame in [
            key_frame("KeyH", "keydown"),
            key_frame("KeyH", "keyup"),
            key_frame("ControlLeft", "keydown"),
            key_frame("AltLeft", "keydown"),
            key_frame("AltLeft", "keyup"),
            key_frame("ControlLeft", "keyup"),
            key_frame("KeyQ", "mousedown"),
        ] {
            tx.send(frame).await.unwrap();
        }
        let mut last = None;
        for _ in 0..7 {
            last = Some(next_msg(&mut rx).await);
        }

        // Assert
        match last {
            Some(ServerToBrowserMsg::State { language, text, .. }) => {
                assert_eq!(language, Language::Ru);
                assert_eq!(text, "hй");
            }
            other => panic!("expected State, got {other:?}"),
        }
        assert_eq!(store.get(LANG_KEY).as_deref(), Some("ru"));

        running.store(false, Ordering::Relaxed);
    }

    #[tokio::test]
    async fn test_session_skips_malformed_json() {
        // Arrange
        let (addr, running) = start_server(Arc::new(MemoryStore::new())).await;
        let (ws, _) = connect_async(format!("ws://{addr}")).await.unwrap();
        let (mut tx, mut rx) = ws.split();
        next_msg(&mut rx).await;
        next_msg(&mut rx).await;

        // Act: a bad frame, then a valid one
        tx.send(WsMessage::Text("not json".to_string())).await.unwrap();
        tx.send(key_frame("KeyA", "keydown")).await.unwrap();

        // Assert: the only reply is for the valid frame
        match next_msg(&mut rx).await {
            ServerToBrowserMsg::State { text, .. } => assert_eq!(text, "a"),
            other => panic!("expected State, got {other:?}"),
        }

        running.store(false, Ordering::Relaxed);
    }

    #[tokio::test]
    async fn test_serve_stops_when_flag_cleared() {
        // Arrange
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let running = Arc::new(AtomicBool::new(false));

        // Act
        let result = tokio::time::timeout(
            Duration::from_secs(2),
            serve(listener, ServerConfig::default(), Arc::new(MemoryStore::new()), running),
        )
        .await;

        // Assert
        assert!(matches!(result, Ok(Ok(()))));
    }
}
