//! Persistence port for keyboard settings.
//!
//! The controller remembers the selected language between sessions through a
//! tiny key-value store.  The store is injected as a trait object so the
//! domain never touches the file system:
//!
//! - [`MemoryStore`] keeps values in a `HashMap` (tests, embedding).
//! - `vkb-web` provides a TOML-file-backed implementation.
//!
//! # Testability
//!
//! Any `Send + Sync` type implementing [`LanguageStore`] can be plugged in,
//! which lets tests inject failing or pre-populated stores.

use std::collections::HashMap;
use std::sync::Mutex;

use thiserror::Error;

/// Storage key under which the selected language tag is kept.
pub const LANG_KEY: &str = "lang";

/// Error type for store write operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing medium rejected the write.
    #[error("failed to persist {key:?}: {reason}")]
    WriteFailed { key: String, reason: String },

    /// A lock guarding the store was poisoned by a panicking writer.
    #[error("settings store lock poisoned")]
    Poisoned,
}

/// Key-value persistence capability.
///
/// Reads never fail: a value that cannot be read is reported as absent and
/// the caller falls back to its default.  Writes are synchronous and the
/// last write wins.
pub trait LanguageStore: Send + Sync {
    /// Returns the stored value for `key`, or `None` if absent.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`.
    ///
    /// Called on the caller's thread, including from inside async tasks, so
    /// implementations must keep the write small and bounded.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// An in-memory [`LanguageStore`].
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with one entry.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        if let Ok(mut values) = store.values.lock() {
            values.insert(key.to_string(), value.to_string());
        }
        store
    }
}

impl LanguageStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values
            .lock()
            .map_err(|_| StoreError::Poisoned)?
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_get_absent_is_none() {
        let store = MemoryStore::new();
        assert_eq!(store.get(LANG_KEY), None);
    }

    #[test]
    fn test_memory_store_set_then_get() {
        // Arrange
        let store = MemoryStore::new();

        // Act
        store.set(LANG_KEY, "ru").expect("set must succeed");

        // Assert
        assert_eq!(store.get(LANG_KEY).as_deref(), Some("ru"));
    }

    #[test]
    fn test_memory_store_last_write_wins() {
        let store = MemoryStore::with_entry(LANG_KEY, "ru");
        store.set(LANG_KEY, "en").unwrap();
        assert_eq!(store.get(LANG_KEY).as_deref(), Some("en"));
    }

    #[test]
    fn test_store_error_message_names_key() {
        let err = StoreError::WriteFailed {
            key: LANG_KEY.to_string(),
            reason: "disk full".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("lang"));
        assert!(msg.contains("disk full"));
    }
}
