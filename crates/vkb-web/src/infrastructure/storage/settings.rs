//! TOML-backed settings file that remembers the keyboard language.
//!
//! The file lives in the platform-appropriate config directory unless an
//! explicit path is given:
//! - Windows:  `%APPDATA%\VirtualKeyboard\settings.toml`
//! - Linux:    `~/.config/virtual-keyboard/settings.toml`
//! - macOS:    `~/Library/Application Support/VirtualKeyboard/settings.toml`
//!
//! It is a flat table of strings; today only one entry is used:
//!
//! ```toml
//! lang = "ru"
//! ```
//!
//! [`SettingsFile`] implements [`LanguageStore`], so the keyboard writes
//! straight through to disk whenever the language changes.  A missing file
//! behaves like an empty store and is created on the first write.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use thiserror::Error;
use tracing::debug;
use vkb_core::{LanguageStore, StoreError};

/// File name inside the config directory.
pub const SETTINGS_FILE_NAME: &str = "settings.toml";

/// Error type for settings file operations.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The platform config directory could not be determined.
    #[error("could not determine platform config directory")]
    NoPlatformConfigDir,

    /// A file system I/O error occurred.
    #[error("I/O error accessing settings at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse settings TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// The settings could not be serialized to TOML.
    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// A [`LanguageStore`] persisted as a TOML file.
#[derive(Debug)]
pub struct SettingsFile {
    path: PathBuf,
    values: Mutex<BTreeMap<String, String>>,
}

impl SettingsFile {
    /// Loads the settings at `path`, or starts empty if the file does not
    /// exist yet.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Io`] for file-system errors other than "not
    /// found", and [`SettingsError::Parse`] if the TOML is malformed.
    pub fn open(path: PathBuf) -> Result<Self, SettingsError> {
        let values: BTreeMap<String, String> = match std::fs::read_to_string(&path) {
            Ok(content) => toml::from_str(&content)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(source) => return Err(SettingsError::Io { path, source }),
        };
        Ok(Self {
            path,
            values: Mutex::new(values),
        })
    }

    /// Opens `path` if given, otherwise the file in the platform config
    /// directory.
    pub fn open_configured(path: Option<&Path>) -> Result<Self, SettingsError> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => settings_file_path()?,
        };
        Self::open(path)
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes `values` to disk, creating the directory if needed.
    fn save(&self, values: &BTreeMap<String, String>) -> Result<(), SettingsError> {
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir).map_err(|source| SettingsError::Io {
                path: dir.to_path_buf(),
                source,
            })?;
        }

        let content = toml::to_string_pretty(values)?;
        std::fs::write(&self.path, content).map_err(|source| SettingsError::Io {
            path: self.path.clone(),
            source,
        })?;
        debug!("settings saved to {}", self.path.display());
        Ok(())
    }
}

impl LanguageStore for SettingsFile {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().ok()?.get(key).cloned()
    }

    /// Writes the whole file while holding the lock.  The file is a handful
    /// of lines, so this blocks a Tokio worker only briefly; larger settings
    /// would need `tokio::task::spawn_blocking` at the call site.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut values = self.values.lock().map_err(|_| StoreError::Poisoned)?;
        values.insert(key.to_string(), value.to_string());
        self.save(&values).map_err(|e| StoreError::WriteFailed {
            key: key.to_string(),
            reason: e.to_string(),
        })
    }
}

// ── Path resolution ───────────────────────────────────────────────────────────

/// Resolves the full path to the default settings file.
///
/// # Errors
///
/// Returns [`SettingsError::NoPlatformConfigDir`] if the base directory
/// cannot be determined.
pub fn settings_file_path() -> Result<PathBuf, SettingsError> {
    platform_config_dir()
        .map(|dir| dir.join(SETTINGS_FILE_NAME))
        .ok_or(SettingsError::NoPlatformConfigDir)
}

/// Resolves the platform config directory including the application folder.
fn platform_config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        // %APPDATA% e.g. C:\Users\<user>\AppData\Roaming
        std::env::var_os("APPDATA").map(|p| PathBuf::from(p).join("VirtualKeyboard"))
    }

    #[cfg(target_os = "linux")]
    {
        // XDG_CONFIG_HOME or ~/.config
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))?;
        Some(base.join("virtual-keyboard"))
    }

    #[cfg(target_os = "macos")]
    {
        std::env::var_os("HOME").map(|h| {
            PathBuf::from(h)
                .join("Library")
                .join("Application Support")
                .join("VirtualKeyboard")
        })
    }

    #[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
    {
        None
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
