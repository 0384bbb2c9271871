//! Storage infrastructure: the settings file.
//!
//! The keyboard only knows the `LanguageStore` port from `vkb-core`; this
//! module is the adapter that puts it on disk.

pub mod settings;

pub use settings::{settings_file_path, SettingsError, SettingsFile};
