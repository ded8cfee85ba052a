//! Persisted settings
//!
//! Preferences are stored as a flat TOML table of named keys in
//! `qfreerdp.toml`. Passwords are never written.

#[allow(missing_docs)]
pub mod keys;
mod manager;
mod restore;
mod store;

pub use manager::{CONFIG_DIR_ENV, ConfigManager, SETTINGS_FILE_NAME};
pub use restore::{restore_preferences, save_preferences};
pub use store::{SettingValue, SettingsStore};
