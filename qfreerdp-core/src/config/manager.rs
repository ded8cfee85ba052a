//! Settings file location and persistence

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, ConfigResult};
use crate::models::{Preferences, Resolution};
use crate::tracing::span_names;

use super::restore::{restore_preferences, save_preferences};
use super::store::SettingsStore;

/// Environment variable overriding the configuration directory
pub const CONFIG_DIR_ENV: &str = "QFREERDP_CONFIG_DIR";

/// Settings file name inside the configuration directory
pub const SETTINGS_FILE_NAME: &str = "qfreerdp.toml";

const APP_DIR_NAME: &str = "qfreerdp";

/// Loads and saves the settings file
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_dir: PathBuf,
}

impl ConfigManager {
    /// Creates a manager for the default configuration directory.
    ///
    /// `$QFREERDP_CONFIG_DIR` wins when set and non-empty, otherwise the
    /// platform config directory (`$XDG_CONFIG_HOME/qfreerdp` on Linux).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoConfigDir`] if neither is available.
    pub fn new() -> ConfigResult<Self> {
        let config_dir = std::env::var_os(CONFIG_DIR_ENV)
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from)
            .or_else(|| dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME)))
            .ok_or(ConfigError::NoConfigDir)?;
        Ok(Self::with_config_dir(config_dir))
    }

    /// Creates a manager for an explicit directory
    #[must_use]
    pub fn with_config_dir(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
        }
    }

    /// Configuration directory
    #[must_use]
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Full path of the settings file
    #[must_use]
    pub fn settings_path(&self) -> PathBuf {
        self.config_dir.join(SETTINGS_FILE_NAME)
    }

    /// Reads the settings file. A missing file is an empty store.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file exists but cannot be read and
    /// [`ConfigError::Parse`] if it is not valid settings TOML.
    pub fn load_store(&self) -> ConfigResult<SettingsStore> {
        let _span = tracing::debug_span!(span_names::CONFIG_LOAD).entered();
        let path = self.settings_path();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No settings file, using defaults");
            return Ok(SettingsStore::new());
        }

        let text = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        SettingsStore::from_toml_str(&text).map_err(|reason| ConfigError::Parse { path, reason })
    }

    /// Reads the settings file, falling back to an empty store on any error
    #[must_use]
    pub fn load_store_or_default(&self) -> SettingsStore {
        self.load_store().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Ignoring unreadable settings file");
            SettingsStore::new()
        })
    }

    /// Writes the settings file, replacing it atomically.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the directory or file cannot be written.
    pub fn save_store(&self, store: &SettingsStore) -> ConfigResult<()> {
        let _span = tracing::debug_span!(span_names::CONFIG_SAVE).entered();
        fs::create_dir_all(&self.config_dir).map_err(|source| ConfigError::Io {
            path: self.config_dir.clone(),
            source,
        })?;

        let text = store.to_toml_string().map_err(ConfigError::Serialize)?;
        let path = self.settings_path();
        let tmp_path = path.with_extension("toml.tmp");

        fs::write(&tmp_path, text).map_err(|source| ConfigError::Io {
            path: tmp_path.clone(),
            source,
        })?;
        fs::rename(&tmp_path, &path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;

        tracing::debug!(path = %path.display(), keys = store.len(), "Saved settings");
        Ok(())
    }

    /// Restores the preference model from disk
    #[must_use]
    pub fn load_preferences(&self, catalogue: &[Resolution]) -> Preferences {
        restore_preferences(&self.load_store_or_default(), catalogue)
    }

    /// Persists the preference model.
    ///
    /// Keys this version does not write are left in place.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`ConfigManager::save_store`].
    pub fn save_preferences(&self, prefs: &Preferences) -> ConfigResult<()> {
        let mut store = self.load_store_or_default();
        store.merge(save_preferences(prefs));
        self.save_store(&store)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::config::keys;
    use crate::models::STANDARD_RESOLUTIONS;

    #[test]
    fn test_missing_file_is_empty_store() {
        let dir = TempDir::new().unwrap();
        let manager = ConfigManager::with_config_dir(dir.path());
        assert!(manager.load_store().unwrap().is_empty());
    }

    #[test]
    fn test_save_creates_directory() {
        let dir = TempDir::new().unwrap();
        let manager = ConfigManager::with_config_dir(dir.path().join("nested").join("qfreerdp"));
        let mut store = SettingsStore::new();
        store.set(keys::USERNAME, "alice");
        manager.save_store(&store).unwrap();

        assert!(manager.settings_path().exists());
        assert_eq!(manager.load_store().unwrap(), store);
    }

    #[test]
    fn test_corrupt_file_falls_back_to_empty() {
        let dir = TempDir::new().unwrap();
        let manager = ConfigManager::with_config_dir(dir.path());
        fs::write(manager.settings_path(), "this is = = not toml").unwrap();

        assert!(matches!(
            manager.load_store(),
            Err(ConfigError::Parse { .. })
        ));
        assert!(manager.load_store_or_default().is_empty());
        assert_eq!(
            manager.load_preferences(STANDARD_RESOLUTIONS),
            Preferences::default()
        );
    }

    #[test]
    fn test_save_preferences_keeps_unknown_keys() {
        let dir = TempDir::new().unwrap();
        let manager = ConfigManager::with_config_dir(dir.path());
        let mut store = SettingsStore::new();
        store.set("WindowGeometry", "800x600");
        manager.save_store(&store).unwrap();

        let mut prefs = Preferences::default();
        prefs.login.server = "rdp.example.com".to_string();
        manager.save_preferences(&prefs).unwrap();

        let saved = manager.load_store().unwrap();
        assert_eq!(saved.get_text("WindowGeometry"), Some("800x600".to_string()));
        assert_eq!(
            saved.get_text(keys::CURRENT_SERVER),
            Some("rdp.example.com".to_string())
        );
        assert!(!manager.settings_path().with_extension("toml.tmp").exists());
    }

    #[test]
    fn test_preferences_roundtrip_through_disk() {
        let dir = TempDir::new().unwrap();
        let manager = ConfigManager::with_config_dir(dir.path());
        let mut prefs = Preferences::default();
        prefs.login.server = "rdp.example.com".to_string();
        prefs.login.username = "alice".to_string();
        prefs.devices.clipboard = false;
        manager.save_preferences(&prefs).unwrap();

        let restored = manager.load_preferences(STANDARD_RESOLUTIONS);
        assert_eq!(restored.login.server, "rdp.example.com");
        assert_eq!(restored.login.recent_servers, vec!["rdp.example.com"]);
        assert!(!restored.devices.clipboard);
    }
}
