//! Client settings persistence.
//!
//! Stores client settings in the platform-specific config directory:
//! - Linux/macOS: ~/.config/ludex/settings.json
//! - Windows: %APPDATA%/ludex/settings.json

use std::path::{Path, PathBuf};

use tokio::fs;
use ludex_domain::ClientSettings;

use crate::serialization::{SerializationError, from_json_bytes, to_json_stable_bytes};

/// Error type for settings operations.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// IO error during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] SerializationError),

    /// Could not determine config directory.
    #[error("Could not determine config directory")]
    NoConfigDir,
}

/// Repository for client settings persistence.
#[derive(Debug, Clone, Default)]
pub struct SettingsRepository {
    path: Option<PathBuf>,
}

impl SettingsRepository {
    /// Creates a settings repository using the platform config directory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            path: Self::default_path(),
        }
    }

    /// Creates a settings repository reading and writing `path`.
    #[must_use]
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// Returns the default settings file location, if a config dir exists.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("ludex").join("settings.json"))
    }

    /// Returns the path where settings are stored, if available.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Loads client settings from disk.
    ///
    /// Returns default settings if the file doesn't exist.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub async fn load(&self) -> Result<ClientSettings, SettingsError> {
        let Some(path) = &self.path else {
            return Ok(ClientSettings::default());
        };

        if !fs::try_exists(path).await? {
            return Ok(ClientSettings::default());
        }

        let content = fs::read(path).await?;
        let settings = from_json_bytes(&content)?;
        Ok(settings)
    }

    /// Saves client settings to disk, creating the directory if needed.
    ///
    /// # Errors
    /// Returns an error if no location is known or the file cannot be written.
    pub async fn save(&self, settings: &ClientSettings) -> Result<(), SettingsError> {
        let Some(path) = &self.path else {
            return Err(SettingsError::NoConfigDir);
        };

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).await?;
        }

        let content = to_json_stable_bytes(settings)?;
        fs::write(path, content).await?;

        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn settings_path_is_valid() {
        if let Some(p) = SettingsRepository::default_path() {
            assert!(p.ends_with("ludex/settings.json"));
        }
    }

    #[tokio::test]
    async fn load_returns_default_when_no_file() {
        let dir = tempdir().unwrap();
        let repo = SettingsRepository::with_path(dir.path().join("missing.json"));

        let settings = repo.load().await.expect("Should load defaults");

        assert_eq!(settings, ClientSettings::default());
    }

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let repo = SettingsRepository::with_path(dir.path().join("conf").join("settings.json"));
        let settings = ClientSettings {
            api_key: Some("abc123".to_string()),
            page_size: 40,
            database_file: Some(PathBuf::from("/tmp/ludex.db")),
            ..ClientSettings::default()
        };

        repo.save(&settings).await.expect("Should save");
        let loaded = repo.load().await.expect("Should load");

        assert_eq!(loaded, settings);
    }

    #[tokio::test]
    async fn partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, br#"{ "api_key": "from-file" }"#).await.unwrap();

        let loaded = SettingsRepository::with_path(&path).load().await.unwrap();

        assert_eq!(loaded.api_key.as_deref(), Some("from-file"));
        assert_eq!(loaded.page_size, ClientSettings::default().page_size);
    }

    #[tokio::test]
    async fn invalid_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, b"{ not json").await.unwrap();

        let result = SettingsRepository::with_path(&path).load().await;

        assert!(matches!(result, Err(SettingsError::Serialization(_))));
    }
}
