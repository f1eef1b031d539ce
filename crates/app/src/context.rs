//! Composition root: settings, catalog client and favorites store.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use ludex_application::Clock;
use ludex_domain::ClientSettings;
use ludex_infrastructure::{
    DatabaseLocation, ReqwestGameCatalog, SeaOrmFavoritesRepository, SettingsRepository,
    SystemClock, apply_process_env,
};
use tracing::debug;

/// Everything a command needs, wired once per run.
pub struct AppContext {
    pub settings: ClientSettings,
    pub catalog: ReqwestGameCatalog,
    pub favorites: Arc<SeaOrmFavoritesRepository>,
    pub clock: Arc<dyn Clock>,
}

/// The settings file at `path`, or the platform default.
pub fn settings_repository(path: Option<&Path>) -> SettingsRepository {
    path.map_or_else(SettingsRepository::new, SettingsRepository::with_path)
}

impl AppContext {
    /// Loads settings, applies environment overrides and opens the stores.
    ///
    /// A `database` argument wins over both the settings file and
    /// `LUDEX_DATABASE`.
    pub async fn load(
        settings_path: Option<&Path>,
        database: Option<PathBuf>,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let repository = settings_repository(settings_path);
        let mut settings = repository.load().await?;
        apply_process_env(&mut settings);
        if let Some(path) = database {
            settings.database_file = Some(path);
        }
        debug!(settings_file = ?repository.path(), "settings loaded");

        let location = database_location(&settings)?;
        let favorites = SeaOrmFavoritesRepository::open(&location).await?;
        let catalog = ReqwestGameCatalog::new(&settings)?;

        Ok(Self {
            settings,
            catalog,
            favorites: Arc::new(favorites),
            clock: Arc::new(SystemClock::new()),
        })
    }
}

fn database_location(settings: &ClientSettings) -> Result<DatabaseLocation, String> {
    settings
        .database_file
        .clone()
        .or_else(DatabaseLocation::default_file)
        .map(DatabaseLocation::File)
        .ok_or_else(|| {
            "Could not determine a data directory; pass --database <PATH>".to_string()
        })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn explicit_database_file_is_used() {
        let settings = ClientSettings {
            database_file: Some(PathBuf::from("/tmp/ludex-test.db")),
            ..ClientSettings::default()
        };

        assert_eq!(
            database_location(&settings).unwrap(),
            DatabaseLocation::File(PathBuf::from("/tmp/ludex-test.db"))
        );
    }

    #[tokio::test]
    async fn load_uses_settings_file_and_database_argument() {
        let dir = tempfile::tempdir().unwrap();
        let settings_path = dir.path().join("settings.json");
        SettingsRepository::with_path(&settings_path)
            .save(&ClientSettings {
                api_key: Some("file-key".to_string()),
                ..ClientSettings::default()
            })
            .await
            .unwrap();
        let db_path = dir.path().join("data").join("favorites.db");

        let ctx = AppContext::load(Some(&settings_path), Some(db_path.clone()))
            .await
            .expect("Should build context");

        assert_eq!(ctx.settings.database_file, Some(db_path.clone()));
        assert!(db_path.exists());
    }
}
