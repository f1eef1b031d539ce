//! SQLite connection for the favorites store.

use std::path::{Path, PathBuf};
use std::time::Duration;

use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, RuntimeErr, Schema,
};
use tracing::{debug, info};
use url::Url;

use super::favorite_games;

const DB_DIR: &str = "ludex";
const DB_FILE_NAME: &str = "favorites.db";

/// Idle timeout and lifetime of the pooled connection.
///
/// sea-orm has no way to switch recycling off; both are set far beyond any
/// run. A recycled connection loses an in-memory database and resets the
/// data version that external change polling compares against.
const PINNED_CONNECTION_LIFETIME: Duration = Duration::from_secs(10 * 365 * 24 * 60 * 60);

/// Where the favorites database lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseLocation {
    /// A database file, created on first use.
    File(PathBuf),
    /// A private in-memory database, gone when the connection closes.
    InMemory,
}

impl DatabaseLocation {
    /// Returns the platform default database file:
    /// - Linux: ~/.local/share/ludex/favorites.db
    /// - macOS: ~/Library/Application Support/ludex/favorites.db
    /// - Windows: %APPDATA%/ludex/favorites.db
    #[must_use]
    pub fn default_file() -> Option<PathBuf> {
        dirs::data_dir().map(|p| p.join(DB_DIR).join(DB_FILE_NAME))
    }

    fn connection_string(&self) -> Result<String, DbErr> {
        match self {
            Self::InMemory => Ok("sqlite::memory:".to_string()),
            Self::File(path) => {
                let absolute = std::path::absolute(path).map_err(|e| internal(e.to_string()))?;
                let url = Url::from_file_path(&absolute).map_err(|()| {
                    internal(format!("Invalid database path: {}", absolute.display()))
                })?;
                Ok(format!("sqlite:{}?mode=rwc", url.path()))
            }
        }
    }
}

fn internal(message: String) -> DbErr {
    DbErr::Conn(RuntimeErr::Internal(message))
}

async fn ensure_parent_dir(path: &Path) -> Result<(), DbErr> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| internal(format!("Cannot create database directory: {e}")))?;
    }
    Ok(())
}

/// Opens the favorites database and creates the table if it is missing.
///
/// # Errors
///
/// Returns `DbErr` if the directory cannot be created, the connection fails,
/// or the schema cannot be applied.
pub async fn connect(location: &DatabaseLocation) -> Result<DatabaseConnection, DbErr> {
    if let DatabaseLocation::File(path) = location {
        ensure_parent_dir(path).await?;
    }

    let db = Database::connect(connect_options(location)?).await?;
    ensure_schema(&db).await?;
    info!(?location, "favorites database ready");
    Ok(db)
}

fn connect_options(location: &DatabaseLocation) -> Result<ConnectOptions, DbErr> {
    let mut options = ConnectOptions::new(location.connection_string()?);
    // One connection for the whole run: an in-memory database lives only as
    // long as it does.
    options
        .max_connections(1)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(8))
        .idle_timeout(PINNED_CONNECTION_LIFETIME)
        .max_lifetime(PINNED_CONNECTION_LIFETIME)
        .sqlx_logging(false);
    Ok(options)
}

async fn ensure_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);
    let mut statement = schema.create_table_from_entity(favorite_games::Entity);
    statement.if_not_exists();
    db.execute(backend.build(&statement)).await?;
    debug!("favorite_games schema ensured");
    Ok(())
}
