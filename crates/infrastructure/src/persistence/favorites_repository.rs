//! Favorites persistence on SQLite via sea-orm.
//!
//! Writes made through a repository notify its subscribers directly. A
//! file-backed repository also polls SQLite's `PRAGMA data_version`, which
//! moves whenever another connection (usually another `ludex` process)
//! commits to the same file.

use std::time::Duration;

use async_trait::async_trait;
use chrono::DateTime;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveValue::Set, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
    Statement,
};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, warn};

use ludex_application::ports::{FavoritesError, FavoritesRepository};
use ludex_domain::{FavoriteGame, GameId, SortOrder};

use super::database::{DatabaseLocation, connect};
use super::favorite_games::{self, Column, Entity as FavoriteGames};

/// How often a file-backed repository checks for writes from other processes.
pub const EXTERNAL_CHANGE_POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Favorites repository backed by the `favorite_games` table.
///
/// Every successful write bumps a change counter that live queries follow.
pub struct SeaOrmFavoritesRepository {
    db: DatabaseConnection,
    changes: watch::Sender<u64>,
    poller: Option<JoinHandle<()>>,
}

impl SeaOrmFavoritesRepository {
    /// Wraps an open connection whose schema is already in place.
    ///
    /// Only writes made through this value are observed.
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        let (changes, _) = watch::channel(0);
        Self {
            db,
            changes,
            poller: None,
        }
    }

    /// Connects to `location`, creating the table if needed.
    ///
    /// A file database is also polled for commits from other connections
    /// every [`EXTERNAL_CHANGE_POLL_INTERVAL`].
    ///
    /// # Errors
    /// Returns `FavoritesError::Storage` if the database cannot be opened.
    pub async fn open(location: &DatabaseLocation) -> Result<Self, FavoritesError> {
        let db = connect(location).await.map_err(storage_error)?;
        let repository = Self::new(db);
        match location {
            DatabaseLocation::File(_) => {
                repository
                    .watch_external_writes(EXTERNAL_CHANGE_POLL_INTERVAL)
                    .await
            }
            DatabaseLocation::InMemory => Ok(repository),
        }
    }

    /// Starts polling for commits made by other connections to the same
    /// database, notifying subscribers when one is seen.
    ///
    /// The baseline is read before returning, so any commit after this call
    /// is reported. Must be called inside a tokio runtime.
    ///
    /// # Errors
    /// Returns `FavoritesError::Storage` if the data version cannot be read.
    pub async fn watch_external_writes(mut self, every: Duration) -> Result<Self, FavoritesError> {
        let baseline = data_version(&self.db).await.map_err(storage_error)?;
        if let Some(previous) = self.poller.take() {
            previous.abort();
        }
        self.poller = Some(tokio::spawn(poll_external_writes(
            self.db.clone(),
            self.changes.clone(),
            baseline,
            every,
        )));
        Ok(self)
    }

    fn notify(&self) {
        bump(&self.changes);
    }
}

impl Drop for SeaOrmFavoritesRepository {
    fn drop(&mut self) {
        if let Some(poller) = self.poller.take() {
            poller.abort();
        }
    }
}

fn bump(changes: &watch::Sender<u64>) {
    changes.send_modify(|version| *version = version.wrapping_add(1));
}

/// Reads SQLite's per-connection data version. It changes only when another
/// connection commits.
async fn data_version(db: &DatabaseConnection) -> Result<i64, DbErr> {
    let statement = Statement::from_string(db.get_database_backend(), "PRAGMA data_version");
    let row = db
        .query_one(statement)
        .await?
        .ok_or_else(|| DbErr::Custom("PRAGMA data_version returned no row".to_string()))?;
    row.try_get_by_index(0)
}

async fn poll_external_writes(
    db: DatabaseConnection,
    changes: watch::Sender<u64>,
    mut seen: i64,
    every: Duration,
) {
    let mut ticker = tokio::time::interval(every);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    // The first tick fires at once; the baseline is already known.
    ticker.tick().await;

    loop {
        ticker.tick().await;
        match data_version(&db).await {
            Ok(version) if version != seen => {
                debug!(version, "favorites changed by another connection");
                seen = version;
                bump(&changes);
            }
            Ok(_) => {}
            Err(error) => warn!(%error, "cannot read favorites data version"),
        }
    }
}

fn storage_error(error: DbErr) -> FavoritesError {
    FavoritesError::Storage(error.to_string())
}

fn to_domain(model: favorite_games::Model) -> Result<FavoriteGame, FavoritesError> {
    let added_at = DateTime::from_timestamp_millis(model.added_at).ok_or_else(|| {
        FavoritesError::Corrupted(format!(
            "favorite {} has out-of-range added_at {}",
            model.id, model.added_at
        ))
    })?;

    Ok(FavoriteGame {
        id: model.id,
        name: model.name,
        background_image: model.background_image,
        rating: model.rating,
        metacritic: model.metacritic,
        released: model.released,
        added_at,
    })
}

fn to_active_model(favorite: &FavoriteGame) -> favorite_games::ActiveModel {
    favorite_games::ActiveModel {
        id: Set(favorite.id),
        name: Set(favorite.name.clone()),
        background_image: Set(favorite.background_image.clone()),
        rating: Set(favorite.rating),
        metacritic: Set(favorite.metacritic),
        released: Set(favorite.released.clone()),
        added_at: Set(favorite.added_at.timestamp_millis()),
    }
}

#[async_trait]
impl FavoritesRepository for SeaOrmFavoritesRepository {
    async fn list(&self, order: SortOrder) -> Result<Vec<FavoriteGame>, FavoritesError> {
        let query = FavoriteGames::find();
        let query = match order {
            SortOrder::NewestFirst => query
                .order_by_desc(Column::AddedAt)
                .order_by_desc(Column::Id),
            SortOrder::OldestFirst => query
                .order_by_asc(Column::AddedAt)
                .order_by_asc(Column::Id),
        };

        let rows = query.all(&self.db).await.map_err(storage_error)?;
        rows.into_iter().map(to_domain).collect()
    }

    async fn is_favorite(&self, id: GameId) -> Result<bool, FavoritesError> {
        let row = FavoriteGames::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(storage_error)?;
        Ok(row.is_some())
    }

    async fn add(&self, favorite: &FavoriteGame) -> Result<(), FavoritesError> {
        FavoriteGames::insert(to_active_model(favorite))
            .on_conflict(
                OnConflict::column(Column::Id)
                    .update_columns([
                        Column::Name,
                        Column::BackgroundImage,
                        Column::Rating,
                        Column::Metacritic,
                        Column::Released,
                        Column::AddedAt,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .map_err(storage_error)?;

        debug!(id = favorite.id, "favorite stored");
        self.notify();
        Ok(())
    }

    async fn remove(&self, id: GameId) -> Result<(), FavoritesError> {
        let result = FavoriteGames::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(storage_error)?;

        if result.rows_affected > 0 {
            debug!(id, "favorite removed");
            self.notify();
        }
        Ok(())
    }

    fn subscribe(&self) -> watch::Receiver<u64> {
        self.changes.subscribe()
    }
}
