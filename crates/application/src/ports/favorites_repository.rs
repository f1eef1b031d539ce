//! Favorites repository port
//!
//! Defines the interface for the local favorites store.

use async_trait::async_trait;
use tokio::sync::watch;

use ludex_domain::{FavoriteGame, GameId, SortOrder};

/// Errors that can occur during favorites operations.
#[derive(Debug, thiserror::Error)]
pub enum FavoritesError {
    /// The underlying store failed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// A stored row could not be turned back into a favorite.
    #[error("Corrupted favorite: {0}")]
    Corrupted(String),
}

/// Repository trait for favorite games.
///
/// Reads are snapshots; callers that want to follow changes combine them with
/// [`FavoritesRepository::subscribe`], see [`crate::live`].
#[async_trait]
pub trait FavoritesRepository: Send + Sync {
    /// Lists all favorites in the given order.
    ///
    /// The store does the ordering: by time added, with the id breaking ties
    /// in the same direction.
    async fn list(&self, order: SortOrder) -> Result<Vec<FavoriteGame>, FavoritesError>;

    /// Checks whether a game is a favorite.
    async fn is_favorite(&self, id: GameId) -> Result<bool, FavoritesError>;

    /// Inserts a favorite, replacing any existing one with the same id.
    ///
    /// # Errors
    /// Returns `FavoritesError::Storage` if the write fails.
    async fn add(&self, favorite: &FavoriteGame) -> Result<(), FavoritesError>;

    /// Removes a favorite. Removing an id that is not stored is a no-op.
    ///
    /// # Errors
    /// Returns `FavoritesError::Storage` if the write fails.
    async fn remove(&self, id: GameId) -> Result<(), FavoritesError>;

    /// Returns a receiver whose value changes after every write that touched
    /// the store.
    fn subscribe(&self) -> watch::Receiver<u64>;
}
