//! Check favorite use case

use std::sync::Arc;

use ludex_domain::GameId;

use crate::live::{LiveQuery, live_is_favorite};
use crate::ports::FavoritesRepository;

/// Follows whether a game is marked as favorite.
pub struct CheckFavorite<R: ?Sized> {
    repository: Arc<R>,
}

impl<R: FavoritesRepository + ?Sized + 'static> CheckFavorite<R> {
    /// Creates a new `CheckFavorite` use case.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Executes the use case.
    ///
    /// The returned query answers immediately and again after every write.
    #[must_use]
    pub fn execute(&self, id: GameId) -> LiveQuery<bool> {
        live_is_favorite(Arc::clone(&self.repository), id)
    }
}
