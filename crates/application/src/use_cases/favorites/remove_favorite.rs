//! Remove favorite use case

use std::sync::Arc;

use ludex_domain::GameId;

use crate::ports::{FavoritesError, FavoritesRepository};

/// Unmarks a favorite game.
pub struct RemoveFavorite<R: ?Sized> {
    repository: Arc<R>,
}

impl<R: FavoritesRepository + ?Sized> RemoveFavorite<R> {
    /// Creates a new `RemoveFavorite` use case.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Executes the use case. Unknown ids are ignored.
    ///
    /// # Errors
    /// Returns an error if the store cannot be written.
    pub async fn execute(&self, id: GameId) -> Result<(), FavoritesError> {
        self.repository.remove(id).await
    }
}
