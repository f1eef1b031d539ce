//! Add favorite use case

use std::sync::Arc;

use ludex_domain::FavoriteGame;

use crate::ports::{FavoritesError, FavoritesRepository};

/// Marks a game as favorite.
pub struct AddFavorite<R: ?Sized> {
    repository: Arc<R>,
}

impl<R: FavoritesRepository + ?Sized> AddFavorite<R> {
    /// Creates a new `AddFavorite` use case.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Executes the use case.
    ///
    /// A favorite with the same id is replaced.
    ///
    /// # Errors
    /// Returns an error if the favorite cannot be stored.
    pub async fn execute(&self, favorite: &FavoriteGame) -> Result<(), FavoritesError> {
        self.repository.add(favorite).await
    }
}
