//! List favorites use case

use std::sync::Arc;

use ludex_domain::{FavoriteGame, SortOrder};

use crate::live::{LiveQuery, live_favorites};
use crate::ports::FavoritesRepository;

/// Follows the list of favorite games.
pub struct ListFavorites<R: ?Sized> {
    repository: Arc<R>,
}

impl<R: FavoritesRepository + ?Sized + 'static> ListFavorites<R> {
    /// Creates a new `ListFavorites` use case.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Executes the use case.
    ///
    /// # Arguments
    /// * `order` - Whether the most recently added favorites come first or last
    #[must_use]
    pub fn execute(&self, order: SortOrder) -> LiveQuery<Vec<FavoriteGame>> {
        live_favorites(Arc::clone(&self.repository), order)
    }
}
