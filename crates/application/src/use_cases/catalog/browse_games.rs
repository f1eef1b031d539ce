//! Browse games use case

use ludex_domain::{GameListQuery, GamePage};

use crate::ApplicationResult;
use crate::ports::GameCatalog;

/// Fetches one page of the remote catalog.
pub struct BrowseGames<C> {
    catalog: C,
}

impl<C: GameCatalog> BrowseGames<C> {
    /// Creates a new `BrowseGames` use case.
    #[must_use]
    pub const fn new(catalog: C) -> Self {
        Self { catalog }
    }

    /// Executes the use case.
    ///
    /// # Errors
    /// Returns `ApplicationError::Domain` for an invalid query, without
    /// contacting the catalog, and `ApplicationError::Catalog` when the
    /// request fails.
    pub async fn execute(&self, query: &GameListQuery) -> ApplicationResult<GamePage> {
        query.validate()?;
        Ok(self.catalog.list_games(query).await?)
    }
}
