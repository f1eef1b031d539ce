//! Get game detail use case

use ludex_domain::{GameDetail, GameId, validate_game_id};

use crate::ApplicationResult;
use crate::ports::GameCatalog;

/// Fetches the full description of one game.
pub struct GetGameDetail<C> {
    catalog: C,
}

impl<C: GameCatalog> GetGameDetail<C> {
    /// Creates a new `GetGameDetail` use case.
    #[must_use]
    pub const fn new(catalog: C) -> Self {
        Self { catalog }
    }

    /// Executes the use case.
    ///
    /// # Errors
    /// Returns an error for a non-positive id or when the catalog request fails.
    pub async fn execute(&self, id: GameId) -> ApplicationResult<GameDetail> {
        validate_game_id(id)?;
        Ok(self.catalog.game_detail(id).await?)
    }
}
