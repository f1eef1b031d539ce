//! Game catalog port

use async_trait::async_trait;

use ludex_domain::{GameDetail, GameId, GameListQuery, GamePage};

/// Errors returned by a catalog adapter.
///
/// Every call yields one response or one of these; adapters do not retry.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The request URL could not be built.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The request did not complete in time.
    #[error("Request timed out after {timeout_secs}s")]
    Timeout {
        /// Configured timeout.
        timeout_secs: u64,
    },

    /// The catalog host could not be reached.
    #[error("Connection failed: {0}")]
    Connection(String),

    /// The catalog answered with a non-success status.
    #[error("Catalog returned HTTP {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, possibly truncated.
        body: String,
    },

    /// The response body did not match the expected format.
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// Any other transport failure.
    #[error("{0}")]
    Other(String),
}

/// Port for reading the remote game catalog.
#[async_trait]
pub trait GameCatalog: Send + Sync {
    /// Fetches one page of games.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be decoded.
    async fn list_games(&self, query: &GameListQuery) -> Result<GamePage, CatalogError>;

    /// Fetches the full description of a single game.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Status` with 404 when the game does not exist.
    async fn game_detail(&self, id: GameId) -> Result<GameDetail, CatalogError>;
}
