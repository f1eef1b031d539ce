//! Game catalog implementation using reqwest.
//!
//! This adapter implements the `GameCatalog` port against the catalog's REST
//! API. Each call issues exactly one request; failures are returned as they
//! happen, without retries.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use ludex_application::ports::{CatalogError, GameCatalog};
use ludex_domain::{ClientSettings, GameDetail, GameId, GameListQuery, GamePage};

use crate::catalog::{GameDetailDto, GameListResponseDto};

/// Longest slice of an error body kept in `CatalogError::Status`.
const MAX_ERROR_BODY: usize = 512;

/// Catalog client using reqwest.
///
/// Cloning is cheap: the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct ReqwestGameCatalog {
    client: Client,
    base_url: Url,
    api_key: Option<String>,
    timeout_secs: u64,
}

impl ReqwestGameCatalog {
    /// Creates a client from the configured base URL, key and timeout.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::InvalidUrl` if the base URL does not parse, or
    /// `CatalogError::Other` if the HTTP client cannot be built.
    pub fn new(settings: &ClientSettings) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .user_agent(concat!("Ludex/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .build()
            .map_err(|e| CatalogError::Other(e.to_string()))?;

        Self::with_client(client, settings)
    }

    /// Creates a catalog client around an existing reqwest client.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::InvalidUrl` if the base URL does not parse.
    pub fn with_client(client: Client, settings: &ClientSettings) -> Result<Self, CatalogError> {
        let base_url = Url::parse(&settings.api_base_url)
            .map_err(|e| CatalogError::InvalidUrl(format!("{e}: {}", settings.api_base_url)))?;

        Ok(Self {
            client,
            base_url,
            api_key: settings.api_key.clone(),
            timeout_secs: settings.request_timeout_secs,
        })
    }

    /// Builds the URL of a game list request.
    ///
    /// Optional filters are left out entirely when absent.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::InvalidUrl` if the base URL cannot take a path.
    pub fn games_url(&self, query: &GameListQuery) -> Result<Url, CatalogError> {
        let mut url = self.endpoint(&["games"])?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs
                .append_pair("page", &query.page.to_string())
                .append_pair("page_size", &query.page_size.to_string());
            if let Some(search) = &query.search {
                pairs.append_pair("search", search);
            }
            if let Some(dates) = &query.dates {
                pairs.append_pair("dates", dates);
            }
            pairs.append_pair("ordering", &query.ordering);
            if let Some(key) = &self.api_key {
                pairs.append_pair("key", key);
            }
        }
        Ok(url)
    }

    /// Builds the URL of a game detail request.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::InvalidUrl` if the base URL cannot take a path.
    pub fn game_detail_url(&self, id: GameId) -> Result<Url, CatalogError> {
        let mut url = self.endpoint(&["games", &id.to_string()])?;
        if let Some(key) = &self.api_key {
            url.query_pairs_mut().append_pair("key", key);
        }
        Ok(url)
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, CatalogError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| CatalogError::InvalidUrl(format!("cannot be a base: {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, CatalogError> {
        let path = url.path().to_string();
        debug!(%path, "catalog request");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Self::map_error(&e, self.timeout_secs))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| Self::map_error(&e, self.timeout_secs))?;

        if !status.is_success() {
            warn!(%path, status = status.as_u16(), "catalog request failed");
            let text: String = String::from_utf8_lossy(&body)
                .chars()
                .take(MAX_ERROR_BODY)
                .collect();
            return Err(CatalogError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        serde_json::from_slice(&body).map_err(|e| CatalogError::Decode(e.to_string()))
    }

    /// Maps reqwest errors to `CatalogError`.
    fn map_error(error: &reqwest::Error, timeout_secs: u64) -> CatalogError {
        if error.is_timeout() {
            return CatalogError::Timeout { timeout_secs };
        }
        if error.is_connect() {
            return CatalogError::Connection(error.to_string());
        }
        if error.is_decode() {
            return CatalogError::Decode(error.to_string());
        }
        CatalogError::Other(error.to_string())
    }
}

#[async_trait]
impl GameCatalog for ReqwestGameCatalog {
    async fn list_games(&self, query: &GameListQuery) -> Result<GamePage, CatalogError> {
        let url = self.games_url(query)?;
        let dto: GameListResponseDto = self.get_json(url).await?;
        debug!(results = dto.results.len(), count = dto.count, "catalog page received");
        Ok(GamePage::from(dto))
    }

    async fn game_detail(&self, id: GameId) -> Result<GameDetail, CatalogError> {
        let url = self.game_detail_url(id)?;
        let dto: GameDetailDto = self.get_json(url).await?;
        Ok(GameDetail::from(dto))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    fn catalog(base: &str, key: Option<&str>) -> ReqwestGameCatalog {
        let settings = ClientSettings {
            api_base_url: base.to_string(),
            api_key: key.map(str::to_string),
            ..ClientSettings::default()
        };
        ReqwestGameCatalog::new(&settings).expect("Should build client")
    }

    #[test]
    fn test_games_url_with_all_parameters() {
        let client = catalog("https://api.rawg.io/api", Some("secret"));
        let query = GameListQuery::new()
            .with_page(2)
            .with_page_size(10)
            .with_search("hollow knight")
            .with_dates("2017-01-01,2017-12-31")
            .with_ordering("-rating");

        let url = client.games_url(&query).unwrap();

        assert_eq!(url.path(), "/api/games");
        assert_eq!(
            url.query(),
            Some(
                "page=2&page_size=10&search=hollow+knight&dates=2017-01-01%2C2017-12-31\
                 &ordering=-rating&key=secret"
            )
        );
    }

    #[test]
    fn test_games_url_omits_absent_parameters() {
        let client = catalog("https://api.rawg.io/api/", None);

        let url = client.games_url(&GameListQuery::new()).unwrap();

        assert_eq!(
            url.as_str(),
            "https://api.rawg.io/api/games?page=1&page_size=20&ordering=-added"
        );
    }

    #[test]
    fn test_game_detail_url() {
        let client = catalog("https://api.rawg.io/api", Some("k"));

        let url = client.game_detail_url(3328).unwrap();

        assert_eq!(url.as_str(), "https://api.rawg.io/api/games/3328?key=k");
    }

    #[test]
    fn test_invalid_base_url() {
        let settings = ClientSettings {
            api_base_url: "not a url".to_string(),
            ..ClientSettings::default()
        };

        assert!(matches!(
            ReqwestGameCatalog::new(&settings),
            Err(CatalogError::InvalidUrl(_))
        ));
    }

    #[tokio::test]
    async fn test_connection_failure_is_reported() {
        // Port 9 on localhost is the discard service; nothing listens there in CI.
        let client = catalog("http://127.0.0.1:9/api", None);

        let result = client.list_games(&GameListQuery::new()).await;

        assert!(result.is_err());
    }
}
