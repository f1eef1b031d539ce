//! Client Settings Domain Model
//!
//! Defines where the catalog lives and how the client talks to it.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::catalog::DEFAULT_PAGE_SIZE;

/// Settings for the catalog client and the favorites store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientSettings {
    /// Base URL of the catalog API, without trailing slash.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// API key sent as the `key` query parameter.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Games per page when browsing.
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Per-request timeout in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Favorites database file. `None` means the platform data directory.
    #[serde(default)]
    pub database_file: Option<PathBuf>,
}

fn default_api_base_url() -> String {
    "https://api.rawg.io/api".to_string()
}

const fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

const fn default_request_timeout_secs() -> u64 {
    30
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            api_key: None,
            page_size: default_page_size(),
            request_timeout_secs: default_request_timeout_secs(),
            database_file: None,
        }
    }
}
