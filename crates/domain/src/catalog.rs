//! Catalog queries and result pages.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::game::Game;

/// Largest page the catalog API serves.
pub const MAX_PAGE_SIZE: u32 = 40;

/// Page size used when none is configured.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Ordering used when none is given: most added first.
pub const DEFAULT_ORDERING: &str = "-added";

/// Parameters of a paginated game list request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameListQuery {
    /// One-based page number.
    pub page: u32,
    /// Number of games per page.
    pub page_size: u32,
    /// Free-text search.
    pub search: Option<String>,
    /// Release date range, e.g. `2020-01-01,2020-12-31`.
    pub dates: Option<String>,
    /// Catalog ordering field, optionally prefixed with `-` for descending.
    pub ordering: String,
}

impl Default for GameListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            search: None,
            dates: None,
            ordering: DEFAULT_ORDERING.to_string(),
        }
    }
}

impl GameListQuery {
    /// Creates a query for the first page with default ordering.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page number.
    #[must_use]
    pub const fn with_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Sets the page size.
    #[must_use]
    pub const fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Sets the search text. Blank text clears the search.
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        let search = search.into();
        self.search = (!search.trim().is_empty()).then_some(search);
        self
    }

    /// Sets the release date range. Blank text clears the filter.
    #[must_use]
    pub fn with_dates(mut self, dates: impl Into<String>) -> Self {
        let dates = dates.into();
        self.dates = (!dates.trim().is_empty()).then_some(dates);
        self
    }

    /// Sets the ordering field.
    #[must_use]
    pub fn with_ordering(mut self, ordering: impl Into<String>) -> Self {
        self.ordering = ordering.into();
        self
    }

    /// Checks the query against the limits the catalog accepts.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidQuery` for a zero page, a page size
    /// outside `1..=40`, or a blank ordering.
    pub fn validate(&self) -> DomainResult<()> {
        if self.page == 0 {
            return Err(DomainError::InvalidQuery(
                "page numbers start at 1".to_string(),
            ));
        }
        if self.page_size == 0 || self.page_size > MAX_PAGE_SIZE {
            return Err(DomainError::InvalidQuery(format!(
                "page size must be between 1 and {MAX_PAGE_SIZE}, got {}",
                self.page_size
            )));
        }
        if self.ordering.trim().is_empty() {
            return Err(DomainError::InvalidQuery(
                "ordering must not be blank".to_string(),
            ));
        }
        Ok(())
    }
}

/// One page of catalog results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GamePage {
    /// Total number of games matching the query.
    pub count: u64,
    /// Number of the next page, if any.
    pub next_page: Option<u32>,
    /// Number of the previous page, if any.
    pub previous_page: Option<u32>,
    /// Games on this page, in catalog order.
    pub games: Vec<Game>,
}

impl GamePage {
    /// Whether another page follows this one.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.next_page.is_some()
    }
}
