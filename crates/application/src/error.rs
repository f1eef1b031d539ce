//! Application error types

use ludex_domain::DomainError;
use thiserror::Error;

use crate::ports::{CatalogError, FavoritesError};

/// Application-level errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// A domain validation error occurred.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// The remote catalog could not serve the request.
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// The favorites store failed.
    #[error("favorites error: {0}")]
    Favorites(#[from] FavoritesError),
}

/// Result type alias for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
