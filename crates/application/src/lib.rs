//! Ludex Application - Use cases and ports
//!
//! This crate defines the application layer with:
//! - Port traits (interfaces for external dependencies)
//! - Live queries over the favorites store
//! - Use case orchestration
//! - Application-level error handling

pub mod error;
pub mod live;
pub mod ports;
pub mod use_cases;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::{ApplicationError, ApplicationResult};
pub use live::{LiveQuery, live_favorites, live_is_favorite};
pub use ports::{CatalogError, Clock, FavoritesError, FavoritesRepository, GameCatalog};
pub use use_cases::{
    AddFavorite, BrowseGames, CheckFavorite, GetGameDetail, ListFavorites, RemoveFavorite,
};
