//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the application core and external systems.
//! Each port is a trait that can be implemented by adapters in the infrastructure layer.

mod clock;
mod favorites_repository;
mod game_catalog;

pub use clock::Clock;
pub use favorites_repository::{FavoritesError, FavoritesRepository};
pub use game_catalog::{CatalogError, GameCatalog};
