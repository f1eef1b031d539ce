//! Application use cases (business logic orchestration).

pub mod catalog;
pub mod favorites;

pub use catalog::{BrowseGames, GetGameDetail};
pub use favorites::{AddFavorite, CheckFavorite, ListFavorites, RemoveFavorite};
