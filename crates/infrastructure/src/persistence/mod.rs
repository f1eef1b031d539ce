//! Persistence implementations: the SQLite favorites store and the JSON
//! settings file.

mod database;
pub mod favorite_games;
mod favorites_repository;
mod settings_repository;

pub use database::{DatabaseLocation, connect};
pub use favorites_repository::SeaOrmFavoritesRepository;
pub use settings_repository::{SettingsError, SettingsRepository};
