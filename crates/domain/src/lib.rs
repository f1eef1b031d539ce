//! Ludex Domain - Core business types
//!
//! This crate defines the domain model for the Ludex game catalog.
//! All types here are pure Rust with no I/O dependencies.

pub mod catalog;
pub mod detail;
pub mod error;
pub mod favorite;
pub mod game;
pub mod settings;

pub use catalog::{DEFAULT_ORDERING, DEFAULT_PAGE_SIZE, GameListQuery, GamePage, MAX_PAGE_SIZE};
pub use detail::{Company, EsrbRating, GameDetail, Genre, Screenshot, Tag};
pub use error::{DomainError, DomainResult};
pub use favorite::{FavoriteGame, SortOrder};
pub use game::{
    Game, GameId, POPULARITY_THRESHOLD, Platform, parse_release_year, validate_game_id,
};
pub use settings::ClientSettings;
