//! Ludex Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer.

pub mod adapters;
pub mod catalog;
pub mod config;
pub mod persistence;
pub mod serialization;

pub use adapters::{ReqwestGameCatalog, SystemClock};
pub use config::{apply_env_overrides, apply_process_env};
pub use persistence::{
    DatabaseLocation, SeaOrmFavoritesRepository, SettingsError, SettingsRepository,
};
pub use serialization::{SerializationError, from_json_bytes, to_json_stable, to_json_stable_bytes};
