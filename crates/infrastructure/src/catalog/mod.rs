//! Catalog wire format
//!
//! Types mirroring the catalog's JSON responses and the conversions that turn
//! them into domain models.

pub mod mapper;
pub mod types;

pub use mapper::page_number;
pub use types::{GameDetailDto, GameDto, GameListResponseDto};
