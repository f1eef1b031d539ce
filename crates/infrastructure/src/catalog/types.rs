//! Catalog API response types
//!
//! These types mirror the JSON the catalog sends. Every optional field uses
//! `#[serde(default)]` so that sparse records still deserialize.

#![allow(missing_docs)]

use serde::{Deserialize, Serialize};

/// Response of `GET /games`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameListResponseDto {
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    #[serde(default)]
    pub results: Vec<GameDto>,
}

/// A game entry as listed by the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameDto {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub background_image: Option<String>,
    #[serde(default)]
    pub released: Option<String>,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub ratings_count: Option<u32>,
    #[serde(default)]
    pub metacritic: Option<i32>,
    /// To-be-announced flag. Absent means false.
    #[serde(default)]
    pub tba: Option<bool>,
    /// Number of users that added the game to a library.
    #[serde(default)]
    pub added: Option<u32>,
    #[serde(default)]
    pub platforms: Option<Vec<PlatformEntryDto>>,
}

/// Wrapper the catalog puts around each platform.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformEntryDto {
    pub platform: PlatformDto,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformDto {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub slug: String,
}

/// Response of `GET /games/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameDetailDto {
    #[serde(flatten)]
    pub game: GameDto,
    /// HTML description.
    #[serde(default)]
    pub description: Option<String>,
    /// Plain-text description, preferred when present.
    #[serde(default)]
    pub description_raw: Option<String>,
    #[serde(default)]
    pub developers: Vec<CompanyDto>,
    #[serde(default)]
    pub publishers: Vec<CompanyDto>,
    #[serde(default)]
    pub genres: Vec<GenreDto>,
    #[serde(default)]
    pub tags: Vec<TagDto>,
    #[serde(default)]
    pub short_screenshots: Vec<ScreenshotDto>,
    #[serde(default)]
    pub esrb_rating: Option<EsrbRatingDto>,
    #[serde(default)]
    pub playtime: Option<u32>,
    #[serde(default)]
    pub website: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenreDto {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub slug: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagDto {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub language: Option<String>,
}

/// Developer or publisher.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyDto {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub slug: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreenshotDto {
    pub id: i64,
    #[serde(default)]
    pub image: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EsrbRatingDto {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub slug: String,
}
