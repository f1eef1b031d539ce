//! Catalog game model
//!
//! A `Game` is the list-level view of a catalog entry. The two derived
//! properties, release year and popularity, are computed on demand and never
//! stored.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Identifier of a game in the remote catalog.
pub type GameId = i64;

/// Number of library additions at which a game counts as popular.
pub const POPULARITY_THRESHOLD: u32 = 10_000;

/// A platform a game was released on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Platform {
    /// Catalog identifier.
    pub id: i64,
    /// Display name, e.g. "PlayStation 5".
    pub name: String,
    /// URL slug.
    pub slug: String,
}

/// A game as listed by the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    /// Catalog identifier.
    pub id: GameId,
    /// Title.
    pub name: String,
    /// Background image URL.
    pub image_url: Option<String>,
    /// Release date as sent by the catalog, normally `YYYY-MM-DD`.
    pub release_date: Option<String>,
    /// Average user rating.
    pub rating: f64,
    /// Number of user ratings.
    pub ratings_count: Option<u32>,
    /// Metacritic score.
    pub metacritic: Option<i32>,
    /// Whether the release date is still to be announced.
    pub is_tba: bool,
    /// How many users added the game to their library.
    pub added_count: Option<u32>,
    /// Platforms, when the catalog reports them.
    pub platforms: Option<Vec<Platform>>,
}

impl Game {
    /// Creates a game with only the required fields set.
    #[must_use]
    pub fn new(id: GameId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            image_url: None,
            release_date: None,
            rating: 0.0,
            ratings_count: None,
            metacritic: None,
            is_tba: false,
            added_count: None,
            platforms: None,
        }
    }

    /// Year of release, or `None` when the date is absent or malformed.
    #[must_use]
    pub fn release_year(&self) -> Option<i32> {
        parse_release_year(self.release_date.as_deref())
    }

    /// Whether enough users added the game to call it popular.
    #[must_use]
    pub fn is_popular(&self) -> bool {
        self.added_count
            .is_some_and(|count| count >= POPULARITY_THRESHOLD)
    }
}

/// Checks that a catalog id can name a game.
///
/// # Errors
///
/// Returns `DomainError::InvalidIdentifier` if the id is not positive.
pub fn validate_game_id(id: GameId) -> DomainResult<()> {
    if id <= 0 {
        return Err(DomainError::InvalidIdentifier(format!(
            "game id must be positive, got {id}"
        )));
    }
    Ok(())
}

/// Parses the year out of a strict `YYYY-MM-DD` date.
///
/// Partial dates, other separators, non-digit characters and dates that do
/// not exist on the calendar all yield `None`.
#[must_use]
pub fn parse_release_year(date: Option<&str>) -> Option<i32> {
    let date = date?;
    let bytes = date.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }
    let digits_only = bytes
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != 4 && *i != 7)
        .all(|(_, b)| b.is_ascii_digit());
    if !digits_only {
        return None;
    }

    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .ok()
        .map(|parsed| parsed.year())
}
