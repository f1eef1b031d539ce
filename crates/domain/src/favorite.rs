//! Favorite games and their listing order.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::game::{Game, GameId, parse_release_year};

/// A game the user marked as favorite, snapshotted at favorite time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoriteGame {
    /// Catalog identifier, unique among favorites.
    pub id: GameId,
    /// Title.
    pub name: String,
    /// Background image URL.
    pub background_image: Option<String>,
    /// Average user rating at favorite time.
    pub rating: f64,
    /// Metacritic score at favorite time.
    pub metacritic: Option<i32>,
    /// Release date as sent by the catalog.
    pub released: Option<String>,
    /// When the game was marked as favorite.
    pub added_at: DateTime<Utc>,
}

impl FavoriteGame {
    /// Snapshots a catalog game as a favorite added at `added_at`.
    #[must_use]
    pub fn from_game(game: &Game, added_at: DateTime<Utc>) -> Self {
        Self {
            id: game.id,
            name: game.name.clone(),
            background_image: game.image_url.clone(),
            rating: game.rating,
            metacritic: game.metacritic,
            released: game.release_date.clone(),
            added_at,
        }
    }

    /// Year of release, or `None` when the stored date is absent or malformed.
    #[must_use]
    pub fn release_year(&self) -> Option<i32> {
        parse_release_year(self.released.as_deref())
    }
}

/// Order in which favorites are listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    /// Most recently added first.
    #[default]
    NewestFirst,
    /// Earliest added first.
    OldestFirst,
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NewestFirst => write!(f, "newest-first"),
            Self::OldestFirst => write!(f, "oldest-first"),
        }
    }
}

impl FromStr for SortOrder {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "newest" | "newest-first" => Ok(Self::NewestFirst),
            "oldest" | "oldest-first" => Ok(Self::OldestFirst),
            other => Err(DomainError::InvalidQuery(format!(
                "unknown sort order '{other}'"
            ))),
        }
    }
}
