//! Game detail model
//!
//! Assembled from a catalog detail response. Never persisted.

use serde::{Deserialize, Serialize};

use crate::game::Game;

/// A genre label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    /// Catalog identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// URL slug.
    pub slug: String,
}

/// A user-contributed tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// Catalog identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// URL slug.
    pub slug: String,
    /// Language code of the tag, e.g. "eng".
    pub language: Option<String>,
}

/// A developer or publisher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    /// Catalog identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// URL slug.
    pub slug: String,
}

/// A screenshot reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Screenshot {
    /// Catalog identifier.
    pub id: i64,
    /// Image URL.
    pub image_url: String,
}

/// ESRB content rating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EsrbRating {
    /// Catalog identifier.
    pub id: i64,
    /// Display name, e.g. "Mature".
    pub name: String,
    /// URL slug.
    pub slug: String,
}

/// Full description of a single game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameDetail {
    /// List-level fields shared with [`Game`].
    pub game: Game,
    /// Plain-text description.
    pub description: String,
    /// Studios that developed the game.
    pub developers: Vec<Company>,
    /// Companies that published the game.
    pub publishers: Vec<Company>,
    /// Genres, in catalog order.
    pub genres: Vec<Genre>,
    /// Tags, in catalog order.
    pub tags: Vec<Tag>,
    /// Screenshots, in catalog order.
    pub screenshots: Vec<Screenshot>,
    /// ESRB rating, if classified.
    pub esrb_rating: Option<EsrbRating>,
    /// Average playtime in hours.
    pub playtime: u32,
    /// Official website.
    pub website: Option<String>,
}

impl GameDetail {
    /// Year of release of the underlying game.
    #[must_use]
    pub fn release_year(&self) -> Option<i32> {
        self.game.release_year()
    }

    /// Popularity of the underlying game.
    #[must_use]
    pub fn is_popular(&self) -> bool {
        self.game.is_popular()
    }
}
