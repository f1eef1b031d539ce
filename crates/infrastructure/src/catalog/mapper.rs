//! Catalog to domain mapping
//!
//! Conversions are total: missing values fall back to defaults and list
//! fields keep their order.

use ludex_domain::{
    Company, EsrbRating, Game, GameDetail, GamePage, Genre, Platform, Screenshot, Tag,
};
use url::Url;

use super::types::{
    CompanyDto, EsrbRatingDto, GameDetailDto, GameDto, GameListResponseDto, GenreDto,
    PlatformEntryDto, ScreenshotDto, TagDto,
};

impl From<GameDto> for Game {
    fn from(dto: GameDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            image_url: dto.background_image,
            release_date: dto.released,
            rating: dto.rating,
            ratings_count: dto.ratings_count,
            metacritic: dto.metacritic,
            is_tba: dto.tba.unwrap_or(false),
            added_count: dto.added,
            platforms: dto
                .platforms
                .map(|entries| entries.into_iter().map(Platform::from).collect()),
        }
    }
}

impl From<PlatformEntryDto> for Platform {
    fn from(entry: PlatformEntryDto) -> Self {
        Self {
            id: entry.platform.id,
            name: entry.platform.name,
            slug: entry.platform.slug,
        }
    }
}

impl From<GenreDto> for Genre {
    fn from(dto: GenreDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            slug: dto.slug,
        }
    }
}

impl From<TagDto> for Tag {
    fn from(dto: TagDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            slug: dto.slug,
            language: dto.language,
        }
    }
}

impl From<CompanyDto> for Company {
    fn from(dto: CompanyDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            slug: dto.slug,
        }
    }
}

impl From<ScreenshotDto> for Screenshot {
    fn from(dto: ScreenshotDto) -> Self {
        Self {
            id: dto.id,
            image_url: dto.image,
        }
    }
}

impl From<EsrbRatingDto> for EsrbRating {
    fn from(dto: EsrbRatingDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            slug: dto.slug,
        }
    }
}

impl From<GameDetailDto> for GameDetail {
    fn from(dto: GameDetailDto) -> Self {
        Self {
            game: Game::from(dto.game),
            description: dto.description_raw.or(dto.description).unwrap_or_default(),
            developers: map_all(dto.developers),
            publishers: map_all(dto.publishers),
            genres: map_all(dto.genres),
            tags: map_all(dto.tags),
            screenshots: map_all(dto.short_screenshots),
            esrb_rating: dto.esrb_rating.map(EsrbRating::from),
            playtime: dto.playtime.unwrap_or(0),
            website: dto.website.filter(|site| !site.trim().is_empty()),
        }
    }
}

impl From<GameListResponseDto> for GamePage {
    fn from(dto: GameListResponseDto) -> Self {
        Self {
            count: dto.count,
            next_page: page_number(dto.next.as_deref()),
            previous_page: page_number(dto.previous.as_deref()),
            games: map_all(dto.results),
        }
    }
}

fn map_all<D, T: From<D>>(items: Vec<D>) -> Vec<T> {
    items.into_iter().map(T::from).collect()
}

/// Extracts the page number from a pagination link.
///
/// The catalog leaves out `page` on links to the first page, so a valid link
/// without it means page 1. Unparseable links yield `None`.
#[must_use]
pub fn page_number(link: Option<&str>) -> Option<u32> {
    let url = Url::parse(link?).ok()?;
    let page = url
        .query_pairs()
        .find(|(key, _)| key == "page")
        .map(|(_, value)| value.into_owned());

    match page {
        Some(value) => value.parse().ok(),
        None => Some(1),
    }
}
