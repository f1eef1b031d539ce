//! Terminal output: text views and JSON.

use std::fmt::Write as _;
use std::io;

use ludex_domain::{ClientSettings, FavoriteGame, Game, GameDetail, GamePage};
use ludex_infrastructure::to_json_stable;
use serde::Serialize;

const UNKNOWN: &str = "unknown";

/// How command results are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    /// Human-readable lines.
    Text,
    /// Pretty JSON of the underlying value.
    Json,
}

impl Output {
    /// Writes `value` to `out`, using `text` to format it in text mode.
    pub fn write<W, T, F>(
        self,
        out: &mut W,
        value: &T,
        text: F,
    ) -> Result<(), Box<dyn std::error::Error>>
    where
        W: io::Write,
        T: Serialize,
        F: FnOnce(&T) -> String,
    {
        match self {
            Self::Text => writeln!(out, "{}", text(value).trim_end())?,
            Self::Json => out.write_all(to_json_stable(value)?.as_bytes())?,
        }
        out.flush()?;
        Ok(())
    }
}

fn year_label(year: Option<i32>) -> String {
    year.map_or_else(|| UNKNOWN.to_string(), |y| y.to_string())
}

fn metacritic_label(score: Option<i32>) -> String {
    score.map_or_else(|| "-".to_string(), |s| s.to_string())
}

/// One catalog row: id, name, year, rating and the popular marker.
pub fn game_line(game: &Game) -> String {
    let mut line = format!(
        "{:>8}  {}  ({})  rating {:.2}  metacritic {}",
        game.id,
        game.name,
        year_label(game.release_year()),
        game.rating,
        metacritic_label(game.metacritic),
    );
    if game.is_tba {
        line.push_str("  [TBA]");
    }
    if game.is_popular() {
        line.push_str("  [popular]");
    }
    line
}

/// A page of catalog results with its navigation footer.
pub fn game_page(page: &GamePage, current: u32) -> String {
    let mut out = String::new();
    for game in &page.games {
        let _ = writeln!(out, "{}", game_line(game));
    }
    let _ = write!(out, "page {current}, {} games in total", page.count);
    if let Some(previous) = page.previous_page {
        let _ = write!(out, ", previous: {previous}");
    }
    if let Some(next) = page.next_page {
        let _ = write!(out, ", next: {next}");
    }
    out
}

fn names<'a>(items: impl IntoIterator<Item = &'a str>) -> String {
    let joined = items.into_iter().collect::<Vec<_>>().join(", ");
    if joined.is_empty() { "-".to_string() } else { joined }
}

/// Full detail view.
pub fn game_detail(detail: &GameDetail) -> String {
    let game = &detail.game;
    let mut out = String::new();

    let _ = writeln!(out, "{} (#{})", game.name, game.id);
    let _ = writeln!(out, "Released:   {}", year_label(detail.release_year()));
    let _ = writeln!(out, "Rating:     {:.2}", game.rating);
    let _ = writeln!(out, "Metacritic: {}", metacritic_label(game.metacritic));
    let _ = writeln!(out, "Popular:    {}", if detail.is_popular() { "yes" } else { "no" });
    let _ = writeln!(out, "Playtime:   {}h", detail.playtime);
    if let Some(platforms) = &game.platforms {
        let _ = writeln!(
            out,
            "Platforms:  {}",
            names(platforms.iter().map(|p| p.name.as_str()))
        );
    }
    let _ = writeln!(
        out,
        "Genres:     {}",
        names(detail.genres.iter().map(|g| g.name.as_str()))
    );
    let _ = writeln!(
        out,
        "Developers: {}",
        names(detail.developers.iter().map(|c| c.name.as_str()))
    );
    let _ = writeln!(
        out,
        "Publishers: {}",
        names(detail.publishers.iter().map(|c| c.name.as_str()))
    );
    if let Some(esrb) = &detail.esrb_rating {
        let _ = writeln!(out, "ESRB:       {}", esrb.name);
    }
    if let Some(website) = &detail.website {
        let _ = writeln!(out, "Website:    {website}");
    }
    if !detail.description.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", detail.description.trim());
    }
    out
}

/// One favorites row including when it was added.
pub fn favorite_line(favorite: &FavoriteGame) -> String {
    format!(
        "{:>8}  {}  ({})  rating {:.2}  added {}",
        favorite.id,
        favorite.name,
        year_label(favorite.release_year()),
        favorite.rating,
        favorite.added_at.format("%Y-%m-%d %H:%M:%S"),
    )
}

/// Effective settings, one per line.
pub fn settings(settings: &ClientSettings) -> String {
    let database = settings
        .database_file
        .as_ref()
        .map_or_else(|| "(default)".to_string(), |p| p.display().to_string());
    format!(
        "api_base_url: {}\napi_key: {}\npage_size: {}\nrequest_timeout_secs: {}\ndatabase_file: {database}",
        settings.api_base_url,
        if settings.api_key.is_some() { "(set)" } else { "(none)" },
        settings.page_size,
        settings.request_timeout_secs,
    )
}

/// The favorites list, or a placeholder when it is empty.
pub fn favorites(list: &[FavoriteGame]) -> String {
    if list.is_empty() {
        return "no favorites yet".to_string();
    }
    list.iter().map(favorite_line).collect::<Vec<_>>().join("\n")
}
