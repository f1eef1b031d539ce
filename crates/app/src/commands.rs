//! Command handlers.
//!
//! Each handler resolves its dependencies from the [`AppContext`] and hands
//! off to a function that takes the store and an output writer directly.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::Args;
use ludex_application::{
    AddFavorite, BrowseGames, CheckFavorite, Clock, FavoritesRepository, GetGameDetail,
    ListFavorites, RemoveFavorite,
};
use ludex_domain::{DEFAULT_ORDERING, FavoriteGame, Game, GameId, GameListQuery, SortOrder};
use tracing::info;

use crate::context::{AppContext, settings_repository};
use crate::render::{self, Output};

type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// Arguments for `ludex browse`.
#[derive(Args)]
pub struct BrowseArgs {
    /// Page number, starting at 1
    #[arg(long, default_value_t = 1)]
    page: u32,

    /// Games per page (defaults to the configured page size)
    #[arg(long)]
    page_size: Option<u32>,

    /// Free-text search
    #[arg(long)]
    search: Option<String>,

    /// Release date range, e.g. 2019-01-01,2019-12-31
    #[arg(long)]
    dates: Option<String>,

    /// Catalog ordering, e.g. -rating or name
    #[arg(long, default_value = DEFAULT_ORDERING)]
    ordering: String,
}

impl BrowseArgs {
    fn into_query(self, default_page_size: u32) -> GameListQuery {
        let mut query = GameListQuery::new()
            .with_page(self.page)
            .with_page_size(self.page_size.unwrap_or(default_page_size))
            .with_ordering(self.ordering);
        if let Some(search) = self.search {
            query = query.with_search(search);
        }
        if let Some(dates) = self.dates {
            query = query.with_dates(dates);
        }
        query
    }
}

/// Arguments for `ludex configure`.
#[derive(Args, Default)]
pub struct ConfigureArgs {
    /// Catalog base URL
    #[arg(long)]
    api_url: Option<String>,

    /// Catalog API key
    #[arg(long)]
    api_key: Option<String>,

    /// Default games per page
    #[arg(long)]
    page_size: Option<u32>,

    /// Request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Favorites database file
    #[arg(long)]
    database_file: Option<PathBuf>,
}

impl ConfigureArgs {
    const fn is_empty(&self) -> bool {
        self.api_url.is_none()
            && self.api_key.is_none()
            && self.page_size.is_none()
            && self.timeout.is_none()
            && self.database_file.is_none()
    }
}

pub async fn browse(ctx: &AppContext, output: Output, args: BrowseArgs) -> CommandResult {
    let query = args.into_query(ctx.settings.page_size);
    let page = BrowseGames::new(ctx.catalog.clone()).execute(&query).await?;
    output.write(&mut io::stdout(), &page, |page| {
        render::game_page(page, query.page)
    })
}

pub async fn show(ctx: &AppContext, output: Output, id: GameId) -> CommandResult {
    let detail = GetGameDetail::new(ctx.catalog.clone()).execute(id).await?;
    output.write(&mut io::stdout(), &detail, render::game_detail)
}

pub async fn favorite(ctx: &AppContext, output: Output, id: GameId) -> CommandResult {
    let detail = GetGameDetail::new(ctx.catalog.clone()).execute(id).await?;
    store_favorite(
        Arc::clone(&ctx.favorites),
        ctx.clock.as_ref(),
        &detail.game,
        output,
        &mut io::stdout(),
    )
    .await
}

pub async fn unfavorite(ctx: &AppContext, output: Output, id: GameId) -> CommandResult {
    remove_favorite(Arc::clone(&ctx.favorites), id, output, &mut io::stdout()).await
}

pub async fn is_favorite(ctx: &AppContext, output: Output, id: GameId) -> CommandResult {
    check_favorite(Arc::clone(&ctx.favorites), id, output, &mut io::stdout()).await
}

pub async fn favorites(
    ctx: &AppContext,
    output: Output,
    order: SortOrder,
    watch: bool,
) -> CommandResult {
    follow_favorites(
        Arc::clone(&ctx.favorites),
        order,
        watch,
        output,
        &mut io::stdout(),
    )
    .await
}

/// Updates the settings file with the given values and prints the result.
///
/// Reads and writes the file only; environment overrides are not applied.
pub async fn configure(
    settings_path: Option<&Path>,
    output: Output,
    args: ConfigureArgs,
) -> CommandResult {
    apply_configuration(settings_path, args, output, &mut io::stdout()).await
}

async fn store_favorite<R, W>(
    favorites: Arc<R>,
    clock: &dyn Clock,
    game: &Game,
    output: Output,
    out: &mut W,
) -> CommandResult
where
    R: FavoritesRepository + ?Sized,
    W: Write,
{
    let favorite = FavoriteGame::from_game(game, clock.now());
    AddFavorite::new(favorites).execute(&favorite).await?;

    info!(id = favorite.id, "added to favorites");
    output.write(out, &favorite, render::favorite_line)
}

async fn remove_favorite<R, W>(
    favorites: Arc<R>,
    id: GameId,
    output: Output,
    out: &mut W,
) -> CommandResult
where
    R: FavoritesRepository + ?Sized,
    W: Write,
{
    RemoveFavorite::new(favorites).execute(id).await?;
    output.write(out, &id, |id| format!("{id} removed from favorites"))
}

async fn check_favorite<R, W>(
    favorites: Arc<R>,
    id: GameId,
    output: Output,
    out: &mut W,
) -> CommandResult
where
    R: FavoritesRepository + ?Sized + 'static,
    W: Write,
{
    let mut live = CheckFavorite::new(favorites).execute(id);
    if let Some(state) = live.next().await {
        output.write(out, &state?, bool::to_string)?;
    }
    Ok(())
}

async fn follow_favorites<R, W>(
    favorites: Arc<R>,
    order: SortOrder,
    watch: bool,
    output: Output,
    out: &mut W,
) -> CommandResult
where
    R: FavoritesRepository + ?Sized + 'static,
    W: Write,
{
    let mut live = ListFavorites::new(favorites).execute(order);

    while let Some(snapshot) = live.next().await {
        output.write(out, &snapshot?, |list| render::favorites(list))?;
        if !watch {
            break;
        }
        if output == Output::Text {
            writeln!(out, "---")?;
        }
    }
    Ok(())
}

async fn apply_configuration<W: Write>(
    settings_path: Option<&Path>,
    args: ConfigureArgs,
    output: Output,
    out: &mut W,
) -> CommandResult {
    let repository = settings_repository(settings_path);
    let mut settings = repository.load().await?;

    if !args.is_empty() {
        if let Some(url) = args.api_url {
            settings.api_base_url = url;
        }
        if let Some(key) = args.api_key {
            settings.api_key = (!key.trim().is_empty()).then_some(key);
        }
        if let Some(page_size) = args.page_size {
            settings.page_size = page_size;
        }
        if let Some(timeout) = args.timeout {
            settings.request_timeout_secs = timeout;
        }
        if let Some(path) = args.database_file {
            settings.database_file = Some(path);
        }
        repository.save(&settings).await?;
        info!(path = ?repository.path(), "settings saved");
    }

    output.write(out, &settings, render::settings)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};
    use ludex_domain::ClientSettings;
    use ludex_infrastructure::{DatabaseLocation, SeaOrmFavoritesRepository, SettingsRepository};
    use pretty_assertions::assert_eq;
    use std::time::Duration;
    use tempfile::tempdir;

    struct FixedClock(DateTime<Utc>);

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }

    fn clock() -> FixedClock {
        FixedClock(Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap())
    }

    fn game(id: GameId, name: &str) -> Game {
        Game {
            release_date: Some("2020-09-17".to_string()),
            rating: 4.4,
            ..Game::new(id, name)
        }
    }

    async fn open(path: &Path) -> Arc<SeaOrmFavoritesRepository> {
        Arc::new(
            SeaOrmFavoritesRepository::open(&DatabaseLocation::File(path.to_path_buf()))
                .await
                .expect("Should open favorites database"),
        )
    }

    fn text(out: Vec<u8>) -> String {
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn browse_args_fall_back_to_configured_page_size() {
        let args = BrowseArgs {
            page: 2,
            page_size: None,
            search: Some("portal".to_string()),
            dates: Some("  ".to_string()),
            ordering: "-rating".to_string(),
        };

        let query = args.into_query(25);

        assert_eq!(
            query,
            GameListQuery {
                page: 2,
                page_size: 25,
                search: Some("portal".to_string()),
                dates: None,
                ordering: "-rating".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn store_favorite_stamps_with_the_clock() {
        let dir = tempdir().unwrap();
        let store = open(&dir.path().join("favorites.db")).await;
        let mut out = Vec::new();

        store_favorite(store.clone(), &clock(), &game(3, "Hades"), Output::Text, &mut out)
            .await
            .unwrap();

        let stored = store.list(SortOrder::NewestFirst).await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].added_at, clock().now());
        assert_eq!(
            text(out),
            "       3  Hades  (2020)  rating 4.40  added 2024-03-01 09:00:00\n"
        );
    }

    #[tokio::test]
    async fn check_and_remove_report_membership() {
        let dir = tempdir().unwrap();
        let store = open(&dir.path().join("favorites.db")).await;
        store_favorite(store.clone(), &clock(), &game(8, "Celeste"), Output::Json, &mut Vec::new())
            .await
            .unwrap();

        let mut before = Vec::new();
        check_favorite(store.clone(), 8, Output::Text, &mut before).await.unwrap();
        let mut removed = Vec::new();
        remove_favorite(store.clone(), 8, Output::Text, &mut removed).await.unwrap();
        let mut after = Vec::new();
        check_favorite(store, 8, Output::Json, &mut after).await.unwrap();

        assert_eq!(text(before), "true\n");
        assert_eq!(text(removed), "8 removed from favorites\n");
        assert_eq!(text(after), "false\n");
    }

    #[tokio::test]
    async fn favorites_without_watch_prints_once() {
        let dir = tempdir().unwrap();
        let store = open(&dir.path().join("favorites.db")).await;
        let mut out = Vec::new();

        follow_favorites(store, SortOrder::NewestFirst, false, Output::Text, &mut out)
            .await
            .unwrap();

        assert_eq!(text(out), "no favorites yet\n");
    }

    #[tokio::test]
    async fn watch_picks_up_writes_from_another_process() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("favorites.db");
        let watcher = open(&path).await;
        let writer = open(&path).await;
        let mut out = Vec::new();

        let follow = tokio::time::timeout(
            Duration::from_secs(3),
            follow_favorites(watcher, SortOrder::NewestFirst, true, Output::Text, &mut out),
        );
        let write = async {
            tokio::time::sleep(Duration::from_millis(100)).await;
            store_favorite(writer, &clock(), &game(5, "Tunic"), Output::Text, &mut Vec::new())
                .await
                .unwrap();
        };
        let (followed, ()) = tokio::join!(follow, write);

        assert!(followed.is_err(), "watching only stops when interrupted");
        let printed = text(out);
        let snapshots: Vec<_> = printed.split("---\n").collect();
        assert_eq!(snapshots[0], "no favorites yet\n");
        assert!(snapshots[1].contains("Tunic"), "missing second snapshot: {printed}");
    }

    #[tokio::test]
    async fn configure_saves_only_given_values() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let args = ConfigureArgs {
            api_key: Some("abc".to_string()),
            page_size: Some(30),
            ..ConfigureArgs::default()
        };

        apply_configuration(Some(&path), args, Output::Text, &mut Vec::new())
            .await
            .unwrap();

        let saved = SettingsRepository::with_path(&path).load().await.unwrap();
        assert_eq!(
            saved,
            ClientSettings {
                api_key: Some("abc".to_string()),
                page_size: 30,
                ..ClientSettings::default()
            }
        );
    }

    #[tokio::test]
    async fn configure_without_values_does_not_write() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let mut out = Vec::new();

        apply_configuration(Some(&path), ConfigureArgs::default(), Output::Text, &mut out)
            .await
            .unwrap();

        assert!(!path.exists());
        assert!(text(out).contains("page_size: 20"));
    }
}
