//! In-memory port implementations shared by the unit tests.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use tokio::sync::watch;

use ludex_domain::{FavoriteGame, Game, GameDetail, GameId, GameListQuery, GamePage, SortOrder};

use crate::ports::{CatalogError, FavoritesError, FavoritesRepository, GameCatalog};

/// Builds a favorite added `seconds` after a fixed epoch.
pub fn favorite_at(id: GameId, name: &str, seconds: i64) -> FavoriteGame {
    FavoriteGame {
        id,
        name: name.to_string(),
        background_image: None,
        rating: 4.0,
        metacritic: None,
        released: None,
        added_at: at(seconds),
    }
}

pub fn at(seconds: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(1_700_000_000 + seconds, 0).unwrap()
}

pub struct InMemoryFavorites {
    rows: Mutex<HashMap<GameId, FavoriteGame>>,
    changes: Mutex<Option<watch::Sender<u64>>>,
}

impl InMemoryFavorites {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(0);
        Self {
            rows: Mutex::new(HashMap::new()),
            changes: Mutex::new(Some(tx)),
        }
    }

    pub fn get(&self, id: GameId) -> Option<FavoriteGame> {
        self.rows.lock().expect("Lock poisoned").get(&id).cloned()
    }

    pub fn count(&self) -> usize {
        self.rows.lock().expect("Lock poisoned").len()
    }

    /// Drops the change sender, ending every live query.
    pub fn close(&self) {
        self.changes.lock().expect("Lock poisoned").take();
    }

    fn notify(&self) {
        if let Some(tx) = self.changes.lock().expect("Lock poisoned").as_ref() {
            tx.send_modify(|version| *version += 1);
        }
    }
}

#[async_trait]
impl FavoritesRepository for InMemoryFavorites {
    async fn list(&self, order: SortOrder) -> Result<Vec<FavoriteGame>, FavoritesError> {
        let mut rows: Vec<FavoriteGame> = self
            .rows
            .lock()
            .expect("Lock poisoned")
            .values()
            .cloned()
            .collect();
        rows.sort_by_key(|f| (f.added_at, f.id));
        if order == SortOrder::NewestFirst {
            rows.reverse();
        }
        Ok(rows)
    }

    async fn is_favorite(&self, id: GameId) -> Result<bool, FavoritesError> {
        Ok(self.rows.lock().expect("Lock poisoned").contains_key(&id))
    }

    async fn add(&self, favorite: &FavoriteGame) -> Result<(), FavoritesError> {
        self.rows
            .lock()
            .expect("Lock poisoned")
            .insert(favorite.id, favorite.clone());
        self.notify();
        Ok(())
    }

    async fn remove(&self, id: GameId) -> Result<(), FavoritesError> {
        let removed = self.rows.lock().expect("Lock poisoned").remove(&id);
        if removed.is_some() {
            self.notify();
        }
        Ok(())
    }

    fn subscribe(&self) -> watch::Receiver<u64> {
        match self.changes.lock().expect("Lock poisoned").as_ref() {
            Some(tx) => tx.subscribe(),
            None => watch::channel(0).1,
        }
    }
}

/// Catalog stub serving a fixed set of games and counting calls.
pub struct StubCatalog {
    pub games: Vec<Game>,
    pub calls: Mutex<Vec<String>>,
}

impl StubCatalog {
    pub fn new(games: Vec<Game>) -> Self {
        Self {
            games,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("Lock poisoned").clone()
    }
}

#[async_trait]
impl GameCatalog for StubCatalog {
    async fn list_games(&self, query: &GameListQuery) -> Result<GamePage, CatalogError> {
        self.calls
            .lock()
            .expect("Lock poisoned")
            .push(format!("list page={}", query.page));
        Ok(GamePage {
            count: self.games.len() as u64,
            next_page: None,
            previous_page: None,
            games: self.games.clone(),
        })
    }

    async fn game_detail(&self, id: GameId) -> Result<GameDetail, CatalogError> {
        self.calls
            .lock()
            .expect("Lock poisoned")
            .push(format!("detail {id}"));
        let game = self
            .games
            .iter()
            .find(|g| g.id == id)
            .cloned()
            .ok_or_else(|| CatalogError::Status {
                status: 404,
                body: "Not found.".to_string(),
            })?;
        Ok(GameDetail {
            game,
            description: String::new(),
            developers: Vec::new(),
            publishers: Vec::new(),
            genres: Vec::new(),
            tags: Vec::new(),
            screenshots: Vec::new(),
            esrb_rating: None,
            playtime: 0,
            website: None,
        })
    }
}
