//! Live queries over the favorites store.
//!
//! A [`LiveQuery`] pairs a change receiver from
//! [`FavoritesRepository::subscribe`] with a query it re-runs after every
//! change. The first call to [`LiveQuery::next`] answers immediately with the
//! current state. Every subscriber owns its own `LiveQuery`, so slow readers
//! never hold back others; a reader that falls behind several writes sees
//! only the latest snapshot.
//!
//! A [`distinct`](LiveQuery::distinct) query re-runs on every change but only
//! yields results that differ from the last one it yielded.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use tokio::sync::watch;

use ludex_domain::{FavoriteGame, GameId, SortOrder};

use crate::ports::{FavoritesError, FavoritesRepository};

type QueryFuture<T> = Pin<Box<dyn Future<Output = Result<T, FavoritesError>> + Send>>;
type Query<T> = Box<dyn Fn() -> QueryFuture<T> + Send + Sync>;

/// A query that yields a fresh result after each store change.
pub struct LiveQuery<T> {
    changes: watch::Receiver<u64>,
    query: Query<T>,
    primed: bool,
    distinct: bool,
    last: Option<T>,
}

impl<T: PartialEq + Clone> LiveQuery<T> {
    /// Creates a live query that runs `query` now and after every change
    /// signalled on `changes`.
    pub fn new<F, Fut>(changes: watch::Receiver<u64>, query: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T, FavoritesError>> + Send + 'static,
    {
        Self {
            changes,
            query: Box::new(move || Box::pin(query())),
            primed: false,
            distinct: false,
            last: None,
        }
    }

    /// Skips results equal to the previously yielded one.
    ///
    /// Errors are always yielded and do not reset the remembered value.
    #[must_use]
    pub const fn distinct(mut self) -> Self {
        self.distinct = true;
        self
    }

    /// Waits for the next snapshot.
    ///
    /// Returns `None` once the store closes its change feed.
    pub async fn next(&mut self) -> Option<Result<T, FavoritesError>> {
        loop {
            if self.primed {
                self.changes.changed().await.ok()?;
            } else {
                // Changes made before this point are covered by the first run.
                let _version = *self.changes.borrow_and_update();
                self.primed = true;
            }

            let result = (self.query)().await;
            if self.distinct
                && let Ok(value) = &result
            {
                if self.last.as_ref() == Some(value) {
                    continue;
                }
                self.last = Some(value.clone());
            }
            return Some(result);
        }
    }
}

/// Follows the list of favorites in the given order.
pub fn live_favorites<R>(repository: Arc<R>, order: SortOrder) -> LiveQuery<Vec<FavoriteGame>>
where
    R: FavoritesRepository + ?Sized + 'static,
{
    let changes = repository.subscribe();
    LiveQuery::new(changes, move || {
        let repository = Arc::clone(&repository);
        async move { repository.list(order).await }
    })
}

/// Follows whether a single game is a favorite.
///
/// Yields only when the answer flips, so writes to other games stay silent.
pub fn live_is_favorite<R>(repository: Arc<R>, id: GameId) -> LiveQuery<bool>
where
    R: FavoritesRepository + ?Sized + 'static,
{
    let changes = repository.subscribe();
    LiveQuery::new(changes, move || {
        let repository = Arc::clone(&repository);
        async move { repository.is_favorite(id).await }
    })
    .distinct()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::test_support::{InMemoryFavorites, favorite_at};
    use std::time::Duration;

    #[tokio::test]
    async fn first_snapshot_is_immediate() {
        let repo = Arc::new(InMemoryFavorites::new());
        repo.add(&favorite_at(1, "Celeste", 10)).await.unwrap();

        let mut live = live_favorites(Arc::clone(&repo), SortOrder::NewestFirst);
        let snapshot = live.next().await.unwrap().unwrap();

        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].name, "Celeste");
    }

    #[tokio::test]
    async fn emits_after_each_write() {
        let repo = Arc::new(InMemoryFavorites::new());
        let mut live = live_favorites(Arc::clone(&repo), SortOrder::OldestFirst);
        assert!(live.next().await.unwrap().unwrap().is_empty());

        repo.add(&favorite_at(1, "Hades", 10)).await.unwrap();
        let ids: Vec<_> = live.next().await.unwrap().unwrap().iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![1]);

        repo.add(&favorite_at(2, "Outer Wilds", 20)).await.unwrap();
        let ids: Vec<_> = live.next().await.unwrap().unwrap().iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![1, 2]);

        repo.remove(1).await.unwrap();
        let ids: Vec<_> = live.next().await.unwrap().unwrap().iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[tokio::test]
    async fn waits_while_nothing_changes() {
        let repo = Arc::new(InMemoryFavorites::new());
        let mut live = live_is_favorite(Arc::clone(&repo), 7);
        assert!(!live.next().await.unwrap().unwrap());

        let pending = tokio::time::timeout(Duration::from_millis(50), live.next()).await;
        assert!(pending.is_err(), "no write happened, nothing should be emitted");
    }

    #[tokio::test]
    async fn subscribers_are_independent() {
        let repo = Arc::new(InMemoryFavorites::new());
        let mut first = live_is_favorite(Arc::clone(&repo), 3);
        let mut second = live_is_favorite(Arc::clone(&repo), 3);

        assert!(!first.next().await.unwrap().unwrap());
        repo.add(&favorite_at(3, "Tunic", 5)).await.unwrap();

        assert!(first.next().await.unwrap().unwrap());
        // The second subscriber never read; its first answer is already current.
        assert!(second.next().await.unwrap().unwrap());
    }

    #[tokio::test]
    async fn is_favorite_stays_quiet_on_other_ids() {
        let repo = Arc::new(InMemoryFavorites::new());
        let mut live = live_is_favorite(Arc::clone(&repo), 5);
        assert!(!live.next().await.unwrap().unwrap());

        repo.add(&favorite_at(6, "Neighbour", 0)).await.unwrap();
        repo.remove(6).await.unwrap();
        let pending = tokio::time::timeout(Duration::from_millis(50), live.next()).await;
        assert!(pending.is_err(), "writes to other ids must not emit");

        repo.add(&favorite_at(5, "Target", 0)).await.unwrap();
        assert!(live.next().await.unwrap().unwrap());
    }

    #[tokio::test]
    async fn list_emits_even_when_unchanged() {
        let repo = Arc::new(InMemoryFavorites::new());
        let stored = favorite_at(1, "Same", 0);
        repo.add(&stored).await.unwrap();
        let mut live = live_favorites(Arc::clone(&repo), SortOrder::NewestFirst);
        let first = live.next().await.unwrap().unwrap();

        repo.add(&stored).await.unwrap();

        assert_eq!(live.next().await.unwrap().unwrap(), first);
    }

    #[tokio::test]
    async fn ends_when_change_feed_closes() {
        let repo = Arc::new(InMemoryFavorites::new());
        let mut live = live_is_favorite(Arc::clone(&repo) as Arc<dyn FavoritesRepository>, 1);
        assert!(!live.next().await.unwrap().unwrap());

        repo.close();
        assert!(live.next().await.is_none());
    }
}
