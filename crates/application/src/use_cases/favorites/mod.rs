//! Favorites use cases
//!
//! Thin façades over [`FavoritesRepository`](crate::ports::FavoritesRepository)
//! that keep presentation code away from the store.

mod add_favorite;
mod check_favorite;
mod list_favorites;
mod remove_favorite;

pub use add_favorite::AddFavorite;
pub use check_favorite::CheckFavorite;
pub use list_favorites::ListFavorites;
pub use remove_favorite::RemoveFavorite;
