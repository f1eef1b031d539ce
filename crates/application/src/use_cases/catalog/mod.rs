//! Catalog use cases

mod browse_games;
mod get_game_detail;

pub use browse_games::BrowseGames;
pub use get_game_detail::GetGameDetail;
