//! Ludex - game catalog browser with local favorites
//!
//! # Commands
//!
//! - `ludex browse` - List a page of games from the catalog
//! - `ludex show <ID>` - Show the details of one game
//! - `ludex favorite <ID>` - Save a game to the local favorites
//! - `ludex unfavorite <ID>` - Remove a game from the favorites
//! - `ludex is-favorite <ID>` - Print whether a game is a favorite
//! - `ludex favorites` - List the favorites, optionally following changes
//! - `ludex configure` - Show or update the settings file
//!
//! Settings are read from `<config dir>/ludex/settings.json` and can be
//! overridden with `LUDEX_API_URL`, `LUDEX_API_KEY`, `LUDEX_PAGE_SIZE` and
//! `LUDEX_DATABASE`. Log output is controlled with `RUST_LOG`.

mod commands;
mod context;
mod render;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use ludex_domain::{GameId, SortOrder};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::context::AppContext;
use crate::render::Output;

/// Ludex - game catalog browser with local favorites
#[derive(Parser)]
#[command(name = "ludex")]
#[command(about = "Browse a video game catalog and keep local favorites")]
#[command(version)]
struct Cli {
    /// Favorites database file (overrides settings and `LUDEX_DATABASE`)
    #[arg(long, global = true)]
    database: Option<PathBuf>,

    /// Settings file to read instead of the default location
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Library(LibraryCommand),

    /// Show the settings file, updating any values given
    Configure(commands::ConfigureArgs),
}

/// Commands that need the catalog client and the favorites store.
#[derive(Subcommand)]
enum LibraryCommand {
    /// List a page of games from the catalog
    Browse(commands::BrowseArgs),

    /// Show the details of one game
    Show {
        /// Catalog id of the game
        id: GameId,
    },

    /// Fetch a game and save it to the favorites
    Favorite {
        /// Catalog id of the game
        id: GameId,
    },

    /// Remove a game from the favorites
    Unfavorite {
        /// Catalog id of the game
        id: GameId,
    },

    /// Print whether a game is in the favorites
    IsFavorite {
        /// Catalog id of the game
        id: GameId,
    },

    /// List the favorites
    Favorites {
        /// Sort order: newest or oldest
        #[arg(long, default_value_t = SortOrder::NewestFirst)]
        sort: SortOrder,

        /// Keep running and print the list again after every change,
        /// including changes made by other ludex processes
        #[arg(long)]
        watch: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let output = if cli.json { Output::Json } else { Output::Text };

    match cli.command {
        Commands::Configure(args) => {
            commands::configure(cli.settings.as_deref(), output, args).await
        }
        Commands::Library(command) => {
            let ctx = AppContext::load(cli.settings.as_deref(), cli.database).await?;
            run(&ctx, output, command).await
        }
    }
}

async fn run(
    ctx: &AppContext,
    output: Output,
    command: LibraryCommand,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        LibraryCommand::Browse(args) => commands::browse(ctx, output, args).await,
        LibraryCommand::Show { id } => commands::show(ctx, output, id).await,
        LibraryCommand::Favorite { id } => commands::favorite(ctx, output, id).await,
        LibraryCommand::Unfavorite { id } => commands::unfavorite(ctx, output, id).await,
        LibraryCommand::IsFavorite { id } => commands::is_favorite(ctx, output, id).await,
        LibraryCommand::Favorites { sort, watch } => {
            commands::favorites(ctx, output, sort, watch).await
        }
    }
}
