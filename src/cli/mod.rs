//! CLI argument definitions and parsing.

pub mod types;

use crate::core::BDL_BASE_URL;
use clap::{Parser, Subcommand};
use types::ids::PlayerId;

#[derive(Debug, Parser)]
#[clap(name = "hoops-stats", about = "NBA player search and season averages")]
pub struct Hoops {
    /// API root to query.
    #[clap(long, global = true, default_value = BDL_BASE_URL)]
    pub base_url: String,

    /// Log request details to stderr (`RUST_LOG` overrides).
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Search players by name.
    ///
    /// Queries `/players?per_page=100&search=<NAME>` and lists players that
    /// still have a position (retired players usually don't).
    Search {
        /// Name to search for (at least 2 characters).
        name: String,

        /// Only show players whose full name contains this text (case-insensitive).
        #[clap(long, short)]
        filter: Option<String>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Show season averages for a player.
    Stats {
        /// balldontlie player ID (see `search` output with --json).
        player_id: PlayerId,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}
