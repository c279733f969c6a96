//! NBA player search and season averages client
//!
//! A small Rust library (and CLI) over the public balldontlie API: search
//! players by name, list the active ones, and show a player's per-game
//! season averages.
//!
//! ## Layout
//!
//! - [`api`]: the [`ApiClient`](api::ApiClient) fetch-and-decode capability,
//!   its reqwest implementation, endpoint URL builders and wire types
//! - [`viewmodel`]: presentation state for the search and detail screens
//! - [`commands`]: terminal front-end driving the view models
//! - [`core`]: configuration and stat formatting
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use hoops_stats::{core::ClientConfig, viewmodel::PlayerDetailViewModel, PlayerId};
//!
//! # async fn example() -> hoops_stats::Result<()> {
//! let config = ClientConfig::default();
//! let mut detail = PlayerDetailViewModel::with_http(PlayerId::new(237), &config)?;
//! detail.fetch_stats();
//! detail.process_next().await;
//! println!("{} Season Stats", detail.season());
//! println!("{}", detail.points());
//! # Ok(())
//! # }
//! ```
//!
//! ## Logging
//!
//! Everything logs through `tracing`. The binary installs a stderr
//! subscriber; set `RUST_LOG=hoops_stats=debug` to see request timings.

pub mod api;
pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod observability;
pub mod viewmodel;

// Re-export commonly used types
pub use api::types::{Player, SeasonStats, Team};
pub use cli::types::ids::PlayerId;
pub use error::{ApiError, HoopsError, Result};
