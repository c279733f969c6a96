//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use hoops_stats::{
    cli::{Commands, Hoops},
    commands::{
        search::{handle_search, SearchParams},
        stats::handle_stats,
    },
    core::ClientConfig,
    observability::init_tracing,
    Result,
};

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    let app = Hoops::parse();
    init_tracing(app.verbose);

    let config = ClientConfig::new(&app.base_url)?;

    match app.command {
        Commands::Search { name, filter, json } => {
            handle_search(
                &config,
                SearchParams {
                    name,
                    filter,
                    as_json: json,
                },
            )
            .await?
        }

        Commands::Stats { player_id, json } => handle_stats(&config, player_id, json).await?,
    }

    Ok(())
}
