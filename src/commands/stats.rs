//! `stats` command: drive the detail screen view model from the terminal.

use crate::{
    api::ApiClient,
    core::ClientConfig,
    viewmodel::{DetailUpdate, PlayerDetailViewModel},
    HoopsError, PlayerId, Result,
};

/// Handle the stats command
pub async fn handle_stats(config: &ClientConfig, player_id: PlayerId, as_json: bool) -> Result<()> {
    let mut view_model = PlayerDetailViewModel::with_http(player_id, config)?;
    for line in stats_lines(&mut view_model, as_json).await? {
        println!("{}", line); // tarpaulin::skip
    }
    Ok(())
}

/// Fetch season averages and render the stats section.
///
/// An empty result still renders (as the zeroed "Current" season), matching
/// what the detail screen shows.
pub async fn stats_lines<C: ApiClient>(
    view_model: &mut PlayerDetailViewModel<C>,
    as_json: bool,
) -> Result<Vec<String>> {
    view_model.fetch_stats();
    match view_model.process_next().await {
        Some(DetailUpdate::StatsLoaded) | Some(DetailUpdate::NoStats) => {}
        Some(DetailUpdate::FetchFailed) | None => {
            return Err(HoopsError::FetchFailed {
                resource: "season averages",
            })
        }
    }

    if as_json {
        return Ok(vec![serde_json::to_string_pretty(view_model.stats())?]);
    }

    let mut lines = vec![format!("{} Season Stats", view_model.season())];
    lines.extend(view_model.stat_lines());
    Ok(lines)
}
