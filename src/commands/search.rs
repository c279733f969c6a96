//! `search` command: drive the search screen view model from the terminal.

use crate::{
    api::ApiClient,
    core::ClientConfig,
    viewmodel::{ListUpdate, PlayerListViewModel},
    HoopsError, Result,
};

/// Parameters for the search command
#[derive(Debug, Clone)]
pub struct SearchParams {
    pub name: String,
    pub filter: Option<String>,
    pub as_json: bool,
}

/// Handle the search command
pub async fn handle_search(config: &ClientConfig, params: SearchParams) -> Result<()> {
    let mut view_model = PlayerListViewModel::with_http(config)?;
    for line in search_lines(&mut view_model, &params).await? {
        println!("{}", line); // tarpaulin::skip
    }
    Ok(())
}

/// Type the name, wait for the validity gate, search, and render the rows.
pub async fn search_lines<C: ApiClient>(
    view_model: &mut PlayerListViewModel<C>,
    params: &SearchParams,
) -> Result<Vec<String>> {
    view_model.update_search_text(params.name.as_str());
    wait_for_validity(view_model).await;

    if !view_model.search_button_enabled() {
        return Err(HoopsError::InvalidSearch {
            message: view_model.validity_message().to_string(),
        });
    }

    view_model.trigger_search();
    loop {
        match view_model.process_next().await {
            Some(ListUpdate::PlayersLoaded { .. }) => break,
            Some(ListUpdate::FetchFailed) | None => {
                return Err(HoopsError::FetchFailed { resource: "players" })
            }
            Some(_) => continue,
        }
    }

    let visible = view_model.visible_players(params.filter.as_deref().unwrap_or(""));
    if params.as_json {
        return Ok(vec![serde_json::to_string_pretty(&visible)?]);
    }

    if visible.is_empty() {
        let message = view_model.validity_message();
        return Ok(if message.is_empty() {
            Vec::new()
        } else {
            vec![message.to_string()]
        });
    }

    Ok(visible.iter().map(|player| player.info_text()).collect())
}

async fn wait_for_validity<C: ApiClient>(view_model: &mut PlayerListViewModel<C>) {
    while let Some(update) = view_model.process_next().await {
        if matches!(update, ListUpdate::Validity { .. } | ListUpdate::Unchanged) {
            break;
        }
    }
}
