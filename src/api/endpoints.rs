//! URL builders for the two balldontlie endpoints we call.

use crate::cli::types::ids::PlayerId;
use url::{ParseError, Url};

/// Page size requested from `/players`; the list view never pages further.
pub const PLAYERS_PER_PAGE: u32 = 100;

/// `{base}players?per_page=100&search=<text>`.
///
/// An empty `search` leaves the parameter out entirely.
pub fn players_url(base: &Url, search: &str) -> Result<Url, ParseError> {
    let mut url = base.join("players")?;
    {
        let mut query = url.query_pairs_mut();
        query.append_pair("per_page", &PLAYERS_PER_PAGE.to_string());
        if !search.is_empty() {
            query.append_pair("search", search);
        }
    }
    Ok(url)
}

/// `{base}season_averages?player_ids%5B%5D=<id>`.
pub fn season_averages_url(base: &Url, player_id: PlayerId) -> Result<Url, ParseError> {
    let mut url = base.join("season_averages")?;
    url.query_pairs_mut()
        .append_pair("player_ids[]", &player_id.to_string());
    Ok(url)
}
