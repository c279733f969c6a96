//! Detail screen state: one player's season averages plus the stat lines
//! rendered from them.

use std::sync::Arc;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, error, warn};
use url::{ParseError, Url};

use crate::{
    api::{endpoints::season_averages_url, ApiClient, HttpService, SeasonStats, SeasonStatsResult},
    cli::types::ids::PlayerId,
    core::{format_percent, format_stat, ClientConfig},
    error::ApiError,
    Result,
};


type StatsCompletion = std::result::Result<SeasonStatsResult, ApiError>;

/// What [`PlayerDetailViewModel::process_next`] did with a completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailUpdate {
    StatsLoaded,
    /// The API answered with an empty list; stats were left untouched.
    NoStats,
    FetchFailed,
}

/// Detail screen view model, bound to a single player for its whole life.
pub struct PlayerDetailViewModel<C: ApiClient> {
    api_service: Arc<C>,
    base_url: Url,
    player_id: PlayerId,
    stats: SeasonStats,
    fetch_failed: bool,
    sender: UnboundedSender<StatsCompletion>,
    receiver: UnboundedReceiver<StatsCompletion>,
}

impl PlayerDetailViewModel<HttpService> {
    pub fn with_http(player_id: PlayerId, config: &ClientConfig) -> Result<Self> {
        Ok(Self::new(
            player_id,
            Arc::new(HttpService::new(config)?),
            config,
        ))
    }
}

impl<C: ApiClient> PlayerDetailViewModel<C> {
    pub fn new(player_id: PlayerId, api_service: Arc<C>, config: &ClientConfig) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        Self {
            api_service,
            base_url: config.base_url.clone(),
            player_id,
            stats: SeasonStats::default(),
            fetch_failed: false,
            sender,
            receiver,
        }
    }

    pub fn player_id(&self) -> PlayerId {
        self.player_id
    }

    /// Zero-valued until the first successful fetch.
    pub fn stats(&self) -> &SeasonStats {
        &self.stats
    }

    pub fn fetch_failed(&self) -> bool {
        self.fetch_failed
    }

    pub fn stats_url(&self) -> std::result::Result<Url, ParseError> {
        season_averages_url(&self.base_url, self.player_id)
    }

    /// Dispatch a season averages request. The completion is applied by a
    /// later [`process_next`](Self::process_next).
    pub fn fetch_stats(&self) {
        let url = match self.stats_url() {
            Ok(url) => url,
            Err(e) => {
                error!(error = %e, player_id = %self.player_id, "error getting stats url");
                return;
            }
        };
        debug!(url = %url, "fetching season averages");

        let api_service = Arc::clone(&self.api_service);
        let sender = self.sender.clone();
        tokio::spawn(async move {
            let result = api_service.get_json::<SeasonStatsResult>(url).await;
            let _ = sender.send(result);
        });
    }

    /// Wait for the next fetch completion and apply it.
    pub async fn process_next(&mut self) -> Option<DetailUpdate> {
        let completion = self.receiver.recv().await?;
        Some(self.apply(completion))
    }

    fn apply(&mut self, completion: StatsCompletion) -> DetailUpdate {
        match completion {
            Ok(fetched) => match fetched.data.into_iter().next() {
                Some(stats) => {
                    self.stats = stats;
                    DetailUpdate::StatsLoaded
                }
                None => {
                    warn!(player_id = %self.player_id, "fetched stats empty");
                    DetailUpdate::NoStats
                }
            },
            Err(e) => {
                error!(error = %e, player_id = %self.player_id, "season averages fetch failed");
                self.fetch_failed = true;
                DetailUpdate::FetchFailed
            }
        }
    }

    /// `2018 - 2019`, or `Current` before anything has loaded.
    pub fn season(&self) -> String {
        if self.stats.season == 0 {
            "Current".to_string()
        } else {
            let season = u32::from(self.stats.season);
            format!("{} - {}", season, season + 1)
        }
    }

    pub fn points(&self) -> String {
        format!("PPG: {}", format_stat(self.stats.pts))
    }

    pub fn rebounds(&self) -> String {
        format!("RPG: {}", format_stat(self.stats.reb))
    }

    pub fn assists(&self) -> String {
        format!("APG: {}", format_stat(self.stats.ast))
    }

    pub fn field_goal_percent(&self) -> String {
        format!("FG%: {}%", format_percent(self.stats.fg_pct))
    }

    pub fn three_pt_percent(&self) -> String {
        format!("3P%: {}%", format_percent(self.stats.fg3_pct))
    }

    /// Raw ratio, unlike the other two percentages.
    pub fn free_throw_percent(&self) -> String {
        format!("FT%: {}", format_stat(self.stats.ft_pct))
    }

    pub fn steals(&self) -> String {
        format!("STL: {}", format_stat(self.stats.stl))
    }

    pub fn blocks(&self) -> String {
        format!("BLK: {}", format_stat(self.stats.blk))
    }

    pub fn turnovers(&self) -> String {
        format!("TO: {}", format_stat(self.stats.turnover))
    }

    /// Stat lines in the order the detail screen lists them. Free throws are
    /// not part of the section.
    pub fn stat_lines(&self) -> Vec<String> {
        vec![
            self.points(),
            self.assists(),
            self.rebounds(),
            self.field_goal_percent(),
            self.three_pt_percent(),
            self.blocks(),
            self.steals(),
            self.turnovers(),
        ]
    }
}
