//! Search screen state: the player-name search box, its debounced validity
//! gate, and the list of players returned by the last search.
//!
//! # Event flow
//!
//! Every keystroke goes through [`PlayerListViewModel::update_search_text`],
//! which restarts a 300ms debounce timer. Timer expiries and fetch
//! completions are posted to the view model's private mailbox by spawned
//! tasks and applied by [`PlayerListViewModel::process_next`], so state only
//! ever changes on the task that owns the view model.
//!
//! ```rust,no_run
//! use hoops_stats::{core::ClientConfig, viewmodel::player_list::PlayerListViewModel};
//!
//! # async fn example() -> hoops_stats::Result<()> {
//! let mut search = PlayerListViewModel::with_http(&ClientConfig::default())?;
//! search.update_search_text("LeBron");
//! search.process_next().await; // debounce settles, search becomes valid
//! search.trigger_search();
//! search.process_next().await; // players arrive
//! for player in search.visible_players("") {
//!     println!("{}", player.info_text());
//! }
//! # Ok(())
//! # }
//! ```

use std::{sync::Arc, time::Duration};

use tokio::{
    sync::mpsc::{self, UnboundedReceiver, UnboundedSender},
    task::JoinHandle,
};
use tracing::{debug, error};
use url::{ParseError, Url};

use crate::{
    api::{endpoints::players_url, ApiClient, HttpService, Player, PlayerListResult},
    core::ClientConfig,
    error::ApiError,
    Result,
};


/// Quiet period after the last keystroke before validity is recomputed.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Minimum number of non-whitespace-trimmed characters for a valid search.
pub const MIN_SEARCH_CHARS: usize = 2;

pub const CHARACTER_LIMIT_MESSAGE: &str = "Search must contain at least 2 characters";
pub const NO_RESULTS_MESSAGE: &str = "No results found";

enum Message {
    SearchSettled { generation: u64 },
    PlayersFetched(std::result::Result<PlayerListResult, ApiError>),
}

/// What [`PlayerListViewModel::process_next`] did with the message it received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListUpdate {
    /// The debounced validity was recomputed and applied.
    Validity { is_valid: bool },
    /// The debounce settled on the same outcome as the previous emission.
    Unchanged,
    /// A timer that a later keystroke superseded.
    Stale,
    /// A search completed. `count` is the number of players kept.
    PlayersLoaded { count: usize },
    FetchFailed,
}

/// Search screen view model.
///
/// Generic over the [`ApiClient`] so tests can swap in a deterministic
/// client. Must be driven from inside a Tokio runtime.
pub struct PlayerListViewModel<C: ApiClient> {
    api_service: Arc<C>,
    base_url: Url,
    players: Vec<Player>,
    search_text: String,
    is_search_valid: bool,
    validity_message: String,
    fetch_failed: bool,
    last_emitted: Option<(bool, String)>,
    generation: u64,
    debounce: Option<JoinHandle<()>>,
    sender: UnboundedSender<Message>,
    receiver: UnboundedReceiver<Message>,
}

impl PlayerListViewModel<HttpService> {
    /// View model talking to the real API described by `config`.
    pub fn with_http(config: &ClientConfig) -> Result<Self> {
        Ok(Self::new(Arc::new(HttpService::new(config)?), config))
    }
}

impl<C: ApiClient> PlayerListViewModel<C> {
    pub fn new(api_service: Arc<C>, config: &ClientConfig) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        Self {
            api_service,
            base_url: config.base_url.clone(),
            players: Vec::new(),
            search_text: String::new(),
            is_search_valid: false,
            validity_message: String::new(),
            fetch_failed: false,
            last_emitted: None,
            generation: 0,
            debounce: None,
            sender,
            receiver,
        }
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// Debounced: lags [`search_text`](Self::search_text) by [`SEARCH_DEBOUNCE`].
    pub fn is_search_valid(&self) -> bool {
        self.is_search_valid
    }

    /// Whether the search button accepts taps.
    pub fn search_button_enabled(&self) -> bool {
        self.is_search_valid
    }

    pub fn validity_message(&self) -> &str {
        &self.validity_message
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Set when a search fails. Never reset by later successes.
    pub fn fetch_failed(&self) -> bool {
        self.fetch_failed
    }

    /// Replace the search text and restart the debounce timer.
    pub fn update_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
        self.generation += 1;

        if let Some(timer) = self.debounce.take() {
            timer.abort();
        }

        let generation = self.generation;
        let sender = self.sender.clone();
        self.debounce = Some(tokio::spawn(async move {
            tokio::time::sleep(SEARCH_DEBOUNCE).await;
            let _ = sender.send(Message::SearchSettled { generation });
        }));
    }

    /// Search for the current text, then clear the box without waiting for
    /// the response.
    pub fn trigger_search(&mut self) {
        self.fetch_players();
        self.update_search_text(String::new());
    }

    pub fn clear_search(&mut self) {
        self.update_search_text(String::new());
    }

    pub fn clear_list(&mut self) {
        self.update_search_text(String::new());
        self.players.clear();
    }

    /// URL for searching the current text.
    pub fn search_url(&self) -> std::result::Result<Url, ParseError> {
        players_url(&self.base_url, &self.search_text)
    }

    /// Dispatch a search for the current text. The completion is applied by
    /// a later [`process_next`](Self::process_next).
    pub fn fetch_players(&self) {
        let url = match self.search_url() {
            Ok(url) => url,
            Err(e) => {
                error!(error = %e, "error getting players url");
                return;
            }
        };
        debug!(url = %url, "fetching players");

        let api_service = Arc::clone(&self.api_service);
        let sender = self.sender.clone();
        tokio::spawn(async move {
            let result = api_service.get_json::<PlayerListResult>(url).await;
            let _ = sender.send(Message::PlayersFetched(result));
        });
    }

    /// Players whose full name contains `filter_text`, ignoring case.
    pub fn visible_players(&self, filter_text: &str) -> Vec<&Player> {
        filter_by_name(&self.players, filter_text)
    }

    /// Wait for the next timer expiry or fetch completion and apply it.
    pub async fn process_next(&mut self) -> Option<ListUpdate> {
        let message = self.receiver.recv().await?;
        Some(self.apply(message))
    }

    fn apply(&mut self, message: Message) -> ListUpdate {
        match message {
            Message::SearchSettled { generation } => {
                if generation != self.generation {
                    return ListUpdate::Stale;
                }
                self.debounce = None;
                self.apply_validity()
            }
            Message::PlayersFetched(Ok(fetched)) => {
                let no_matches = fetched.data.is_empty();
                self.players = fetched
                    .data
                    .into_iter()
                    .filter(|player| player.has_position())
                    .collect();

                if no_matches {
                    self.validity_message = NO_RESULTS_MESSAGE.to_string();
                }
                debug!(count = self.players.len(), "players loaded");
                ListUpdate::PlayersLoaded {
                    count: self.players.len(),
                }
            }
            Message::PlayersFetched(Err(e)) => {
                error!(error = %e, "player search failed");
                self.fetch_failed = true;
                ListUpdate::FetchFailed
            }
        }
    }

    fn apply_validity(&mut self) -> ListUpdate {
        let is_valid = is_valid_search(&self.search_text);
        let message = if is_valid || self.search_text.is_empty() {
            String::new()
        } else {
            CHARACTER_LIMIT_MESSAGE.to_string()
        };

        let outcome = (is_valid, message);
        if self.last_emitted.as_ref() == Some(&outcome) {
            return ListUpdate::Unchanged;
        }

        self.is_search_valid = outcome.0;
        self.validity_message = outcome.1.clone();
        self.last_emitted = Some(outcome);
        ListUpdate::Validity { is_valid }
    }
}

impl<C: ApiClient> Drop for PlayerListViewModel<C> {
    fn drop(&mut self) {
        if let Some(timer) = self.debounce.take() {
            timer.abort();
        }
    }
}

/// A search needs at least [`MIN_SEARCH_CHARS`] characters once surrounding
/// whitespace is trimmed.
pub fn is_valid_search(text: &str) -> bool {
    text.trim().chars().count() >= MIN_SEARCH_CHARS
}

/// Display-time name filter, independent of the server-side search.
pub fn filter_by_name<'a>(players: &'a [Player], name: &str) -> Vec<&'a Player> {
    if name.is_empty() {
        return players.iter().collect();
    }

    let needle = name.to_lowercase();
    players
        .iter()
        .filter(|player| player.full_name().to_lowercase().contains(&needle))
        .collect()
}
