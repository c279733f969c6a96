use crate::cli::types::ids::PlayerId;
use serde::{Deserialize, Serialize};


/// balldontlie nests every result list under a single `data` field.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DataEnvelope<T> {
    pub data: Vec<T>,
}

/// Response of `GET /players`.
pub type PlayerListResult = DataEnvelope<Player>;

/// Response of `GET /season_averages`.
pub type SeasonStatsResult = DataEnvelope<SeasonStats>;

/// Player record from balldontlie
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Player {
    pub id: PlayerId,
    pub first_name: String,
    pub last_name: String,
    /// Empty for most retired players.
    pub position: String,
    pub team: Team,
}

impl Player {
    pub fn string_id(&self) -> String {
        self.id.to_string()
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// List row label, e.g. `LeBron James · LAL`.
    pub fn info_text(&self) -> String {
        format!("{} · {}", self.full_name(), self.team.abbreviation)
    }

    /// Retired players usually come back without a position.
    pub fn has_position(&self) -> bool {
        !self.position.is_empty()
    }
}

/// Team embedded in every player record
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Team {
    pub id: u32,
    pub abbreviation: String,
    pub city: String,
    pub conference: String,
    pub division: String,
    pub full_name: String,
    pub name: String,
}

/// Per-game season averages for one player.
///
/// Any field missing from the payload decodes as zero, and
/// `SeasonStats::default()` doubles as the "not loaded yet" value. A player
/// who genuinely has an all-zero season looks the same.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SeasonStats {
    pub games_played: u32,
    pub player_id: u64,
    pub season: u16,
    /// Minutes per game as the API's `MM:SS` string.
    pub min: String,
    pub fgm: f64,
    pub fga: f64,
    pub fg3m: f64,
    pub fg3a: f64,
    pub ftm: f64,
    pub fta: f64,
    pub oreb: f64,
    pub dreb: f64,
    pub reb: f64,
    pub ast: f64,
    pub stl: f64,
    pub blk: f64,
    pub turnover: f64,
    pub pf: f64,
    pub pts: f64,
    pub fg_pct: f64,
    pub fg3_pct: f64,
    pub ft_pct: f64,
}

impl Default for SeasonStats {
    fn default() -> Self {
        Self {
            games_played: 0,
            player_id: 0,
            season: 0,
            min: "0".to_string(),
            fgm: 0.0,
            fga: 0.0,
            fg3m: 0.0,
            fg3a: 0.0,
            ftm: 0.0,
            fta: 0.0,
            oreb: 0.0,
            dreb: 0.0,
            reb: 0.0,
            ast: 0.0,
            stl: 0.0,
            blk: 0.0,
            turnover: 0.0,
            pf: 0.0,
            pts: 0.0,
            fg_pct: 0.0,
            fg3_pct: 0.0,
            ft_pct: 0.0,
        }
    }
}
