//! Deterministic [`ApiClient`] stand-in: canned payloads, no I/O.

use std::sync::Mutex;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use url::Url;

use super::ApiClient;
use crate::error::ApiError;

/// LeBron James (id 237) season averages.
pub const STATS_JSON: &str = r#"
{
  "data": [
    {
      "games_played": 37,
      "player_id": 237,
      "season": 2018,
      "min": "34:46",
      "fgm": 9.92,
      "fga": 19.22,
      "fg3m": 2.05,
      "fg3a": 5.73,
      "ftm": 5.08,
      "fta": 7.54,
      "oreb": 0.95,
      "dreb": 7.59,
      "reb": 8.54,
      "ast": 7.38,
      "stl": 1.32,
      "blk": 0.65,
      "turnover": 3.49,
      "pf": 1.59,
      "pts": 26.97,
      "fg_pct": 0.516,
      "fg3_pct": 0.358,
      "ft_pct": 0.674
    }
  ]
}
"#;

/// LeBron James player record.
pub const PLAYER_JSON: &str = r#"
{
  "data": [
    {
      "id": 237,
      "first_name": "LeBron",
      "last_name": "James",
      "position": "F",
      "height_feet": 6,
      "height_inches": 8,
      "weight_pounds": 250,
      "team": {
        "id": 14,
        "abbreviation": "LAL",
        "city": "Los Angeles",
        "conference": "West",
        "division": "Pacific",
        "full_name": "Los Angeles Lakers",
        "name": "Lakers"
      }
    }
  ]
}
"#;

pub const MOCK_FAILURE: &str = "Error getting mock JSON";

/// Which canned payload the mock answers with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockModel {
    Player,
    Stats,
    /// Arbitrary body, for edge cases the two fixtures don't cover.
    Json(String),
}

#[derive(Debug)]
pub struct MockService {
    model: MockModel,
    complete_with_failure: bool,
    requests: Mutex<Vec<Url>>,
}

impl MockService {
    pub fn new(model: MockModel) -> Self {
        Self {
            model,
            complete_with_failure: false,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// A mock whose every call fails with [`MOCK_FAILURE`].
    pub fn failing(model: MockModel) -> Self {
        Self {
            complete_with_failure: true,
            ..Self::new(model)
        }
    }

    /// URLs requested so far, oldest first.
    pub fn requests(&self) -> Vec<Url> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }

    pub fn last_request(&self) -> Option<Url> {
        self.requests().pop()
    }

    fn body(&self) -> &str {
        match &self.model {
            MockModel::Player => PLAYER_JSON,
            MockModel::Stats => STATS_JSON,
            MockModel::Json(body) => body.as_str(),
        }
    }
}

#[async_trait]
impl ApiClient for MockService {
    async fn get_json<T>(&self, url: Url) -> Result<T, ApiError>
    where
        T: DeserializeOwned + Send + 'static,
    {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(url);
        }

        if self.complete_with_failure {
            return Err(ApiError::new(MOCK_FAILURE));
        }

        Ok(serde_json::from_str(self.body())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::{PlayerListResult, SeasonStatsResult};

    fn url() -> Url {
        Url::parse("https://example.test/players").unwrap()
    }

    #[tokio::test]
    async fn test_player_model_decodes_into_player_list() {
        let mock = MockService::new(MockModel::Player);
        let result: PlayerListResult = mock.get_json(url()).await.unwrap();
        assert_eq!(result.data[0].first_name, "LeBron");
    }

    #[tokio::test]
    async fn test_stats_model_decodes_into_stats() {
        let mock = MockService::new(MockModel::Stats);
        let result: SeasonStatsResult = mock.get_json(url()).await.unwrap();
        assert_eq!(result.data[0].games_played, 37);
    }

    #[tokio::test]
    async fn test_shape_mismatch_is_an_api_error() {
        let mock = MockService::new(MockModel::Stats);
        let result = mock.get_json::<PlayerListResult>(url()).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_failing_mock_reports_fixed_error() {
        let mock = MockService::failing(MockModel::Player);
        let result = mock.get_json::<PlayerListResult>(url()).await;
        assert_eq!(result.unwrap_err(), ApiError::new(MOCK_FAILURE));
    }

    #[tokio::test]
    async fn test_requests_are_recorded() {
        let mock = MockService::failing(MockModel::Player);
        assert!(mock.last_request().is_none());

        let _ = mock.get_json::<PlayerListResult>(url()).await;
        assert_eq!(mock.requests(), vec![url()]);
    }
}
