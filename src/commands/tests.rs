//! Unit tests for command rendering against the mock API

use std::sync::Arc;

use super::{
    search::{search_lines, SearchParams},
    stats::stats_lines,
};
use crate::{
    api::mock::{MockModel, MockService},
    core::ClientConfig,
    viewmodel::{PlayerDetailViewModel, PlayerListViewModel},
    HoopsError, PlayerId,
};
use serde_json::json;

fn search_vm(mock: MockService) -> PlayerListViewModel<MockService> {
    PlayerListViewModel::new(Arc::new(mock), &ClientConfig::default())
}

fn detail_vm(mock: MockService) -> PlayerDetailViewModel<MockService> {
    PlayerDetailViewModel::new(PlayerId::new(237), Arc::new(mock), &ClientConfig::default())
}

fn params(name: &str, filter: Option<&str>, as_json: bool) -> SearchParams {
    SearchParams {
        name: name.to_string(),
        filter: filter.map(String::from),
        as_json,
    }
}

#[cfg(test)]
mod search_command_tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_search_renders_info_text() {
        let mut vm = search_vm(MockService::new(MockModel::Player));

        let lines = search_lines(&mut vm, &params("LeBron", None, false))
            .await
            .unwrap();
        assert_eq!(lines, vec!["LeBron James · LAL"]);
        assert_eq!(vm.search_text(), "");
    }

    #[tokio::test(start_paused = true)]
    async fn test_search_rejects_short_name() {
        let mock = Arc::new(MockService::new(MockModel::Player));
        let mut vm = PlayerListViewModel::new(Arc::clone(&mock), &ClientConfig::default());

        let result = search_lines(&mut vm, &params("L", None, false)).await;
        match result {
            Err(HoopsError::InvalidSearch { message }) => {
                assert_eq!(message, "Search must contain at least 2 characters")
            }
            other => panic!("Expected InvalidSearch, got {:?}", other),
        }
        assert!(mock.requests().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_search_filter_hides_non_matching() {
        let mut vm = search_vm(MockService::new(MockModel::Player));

        let lines = search_lines(&mut vm, &params("LeBron", Some("curry"), false))
            .await
            .unwrap();
        assert!(lines.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_search_without_results_prints_message() {
        let body = json!({ "data": [] }).to_string();
        let mut vm = search_vm(MockService::new(MockModel::Json(body)));

        let lines = search_lines(&mut vm, &params("Nobody", None, false))
            .await
            .unwrap();
        assert_eq!(lines, vec!["No results found"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_search_json_output() {
        let mut vm = search_vm(MockService::new(MockModel::Player));

        let lines = search_lines(&mut vm, &params("LeBron", None, true))
            .await
            .unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
        assert_eq!(parsed[0]["id"], 237);
        assert_eq!(parsed[0]["team"]["abbreviation"], "LAL");
    }

    #[tokio::test(start_paused = true)]
    async fn test_search_failure_is_an_error() {
        let mut vm = search_vm(MockService::failing(MockModel::Player));

        let result = search_lines(&mut vm, &params("LeBron", None, false)).await;
        assert!(matches!(
            result,
            Err(HoopsError::FetchFailed { resource: "players" })
        ));
        assert!(vm.fetch_failed());
    }
}

#[cfg(test)]
mod stats_command_tests {
    use super::*;

    #[tokio::test]
    async fn test_stats_renders_section() {
        let mut vm = detail_vm(MockService::new(MockModel::Stats));

        let lines = stats_lines(&mut vm, false).await.unwrap();
        assert_eq!(lines[0], "2018 - 2019 Season Stats");
        assert_eq!(lines[1], "PPG: 26.97");
        assert_eq!(lines.len(), 9);
    }

    #[tokio::test]
    async fn test_stats_without_data_renders_current() {
        let body = json!({ "data": [] }).to_string();
        let mut vm = detail_vm(MockService::new(MockModel::Json(body)));

        let lines = stats_lines(&mut vm, false).await.unwrap();
        assert_eq!(lines[0], "Current Season Stats");
        assert_eq!(lines[1], "PPG: 0.0");
    }

    #[tokio::test]
    async fn test_stats_json_output() {
        let mut vm = detail_vm(MockService::new(MockModel::Stats));

        let lines = stats_lines(&mut vm, true).await.unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
        assert_eq!(parsed["games_played"], 37);
        assert_eq!(parsed["fg_pct"], 0.516);
    }

    #[tokio::test]
    async fn test_stats_failure_is_an_error() {
        let mut vm = detail_vm(MockService::failing(MockModel::Stats));

        let result = stats_lines(&mut vm, false).await;
        assert!(matches!(
            result,
            Err(HoopsError::FetchFailed {
                resource: "season averages"
            })
        ));
    }
}
