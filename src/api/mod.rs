//! balldontlie API access: the fetch-and-decode capability, its HTTP
//! implementation, endpoint URL builders and wire types.

pub mod endpoints;
pub mod http;
#[cfg(any(test, feature = "test-utils"))]
pub mod mock;
pub mod types;

use crate::error::ApiError;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use url::Url;

/// Fetch a URL and decode the JSON body into a caller-chosen type.
///
/// Implementations deliver exactly one result per call. Every failure
/// (transport, status, decode) comes back as an [`ApiError`]; nothing panics
/// past this boundary.
#[async_trait]
pub trait ApiClient: Send + Sync + 'static {
    async fn get_json<T>(&self, url: Url) -> Result<T, ApiError>
    where
        T: DeserializeOwned + Send + 'static;
}

pub use http::HttpService;
pub use types::{DataEnvelope, Player, PlayerListResult, SeasonStats, SeasonStatsResult, Team};
