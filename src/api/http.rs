use std::time::Instant;

use async_trait::async_trait;
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT},
    Client,
};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use super::ApiClient;
use crate::{core::ClientConfig, error::ApiError, Result};


/// Production [`ApiClient`] backed by a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct HttpService {
    client: Client,
}

impl HttpService {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .default_headers(common_headers())
            .build()?;
        Ok(Self { client })
    }
}

fn common_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers
}

#[async_trait]
impl ApiClient for HttpService {
    async fn get_json<T>(&self, url: Url) -> std::result::Result<T, ApiError>
    where
        T: DeserializeOwned + Send + 'static,
    {
        let before = Instant::now();
        let body = self
            .client
            .get(url.clone())
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;
        debug!(url = %url, elapsed = ?before.elapsed(), bytes = body.len(), "[REST] call");

        Ok(serde_json::from_slice(&body)?)
    }
}
