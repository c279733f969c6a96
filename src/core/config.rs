//! Client configuration: where the API lives and how we identify ourselves.

use crate::Result;
use url::Url;

/// Base path for the balldontlie v1 API.
pub const BDL_BASE_URL: &str = "https://www.balldontlie.io/api/v1/";

/// Connection settings shared by the HTTP client and the view models.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API root. Always ends with `/` so endpoint paths join beneath it.
    pub base_url: Url,
    pub user_agent: String,
}

impl ClientConfig {
    /// Build a config rooted at `base_url`.
    ///
    /// A missing trailing slash is added, otherwise `Url::join` would replace
    /// the last path segment (`.../api/v1` + `players` -> `.../api/players`).
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self {
            base_url: normalize_base(base_url)?,
            ..Self::default()
        })
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(BDL_BASE_URL).expect("BDL_BASE_URL is a valid URL"),
            user_agent: concat!("hoops-stats/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

fn normalize_base(raw: &str) -> Result<Url> {
    let mut url = Url::parse(raw)?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
