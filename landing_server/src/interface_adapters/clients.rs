use crate::domain::{ArtisanCounts, PlatformStats, ProviderError, StatsProvider};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::fmt;
use std::time::Duration;

// Thin reqwest client for the stats API consumed by the landing widgets.
#[derive(Clone)]
pub struct StatsApiClient {
    http: Client,
    pub base_url: String,
}

#[derive(Debug)]
pub enum ApiClientError {
    Transport(reqwest::Error),
    Upstream { status: StatusCode },
    Decode(reqwest::Error),
}

impl fmt::Display for ApiClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiClientError::Transport(err) => write!(f, "stats api transport error: {err}"),
            ApiClientError::Upstream { status } => write!(f, "stats api upstream error {status}"),
            ApiClientError::Decode(err) => write!(f, "stats api response decode error: {err}"),
        }
    }
}

impl std::error::Error for ApiClientError {}

impl StatsApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { http, base_url })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiClientError> {
        let url = format!("{}{}", self.base_url, path);
        let res = self
            .http
            .get(url)
            .send()
            .await
            .map_err(ApiClientError::Transport)?;
        let status = res.status();

        if !status.is_success() {
            return Err(ApiClientError::Upstream { status });
        }

        res.json::<T>().await.map_err(ApiClientError::Decode)
    }
}

#[async_trait]
impl StatsProvider for StatsApiClient {
    async fn fetch_artisan_counts(&self) -> Result<ArtisanCounts, ProviderError> {
        Ok(self.get_json("/artisans/counts").await?)
    }

    async fn fetch_platform_stats(&self) -> Result<PlatformStats, ProviderError> {
        Ok(self.get_json("/stats/").await?)
    }
}
