use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use crate::api::models::{ErrorBody, Recommendation, StatsSnapshot};
use crate::config::Config;
use crate::error::{ApiError, ApiResult};

/// Read-only client for the recommendation API.
///
/// Every call is a single unauthenticated GET with no timeout and no retry.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: HttpClient,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: HttpClient::new(),
            base_url: base_url.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.api_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// All known titles, for search suggestions. Never fails: any problem is
    /// logged and yields an empty list.
    pub async fn fetch_titles(&self) -> Vec<String> {
        match self.try_fetch_titles().await {
            Ok(titles) => {
                info!(count = titles.len(), "Loaded book titles");
                titles
            }
            Err(err) => {
                warn!(error = %err, "Failed to fetch book titles");
                Vec::new()
            }
        }
    }

    async fn try_fetch_titles(&self) -> ApiResult<Vec<String>> {
        let url = format!("{}/books", self.base_url);
        debug!(%url, "GET");

        let response = self.http.get(&url).send().await?.error_for_status()?;
        decode(response).await
    }

    /// Books similar to `title`, in the server's ranking order.
    pub async fn fetch_recommendations(&self, title: &str) -> ApiResult<Vec<Recommendation>> {
        let url = format!("{}/recommend", self.base_url);
        debug!(%url, title, "GET");

        let response = self
            .http
            .get(&url)
            .query(&[("title", title)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.bytes().await?;
            return Err(match serde_json::from_slice::<ErrorBody>(&body) {
                Ok(body) => ApiError::Server(body.error),
                Err(_) => ApiError::Status(status.as_u16()),
            });
        }

        decode(response).await
    }

    /// Aggregate stats. Non-success statuses are not parsed for an error body.
    pub async fn fetch_stats(&self) -> ApiResult<StatsSnapshot> {
        let url = format!("{}/stats", self.base_url);
        debug!(%url, "GET");

        let response = self.http.get(&url).send().await?.error_for_status()?;
        decode(response).await
    }
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> ApiResult<T> {
    let body = response.bytes().await?;
    serde_json::from_slice(&body).map_err(|e| ApiError::Decode(e.to_string()))
}
