//! HTTP client for the monitoring API's four GET endpoints.

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, warn};

use crate::types::{AlertCounts, MetricSample, Server, TrafficSample};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(4);

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request timed out")]
    Timeout,

    #[error("connection failed: {0}")]
    Connection(String),

    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    #[error("failed to decode response: {0}")]
    Decode(String),

    #[error("HTTP request failed: {0}")]
    Http(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout
        } else if err.is_connect() {
            ApiError::Connection(err.to_string())
        } else if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Http(err.to_string())
        }
    }
}

/// Thin typed wrapper over the monitoring API. Cheap to clone.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// `base_url` is the versioned API root, e.g.
    /// `http://localhost:8000/api/v1`. A trailing slash is tolerated.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(ApiError::from)?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn servers(&self) -> Result<Vec<Server>, ApiError> {
        self.get_json("/servers").await
    }

    pub async fn server_usage(&self, server_id: u64) -> Result<Vec<MetricSample>, ApiError> {
        self.get_json(&format!("/server/usage?server_id={server_id}"))
            .await
    }

    pub async fn network_traffic(&self, server_id: u64) -> Result<Vec<TrafficSample>, ApiError> {
        self.get_json(&format!("/network/traffic?server_id={server_id}"))
            .await
    }

    pub async fn alerts(&self) -> Result<AlertCounts, ApiError> {
        self.get_json("/alerts").await
    }

    // One automatic retry per fetch, then the error surfaces to the UI.
    async fn get_json<T: DeserializeOwned>(&self, path_and_query: &str) -> Result<T, ApiError> {
        match self.get_json_once(path_and_query).await {
            Ok(v) => Ok(v),
            Err(first) => {
                warn!(%first, path = path_and_query, "fetch failed, retrying once");
                self.get_json_once(path_and_query).await
            }
        }
    }

    async fn get_json_once<T: DeserializeOwned>(&self, path_and_query: &str) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path_and_query);
        debug!(%url, "GET");
        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                url,
            });
        }
        Ok(response.json::<T>().await?)
    }
}
