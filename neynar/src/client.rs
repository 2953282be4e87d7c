use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::{NeynarURL, DEFAULT_API_KEY_HEADER, DEFAULT_USER_SEARCH_URL};

/// HTTP client for the Neynar API.
///
/// The API key is attached to every request in the configured header and is
/// never part of any error returned from this client. No `Debug` for the
/// same reason.
#[derive(Clone)]
pub struct NeynarClient {
    http: reqwest::Client,
    user_search_url: NeynarURL,
    api_key_header: String,
    api_key: String,
}

impl NeynarClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            user_search_url: NeynarURL::new(DEFAULT_USER_SEARCH_URL),
            api_key_header: DEFAULT_API_KEY_HEADER.to_string(),
            api_key: api_key.into(),
        }
    }

    pub fn with_user_search_url(mut self, url: impl Into<String>) -> Self {
        self.user_search_url = NeynarURL::new(url);
        self
    }

    pub fn with_api_key_header(mut self, header: impl Into<String>) -> Self {
        self.api_key_header = header.into();
        self
    }

    async fn fetch<T: DeserializeOwned>(&self, url: impl AsRef<str>) -> Result<T, NeynarFetchError> {
        let resp = self
            .http
            .get(url.as_ref())
            .header(self.api_key_header.as_str(), self.api_key.as_str())
            .send()
            .await
            .map_err(|e| NeynarFetchError::ResponseError(e.without_url().to_string()))?;

        let status = resp.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(NeynarFetchError::Unauthorized);
        }
        if !status.is_success() {
            return Err(NeynarFetchError::Status(status));
        }

        resp.json::<T>().await.map_err(|e| {
            NeynarFetchError::ParsingError(format!("Failed to parse response as JSON: {}", e))
        })
    }

    /// Search users by free text. The body is returned untouched so callers
    /// can relay it without losing fields this crate does not model.
    #[tracing::instrument(name = "neynar::search_users", skip(self))]
    pub async fn search_users(&self, query: &str) -> Result<serde_json::Value, NeynarFetchError> {
        let url = self.user_search_url.with_query("q", query);
        self.fetch(url).await
    }
}

#[derive(Error, Debug)]
pub enum NeynarFetchError {
    #[error("Unauthorized")]
    Unauthorized,
    #[error("Upstream returned {0}")]
    Status(StatusCode),
    #[error("ResponseError: {0}")]
    ResponseError(String),
    #[error("ParsingError: {0}")]
    ParsingError(String),
}
