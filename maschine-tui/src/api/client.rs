use anyhow::{Context, Result};
use reqwest::{Client, Url};
use std::time::Duration;

use crate::types::Profile;

const SEARCH_PATH: &str = "/api/search";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the maschine-api search proxy. Cheap to clone; clones share the
/// underlying connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url.trim_end_matches('/'))
            .with_context(|| format!("Invalid API URL: {}", base_url))?;

        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { client, base_url })
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .with_context(|| format!("Failed to build URL for path {}", path))
    }

    /// `GET /api/search?q=<query>`, returning the profiles under
    /// `result.users`. Non-2xx statuses and bodies without that shape are
    /// errors.
    pub async fn search_users(&self, query: &str) -> Result<Vec<Profile>> {
        let response = self
            .client
            .get(self.endpoint(SEARCH_PATH)?)
            .query(&[("q", query)])
            .send()
            .await
            .context("Failed to call GET /api/search")?;

        response
            .error_for_status_ref()
            .context("GET /api/search returned error")?;

        let body = response
            .json::<neynar::UserSearchResponse>()
            .await
            .context("Failed to parse GET /api/search response")?;

        Ok(body.into_users())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use axum::{extract::Query, http::StatusCode, routing::get, Json, Router};
    use serde_json::json;

    use super::*;

    async fn spawn_proxy(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn parses_users_and_sends_query() {
        let router = Router::new().route(
            SEARCH_PATH,
            get(|Query(params): Query<HashMap<String, String>>| async move {
                Json(json!({
                    "result": {
                        "users": [{
                            "fid": 1,
                            "username": params.get("q").cloned().unwrap_or_default(),
                            "follower_count": 10,
                            "following_count": 2
                        }]
                    }
                }))
            }),
        );
        let client = ApiClient::new(&spawn_proxy(router).await).unwrap();

        let users = client.search_users("ali ce").await.unwrap();

        assert_eq!(users.len(), 1);
        assert_eq!(users[0].username, "ali ce");
        assert_eq!(users[0].display_name, None);
    }

    #[tokio::test]
    async fn server_error_is_an_error() {
        let router = Router::new().route(
            SEARCH_PATH,
            get(|| async {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to search users" })),
                )
            }),
        );
        let client = ApiClient::new(&spawn_proxy(router).await).unwrap();

        assert!(client.search_users("alice").await.is_err());
    }

    #[tokio::test]
    async fn malformed_body_is_an_error() {
        let router = Router::new().route(
            SEARCH_PATH,
            get(|| async { Json(json!({ "users": [] })) }),
        );
        let client = ApiClient::new(&spawn_proxy(router).await).unwrap();

        assert!(client.search_users("alice").await.is_err());
    }

    #[test]
    fn rejects_invalid_base_url() {
        assert!(ApiClient::new("not a url").is_err());
    }
}
