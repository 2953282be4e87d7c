use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use tracing::instrument;

use crate::{routes::ApiError, AppState};

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(search))
}

/// First value of `q`. Repeated parameters are not an error, later values are
/// ignored.
fn first_q(params: Vec<(String, String)>) -> Option<String> {
    params
        .into_iter()
        .find_map(|(key, value)| (key == "q").then_some(value))
}

#[instrument(name = "GET /api/search", skip(app_state))]
async fn search(
    State(app_state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let q = first_q(params)
        .filter(|q| !q.is_empty())
        .ok_or_else(|| ApiError::bad_request("Query parameter required"))?;

    let body = app_state.user_search().search_users(&q).await?;

    Ok(Json(body))
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::{
        domain::{ports::outbound::UserSearchPort, UserSearchError},
        router,
    };

    use super::*;

    /// Records every query it receives and replies with a canned outcome.
    #[derive(Clone)]
    struct MockUserSearch {
        reply: Result<Value, u16>,
        queries: Arc<Mutex<Vec<String>>>,
    }

    impl MockUserSearch {
        fn returning(body: Value) -> Self {
            Self {
                reply: Ok(body),
                queries: Arc::new(Mutex::new(Vec::new())),
            }
        }

        fn failing(status: u16) -> Self {
            Self {
                reply: Err(status),
                queries: Arc::new(Mutex::new(Vec::new())),
            }
        }

        fn queries(&self) -> Vec<String> {
            self.queries.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl UserSearchPort for MockUserSearch {
        async fn search_users(&self, query: &str) -> Result<Value, UserSearchError> {
            self.queries.lock().unwrap().push(query.to_string());
            self.reply
                .clone()
                .map_err(UserSearchError::UpstreamStatus)
        }
    }

    fn app(mock: &MockUserSearch) -> Router {
        let state = AppState::new(Arc::new(mock.clone()));
        router::create(state, &router::tests::test_settings())
    }

    async fn call(app: Router, uri: &str) -> (StatusCode, Value) {
        let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let resp = app.oneshot(req).await.unwrap();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), 1024 * 1024)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn missing_query_is_bad_request() {
        let mock = MockUserSearch::returning(json!({}));

        let (status, body) = call(app(&mock), "/api/search").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Query parameter required" }));
        assert!(mock.queries().is_empty());
    }

    #[tokio::test]
    async fn empty_query_is_bad_request() {
        let mock = MockUserSearch::returning(json!({}));

        let (status, body) = call(app(&mock), "/api/search?q=").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Query parameter required" }));
        assert!(mock.queries().is_empty());
    }

    #[tokio::test]
    async fn forwards_decoded_query_and_relays_body() {
        let upstream = json!({
            "result": {
                "users": [{
                    "fid": 3,
                    "username": "dwr.eth",
                    "display_name": "Dan Romero",
                    "pfp_url": "https://i.imgur.com/dwr.png",
                    "follower_count": 400000,
                    "following_count": 2000,
                    "power_badge": true
                }]
            }
        });
        let mock = MockUserSearch::returning(upstream.clone());

        let (status, body) = call(app(&mock), "/api/search?q=dan%20romero%26co").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, upstream);
        assert_eq!(mock.queries(), vec!["dan romero&co".to_string()]);
    }

    #[tokio::test]
    async fn repeated_query_forwards_first_value() {
        let mock = MockUserSearch::returning(json!({ "result": { "users": [] } }));

        let (status, _) = call(app(&mock), "/api/search?q=vitalik&q=dwr").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(mock.queries(), vec!["vitalik".to_string()]);
    }

    #[tokio::test]
    async fn empty_first_query_is_bad_request() {
        let mock = MockUserSearch::returning(json!({}));

        let (status, body) = call(app(&mock), "/api/search?limit=5&q=&q=dwr").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Query parameter required" }));
        assert!(mock.queries().is_empty());
    }

    #[tokio::test]
    async fn whitespace_query_is_still_forwarded() {
        let mock = MockUserSearch::returning(json!({ "result": { "users": [] } }));

        let (status, _) = call(app(&mock), "/api/search?q=%20").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(mock.queries(), vec![" ".to_string()]);
    }

    #[tokio::test]
    async fn upstream_failure_is_generic_500() {
        let mock = MockUserSearch::failing(503);

        let (status, body) = call(app(&mock), "/api/search?q=vitalik").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "Failed to search users" }));
    }
}
