use crate::api::ApiClient;
use crate::app::App;
use crate::navigation;
use crate::search::{Effect, SearchOutcome};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use super::action_queue::{Action, ActionTx};

/// Carries out controller effects. Searches run on spawned tasks and report
/// back through the action queue, so they may complete in any order.
pub(super) struct EffectRunner {
    client: ApiClient,
    action_tx: ActionTx,
    debounce: Duration,
    profile_url: String,
    /// Latest sequence the controller has seen. Debounced searches that are
    /// superseded while waiting are never sent.
    latest_seq: Arc<AtomicU64>,
}

impl EffectRunner {
    pub(super) fn new(
        client: ApiClient,
        action_tx: ActionTx,
        debounce: Duration,
        profile_url: String,
    ) -> Self {
        Self {
            client,
            action_tx,
            debounce,
            profile_url,
            latest_seq: Arc::new(AtomicU64::new(0)),
        }
    }

    pub(super) fn observe(&self, app: &App) {
        self.latest_seq
            .store(app.search.latest_seq(), Ordering::SeqCst);
    }

    pub(super) fn run(&self, effect: Effect, app: &mut App) {
        match effect {
            Effect::Search { seq, query } => self.spawn_search(seq, query),
            Effect::ViewProfile { fid } => {
                let url = navigation::open_profile(&self.profile_url, fid);
                app.set_status(format!("Opened {}", url));
            }
        }
    }

    fn spawn_search(&self, seq: u64, query: String) {
        let client = self.client.clone();
        let action_tx = self.action_tx.clone();
        let latest_seq = Arc::clone(&self.latest_seq);
        let debounce = self.debounce;

        tokio::spawn(async move {
            if !debounce.is_zero() {
                tokio::time::sleep(debounce).await;
                if latest_seq.load(Ordering::SeqCst) != seq {
                    tracing::debug!(seq, "Search superseded before it was sent");
                    return;
                }
            }

            let outcome = match client.search_users(&query).await {
                Ok(users) => {
                    tracing::debug!(seq, count = users.len(), "Search completed");
                    SearchOutcome::Found(users)
                }
                Err(err) => {
                    tracing::warn!(seq, "Search for {:?} failed: {:#}", query, err);
                    SearchOutcome::Failed
                }
            };
            let _ = action_tx.send(Action::SearchCompleted { seq, outcome });
        });
    }
}

pub(super) fn run_action(action: Action, app: &mut App) {
    match action {
        Action::SearchCompleted { seq, outcome } => app.search_completed(seq, outcome),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::AtomicUsize;

    use axum::{routing::get, Json, Router};
    use serde_json::json;

    use super::super::action_queue::channel;
    use super::*;

    async fn counting_proxy(hits: Arc<AtomicUsize>) -> ApiClient {
        let router = Router::new().route(
            "/api/search",
            get(move || {
                let hits = Arc::clone(&hits);
                async move {
                    hits.fetch_add(1, Ordering::SeqCst);
                    Json(json!({ "result": { "users": [] } }))
                }
            }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        ApiClient::new(&format!("http://{}", addr)).unwrap()
    }

    fn type_char(app: &mut App, runner: &EffectRunner, c: char) {
        let effect = app.search_input_char(c);
        runner.observe(app);
        if let Some(effect) = effect {
            runner.run(effect, app);
        }
    }

    #[tokio::test]
    async fn superseded_search_is_never_sent() {
        let hits = Arc::new(AtomicUsize::new(0));
        let client = counting_proxy(Arc::clone(&hits)).await;
        let (tx, mut rx) = channel();
        let runner = EffectRunner::new(
            client,
            tx,
            Duration::from_millis(50),
            "https://example.com/{fid}".to_string(),
        );
        let mut app = App::new();

        for c in "ali".chars() {
            type_char(&mut app, &runner, c);
        }

        let Some(Action::SearchCompleted { seq, outcome }) = rx.recv().await else {
            panic!("channel closed");
        };
        assert_eq!(seq, app.search.latest_seq());
        assert_eq!(outcome, SearchOutcome::Found(Vec::new()));
        assert_eq!(hits.load(Ordering::SeqCst), 1);

        run_action(Action::SearchCompleted { seq, outcome }, &mut app);
        assert!(!app.search.is_loading());
    }

    #[tokio::test]
    async fn failed_search_reports_failure() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let client = ApiClient::new(&format!("http://{}", addr)).unwrap();
        let (tx, mut rx) = channel();
        let runner = EffectRunner::new(client, tx, Duration::ZERO, String::new());
        let mut app = App::new();

        for c in "al".chars() {
            type_char(&mut app, &runner, c);
        }

        let Some(Action::SearchCompleted { outcome, .. }) = rx.recv().await else {
            panic!("channel closed");
        };
        assert_eq!(outcome, SearchOutcome::Failed);
    }
}
