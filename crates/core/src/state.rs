use tracing::warn;

use crate::gateway::ModelGateway;
use crate::models::LocalModel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Error,
}

/// A human-readable status message, overwritten (never appended) by every
/// workflow step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub kind: StatusKind,
    pub text: String,
}

/// Client-side state for the model manager, one instance for the lifetime
/// of the application.
///
/// Invariant: `busy` is true whenever `pulling_target` is non-empty. The
/// workflows are not reentrant-safe beyond last-writer-wins; entry points
/// are expected to guard on `busy`.
#[derive(Debug, Default)]
pub struct ClientState {
    /// Models available on the backend, replaced atomically after each
    /// successful fetch.
    pub models: Vec<LocalModel>,
    /// The free-text model name the user is composing.
    pub pending_name: String,
    /// Current status message; `None` renders as empty.
    pub status: Option<Status>,
    /// True exactly while one gateway call is outstanding.
    pub busy: bool,
    /// The model currently being pulled, or empty.
    pub pulling_target: String,
}

impl ClientState {
    pub fn new() -> Self {
        Self::default()
    }

    fn set_status(&mut self, kind: StatusKind, text: impl Into<String>) {
        self.status = Some(Status {
            kind,
            text: text.into(),
        });
    }

    /// Fetch-Local-Models workflow: refresh `models` from the gateway.
    ///
    /// On failure the previous list is kept (last-known-good). `busy` is
    /// false on exit regardless of outcome.
    pub async fn refresh_models(&mut self, gateway: &dyn ModelGateway) {
        self.set_status(StatusKind::Info, "Fetching local models...");
        self.busy = true;

        self.sync_models(gateway, true).await;

        self.busy = false;
    }

    async fn sync_models(&mut self, gateway: &dyn ModelGateway, clear_status_on_success: bool) {
        match gateway.list_models().await {
            Ok(models) => {
                self.models = models;
                if clear_status_on_success {
                    self.status = None;
                }
            }
            Err(err) => {
                warn!(error = %err, "model list fetch failed");
                self.set_status(StatusKind::Error, "Could not connect to the backend.");
            }
        }
    }

    /// Pull-Model workflow: ask the backend to download `target`, then
    /// resynchronize the local list.
    ///
    /// A blank target is rejected without contacting the gateway. `busy`
    /// and `pulling_target` are reset unconditionally on exit. The resync
    /// after a successful pull leaves the success status visible; it only
    /// overwrites it if the resync itself fails.
    pub async fn pull_model(&mut self, gateway: &dyn ModelGateway, target: &str) {
        let target = target.trim();
        if target.is_empty() {
            self.set_status(StatusKind::Error, "Please enter or select a model name.");
            return;
        }

        self.set_status(
            StatusKind::Info,
            format!("Pulling model: {target}... (This can take a while)"),
        );
        self.busy = true;
        self.pulling_target = target.to_string();

        match gateway.pull_model(target).await {
            Ok(()) => {
                self.set_status(StatusKind::Success, format!("Model '{target}' has been pulled."));
                if self.pending_name.trim() == target {
                    self.pending_name.clear();
                }
                self.sync_models(gateway, false).await;
            }
            Err(err) => {
                warn!(model = target, error = %err, "model pull failed");
                self.set_status(StatusKind::Error, err.to_string());
            }
        }

        self.busy = false;
        self.pulling_target.clear();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::error::GatewayError;

    /// Scripted gateway: answers list/pull calls from queues and records
    /// every pull target it receives.
    #[derive(Default)]
    struct MockGateway {
        list_results: Mutex<Vec<Result<Vec<LocalModel>, GatewayError>>>,
        pull_results: Mutex<Vec<Result<(), GatewayError>>>,
        pulled: Mutex<Vec<String>>,
    }

    impl MockGateway {
        fn with_list(self, result: Result<Vec<LocalModel>, GatewayError>) -> Self {
            self.list_results.lock().unwrap().push(result);
            self
        }

        fn with_pull(self, result: Result<(), GatewayError>) -> Self {
            self.pull_results.lock().unwrap().push(result);
            self
        }

        fn pulled(&self) -> Vec<String> {
            self.pulled.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ModelGateway for MockGateway {
        async fn list_models(&self) -> Result<Vec<LocalModel>, GatewayError> {
            let mut results = self.list_results.lock().unwrap();
            assert!(!results.is_empty(), "unexpected list_models call");
            results.remove(0)
        }

        async fn pull_model(&self, name: &str) -> Result<(), GatewayError> {
            self.pulled.lock().unwrap().push(name.to_string());
            let mut results = self.pull_results.lock().unwrap();
            assert!(!results.is_empty(), "unexpected pull_model call");
            results.remove(0)
        }
    }

    fn model(name: &str, digest: &str, size: u64) -> LocalModel {
        LocalModel {
            name: name.to_string(),
            digest: digest.to_string(),
            size,
            modified_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    #[tokio::test]
    async fn refresh_replaces_models_in_order_and_clears_status() {
        let gateway = MockGateway::default()
            .with_list(Ok(vec![model("a", "d1", 1), model("b", "d2", 2), model("c", "d3", 3)]));
        let mut state = ClientState::new();

        state.refresh_models(&gateway).await;

        let names: Vec<_> = state.models.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["a", "b", "c"]);
        assert!(state.status.is_none());
        assert!(!state.busy);
    }

    #[tokio::test]
    async fn refresh_failure_keeps_last_known_good_models() {
        let gateway = MockGateway::default()
            .with_list(Ok(vec![model("a", "d1", 1)]))
            .with_list(Err(GatewayError::HttpStatus(502)));
        let mut state = ClientState::new();

        state.refresh_models(&gateway).await;
        state.refresh_models(&gateway).await;

        assert_eq!(state.models.len(), 1);
        assert_eq!(state.models[0].name, "a");
        let status = state.status.expect("error status expected");
        assert_eq!(status.kind, StatusKind::Error);
        assert_eq!(status.text, "Could not connect to the backend.");
        assert!(!state.busy);
    }

    #[tokio::test]
    async fn refresh_is_idempotent_on_unchanged_response() {
        let entries = vec![model("a", "d1", 1), model("b", "d2", 2)];
        let gateway = MockGateway::default()
            .with_list(Ok(entries.clone()))
            .with_list(Ok(entries.clone()));
        let mut state = ClientState::new();

        state.refresh_models(&gateway).await;
        let first = state.models.clone();
        state.refresh_models(&gateway).await;

        assert_eq!(state.models, first);
        assert_eq!(state.models, entries);
    }

    #[tokio::test]
    async fn blank_pull_target_never_reaches_the_gateway() {
        let gateway = MockGateway::default();
        let mut state = ClientState::new();

        state.pull_model(&gateway, "   ").await;

        assert!(gateway.pulled().is_empty());
        let status = state.status.expect("error status expected");
        assert_eq!(status.kind, StatusKind::Error);
        assert!(status.text.contains("enter or select"));
        assert!(!state.busy);
        assert!(state.pulling_target.is_empty());
    }

    #[tokio::test]
    async fn successful_pull_resyncs_models_and_keeps_success_status() {
        let pulled = model("gemma:2b", "d1", 1_000_000_000);
        let gateway = MockGateway::default()
            .with_pull(Ok(()))
            .with_list(Ok(vec![pulled.clone()]));
        let mut state = ClientState::new();
        state.pending_name = "gemma:2b".to_string();

        state.pull_model(&gateway, "gemma:2b").await;

        assert_eq!(gateway.pulled(), ["gemma:2b"]);
        let status = state.status.expect("success status expected");
        assert_eq!(status.kind, StatusKind::Success);
        assert_eq!(status.text, "Model 'gemma:2b' has been pulled.");
        assert_eq!(state.models, vec![pulled]);
        assert!(state.pending_name.is_empty());
        assert!(!state.busy);
        assert!(state.pulling_target.is_empty());
    }

    #[tokio::test]
    async fn pull_leaves_unrelated_pending_name_alone() {
        let gateway = MockGateway::default()
            .with_pull(Ok(()))
            .with_list(Ok(vec![]));
        let mut state = ClientState::new();
        state.pending_name = "something-else".to_string();

        state.pull_model(&gateway, "gemma:2b").await;

        assert_eq!(state.pending_name, "something-else");
    }

    #[tokio::test]
    async fn pull_http_failure_reports_status_code_and_skips_refresh() {
        let gateway = MockGateway::default()
            .with_list(Ok(vec![model("a", "d1", 1)]))
            .with_pull(Err(GatewayError::HttpStatus(500)));
        let mut state = ClientState::new();
        state.refresh_models(&gateway).await;

        state.pull_model(&gateway, "gemma:2b").await;

        // No second list result was queued: a refresh here would panic.
        assert_eq!(state.models.len(), 1);
        let status = state.status.expect("error status expected");
        assert_eq!(status.kind, StatusKind::Error);
        assert!(status.text.contains("500"));
        assert!(!state.busy);
        assert!(state.pulling_target.is_empty());
    }

    #[tokio::test]
    async fn resync_failure_after_pull_surfaces_connection_error() {
        let gateway = MockGateway::default()
            .with_pull(Ok(()))
            .with_list(Err(GatewayError::HttpStatus(502)));
        let mut state = ClientState::new();

        state.pull_model(&gateway, "gemma:2b").await;

        let status = state.status.expect("error status expected");
        assert_eq!(status.kind, StatusKind::Error);
        assert_eq!(status.text, "Could not connect to the backend.");
        assert!(!state.busy);
        assert!(state.pulling_target.is_empty());
    }

    #[tokio::test]
    async fn pull_trims_whitespace_around_the_target() {
        let gateway = MockGateway::default()
            .with_pull(Ok(()))
            .with_list(Ok(vec![]));
        let mut state = ClientState::new();

        state.pull_model(&gateway, "  gemma:2b  ").await;

        assert_eq!(gateway.pulled(), ["gemma:2b"]);
    }
}
