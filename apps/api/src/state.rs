use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::LlmGateway;
use crate::workflow::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable model gateway. Production: `AnthropicClient`. Tests swap in a script.
    pub llm: Arc<dyn LlmGateway>,
    /// In-memory session aggregates. Nothing here survives a restart.
    pub sessions: SessionStore,
    pub config: Config,
}
