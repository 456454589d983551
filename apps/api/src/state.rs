use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::CompletionService;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Everything here is immutable after startup; concurrent relay calls share no
/// mutable state.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable completion backend. Default: `LlmClient` against the hosted API.
    pub completion: Arc<dyn CompletionService>,
    pub config: Config,
    /// Knowledge text built once from the site content at startup.
    pub knowledge: Arc<str>,
}
