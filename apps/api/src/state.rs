use crate::cache::MessageCache;
use crate::config::Config;
use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
    /// Response cache for generated messages. Injected here (rather than a
    /// process-global) so tests can build isolated instances.
    pub cache: MessageCache,
    /// Held for handlers that need runtime settings; currently only read at startup.
    #[allow(dead_code)]
    pub config: Config,
}
