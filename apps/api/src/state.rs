use std::sync::Arc;

use crate::generation::validation::EmailPolicy;
use crate::llm_client::CompletionBackend;

/// Shared application state injected into route handlers via Axum extractors.
///
/// Everything here is immutable after startup — no request mutates shared
/// state, which keeps the optimize and generate paths independent.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable completion backend. Production: `OpenAiClient`.
    pub backend: Arc<dyn CompletionBackend>,
    pub policy: EmailPolicy,
}
