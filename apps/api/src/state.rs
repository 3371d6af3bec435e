use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::TextGenerator;
use crate::retrieval::LexicalRetriever;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Fitted once at startup; read-only afterwards.
    pub retriever: Arc<LexicalRetriever>,
    /// Pluggable text generator. Default: GeminiClient.
    pub generator: Arc<dyn TextGenerator>,
    pub config: Config,
}
