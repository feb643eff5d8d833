use std::sync::Arc;

use crate::llm_client::TextGenerator;
use crate::market::insights::MarketInsightResolver;

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    /// Generation backend. `LlmClient` in production, a stub in tests.
    pub llm: Arc<dyn TextGenerator>,
    pub insights: MarketInsightResolver,
}
