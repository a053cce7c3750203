use std::sync::Arc;

use crate::enrichment::Enricher;
use crate::llm_client::LlmClient;
use crate::optimization::ResumeRewriter;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// `None` when no `GEMINI_API_KEY` is configured.
    pub llm: Option<LlmClient>,
    /// Pluggable enrichment backend. `None` means deterministic reports only.
    pub enricher: Option<Arc<dyn Enricher>>,
    /// Resume rewriting backend. `None` disables `/api/v1/optimize`.
    pub rewriter: Option<Arc<dyn ResumeRewriter>>,
}

impl AppState {
    /// State with no AI collaborator at all.
    pub fn deterministic() -> Self {
        Self {
            llm: None,
            enricher: None,
            rewriter: None,
        }
    }
}
