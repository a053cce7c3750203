use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use ats_match_api::config::Config;
use ats_match_api::enrichment::{Enricher, LlmEnricher};
use ats_match_api::llm_client::LlmClient;
use ats_match_api::optimization::{LlmRewriter, ResumeRewriter};
use ats_match_api::routes::build_router;
use ats_match_api::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting ATS Match API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client (optional collaborator)
    let llm = match &config.gemini_api_key {
        Some(key) => {
            let client = LlmClient::new(key.clone(), config.gemini_model.clone())?;
            info!("LLM client initialized (model: {})", client.model());
            Some(client)
        }
        None => {
            info!("GEMINI_API_KEY not set; running deterministic-only");
            None
        }
    };

    let enricher: Option<Arc<dyn Enricher>> = match (&llm, config.enable_ai_enrichment) {
        (Some(client), true) => Some(Arc::new(LlmEnricher(client.clone()))),
        _ => None,
    };
    info!("AI enrichment enabled: {}", enricher.is_some());

    let rewriter: Option<Arc<dyn ResumeRewriter>> = llm
        .clone()
        .map(|client| Arc::new(LlmRewriter(client)) as Arc<dyn ResumeRewriter>);

    let state = AppState {
        llm,
        enricher,
        rewriter,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
