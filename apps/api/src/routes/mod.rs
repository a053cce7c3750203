pub mod analysis;
pub mod health;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {uri}"))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/analyze", post(analysis::handle_analyze))
        .route("/api/v1/jd/extract", post(analysis::handle_extract))
        .route("/api/v1/optimize", post(analysis::handle_optimize))
        .fallback(not_found)
        .with_state(state)
}
