//! Axum route handlers for the Analysis API.

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;
use uuid::Uuid;

use crate::enrichment::enrich_report;
use crate::errors::AppError;
use crate::extraction::jd_parser::{extract_requirements, ExtractionSource};
use crate::optimization::{optimize, OptimizeInput, OptimizedResume};
use crate::scoring::{analyze, AnalysisInput, RequirementSet, ScoreReport};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    pub analysis_id: Uuid,
    pub analyzed_at: DateTime<Utc>,
    pub ai_enhanced: bool,
    pub analysis: ScoreReport,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractRequest {
    pub jd_text: String,
}

#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    pub requirements: RequirementSet,
    pub source: ExtractionSource,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizeResponse {
    pub optimization_id: Uuid,
    pub optimized_at: DateTime<Utc>,
    pub optimized_resume: OptimizedResume,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analyze
///
/// Scores `resumeText` against `requirements`. When an enricher is configured and the
/// caller did not send `"enrich": false`, AI suggestions and gaps are merged in; the
/// score itself always comes from the deterministic engine.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let input = AnalysisInput::from_value(&payload)?;
    let wants_enrichment = payload
        .get("enrich")
        .and_then(Value::as_bool)
        .unwrap_or(true);

    let AnalysisInput {
        candidate_text,
        requirements,
    } = input;

    // CPU-bound; keep it off the async workers for large documents.
    let (candidate_text, requirements, report) = tokio::task::spawn_blocking(move || {
        let report = analyze(&candidate_text, &requirements);
        (candidate_text, requirements, report)
    })
    .await
    .map_err(|e| AppError::Internal(e.into()))?;

    let (analysis, ai_enhanced) = match (&state.enricher, wants_enrichment) {
        (Some(enricher), true) => {
            enrich_report(enricher.as_ref(), &candidate_text, &requirements, report).await
        }
        _ => (report, false),
    };

    let analysis_id = Uuid::new_v4();
    info!(
        %analysis_id,
        ats_score = analysis.ats_score,
        missing = analysis.missing_keywords.len(),
        ai_enhanced,
        "Analysis completed"
    );

    Ok(Json(AnalyzeResponse {
        analysis_id,
        analyzed_at: Utc::now(),
        ai_enhanced,
        analysis,
    }))
}

/// POST /api/v1/jd/extract
///
/// Extracts a requirement set from a raw job description.
pub async fn handle_extract(
    State(state): State<AppState>,
    Json(request): Json<ExtractRequest>,
) -> Result<Json<ExtractResponse>, AppError> {
    if request.jd_text.trim().is_empty() {
        return Err(AppError::Validation("jdText cannot be empty".to_string()));
    }

    let extraction = extract_requirements(&request.jd_text, state.llm.as_ref()).await;

    Ok(Json(ExtractResponse {
        requirements: extraction.requirements,
        source: extraction.source,
    }))
}

/// POST /api/v1/optimize
///
/// Rewrites `resumeText` around `selectedKeywords` and re-scores it against `requirements`.
/// Needs a configured rewriter; without one the request is rejected.
pub async fn handle_optimize(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<Json<OptimizeResponse>, AppError> {
    let input = OptimizeInput::from_value(&payload)?;

    let rewriter = state.rewriter.as_ref().ok_or_else(|| {
        AppError::Validation(
            "Resume optimization is unavailable: GEMINI_API_KEY is not configured".to_string(),
        )
    })?;

    let optimized_resume = optimize(rewriter.as_ref(), &input).await?;

    Ok(Json(OptimizeResponse {
        optimization_id: Uuid::new_v4(),
        optimized_at: Utc::now(),
        optimized_resume,
    }))
}
