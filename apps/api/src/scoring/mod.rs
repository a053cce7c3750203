//! Deterministic ATS scoring engine.
//!
//! Pure functions only: no I/O, no shared state, safe to call from any number of tasks.
//! Pipeline: category scorer → gap analyzer → suggestion generator → one `ScoreReport`.

pub mod category;
pub mod experience;
pub mod gaps;
pub mod matcher;
pub mod models;
pub mod normalize;
pub mod suggestions;

use serde_json::Value;
use thiserror::Error;

pub use models::{GapItem, RequirementSet, ScoreReport};

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Runs the full pipeline. Empty text and empty requirement sets are valid inputs.
pub fn analyze(candidate_text: &str, requirements: &RequirementSet) -> ScoreReport {
    let score = category::score(candidate_text, requirements);
    let missing_keywords = gaps::find_gaps(candidate_text, requirements);
    let suggestions = suggestions::suggest(candidate_text, requirements, &score);

    let total_terms = requirements.total_terms();
    let match_percentage = if total_terms == 0 {
        0
    } else {
        let matched = total_terms.saturating_sub(missing_keywords.len());
        ((matched as f64 / total_terms as f64) * 100.0).round() as u32
    };

    ScoreReport {
        ats_score: score.ats_score,
        match_percentage,
        breakdown: score.breakdown,
        match_details: score.match_details,
        missing_keywords,
        suggestions,
    }
}

/// Validated `(candidate text, requirement set)` pair.
#[derive(Debug, Clone)]
pub struct AnalysisInput {
    pub candidate_text: String,
    pub requirements: RequirementSet,
}

impl AnalysisInput {
    /// Validates a loosely-typed payload of the shape `{resumeText, requirements}`.
    ///
    /// `resumeText` must be a string and `requirements` must be present. Empty lists are fine.
    pub fn from_value(payload: &Value) -> Result<Self, ScoringError> {
        let candidate_text = match payload.get("resumeText") {
            Some(Value::String(text)) => text.clone(),
            Some(_) => {
                return Err(ScoringError::InvalidInput(
                    "resumeText must be a string".to_string(),
                ))
            }
            None => {
                return Err(ScoringError::InvalidInput(
                    "resumeText is required".to_string(),
                ))
            }
        };

        let requirements = match payload.get("requirements") {
            Some(value @ Value::Object(_)) => serde_json::from_value::<RequirementSet>(
                value.clone(),
            )
            .map_err(|e| ScoringError::InvalidInput(format!("malformed requirements: {e}")))?,
            Some(Value::Null) | None => {
                return Err(ScoringError::InvalidInput(
                    "requirements are required".to_string(),
                ))
            }
            Some(_) => {
                return Err(ScoringError::InvalidInput(
                    "requirements must be an object".to_string(),
                ))
            }
        };

        Ok(AnalysisInput {
            candidate_text,
            requirements,
        })
    }
}
