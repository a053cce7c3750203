//! Resume optimization: the LLM rewrites a resume around caller-selected keywords, then the
//! deterministic engine scores the rewrite against the same requirement set. The reported
//! scores always come from `scoring::analyze`, never from the model.

pub mod prompts;

use std::str::FromStr;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::info;

use crate::llm_client::{LlmClient, LlmError};
use crate::optimization::prompts::{OPTIMIZE_PROMPT_TEMPLATE, OPTIMIZE_SYSTEM};
use crate::scoring::{analyze, AnalysisInput, RequirementSet, ScoreReport, ScoringError};

#[derive(Debug, Error)]
pub enum OptimizationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Rewrite failed: {0}")]
    Rewrite(#[from] LlmError),
}

impl From<ScoringError> for OptimizationError {
    fn from(err: ScoringError) -> Self {
        match err {
            ScoringError::InvalidInput(msg) => OptimizationError::InvalidInput(msg),
        }
    }
}

/// How far the rewrite may move away from the original text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptimizationLevel {
    Aggressive,
    #[default]
    Balanced,
    Conservative,
}

impl OptimizationLevel {
    pub fn instruction(self) -> &'static str {
        match self {
            OptimizationLevel::Aggressive => {
                "Maximize keyword density while maintaining readability"
            }
            OptimizationLevel::Balanced => {
                "Naturally integrate keywords in contextually appropriate sections"
            }
            OptimizationLevel::Conservative => {
                "Make minimal changes, only add keywords where they fit naturally"
            }
        }
    }
}

impl FromStr for OptimizationLevel {
    type Err = OptimizationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "aggressive" => Ok(OptimizationLevel::Aggressive),
            "balanced" => Ok(OptimizationLevel::Balanced),
            "conservative" => Ok(OptimizationLevel::Conservative),
            other => Err(OptimizationError::InvalidInput(format!(
                "optimizationLevel must be one of aggressive, balanced, conservative (got {other:?})"
            ))),
        }
    }
}

/// Validated optimization request.
#[derive(Debug, Clone)]
pub struct OptimizeInput {
    pub resume_text: String,
    pub requirements: RequirementSet,
    pub selected_keywords: Vec<String>,
    pub level: OptimizationLevel,
}

impl OptimizeInput {
    /// Validates `{resumeText, requirements, selectedKeywords, optimizationLevel?}`.
    pub fn from_value(payload: &Value) -> Result<Self, OptimizationError> {
        let AnalysisInput {
            candidate_text,
            requirements,
        } = AnalysisInput::from_value(payload)?;

        let selected_keywords = match payload.get("selectedKeywords") {
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| {
                    item.as_str().map(str::to_string).ok_or_else(|| {
                        OptimizationError::InvalidInput(
                            "selectedKeywords must contain only strings".to_string(),
                        )
                    })
                })
                .collect::<Result<Vec<_>, _>>()?,
            _ => {
                return Err(OptimizationError::InvalidInput(
                    "selectedKeywords must be an array".to_string(),
                ))
            }
        };

        let level = match payload.get("optimizationLevel") {
            None | Some(Value::Null) => OptimizationLevel::default(),
            Some(Value::String(label)) => label.parse()?,
            Some(_) => {
                return Err(OptimizationError::InvalidInput(
                    "optimizationLevel must be a string".to_string(),
                ))
            }
        };

        Ok(OptimizeInput {
            resume_text: candidate_text,
            requirements,
            selected_keywords,
            level,
        })
    }
}

/// Rewritten resume plus its before/after scores.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizedResume {
    pub content: String,
    pub changes_made: Vec<String>,
    pub selected_keywords: Vec<String>,
    pub optimization_level: OptimizationLevel,
    pub original_ats_score: u32,
    pub final_ats_score: u32,
    pub improvement: i32,
    pub analysis: ScoreReport,
}

/// The rewriting backend. Implement this to swap AI providers without touching handlers.
#[async_trait]
pub trait ResumeRewriter: Send + Sync {
    async fn rewrite(
        &self,
        resume_text: &str,
        selected_keywords: &[String],
        level: OptimizationLevel,
    ) -> Result<String, LlmError>;

    /// Short label for logs.
    fn backend(&self) -> &'static str;
}

/// Gemini-backed rewriter.
pub struct LlmRewriter(pub LlmClient);

#[async_trait]
impl ResumeRewriter for LlmRewriter {
    async fn rewrite(
        &self,
        resume_text: &str,
        selected_keywords: &[String],
        level: OptimizationLevel,
    ) -> Result<String, LlmError> {
        let prompt = build_optimize_prompt(resume_text, selected_keywords, level);
        self.0.call_text(&prompt, OPTIMIZE_SYSTEM).await
    }

    fn backend(&self) -> &'static str {
        "gemini"
    }
}

/// Fills the rewrite template, resume last.
pub fn build_optimize_prompt(
    resume_text: &str,
    selected_keywords: &[String],
    level: OptimizationLevel,
) -> String {
    OPTIMIZE_PROMPT_TEMPLATE
        .replace("{keywords}", &selected_keywords.join(", "))
        .replace("{level_instruction}", level.instruction())
        .replace("{resume_text}", resume_text)
}

/// Rewrites the resume and re-scores the result against the same requirements.
pub async fn optimize(
    rewriter: &dyn ResumeRewriter,
    input: &OptimizeInput,
) -> Result<OptimizedResume, OptimizationError> {
    let original = analyze(&input.resume_text, &input.requirements);

    let content = rewriter
        .rewrite(&input.resume_text, &input.selected_keywords, input.level)
        .await?;

    let analysis = analyze(&content, &input.requirements);
    let improvement = analysis.ats_score as i32 - original.ats_score as i32;

    info!(
        backend = rewriter.backend(),
        level = ?input.level,
        original = original.ats_score,
        final_score = analysis.ats_score,
        improvement,
        "Resume optimized"
    );

    Ok(OptimizedResume {
        content,
        changes_made: vec![format!(
            "Added {} keywords",
            input.selected_keywords.len()
        )],
        selected_keywords: input.selected_keywords.clone(),
        optimization_level: input.level,
        original_ats_score: original.ats_score,
        final_ats_score: analysis.ats_score,
        improvement,
        analysis,
    })
}
