//! Enrichment — optional generative-AI pass over a finished `ScoreReport`.
//!
//! The AI may append suggestions and propose extra gap items. It never touches
//! `atsScore`, `matchPercentage`, `breakdown` or `matchDetails`: the weighted
//! algorithmic score is authoritative. Any collaborator failure is logged and the
//! deterministic report is returned unchanged.
//!
//! `AppState` holds an `Option<Arc<dyn Enricher>>`, set at startup from config.

pub mod prompts;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::enrichment::prompts::{ENRICH_PROMPT_TEMPLATE, ENRICH_ROLE};
use crate::llm_client::prompts::json_system;
use crate::llm_client::{LlmClient, LlmError};
use crate::scoring::gaps::rank_gaps;
use crate::scoring::normalize::normalize;
use crate::scoring::{GapItem, RequirementSet, ScoreReport};

/// What the collaborator proposes. Unknown fields (including any score it makes up) are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichmentProposal {
    #[serde(default, deserialize_with = "lenient_gaps")]
    pub missing_keywords: Vec<GapItem>,
    #[serde(default)]
    pub suggestions: Vec<String>,
}

/// Drops individual gap items that don't fit the schema instead of failing the whole proposal.
fn lenient_gaps<'de, D>(deserializer: D) -> Result<Vec<GapItem>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(raw
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<GapItem>(item) {
            Ok(gap) => Some(gap),
            Err(e) => {
                debug!("Dropping malformed AI gap item: {e}");
                None
            }
        })
        .collect())
}

/// The enricher trait. Implement this to swap AI backends without touching handlers.
#[async_trait]
pub trait Enricher: Send + Sync {
    async fn propose(
        &self,
        candidate_text: &str,
        requirements: &RequirementSet,
        report: &ScoreReport,
    ) -> Result<EnrichmentProposal, LlmError>;

    /// Short label for logs.
    fn backend(&self) -> &'static str;
}

/// Gemini-backed enricher.
pub struct LlmEnricher(pub LlmClient);

#[async_trait]
impl Enricher for LlmEnricher {
    async fn propose(
        &self,
        candidate_text: &str,
        requirements: &RequirementSet,
        report: &ScoreReport,
    ) -> Result<EnrichmentProposal, LlmError> {
        let prompt = build_enrich_prompt(candidate_text, requirements, report.ats_score)?;
        self.0.call_json(&prompt, &json_system(ENRICH_ROLE)).await
    }

    fn backend(&self) -> &'static str {
        "gemini"
    }
}

/// Fills the enrichment template. The resume goes in last so placeholder-like text inside it
/// is left alone.
pub fn build_enrich_prompt(
    candidate_text: &str,
    requirements: &RequirementSet,
    ats_score: u32,
) -> Result<String, serde_json::Error> {
    let requirements_json = serde_json::to_string_pretty(requirements)?;
    Ok(ENRICH_PROMPT_TEMPLATE
        .replace("{ats_score}", &ats_score.to_string())
        .replace("{requirements}", &requirements_json)
        .replace("{resume_text}", candidate_text))
}

/// Asks the enricher for a proposal and merges it. Returns the report and whether it was enriched.
pub async fn enrich_report(
    enricher: &dyn Enricher,
    candidate_text: &str,
    requirements: &RequirementSet,
    report: ScoreReport,
) -> (ScoreReport, bool) {
    match enricher.propose(candidate_text, requirements, &report).await {
        Ok(proposal) => {
            debug!(
                backend = enricher.backend(),
                proposed_gaps = proposal.missing_keywords.len(),
                proposed_suggestions = proposal.suggestions.len(),
                "Enrichment proposal received"
            );
            (apply_enrichment(report, proposal), true)
        }
        Err(e) => {
            warn!(
                backend = enricher.backend(),
                "Enrichment unavailable, using deterministic report: {e}"
            );
            (report, false)
        }
    }
}

/// Merges a proposal into the report without changing any score field.
pub fn apply_enrichment(mut report: ScoreReport, proposal: EnrichmentProposal) -> ScoreReport {
    for suggestion in proposal.suggestions {
        let suggestion = suggestion.trim();
        if suggestion.is_empty() || report.suggestions.iter().any(|s| s == suggestion) {
            continue;
        }
        report.suggestions.push(suggestion.to_string());
    }

    let mut seen: Vec<String> = report
        .missing_keywords
        .iter()
        .map(|g| normalize(&g.keyword))
        .collect();

    for gap in proposal.missing_keywords {
        let key = normalize(&gap.keyword);
        if key.is_empty() || !(1..=10).contains(&gap.importance) || seen.contains(&key) {
            continue;
        }
        seen.push(key);
        report.missing_keywords.push(gap);
    }

    rank_gaps(&mut report.missing_keywords);
    report
}
