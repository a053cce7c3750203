//! JD Parser — turns a raw job description into a `RequirementSet`.
//!
//! Uses the LLM when one is configured. Without a client, or on any LLM failure,
//! a deterministic keyword scan produces a minimal requirement set instead.

use serde::Serialize;
use tracing::{debug, warn};

use crate::extraction::prompts::{JD_EXTRACT_PROMPT_TEMPLATE, JD_EXTRACT_ROLE};
use crate::llm_client::prompts::json_system;
use crate::llm_client::LlmClient;
use crate::scoring::models::ExperienceLevel;
use crate::scoring::RequirementSet;

/// Skills the fallback scanner recognizes, matched as lowercase substrings.
const COMMON_SKILLS: &[&str] = &[
    "javascript",
    "python",
    "java",
    "react",
    "node",
    "sql",
    "aws",
    "docker",
    "kubernetes",
];

/// Where an extracted requirement set came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionSource {
    Llm,
    Fallback,
}

#[derive(Debug, Clone)]
pub struct Extraction {
    pub requirements: RequirementSet,
    pub source: ExtractionSource,
}

/// Extracts requirements, preferring the LLM and falling back to the keyword scan.
pub async fn extract_requirements(jd_text: &str, llm: Option<&LlmClient>) -> Extraction {
    let Some(llm) = llm else {
        debug!("No LLM configured, using fallback JD extraction");
        return fallback(jd_text);
    };

    let prompt = JD_EXTRACT_PROMPT_TEMPLATE.replace("{jd_text}", jd_text);
    match llm
        .call_json::<RequirementSet>(&prompt, &json_system(JD_EXTRACT_ROLE))
        .await
    {
        Ok(requirements) => Extraction {
            requirements,
            source: ExtractionSource::Llm,
        },
        Err(e) => {
            warn!("JD extraction via LLM failed, using fallback: {e}");
            fallback(jd_text)
        }
    }
}

fn fallback(jd_text: &str) -> Extraction {
    Extraction {
        requirements: fallback_extraction(jd_text),
        source: ExtractionSource::Fallback,
    }
}

/// Deterministic extraction: common skills become required, seniority from simple cues.
pub fn fallback_extraction(jd_text: &str) -> RequirementSet {
    let text = jd_text.to_lowercase();

    let required = COMMON_SKILLS
        .iter()
        .filter(|skill| text.contains(*skill))
        .map(|skill| skill.to_string())
        .collect();

    let experience_level = if text.contains("senior") {
        ExperienceLevel::Senior
    } else if text.contains("junior") || text.contains("entry") {
        ExperienceLevel::Entry
    } else {
        ExperienceLevel::Mid
    };

    RequirementSet {
        required,
        experience_level,
        ..Default::default()
    }
}
