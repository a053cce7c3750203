//! Data model shared by every stage of the scoring engine.
//!
//! Internally everything is a closed enum; the wire string spellings
//! ("Technical Skills", "Senior", ...) only appear at the serde boundary.

use serde::{Deserialize, Deserializer, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Requirement side
// ────────────────────────────────────────────────────────────────────────────

/// Seniority bucket, used both for the posting requirement and the classified candidate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum ExperienceLevel {
    Entry,
    #[default]
    Mid,
    Senior,
}

impl ExperienceLevel {
    pub fn rank(self) -> u8 {
        match self {
            ExperienceLevel::Entry => 1,
            ExperienceLevel::Mid => 2,
            ExperienceLevel::Senior => 3,
        }
    }

    /// Lowercase label used in suggestion sentences.
    pub fn as_str(self) -> &'static str {
        match self {
            ExperienceLevel::Entry => "entry",
            ExperienceLevel::Mid => "mid",
            ExperienceLevel::Senior => "senior",
        }
    }

    /// Case-insensitive parse. Unknown labels fall back to `Mid`.
    pub fn parse_lenient(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "entry" => ExperienceLevel::Entry,
            "senior" => ExperienceLevel::Senior,
            _ => ExperienceLevel::Mid,
        }
    }
}

impl<'de> Deserialize<'de> for ExperienceLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = Option::<String>::deserialize(deserializer)?;
        Ok(label
            .as_deref()
            .map(ExperienceLevel::parse_lenient)
            .unwrap_or_default())
    }
}

/// Job-side input to one scoring call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "RequirementSetWire", rename_all = "camelCase")]
pub struct RequirementSet {
    pub required: Vec<String>,
    pub preferred: Vec<String>,
    pub tools: Vec<String>,
    pub experience_level: ExperienceLevel,
    pub keywords: Vec<String>,
}

impl RequirementSet {
    /// Every term across the four term categories, in category order.
    pub fn all_terms(&self) -> impl Iterator<Item = &String> {
        self.required
            .iter()
            .chain(&self.preferred)
            .chain(&self.tools)
            .chain(&self.keywords)
    }

    pub fn total_terms(&self) -> usize {
        self.required.len() + self.preferred.len() + self.tools.len() + self.keywords.len()
    }
}

/// Accepts both `required`/`preferred` and the legacy `requiredSkills`/`preferredSkills`.
/// The non-legacy key wins whenever it is present, even if its list is empty.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RequirementSetWire {
    #[serde(default)]
    required: Option<Vec<String>>,
    #[serde(default)]
    required_skills: Option<Vec<String>>,
    #[serde(default)]
    preferred: Option<Vec<String>>,
    #[serde(default)]
    preferred_skills: Option<Vec<String>>,
    #[serde(default)]
    tools: Option<Vec<String>>,
    #[serde(default)]
    experience_level: ExperienceLevel,
    #[serde(default)]
    keywords: Option<Vec<String>>,
}

impl From<RequirementSetWire> for RequirementSet {
    fn from(wire: RequirementSetWire) -> Self {
        RequirementSet {
            required: wire.required.or(wire.required_skills).unwrap_or_default(),
            preferred: wire.preferred.or(wire.preferred_skills).unwrap_or_default(),
            tools: wire.tools.unwrap_or_default(),
            experience_level: wire.experience_level,
            keywords: wire.keywords.unwrap_or_default(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Report side
// ────────────────────────────────────────────────────────────────────────────

/// Match counts for one term category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryResult {
    pub matched: usize,
    pub total: usize,
    pub percentage: u32,
    pub weight: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExperienceResult {
    pub matched: bool,
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Breakdown {
    pub required_skills: CategoryResult,
    pub preferred_skills: CategoryResult,
    pub tools: CategoryResult,
    pub keywords: CategoryResult,
    pub experience_level: ExperienceResult,
}

/// `{matched, total, percentage}` without the weight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchDetail {
    pub matched: usize,
    pub total: usize,
    pub percentage: u32,
}

impl From<&CategoryResult> for MatchDetail {
    fn from(result: &CategoryResult) -> Self {
        MatchDetail {
            matched: result.matched,
            total: result.total,
            percentage: result.percentage,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchDetails {
    pub required_skills: MatchDetail,
    pub preferred_skills: MatchDetail,
    pub tools: MatchDetail,
    pub keywords: MatchDetail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GapCategory {
    #[serde(rename = "Technical Skills")]
    TechnicalSkills,
    #[serde(rename = "Soft Skills")]
    SoftSkills,
    #[serde(rename = "Tools/Technologies")]
    ToolsTechnologies,
    #[serde(rename = "Certifications")]
    Certifications,
    #[serde(rename = "Experience Keywords")]
    ExperienceKeywords,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResumeSection {
    Skills,
    Experience,
    Education,
    Summary,
}

/// One requirement term missing from the candidate text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GapItem {
    pub keyword: String,
    pub category: GapCategory,
    pub importance: u8, // 1 – 10
    pub suggested_section: ResumeSection,
}

/// Output of the category scorer alone (before gaps and suggestions).
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryScore {
    pub ats_score: u32,
    pub breakdown: Breakdown,
    pub match_details: MatchDetails,
}

/// Full engine output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreReport {
    pub ats_score: u32,             // 0 – 100
    pub match_percentage: u32,      // 0 – 100
    pub breakdown: Breakdown,
    pub match_details: MatchDetails,
    pub missing_keywords: Vec<GapItem>,
    pub suggestions: Vec<String>,
}
