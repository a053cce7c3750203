//! Category scorer — per-category match counts combined into the weighted ATS score.
//!
//! | Category          | Weight |
//! |-------------------|--------|
//! | Required skills   | 0.40   |
//! | Preferred skills  | 0.25   |
//! | Tools             | 0.20   |
//! | General keywords  | 0.10   |
//! | Experience level  | 0.05   |
//!
//! An empty category contributes full credit. It cannot penalize the candidate.

use crate::scoring::experience::{classify, level_satisfies};
use crate::scoring::matcher::exists_in_normalized;
use crate::scoring::models::{
    Breakdown, CategoryResult, CategoryScore, ExperienceResult, MatchDetail, MatchDetails,
    RequirementSet,
};
use crate::scoring::normalize::normalize;

pub const REQUIRED_WEIGHT: f64 = 0.40;
pub const PREFERRED_WEIGHT: f64 = 0.25;
pub const TOOLS_WEIGHT: f64 = 0.20;
pub const KEYWORDS_WEIGHT: f64 = 0.10;
pub const EXPERIENCE_WEIGHT: f64 = 0.05;

pub fn score(candidate_text: &str, requirements: &RequirementSet) -> CategoryScore {
    let haystack = normalize(candidate_text);

    let required_skills = score_category(&requirements.required, &haystack, REQUIRED_WEIGHT);
    let preferred_skills = score_category(&requirements.preferred, &haystack, PREFERRED_WEIGHT);
    let tools = score_category(&requirements.tools, &haystack, TOOLS_WEIGHT);
    let keywords = score_category(&requirements.keywords, &haystack, KEYWORDS_WEIGHT);

    let experience_level = ExperienceResult {
        matched: level_satisfies(requirements.experience_level, classify(candidate_text)),
        weight: EXPERIENCE_WEIGHT,
    };

    let mut total = 0.0_f64;
    for category in [&required_skills, &preferred_skills, &tools, &keywords] {
        total += category_fraction(category) * 100.0 * category.weight;
    }
    if experience_level.matched {
        total += 100.0 * experience_level.weight;
    }
    let ats_score = total.clamp(0.0, 100.0).round() as u32;

    let match_details = MatchDetails {
        required_skills: MatchDetail::from(&required_skills),
        preferred_skills: MatchDetail::from(&preferred_skills),
        tools: MatchDetail::from(&tools),
        keywords: MatchDetail::from(&keywords),
    };

    CategoryScore {
        ats_score,
        breakdown: Breakdown {
            required_skills,
            preferred_skills,
            tools,
            keywords,
            experience_level,
        },
        match_details,
    }
}

/// Counts how many `terms` occur in the already-normalized haystack.
pub fn count_matches(terms: &[String], normalized_haystack: &str) -> usize {
    terms
        .iter()
        .filter(|t| exists_in_normalized(t, normalized_haystack))
        .count()
}

fn score_category(terms: &[String], normalized_haystack: &str, weight: f64) -> CategoryResult {
    let matched = count_matches(terms, normalized_haystack);
    let total = terms.len();
    CategoryResult {
        matched,
        total,
        percentage: percentage(matched, total),
        weight,
    }
}

/// `round(100 * matched / total)`, or 100 for an empty category.
pub fn percentage(matched: usize, total: usize) -> u32 {
    if total == 0 {
        return 100;
    }
    ((matched as f64 / total as f64) * 100.0).round() as u32
}

/// Unrounded share of the category that matched. Empty → 1.0.
fn category_fraction(result: &CategoryResult) -> f64 {
    if result.total == 0 {
        1.0
    } else {
        result.matched as f64 / result.total as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::models::ExperienceLevel;

    fn terms(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_requirement_set_scores_100() {
        let result = score("anything", &RequirementSet::default());
        assert_eq!(result.ats_score, 100);
        assert_eq!(result.match_details.required_skills.percentage, 100);
        assert!(result.breakdown.experience_level.matched);
    }

    #[test]
    fn test_empty_text_and_empty_requirements_scores_100() {
        assert_eq!(score("", &RequirementSet::default()).ats_score, 100);
    }

    #[test]
    fn test_python_sql_docker_scenario_scores_75() {
        let req = RequirementSet {
            required: terms(&["Python", "SQL"]),
            preferred: terms(&["Docker"]),
            ..Default::default()
        };
        let result = score("Experienced engineer skilled in Python and SQL.", &req);

        assert_eq!(result.breakdown.required_skills.matched, 2);
        assert_eq!(result.breakdown.required_skills.percentage, 100);
        assert_eq!(result.breakdown.preferred_skills.matched, 0);
        assert_eq!(result.breakdown.preferred_skills.percentage, 0);
        assert_eq!(result.breakdown.tools.percentage, 100);
        assert_eq!(result.breakdown.keywords.percentage, 100);
        assert!(result.breakdown.experience_level.matched);
        assert_eq!(result.ats_score, 75);
    }

    #[test]
    fn test_percentage_rounds_to_nearest() {
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(0, 0), 100);
        assert_eq!(percentage(0, 4), 0);
    }

    #[test]
    fn test_weighted_sum_uses_unrounded_fraction() {
        // required 1/3 → 13.33, the rest full credit (25 + 20 + 10 + 5) → 73.33
        let req = RequirementSet {
            required: terms(&["Rust", "Go", "Zig"]),
            ..Default::default()
        };
        assert_eq!(score("Rust", &req).ats_score, 73);
    }

    #[test]
    fn test_unsatisfied_experience_drops_five_points() {
        let req = RequirementSet {
            experience_level: ExperienceLevel::Senior,
            ..Default::default()
        };
        let result = score("Junior developer", &req);
        assert!(!result.breakdown.experience_level.matched);
        assert_eq!(result.ats_score, 95);
    }

    #[test]
    fn test_adding_a_matched_required_term_never_lowers_score() {
        let req = RequirementSet {
            required: terms(&["Python", "SQL", "Kafka", "Spark"]),
            preferred: terms(&["Airflow"]),
            keywords: terms(&["pipelines"]),
            ..Default::default()
        };
        let base = "Built pipelines in Python";
        let before = score(base, &req).ats_score;
        let after = score(&format!("{base} and SQL"), &req).ats_score;
        assert!(after >= before, "{after} < {before}");
        assert!(after > before);
    }

    #[test]
    fn test_matched_never_exceeds_total() {
        let req = RequirementSet {
            tools: terms(&["git", "git", "jira"]),
            ..Default::default()
        };
        let result = score("git jira git", &req);
        assert_eq!(result.breakdown.tools.matched, 3);
        assert_eq!(result.breakdown.tools.total, 3);
    }
}
