//! Suggestion generator — deterministic, templated recommendations.

use crate::scoring::matcher::exists_in_normalized;
use crate::scoring::models::{CategoryResult, CategoryScore, RequirementSet};
use crate::scoring::normalize::normalize;

/// Below this many matched requirement terms we nudge for keyword density.
const DENSITY_THRESHOLD: usize = 10;

const BAND_LOW: &str =
    "Your resume has significant gaps. Focus on adding required skills and relevant experience.";
const BAND_MID: &str = "Your resume is decent but can be improved. Add missing keywords and highlight relevant experience.";
const BAND_GOOD: &str =
    "Good match! Consider adding a few more preferred skills to maximize your chances.";
const DENSITY: &str =
    "Increase keyword density by naturally incorporating job-relevant terms throughout your resume.";

pub fn suggest(
    candidate_text: &str,
    requirements: &RequirementSet,
    score: &CategoryScore,
) -> Vec<String> {
    let breakdown = &score.breakdown;
    let mut suggestions = Vec::new();

    let missing = missing_count(&breakdown.required_skills);
    if missing > 0 {
        suggestions.push(format!(
            "Add {missing} missing required skill{} to your Skills section. This is critical for ATS matching.",
            plural(missing, "", "s")
        ));
    }

    let missing = missing_count(&breakdown.preferred_skills);
    if missing > 0 {
        suggestions.push(format!(
            "Consider adding {missing} preferred skill{} to strengthen your profile.",
            plural(missing, "", "s")
        ));
    }

    let missing = missing_count(&breakdown.tools);
    if missing > 0 {
        suggestions.push(format!(
            "Add {missing} missing tool{} or technolog{} to your Skills section.",
            plural(missing, "", "s"),
            plural(missing, "y", "ies")
        ));
    }

    if !breakdown.experience_level.matched {
        suggestions.push(format!(
            "Highlight your experience level more clearly. The job requires {}-level experience.",
            requirements.experience_level.as_str()
        ));
    }

    if let Some(band) = score_band(score.ats_score) {
        suggestions.push(band.to_string());
    }

    let haystack = normalize(candidate_text);
    let found = requirements
        .all_terms()
        .filter(|term| exists_in_normalized(term, &haystack))
        .count();
    if found < DENSITY_THRESHOLD {
        suggestions.push(DENSITY.to_string());
    }

    suggestions
}

fn missing_count(result: &CategoryResult) -> usize {
    result.total.saturating_sub(result.matched)
}

fn plural(n: usize, one: &'static str, many: &'static str) -> &'static str {
    if n > 1 {
        many
    } else {
        one
    }
}

fn score_band(ats_score: u32) -> Option<&'static str> {
    match ats_score {
        0..=49 => Some(BAND_LOW),
        50..=69 => Some(BAND_MID),
        70..=84 => Some(BAND_GOOD),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::category::score;
    use crate::scoring::models::ExperienceLevel;

    fn terms(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn run(text: &str, req: &RequirementSet) -> Vec<String> {
        suggest(text, req, &score(text, req))
    }

    #[test]
    fn test_docker_scenario_exact_list() {
        let req = RequirementSet {
            required: terms(&["Python", "SQL"]),
            preferred: terms(&["Docker"]),
            ..Default::default()
        };
        let suggestions = run("Experienced engineer skilled in Python and SQL.", &req);
        assert_eq!(
            suggestions,
            vec![
                "Consider adding 1 preferred skill to strengthen your profile.".to_string(),
                BAND_GOOD.to_string(),
                DENSITY.to_string(),
            ]
        );
    }

    #[test]
    fn test_plural_forms() {
        let req = RequirementSet {
            required: terms(&["Rust", "Go"]),
            tools: terms(&["Terraform", "Ansible"]),
            ..Default::default()
        };
        let suggestions = run("", &req);
        assert_eq!(
            suggestions[0],
            "Add 2 missing required skills to your Skills section. This is critical for ATS matching."
        );
        assert_eq!(
            suggestions[1],
            "Add 2 missing tools or technologies to your Skills section."
        );
    }

    #[test]
    fn test_singular_tool_form() {
        let req = RequirementSet {
            tools: terms(&["Terraform"]),
            ..Default::default()
        };
        let suggestions = run("", &req);
        assert_eq!(
            suggestions[0],
            "Add 1 missing tool or technology to your Skills section."
        );
    }

    #[test]
    fn test_experience_sentence_uses_lowercase_level() {
        let req = RequirementSet {
            experience_level: ExperienceLevel::Senior,
            ..Default::default()
        };
        let suggestions = run("intern", &req);
        assert_eq!(
            suggestions[0],
            "Highlight your experience level more clearly. The job requires senior-level experience."
        );
    }

    #[test]
    fn test_score_bands() {
        assert_eq!(score_band(0), Some(BAND_LOW));
        assert_eq!(score_band(49), Some(BAND_LOW));
        assert_eq!(score_band(50), Some(BAND_MID));
        assert_eq!(score_band(69), Some(BAND_MID));
        assert_eq!(score_band(70), Some(BAND_GOOD));
        assert_eq!(score_band(84), Some(BAND_GOOD));
        assert_eq!(score_band(85), None);
        assert_eq!(score_band(100), None);
    }

    #[test]
    fn test_no_density_nudge_with_ten_matches() {
        let skills: Vec<String> = (0..10).map(|i| format!("skill{i}")).collect();
        let text = skills.join(" ");
        let req = RequirementSet {
            required: skills,
            ..Default::default()
        };
        assert!(run(&text, &req).is_empty());
    }

    #[test]
    fn test_low_score_band_present() {
        let req = RequirementSet {
            required: terms(&["Rust", "Go", "Zig"]),
            preferred: terms(&["Kafka"]),
            tools: terms(&["Terraform"]),
            ..Default::default()
        };
        let suggestions = run("", &req);
        assert!(suggestions.contains(&BAND_LOW.to_string()));
    }
}
