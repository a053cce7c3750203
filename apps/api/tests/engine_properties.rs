//! Property checks against the public scoring API.

use ats_match_api::scoring::matcher::exists;
use ats_match_api::scoring::{analyze, RequirementSet};

fn terms(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn verbatim_terms_always_match() {
    let samples = [
        "Rust",
        "gRPC",
        "Node.js",
        "CI-CD",
        "machine learning",
        "PostgreSQL 15",
        "C#",
    ];
    for term in samples {
        let text = format!("Summary: five years of {term} in production.");
        assert!(exists(term, &text), "{term} not found verbatim");
    }
}

#[test]
fn empty_requirement_set_scores_full_marks() {
    for text in ["", "anything", "Senior principal architect, 10+ years"] {
        let report = analyze(text, &RequirementSet::default());
        assert_eq!(report.ats_score, 100, "text: {text:?}");
        assert_eq!(report.match_percentage, 0);
    }
}

#[test]
fn adding_required_matches_is_monotonic() {
    let required = terms(&["Python", "SQL", "Spark", "Airflow", "dbt"]);
    let req = RequirementSet {
        required: required.clone(),
        preferred: terms(&["Kafka"]),
        tools: terms(&["Terraform", "Git"]),
        keywords: terms(&["pipelines", "stakeholders"]),
        ..Default::default()
    };

    let mut text = String::from("Data engineer building pipelines.");
    let mut previous = analyze(&text, &req).ats_score;
    for skill in &required {
        text.push(' ');
        text.push_str(skill);
        let current = analyze(&text, &req).ats_score;
        assert!(current >= previous, "adding {skill}: {current} < {previous}");
        previous = current;
    }
}

#[test]
fn required_gaps_rank_before_keyword_gaps() {
    let req = RequirementSet {
        required: terms(&["Elixir"]),
        keywords: terms(&["ownership"]),
        ..Default::default()
    };
    let report = analyze("Python developer", &req);
    let order: Vec<&str> = report
        .missing_keywords
        .iter()
        .map(|g| g.keyword.as_str())
        .collect();
    assert_eq!(order, vec!["Elixir", "ownership"]);
}

#[test]
fn analyze_is_deterministic() {
    let req: RequirementSet = serde_json::from_str(
        r#"{"requiredSkills": ["Go", "gRPC"], "tools": ["Kubernetes"], "experienceLevel": "senior", "keywords": ["on-call"]}"#,
    )
    .unwrap();
    let text = "Lead engineer: Go services over gRPC, on call rotation.";
    let a = serde_json::to_string(&analyze(text, &req)).unwrap();
    let b = serde_json::to_string(&analyze(text, &req)).unwrap();
    assert_eq!(a, b);
}
