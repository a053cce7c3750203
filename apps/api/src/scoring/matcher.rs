//! Keyword matcher — substring containment over normalized text, widened by a
//! fixed set of lexical variants ("node.js" → "nodejs", "node js", "node").
//!
//! This is deliberately not a stemmer. Unanticipated spellings miss, and plain
//! containment means "java" also matches inside "javascript".

use crate::scoring::normalize::normalize;

/// Returns true when `term` (or one of its variants) occurs in `haystack`.
pub fn exists(term: &str, haystack: &str) -> bool {
    exists_in_normalized(term, &normalize(haystack))
}

/// Same as [`exists`], for callers that already hold the normalized haystack.
pub fn exists_in_normalized(term: &str, normalized_haystack: &str) -> bool {
    let normalized_term = normalize(term);
    if normalized_term.is_empty() {
        return false;
    }
    if normalized_haystack.contains(&normalized_term) {
        return true;
    }

    variants(term)
        .iter()
        .any(|variant| normalized_haystack.contains(variant.as_str()))
}

/// Lexical variants of `term`, each already normalized, deduplicated, empties dropped.
///
/// Built from the lowercased term rather than its normalized form, otherwise
/// normalization would erase the `.`/`-` the rules key on.
pub fn variants(term: &str) -> Vec<String> {
    let lowered = term.trim().to_lowercase();
    let mut raw: Vec<String> = vec![
        lowered.clone(),
        lowered.replace(['.', '-'], ""),
        lowered.replace(['.', '-'], " "),
    ];

    if let Some((prefix, _)) = lowered.split_once('.') {
        raw.push(prefix.to_string());
    }
    if let Some((prefix, _)) = lowered.split_once('-') {
        raw.push(prefix.to_string());
    }
    if let Some(stem) = lowered.strip_suffix(".js") {
        raw.push(stem.to_string());
        raw.push(format!("{stem}js"));
    }

    let mut out: Vec<String> = Vec::with_capacity(raw.len());
    for candidate in raw {
        let candidate = normalize(&candidate);
        if !candidate.is_empty() && !out.contains(&candidate) {
            out.push(candidate);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbatim_term_matches() {
        for term in ["Python", "SQL", "machine learning", "C#", "AWS Lambda"] {
            let text = format!("Worked with {term} daily.");
            assert!(exists(term, &text), "{term} should match verbatim");
        }
    }

    #[test]
    fn test_case_and_punctuation_insensitive() {
        assert!(exists("PostgreSQL", "postgresql, mysql"));
        assert!(exists("ci/cd", "Built CI/CD pipelines"));
    }

    #[test]
    fn test_js_suffix_variants() {
        assert!(exists("node.js", "experience with nodejs"));
        assert!(exists("Node.js", "Backend in Node and Go"));
        assert!(exists("Vue.js", "vue js components"));
    }

    #[test]
    fn test_hyphen_variants() {
        assert!(exists("CI-CD", "ci cd pipeline"));
        assert!(exists("CI-CD", "cicd pipeline"));
        assert!(exists("e-commerce", "built ecommerce platforms"));
        assert!(exists("front-end", "front work only"));
    }

    #[test]
    fn test_dot_prefix_variant() {
        assert!(exists("asp.net", "asp developer"));
    }

    #[test]
    fn test_missing_term_does_not_match() {
        assert!(!exists("Kubernetes", "Docker and Terraform"));
        assert!(!exists("Rust", ""));
    }

    #[test]
    fn test_substring_cross_match_is_accepted() {
        assert!(exists("java", "Senior JavaScript developer"));
    }

    #[test]
    fn test_empty_term_matches_nothing() {
        assert!(!exists("", "anything at all"));
        assert!(!exists("...", "anything at all"));
    }

    #[test]
    fn test_variants_are_deduplicated_and_non_empty() {
        let v = variants("node.js");
        assert_eq!(v, vec!["node js", "nodejs", "node"]);

        let v = variants(".net");
        assert!(v.iter().all(|s| !s.is_empty()));
        assert!(v.contains(&"net".to_string()));
    }
}
