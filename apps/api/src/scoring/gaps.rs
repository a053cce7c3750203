//! Gap analyzer — one `GapItem` per unmatched requirement term, ranked by importance.

use crate::scoring::matcher::exists_in_normalized;
use crate::scoring::models::{GapCategory, GapItem, RequirementSet, ResumeSection};
use crate::scoring::normalize::normalize;

/// Only the first N general keywords are considered for gaps.
pub const MAX_KEYWORD_GAPS: usize = 10;

struct GapRule {
    category: GapCategory,
    importance: u8,
    section: ResumeSection,
}

const REQUIRED_RULE: GapRule = GapRule {
    category: GapCategory::TechnicalSkills,
    importance: 10,
    section: ResumeSection::Skills,
};

const PREFERRED_RULE: GapRule = GapRule {
    category: GapCategory::TechnicalSkills,
    importance: 7,
    section: ResumeSection::Skills,
};

const TOOLS_RULE: GapRule = GapRule {
    category: GapCategory::ToolsTechnologies,
    importance: 8,
    section: ResumeSection::Skills,
};

const KEYWORDS_RULE: GapRule = GapRule {
    category: GapCategory::ExperienceKeywords,
    importance: 5,
    section: ResumeSection::Experience,
};

pub fn find_gaps(candidate_text: &str, requirements: &RequirementSet) -> Vec<GapItem> {
    let haystack = normalize(candidate_text);
    let keyword_cap = requirements.keywords.len().min(MAX_KEYWORD_GAPS);

    let groups: [(&[String], &GapRule); 4] = [
        (&requirements.required, &REQUIRED_RULE),
        (&requirements.preferred, &PREFERRED_RULE),
        (&requirements.tools, &TOOLS_RULE),
        (&requirements.keywords[..keyword_cap], &KEYWORDS_RULE),
    ];

    let mut gaps = Vec::new();
    for (terms, rule) in groups {
        for term in terms {
            if !exists_in_normalized(term, &haystack) {
                gaps.push(GapItem {
                    keyword: term.clone(),
                    category: rule.category,
                    importance: rule.importance,
                    suggested_section: rule.section,
                });
            }
        }
    }

    rank_gaps(&mut gaps);
    gaps
}

/// Descending importance. The sort is stable, so ties keep discovery order.
pub fn rank_gaps(gaps: &mut [GapItem]) {
    gaps.sort_by(|a, b| b.importance.cmp(&a.importance));
}
