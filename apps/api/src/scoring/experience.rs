use crate::scoring::models::ExperienceLevel;
use crate::scoring::normalize::normalize;

const SENIOR_WORDS: &[&str] = &["senior", "lead", "principal", "architect"];
const SENIOR_YEARS: &[&str] = &["5+", "6+", "7+", "8+", "9+", "10+"];

const ENTRY_WORDS: &[&str] = &["junior", "entry", "intern", "fresher", "1 year"];
const ENTRY_YEARS: &[&str] = &["0-1", "0-2", "1+"];

/// Infers the candidate's seniority from lexical cues. First match wins: senior, entry, mid.
///
/// Word cues are checked on normalized text. The "5+" / "0-2" style cues are checked on the
/// lowercased text since normalization strips the `+` and `-`, and only count where no digit
/// precedes them, so year ranges like "2010-2015" are not read as "0-1".
pub fn classify(text: &str) -> ExperienceLevel {
    let normalized = normalize(text);
    let lowered = text.to_lowercase();

    let has_word = |words: &[&str]| words.iter().any(|w| normalized.contains(w));
    let has_years = |cues: &[&str]| cues.iter().any(|c| has_numeric_cue(&lowered, c));

    if has_word(SENIOR_WORDS) || has_years(SENIOR_YEARS) {
        ExperienceLevel::Senior
    } else if has_word(ENTRY_WORDS) || has_years(ENTRY_YEARS) {
        ExperienceLevel::Entry
    } else {
        ExperienceLevel::Mid
    }
}

/// True when `cue` occurs in `text` at a position not preceded by a digit.
fn has_numeric_cue(text: &str, cue: &str) -> bool {
    text.match_indices(cue).any(|(start, _)| {
        !text[..start]
            .chars()
            .next_back()
            .is_some_and(|c| c.is_ascii_digit())
    })
}

/// A candidate one tier below the requirement still satisfies it.
pub fn level_satisfies(required: ExperienceLevel, candidate: ExperienceLevel) -> bool {
    candidate.rank() + 1 >= required.rank()
}
