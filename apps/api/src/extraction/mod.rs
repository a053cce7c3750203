// Job-description extraction: raw posting text → RequirementSet.
// LLM calls go through llm_client; the deterministic fallback needs no collaborator.

pub mod jd_parser;
pub mod prompts;
