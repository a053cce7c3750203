// Prompt constants for the enrichment pass.

/// Role line for the enrichment system prompt; JSON-only rules are appended by the caller.
pub const ENRICH_ROLE: &str = "You are an expert technical recruiter reviewing how well a \
    resume matches a job's requirements for Applicant Tracking System screening.";

/// Enrichment prompt template. Replace `{resume_text}`, `{requirements}` and `{ats_score}`.
pub const ENRICH_PROMPT_TEMPLATE: &str = r#"Compare this resume with the job requirements.

Resume:
{resume_text}

Job Requirements:
{requirements}

A keyword-based ATS scorer already rated this resume {ats_score}/100. Do not re-score it.
Identify what that scorer may have missed and return a JSON object with this EXACT schema:
{
  "missingKeywords": [
    {
      "keyword": "keyword name",
      "category": "Technical Skills" | "Soft Skills" | "Tools/Technologies" | "Certifications" | "Experience Keywords",
      "importance": 1-10,
      "suggestedSection": "Experience" | "Skills" | "Education" | "Summary"
    }
  ],
  "suggestions": ["concrete, actionable suggestion"]
}

Rules:
- Only list keywords that are genuinely absent from the resume.
- Keep suggestions specific to this resume; at most 5.
"#;
