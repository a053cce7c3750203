// Prompt constants for job-description extraction.

pub const JD_EXTRACT_ROLE: &str = "You are an expert job description analyst. \
    Extract the structured requirements an ATS would screen for.";

/// JD extraction prompt template. Replace `{jd_text}` before sending.
pub const JD_EXTRACT_PROMPT_TEMPLATE: &str = r#"Analyze the following job description and extract key information.

Job Description:
{jd_text}

Return a JSON object with this EXACT schema:
{
  "requiredSkills": ["skill1", "skill2"],
  "preferredSkills": ["skill1", "skill2"],
  "tools": ["tool1", "tool2"],
  "experienceLevel": "Entry" | "Mid" | "Senior",
  "keywords": ["keyword1", "keyword2"]
}

Focus on:
- Technical skills mentioned as required
- Preferred/optional skills
- Tools, technologies, frameworks
- Experience level indicators (junior, mid-level, senior, etc.)
- Important keywords and action verbs, most important first
"#;
