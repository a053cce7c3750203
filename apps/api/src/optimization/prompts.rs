// Prompt constants for resume optimization.

/// System prompt for the rewrite. The output is plain resume text, not JSON.
pub const OPTIMIZE_SYSTEM: &str = "You are an expert resume writer who tailors resumes for \
    Applicant Tracking System screening. Respond with the rewritten resume text only. \
    Do NOT add commentary, explanations or markdown code fences.";

/// Rewrite prompt template. Replace `{keywords}`, `{level_instruction}` and `{resume_text}`.
pub const OPTIMIZE_PROMPT_TEMPLATE: &str = r#"Optimize this resume by naturally integrating these keywords: {keywords}

Guidelines:
1. Maintain the original formatting, structure, and style
2. Add keywords contextually in relevant sections
3. Don't add false information or fabricate experience
4. Keep language professional and natural
5. Highlight achievements using the keywords where appropriate
6. Optimization level: {level_instruction}

Return the optimized resume text maintaining the same structure and format as the original.

Original Resume:
{resume_text}
"#;
