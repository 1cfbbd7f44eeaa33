// Prompt constants for the assessment stage.

use crate::llm_client::prompts::JSON_ONLY_INSTRUCTION;
use crate::llm_client::PromptSpec;

/// System prompt for resume assessment — enforces JSON-only output.
pub const ASSESS_SYSTEM: &str = "You are an expert resume reviewer and career coach \
    with deep knowledge of applicant tracking systems. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

const ASSESS_TEMPERATURE: f32 = 0.3;
const ASSESS_MAX_TOKENS: u32 = 2048;

/// Assessment prompt template. Replace `{resume_text}` and `{json_only}`
/// before sending.
const ASSESS_PROMPT_TEMPLATE: &str = r#"Analyze the following resume and provide a comprehensive assessment.

RESUME TEXT:
{resume_text}

Evaluate:
1. Overall assessment score (1-10)
2. Key strengths identified
3. Areas for improvement
4. Missing sections or information
5. Industry-specific skills mentioned
6. Recommended skills to add
7. Experience level assessment
8. Format and presentation feedback

{json_only}

Return a JSON object with this EXACT structure (no extra fields):
{
    "overall_score": 0,
    "strengths": [],
    "improvements": [],
    "missing_sections": [],
    "current_skills": [],
    "recommended_skills": [],
    "experience_level": "",
    "format_feedback": ""
}"#;

/// Builds the assessment prompt. Pure — same resume text, same bytes out.
pub fn build_assess_prompt(resume_text: &str) -> PromptSpec {
    PromptSpec {
        system: ASSESS_SYSTEM,
        prompt: ASSESS_PROMPT_TEMPLATE
            .replace("{resume_text}", resume_text)
            .replace("{json_only}", JSON_ONLY_INSTRUCTION),
        temperature: ASSESS_TEMPERATURE,
        max_tokens: ASSESS_MAX_TOKENS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assess_prompt_is_deterministic() {
        let a = build_assess_prompt("Jane Doe\nSoftware Engineer");
        let b = build_assess_prompt("Jane Doe\nSoftware Engineer");
        assert_eq!(a.prompt, b.prompt, "same inputs must produce identical bytes");
        assert_eq!(a.system, b.system);
    }

    #[test]
    fn test_assess_prompt_embeds_resume_text() {
        let spec = build_assess_prompt("UNIQUE-MARKER-XYZ");
        assert!(spec.prompt.contains("UNIQUE-MARKER-XYZ"));
        assert!(!spec.prompt.contains("{resume_text}"));
        assert!(!spec.prompt.contains("{json_only}"));
    }

    #[test]
    fn test_assess_decoding_parameters() {
        let spec = build_assess_prompt("x");
        assert!((spec.temperature - 0.3).abs() < f32::EPSILON);
        assert_eq!(spec.max_tokens, 2048);
    }
}
