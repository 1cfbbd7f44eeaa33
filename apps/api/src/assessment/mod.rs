//! Assessment stage — one LLM call over the extracted resume text.

use tracing::info;

use crate::errors::AppError;
use crate::llm_client::{complete_json, LlmGateway};
use crate::models::assessment::Assessment;

pub mod prompts;

use prompts::build_assess_prompt;

/// Runs the assessment stage. A transport or parse failure surfaces as a
/// stage-scoped `AppError::Llm`; the caller records it against the session
/// without touching any other field.
pub async fn assess_resume(
    gateway: &dyn LlmGateway,
    resume_text: &str,
) -> Result<Assessment, AppError> {
    let spec = build_assess_prompt(resume_text);

    let assessment: Assessment = complete_json(gateway, &spec)
        .await
        .map_err(|e| AppError::Llm(format!("Resume assessment failed: {e}")))?;

    info!(
        "assessment complete: score={}/10, {} strengths, {} improvements",
        assessment.overall_score,
        assessment.strengths.len(),
        assessment.improvements.len()
    );

    Ok(assessment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::{LlmError, PromptSpec};
    use async_trait::async_trait;

    struct CannedGateway(&'static str);

    #[async_trait]
    impl LlmGateway for CannedGateway {
        async fn complete(&self, _spec: &PromptSpec) -> Result<String, LlmError> {
            Ok(self.0.to_string())
        }
    }

    #[tokio::test]
    async fn test_assess_parses_model_json() {
        let gw = CannedGateway(
            r#"{"overall_score": 7, "strengths": ["a", "b", "c"], "improvements": ["x", "y"],
                "missing_sections": [], "current_skills": ["Rust"], "recommended_skills": [],
                "experience_level": "Mid Level", "format_feedback": "fine"}"#,
        );
        let assessment = assess_resume(&gw, "resume text").await.unwrap();
        assert_eq!(assessment.overall_score, 7);
        assert_eq!(assessment.strengths.len(), 3);
        assert_eq!(assessment.improvements.len(), 2);
    }

    #[tokio::test]
    async fn test_assess_maps_parse_failure_to_llm_error() {
        let gw = CannedGateway("Sorry, I can't help with that.");
        let err = assess_resume(&gw, "resume text").await.unwrap_err();
        assert!(matches!(err, AppError::Llm(_)));
    }
}
