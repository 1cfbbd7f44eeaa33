//! Optimization stages — the three LLM calls that run after the
//! questionnaire: ATS resume, interview questions, cover letter.

use tracing::info;

use crate::errors::AppError;
use crate::llm_client::{complete_json, LlmGateway};
use crate::models::assessment::{Assessment, InterviewQuestionSet};
use crate::models::questionnaire::UserResponses;
use crate::models::resume::StructuredResume;

pub mod prompts;

use prompts::{build_cover_letter_prompt, build_optimize_prompt, build_questions_prompt};

/// Optional targeting for cover letter (re)generation.
#[derive(Debug, Clone, Default)]
pub struct CoverLetterTarget {
    pub company_name: Option<String>,
    pub job_description: Option<String>,
}

/// Produces the ATS-optimized structured resume.
pub async fn optimize_resume(
    gateway: &dyn LlmGateway,
    resume_text: &str,
    assessment: &Assessment,
    responses: &UserResponses,
) -> Result<StructuredResume, AppError> {
    let spec = build_optimize_prompt(resume_text, assessment, responses);

    let resume: StructuredResume = complete_json(gateway, &spec)
        .await
        .map_err(|e| AppError::Llm(format!("Resume optimization failed: {e}")))?;

    info!(
        "optimized resume: {} experience entries, {} skill categories",
        resume.experience.len(),
        resume.skills.len()
    );

    Ok(resume)
}

/// Generates interview questions from the assessed skills plus any
/// comma-separated additions from the questionnaire.
pub async fn generate_interview_questions(
    gateway: &dyn LlmGateway,
    assessment: &Assessment,
    responses: &UserResponses,
) -> Result<InterviewQuestionSet, AppError> {
    let skills = question_skills(assessment, responses);
    let spec = build_questions_prompt(&skills, &assessment.experience_level);

    let set: InterviewQuestionSet = complete_json(gateway, &spec)
        .await
        .map_err(|e| AppError::Llm(format!("Question generation failed: {e}")))?;

    info!("generated {} interview questions", set.questions.len());

    Ok(set)
}

/// Generates the cover letter. Free-text stage — the completion is the
/// artifact, verbatim.
pub async fn generate_cover_letter(
    gateway: &dyn LlmGateway,
    resume: &StructuredResume,
    responses: &UserResponses,
    target: &CoverLetterTarget,
) -> Result<String, AppError> {
    let spec = build_cover_letter_prompt(
        resume,
        responses,
        target.company_name.as_deref(),
        target.job_description.as_deref(),
    );

    gateway
        .complete(&spec)
        .await
        .map_err(|e| AppError::Llm(format!("Cover letter generation failed: {e}")))
}

/// Skill list for question generation: assessed skills first, then the
/// candidate's comma-separated additions, blanks dropped.
fn question_skills(assessment: &Assessment, responses: &UserResponses) -> Vec<String> {
    let mut skills = assessment.current_skills.clone();
    skills.extend(
        responses
            .skills_to_add
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from),
    );
    skills
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::{LlmError, PromptSpec};
    use crate::models::questionnaire::{CompanySize, TargetIndustry, TargetLevel};
    use async_trait::async_trait;

    struct CannedGateway(&'static str);

    #[async_trait]
    impl LlmGateway for CannedGateway {
        async fn complete(&self, _spec: &PromptSpec) -> Result<String, LlmError> {
            Ok(self.0.to_string())
        }
    }

    struct FailingGateway;

    #[async_trait]
    impl LlmGateway for FailingGateway {
        async fn complete(&self, _spec: &PromptSpec) -> Result<String, LlmError> {
            Err(LlmError::EmptyContent)
        }
    }

    fn fixture_assessment() -> Assessment {
        serde_json::from_str(
            r#"{"overall_score": 7, "current_skills": ["Rust", "SQL"],
                "experience_level": "Mid Level"}"#,
        )
        .unwrap()
    }

    fn fixture_responses() -> UserResponses {
        UserResponses {
            career_objective: "Backend role".to_string(),
            achievements: "Shipped v2".to_string(),
            skills_to_add: " Terraform , , Go ".to_string(),
            recent_projects: String::new(),
            target_industry: TargetIndustry::Technology,
            target_level: TargetLevel::Mid,
            company_size: CompanySize::NoPreference,
        }
    }

    #[test]
    fn test_question_skills_merges_and_trims() {
        let skills = question_skills(&fixture_assessment(), &fixture_responses());
        assert_eq!(skills, vec!["Rust", "SQL", "Terraform", "Go"]);
    }

    #[tokio::test]
    async fn test_optimize_parses_structured_resume() {
        let gw = CannedGateway(
            r#"{"personal_info": {"name": "Jane"}, "professional_summary": "Builder.",
                "experience": [], "education": [], "skills": {"technical": ["Rust"]},
                "projects": [], "certifications": [], "achievements": []}"#,
        );
        let resume = optimize_resume(&gw, "raw", &fixture_assessment(), &fixture_responses())
            .await
            .unwrap();
        assert_eq!(resume.personal_info.name, "Jane");
    }

    #[tokio::test]
    async fn test_cover_letter_returns_text_verbatim() {
        let gw = CannedGateway("Dear Hiring Manager,\n\nI am writing to apply.");
        let letter = generate_cover_letter(
            &gw,
            &StructuredResume::default(),
            &fixture_responses(),
            &CoverLetterTarget::default(),
        )
        .await
        .unwrap();
        assert!(letter.starts_with("Dear Hiring Manager,"));
    }

    #[tokio::test]
    async fn test_transport_failure_is_stage_scoped() {
        let err = generate_interview_questions(
            &FailingGateway,
            &fixture_assessment(),
            &fixture_responses(),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::Llm(_)));
    }
}
