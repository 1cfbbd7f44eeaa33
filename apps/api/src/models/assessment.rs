//! Assessment-stage data contracts, deserialized straight from model output.
//!
//! Parsing is structural only: a response that is valid JSON with the right
//! shape is accepted as-is. Optional lists default to empty rather than
//! failing the whole stage.

use serde::{Deserialize, Serialize};

/// Full structured result of the resume assessment stage.
/// Produced once per upload; replaced wholesale on re-upload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assessment {
    /// 1–10 as judged by the model. Not validated beyond being an integer.
    pub overall_score: u8,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub improvements: Vec<String>,
    #[serde(default)]
    pub missing_sections: Vec<String>,
    #[serde(default)]
    pub current_skills: Vec<String>,
    #[serde(default)]
    pub recommended_skills: Vec<String>,
    #[serde(default)]
    pub experience_level: String,
    #[serde(default)]
    pub format_feedback: String,
}

/// Interview question category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    #[serde(alias = "Technical")]
    Technical,
    #[serde(alias = "Behavioral")]
    Behavioral,
}

impl std::fmt::Display for QuestionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuestionType::Technical => write!(f, "technical"),
            QuestionType::Behavioral => write!(f, "behavioral"),
        }
    }
}

/// One generated interview question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewQuestion {
    pub question: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    #[serde(default)]
    pub skill_area: String,
}

/// Ordered set of interview questions for the report appendix.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewQuestionSet {
    pub questions: Vec<InterviewQuestion>,
}
