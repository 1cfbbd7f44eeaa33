//! Report Renderer — Assessment (plus optional interview-question appendix)
//! → paginated PDF.

use crate::errors::AppError;
use crate::models::assessment::{Assessment, InterviewQuestionSet};

use super::{pdf, Block};

pub fn render_report_pdf(
    assessment: &Assessment,
    questions: Option<&InterviewQuestionSet>,
) -> Result<Vec<u8>, AppError> {
    pdf::render_blocks("Resume Assessment Report", &report_blocks(assessment, questions))
}

/// Builds the ordered block list. Public for section-presence tests.
pub fn report_blocks(
    assessment: &Assessment,
    questions: Option<&InterviewQuestionSet>,
) -> Vec<Block> {
    let mut blocks = vec![
        Block::Title("Resume Assessment Report".to_string()),
        Block::Spacer(6.0),
        Block::Heading("ASSESSMENT RESULTS".to_string()),
        Block::Text(format!("Overall Score: {}/10", assessment.overall_score)),
        Block::Text(format!(
            "Experience Level: {}",
            if assessment.experience_level.trim().is_empty() {
                "Not specified"
            } else {
                &assessment.experience_level
            }
        )),
        Block::Spacer(4.0),
    ];

    for (title, items) in [
        ("Key Strengths:", &assessment.strengths),
        ("Areas for Improvement:", &assessment.improvements),
        ("Recommended Skills to Add:", &assessment.recommended_skills),
    ] {
        if !items.is_empty() {
            blocks.push(Block::SubHeading(title.to_string()));
            for item in items {
                blocks.push(Block::Bullet(item.clone()));
            }
            blocks.push(Block::Spacer(4.0));
        }
    }

    if !assessment.format_feedback.trim().is_empty() {
        blocks.push(Block::SubHeading("Format & Presentation:".to_string()));
        blocks.push(Block::Text(assessment.format_feedback.clone()));
        blocks.push(Block::Spacer(4.0));
    }

    if let Some(set) = questions.filter(|s| !s.questions.is_empty()) {
        blocks.push(Block::Heading("INTERVIEW PREPARATION QUESTIONS".to_string()));
        for (i, q) in set.questions.iter().enumerate() {
            blocks.push(Block::SubHeading(format!("Q{}: {}", i + 1, q.question)));
            blocks.push(Block::Text(format!(
                "Type: {} | Skill Area: {}",
                q.question_type, q.skill_area
            )));
            blocks.push(Block::Spacer(3.0));
        }
    }

    blocks
}
