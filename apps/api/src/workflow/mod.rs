//! Workflow Controller — the linear state machine coordinating
//! Upload → Assess → Questionnaire → Optimize → Deliver, and the owner of
//! all session-scoped state.
//!
//! Transitions are one-directional; the only way back is an explicit reset.
//! Stage failures are captured into the corresponding session slot and
//! surfaced at the boundary — a failed stage never crashes the workflow and
//! never leaks partial state into other fields.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;
use tracing::{info, warn};
use uuid::Uuid;

use crate::assessment::assess_resume;
use crate::errors::AppError;
use crate::extract::extract_resume_text;
use crate::generation::{
    generate_cover_letter, generate_interview_questions, optimize_resume, CoverLetterTarget,
};
use crate::llm_client::LlmGateway;
use crate::models::assessment::{Assessment, InterviewQuestionSet};
use crate::models::questionnaire::UserResponses;
use crate::models::resume::StructuredResume;

pub mod handlers;

/// Workflow position of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowStage {
    Uploading,
    Assessing,
    AwaitingQuestionnaire,
    Optimizing,
    Delivering,
}

/// The per-user aggregate. Lives in memory for the duration of one workflow
/// run; destroyed or recycled only by explicit reset.
#[derive(Debug)]
pub struct Session {
    pub id: Uuid,
    pub stage: WorkflowStage,
    /// Bumped on reset. A stage result computed against an older epoch is
    /// discarded instead of being applied to the recycled session.
    pub epoch: u64,
    pub created_at: DateTime<Utc>,
    pub resume_text: Option<String>,
    pub assessment: Option<Assessment>,
    pub assessment_error: Option<String>,
    pub responses: Option<UserResponses>,
    pub optimized_resume: Option<StructuredResume>,
    pub interview_questions: Option<InterviewQuestionSet>,
    pub optimization_error: Option<String>,
    pub cover_letter: Option<String>,
    pub cover_letter_error: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            stage: WorkflowStage::Uploading,
            epoch: 0,
            created_at: Utc::now(),
            resume_text: None,
            assessment: None,
            assessment_error: None,
            responses: None,
            optimized_resume: None,
            interview_questions: None,
            optimization_error: None,
            cover_letter: None,
            cover_letter_error: None,
        }
    }

    /// Stores extracted text and moves Uploading → Assessing. A session stuck
    /// in Assessing after a failed assessment accepts a replacement upload;
    /// anything later requires a reset first.
    pub fn begin_assessment(&mut self, resume_text: String) -> Result<(), AppError> {
        match self.stage {
            WorkflowStage::Uploading | WorkflowStage::Assessing => {
                self.resume_text = Some(resume_text);
                self.assessment = None;
                self.assessment_error = None;
                self.stage = WorkflowStage::Assessing;
                Ok(())
            }
            _ => Err(AppError::Conflict(
                "A resume was already processed for this session — reset to start over"
                    .to_string(),
            )),
        }
    }

    /// Applies a successful assessment: Assessing → AwaitingQuestionnaire.
    pub fn complete_assessment(&mut self, assessment: Assessment) {
        self.assessment = Some(assessment);
        self.assessment_error = None;
        self.stage = WorkflowStage::AwaitingQuestionnaire;
    }

    /// Records an assessment failure. The session stays in Assessing; the
    /// error is surfaced by the status endpoint until a re-upload or reset.
    pub fn fail_assessment(&mut self, message: String) {
        self.assessment_error = Some(message);
    }

    /// Validates and stores questionnaire answers:
    /// AwaitingQuestionnaire → Optimizing.
    pub fn submit_questionnaire(&mut self, responses: UserResponses) -> Result<(), AppError> {
        if self.stage != WorkflowStage::AwaitingQuestionnaire {
            return Err(AppError::Conflict(
                "The questionnaire is not open at this point in the workflow".to_string(),
            ));
        }
        if responses.career_objective.trim().is_empty()
            || responses.achievements.trim().is_empty()
        {
            return Err(AppError::Validation(
                "Please fill in at least the career objective and achievements fields"
                    .to_string(),
            ));
        }
        self.responses = Some(responses);
        self.stage = WorkflowStage::Optimizing;
        Ok(())
    }

    /// Applies optimization output: Optimizing → Delivering. A failed cover
    /// letter is tolerated — delivery proceeds with the letter marked
    /// unavailable.
    pub fn complete_optimization(
        &mut self,
        resume: StructuredResume,
        questions: InterviewQuestionSet,
        cover_letter: Result<String, String>,
    ) {
        self.optimized_resume = Some(resume);
        self.interview_questions = Some(questions);
        self.optimization_error = None;
        match cover_letter {
            Ok(letter) => {
                self.cover_letter = Some(letter);
                self.cover_letter_error = None;
            }
            Err(message) => {
                self.cover_letter = None;
                self.cover_letter_error = Some(message);
            }
        }
        self.stage = WorkflowStage::Delivering;
    }

    /// Records a fatal optimization failure. The session stays in Optimizing
    /// with the error visible; answers are immutable, so the way forward is
    /// a reset.
    pub fn fail_optimization(&mut self, message: String) {
        self.optimization_error = Some(message);
    }

    /// Replace-in-place for the single cover letter slot while Delivering.
    /// On failure the previous letter (if any) is kept and the error recorded.
    pub fn replace_cover_letter(&mut self, result: Result<String, String>) {
        match result {
            Ok(letter) => {
                self.cover_letter = Some(letter);
                self.cover_letter_error = None;
            }
            Err(message) => {
                self.cover_letter_error = Some(message);
            }
        }
    }

    /// Explicit reset: clears the whole aggregate and returns to Uploading.
    pub fn reset(&mut self) {
        self.epoch += 1;
        self.stage = WorkflowStage::Uploading;
        self.resume_text = None;
        self.assessment = None;
        self.assessment_error = None;
        self.responses = None;
        self.optimized_resume = None;
        self.interview_questions = None;
        self.optimization_error = None;
        self.cover_letter = None;
        self.cover_letter_error = None;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Read view of a session, shaped for the status endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub id: Uuid,
    pub stage: WorkflowStage,
    pub created_at: DateTime<Utc>,
    pub resume_uploaded: bool,
    pub assessment: Option<Assessment>,
    pub assessment_error: Option<String>,
    pub questionnaire_submitted: bool,
    pub optimization_error: Option<String>,
    pub resume_ready: bool,
    pub questions_ready: bool,
    pub cover_letter_available: bool,
    pub cover_letter_error: Option<String>,
}

impl From<&Session> for SessionView {
    fn from(session: &Session) -> Self {
        Self {
            id: session.id,
            stage: session.stage,
            created_at: session.created_at,
            resume_uploaded: session.resume_text.is_some(),
            assessment: session.assessment.clone(),
            assessment_error: session.assessment_error.clone(),
            questionnaire_submitted: session.responses.is_some(),
            optimization_error: session.optimization_error.clone(),
            resume_ready: session.optimized_resume.is_some(),
            questions_ready: session.interview_questions.is_some(),
            cover_letter_available: session.cover_letter.is_some(),
            cover_letter_error: session.cover_letter_error.clone(),
        }
    }
}

/// In-memory session store. Nothing survives a restart.
pub type SessionStore = Arc<RwLock<HashMap<Uuid, Session>>>;

pub fn new_session_store() -> SessionStore {
    Arc::new(RwLock::new(HashMap::new()))
}

// ────────────────────────────────────────────────────────────────────────────
// Stage drivers
// ────────────────────────────────────────────────────────────────────────────

/// Upload pipeline: extract text, then run the assessment stage.
///
/// Extraction failures leave the session untouched. Assessment failures are
/// recorded on the session and also returned to the caller.
pub async fn run_upload(
    store: &SessionStore,
    gateway: &dyn LlmGateway,
    session_id: Uuid,
    pdf_bytes: &[u8],
) -> Result<SessionView, AppError> {
    let resume_text = extract_resume_text(pdf_bytes)?;

    let epoch = {
        let mut sessions = store.write().await;
        let session = get_session_mut(&mut sessions, session_id)?;
        session.begin_assessment(resume_text.clone())?;
        session.epoch
    };

    info!("session {session_id}: resume extracted, running assessment");
    let result = assess_resume(gateway, &resume_text).await;

    let mut sessions = store.write().await;
    let session = get_session_mut(&mut sessions, session_id)?;
    if session.epoch != epoch {
        warn!("session {session_id}: assessment result discarded (session was reset)");
        return Err(AppError::Conflict(
            "The session was reset while processing".to_string(),
        ));
    }

    match result {
        Ok(assessment) => {
            session.complete_assessment(assessment);
            Ok(SessionView::from(&*session))
        }
        Err(e) => {
            session.fail_assessment(e.to_string());
            Err(e)
        }
    }
}

/// Questionnaire pipeline: validate answers, then run the three generation
/// stages in sequence. Resume and questions are mandatory; the cover letter
/// may fail without blocking delivery.
pub async fn run_questionnaire(
    store: &SessionStore,
    gateway: &dyn LlmGateway,
    session_id: Uuid,
    responses: UserResponses,
) -> Result<SessionView, AppError> {
    let (resume_text, assessment, responses, epoch) = {
        let mut sessions = store.write().await;
        let session = get_session_mut(&mut sessions, session_id)?;
        session.submit_questionnaire(responses)?;
        (
            session.resume_text.clone().ok_or_else(|| {
                AppError::Internal(anyhow::anyhow!("questionnaire open without resume text"))
            })?,
            session.assessment.clone().ok_or_else(|| {
                AppError::Internal(anyhow::anyhow!("questionnaire open without assessment"))
            })?,
            session.responses.clone().ok_or_else(|| {
                AppError::Internal(anyhow::anyhow!("questionnaire submitted but not stored"))
            })?,
            session.epoch,
        )
    };

    info!("session {session_id}: questionnaire accepted, optimizing");

    let optimized = match optimize_resume(gateway, &resume_text, &assessment, &responses).await {
        Ok(resume) => resume,
        Err(e) => return record_optimization_failure(store, session_id, epoch, e).await,
    };

    let questions = match generate_interview_questions(gateway, &assessment, &responses).await {
        Ok(set) => set,
        Err(e) => return record_optimization_failure(store, session_id, epoch, e).await,
    };

    let cover_letter = generate_cover_letter(
        gateway,
        &optimized,
        &responses,
        &CoverLetterTarget::default(),
    )
    .await
    .map_err(|e| {
        warn!("session {session_id}: cover letter failed (delivery proceeds): {e}");
        e.to_string()
    });

    let mut sessions = store.write().await;
    let session = get_session_mut(&mut sessions, session_id)?;
    if session.epoch != epoch {
        warn!("session {session_id}: optimization result discarded (session was reset)");
        return Err(AppError::Conflict(
            "The session was reset while processing".to_string(),
        ));
    }

    session.complete_optimization(optimized, questions, cover_letter);
    info!("session {session_id}: delivering");
    Ok(SessionView::from(&*session))
}

/// Cover letter regeneration while Delivering — replace-in-place, state
/// unchanged.
pub async fn run_cover_letter(
    store: &SessionStore,
    gateway: &dyn LlmGateway,
    session_id: Uuid,
    target: CoverLetterTarget,
) -> Result<String, AppError> {
    let (resume, responses, epoch) = {
        let sessions = store.read().await;
        let session = get_session(&sessions, session_id)?;
        if session.stage != WorkflowStage::Delivering {
            return Err(AppError::Conflict(
                "Cover letter regeneration is only available after delivery".to_string(),
            ));
        }
        (
            session.optimized_resume.clone().ok_or_else(|| {
                AppError::Internal(anyhow::anyhow!("delivering without an optimized resume"))
            })?,
            session.responses.clone().ok_or_else(|| {
                AppError::Internal(anyhow::anyhow!("delivering without questionnaire answers"))
            })?,
            session.epoch,
        )
    };

    let result = generate_cover_letter(gateway, &resume, &responses, &target).await;

    let mut sessions = store.write().await;
    let session = get_session_mut(&mut sessions, session_id)?;
    if session.epoch != epoch {
        warn!("session {session_id}: cover letter discarded (session was reset)");
        return Err(AppError::Conflict(
            "The session was reset while processing".to_string(),
        ));
    }

    match result {
        Ok(letter) => {
            session.replace_cover_letter(Ok(letter.clone()));
            Ok(letter)
        }
        Err(e) => {
            session.replace_cover_letter(Err(e.to_string()));
            Err(e)
        }
    }
}

async fn record_optimization_failure(
    store: &SessionStore,
    session_id: Uuid,
    epoch: u64,
    error: AppError,
) -> Result<SessionView, AppError> {
    let mut sessions = store.write().await;
    if let Ok(session) = get_session_mut(&mut sessions, session_id) {
        if session.epoch == epoch {
            session.fail_optimization(error.to_string());
        }
    }
    Err(error)
}

pub fn get_session<'a>(
    sessions: &'a HashMap<Uuid, Session>,
    id: Uuid,
) -> Result<&'a Session, AppError> {
    sessions
        .get(&id)
        .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))
}

pub fn get_session_mut<'a>(
    sessions: &'a mut HashMap<Uuid, Session>,
    id: Uuid,
) -> Result<&'a mut Session, AppError> {
    sessions
        .get_mut(&id)
        .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))
}
