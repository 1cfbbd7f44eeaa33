//! Axum route handlers for the session workflow.
//!
//! Handlers stay thin: decode the request, delegate to the stage drivers in
//! [`super`], shape the response. Artifact downloads render on demand from
//! session data and carry date-stamped filenames.

use axum::{
    extract::{Multipart, Path, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::generation::CoverLetterTarget;
use crate::models::questionnaire::UserResponses;
use crate::render::portfolio::render_portfolio_html;
use crate::render::report_pdf::render_report_pdf;
use crate::render::resume_pdf::render_resume_pdf;
use crate::render::stamped_filename;
use crate::state::AppState;
use crate::workflow::{get_session, get_session_mut, Session, SessionView};

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct CreateSessionResponse {
    pub session: SessionView,
}

#[derive(Debug, Deserialize)]
pub struct CoverLetterRequest {
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub job_description: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CoverLetterResponse {
    pub cover_letter: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Session lifecycle
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/sessions
///
/// Creates a fresh session in Uploading.
pub async fn handle_create_session(
    State(state): State<AppState>,
) -> Result<Json<CreateSessionResponse>, AppError> {
    let session = Session::new();
    let view = SessionView::from(&session);
    state.sessions.write().await.insert(session.id, session);
    Ok(Json(CreateSessionResponse { session: view }))
}

/// GET /api/v1/sessions/:id
///
/// Current stage plus per-stage errors — everything the UI needs to decide
/// what to show.
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    let sessions = state.sessions.read().await;
    let session = get_session(&sessions, session_id)?;
    Ok(Json(SessionView::from(session)))
}

/// POST /api/v1/sessions/:id/reset
///
/// Clears the whole aggregate and returns to Uploading.
pub async fn handle_reset_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    let mut sessions = state.sessions.write().await;
    let session = get_session_mut(&mut sessions, session_id)?;
    session.reset();
    Ok(Json(SessionView::from(&*session)))
}

// ────────────────────────────────────────────────────────────────────────────
// Workflow stages
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/sessions/:id/resume (multipart)
///
/// Accepts the PDF upload, extracts its text, and runs the assessment stage.
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    multipart: Multipart,
) -> Result<Json<SessionView>, AppError> {
    let pdf_bytes = read_upload(multipart).await?;
    let view = super::run_upload(&state.sessions, state.llm.as_ref(), session_id, &pdf_bytes)
        .await?;
    Ok(Json(view))
}

/// POST /api/v1/sessions/:id/questionnaire
///
/// Validates the questionnaire and runs the optimization stages: ATS resume,
/// interview questions, cover letter (non-fatal).
pub async fn handle_submit_questionnaire(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(responses): Json<UserResponses>,
) -> Result<Json<SessionView>, AppError> {
    let view =
        super::run_questionnaire(&state.sessions, state.llm.as_ref(), session_id, responses)
            .await?;
    Ok(Json(view))
}

/// POST /api/v1/sessions/:id/cover-letter
///
/// Regenerates the cover letter with optional targeting, replacing the
/// single slot in place.
pub async fn handle_regenerate_cover_letter(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<CoverLetterRequest>,
) -> Result<Json<CoverLetterResponse>, AppError> {
    let target = CoverLetterTarget {
        company_name: request.company_name,
        job_description: request.job_description,
    };
    let cover_letter =
        super::run_cover_letter(&state.sessions, state.llm.as_ref(), session_id, target).await?;
    Ok(Json(CoverLetterResponse { cover_letter }))
}

// ────────────────────────────────────────────────────────────────────────────
// Artifact downloads
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/sessions/:id/artifacts/resume
pub async fn handle_download_resume(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Response, AppError> {
    let resume = {
        let sessions = state.sessions.read().await;
        let session = get_session(&sessions, session_id)?;
        session
            .optimized_resume
            .clone()
            .ok_or_else(|| AppError::Conflict("The optimized resume is not ready yet".to_string()))?
    };
    let bytes = render_resume_pdf(&resume)?;
    Ok(attachment(
        bytes,
        "application/pdf",
        &stamped_filename("resume", "pdf", Utc::now().date_naive()),
    ))
}

/// GET /api/v1/sessions/:id/artifacts/report
pub async fn handle_download_report(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Response, AppError> {
    let (assessment, questions) = {
        let sessions = state.sessions.read().await;
        let session = get_session(&sessions, session_id)?;
        let assessment = session
            .assessment
            .clone()
            .ok_or_else(|| AppError::Conflict("No assessment available yet".to_string()))?;
        (assessment, session.interview_questions.clone())
    };
    let bytes = render_report_pdf(&assessment, questions.as_ref())?;
    Ok(attachment(
        bytes,
        "application/pdf",
        &stamped_filename("assessment", "pdf", Utc::now().date_naive()),
    ))
}

/// GET /api/v1/sessions/:id/artifacts/cover-letter
///
/// 404 while the letter is unavailable — the download control is absent, the
/// rest of delivery is not blocked.
pub async fn handle_download_cover_letter(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Response, AppError> {
    let letter = {
        let sessions = state.sessions.read().await;
        let session = get_session(&sessions, session_id)?;
        session
            .cover_letter
            .clone()
            .ok_or_else(|| AppError::NotFound("Cover letter not yet available".to_string()))?
    };
    Ok(attachment(
        letter.into_bytes(),
        "text/plain; charset=utf-8",
        &stamped_filename("cover_letter", "txt", Utc::now().date_naive()),
    ))
}

/// GET /api/v1/sessions/:id/artifacts/portfolio
pub async fn handle_download_portfolio(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Response, AppError> {
    let (resume, responses) = {
        let sessions = state.sessions.read().await;
        let session = get_session(&sessions, session_id)?;
        let resume = session
            .optimized_resume
            .clone()
            .ok_or_else(|| AppError::Conflict("The optimized resume is not ready yet".to_string()))?;
        let responses = session
            .responses
            .clone()
            .ok_or_else(|| AppError::Conflict("Questionnaire answers are missing".to_string()))?;
        (resume, responses)
    };
    let html = render_portfolio_html(&resume, &responses);
    Ok(attachment(
        html.into_bytes(),
        "text/html; charset=utf-8",
        &stamped_filename("portfolio", "html", Utc::now().date_naive()),
    ))
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

/// Pulls the uploaded PDF out of the multipart body: the `file` field, or
/// failing that the first field that carries a filename.
async fn read_upload(mut multipart: Multipart) -> Result<Bytes, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart upload: {e}")))?
    {
        let is_file = field.name() == Some("file") || field.file_name().is_some();
        if is_file {
            return field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")));
        }
    }
    Err(AppError::Validation(
        "The upload must contain a PDF file field".to_string(),
    ))
}

fn attachment(bytes: Vec<u8>, content_type: &str, filename: &str) -> Response {
    (
        [
            (header::CONTENT_TYPE, content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        bytes,
    )
        .into_response()
}
