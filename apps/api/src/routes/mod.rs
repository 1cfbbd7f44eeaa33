pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::state::AppState;
use crate::workflow::handlers;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Session lifecycle
        .route("/api/v1/sessions", post(handlers::handle_create_session))
        .route("/api/v1/sessions/:id", get(handlers::handle_get_session))
        .route(
            "/api/v1/sessions/:id/reset",
            post(handlers::handle_reset_session),
        )
        // Workflow stages
        .route(
            "/api/v1/sessions/:id/resume",
            post(handlers::handle_upload_resume).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route(
            "/api/v1/sessions/:id/questionnaire",
            post(handlers::handle_submit_questionnaire),
        )
        .route(
            "/api/v1/sessions/:id/cover-letter",
            post(handlers::handle_regenerate_cover_letter),
        )
        // Artifact downloads
        .route(
            "/api/v1/sessions/:id/artifacts/resume",
            get(handlers::handle_download_resume),
        )
        .route(
            "/api/v1/sessions/:id/artifacts/report",
            get(handlers::handle_download_report),
        )
        .route(
            "/api/v1/sessions/:id/artifacts/cover-letter",
            get(handlers::handle_download_cover_letter),
        )
        .route(
            "/api/v1/sessions/:id/artifacts/portfolio",
            get(handlers::handle_download_portfolio),
        )
        .with_state(state)
}
