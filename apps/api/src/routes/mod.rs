pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::handlers;
use crate::state::AppState;

/// Multipart framing on top of the file itself.
const UPLOAD_OVERHEAD_BYTES: usize = 64 * 1024;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes + UPLOAD_OVERHEAD_BYTES;

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/analyses", post(handlers::handle_upload))
        .route("/api/v1/analyses/text", post(handlers::handle_analyze_text))
        .route("/api/v1/analyses/:id", get(handlers::handle_get_analysis))
        .route(
            "/api/v1/analyses/:id/job-matches",
            post(handlers::handle_match_job),
        )
        .route("/api/v1/job-matches/:id", get(handlers::handle_get_job_match))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
