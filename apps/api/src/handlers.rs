//! Axum route handlers for the Analysis API.

use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    Json,
};
use bytes::Bytes;
use serde::Deserialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::analysis::extraction::{extract_text, ExtractionError};
use crate::analysis::{analyze, FileMeta, ResumeAnalysis};
use crate::errors::AppError;
use crate::job_match::{match_job, JobMatch, JobMatchRequest};
use crate::state::AppState;

const FILE_FIELD: &str = "file";

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalyzeTextRequest {
    pub file_name: String,
    pub text: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analyses
///
/// Multipart upload with a `file` field (PDF, TXT or MD). Extracts the text,
/// analyzes it and stores the result for later job matching.
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<ResumeAnalysis>), AppError> {
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let file_name = field.file_name().unwrap_or("upload").to_string();
        let content_type = field.content_type().map(str::to_string);
        let bytes: Bytes = field.bytes().await.map_err(multipart_error)?;

        if bytes.len() > state.config.max_upload_bytes {
            return Err(AppError::PayloadTooLarge(format!(
                "'{file_name}' is {} bytes; the limit is {}",
                bytes.len(),
                state.config.max_upload_bytes
            )));
        }

        let meta = FileMeta {
            file_name: file_name.clone(),
            file_size: bytes.len() as u64,
        };
        let text = extract_off_thread(meta.file_name.clone(), move || {
            extract_text(&file_name, content_type.as_deref(), &bytes)
        })
        .await?;

        let analysis = analyze_and_store(&state, text, meta).await?;
        return Ok((StatusCode::CREATED, Json(analysis)));
    }

    Err(AppError::Validation(format!(
        "multipart field '{FILE_FIELD}' is required"
    )))
}

/// POST /api/v1/analyses/text
///
/// Analyzes text that was already extracted on the client.
pub async fn handle_analyze_text(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeTextRequest>,
) -> Result<(StatusCode, Json<ResumeAnalysis>), AppError> {
    if request.text.trim().is_empty() {
        return Err(AppError::Validation("text cannot be empty".to_string()));
    }

    let meta = FileMeta {
        file_name: request.file_name,
        file_size: request.text.len() as u64,
    };
    let analysis = analyze_and_store(&state, request.text, meta).await?;
    Ok((StatusCode::CREATED, Json(analysis)))
}

/// GET /api/v1/analyses/:id
pub async fn handle_get_analysis(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ResumeAnalysis>, AppError> {
    Ok(Json(load_analysis(&state, id).await?))
}

/// POST /api/v1/analyses/:id/job-matches
///
/// Compares a stored analysis with a job description. The description must meet
/// the configured minimum length before the engine runs.
pub async fn handle_match_job(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<JobMatchRequest>,
) -> Result<(StatusCode, Json<JobMatch>), AppError> {
    if request.job_title.trim().is_empty() {
        return Err(AppError::Validation("job_title cannot be empty".to_string()));
    }
    let min_chars = state.config.min_job_description_chars;
    if request.job_description.trim().chars().count() < min_chars {
        return Err(AppError::Validation(format!(
            "job_description must be at least {min_chars} characters"
        )));
    }

    let analysis = load_analysis(&state, id).await?;
    let job_match = match_job(&analysis, request).await?;

    state
        .store
        .save_job_match(&job_match)
        .await
        .map_err(|e| AppError::Store(format!("{e:#}")))?;

    Ok((StatusCode::CREATED, Json(job_match)))
}

/// GET /api/v1/job-matches/:id
pub async fn handle_get_job_match(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<JobMatch>, AppError> {
    let job_match = state
        .store
        .load_job_match(id)
        .await
        .map_err(|e| AppError::Store(format!("{e:#}")))?
        .ok_or_else(|| AppError::NotFound(format!("Job match {id} not found")))?;
    Ok(Json(job_match))
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

async fn analyze_and_store(
    state: &AppState,
    text: String,
    meta: FileMeta,
) -> Result<ResumeAnalysis, AppError> {
    let analysis = analyze(text, meta).await?;
    state
        .store
        .save_analysis(&analysis)
        .await
        .map_err(|e| AppError::Store(format!("{e:#}")))?;
    info!(analysis_id = %analysis.id, "analysis stored");
    Ok(analysis)
}

async fn load_analysis(state: &AppState, id: Uuid) -> Result<ResumeAnalysis, AppError> {
    state
        .store
        .load_analysis(id)
        .await
        .map_err(|e| AppError::Store(format!("{e:#}")))?
        .ok_or_else(|| AppError::NotFound(format!("Analysis {id} not found")))
}

/// Runs an extractor on the blocking pool. A decoder that panics on a malformed
/// document is reported as an unreadable upload.
async fn extract_off_thread<F>(file_name: String, extract: F) -> Result<String, AppError>
where
    F: FnOnce() -> Result<String, ExtractionError> + Send + 'static,
{
    let text = tokio::task::spawn_blocking(extract).await.map_err(|e| {
        warn!(file_name = %file_name, error = %e, "text extraction aborted");
        AppError::UnprocessableEntity(format!("Could not read '{file_name}'"))
    })??;
    Ok(text)
}

fn multipart_error(e: axum::extract::multipart::MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(e.body_text())
    } else {
        AppError::Validation(format!("Malformed multipart body: {}", e.body_text()))
    }
}
