//! Axum route handlers for the Résumé API.

use axum::{
    extract::{Multipart, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::ResumeRow;
use crate::resume::analysis::{analyze_resume, AnalyzeResumeRequest, ResumeAnalysis};
use crate::resume::store::{insert_resume, list_resumes, NewResume};
use crate::resume::upload::{read_upload, UploadedResume};
use crate::routes::UserIdQuery;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SaveResumeRequest {
    pub user_id: Uuid,
    pub title: String,
    pub content: String,
    pub analysis: Option<Value>,
}

/// POST /api/v1/resumes/analyze
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeResumeRequest>,
) -> Result<Json<ResumeAnalysis>, AppError> {
    let analysis = analyze_resume(&state.assistant, &request).await?;
    Ok(Json(analysis))
}

/// POST /api/v1/resumes/upload
///
/// Multipart `file` → `{title, content}`. Nothing is stored.
pub async fn handle_upload(multipart: Multipart) -> Result<Json<UploadedResume>, AppError> {
    Ok(Json(read_upload(multipart).await?))
}

/// POST /api/v1/resumes
pub async fn handle_save(
    State(state): State<AppState>,
    Json(request): Json<SaveResumeRequest>,
) -> Result<(StatusCode, Json<ResumeRow>), AppError> {
    if request.title.trim().is_empty() || request.content.trim().is_empty() {
        return Err(AppError::Validation(
            "Please provide both title and content".to_string(),
        ));
    }

    let row = insert_resume(
        &state.db,
        NewResume {
            user_id: request.user_id,
            title: &request.title,
            content: &request.content,
            analysis: request.analysis.as_ref(),
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(row)))
}

/// GET /api/v1/resumes?user_id=
pub async fn handle_list(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<ResumeRow>>, AppError> {
    Ok(Json(list_resumes(&state.db, params.user_id).await?))
}
