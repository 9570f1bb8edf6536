//! Axum route handlers for job search and saved job matches.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::jobs::search::{search_jobs, JobListing, JobSearchRequest, JobSearchResults};
use crate::jobs::status::JobStatus;
use crate::jobs::store::{insert_job_match, list_job_matches, transition_job_status};
use crate::models::job_match::JobMatchRow;
use crate::routes::UserIdQuery;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SaveJobMatchRequest {
    pub user_id: Uuid,
    pub job: JobListing,
}

#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub user_id: Uuid,
    pub status: JobStatus,
}

/// POST /api/v1/jobs/search
pub async fn handle_search(
    State(state): State<AppState>,
    Json(request): Json<JobSearchRequest>,
) -> Result<Json<JobSearchResults>, AppError> {
    Ok(Json(search_jobs(&state.assistant, &request).await?))
}

/// POST /api/v1/job-matches
pub async fn handle_save(
    State(state): State<AppState>,
    Json(request): Json<SaveJobMatchRequest>,
) -> Result<(StatusCode, Json<JobMatchRow>), AppError> {
    let row = insert_job_match(&state.db, request.user_id, &request.job).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// GET /api/v1/job-matches?user_id=
pub async fn handle_list(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<JobMatchRow>>, AppError> {
    Ok(Json(list_job_matches(&state.db, params.user_id).await?))
}

/// PATCH /api/v1/job-matches/:id/status
pub async fn handle_update_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateStatusRequest>,
) -> Result<Json<JobMatchRow>, AppError> {
    let row = transition_job_status(&state.db, id, request.user_id, request.status).await?;
    Ok(Json(row))
}
