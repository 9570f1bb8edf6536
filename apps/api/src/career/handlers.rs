//! Axum route handlers for the Career Path API.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;

use crate::career::plan::{generate_career_path, CareerPathRequest, CareerPlan};
use crate::career::store::{insert_career_path, list_career_paths, NewCareerPath};
use crate::errors::AppError;
use crate::models::career_path::CareerPathRow;
use crate::routes::UserIdQuery;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SaveCareerPathRequest {
    pub user_id: Uuid,
    pub current_role: String,
    pub target_role: String,
    pub timeline_months: i32,
    pub plan: Value,
}

/// POST /api/v1/career-paths/generate
///
/// Generates a plan. Persisting it is a separate call.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<CareerPathRequest>,
) -> Result<Json<CareerPlan>, AppError> {
    let plan = generate_career_path(&state.assistant, &request).await?;
    Ok(Json(plan))
}

/// POST /api/v1/career-paths
pub async fn handle_save(
    State(state): State<AppState>,
    Json(request): Json<SaveCareerPathRequest>,
) -> Result<(StatusCode, Json<CareerPathRow>), AppError> {
    if request.current_role.trim().is_empty() || request.target_role.trim().is_empty() {
        return Err(AppError::Validation(
            "current_role and target_role are required".to_string(),
        ));
    }
    if request.timeline_months <= 0 {
        return Err(AppError::Validation(
            "timeline_months must be positive".to_string(),
        ));
    }

    let row = insert_career_path(
        &state.db,
        NewCareerPath {
            user_id: request.user_id,
            current_role: &request.current_role,
            target_role: &request.target_role,
            timeline_months: request.timeline_months,
            plan: &request.plan,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(row)))
}

/// GET /api/v1/career-paths?user_id=
pub async fn handle_list(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<CareerPathRow>>, AppError> {
    Ok(Json(list_career_paths(&state.db, params.user_id).await?))
}
