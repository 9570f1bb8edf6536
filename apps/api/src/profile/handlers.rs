//! Axum route handlers for the Profile API.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::config::non_blank;
use crate::errors::AppError;
use crate::models::profile::ProfileRow;
use crate::profile::store::{get_profile, upsert_profile, ProfileFields};
use crate::routes::UserIdQuery;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub user_id: Uuid,
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub linkedin_url: Option<String>,
    pub github_url: Option<String>,
    pub portfolio_url: Option<String>,
}

impl UpdateProfileRequest {
    /// Empty form inputs are stored as NULL.
    fn into_fields(self) -> (Uuid, ProfileFields) {
        let clean = |v: Option<String>| v.and_then(non_blank);
        (
            self.user_id,
            ProfileFields {
                full_name: clean(self.full_name),
                phone: clean(self.phone),
                location: clean(self.location),
                linkedin_url: clean(self.linkedin_url),
                github_url: clean(self.github_url),
                portfolio_url: clean(self.portfolio_url),
            },
        )
    }
}

/// GET /api/v1/profile?user_id=
pub async fn handle_get(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<ProfileRow>, AppError> {
    let profile = get_profile(&state.db, params.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Profile for user {} not found", params.user_id)))?;
    Ok(Json(profile))
}

/// PUT /api/v1/profile
pub async fn handle_put(
    State(state): State<AppState>,
    Json(request): Json<UpdateProfileRequest>,
) -> Result<Json<ProfileRow>, AppError> {
    let (user_id, fields) = request.into_fields();
    Ok(Json(upsert_profile(&state.db, user_id, fields).await?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_inputs_become_null() {
        let request: UpdateProfileRequest = serde_json::from_value(serde_json::json!({
            "user_id": Uuid::nil(),
            "full_name": "  Ada Lovelace ",
            "phone": "",
            "github_url": "https://github.com/ada"
        }))
        .unwrap();

        let (user_id, fields) = request.into_fields();
        assert_eq!(user_id, Uuid::nil());
        assert_eq!(fields.full_name.as_deref(), Some("Ada Lovelace"));
        assert_eq!(fields.phone, None);
        assert_eq!(fields.location, None);
        assert_eq!(fields.github_url.as_deref(), Some("https://github.com/ada"));
    }
}
