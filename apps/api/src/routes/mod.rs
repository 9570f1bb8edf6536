pub mod health;

use axum::{
    http::{header, HeaderName, Method},
    routing::{get, patch, post},
    Router,
};
use serde::Deserialize;
use tower_http::cors::{Any, CorsLayer};
use uuid::Uuid;

use crate::state::AppState;
use crate::{career, jobs, profile, resume};

/// Owner filter shared by the list endpoints.
#[derive(Debug, Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

/// Any origin; a fixed set of request headers. Preflights get an empty 200.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::AUTHORIZATION,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
            header::CONTENT_TYPE,
        ])
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Résumés
        .route("/api/v1/resumes/analyze", post(resume::handlers::handle_analyze))
        .route("/api/v1/resumes/upload", post(resume::handlers::handle_upload))
        .route(
            "/api/v1/resumes",
            post(resume::handlers::handle_save).get(resume::handlers::handle_list),
        )
        // Career paths
        .route(
            "/api/v1/career-paths/generate",
            post(career::handlers::handle_generate),
        )
        .route(
            "/api/v1/career-paths",
            post(career::handlers::handle_save).get(career::handlers::handle_list),
        )
        // Jobs
        .route("/api/v1/jobs/search", post(jobs::handlers::handle_search))
        .route(
            "/api/v1/job-matches",
            post(jobs::handlers::handle_save).get(jobs::handlers::handle_list),
        )
        .route(
            "/api/v1/job-matches/:id/status",
            patch(jobs::handlers::handle_update_status),
        )
        // Profile
        .route(
            "/api/v1/profile",
            get(profile::handlers::handle_get).put(profile::handlers::handle_put),
        )
        .layer(cors_layer())
        .with_state(state)
}
