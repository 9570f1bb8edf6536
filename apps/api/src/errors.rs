use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Map, Value};
use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Reply-parsing problems never surface here: they are absorbed by the
/// extraction fallbacks in `assistant`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unprocessable entity: {0}")]
    UnprocessableEntity(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("{context}: {source}")]
    Upstream {
        context: &'static str,
        #[source]
        source: LlmError,
    },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::UnprocessableEntity(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Configuration(_)
            | AppError::Upstream { .. }
            | AppError::Database(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (code, message, details) = match &self {
            AppError::NotFound(msg) => ("NOT_FOUND", msg.clone(), None),
            AppError::Validation(msg) => ("VALIDATION_ERROR", msg.clone(), None),
            AppError::UnprocessableEntity(msg) => ("UNPROCESSABLE_ENTITY", msg.clone(), None),
            AppError::Conflict(msg) => ("CONFLICT", msg.clone(), None),
            AppError::Configuration(msg) => {
                tracing::error!("Configuration error: {msg}");
                ("CONFIGURATION_ERROR", msg.clone(), None)
            }
            AppError::Upstream { context, source } => {
                tracing::error!("{context}: {source}");
                ("UPSTREAM_ERROR", context.to_string(), Some(source.to_string()))
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {e}");
                (
                    "DATABASE_ERROR",
                    "A database error occurred".to_string(),
                    None,
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                    None,
                )
            }
        };

        let mut body = Map::new();
        body.insert("error".to_string(), json!(message));
        body.insert("code".to_string(), json!(code));
        if let Some(details) = details {
            body.insert("details".to_string(), json!(details));
        }

        (self.status(), Json(Value::Object(body))).into_response()
    }
}
