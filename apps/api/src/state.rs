use sqlx::PgPool;

use crate::assistant::Assistant;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything here is a cheap, immutable handle; handlers share no mutable state.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// Model access with the Gemini credential already injected.
    pub assistant: Assistant,
}
