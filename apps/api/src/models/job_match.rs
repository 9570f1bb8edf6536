use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobMatchRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub job_title: String,
    pub company: Option<String>,
    pub job_description: Option<String>,
    pub match_score: Option<f64>,
    pub match_reasons: Vec<String>,
    pub salary_range: Option<String>,
    pub location: Option<String>,
    pub job_url: String,
    /// One of `JobStatus`; the table CHECK constraint keeps it in range.
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
