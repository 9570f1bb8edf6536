use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CareerPathRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub current_role: String,
    pub target_role: String,
    pub timeline_months: i32,
    pub required_skills: Vec<String>,
    pub milestones: Value,
    pub learning_resources: Value,
    /// The full plan as returned by generation.
    pub ai_recommendations: Value,
    pub created_at: DateTime<Utc>,
}
