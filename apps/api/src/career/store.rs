use serde_json::Value;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::models::career_path::CareerPathRow;

pub struct NewCareerPath<'a> {
    pub user_id: Uuid,
    pub current_role: &'a str,
    pub target_role: &'a str,
    pub timeline_months: i32,
    /// Generated plan, stored whole and mined for skills, milestones and resources.
    pub plan: &'a Value,
}

/// Splits a plan into the skills, milestones and resources columns.
fn plan_columns(plan: &Value) -> (Vec<String>, Value, Value) {
    let required_skills = plan
        .get("skills")
        .and_then(|v| v.as_array())
        .map(|arr| arr.iter().filter_map(|s| s.as_str().map(String::from)).collect())
        .unwrap_or_default();
    let milestones = plan
        .get("milestones")
        .cloned()
        .unwrap_or_else(|| Value::Array(Vec::new()));
    let resources = plan
        .get("resources")
        .cloned()
        .unwrap_or_else(|| Value::Object(Default::default()));
    (required_skills, milestones, resources)
}

pub async fn insert_career_path(
    pool: &PgPool,
    path: NewCareerPath<'_>,
) -> sqlx::Result<CareerPathRow> {
    let (required_skills, milestones, resources) = plan_columns(path.plan);

    let row = sqlx::query_as::<_, CareerPathRow>(
        r#"
        INSERT INTO career_paths
            (id, user_id, "current_role", target_role, timeline_months,
             required_skills, milestones, learning_resources, ai_recommendations)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(path.user_id)
    .bind(path.current_role)
    .bind(path.target_role)
    .bind(path.timeline_months)
    .bind(&required_skills)
    .bind(&milestones)
    .bind(&resources)
    .bind(path.plan)
    .fetch_one(pool)
    .await?;

    info!("Saved career path {} for user {}", row.id, row.user_id);
    Ok(row)
}

pub async fn list_career_paths(pool: &PgPool, user_id: Uuid) -> sqlx::Result<Vec<CareerPathRow>> {
    sqlx::query_as::<_, CareerPathRow>(
        "SELECT * FROM career_paths WHERE user_id = $1 ORDER BY created_at DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}
