use serde_json::Value;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::models::resume::ResumeRow;

pub struct NewResume<'a> {
    pub user_id: Uuid,
    pub title: &'a str,
    pub content: &'a str,
    pub analysis: Option<&'a Value>,
}

/// Inserts a résumé. Skills are lifted from `analysis.skills` when present.
pub async fn insert_resume(pool: &PgPool, resume: NewResume<'_>) -> sqlx::Result<ResumeRow> {
    let skills = resume.analysis.map(skills_from_analysis).unwrap_or_default();

    let row = sqlx::query_as::<_, ResumeRow>(
        r#"
        INSERT INTO resumes (id, user_id, title, content, ai_analysis, skills_extracted)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(resume.user_id)
    .bind(resume.title)
    .bind(resume.content)
    .bind(resume.analysis)
    .bind(&skills)
    .fetch_one(pool)
    .await?;

    info!("Saved resume {} for user {}", row.id, row.user_id);
    Ok(row)
}

pub async fn list_resumes(pool: &PgPool, user_id: Uuid) -> sqlx::Result<Vec<ResumeRow>> {
    sqlx::query_as::<_, ResumeRow>(
        "SELECT * FROM resumes WHERE user_id = $1 ORDER BY created_at DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

/// String items of `analysis.skills`; anything else is ignored.
pub fn skills_from_analysis(analysis: &Value) -> Vec<String> {
    analysis
        .get("skills")
        .and_then(|v| v.as_array())
        .map(|arr| {
            arr.iter()
                .filter_map(|s| s.as_str().map(String::from))
                .collect()
        })
        .unwrap_or_default()
}
