use serde_json::Number;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::jobs::links::resolve_link;
use crate::jobs::search::JobListing;
use crate::jobs::status::JobStatus;
use crate::models::job_match::JobMatchRow;

/// The trimmed title, and the link as it will be stored.
fn title_and_link(job: &JobListing) -> Result<(&str, String), AppError> {
    let title = job
        .title
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AppError::Validation("job.title is required".to_string()))?;
    let link = resolve_link(Some(&job.url), Some(title), job.location.as_deref());
    Ok((title, link))
}

/// Saves a listing as a new match in the `interested` state.
pub async fn insert_job_match(
    pool: &PgPool,
    user_id: Uuid,
    job: &JobListing,
) -> Result<JobMatchRow, AppError> {
    let (title, job_url) = title_and_link(job)?;

    let row = sqlx::query_as::<_, JobMatchRow>(
        r#"
        INSERT INTO job_matches
            (id, user_id, job_title, company, job_description, match_score,
             match_reasons, salary_range, location, job_url, status)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(title)
    .bind(job.company.as_deref())
    .bind(job.description.as_deref())
    .bind(job.match_score.as_ref().and_then(Number::as_f64))
    .bind(job.match_reasons.clone().unwrap_or_default())
    .bind(job.salary.as_deref())
    .bind(job.location.as_deref())
    .bind(job_url)
    .bind(JobStatus::Interested.as_str())
    .fetch_one(pool)
    .await?;

    info!("Saved job match {} for user {}", row.id, user_id);
    Ok(row)
}

pub async fn list_job_matches(pool: &PgPool, user_id: Uuid) -> sqlx::Result<Vec<JobMatchRow>> {
    sqlx::query_as::<_, JobMatchRow>(
        "SELECT * FROM job_matches WHERE user_id = $1 ORDER BY created_at DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

/// Checks a transition against the stored status of the match, if any.
/// Returns the current status the UPDATE must still find.
fn check_transition(id: Uuid, stored: Option<&str>, next: JobStatus) -> Result<JobStatus, AppError> {
    let stored = stored.ok_or_else(|| AppError::NotFound(format!("Job match {id} not found")))?;
    let current: JobStatus = stored
        .parse()
        .map_err(|e: String| AppError::Internal(anyhow::anyhow!(e)))?;

    if !current.can_transition_to(next) {
        return Err(AppError::Conflict(format!(
            "Cannot change job status from {current} to {next}"
        )));
    }
    Ok(current)
}

/// An UPDATE guarded by the old status that matched nothing lost a race.
fn require_updated<T>(id: Uuid, updated: Option<T>) -> Result<T, AppError> {
    updated.ok_or_else(|| AppError::Conflict(format!("Job match {id} was modified concurrently")))
}

/// Moves a match to `next` if the current status allows it.
///
/// The UPDATE is conditional on the status read a moment earlier, so of two
/// racing transitions only one can win; the loser gets a conflict.
pub async fn transition_job_status(
    pool: &PgPool,
    id: Uuid,
    user_id: Uuid,
    next: JobStatus,
) -> Result<JobMatchRow, AppError> {
    let stored: Option<String> =
        sqlx::query_scalar("SELECT status FROM job_matches WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await?;
    let current = check_transition(id, stored.as_deref(), next)?;

    let updated = sqlx::query_as::<_, JobMatchRow>(
        r#"
        UPDATE job_matches
        SET status = $1, updated_at = now()
        WHERE id = $2 AND user_id = $3 AND status = $4
        RETURNING *
        "#,
    )
    .bind(next.as_str())
    .bind(id)
    .bind(user_id)
    .bind(current.as_str())
    .fetch_optional(pool)
    .await?;
    let updated = require_updated(id, updated)?;

    info!("Job match {id} moved from {current} to {next}");
    Ok(updated)
}
