use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::models::profile::ProfileRow;

/// Editable profile fields. `None` clears the stored value.
#[derive(Debug, Clone, Default)]
pub struct ProfileFields {
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub linkedin_url: Option<String>,
    pub github_url: Option<String>,
    pub portfolio_url: Option<String>,
}

pub async fn get_profile(pool: &PgPool, user_id: Uuid) -> sqlx::Result<Option<ProfileRow>> {
    sqlx::query_as::<_, ProfileRow>("SELECT * FROM profiles WHERE user_id = $1")
        .bind(user_id)
        .fetch_optional(pool)
        .await
}

/// Inserts or replaces the profile owned by `user_id`.
pub async fn upsert_profile(
    pool: &PgPool,
    user_id: Uuid,
    fields: ProfileFields,
) -> sqlx::Result<ProfileRow> {
    let row = sqlx::query_as::<_, ProfileRow>(
        r#"
        INSERT INTO profiles
            (id, user_id, full_name, phone, location, linkedin_url, github_url, portfolio_url)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        ON CONFLICT (user_id) DO UPDATE SET
            full_name = EXCLUDED.full_name,
            phone = EXCLUDED.phone,
            location = EXCLUDED.location,
            linkedin_url = EXCLUDED.linkedin_url,
            github_url = EXCLUDED.github_url,
            portfolio_url = EXCLUDED.portfolio_url,
            updated_at = now()
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(fields.full_name)
    .bind(fields.phone)
    .bind(fields.location)
    .bind(fields.linkedin_url)
    .bind(fields.github_url)
    .bind(fields.portfolio_url)
    .fetch_one(pool)
    .await?;

    info!("Upserted profile for user {user_id}");
    Ok(row)
}
