//! Storage boundary for access profiles.
//!
//! Grants live in a JSONB column on the users table and are validated
//! into the typed grant shape here; malformed data never reaches the
//! resolver.

use sqlx::PgPool;
use uuid::Uuid;

use super::models::{AccessGrant, UserAccessProfile};

#[derive(Debug, sqlx::FromRow)]
struct ProfileRow {
    user_id: Uuid,
    company_id: Option<Uuid>,
    role: Option<String>,
    is_company_owner: bool,
    access_grants: serde_json::Value,
}

/// Load a user's access profile.
///
/// Returns `Ok(None)` for an unknown user and for rows whose stored grant
/// data does not deserialize into the typed shape; callers treat both as
/// zero access.
#[tracing::instrument(skip(pool))]
pub async fn fetch_access_profile(
    pool: &PgPool,
    user_id: Uuid,
) -> sqlx::Result<Option<UserAccessProfile>> {
    let row: Option<ProfileRow> = sqlx::query_as(
        r"
        SELECT id AS user_id, company_id, role, is_company_owner, access_grants
        FROM users
        WHERE id = $1
        ",
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    let Some(row) = row else {
        return Ok(None);
    };

    match serde_json::from_value::<Vec<AccessGrant>>(row.access_grants) {
        Ok(access_grants) => Ok(Some(UserAccessProfile {
            user_id: row.user_id,
            company_id: row.company_id,
            role: row.role,
            is_company_owner: row.is_company_owner,
            access_grants,
        })),
        Err(err) => {
            tracing::warn!(
                user_id = %row.user_id,
                error = %err,
                "Rejecting malformed access_grants; user resolves to zero access"
            );
            Ok(None)
        }
    }
}

/// Replace a user's grant list.
///
/// Returns `true` if a row was updated.
#[tracing::instrument(skip(pool, grants))]
pub async fn update_access_grants(
    pool: &PgPool,
    user_id: Uuid,
    grants: &[AccessGrant],
) -> sqlx::Result<bool> {
    let grants = serde_json::to_value(grants).map_err(|e| sqlx::Error::Encode(Box::new(e)))?;

    let result = sqlx::query(
        r"
        UPDATE users
        SET access_grants = $2, updated_at = NOW()
        WHERE id = $1
        ",
    )
    .bind(user_id)
    .bind(grants)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
