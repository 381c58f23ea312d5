//! User directory queries.

use sqlx::PgPool;
use uuid::Uuid;

use super::models::User;

/// Find a user by ID.
pub async fn find_user_by_id(pool: &PgPool, id: Uuid) -> sqlx::Result<Option<User>> {
    sqlx::query_as::<_, User>(
        r"
        SELECT id, email, display_name, password_hash, role, company_id,
               is_company_owner, created_at, updated_at
        FROM users
        WHERE id = $1
        ",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Find a user by email (case-insensitive).
pub async fn find_user_by_email(pool: &PgPool, email: &str) -> sqlx::Result<Option<User>> {
    sqlx::query_as::<_, User>(
        r"
        SELECT id, email, display_name, password_hash, role, company_id,
               is_company_owner, created_at, updated_at
        FROM users
        WHERE lower(email) = lower($1)
        ",
    )
    .bind(email)
    .fetch_optional(pool)
    .await
}
