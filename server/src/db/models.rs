//! User directory models.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// A platform user account.
///
/// `access_grants` is read through the permissions storage boundary, not
/// here; this model carries the identity and company fields.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub display_name: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Display role (landlord, agent, property manager).
    pub role: Option<String>,
    pub company_id: Option<Uuid>,
    pub is_company_owner: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
