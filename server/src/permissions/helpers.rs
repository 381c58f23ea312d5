//! Permission helper functions for API handlers.
//!
//! Combine the profile load and the check in a single call.

use sqlx::PgPool;
use uuid::Uuid;

use super::error::PermissionError;
use super::level::AccessLevel;
use super::models::UserAccessProfile;
use super::module::Module;
use super::queries::fetch_access_profile;
use super::resolver;

/// Load a user's profile and require a minimum tier for a module.
///
/// Unknown users, rejected grant data, and insufficient grants all
/// collapse to `MissingAccess`; callers that need to distinguish denial
/// from misconfiguration inspect the grant data themselves.
///
/// # Example
///
/// ```ignore
/// let actor = require_module_access(&pool, user_id, Module::UserManagement, AccessLevel::Manage)
///     .await?;
/// ```
#[tracing::instrument(skip(pool))]
pub async fn require_module_access(
    pool: &PgPool,
    user_id: Uuid,
    module: Module,
    required: AccessLevel,
) -> Result<UserAccessProfile, PermissionError> {
    let profile = fetch_access_profile(pool, user_id)
        .await
        .map_err(|e| PermissionError::Database(e.to_string()))?;

    match profile {
        Some(profile) if resolver::has_access(Some(&profile), module, required) => Ok(profile),
        _ => Err(PermissionError::MissingAccess { module, required }),
    }
}
