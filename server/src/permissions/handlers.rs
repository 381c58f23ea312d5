//! HTTP handlers for access inspection and grant management.

use std::collections::BTreeMap;

use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::AppState;
use crate::auth::AuthUser;

use super::error::PermissionError;
use super::helpers::require_module_access;
use super::level::AccessLevel;
use super::models::{AccessGrant, UserAccessProfile};
use super::module::Module;
use super::queries::{fetch_access_profile, update_access_grants};
use super::resolver;

/// Effective access for one user.
#[derive(Debug, Serialize)]
pub struct AccessView {
    pub user_id: Uuid,
    pub is_company_owner: bool,
    /// Effective tier per module.
    pub effective: BTreeMap<Module, AccessLevel>,
    /// Grant records as stored.
    pub grants: Vec<AccessGrant>,
}

fn access_view(user_id: Uuid, profile: Option<&UserAccessProfile>) -> AccessView {
    let effective = Module::all()
        .iter()
        .map(|&module| (module, resolver::access_level(profile, module)))
        .collect();

    AccessView {
        user_id,
        is_company_owner: profile.is_some_and(|p| p.is_company_owner),
        effective,
        grants: profile.map(|p| p.access_grants.clone()).unwrap_or_default(),
    }
}

/// Members are only visible within their own company.
fn ensure_same_company(
    actor: &UserAccessProfile,
    target: &UserAccessProfile,
) -> Result<(), PermissionError> {
    if actor.company_id.is_some() && actor.company_id == target.company_id {
        Ok(())
    } else {
        Err(PermissionError::UserNotFound)
    }
}

/// GET /api/me/access
///
/// Effective access of the calling user. Open to any authenticated user;
/// callers with no grants simply see `none` everywhere.
pub async fn my_access(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<AccessView>, PermissionError> {
    let profile = fetch_access_profile(&state.db, auth.id)
        .await
        .map_err(|e| PermissionError::Database(e.to_string()))?;

    Ok(Json(access_view(auth.id, profile.as_ref())))
}

/// GET /api/users/{user_id}/access
///
/// Requires `read` on `user_management`.
pub async fn user_access(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(user_id): Path<Uuid>,
) -> Result<Json<AccessView>, PermissionError> {
    let actor =
        require_module_access(&state.db, auth.id, Module::UserManagement, AccessLevel::Read)
            .await?;

    let target = fetch_access_profile(&state.db, user_id)
        .await
        .map_err(|e| PermissionError::Database(e.to_string()))?
        .ok_or(PermissionError::UserNotFound)?;

    ensure_same_company(&actor, &target)?;

    Ok(Json(access_view(user_id, Some(&target))))
}

#[derive(Debug, Deserialize)]
pub struct UpdateAccessRequest {
    pub grants: Vec<AccessGrant>,
}

/// PUT /api/users/{user_id}/access
///
/// Replaces the target's grant list. Requires `manage` on
/// `user_management`; grant shapes are validated by deserialization
/// before anything is written.
pub async fn update_user_access(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(user_id): Path<Uuid>,
    Json(body): Json<UpdateAccessRequest>,
) -> Result<Json<AccessView>, PermissionError> {
    let actor = require_module_access(
        &state.db,
        auth.id,
        Module::UserManagement,
        AccessLevel::Manage,
    )
    .await?;

    let target = fetch_access_profile(&state.db, user_id)
        .await
        .map_err(|e| PermissionError::Database(e.to_string()))?
        .ok_or(PermissionError::UserNotFound)?;

    ensure_same_company(&actor, &target)?;

    let updated = update_access_grants(&state.db, user_id, &body.grants)
        .await
        .map_err(|e| PermissionError::Database(e.to_string()))?;
    if !updated {
        return Err(PermissionError::UserNotFound);
    }

    tracing::info!(
        actor_id = %auth.id,
        target_id = %user_id,
        grants = body.grants.len(),
        "Access grants replaced"
    );

    let profile = fetch_access_profile(&state.db, user_id)
        .await
        .map_err(|e| PermissionError::Database(e.to_string()))?;

    Ok(Json(access_view(user_id, profile.as_ref())))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(company_id: Option<Uuid>, grants: Vec<AccessGrant>) -> UserAccessProfile {
        UserAccessProfile {
            user_id: Uuid::now_v7(),
            company_id,
            role: None,
            is_company_owner: false,
            access_grants: grants,
        }
    }

    #[test]
    fn test_access_view_covers_every_module() {
        let user = profile(
            None,
            vec![AccessGrant::of(Module::Tenants, [AccessLevel::Write])],
        );
        let view = access_view(user.user_id, Some(&user));

        assert_eq!(view.effective.len(), Module::all().len());
        assert_eq!(view.effective[&Module::Tenants], AccessLevel::Write);
        assert_eq!(view.effective[&Module::Payments], AccessLevel::None);
    }

    #[test]
    fn test_access_view_for_absent_profile() {
        let user_id = Uuid::now_v7();
        let view = access_view(user_id, None);

        assert!(!view.is_company_owner);
        assert!(view.grants.is_empty());
        assert!(view.effective.values().all(|&l| l == AccessLevel::None));
    }

    #[test]
    fn test_same_company_required() {
        let company = Uuid::now_v7();
        let actor = profile(Some(company), vec![]);
        let colleague = profile(Some(company), vec![]);
        let outsider = profile(Some(Uuid::now_v7()), vec![]);
        let unassigned = profile(None, vec![]);

        assert!(ensure_same_company(&actor, &colleague).is_ok());
        assert_eq!(
            ensure_same_company(&actor, &outsider),
            Err(PermissionError::UserNotFound)
        );
        assert_eq!(
            ensure_same_company(&actor, &unassigned),
            Err(PermissionError::UserNotFound)
        );
        assert_eq!(
            ensure_same_company(&unassigned, &unassigned),
            Err(PermissionError::UserNotFound)
        );
    }
}
