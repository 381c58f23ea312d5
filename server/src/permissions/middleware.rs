//! Route-guard middleware.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use crate::api::AppState;
use crate::auth::AuthUser;

use super::error::PermissionError;
use super::queries::fetch_access_profile;
use super::resolver;

/// Middleware enforcing the static route table on the request path.
///
/// Must run after `auth::require_auth`. A profile that fails to load is
/// treated as an unauthenticated caller; paths without a table entry pass
/// through for any authenticated user.
#[tracing::instrument(skip(state, request, next))]
pub async fn enforce_route_access(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, PermissionError> {
    let auth = request
        .extensions()
        .get::<AuthUser>()
        .cloned()
        .ok_or(PermissionError::Unauthenticated)?;

    let path = request.uri().path().to_owned();

    let profile = fetch_access_profile(&state.db, auth.id)
        .await
        .map_err(|e| PermissionError::Database(e.to_string()))?;

    if resolver::can_access_route(profile.as_ref(), &path) {
        Ok(next.run(request).await)
    } else {
        Err(PermissionError::RouteDenied { route: path })
    }
}
