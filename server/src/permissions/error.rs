//! Permission error types.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use super::level::AccessLevel;
use super::module::Module;

/// Errors surfaced by permission helpers and middleware.
///
/// The resolver itself never errors; these cover the storage boundary and
/// the HTTP enforcement paths built on top of it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PermissionError {
    /// Request reached a guarded path without an authenticated user.
    #[error("Authentication required")]
    Unauthenticated,

    /// User lacks the required tier for a module.
    #[error("Requires {required} access to {module}")]
    MissingAccess {
        module: Module,
        required: AccessLevel,
    },

    /// Route table denied the request path.
    #[error("Access to {route} denied")]
    RouteDenied { route: String },

    /// Target user does not exist or is outside the caller's company.
    #[error("User not found")]
    UserNotFound,

    /// Database error occurred.
    #[error("Database error: {0}")]
    Database(String),
}

impl IntoResponse for PermissionError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            Self::Unauthenticated => (StatusCode::UNAUTHORIZED, "UNAUTHENTICATED"),
            Self::MissingAccess { .. } => (StatusCode::FORBIDDEN, "MISSING_ACCESS"),
            Self::RouteDenied { .. } => (StatusCode::FORBIDDEN, "ROUTE_DENIED"),
            Self::UserNotFound => (StatusCode::NOT_FOUND, "USER_NOT_FOUND"),
            Self::Database(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        };

        let message = match &self {
            Self::Database(detail) => {
                tracing::error!("Database error in permission check: {detail}");
                "Database error".to_string()
            }
            other => other.to_string(),
        };

        let body = Json(serde_json::json!({ "error": code, "message": message }));
        (status, body).into_response()
    }
}
