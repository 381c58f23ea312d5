//! Authentication handlers.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::AppState;
use crate::db::{find_user_by_email, find_user_by_id};

use super::error::{AuthError, AuthResult};
use super::jwt;
use super::middleware::AuthUser;
use super::password::verify_password;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_in: i64,
    pub user: AuthUser,
}

#[derive(Debug, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> AuthResult<Json<TokenResponse>> {
    let user = find_user_by_email(&state.db, &body.email)
        .await?
        .ok_or(AuthError::InvalidCredentials)?;

    if !verify_password(&body.password, &user.password_hash) {
        return Err(AuthError::InvalidCredentials);
    }

    let tokens = jwt::generate_token_pair(
        user.id,
        &state.config.jwt_secret,
        state.config.jwt_access_expiry,
        state.config.jwt_refresh_expiry,
    )?;

    tracing::info!(user_id = %user.id, "User logged in");

    Ok(Json(TokenResponse {
        access_token: tokens.access_token,
        refresh_token: tokens.refresh_token,
        expires_in: tokens.access_expires_in,
        user: AuthUser::from(user),
    }))
}

/// POST /auth/refresh
///
/// Stateless: a valid refresh token for a still-existing user yields a
/// fresh pair.
pub async fn refresh(
    State(state): State<AppState>,
    Json(body): Json<RefreshRequest>,
) -> AuthResult<Json<TokenResponse>> {
    let claims = jwt::validate_refresh_token(&body.refresh_token, &state.config.jwt_secret)?;

    let user_id: Uuid = claims.sub.parse().map_err(|_| AuthError::InvalidToken)?;

    let user = find_user_by_id(&state.db, user_id)
        .await?
        .ok_or(AuthError::UserNotFound)?;

    let tokens = jwt::generate_token_pair(
        user.id,
        &state.config.jwt_secret,
        state.config.jwt_access_expiry,
        state.config.jwt_refresh_expiry,
    )?;

    Ok(Json(TokenResponse {
        access_token: tokens.access_token,
        refresh_token: tokens.refresh_token,
        expires_in: tokens.access_expires_in,
        user: AuthUser::from(user),
    }))
}

/// GET /auth/me
pub async fn me(user: AuthUser) -> Json<AuthUser> {
    Json(user)
}
