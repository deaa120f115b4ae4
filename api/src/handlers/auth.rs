//! Authentication handler
//!
//! Exchanges the administrator credentials for a bearer token.

use axum::{extract::State, Json};
use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::auth::{hash_secret, issue_token};
use crate::error::{AppError, AuthError};
use crate::AppState;

/// Request body for authentication
#[derive(Debug, Deserialize)]
pub struct AuthenticationRequest {
    pub login: String,
    pub password: String,
}

/// Response with the issued token
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthenticationResponse {
    pub access_token: String,
    pub expires_at: String,
}

/// POST /api/auth/authenticate
///
/// Returns a bearer token when the login and password match the configured
/// administrator account.
pub async fn authenticate(
    State(state): State<AppState>,
    Json(req): Json<AuthenticationRequest>,
) -> Result<Json<AuthenticationResponse>, AppError> {
    let config = &state.config;
    if req.login != config.admin_login || hash_secret(&req.password) != config.admin_password_hash
    {
        tracing::warn!(login = %req.login, "Rejected credentials");
        return Err(AuthError::BadCredentials.into());
    }

    let (access_token, claims) = issue_token(
        &req.login,
        &config.token_secret,
        Duration::minutes(config.token_ttl_minutes),
        Utc::now(),
    )?;

    let expires_at = claims
        .expires_at()
        .map(|dt| dt.to_rfc3339())
        .ok_or_else(|| AppError::Internal("Token expiry out of range".to_string()))?;

    tracing::info!(login = %req.login, "Issued access token");

    Ok(Json(AuthenticationResponse {
        access_token,
        expires_at,
    }))
}
