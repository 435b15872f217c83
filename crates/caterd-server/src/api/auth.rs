// ABOUTME: Login handler: checks a username/password pair and issues a signed access token.
// ABOUTME: Unknown username and wrong password produce byte-identical 401 responses.

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use crate::app_state::SharedState;
use crate::auth;
use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<SharedState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let user = state
        .store
        .find_admin(&req.username)
        .await?
        .ok_or(ApiError::BadCredentials)?;

    if !auth::verify_password(&req.password, &user.password_hash) {
        return Err(ApiError::BadCredentials);
    }

    let access_token = state
        .tokens
        .issue(&user.username)
        .map_err(|_| ApiError::TokenSigning)?;

    Ok(Json(LoginResponse {
        access_token,
        token_type: "bearer".to_string(),
    }))
}
