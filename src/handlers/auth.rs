//! Authentication HTTP handlers

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for the login endpoint
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,
}

/// Issued token response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    pub token: String,
    pub token_type: String,
    pub expires_in: i64,
}

/// POST /jwt-login - Issue a signed access token for an email claim
///
/// Open endpoint: possession of the token only proves the claim was made,
/// authorization happens at the role check.
pub async fn jwt_login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    req.validate()?;

    let token = state
        .auth_service
        .issue_token(&req.email)
        .map_err(|e| ApiError::InternalError(e.to_string()))?;

    Ok(Json(TokenResponse {
        token,
        token_type: "Bearer".to_string(),
        expires_in: state.auth_service.token_ttl_seconds(),
    }))
}
