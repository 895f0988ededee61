//! User management handlers. All organizer-gated.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::error::ApiError;
use crate::middleware::OrganizerUser;
use crate::models::{CreateUserRequest, CreateUserResponse, RoleCheckResponse, User};
use crate::state::AppState;

/// POST /users - Create a user if the email is absent
pub async fn create_user(
    _organizer: OrganizerUser,
    State(state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> Result<Json<CreateUserResponse>, ApiError> {
    req.validate()?;

    let (created, user) = state.user_service.create_if_absent(req).await?;

    Ok(Json(CreateUserResponse { created, user }))
}

/// GET /users - List all users
pub async fn list_users(
    _organizer: OrganizerUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<User>>, ApiError> {
    let users = state.user_service.list_users().await?;

    Ok(Json(users))
}

/// PATCH /users/organizer/:id - Promote a user to organizer (idempotent)
pub async fn promote_organizer(
    _organizer: OrganizerUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<User>, ApiError> {
    let user = state.user_service.promote_to_organizer(id).await?;

    Ok(Json(user))
}

/// GET /users/organizer/:email - Check whether an email holds the organizer role
pub async fn check_organizer(
    _organizer: OrganizerUser,
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<RoleCheckResponse>, ApiError> {
    let organizer = state.user_service.is_organizer(&email).await?;

    Ok(Json(RoleCheckResponse { organizer }))
}

/// DELETE /users/participant/:id - Remove a user
pub async fn delete_user(
    _organizer: OrganizerUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.user_service.delete_user(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
