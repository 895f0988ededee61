//! Registration (join-record) handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::error::ApiError;
use crate::models::{JoinCampRequest, JoinRecord};
use crate::state::AppState;

/// POST /join-camp - Register a participant for a camp
pub async fn join_camp(
    State(state): State<AppState>,
    Json(req): Json<JoinCampRequest>,
) -> Result<(StatusCode, Json<JoinRecord>), ApiError> {
    req.validate()?;

    let record = state.registration_service.join_camp(req).await?;

    Ok((StatusCode::CREATED, Json(record)))
}

/// GET /join-camps - List all registrations
pub async fn list_registrations(
    State(state): State<AppState>,
) -> Result<Json<Vec<JoinRecord>>, ApiError> {
    let records = state.registration_service.list_registrations().await?;

    Ok(Json(records))
}

/// GET /join-camps/:id - Fetch one registration
pub async fn get_registration(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<JoinRecord>, ApiError> {
    let record = state.registration_service.get_registration(id).await?;

    Ok(Json(record))
}

/// GET /registered-join/:email - Registrations for one participant
pub async fn registrations_for(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<Vec<JoinRecord>>, ApiError> {
    let records = state.registration_service.registrations_for(&email).await?;

    Ok(Json(records))
}

/// DELETE /delete-join-camps/:id - Cancel a registration
pub async fn cancel_registration(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.registration_service.cancel_registration(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// PATCH /update-join-camps/:id - Force a registration to paid/confirmed
/// (out-of-band payment confirmation)
pub async fn mark_paid(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<JoinRecord>, ApiError> {
    let record = state.registration_service.mark_paid(id).await?;

    Ok(Json(record))
}
