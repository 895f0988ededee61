//! Profile handlers

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use validator::Validate;

use crate::error::ApiError;
use crate::models::{Profile, ProfileUpsertRequest};
use crate::state::AppState;

/// Query parameters for profile reads
#[derive(Debug, Deserialize)]
pub struct ProfileQuery {
    pub email: String,
}

/// POST /profile and PATCH /profile - Upsert the caller's profile
pub async fn upsert_profile(
    State(state): State<AppState>,
    Json(req): Json<ProfileUpsertRequest>,
) -> Result<Json<Profile>, ApiError> {
    req.validate()?;

    let profile = state.profile_service.upsert_profile(req).await?;

    Ok(Json(profile))
}

/// GET /profiles?email= - Fetch a profile by email
pub async fn get_profile(
    State(state): State<AppState>,
    Query(params): Query<ProfileQuery>,
) -> Result<Json<Profile>, ApiError> {
    let profile = state.profile_service.get_profile(&params.email).await?;

    Ok(Json(profile))
}
