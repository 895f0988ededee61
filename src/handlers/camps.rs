//! Camp handlers. Reads are public; writes require the organizer role.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::error::ApiError;
use crate::middleware::OrganizerUser;
use crate::models::{Camp, CampSort, CampUpsertRequest};
use crate::state::AppState;

/// Query parameters for camp search
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub search: Option<String>,
    pub sort: Option<CampSort>,
}

/// POST /camps - Create a camp
pub async fn create_camp(
    _organizer: OrganizerUser,
    State(state): State<AppState>,
    Json(req): Json<CampUpsertRequest>,
) -> Result<(StatusCode, Json<Camp>), ApiError> {
    req.validate()?;

    let camp = state.camp_service.create_camp(req).await?;

    Ok((StatusCode::CREATED, Json(camp)))
}

/// GET /camps - List all camps
pub async fn list_camps(State(state): State<AppState>) -> Result<Json<Vec<Camp>>, ApiError> {
    let camps = state.camp_service.list_camps().await?;

    Ok(Json(camps))
}

/// GET /camps/popular - Top camps by participant count
pub async fn popular_camps(State(state): State<AppState>) -> Result<Json<Vec<Camp>>, ApiError> {
    let camps = state.camp_service.popular_camps().await?;

    Ok(Json(camps))
}

/// GET /search and GET /camp-search - Case-insensitive name search with an
/// optional sort key
pub async fn search_camps(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<Camp>>, ApiError> {
    let camps = state
        .camp_service
        .search_camps(params.search.as_deref(), params.sort)
        .await?;

    Ok(Json(camps))
}

/// GET /details/:id - Fetch one camp
pub async fn camp_details(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Camp>, ApiError> {
    let camp = state.camp_service.get_camp(id).await?;

    Ok(Json(camp))
}

/// PUT /update-camp/:id - Replace a camp's organizer-editable fields
pub async fn update_camp(
    _organizer: OrganizerUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<CampUpsertRequest>,
) -> Result<Json<Camp>, ApiError> {
    req.validate()?;

    let camp = state.camp_service.update_camp(id, req).await?;

    Ok(Json(camp))
}

/// DELETE /camps/:id - Delete a camp
pub async fn delete_camp(
    _organizer: OrganizerUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.camp_service.delete_camp(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
