//! Analytics handlers

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::error::ApiError;
use crate::middleware::OrganizerUser;
use crate::models::{OrganizerSummary, ParticipantSummary};
use crate::state::AppState;

/// Query parameters for the participant view
#[derive(Debug, Deserialize)]
pub struct ParticipantAnalyticsParams {
    pub email: String,
}

/// GET /participant-analytics?email= - Per-participant summary
///
/// The email is taken from the query string as-is and is not checked against
/// an authenticated identity.
pub async fn participant_analytics(
    State(state): State<AppState>,
    Query(params): Query<ParticipantAnalyticsParams>,
) -> Result<Json<ParticipantSummary>, ApiError> {
    let summary = state
        .analytics_service
        .participant_summary(&params.email)
        .await?;

    Ok(Json(summary))
}

/// GET /organizer-analytics - Global summary, organizer only
pub async fn organizer_analytics(
    _organizer: OrganizerUser,
    State(state): State<AppState>,
) -> Result<Json<OrganizerSummary>, ApiError> {
    let summary = state.analytics_service.organizer_summary().await?;

    Ok(Json(summary))
}
