//! Feedback handlers

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::error::ApiError;
use crate::models::{Feedback, FeedbackRequest};
use crate::state::AppState;

/// POST /feedbacks - Append a feedback entry
pub async fn add_feedback(
    State(state): State<AppState>,
    Json(req): Json<FeedbackRequest>,
) -> Result<(StatusCode, Json<Feedback>), ApiError> {
    req.validate()?;

    let feedback = state.feedback_service.add_feedback(req).await?;

    Ok((StatusCode::CREATED, Json(feedback)))
}

/// GET /feedbacks - List feedback entries
pub async fn list_feedback(State(state): State<AppState>) -> Result<Json<Vec<Feedback>>, ApiError> {
    let entries = state.feedback_service.list_feedback().await?;

    Ok(Json(entries))
}
