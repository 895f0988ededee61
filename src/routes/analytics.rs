//! Analytics route definitions

use axum::{routing::get, Router};

use crate::handlers::analytics::{organizer_analytics, participant_analytics};
use crate::state::AppState;

pub fn analytics_routes() -> Router<AppState> {
    Router::new()
        .route("/participant-analytics", get(participant_analytics))
        .route("/organizer-analytics", get(organizer_analytics))
}
