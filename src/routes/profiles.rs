//! Profile route definitions

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::profiles::{get_profile, upsert_profile};
use crate::state::AppState;

pub fn profile_routes() -> Router<AppState> {
    Router::new()
        .route("/profile", post(upsert_profile).patch(upsert_profile))
        .route("/profiles", get(get_profile))
}
