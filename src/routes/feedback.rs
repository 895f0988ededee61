//! Feedback route definitions

use axum::{routing::get, Router};

use crate::handlers::feedback::{add_feedback, list_feedback};
use crate::state::AppState;

pub fn feedback_routes() -> Router<AppState> {
    Router::new().route("/feedbacks", get(list_feedback).post(add_feedback))
}
