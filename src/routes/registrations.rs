//! Registration route definitions

use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use crate::handlers::registrations::{
    cancel_registration, get_registration, join_camp, list_registrations, mark_paid,
    registrations_for,
};
use crate::state::AppState;

pub fn registration_routes() -> Router<AppState> {
    Router::new()
        .route("/join-camp", post(join_camp))
        .route("/join-camps", get(list_registrations))
        .route("/join-camps/:id", get(get_registration))
        .route("/delete-join-camps/:id", delete(cancel_registration))
        .route("/update-join-camps/:id", patch(mark_paid))
        .route("/registered-join/:email", get(registrations_for))
}
