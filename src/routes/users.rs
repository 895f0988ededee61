//! User route definitions

use axum::{
    routing::{delete, get, patch},
    Router,
};

use crate::handlers::users::{
    check_organizer, create_user, delete_user, list_users, promote_organizer,
};
use crate::state::AppState;

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        // PATCH takes a user id, GET an email; one registration because the
        // router requires a single param name per segment.
        .route(
            "/users/organizer/:key",
            patch(promote_organizer).get(check_organizer),
        )
        .route("/users/participant/:id", delete(delete_user))
}
