//! Auth route definitions

use axum::{routing::post, Router};

use crate::handlers::auth::jwt_login;
use crate::state::AppState;

pub fn auth_routes() -> Router<AppState> {
    Router::new().route("/jwt-login", post(jwt_login))
}
