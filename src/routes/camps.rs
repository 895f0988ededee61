//! Camp route definitions

use axum::{
    routing::{delete, get, put},
    Router,
};

use crate::handlers::camps::{
    camp_details, create_camp, delete_camp, list_camps, popular_camps, search_camps, update_camp,
};
use crate::state::AppState;

pub fn camp_routes() -> Router<AppState> {
    Router::new()
        .route("/camps", get(list_camps).post(create_camp))
        .route("/camps/popular", get(popular_camps))
        .route("/camps/:id", delete(delete_camp))
        .route("/update-camp/:id", put(update_camp))
        .route("/search", get(search_camps))
        .route("/camp-search", get(search_camps))
        .route("/details/:id", get(camp_details))
}
