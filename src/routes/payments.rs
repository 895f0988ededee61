//! Payment route definitions

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::payments::{checkout_intent, list_payments, record_payment};
use crate::state::AppState;

pub fn payment_routes() -> Router<AppState> {
    Router::new()
        .route("/checkout-intent", post(checkout_intent))
        .route("/payment", post(record_payment))
        .route("/payments", get(list_payments))
}
