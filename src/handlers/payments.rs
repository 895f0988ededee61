//! Payment handlers

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use validator::Validate;

use crate::error::ApiError;
use crate::gateway::PaymentIntent;
use crate::models::{CheckoutIntentRequest, Payment, PaymentFlowResponse, PaymentRequest};
use crate::state::AppState;

/// Query parameters for listing payments
#[derive(Debug, Deserialize)]
pub struct PaymentListParams {
    pub email: Option<String>,
}

/// POST /checkout-intent - Create a gateway payment intent for an amount
pub async fn checkout_intent(
    State(state): State<AppState>,
    Json(req): Json<CheckoutIntentRequest>,
) -> Result<Json<PaymentIntent>, ApiError> {
    req.validate()?;

    let intent = state
        .gateway
        .create_payment_intent(req.amount)
        .await
        .map_err(|e| ApiError::GatewayError(e.to_string()))?;

    Ok(Json(intent))
}

/// POST /payment - Record a completed payment and confirm the registration
pub async fn record_payment(
    State(state): State<AppState>,
    Json(req): Json<PaymentRequest>,
) -> Result<(StatusCode, Json<PaymentFlowResponse>), ApiError> {
    req.validate()?;

    let outcome = state.payment_service.record_payment(req).await?;

    Ok((StatusCode::CREATED, Json(outcome)))
}

/// GET /payments - List payments, optionally filtered by email
pub async fn list_payments(
    State(state): State<AppState>,
    Query(params): Query<PaymentListParams>,
) -> Result<Json<Vec<Payment>>, ApiError> {
    let payments = match params.email.as_deref() {
        Some(email) => state.payment_service.payments_for(email).await?,
        None => state.payment_service.list_payments().await?,
    };

    Ok(Json(payments))
}
