//! Payment gateway client
//!
//! Thin reqwest client for creating payment intents against a Stripe-style
//! HTTP API. The gateway is an external collaborator: its failures surface to
//! callers as upstream errors, and nothing about a created intent is stored
//! locally.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Gateway client errors
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Gateway request failed: {0}")]
    RequestFailed(String),

    #[error("Gateway rejected the request with status {0}")]
    Rejected(u16),

    #[error("Gateway returned an unreadable response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for GatewayError {
    fn from(e: reqwest::Error) -> Self {
        GatewayError::RequestFailed(e.to_string())
    }
}

/// A created payment intent, as returned to the client for checkout
///
/// Accepts the gateway's snake_case body; serializes camelCase like the rest
/// of the API surface.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIntent {
    pub id: String,
    #[serde(alias = "client_secret")]
    pub client_secret: String,
}

#[derive(Serialize)]
struct CreateIntentForm<'a> {
    amount: i64,
    currency: &'a str,
}

/// Payment gateway client
#[derive(Clone)]
pub struct PaymentGateway {
    client: Client,
    base_url: String,
    secret_key: String,
}

impl PaymentGateway {
    pub fn new(base_url: String, secret_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .unwrap_or_else(|_| Client::new()),
            base_url,
            secret_key,
        }
    }

    /// Create a payment intent for an amount in minor currency units
    pub async fn create_payment_intent(&self, amount: i64) -> Result<PaymentIntent, GatewayError> {
        let url = format!("{}/v1/payment_intents", self.base_url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.secret_key)
            .form(&CreateIntentForm {
                amount,
                currency: "usd",
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(status = %status.as_u16(), "Payment intent creation rejected");
            return Err(GatewayError::Rejected(status.as_u16()));
        }

        let intent = response
            .json::<PaymentIntent>()
            .await
            .map_err(|e| GatewayError::InvalidResponse(e.to_string()))?;

        Ok(intent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_intent_deserializes_gateway_body() {
        let body = r#"{"id":"pi_123","client_secret":"pi_123_secret_abc"}"#;
        let intent: PaymentIntent = serde_json::from_str(body).unwrap();
        assert_eq!(intent.id, "pi_123");
        assert_eq!(intent.client_secret, "pi_123_secret_abc");

        let out = serde_json::to_string(&intent).unwrap();
        assert!(out.contains("clientSecret"));
    }

    #[test]
    fn test_gateway_error_display() {
        let err = GatewayError::Rejected(402);
        assert!(err.to_string().contains("402"));
    }
}
