//! Payment flow
//!
//! Recording a payment is the second two-step sequence: insert the immutable
//! payment row, then transition the referenced join record to
//! paid/confirmed in one UPDATE. Both outcomes are reported to the caller.
//! In the default mode the payment row survives even when the join record is
//! gone; `strict_consistency` makes the pair transactional.

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::ApiError;
use crate::models::{
    ConfirmationStatus, Payment, PaymentFlowResponse, PaymentRequest, PaymentStatus,
};

#[derive(Clone)]
pub struct PaymentService {
    db_pool: PgPool,
    strict_consistency: bool,
}

const INSERT_PAYMENT: &str = r#"
INSERT INTO payments (id, join_id, email, amount, gateway_reference, created_at)
VALUES ($1, $2, $3, $4, $5, $6)
RETURNING *
"#;

const CONFIRM_JOIN: &str = r#"
UPDATE join_records
SET payment_status = $1, confirmation_status = $2
WHERE id = $3
"#;

impl PaymentService {
    pub fn new(db_pool: PgPool, strict_consistency: bool) -> Self {
        Self {
            db_pool,
            strict_consistency,
        }
    }

    /// Record a completed payment and confirm the join record.
    pub async fn record_payment(
        &self,
        request: PaymentRequest,
    ) -> Result<PaymentFlowResponse, ApiError> {
        if self.strict_consistency {
            return self.record_payment_strict(request).await;
        }

        let payment = sqlx::query_as::<_, Payment>(INSERT_PAYMENT)
            .bind(Uuid::new_v4())
            .bind(request.join_id)
            .bind(&request.email)
            .bind(request.amount)
            .bind(&request.gateway_reference)
            .bind(Utc::now())
            .fetch_one(&self.db_pool)
            .await?;

        let updated = sqlx::query(CONFIRM_JOIN)
            .bind(PaymentStatus::Paid)
            .bind(ConfirmationStatus::Confirmed)
            .bind(request.join_id)
            .execute(&self.db_pool)
            .await?
            .rows_affected();

        if updated == 0 {
            // Payment stands on its own; the join record was already gone.
            tracing::warn!(
                join_id = %request.join_id,
                payment_id = %payment.id,
                "Payment recorded for a missing join record"
            );
        }

        Ok(PaymentFlowResponse {
            payment,
            join_updated: updated > 0,
        })
    }

    /// Transactional variant: a payment against a missing join record is
    /// refused and nothing is written.
    async fn record_payment_strict(
        &self,
        request: PaymentRequest,
    ) -> Result<PaymentFlowResponse, ApiError> {
        let mut tx = self.db_pool.begin().await?;

        let payment = sqlx::query_as::<_, Payment>(INSERT_PAYMENT)
            .bind(Uuid::new_v4())
            .bind(request.join_id)
            .bind(&request.email)
            .bind(request.amount)
            .bind(&request.gateway_reference)
            .bind(Utc::now())
            .fetch_one(&mut *tx)
            .await?;

        let updated = sqlx::query(CONFIRM_JOIN)
            .bind(PaymentStatus::Paid)
            .bind(ConfirmationStatus::Confirmed)
            .bind(request.join_id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        if updated == 0 {
            tx.rollback().await?;
            return Err(ApiError::NotFound(format!(
                "registration {} not found",
                request.join_id
            )));
        }

        tx.commit().await?;

        Ok(PaymentFlowResponse {
            payment,
            join_updated: true,
        })
    }

    pub async fn payments_for(&self, email: &str) -> Result<Vec<Payment>, ApiError> {
        let payments = sqlx::query_as::<_, Payment>(
            "SELECT * FROM payments WHERE email = $1 ORDER BY created_at DESC",
        )
        .bind(email)
        .fetch_all(&self.db_pool)
        .await?;

        Ok(payments)
    }

    pub async fn list_payments(&self) -> Result<Vec<Payment>, ApiError> {
        let payments =
            sqlx::query_as::<_, Payment>("SELECT * FROM payments ORDER BY created_at DESC")
                .fetch_all(&self.db_pool)
                .await?;

        Ok(payments)
    }
}
