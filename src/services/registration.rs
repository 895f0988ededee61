//! Registration flow
//!
//! Joining a camp is a two-step sequence: insert the join record, then bump
//! the camp's participant counter with a single atomic UPDATE. By default the
//! steps are not wrapped in a transaction — a join against a vanished camp
//! keeps the join record and the counter update matches nothing. That
//! ordering and non-rollback behavior is deliberate (availability over
//! counter consistency); `strict_consistency` opts into a transactional
//! variant that refuses the join instead.

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::ApiError;
use crate::models::{ConfirmationStatus, JoinCampRequest, JoinRecord, PaymentStatus};

#[derive(Clone)]
pub struct RegistrationService {
    db_pool: PgPool,
    strict_consistency: bool,
}

const INSERT_JOIN: &str = r#"
INSERT INTO join_records (
    id, camp_id, participant_email, payment_status, confirmation_status, created_at
)
VALUES ($1, $2, $3, $4, $5, $6)
RETURNING *
"#;

const INCREMENT_COUNT: &str =
    "UPDATE camps SET participant_count = participant_count + 1, updated_at = $1 WHERE id = $2";

const DECREMENT_COUNT: &str = r#"
UPDATE camps
SET participant_count = GREATEST(participant_count - 1, 0), updated_at = $1
WHERE id = $2
"#;

impl RegistrationService {
    pub fn new(db_pool: PgPool, strict_consistency: bool) -> Self {
        Self {
            db_pool,
            strict_consistency,
        }
    }

    /// Register a participant for a camp.
    ///
    /// Re-joining is permitted: no uniqueness holds over
    /// (camp, participant_email).
    pub async fn join_camp(&self, request: JoinCampRequest) -> Result<JoinRecord, ApiError> {
        if self.strict_consistency {
            return self.join_camp_strict(request).await;
        }

        let record = sqlx::query_as::<_, JoinRecord>(INSERT_JOIN)
            .bind(Uuid::new_v4())
            .bind(request.camp_id)
            .bind(&request.participant_email)
            .bind(PaymentStatus::Unpaid)
            .bind(ConfirmationStatus::Pending)
            .bind(Utc::now())
            .fetch_one(&self.db_pool)
            .await?;

        let updated = sqlx::query(INCREMENT_COUNT)
            .bind(Utc::now())
            .bind(request.camp_id)
            .execute(&self.db_pool)
            .await?
            .rows_affected();

        if updated == 0 {
            // The join record stands; only the counter credit is lost.
            tracing::warn!(
                camp_id = %request.camp_id,
                join_id = %record.id,
                "Participant count increment matched no camp"
            );
        }

        Ok(record)
    }

    /// Transactional variant: a join against a missing camp is refused and
    /// nothing is written.
    async fn join_camp_strict(&self, request: JoinCampRequest) -> Result<JoinRecord, ApiError> {
        let mut tx = self.db_pool.begin().await?;

        let record = sqlx::query_as::<_, JoinRecord>(INSERT_JOIN)
            .bind(Uuid::new_v4())
            .bind(request.camp_id)
            .bind(&request.participant_email)
            .bind(PaymentStatus::Unpaid)
            .bind(ConfirmationStatus::Pending)
            .bind(Utc::now())
            .fetch_one(&mut *tx)
            .await?;

        let updated = sqlx::query(INCREMENT_COUNT)
            .bind(Utc::now())
            .bind(request.camp_id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        if updated == 0 {
            tx.rollback().await?;
            return Err(ApiError::NotFound(format!(
                "camp {} not found",
                request.camp_id
            )));
        }

        tx.commit().await?;

        Ok(record)
    }

    pub async fn list_registrations(&self) -> Result<Vec<JoinRecord>, ApiError> {
        let records =
            sqlx::query_as::<_, JoinRecord>("SELECT * FROM join_records ORDER BY created_at DESC")
                .fetch_all(&self.db_pool)
                .await?;

        Ok(records)
    }

    pub async fn get_registration(&self, id: Uuid) -> Result<JoinRecord, ApiError> {
        let record = sqlx::query_as::<_, JoinRecord>("SELECT * FROM join_records WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.db_pool)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("registration {} not found", id)))?;

        Ok(record)
    }

    pub async fn registrations_for(&self, email: &str) -> Result<Vec<JoinRecord>, ApiError> {
        let records = sqlx::query_as::<_, JoinRecord>(
            "SELECT * FROM join_records WHERE participant_email = $1 ORDER BY created_at DESC",
        )
        .bind(email)
        .fetch_all(&self.db_pool)
        .await?;

        Ok(records)
    }

    /// Cancel a registration: delete the join record and release its counter
    /// credit, mirroring the join sequence (delete first, decrement after,
    /// no transaction in the default mode).
    pub async fn cancel_registration(&self, id: Uuid) -> Result<(), ApiError> {
        let camp_id: Option<Uuid> =
            sqlx::query_scalar("DELETE FROM join_records WHERE id = $1 RETURNING camp_id")
                .bind(id)
                .fetch_optional(&self.db_pool)
                .await?;

        let camp_id =
            camp_id.ok_or_else(|| ApiError::NotFound(format!("registration {} not found", id)))?;

        sqlx::query(DECREMENT_COUNT)
            .bind(Utc::now())
            .bind(camp_id)
            .execute(&self.db_pool)
            .await?;

        Ok(())
    }

    /// Force a registration to paid/confirmed without a payment record.
    /// Out-of-band confirmation; the target state is identical to the
    /// payment flow's transition.
    pub async fn mark_paid(&self, id: Uuid) -> Result<JoinRecord, ApiError> {
        let record = sqlx::query_as::<_, JoinRecord>(
            r#"
            UPDATE join_records
            SET payment_status = $1, confirmation_status = $2
            WHERE id = $3
            RETURNING *
            "#,
        )
        .bind(PaymentStatus::Paid)
        .bind(ConfirmationStatus::Confirmed)
        .bind(id)
        .fetch_optional(&self.db_pool)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("registration {} not found", id)))?;

        Ok(record)
    }
}
