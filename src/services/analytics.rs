//! Analytics aggregation
//!
//! Read-only summaries over join records, payments, users and feedback.
//! Each view issues its queries independently — no snapshot is taken across
//! them, so the numbers are eventually consistent with concurrent writes.

use sqlx::PgPool;

use crate::error::ApiError;
use crate::models::{OrganizerSummary, ParticipantSummary};

#[derive(Clone)]
pub struct AnalyticsService {
    db_pool: PgPool,
}

impl AnalyticsService {
    pub fn new(db_pool: PgPool) -> Self {
        Self { db_pool }
    }

    /// Summary for one participant, scoped by email.
    pub async fn participant_summary(
        &self,
        email: &str,
    ) -> Result<ParticipantSummary, ApiError> {
        let total_registrations: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM join_records WHERE participant_email = $1")
                .bind(email)
                .fetch_one(&self.db_pool)
                .await?;

        let total_paid: i64 = sqlx::query_scalar(
            "SELECT COALESCE(SUM(amount), 0) FROM payments WHERE email = $1",
        )
        .bind(email)
        .fetch_one(&self.db_pool)
        .await?;

        let paid_count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM join_records WHERE participant_email = $1 AND payment_status = 'paid'",
        )
        .bind(email)
        .fetch_one(&self.db_pool)
        .await?;

        let pending_confirmations: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM join_records WHERE participant_email = $1 AND confirmation_status = 'pending'",
        )
        .bind(email)
        .fetch_one(&self.db_pool)
        .await?;

        Ok(ParticipantSummary {
            total_registrations,
            total_paid,
            paid_count,
            pending_confirmations,
        })
    }

    /// Global summary for organizers.
    pub async fn organizer_summary(&self) -> Result<OrganizerSummary, ApiError> {
        let total_users: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.db_pool)
            .await?;

        let total_registrations: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM join_records")
            .fetch_one(&self.db_pool)
            .await?;

        let total_feedback: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM feedback")
            .fetch_one(&self.db_pool)
            .await?;

        let total_revenue: i64 =
            sqlx::query_scalar("SELECT COALESCE(SUM(amount), 0) FROM payments")
                .fetch_one(&self.db_pool)
                .await?;

        Ok(OrganizerSummary {
            total_users,
            total_registrations,
            total_feedback,
            total_revenue,
        })
    }
}
