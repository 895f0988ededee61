//! Feedback service
//!
//! Append-only: entries are created and listed, never edited.

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::ApiError;
use crate::models::{Feedback, FeedbackRequest};

#[derive(Clone)]
pub struct FeedbackService {
    db_pool: PgPool,
}

impl FeedbackService {
    pub fn new(db_pool: PgPool) -> Self {
        Self { db_pool }
    }

    pub async fn add_feedback(&self, request: FeedbackRequest) -> Result<Feedback, ApiError> {
        let feedback = sqlx::query_as::<_, Feedback>(
            r#"
            INSERT INTO feedback (id, email, camp_name, rating, comment, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&request.email)
        .bind(&request.camp_name)
        .bind(request.rating)
        .bind(&request.comment)
        .bind(Utc::now())
        .fetch_one(&self.db_pool)
        .await?;

        Ok(feedback)
    }

    pub async fn list_feedback(&self) -> Result<Vec<Feedback>, ApiError> {
        let entries =
            sqlx::query_as::<_, Feedback>("SELECT * FROM feedback ORDER BY created_at DESC")
                .fetch_all(&self.db_pool)
                .await?;

        Ok(entries)
    }
}
