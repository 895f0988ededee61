//! Participant profile service
//!
//! Profiles are keyed by email and owned by their user; create and update
//! share one upsert statement.

use chrono::Utc;
use sqlx::PgPool;

use crate::error::ApiError;
use crate::models::{Profile, ProfileUpsertRequest};

#[derive(Clone)]
pub struct ProfileService {
    db_pool: PgPool,
}

impl ProfileService {
    pub fn new(db_pool: PgPool) -> Self {
        Self { db_pool }
    }

    pub async fn upsert_profile(
        &self,
        request: ProfileUpsertRequest,
    ) -> Result<Profile, ApiError> {
        let now = Utc::now();
        let profile = sqlx::query_as::<_, Profile>(
            r#"
            INSERT INTO profiles (email, name, photo, phone, address, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $6)
            ON CONFLICT (email) DO UPDATE
            SET name = EXCLUDED.name,
                photo = EXCLUDED.photo,
                phone = EXCLUDED.phone,
                address = EXCLUDED.address,
                updated_at = EXCLUDED.updated_at
            RETURNING *
            "#,
        )
        .bind(&request.email)
        .bind(&request.name)
        .bind(&request.photo)
        .bind(&request.phone)
        .bind(&request.address)
        .bind(now)
        .fetch_one(&self.db_pool)
        .await?;

        Ok(profile)
    }

    pub async fn get_profile(&self, email: &str) -> Result<Profile, ApiError> {
        let profile = sqlx::query_as::<_, Profile>("SELECT * FROM profiles WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.db_pool)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("profile {} not found", email)))?;

        Ok(profile)
    }
}
