//! User management service
//!
//! Users are created on first sign-in and otherwise managed by organizers.
//! Role elevation is idempotent.

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::ApiError;
use crate::models::{CreateUserRequest, User, UserRole};

#[derive(Clone)]
pub struct UserService {
    db_pool: PgPool,
}

impl UserService {
    pub fn new(db_pool: PgPool) -> Self {
        Self { db_pool }
    }

    /// Create the user if the email is absent; return the existing row
    /// otherwise. Returns whether a row was inserted.
    pub async fn create_if_absent(
        &self,
        request: CreateUserRequest,
    ) -> Result<(bool, User), ApiError> {
        let now = Utc::now();
        let inserted = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, email, name, role, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $5)
            ON CONFLICT (email) DO NOTHING
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&request.email)
        .bind(&request.name)
        .bind(UserRole::Participant)
        .bind(now)
        .fetch_optional(&self.db_pool)
        .await?;

        if let Some(user) = inserted {
            return Ok((true, user));
        }

        // Lost to an existing row; fetch it. A concurrent delete between the
        // two statements surfaces as NotFound, which is accurate enough.
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
            .bind(&request.email)
            .fetch_optional(&self.db_pool)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("user {} not found", request.email)))?;

        Ok((false, user))
    }

    pub async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        let users = sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY created_at DESC")
            .fetch_all(&self.db_pool)
            .await?;

        Ok(users)
    }

    /// Promote a user to organizer. Idempotent: promoting an organizer again
    /// succeeds and leaves the role unchanged.
    pub async fn promote_to_organizer(&self, id: Uuid) -> Result<User, ApiError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET role = $1, updated_at = $2
            WHERE id = $3
            RETURNING *
            "#,
        )
        .bind(UserRole::Organizer)
        .bind(Utc::now())
        .bind(id)
        .fetch_optional(&self.db_pool)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("user {} not found", id)))?;

        Ok(user)
    }

    /// Whether the email belongs to an organizer. Unknown emails are simply
    /// not organizers.
    pub async fn is_organizer(&self, email: &str) -> Result<bool, ApiError> {
        let role: Option<UserRole> = sqlx::query_scalar("SELECT role FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.db_pool)
            .await?;

        Ok(matches!(role, Some(UserRole::Organizer)))
    }

    pub async fn delete_user(&self, id: Uuid) -> Result<(), ApiError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.db_pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound(format!("user {} not found", id)));
        }

        Ok(())
    }
}
