//! Authentication service
//!
//! Issues access tokens for identity claims and resolves claimed emails to
//! stored roles. Token issuance has no store side effects; the user row is
//! only consulted when a role check is required.

use sqlx::PgPool;
use thiserror::Error;

use crate::models::UserRole;

use super::jwt::{generate_token, JwtError};

/// Auth service errors
#[derive(Error, Debug)]
pub enum AuthServiceError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Token error: {0}")]
    TokenError(String),
}

impl From<sqlx::Error> for AuthServiceError {
    fn from(e: sqlx::Error) -> Self {
        AuthServiceError::DatabaseError(e.to_string())
    }
}

impl From<JwtError> for AuthServiceError {
    fn from(e: JwtError) -> Self {
        AuthServiceError::TokenError(e.to_string())
    }
}

/// Authentication service
#[derive(Clone)]
pub struct AuthService {
    db_pool: PgPool,
    jwt_secret: String,
    token_ttl_seconds: i64,
}

impl AuthService {
    pub fn new(db_pool: PgPool, jwt_secret: String, token_ttl_seconds: i64) -> Self {
        Self {
            db_pool,
            jwt_secret,
            token_ttl_seconds,
        }
    }

    /// Mint a signed access token for an email claim
    pub fn issue_token(&self, email: &str) -> Result<String, AuthServiceError> {
        let token = generate_token(email, &self.jwt_secret, self.token_ttl_seconds)?;
        Ok(token)
    }

    /// Resolve the stored role for an email, if the user exists
    pub async fn role_of(&self, email: &str) -> Result<Option<UserRole>, AuthServiceError> {
        let role: Option<UserRole> =
            sqlx::query_scalar("SELECT role FROM users WHERE email = $1")
                .bind(email)
                .fetch_optional(&self.db_pool)
                .await?;

        Ok(role)
    }

    /// Whether the email belongs to an organizer
    pub async fn is_organizer(&self, email: &str) -> Result<bool, AuthServiceError> {
        Ok(matches!(self.role_of(email).await?, Some(UserRole::Organizer)))
    }

    /// Token lifetime in seconds (for response bodies)
    pub fn token_ttl_seconds(&self) -> i64 {
        self.token_ttl_seconds
    }

    /// Signing secret (for middleware verification)
    pub fn jwt_secret(&self) -> &str {
        &self.jwt_secret
    }
}
