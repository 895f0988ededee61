//! Access guard extractors
//!
//! Two composable checks for protected routes. `AuthenticatedUser` verifies
//! the bearer token and yields the decoded claim; `OrganizerUser` can only be
//! constructed through it and additionally requires the claimed email to
//! resolve to an organizer in the user store. The ordering dependency is a
//! type-level guarantee: there is no way to run the role check without a
//! verified claim.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use serde::Serialize;
use std::sync::Arc;

use crate::auth::{verify_token, AuthService, JwtError};

/// Authenticated identity extracted from a bearer token
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub email: String,
}

/// Rejection body for guard failures
#[derive(Debug, Serialize)]
struct GuardError {
    #[serde(skip)]
    status: StatusCode,
    error: GuardErrorDetails,
}

#[derive(Debug, Serialize)]
struct GuardErrorDetails {
    code: String,
    message: String,
}

impl GuardError {
    fn unauthorized(code: &str) -> Self {
        Self {
            status: StatusCode::UNAUTHORIZED,
            error: GuardErrorDetails {
                code: code.to_string(),
                message: "unauthorized access".to_string(),
            },
        }
    }

    fn forbidden() -> Self {
        Self {
            status: StatusCode::FORBIDDEN,
            error: GuardErrorDetails {
                code: "FORBIDDEN".to_string(),
                message: "forbidden access".to_string(),
            },
        }
    }
}

impl IntoResponse for GuardError {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthenticatedUser
where
    Arc<AuthService>: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // A missing or non-Bearer Authorization header rejects before any
        // verification work.
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| GuardError::unauthorized("MISSING_TOKEN").into_response())?;

        let auth_service = Arc::<AuthService>::from_ref(state);

        let claims = verify_token(bearer.token(), auth_service.jwt_secret()).map_err(|e| {
            let code = match e {
                JwtError::TokenExpired => "TOKEN_EXPIRED",
                _ => "INVALID_TOKEN",
            };
            GuardError::unauthorized(code).into_response()
        })?;

        Ok(AuthenticatedUser { email: claims.sub })
    }
}

/// Organizer-gated identity
///
/// Built on top of `AuthenticatedUser`, then checked against the user store.
/// An unknown email or a non-organizer role rejects with 403.
pub struct OrganizerUser(pub AuthenticatedUser);

#[async_trait]
impl<S> FromRequestParts<S> for OrganizerUser
where
    Arc<AuthService>: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let user = AuthenticatedUser::from_request_parts(parts, state).await?;

        let auth_service = Arc::<AuthService>::from_ref(state);
        let is_organizer = auth_service.is_organizer(&user.email).await.map_err(|e| {
            tracing::error!(error = %e, "Role lookup failed");
            crate::error::ApiError::DatabaseError(e.to_string()).into_response()
        })?;

        if !is_organizer {
            return Err(GuardError::forbidden().into_response());
        }

        Ok(OrganizerUser(user))
    }
}
