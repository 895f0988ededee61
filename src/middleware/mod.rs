//! Middleware for the MediCamp API
//!
//! Request tracing, security headers, and the authentication/authorization
//! extractors.

pub mod auth;
mod security;
mod tracing;

pub use auth::{AuthenticatedUser, OrganizerUser};
pub use security::security_headers;
pub use tracing::request_tracing;
