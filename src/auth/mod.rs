//! Authentication for the MediCamp API
//!
//! Token-based authentication around an email identity claim:
//! - signed, time-limited access tokens (issued by the login endpoint)
//! - verification used by the extractor middleware
//! - role resolution against the user store

mod jwt;
mod service;

pub use jwt::{generate_token, verify_token, Claims, JwtError};
pub use service::{AuthService, AuthServiceError};
