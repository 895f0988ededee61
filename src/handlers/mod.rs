//! API handlers for the MediCamp backend

pub mod analytics;
pub mod auth;
pub mod camps;
pub mod feedback;
pub mod payments;
pub mod profiles;
pub mod registrations;
pub mod users;
