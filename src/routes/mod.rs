//! Route definitions for the MediCamp API

mod analytics;
mod auth;
mod camps;
mod feedback;
mod payments;
mod profiles;
mod registrations;
mod users;

pub use analytics::analytics_routes;
pub use auth::auth_routes;
pub use camps::camp_routes;
pub use feedback::feedback_routes;
pub use payments::payment_routes;
pub use profiles::profile_routes;
pub use registrations::registration_routes;
pub use users::user_routes;
