//! Service layer: one service per domain entity, each holding the shared
//! pool and owning the queries for its tables. Handlers stay thin.

mod analytics;
mod camp;
mod feedback;
mod payment;
mod profile;
mod registration;
mod user;

pub use analytics::AnalyticsService;
pub use camp::CampService;
pub use feedback::FeedbackService;
pub use payment::PaymentService;
pub use profile::ProfileService;
pub use registration::RegistrationService;
pub use user::UserService;
