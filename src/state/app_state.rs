//! Application state shared across handlers

use std::sync::Arc;

use axum::extract::FromRef;

use crate::auth::AuthService;
use crate::gateway::PaymentGateway;
use crate::services::{
    AnalyticsService, CampService, FeedbackService, PaymentService, ProfileService,
    RegistrationService, UserService,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService>,
    pub camp_service: Arc<CampService>,
    pub user_service: Arc<UserService>,
    pub registration_service: Arc<RegistrationService>,
    pub payment_service: Arc<PaymentService>,
    pub analytics_service: Arc<AnalyticsService>,
    pub profile_service: Arc<ProfileService>,
    pub feedback_service: Arc<FeedbackService>,
    pub gateway: Arc<PaymentGateway>,
}

impl AppState {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        auth_service: Arc<AuthService>,
        camp_service: Arc<CampService>,
        user_service: Arc<UserService>,
        registration_service: Arc<RegistrationService>,
        payment_service: Arc<PaymentService>,
        analytics_service: Arc<AnalyticsService>,
        profile_service: Arc<ProfileService>,
        feedback_service: Arc<FeedbackService>,
        gateway: Arc<PaymentGateway>,
    ) -> Self {
        Self {
            auth_service,
            camp_service,
            user_service,
            registration_service,
            payment_service,
            analytics_service,
            profile_service,
            feedback_service,
            gateway,
        }
    }
}

// The access-guard extractors pull the auth service straight from state.
impl FromRef<AppState> for Arc<AuthService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.auth_service.clone()
    }
}
