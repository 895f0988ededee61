//! Data models for the MediCamp backend

use serde::{Deserialize, Serialize};
use sqlx::types::chrono::{DateTime, Utc};
use uuid::Uuid;
use validator::Validate;

/// User roles
#[derive(Debug, Serialize, Deserialize, sqlx::Type, Clone, Copy, PartialEq, Eq)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Participant,
    Organizer,
}

/// User model
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, Clone)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: Option<String>,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Medical camp model
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Camp {
    pub id: Uuid,
    pub name: String,
    pub image: Option<String>,
    /// Fee in minor currency units
    pub fee: i64,
    pub scheduled_at: DateTime<Utc>,
    pub location: String,
    pub healthcare_professional: String,
    /// Maintained by the registration flow only, never written from
    /// client-supplied values.
    pub participant_count: i32,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payment status of a join record
#[derive(Debug, Serialize, Deserialize, sqlx::Type, Clone, Copy, PartialEq, Eq)]
#[sqlx(type_name = "payment_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Unpaid,
    Paid,
}

/// Confirmation status of a join record
#[derive(Debug, Serialize, Deserialize, sqlx::Type, Clone, Copy, PartialEq, Eq)]
#[sqlx(type_name = "confirmation_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ConfirmationStatus {
    Pending,
    Confirmed,
}

/// A participant's registration against a camp
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, Clone)]
#[serde(rename_all = "camelCase")]
pub struct JoinRecord {
    pub id: Uuid,
    pub camp_id: Uuid,
    pub participant_email: String,
    pub payment_status: PaymentStatus,
    pub confirmation_status: ConfirmationStatus,
    pub created_at: DateTime<Utc>,
}

/// Payment record, immutable once written
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: Uuid,
    pub join_id: Uuid,
    pub email: String,
    pub amount: i64,
    pub gateway_reference: String,
    pub created_at: DateTime<Utc>,
}

/// Participant profile, keyed by email
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub email: String,
    pub name: Option<String>,
    pub photo: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Feedback entry, append-only
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub id: Uuid,
    pub email: Option<String>,
    pub camp_name: Option<String>,
    pub rating: Option<i32>,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

/// Sort options for camp search, resolved once at the HTTP boundary.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum CampSort {
    MostRegistered,
    FeeLow,
    FeeHigh,
    Alphabetical,
}

impl CampSort {
    /// The ORDER BY clause for this sort key. A closed set, never built from
    /// raw request strings.
    pub fn order_clause(self) -> &'static str {
        match self {
            CampSort::MostRegistered => "participant_count DESC",
            CampSort::FeeLow => "fee ASC",
            CampSort::FeeHigh => "fee DESC",
            CampSort::Alphabetical => "name ASC",
        }
    }
}

// ============================================================================
// Request/Response DTOs
// ============================================================================

/// Request to create or update a camp
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CampUpsertRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    pub image: Option<String>,
    #[validate(range(min = 0))]
    pub fee: i64,
    pub scheduled_at: DateTime<Utc>,
    #[validate(length(min = 1, max = 200))]
    pub location: String,
    #[validate(length(min = 1, max = 200))]
    pub healthcare_professional: String,
    #[validate(length(min = 1))]
    pub description: String,
}

/// Request to create a user
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[validate(email)]
    pub email: String,
    pub name: Option<String>,
}

/// Response for user creation, reporting whether a row was inserted
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserResponse {
    pub created: bool,
    pub user: User,
}

/// Response for the organizer role check
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleCheckResponse {
    pub organizer: bool,
}

/// Request to register a participant for a camp
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct JoinCampRequest {
    pub camp_id: Uuid,
    #[validate(email)]
    pub participant_email: String,
}

/// Request to record a completed payment
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    pub join_id: Uuid,
    #[validate(email)]
    pub email: String,
    #[validate(range(min = 1))]
    pub amount: i64,
    #[validate(length(min = 1, max = 200))]
    pub gateway_reference: String,
}

/// Result of the payment flow: the stored payment plus whether the join
/// record transition matched a row.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentFlowResponse {
    pub payment: Payment,
    pub join_updated: bool,
}

/// Request for a gateway checkout intent
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutIntentRequest {
    #[validate(range(min = 1))]
    pub amount: i64,
}

/// Request to upsert a profile
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpsertRequest {
    #[validate(email)]
    pub email: String,
    pub name: Option<String>,
    pub photo: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// Request to append feedback
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRequest {
    #[validate(email)]
    pub email: Option<String>,
    pub camp_name: Option<String>,
    #[validate(range(min = 1, max = 5))]
    pub rating: Option<i32>,
    #[validate(length(min = 1))]
    pub comment: String,
}

/// Per-participant analytics view
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantSummary {
    pub total_registrations: i64,
    pub total_paid: i64,
    pub paid_count: i64,
    pub pending_confirmations: i64,
}

/// Global analytics view for organizers
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OrganizerSummary {
    pub total_users: i64,
    pub total_registrations: i64,
    pub total_feedback: i64,
    pub total_revenue: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camp_sort_order_clauses() {
        assert_eq!(
            CampSort::MostRegistered.order_clause(),
            "participant_count DESC"
        );
        assert_eq!(CampSort::FeeLow.order_clause(), "fee ASC");
        assert_eq!(CampSort::FeeHigh.order_clause(), "fee DESC");
        assert_eq!(CampSort::Alphabetical.order_clause(), "name ASC");
    }

    #[test]
    fn test_camp_sort_deserializes_from_camel_case() {
        let sort: CampSort = serde_json::from_str("\"mostRegistered\"").unwrap();
        assert_eq!(sort, CampSort::MostRegistered);
        let sort: CampSort = serde_json::from_str("\"feeLow\"").unwrap();
        assert_eq!(sort, CampSort::FeeLow);

        // Anything outside the closed set is rejected at the boundary
        assert!(serde_json::from_str::<CampSort>("\"participant_count; DROP\"").is_err());
    }

    #[test]
    fn test_role_serde_round_trip() {
        let json = serde_json::to_string(&UserRole::Organizer).unwrap();
        assert_eq!(json, "\"organizer\"");
        let role: UserRole = serde_json::from_str("\"participant\"").unwrap();
        assert_eq!(role, UserRole::Participant);
    }

    #[test]
    fn test_join_camp_request_rejects_bad_email() {
        use validator::Validate;

        let req = JoinCampRequest {
            camp_id: Uuid::new_v4(),
            participant_email: "not-an-email".to_string(),
        };
        assert!(req.validate().is_err());

        let req = JoinCampRequest {
            camp_id: Uuid::new_v4(),
            participant_email: "a@x.com".to_string(),
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_checkout_intent_rejects_non_positive_amount() {
        use validator::Validate;

        assert!(CheckoutIntentRequest { amount: 0 }.validate().is_err());
        assert!(CheckoutIntentRequest { amount: 500 }.validate().is_ok());
    }
}
