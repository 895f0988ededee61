//! Consistency tests for the registration and payment flows
//!
//! Database-backed tests are gated behind `#[ignore]` and expect
//! `TEST_DATABASE_URL` to point at a migrated scratch database:
//!
//! ```sh
//! TEST_DATABASE_URL=postgresql://localhost/medicamp_test cargo test -- --ignored
//! ```

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use sqlx::PgPool;
    use uuid::Uuid;
    use validator::Validate;

    use medicamp_server::models::{
        CampUpsertRequest, ConfirmationStatus, JoinCampRequest, PaymentRequest, PaymentStatus,
    };
    use medicamp_server::services::{
        AnalyticsService, CampService, PaymentService, RegistrationService, UserService,
    };

    /// Helper to create a migrated test database pool
    async fn setup_test_db() -> PgPool {
        let database_url = std::env::var("TEST_DATABASE_URL")
            .unwrap_or_else(|_| "postgresql://localhost/medicamp_test".to_string());

        let pool = sqlx::postgres::PgPoolOptions::new()
            .max_connections(1)
            .connect(&database_url)
            .await
            .expect("Failed to connect to test database");

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("Failed to run migrations");

        pool
    }

    fn test_camp_request(name: &str, fee: i64) -> CampUpsertRequest {
        CampUpsertRequest {
            name: name.to_string(),
            image: None,
            fee,
            scheduled_at: Utc::now(),
            location: "Dhaka Community Center".to_string(),
            healthcare_professional: "Dr. Rahman".to_string(),
            description: "General health screening".to_string(),
        }
    }

    fn unique_email() -> String {
        format!("participant-{}@example.com", Uuid::new_v4().simple())
    }

    #[test]
    fn test_payment_request_validation() {
        let mut request = PaymentRequest {
            join_id: Uuid::new_v4(),
            email: "a@x.com".to_string(),
            amount: 500,
            gateway_reference: "pi_123".to_string(),
        };
        assert!(request.validate().is_ok());

        request.amount = 0;
        assert!(request.validate().is_err());

        request.amount = 500;
        request.email = "nope".to_string();
        assert!(request.validate().is_err());
    }

    #[tokio::test]
    #[ignore] // Requires database setup
    async fn test_join_increments_participant_count() {
        let pool = setup_test_db().await;
        let camps = CampService::new(pool.clone());
        let registrations = RegistrationService::new(pool.clone(), false);

        let camp = camps.create_camp(test_camp_request("Count Camp", 100)).await.unwrap();
        assert_eq!(camp.participant_count, 0);

        let record = registrations
            .join_camp(JoinCampRequest {
                camp_id: camp.id,
                participant_email: unique_email(),
            })
            .await
            .unwrap();

        assert_eq!(record.camp_id, camp.id);
        assert_eq!(record.payment_status, PaymentStatus::Unpaid);
        assert_eq!(record.confirmation_status, ConfirmationStatus::Pending);

        let camp = camps.get_camp(camp.id).await.unwrap();
        assert_eq!(camp.participant_count, 1);
    }

    #[tokio::test]
    #[ignore] // Requires database setup
    async fn test_join_missing_camp_keeps_record() {
        let pool = setup_test_db().await;
        let registrations = RegistrationService::new(pool.clone(), false);

        // No camp exists with this id; the increment matches nothing but the
        // join record must still be written.
        let record = registrations
            .join_camp(JoinCampRequest {
                camp_id: Uuid::new_v4(),
                participant_email: unique_email(),
            })
            .await
            .unwrap();

        let fetched = registrations.get_registration(record.id).await.unwrap();
        assert_eq!(fetched.id, record.id);
    }

    #[tokio::test]
    #[ignore] // Requires database setup
    async fn test_join_missing_camp_strict_mode_refuses() {
        let pool = setup_test_db().await;
        let registrations = RegistrationService::new(pool.clone(), true);

        let result = registrations
            .join_camp(JoinCampRequest {
                camp_id: Uuid::new_v4(),
                participant_email: unique_email(),
            })
            .await;

        assert!(result.is_err());
    }

    #[tokio::test]
    #[ignore] // Requires database setup
    async fn test_cancel_registration_releases_counter_credit() {
        let pool = setup_test_db().await;
        let camps = CampService::new(pool.clone());
        let registrations = RegistrationService::new(pool.clone(), false);

        let camp = camps.create_camp(test_camp_request("Cancel Camp", 0)).await.unwrap();
        let record = registrations
            .join_camp(JoinCampRequest {
                camp_id: camp.id,
                participant_email: unique_email(),
            })
            .await
            .unwrap();

        registrations.cancel_registration(record.id).await.unwrap();

        let camp = camps.get_camp(camp.id).await.unwrap();
        assert_eq!(camp.participant_count, 0);
        assert!(registrations.get_registration(record.id).await.is_err());
    }

    #[tokio::test]
    #[ignore] // Requires database setup
    async fn test_payment_flow_confirms_join() {
        let pool = setup_test_db().await;
        let camps = CampService::new(pool.clone());
        let registrations = RegistrationService::new(pool.clone(), false);
        let payments = PaymentService::new(pool.clone(), false);

        let email = unique_email();
        let camp = camps.create_camp(test_camp_request("Payment Camp", 500)).await.unwrap();
        let record = registrations
            .join_camp(JoinCampRequest {
                camp_id: camp.id,
                participant_email: email.clone(),
            })
            .await
            .unwrap();

        let outcome = payments
            .record_payment(PaymentRequest {
                join_id: record.id,
                email: email.clone(),
                amount: 500,
                gateway_reference: "pi_test_123".to_string(),
            })
            .await
            .unwrap();

        assert!(outcome.join_updated);
        assert_eq!(outcome.payment.amount, 500);

        let record = registrations.get_registration(record.id).await.unwrap();
        assert_eq!(record.payment_status, PaymentStatus::Paid);
        assert_eq!(record.confirmation_status, ConfirmationStatus::Confirmed);

        let listed = payments.payments_for(&email).await.unwrap();
        assert_eq!(listed.len(), 1);
    }

    #[tokio::test]
    #[ignore] // Requires database setup
    async fn test_payment_for_missing_join_persists() {
        let pool = setup_test_db().await;
        let payments = PaymentService::new(pool.clone(), false);

        let email = unique_email();
        let outcome = payments
            .record_payment(PaymentRequest {
                join_id: Uuid::new_v4(),
                email: email.clone(),
                amount: 250,
                gateway_reference: "pi_orphan".to_string(),
            })
            .await
            .unwrap();

        assert!(!outcome.join_updated);
        assert_eq!(payments.payments_for(&email).await.unwrap().len(), 1);
    }

    #[tokio::test]
    #[ignore] // Requires database setup
    async fn test_promote_to_organizer_is_idempotent() {
        let pool = setup_test_db().await;
        let users = UserService::new(pool.clone());

        let email = unique_email();
        let (created, user) = users
            .create_if_absent(medicamp_server::models::CreateUserRequest {
                email: email.clone(),
                name: None,
            })
            .await
            .unwrap();
        assert!(created);

        let promoted = users.promote_to_organizer(user.id).await.unwrap();
        assert!(users.is_organizer(&email).await.unwrap());

        // Promoting again succeeds and changes nothing
        let promoted_again = users.promote_to_organizer(user.id).await.unwrap();
        assert_eq!(promoted.role, promoted_again.role);
        assert!(users.is_organizer(&email).await.unwrap());
    }

    #[tokio::test]
    #[ignore] // Requires database setup
    async fn test_search_is_case_insensitive_substring() {
        let pool = setup_test_db().await;
        let camps = CampService::new(pool.clone());

        let marker = Uuid::new_v4().simple().to_string();
        camps
            .create_camp(test_camp_request(&format!("Camp A {}", marker), 0))
            .await
            .unwrap();
        camps
            .create_camp(test_camp_request(&format!("MEDICAL CAMP {}", marker), 0))
            .await
            .unwrap();

        let found = camps.search_camps(Some(&marker.to_uppercase()), None).await.unwrap();
        assert_eq!(found.len(), 2);
    }

    #[tokio::test]
    #[ignore] // Requires database setup
    async fn test_end_to_end_registration_and_payment() {
        let pool = setup_test_db().await;
        let camps = CampService::new(pool.clone());
        let registrations = RegistrationService::new(pool.clone(), false);
        let payments = PaymentService::new(pool.clone(), false);
        let analytics = AnalyticsService::new(pool.clone());

        let email = unique_email();

        let camp = camps.create_camp(test_camp_request("Eye Camp", 0)).await.unwrap();

        let record = registrations
            .join_camp(JoinCampRequest {
                camp_id: camp.id,
                participant_email: email.clone(),
            })
            .await
            .unwrap();

        let details = camps.get_camp(camp.id).await.unwrap();
        assert_eq!(details.participant_count, 1);

        payments
            .record_payment(PaymentRequest {
                join_id: record.id,
                email: email.clone(),
                amount: 100,
                gateway_reference: "pi_e2e".to_string(),
            })
            .await
            .unwrap();

        let listed = payments.payments_for(&email).await.unwrap();
        assert_eq!(listed.len(), 1);

        let record = registrations.get_registration(record.id).await.unwrap();
        assert_eq!(record.confirmation_status, ConfirmationStatus::Confirmed);

        let summary = analytics.participant_summary(&email).await.unwrap();
        assert_eq!(summary.total_registrations, 1);
        assert_eq!(summary.paid_count, 1);
        assert_eq!(summary.pending_confirmations, 0);
        assert_eq!(summary.total_paid, 100);
    }
}
