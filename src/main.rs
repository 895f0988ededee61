//! MediCamp backend server
//!
//! Process startup: configuration, tracing, database pool and migrations,
//! service wiring, the router, and graceful shutdown.

use axum::http::{HeaderValue, Method};
use axum::{middleware as axum_middleware, routing::get, Json, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing_subscriber::EnvFilter;

use medicamp_server::auth::AuthService;
use medicamp_server::config::Config;
use medicamp_server::db;
use medicamp_server::gateway::PaymentGateway;
use medicamp_server::middleware::{request_tracing, security_headers};
use medicamp_server::routes;
use medicamp_server::services::{
    AnalyticsService, CampService, FeedbackService, PaymentService, ProfileService,
    RegistrationService, UserService,
};
use medicamp_server::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Missing signing or store configuration is fatal here, not a
    // per-request error.
    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .with_target(true)
        .init();

    tracing::info!(environment = config.environment.as_str(), "Starting MediCamp server");

    let db_pool = db::create_pool(&config).await?;
    db::run_migrations(&db_pool).await?;

    let auth_service = Arc::new(AuthService::new(
        db_pool.clone(),
        config.jwt_secret.clone(),
        config.jwt_token_ttl_seconds,
    ));
    let camp_service = Arc::new(CampService::new(db_pool.clone()));
    let user_service = Arc::new(UserService::new(db_pool.clone()));
    let registration_service = Arc::new(RegistrationService::new(
        db_pool.clone(),
        config.strict_consistency,
    ));
    let payment_service = Arc::new(PaymentService::new(
        db_pool.clone(),
        config.strict_consistency,
    ));
    let analytics_service = Arc::new(AnalyticsService::new(db_pool.clone()));
    let profile_service = Arc::new(ProfileService::new(db_pool.clone()));
    let feedback_service = Arc::new(FeedbackService::new(db_pool.clone()));
    let gateway = Arc::new(PaymentGateway::new(
        config.gateway_base_url.clone(),
        config.gateway_secret_key.clone(),
    ));

    let app_state = AppState::new(
        auth_service,
        camp_service,
        user_service,
        registration_service,
        payment_service,
        analytics_service,
        profile_service,
        feedback_service,
        gateway,
    );

    let health_db_pool = db_pool.clone();

    let app = Router::new()
        .route("/", get(root))
        .route("/health", get(move || health_check(health_db_pool.clone())))
        .merge(routes::auth_routes())
        .merge(routes::user_routes())
        .merge(routes::camp_routes())
        .merge(routes::feedback_routes())
        .merge(routes::registration_routes())
        .merge(routes::payment_routes())
        .merge(routes::profile_routes())
        .merge(routes::analytics_routes())
        .with_state(app_state)
        .layer(axum_middleware::from_fn(security_headers))
        .layer(axum_middleware::from_fn(request_tracing))
        .layer(configure_cors(&config));

    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Server listening on {}", addr);
    tracing::info!("Health check at http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}

async fn root() -> &'static str {
    "MediCamp API Server"
}

/// Health check response
#[derive(serde::Serialize)]
struct HealthResponse {
    status: String,
    database: String,
    version: String,
}

/// Health check endpoint
async fn health_check(pool: sqlx::PgPool) -> Json<HealthResponse> {
    let db_status = match db::check_health(&pool).await {
        Ok(()) => "connected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    let status = if db_status == "connected" {
        "healthy"
    } else {
        "unhealthy"
    };

    Json(HealthResponse {
        status: status.to_string(),
        database: db_status,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

fn configure_cors(config: &Config) -> CorsLayer {
    let Some(allowed) = config.cors_allowed_origins.as_deref() else {
        tracing::warn!("CORS_ALLOWED_ORIGINS not set, allowing all origins (permissive)");
        return CorsLayer::permissive();
    };

    let origins: Vec<HeaderValue> = allowed
        .split(',')
        .filter_map(|s| s.trim().parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers(Any)
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
