//! Banda Hub server binary.
//!
//! Loads configuration, connects to Postgres, wires the production adapters
//! into the HTTP router, and serves the API.

use std::sync::Arc;
use std::time::Duration;

use axum::http::{HeaderValue, Method};
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use banda_hub::adapters::auth::JwtAuthenticator;
use banda_hub::adapters::email::ResendMailer;
use banda_hub::adapters::http::{api_router, AppState};
use banda_hub::adapters::postgres::{
    PostgresContributionRepository, PostgresCredentialRepository, PostgresDepositRepository,
    PostgresExpenseRepository, PostgresInviteKeyRepository, PostgresMemberRepository,
};
use banda_hub::adapters::storage::SupabaseStorage;
use banda_hub::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config);

    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .connect(&config.database.url)
        .await?;
    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("database ready");

    let state = AppState {
        authenticator: Arc::new(JwtAuthenticator::new(&config.auth)),
        credentials: Arc::new(PostgresCredentialRepository::new(pool.clone())),
        invites: Arc::new(PostgresInviteKeyRepository::new(pool.clone())),
        members: Arc::new(PostgresMemberRepository::new(pool.clone())),
        contributions: Arc::new(PostgresContributionRepository::new(pool.clone())),
        deposits: Arc::new(PostgresDepositRepository::new(pool.clone())),
        expenses: Arc::new(PostgresExpenseRepository::new(pool)),
        mailer: Arc::new(ResendMailer::new(&config.email)),
        storage: Arc::new(SupabaseStorage::new(&config.storage)),
        master_keys: config.invite.master_keys(),
        credential_pepper: config.auth.credential_pepper.clone(),
        notify_email: config.email.notify_email.clone(),
    };

    let app = api_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config))
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )));

    let addr = config.server.socket_addr()?;
    tracing::info!(%addr, environment = ?config.server.environment, "starting server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

fn cors_layer(config: &AppConfig) -> CorsLayer {
    let methods = [
        Method::GET,
        Method::POST,
        Method::PUT,
        Method::DELETE,
        Method::OPTIONS,
    ];

    match config.server.cors_origins {
        Some(_) => {
            let origins: Vec<HeaderValue> = config
                .server
                .cors_origins_list()
                .iter()
                .filter_map(|origin| origin.parse().ok())
                .collect();
            CorsLayer::new()
                .allow_origin(origins)
                .allow_methods(methods)
                .allow_headers(Any)
        }
        None => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(methods)
            .allow_headers(Any),
    }
}
