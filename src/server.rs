//! HTTP server initialization and runtime setup.
//!
//! Handles the database connection, schema migration, service wiring, and
//! the Axum server lifecycle.

use crate::api::middleware::cors;
use crate::application::services::{QrComposer, ShortenService};
use crate::config::Config;
use crate::infrastructure::persistence::SqliteShortUrlRepository;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::SqlitePool;
use sqlx::sqlite::SqliteConnectOptions;
use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - SQLite connection pool (database file created if absent)
/// - Schema migration
/// - Shorten service and QR composer (logo decoded once here)
/// - Axum HTTP server with graceful shutdown on ctrl-c
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - The CORS allow-list contains an invalid origin
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let options = SqliteConnectOptions::from_str(&config.database_url)
        .context("Invalid DATABASE_URL")?
        .create_if_missing(true);

    let pool = SqlitePool::connect_with(options).await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run database migrations")?;

    let repository = Arc::new(SqliteShortUrlRepository::new(Arc::new(pool)));
    let shorten_service = Arc::new(ShortenService::new(repository));
    let qr_composer = Arc::new(QrComposer::new(&config.logo_path));

    let state = AppState {
        shorten_service,
        qr_composer,
    };

    let cors = cors::layer(&config.allowed_origins)?;
    let app = app_router(state, cors);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install ctrl-c handler");
    tracing::info!("Shutdown signal received");
}
