//! Router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`                - Liveness message (plain text)
//! - `GET  /{code}`          - Short link redirect
//! - `POST /api/shorten`     - Create a short URL
//! - `POST /api/generate-qr` - Render content as a QR code
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Cross-origin requests limited to the configured allow-list
//! - **Path normalization** - Trailing slash handling

use crate::api::handlers::{generate_qr_handler, index_handler, redirect_handler, shorten_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::{get, post};
use tower::Layer;
use tower_http::cors::CorsLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// The `/{code}` redirect route is registered after the fixed routes, so
/// `/` and `/api/*` always win over short code lookup.
pub fn app_router(state: AppState, cors: CorsLayer) -> NormalizePath<Router> {
    let api_router = Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/generate-qr", post(generate_qr_handler));

    let router = Router::new()
        .route("/", get(index_handler))
        .route("/{code}", get(redirect_handler))
        .nest("/api", api_router)
        .with_state(state)
        .layer(cors)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
