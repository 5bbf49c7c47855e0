//! Cross-origin policy restricted to a configured allow-list.

use anyhow::{Context, Result};
use axum::http::{HeaderValue, Method, header};
use tower_http::cors::CorsLayer;

/// Builds a CORS layer allowing only the configured origins.
///
/// Browsers on other origins are refused cross-origin access; same-origin
/// traffic (including the redirect endpoint) is unaffected.
///
/// # Errors
///
/// Returns an error if an origin is not a valid header value, so a
/// misconfigured allow-list fails at startup instead of silently refusing
/// the frontend.
pub fn layer(allowed_origins: &[String]) -> Result<CorsLayer> {
    let origins = allowed_origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .with_context(|| format!("Invalid CORS origin: {origin}"))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]))
}
