//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Responses
///
/// - `302 Found` with `Location` set to the stored long URL
/// - `404` plain text `URL not found` for unknown codes
/// - `500` plain text with an opaque message on unexpected failures; full
///   diagnostics are logged server-side
///
/// Stored URLs are arbitrary strings, so building the `Location` header can
/// itself fail; that path is treated as an unexpected failure.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Response {
    let record = match state.shorten_service.resolve(&code).await {
        Ok(record) => record,
        Err(AppError::NotFound { .. }) => {
            return (StatusCode::NOT_FOUND, "URL not found").into_response();
        }
        Err(e) => {
            tracing::error!(%code, "redirect lookup failed: {e}");
            return internal_error();
        }
    };

    match HeaderValue::from_str(&record.long_url) {
        Ok(location) => (StatusCode::FOUND, [(header::LOCATION, location)]).into_response(),
        Err(_) => {
            tracing::error!(%code, "stored long URL is not a valid Location header");
            internal_error()
        }
    }
}

fn internal_error() -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
}
