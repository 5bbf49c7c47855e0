//! Handler for the URL shortening endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode},
};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::request_origin::request_origin;

/// Creates a short URL for a long URL.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// { "long_url": "https://example.com/some/very/long/path" }
/// ```
///
/// # Response
///
/// `201 Created` with the short URL composed against the request's own
/// origin, so the service is reachable through any host it is deployed on:
///
/// ```json
/// { "short_url": "http://localhost:5001/Ab3xYz", "short_code": "Ab3xYz" }
/// ```
///
/// # Errors
///
/// - `415` if the body is not JSON or the JSON content type is missing
/// - `400` if `long_url` is absent or empty
pub async fn shorten_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let origin = request_origin(&headers)?;

    let record = state.shorten_service.shorten(payload.long_url).await?;

    Ok((
        StatusCode::CREATED,
        Json(ShortenResponse {
            short_url: format!("{}/{}", origin, record.short_code),
            short_code: record.short_code,
        }),
    ))
}
