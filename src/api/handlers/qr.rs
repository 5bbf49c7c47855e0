//! Handler for QR code generation.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use validator::Validate;

use crate::api::dto::qr::{GenerateQrRequest, GenerateQrResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Renders text content as a QR code PNG, embedded in a data URL.
///
/// # Endpoint
///
/// `POST /api/generate-qr`
///
/// # Request Body
///
/// ```json
/// { "content": "https://example.com" }
/// ```
///
/// # Response
///
/// `200 OK` with `{"qr_code_image": "data:image/png;base64,..."}`. When the
/// configured logo asset could not be loaded at startup, the symbol is
/// rendered without it and the response additionally carries a `warning`
/// field; logo cosmetics never fail the request.
///
/// # Errors
///
/// - `415` if the body is not JSON or the JSON content type is missing
/// - `400` if `content` is absent, empty, or exceeds QR capacity
pub async fn generate_qr_handler(
    State(state): State<AppState>,
    payload: Result<Json<GenerateQrRequest>, JsonRejection>,
) -> Result<Json<GenerateQrResponse>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let composed = state.qr_composer.compose(&payload.content)?;

    Ok(Json(GenerateQrResponse {
        qr_code_image: composed.data_url,
        warning: composed.warning,
    }))
}
