//! DTOs for the QR generation endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to render text content as a QR code. The content can be a URL
/// or arbitrary text.
#[derive(Debug, Deserialize, Validate)]
pub struct GenerateQrRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "content is required"))]
    pub content: String,
}

/// Response carrying the rendered QR code.
#[derive(Debug, Serialize)]
pub struct GenerateQrResponse {
    /// `data:image/png;base64,...` string embedding the PNG.
    pub qr_code_image: String,

    /// Present when the symbol was rendered without the configured logo.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}
