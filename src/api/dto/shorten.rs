//! DTOs for the shorten endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a single URL.
///
/// The field defaults to an empty string when absent so that a missing
/// `long_url` is reported as a field validation error (400) rather than a
/// deserialization failure. No URL-syntax validation: any non-empty string
/// is accepted, malformed URLs included.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "long_url is required"))]
    pub long_url: String,
}

/// Response for a successfully shortened URL.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    /// Full short URL composed against the inbound request's origin.
    pub short_url: String,
    pub short_code: String,
}
