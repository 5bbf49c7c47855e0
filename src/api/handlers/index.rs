//! Liveness endpoint.

/// Plain-text liveness message for `GET /`.
pub async fn index_handler() -> &'static str {
    "Backend running. Use the frontend to shorten URLs and generate QR codes."
}
