//! Request origin reconstruction from HTTP headers.

use crate::error::AppError;
use axum::http::{HeaderMap, header};

/// Reconstructs the origin (`scheme://host[:port]`) of an inbound request.
///
/// The short URL returned by the shorten endpoint is composed against the
/// request's own origin, so the service works on whatever host and port it
/// is reached through rather than a configured public domain.
///
/// The scheme is taken from `X-Forwarded-Proto` when a reverse proxy sets
/// it, defaulting to `http`. The `Host` header is used verbatim, port
/// included.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if the `Host` header is missing or not
/// valid UTF-8.
pub fn request_origin(headers: &HeaderMap) -> Result<String, AppError> {
    let host = headers
        .get(header::HOST)
        .ok_or_else(|| AppError::bad_request("Missing Host header"))?
        .to_str()
        .map_err(|_| AppError::bad_request("Invalid Host header"))?;

    let scheme = headers
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("http");

    Ok(format!("{scheme}://{host}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_origin_plain_host() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("example.com"));

        assert_eq!(request_origin(&headers).unwrap(), "http://example.com");
    }

    #[test]
    fn test_origin_keeps_port() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("localhost:5001"));

        assert_eq!(request_origin(&headers).unwrap(), "http://localhost:5001");
    }

    #[test]
    fn test_origin_honors_forwarded_proto() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("kodeqr.example.org"));
        headers.insert("x-forwarded-proto", HeaderValue::from_static("https"));

        assert_eq!(
            request_origin(&headers).unwrap(),
            "https://kodeqr.example.org"
        );
    }

    #[test]
    fn test_origin_missing_host_header() {
        let headers = HeaderMap::new();

        assert!(request_origin(&headers).is_err());
    }
}
