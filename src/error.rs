//! Application error type and HTTP response mapping.
//!
//! API endpoints respond with a JSON body of the form `{"error": "<message>"}`.
//! Validation problems are reported with specific messages; unexpected
//! failures are logged in full server-side and surfaced to clients as an
//! opaque message.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug)]
pub enum AppError {
    /// Required field missing or malformed (400).
    Validation { message: String },
    /// Request body is not JSON or lacks the JSON content type (415).
    UnsupportedMediaType { message: String },
    /// Short code does not resolve to a record (404).
    NotFound { message: String },
    /// Storage uniqueness constraint violated (409, retried internally).
    Conflict { message: String },
    /// Unexpected failure (500, opaque message to the client).
    Internal { message: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
    pub fn unsupported_media_type(message: impl Into<String>) -> Self {
        Self::UnsupportedMediaType {
            message: message.into(),
        }
    }
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (AppError::Validation { message }
        | AppError::UnsupportedMediaType { message }
        | AppError::NotFound { message }
        | AppError::Conflict { message }
        | AppError::Internal { message }) = self;
        f.write_str(message)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Validation { message } => (StatusCode::BAD_REQUEST, message),
            AppError::UnsupportedMediaType { message } => {
                (StatusCode::UNSUPPORTED_MEDIA_TYPE, message)
            }
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Conflict { message } => (StatusCode::CONFLICT, message),
            AppError::Internal { message } => {
                tracing::error!("Internal error: {message}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error()
            && db.is_unique_violation()
        {
            return AppError::conflict("Unique constraint violation");
        }

        tracing::error!("Database error: {e}");
        AppError::internal("Database error")
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            // The body was JSON but did not match the expected shape
            // (e.g. a field of the wrong type).
            JsonRejection::JsonDataError(e) => AppError::bad_request(e.body_text()),
            // Missing content type, unparseable body, or read failure.
            _ => AppError::unsupported_media_type(
                "Invalid JSON or missing Content-Type: application/json",
            ),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .into_iter()
            .flat_map(|(_, field_errors)| field_errors.iter())
            .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .next()
            .unwrap_or_else(|| "Invalid request".to_string());

        AppError::bad_request(message)
    }
}
