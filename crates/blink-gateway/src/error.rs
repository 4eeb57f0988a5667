use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use blink_shortener::{ShortenerError, StoreOperation};
use thiserror::Error;
use tracing::error;

use crate::model::ErrorResponse;

pub type Result<T> = std::result::Result<T, ApiError>;

/// Errors surfaced to HTTP clients as `{ "error": "<message>" }`.
///
/// `Display` carries the full cause for logs; clients only ever see the
/// fixed message from [`ApiError::message`].
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed body, missing field or undeterminable origin (400).
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    /// Missing or mismatching bearer token (401).
    #[error("unauthorized")]
    Unauthorized,
    /// The store failed while looking a slug up (500).
    #[error("failed to read mapping: {0}")]
    StorageRead(#[source] ShortenerError),
    /// The store failed while writing a mapping (500).
    #[error("failed to store mapping: {0}")]
    StorageWrite(#[source] ShortenerError),
    /// The stored target cannot be sent as a `Location` header (500).
    #[error("stored URL {0:?} is not a valid header value")]
    InvalidTarget(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::StorageRead(_) | ApiError::StorageWrite(_) | ApiError::InvalidTarget(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Client-facing message for the JSON error body.
    pub fn message(&self) -> String {
        match self {
            ApiError::InvalidRequest(message) => message.clone(),
            ApiError::Unauthorized => "Unauthorized".to_string(),
            ApiError::StorageRead(_) => "Failed to read URL".to_string(),
            ApiError::StorageWrite(_) => "Failed to store URL".to_string(),
            ApiError::InvalidTarget(_) => "Stored URL is not a valid redirect target".to_string(),
        }
    }
}

impl From<ShortenerError> for ApiError {
    fn from(err: ShortenerError) -> Self {
        match err {
            ShortenerError::InvalidRequest(message) => ApiError::InvalidRequest(message),
            ShortenerError::StorageUnavailable {
                operation: StoreOperation::Get,
                ..
            } => ApiError::StorageRead(err),
            ShortenerError::StorageUnavailable {
                operation: StoreOperation::Put,
                ..
            } => ApiError::StorageWrite(err),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::StorageRead(_) | ApiError::StorageWrite(_) => {
                error!(error = %self, "store operation failed");
            }
            ApiError::InvalidTarget(target) => {
                error!(target_url = %target, "stored URL is not a valid header value");
            }
            ApiError::InvalidRequest(_) | ApiError::Unauthorized => {}
        }

        let body = ErrorResponse {
            error: self.message(),
        };
        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use blink_core::StoreError;

    use super::*;

    fn write_failure() -> ApiError {
        ApiError::from(ShortenerError::StorageUnavailable {
            operation: StoreOperation::Put,
            source: StoreError::Unavailable("connection refused".to_string()),
        })
    }

    #[test]
    fn storage_errors_keep_their_cause() {
        let err = write_failure();
        assert!(err.to_string().starts_with("failed to store mapping:"));
        assert!(err.source().is_some());
    }

    #[test]
    fn client_message_hides_the_cause() {
        let err = write_failure();
        assert_eq!(err.message(), "Failed to store URL");
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(ApiError::Unauthorized.message(), "Unauthorized");
    }
}
