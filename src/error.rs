//! Request-level errors and their HTTP representation.
//!
//! Every error is rendered as a plain-text body holding the message followed by
//! a newline. None of them are retried.

use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::domain::repositories::StoreError;

#[derive(Debug, Error)]
pub enum AppError {
    /// The creation path has too few segments.
    #[error("Invalid request")]
    InvalidRequest,

    #[error("Domain not allowed")]
    DomainNotAllowed { domain: String },

    #[error("Link not found")]
    NotFound { short_link: String },

    /// The store rejected or timed out a write.
    #[error("Error saving to database")]
    Storage(#[source] StoreError),

    #[error("{message}")]
    Internal { message: String },
}

impl AppError {
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidRequest | AppError::DomainNotAllowed { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Storage(_) | AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = format!("{self}\n");

        (
            status,
            [(header::X_CONTENT_TYPE_OPTIONS, "nosniff")],
            body,
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::InvalidRequest.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::DomainNotAllowed {
                domain: "evil.com".to_string()
            }
            .status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::NotFound {
                short_link: "abcd1234".to_string()
            }
            .status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Storage(StoreError::Backend("down".to_string())).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::internal("Error encoding response").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_storage_message_hides_cause() {
        let err = AppError::Storage(StoreError::Timeout {
            operation: "insert",
            timeout: Duration::from_secs(5),
        });

        assert_eq!(err.to_string(), "Error saving to database");
    }

    #[test]
    fn test_into_response_is_plain_text() {
        let response = AppError::InvalidRequest.into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/plain; charset=utf-8"
        );
        assert_eq!(response.headers()[header::X_CONTENT_TYPE_OPTIONS], "nosniff");
    }
}
