//! Shared HTTP error envelope and DomainError mapping.
//!
//! Every error leaves the API as `{"error": {"code", "message", "details"}}`.
//! Infrastructure failures map to a generic 500 with the provider detail
//! logged server-side only.

use std::collections::HashMap;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::domain::foundation::{DomainError, ErrorCode};

/// JSON error envelope.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub details: HashMap<String, String>,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: ErrorBody {
                code: code.into(),
                message: message.into(),
                details: HashMap::new(),
            },
        }
    }
}

/// Maps a `DomainError` to its HTTP response.
pub fn domain_error_response(error: DomainError) -> Response {
    let status = match error.code {
        ErrorCode::ValidationFailed => StatusCode::BAD_REQUEST,
        ErrorCode::Unauthorized | ErrorCode::KeyInvalid | ErrorCode::KeyConsumed => {
            StatusCode::UNAUTHORIZED
        }
        ErrorCode::Forbidden => StatusCode::FORBIDDEN,
        ErrorCode::MemberNotFound | ErrorCode::RecordNotFound => StatusCode::NOT_FOUND,
        ErrorCode::DatabaseError
        | ErrorCode::MailError
        | ErrorCode::StorageError
        | ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    };

    // Infrastructure detail stays in the log.
    let body = if status == StatusCode::INTERNAL_SERVER_ERROR {
        tracing::error!(code = %error.code, message = %error.message, "request failed");
        ErrorResponse::new(error.code.to_string(), "Internal server error")
    } else {
        ErrorResponse {
            error: ErrorBody {
                code: error.code.to_string(),
                message: error.message,
                details: error.details,
            },
        }
    };

    (status, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_400() {
        let response = domain_error_response(DomainError::validation("name", "cannot be empty"));
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn key_errors_map_to_401() {
        for code in [ErrorCode::KeyInvalid, ErrorCode::KeyConsumed] {
            let response = domain_error_response(DomainError::new(code, "bad key"));
            assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        }
    }

    #[test]
    fn infrastructure_errors_hide_detail() {
        let response = domain_error_response(DomainError::new(
            ErrorCode::DatabaseError,
            "connection refused to 10.0.0.5",
        ));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn not_found_maps_to_404() {
        let response =
            domain_error_response(DomainError::new(ErrorCode::MemberNotFound, "Member not found"));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
