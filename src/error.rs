//! HTTP-facing error type.
//!
//! Every failure leaving a handler is an [`AppError`], rendered as
//! `{"error": {"code", "message", "details"}}` with a matching status code.

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

use crate::domain::error::{LinkError, StoreError};

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },

    #[error("{message}")]
    NotFound { message: String, details: Value },

    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn to_error_info(&self) -> ErrorInfo {
        let (code, message, details) = match self {
            AppError::Validation { message, details } => ("validation_error", message, details),
            AppError::NotFound { message, details } => ("not_found", message, details),
            AppError::Internal { message, details } => ("internal_error", message, details),
        };

        ErrorInfo {
            code,
            message: message.clone(),
            details: details.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<LinkError> for AppError {
    fn from(e: LinkError) -> Self {
        let message = e.to_string();

        match e {
            LinkError::NotFound { code } => AppError::not_found(message, json!({ "code": code })),
            LinkError::AliasTaken { alias } => {
                AppError::bad_request(message, json!({ "alias": alias }))
            }
            LinkError::InvalidAlias { alias, reason } => {
                AppError::bad_request(message, json!({ "alias": alias, "reason": reason }))
            }
            LinkError::InvalidExpiration { value } => {
                AppError::bad_request(message, json!({ "expiresAt": value }))
            }
            LinkError::CodeGenerationExhausted { attempts } => {
                tracing::error!(attempts, "Short code space exhausted");
                AppError::internal(message, json!({ "attempts": attempts }))
            }
            LinkError::Storage(StoreError::NotFound) => AppError::not_found(message, json!({})),
            LinkError::Storage(store_error) => {
                tracing::error!(error = %store_error, "Storage failure");
                AppError::internal("Storage error", json!({}))
            }
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let details = serde_json::to_value(errors.field_errors()).unwrap_or_else(|_| json!({}));
        AppError::bad_request("Validation failed", details)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::bad_request(rejection.body_text(), json!({}))
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::bad_request(rejection.body_text(), json!({}))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_not_found_maps_to_404() {
        let err = AppError::from(LinkError::not_found("abc"));
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_error_info().message, "Short link 'abc' not found");
    }

    #[test]
    fn test_caller_errors_map_to_400() {
        let errors = [
            LinkError::AliasTaken {
                alias: "x".to_string(),
            },
            LinkError::InvalidAlias {
                alias: "health".to_string(),
                reason: "alias is reserved",
            },
            LinkError::InvalidExpiration {
                value: "soon".to_string(),
            },
        ];

        for e in errors {
            assert_eq!(AppError::from(e).status_code(), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn test_server_errors_map_to_500() {
        let exhausted = AppError::from(LinkError::CodeGenerationExhausted { attempts: 5 });
        assert_eq!(exhausted.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let backend = AppError::from(LinkError::Storage(StoreError::Backend(
            "password=secret".to_string(),
        )));
        assert_eq!(backend.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!backend.to_error_info().message.contains("secret"));
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            AppError::bad_request("bad", json!({})).to_error_info().code,
            "validation_error"
        );
        assert_eq!(
            AppError::not_found("gone", json!({})).to_error_info().code,
            "not_found"
        );
        assert_eq!(
            AppError::internal("boom", json!({})).to_error_info().code,
            "internal_error"
        );
    }

    #[derive(Validate)]
    struct Sample {
        #[validate(length(min = 3))]
        name: String,
    }

    #[test]
    fn test_validation_errors_list_fields() {
        let errors = Sample {
            name: "a".to_string(),
        }
        .validate()
        .unwrap_err();

        let err = AppError::from(errors);
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert!(err.to_error_info().details.get("name").is_some());
    }
}
