//! Shared API error type.
//!
//! Each router module converts its handler errors into [`ApiError`] in one
//! `From` impl; this module owns the status-code mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::domain::forms::FieldErrors;
use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};
use crate::domain::navigation::RouteGuard;

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
    /// Page the client should navigate to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,
}

impl ErrorResponse {
    pub fn new(code: &str, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            details: None,
            redirect: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn with_redirect(mut self, path: impl Into<String>) -> Self {
        self.redirect = Some(path.into());
        self
    }
}

#[derive(Debug)]
pub enum ApiError {
    /// Form input failed validation; carries per-field messages
    Validation(FieldErrors),
    BadRequest(String),
    Unauthenticated,
    /// Credentials were rejected
    Unauthorized(String),
    NotFound(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::Validation(fields) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorResponse::new("VALIDATION_FAILED", "Input validation failed")
                    .with_details(serde_json::to_value(fields).unwrap_or_default()),
            ),
            ApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::new("BAD_REQUEST", msg))
            }
            ApiError::Unauthenticated => (
                StatusCode::UNAUTHORIZED,
                ErrorResponse::new("UNAUTHENTICATED", "Authentication required")
                    .with_redirect(RouteGuard::LOGIN_PATH),
            ),
            ApiError::Unauthorized(msg) => {
                (StatusCode::UNAUTHORIZED, ErrorResponse::new("UNAUTHORIZED", msg))
            }
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, ErrorResponse::new("NOT_FOUND", msg)),
        };
        (status, Json(body)).into_response()
    }
}

impl From<FieldErrors> for ApiError {
    fn from(fields: FieldErrors) -> Self {
        ApiError::Validation(fields)
    }
}

impl From<DomainError> for ApiError {
    fn from(error: DomainError) -> Self {
        match error.code {
            ErrorCode::EmptyField | ErrorCode::OutOfRange | ErrorCode::InvalidFormat => {
                ApiError::BadRequest(error.message)
            }
            ErrorCode::SurveyNotFound => ApiError::NotFound(error.message),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(error: ValidationError) -> Self {
        DomainError::from(error).into()
    }
}
