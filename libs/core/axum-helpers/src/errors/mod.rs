pub mod codes;
pub mod handlers;
pub mod responses;

pub use codes::ErrorCode;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;
use utoipa::ToSchema;

/// Standard error response structure.
///
/// Every error leaving the API has this shape:
/// - `code`: Integer error code for logging/monitoring (e.g., 1008)
/// - `error`: Machine-readable error identifier (e.g., "CONFLICT")
/// - `message`: Human-readable error message
/// - `details`: Optional additional error details (e.g., validation errors)
///
/// # JSON Example
///
/// ```json
/// {
///   "code": 1001,
///   "error": "VALIDATION_ERROR",
///   "message": "Request validation failed",
///   "details": { "Name": ["Name is required."] }
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Integer error code for logging and monitoring
    pub code: i32,
    /// Machine-readable error identifier for programmatic handling
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Optional structured error details (e.g., validation field errors)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.code(),
            error: code.as_str().to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

/// Application error type that can be converted to HTTP responses.
///
/// Domain crates convert their own error enums into this type; the
/// `IntoResponse` impl picks the status, the [`ErrorCode`] and the log level.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("JSON serialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    /// Field name → messages; rendered as `details`
    #[error("Validation failed for {} field(s)", .0.len())]
    FieldValidation(BTreeMap<String, Vec<String>>),

    #[error("Invalid UUID: {0}")]
    InvalidUuid(String),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unprocessable Entity: {0}")]
    UnprocessableEntity(String),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::SerdeJson(_) | AppError::InternalServerError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::JsonExtractorRejection(e) => e.status(),
            AppError::FieldValidation(_) | AppError::InvalidUuid(_) | AppError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::UnprocessableEntity(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = match self {
            AppError::SerdeJson(e) => {
                tracing::error!(
                    error_code = ErrorCode::SerdeJsonError.code(),
                    "JSON serialization error: {:?}",
                    e
                );
                ErrorResponse::new(
                    ErrorCode::SerdeJsonError,
                    ErrorCode::SerdeJsonError.default_message(),
                )
            }
            AppError::JsonExtractorRejection(e) => {
                tracing::warn!(
                    error_code = ErrorCode::JsonExtraction.code(),
                    "JSON extraction error: {:?}",
                    e
                );
                ErrorResponse::new(ErrorCode::JsonExtraction, e.body_text())
            }
            AppError::FieldValidation(errors) => {
                tracing::info!(
                    error_code = ErrorCode::ValidationError.code(),
                    fields = ?errors.keys().collect::<Vec<_>>(),
                    "Validation error"
                );
                let details = serde_json::to_value(&errors).unwrap_or(serde_json::Value::Null);
                ErrorResponse::new(
                    ErrorCode::ValidationError,
                    ErrorCode::ValidationError.default_message(),
                )
                .with_details(details)
            }
            AppError::InvalidUuid(value) => {
                tracing::warn!(
                    error_code = ErrorCode::InvalidUuid.code(),
                    "Invalid UUID: {}",
                    value
                );
                ErrorResponse::new(
                    ErrorCode::InvalidUuid,
                    ErrorCode::InvalidUuid.default_message(),
                )
            }
            AppError::BadRequest(msg) => {
                tracing::info!("Bad request: {}", msg);
                ErrorResponse::new(ErrorCode::BadRequest, msg)
            }
            AppError::NotFound(msg) => {
                tracing::info!(
                    error_code = ErrorCode::NotFound.code(),
                    "Not found: {}",
                    msg
                );
                ErrorResponse::new(ErrorCode::NotFound, msg)
            }
            AppError::Conflict(msg) => {
                tracing::info!("Conflict: {}", msg);
                ErrorResponse::new(ErrorCode::Conflict, msg)
            }
            AppError::UnprocessableEntity(msg) => {
                tracing::info!("Unprocessable entity: {}", msg);
                ErrorResponse::new(ErrorCode::UnprocessableEntity, msg)
            }
            AppError::InternalServerError(msg) => {
                tracing::error!(
                    error_code = ErrorCode::InternalError.code(),
                    "Internal server error: {}",
                    msg
                );
                ErrorResponse::new(ErrorCode::InternalError, msg)
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Helper function to create error responses.
///
/// # Example
///
/// ```rust
/// use axum::http::StatusCode;
/// use axum_helpers::errors::{ErrorCode, error_response};
///
/// let response = error_response(
///     StatusCode::BAD_REQUEST,
///     "Invalid input".to_string(),
///     ErrorCode::BadRequest,
/// );
/// assert_eq!(response.status(), StatusCode::BAD_REQUEST);
/// ```
pub fn error_response(status: StatusCode, message: String, error_code: ErrorCode) -> Response {
    (status, Json(ErrorResponse::new(error_code, message))).into_response()
}
