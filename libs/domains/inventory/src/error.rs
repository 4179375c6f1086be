use axum::response::{IntoResponse, Response};
use axum_helpers::{AppError, ErrorCode};
use std::collections::BTreeMap;
use thiserror::Error;
use uuid::Uuid;

use crate::product::DomainError;

/// Field name → validation messages, keyed by the public (PascalCase) field name.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

#[derive(Debug, Error, PartialEq)]
pub enum ProductError {
    #[error("Validation failed for {} field(s)", .0.len())]
    Validation(FieldErrors),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Unhandled error: {0}")]
    Unhandled(String),
}

impl ProductError {
    pub fn not_found(id: Uuid) -> Self {
        Self::NotFound(format!("Product with Id '{}' not found.", id))
    }

    pub fn sku_conflict(sku: &str) -> Self {
        Self::Conflict(format!("Product with SKU {} already exists.", sku))
    }
}

pub type ProductResult<T> = Result<T, ProductError>;

/// Convert ProductError to AppError for standardized error responses
impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::Validation(errors) => AppError::FieldValidation(errors),
            ProductError::NotFound(msg) => AppError::NotFound(msg),
            ProductError::Conflict(msg) => AppError::Conflict(msg),
            ProductError::Domain(e) => AppError::UnprocessableEntity(e.to_string()),
            ProductError::Unhandled(msg) => {
                // Storage details stay in the logs
                tracing::error!(error = %msg, "Unhandled product error");
                AppError::InternalServerError(ErrorCode::InternalError.default_message().to_string())
            }
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<sea_orm::DbErr> for ProductError {
    fn from(err: sea_orm::DbErr) -> Self {
        ProductError::Unhandled(format!("Database error: {}", err))
    }
}
