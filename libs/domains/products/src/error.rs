use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

use crate::validation::ValidationErrors;

/// Message returned to clients for unknown product ids.
pub const NOT_FOUND_MESSAGE: &str = "Product not found.";

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Product not found: {0}")]
    NotFound(u64),

    #[error("Invalid product: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Unable to decode product: {0}")]
    Decode(String),

    #[error("Unable to encode products: {0}")]
    Encode(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ProductResult<T> = Result<T, ProductError>;

/// Convert ProductError to AppError for standardized error responses
impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound(_) => AppError::NotFound(NOT_FOUND_MESSAGE.to_string()),
            ProductError::Validation(errors) => AppError::Validation {
                messages: errors.errors(),
                errors: (&errors).into(),
            },
            ProductError::Decode(reason) => AppError::InvalidJson(reason),
            ProductError::Encode(msg) => AppError::InternalServerError(msg),
            ProductError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
