use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use common::ErrorEnvelope;
use thiserror::Error;

use crate::store::StoreError;

// Define a custom error type
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Internal Server Error: {0}")]
    InternalServerError(String),

    #[error("{0}")]
    ValidationError(String),

    #[error("{0}")]
    BadRequest(String),

    /// Well-formed JSON that does not have the shape the endpoint expects.
    #[error("{0}")]
    UnexpectedPayload(String),

    #[error("{0}")]
    Conflict(String),

    #[error("Invalid email or password")]
    Unauthorized,

    #[error("{0}")]
    NotFound(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::ValidationError(_)
            | AppError::BadRequest(_)
            | AppError::UnexpectedPayload(_) => StatusCode::BAD_REQUEST,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    /// Reports a body of the wrong shape with the endpoint's own
    /// required-fields message; other errors pass through unchanged.
    pub fn or_required(self, message: &str) -> AppError {
        match self {
            AppError::UnexpectedPayload(detail) => {
                tracing::debug!("Unexpected payload: {}", detail);
                AppError::ValidationError(message.to_string())
            }
            other => other,
        }
    }
}

// Implement IntoResponse to convert AppError into an HTTP response
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            AppError::InternalServerError(detail) => {
                // The detail stays in the logs; clients only get the generic text.
                tracing::error!("Internal server error: {}", detail);
                "Internal server error".to_string()
            }
            AppError::Unauthorized => {
                tracing::warn!("Rejected credentials");
                AppError::Unauthorized.to_string()
            }
            other => other.to_string(),
        };

        (status, Json(ErrorEnvelope::new(message))).into_response()
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::DuplicateEmail(_) => {
                AppError::Conflict("User with this email already exists".to_string())
            }
            StoreError::Poisoned(_) => AppError::InternalServerError(e.to_string()),
        }
    }
}
