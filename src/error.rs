//! Error types for the library ledger server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Numeric error codes carried in every error body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    DbFailure = 1,
    MissingParams = 2,
    BadValue = 3,
    NoSuchMember = 4,
    NoSuchRental = 5,
    BookNotAvailable = 6,
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("missing params: {}", missing.join(", "))]
    Validation { missing: Vec<String> },

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Book {0} is not available")]
    BookUnavailable(i32),

    #[error("Member {0} not found")]
    MemberNotFound(i32),

    #[error("Rental {0} not found")]
    RentalNotFound(i32),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl AppError {
    /// Build a validation error from the names of the missing fields
    pub fn missing<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        AppError::Validation {
            missing: fields.into_iter().map(Into::into).collect(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::BookUnavailable(_) => StatusCode::CONFLICT,
            // A dangling reference is a store-side failure for the caller
            AppError::MemberNotFound(_)
            | AppError::RentalNotFound(_)
            | AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub code: u32,
    pub error: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let (code, message) = match &self {
            AppError::Validation { .. } => (ErrorCode::MissingParams, self.to_string()),
            AppError::BadRequest(msg) => (ErrorCode::BadValue, msg.clone()),
            AppError::BookUnavailable(_) => (ErrorCode::BookNotAvailable, self.to_string()),
            AppError::MemberNotFound(_) => (ErrorCode::NoSuchMember, self.to_string()),
            AppError::RentalNotFound(_) => (ErrorCode::NoSuchRental, self.to_string()),
            AppError::Database(e) => {
                tracing::error!(error = ?e, "Database error");
                (ErrorCode::DbFailure, "Database error".to_string())
            }
        };

        let body = Json(ErrorResponse {
            code: code as u32,
            error: format!("{:?}", code),
            message,
        });

        (status, body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
