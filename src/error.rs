use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::handlers::common::PrettyJson;
use crate::services::validation::StageValidationError;

/// Application error type that can be returned from handlers
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Routing errors
    #[error("No such route")]
    RouteNotFound,

    // Resource errors
    #[error("{0}")]
    NotFound(String),

    // Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    // Database errors
    #[error("Database error: {0}")]
    Database(String),

    // Internal errors
    #[error("Internal server error")]
    Internal(String),
}

/// JSON error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::RouteNotFound | AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let (error_message, details) = match &self {
            // 404 Not Found
            AppError::RouteNotFound => ("No such route", None),
            AppError::NotFound(msg) => ("Not found", Some(msg.clone())),

            // 400 Bad Request
            AppError::Validation(msg) => {
                tracing::warn!("Validation error: {}", msg);
                ("Validation error", Some(msg.clone()))
            }

            // 500 Internal Server Error
            AppError::Database(msg) => {
                tracing::error!("Database error: {}", msg);
                ("Database error", None)
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                ("Internal server error", None)
            }
        };

        let body = PrettyJson(ErrorResponse {
            error: error_message.to_string(),
            details,
        });

        (status, body).into_response()
    }
}

// Convenient conversions from common error types

impl From<sea_orm::DbErr> for AppError {
    fn from(err: sea_orm::DbErr) -> Self {
        AppError::Database(err.to_string())
    }
}

impl From<StageValidationError> for AppError {
    fn from(err: StageValidationError) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl From<time::error::Format> for AppError {
    fn from(err: time::error::Format) -> Self {
        AppError::Internal(format!("Timestamp formatting failed: {}", err))
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
