//! # Error Handling Middleware
//!
//! This module provides a standardized way to handle errors in the Roombook
//! API. It maps domain-specific errors to appropriate HTTP status codes and
//! JSON error responses, ensuring a consistent error handling experience
//! across the entire API.
//!
//! Refused bookings surface as 409 Conflict: an inadmissible candidate is an
//! expected business outcome and must stay distinguishable from a storage
//! failure.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use roombook_core::errors::SchedulerError;
use serde_json::json;

/// Application error wrapper that provides HTTP status code mapping.
///
/// `AppError` wraps domain-specific `SchedulerError` instances and implements
/// `IntoResponse` to convert them into HTTP responses with appropriate
/// status codes and JSON payloads.
#[derive(Debug)]
pub struct AppError(pub SchedulerError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Map error types to HTTP status codes
        let status = match &self.0 {
            SchedulerError::NotFound(_) => StatusCode::NOT_FOUND,
            SchedulerError::Validation(_) => StatusCode::BAD_REQUEST,
            SchedulerError::Conflict(_) => StatusCode::CONFLICT,
            SchedulerError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            SchedulerError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Get the error message and format as JSON
        let message = self.0.to_string();
        let body = Json(json!({ "error": message }));

        (status, body).into_response()
    }
}

/// Allows using `?` with functions returning `Result<T, SchedulerError>`
/// inside handlers returning `Result<T, AppError>`.
impl From<SchedulerError> for AppError {
    fn from(err: SchedulerError) -> Self {
        AppError(err)
    }
}

/// Wraps storage-layer reports into the database error variant.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(SchedulerError::Database(err))
    }
}

/// Maps a SchedulerError directly to an HTTP response.
pub fn map_error(err: SchedulerError) -> Response {
    AppError(err).into_response()
}
