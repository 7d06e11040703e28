use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use roombook_core::{
    errors::SchedulerError,
    models::booking::{Booking, BookingResponse, CreateBookingRequest},
};
use std::sync::Arc;

use crate::{ApiState, middleware::error_handling::AppError};

/// Blank titles never reach storage.
fn validate_title(title: &str) -> Result<(), AppError> {
    if title.trim().is_empty() {
        return Err(AppError(SchedulerError::Validation(
            "Title cannot be blank".to_string(),
        )));
    }
    Ok(())
}

#[axum::debug_handler]
pub async fn create_booking(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateBookingRequest>,
) -> Result<(StatusCode, Json<BookingResponse>), AppError> {
    validate_title(&payload.title)?;

    let created = state
        .booking_service
        .add(payload.into())
        .await
        .map_err(SchedulerError::Database)?;

    match created {
        Some(booking) => Ok((StatusCode::CREATED, Json(booking.try_into()?))),
        // An inadmissible candidate is a conflict, not a server fault
        None => Err(AppError(SchedulerError::Conflict(
            "Requested time is not available".to_string(),
        ))),
    }
}

#[axum::debug_handler]
pub async fn list_bookings(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<BookingResponse>>, AppError> {
    let bookings = state
        .booking_service
        .all()
        .await
        .map_err(SchedulerError::Database)?;

    let responses = bookings
        .into_iter()
        .map(BookingResponse::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Json(responses))
}

#[axum::debug_handler]
pub async fn get_booking(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<i64>,
) -> Result<Json<BookingResponse>, AppError> {
    let booking = state
        .booking_service
        .find_by_id(id)
        .await
        .map_err(SchedulerError::Database)?
        .ok_or_else(|| SchedulerError::NotFound(format!("Booking with ID {} not found", id)))?;

    Ok(Json(booking.try_into()?))
}

#[axum::debug_handler]
pub async fn update_booking(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<i64>,
    Json(payload): Json<CreateBookingRequest>,
) -> Result<StatusCode, AppError> {
    validate_title(&payload.title)?;

    let booking: Booking = payload.into();
    state
        .booking_service
        .update(id, booking)
        .await
        .map_err(SchedulerError::Database)?;

    Ok(StatusCode::OK)
}

#[axum::debug_handler]
pub async fn delete_booking(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state
        .booking_service
        .delete(id)
        .await
        .map_err(SchedulerError::Database)?;

    Ok(StatusCode::OK)
}
