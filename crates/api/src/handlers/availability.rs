//! # Availability Handlers
//!
//! Handlers for querying where the room is free. The heavy lifting is done
//! by the availability engine in `roombook-core`; this module only parses
//! query parameters and relays the day's bookings through the scheduling
//! service.

use axum::{
    Json,
    extract::{Query, State},
};
use chrono::NaiveDate;
use roombook_core::{errors::SchedulerError, models::interval::FreeIntervalsResponse};
use serde::Deserialize;
use std::sync::Arc;

use crate::{ApiState, middleware::error_handling::AppError};

/// Query parameters for the free-interval endpoint.
///
/// `date` is the day to inspect and `duration` the requested meeting length
/// in minutes. Only gaps strictly longer than `duration` are returned.
#[derive(Debug, Deserialize)]
pub struct FreeIntervalsQuery {
    /// Day to inspect, formatted yyyy-mm-dd
    pub date: String,

    /// Requested meeting duration in minutes
    pub duration: i64,
}

/// Finds the free windows of at least the requested length on a day.
///
/// # Endpoint
///
/// ```text
/// GET /api/availability/free?date=2025-03-10&duration=60
/// ```
///
/// Returns an empty interval list when nothing qualifies; a malformed date
/// is a validation error and never touches storage.
#[axum::debug_handler]
pub async fn free_intervals(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<FreeIntervalsQuery>,
) -> Result<Json<FreeIntervalsResponse>, AppError> {
    let date = NaiveDate::parse_from_str(&query.date, "%Y-%m-%d").map_err(|_| {
        AppError(SchedulerError::Validation(
            "Invalid date format. Use yyyy-mm-dd".to_string(),
        ))
    })?;

    let intervals = state
        .booking_service
        .find_free_intervals(date, query.duration)
        .await
        .map_err(SchedulerError::Database)?;

    Ok(Json(FreeIntervalsResponse { intervals }))
}
