use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::errors::SchedulerError;

/// A scheduled occupation of the meeting room.
///
/// `id` is `None` until storage assigns one; a persisted booking always
/// carries a non-null id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub id: Option<i64>,
    pub title: String,
    pub date: NaiveDate,
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl Booking {
    pub fn new(title: impl Into<String>, date: NaiveDate, start: NaiveTime, end: NaiveTime) -> Self {
        Self {
            id: None,
            title: title.into(),
            date,
            start,
            end,
        }
    }

    /// Signed duration in whole minutes. Negative for a reversed range.
    pub fn duration_minutes(&self) -> i64 {
        self.end.signed_duration_since(self.start).num_minutes()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBookingRequest {
    pub title: String,
    pub date: NaiveDate,
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl From<CreateBookingRequest> for Booking {
    fn from(request: CreateBookingRequest) -> Self {
        Booking::new(request.title, request.date, request.start, request.end)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingResponse {
    pub id: i64,
    pub title: String,
    pub date: NaiveDate,
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl TryFrom<Booking> for BookingResponse {
    type Error = SchedulerError;

    /// Only persisted bookings have a response shape; a missing id means the
    /// caller is leaking a transient booking and is reported, not papered
    /// over.
    fn try_from(booking: Booking) -> Result<Self, Self::Error> {
        let id = booking
            .id
            .ok_or_else(|| SchedulerError::Internal("persisted booking is missing an id".into()))?;

        Ok(Self {
            id,
            title: booking.title,
            date: booking.date,
            start: booking.start,
            end: booking.end,
        })
    }
}
