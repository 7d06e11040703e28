use chrono::{NaiveDate, NaiveTime};
use roombook_core::models::Booking;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Persisted row shape of a booking.
///
/// The end column is stored as `end_time` because `end` collides with an SQL
/// keyword; `start_time` matches it for symmetry.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbBooking {
    pub id: i64,
    pub title: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

impl From<DbBooking> for Booking {
    fn from(row: DbBooking) -> Self {
        Booking {
            id: Some(row.id),
            title: row.title,
            date: row.date,
            start: row.start_time,
            end: row.end_time,
        }
    }
}
