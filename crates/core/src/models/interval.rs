use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// A half-open window of free room time on a given day.
///
/// Distinct from [`crate::models::Booking`] on purpose: intervals are derived
/// values and are never persisted, so they carry no id or title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreeInterval {
    pub date: NaiveDate,
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl FreeInterval {
    pub fn new(date: NaiveDate, start: NaiveTime, end: NaiveTime) -> Self {
        Self { date, start, end }
    }

    pub fn duration_minutes(&self) -> i64 {
        self.end.signed_duration_since(self.start).num_minutes()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FreeIntervalsResponse {
    pub intervals: Vec<FreeInterval>,
}
