use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::errors::{SchedulerError, SchedulerResult};

/// The daily window during which the room can be booked.
///
/// An explicit configuration value handed to the availability engine at
/// construction, so alternate hours can be injected in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingHours {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl WorkingHours {
    /// Parses `"HH:MM"` strings into a working-hours window.
    pub fn new(start: &str, end: &str) -> SchedulerResult<Self> {
        let start = parse_time(start)?;
        let end = parse_time(end)?;
        if start >= end {
            return Err(SchedulerError::Validation(format!(
                "Working hours must start before they end, got {start}-{end}"
            )));
        }
        Ok(Self { start, end })
    }
}

impl Default for WorkingHours {
    fn default() -> Self {
        Self::new("08:00", "17:00").expect("default working hours are well-formed")
    }
}

fn parse_time(value: &str) -> SchedulerResult<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .map_err(|_| SchedulerError::Validation(format!("Invalid time of day: {value}. Use HH:MM")))
}
