//! # Availability Engine
//!
//! Pure decision logic for the meeting room: given the bookings already on a
//! day, decide whether a candidate booking is admissible and compute the free
//! gaps of at least a requested length.
//!
//! ## Boundary framing
//!
//! To measure gaps at the edges of the working day without special-casing the
//! first and last booking, the day's bookings are bracketed by two synthetic
//! busy intervals: one ending exactly at the start of working hours and one
//! starting exactly at their end, each 30 minutes long. The gap walk then
//! treats the edges of the day like any other pair of adjacent bookings.

use chrono::{Datelike, Duration, NaiveDate, NaiveTime, Weekday};

use crate::models::{Booking, FreeInterval, WorkingHours};

/// Width of the synthetic busy intervals bracketing the working day.
const BOUNDARY_BUFFER_MINUTES: i64 = 30;

/// Decides admissibility of candidate bookings and computes free gaps.
///
/// The engine is deterministic and side-effect free; it never mutates the
/// booking lists it is given. Bookings passed in are assumed to be in
/// chronological order along the day, which is how the repository returns
/// them.
#[derive(Debug, Clone)]
pub struct AvailabilityEngine {
    working_hours: WorkingHours,
}

impl AvailabilityEngine {
    pub fn new(working_hours: WorkingHours) -> Self {
        Self { working_hours }
    }

    /// Returns the free windows on `date` that are strictly longer than
    /// `duration_minutes`, in chronological order.
    ///
    /// A gap exactly equal to the requested duration is not offered; callers
    /// asking for a 60-minute slot need a gap of 61 minutes or more.
    pub fn free_intervals(
        &self,
        date: NaiveDate,
        bookings: &[Booking],
        duration_minutes: i64,
    ) -> Vec<FreeInterval> {
        let framed = self.frame_with_boundaries(bookings);
        gap_minutes(&framed)
            .into_iter()
            .enumerate()
            .filter(|(_, gap)| *gap > duration_minutes)
            .map(|(index, _)| FreeInterval::new(date, framed[index].1, framed[index + 1].0))
            .collect()
    }

    /// A candidate is admissible when its date is a working day, it overlaps
    /// no existing booking, and the day still has a gap strictly longer than
    /// the candidate's duration.
    ///
    /// The overlap test treats booking intervals as closed on both ends: a
    /// candidate starting exactly when another booking ends (or vice versa)
    /// conflicts. Touching bookings are not allowed to abut.
    pub fn is_admissible(&self, candidate: &Booking, existing: &[Booking]) -> bool {
        is_working_day(candidate.date)
            && !self.has_conflict(candidate, existing)
            && self.fits_free_gap(candidate, existing)
    }

    fn has_conflict(&self, candidate: &Booking, existing: &[Booking]) -> bool {
        existing.iter().any(|booked| overlaps(candidate, booked))
    }

    fn fits_free_gap(&self, candidate: &Booking, existing: &[Booking]) -> bool {
        let framed = self.frame_with_boundaries(existing);
        let duration = candidate.duration_minutes();
        gap_minutes(&framed).into_iter().any(|gap| gap > duration)
    }

    /// Brackets the day's busy intervals with the synthetic boundary pair.
    fn frame_with_boundaries(&self, bookings: &[Booking]) -> Vec<(NaiveTime, NaiveTime)> {
        let buffer = Duration::minutes(BOUNDARY_BUFFER_MINUTES);
        let mut framed = Vec::with_capacity(bookings.len() + 2);
        framed.push((self.working_hours.start - buffer, self.working_hours.start));
        framed.extend(bookings.iter().map(|booking| (booking.start, booking.end)));
        framed.push((self.working_hours.end, self.working_hours.end + buffer));
        framed
    }
}

/// Minutes between the end of each busy interval and the start of the next.
/// n intervals produce n - 1 gaps.
fn gap_minutes(framed: &[(NaiveTime, NaiveTime)]) -> Vec<i64> {
    framed
        .windows(2)
        .map(|pair| pair[1].0.signed_duration_since(pair[0].1).num_minutes())
        .collect()
}

fn overlaps(candidate: &Booking, booked: &Booking) -> bool {
    is_time_between(candidate.start, booked.start, booked.end)
        || is_time_between(candidate.end, booked.start, booked.end)
}

/// Closed-interval containment check, inclusive at both ends.
fn is_time_between(time: NaiveTime, start: NaiveTime, end: NaiveTime) -> bool {
    time >= start && time <= end
}

/// Saturdays and Sundays make the whole day unavailable.
fn is_working_day(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}
