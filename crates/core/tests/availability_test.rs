use chrono::{NaiveDate, NaiveTime};
use pretty_assertions::assert_eq;
use rstest::rstest;
use roombook_core::availability::AvailabilityEngine;
use roombook_core::models::{Booking, FreeInterval, WorkingHours};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).expect("valid time")
}

// 2025-03-10 is a Monday, 2025-03-15 a Saturday, 2025-03-16 a Sunday.
fn monday() -> NaiveDate {
    date(2025, 3, 10)
}

fn engine() -> AvailabilityEngine {
    AvailabilityEngine::new(WorkingHours::default())
}

fn booking(d: NaiveDate, start: NaiveTime, end: NaiveTime) -> Booking {
    Booking::new("Standup", d, start, end)
}

#[test]
fn empty_day_yields_single_interval_spanning_working_hours() {
    let intervals = engine().free_intervals(monday(), &[], 60);

    assert_eq!(
        intervals,
        vec![FreeInterval::new(monday(), time(8, 0), time(17, 0))]
    );
}

#[test]
fn single_booking_splits_day_into_two_intervals() {
    let existing = vec![booking(monday(), time(10, 0), time(10, 30))];

    let intervals = engine().free_intervals(monday(), &existing, 20);

    assert_eq!(
        intervals,
        vec![
            FreeInterval::new(monday(), time(8, 0), time(10, 0)),
            FreeInterval::new(monday(), time(10, 30), time(17, 0)),
        ]
    );
}

#[test]
fn intervals_follow_chronological_order_of_gaps() {
    let existing = vec![
        booking(monday(), time(9, 0), time(9, 30)),
        booking(monday(), time(11, 0), time(12, 0)),
    ];

    let intervals = engine().free_intervals(monday(), &existing, 30);

    assert_eq!(
        intervals,
        vec![
            FreeInterval::new(monday(), time(8, 0), time(9, 0)),
            FreeInterval::new(monday(), time(9, 30), time(11, 0)),
            FreeInterval::new(monday(), time(12, 0), time(17, 0)),
        ]
    );
}

#[test]
fn gap_exactly_equal_to_requested_duration_is_excluded() {
    // The empty working day is one 540-minute gap.
    assert_eq!(engine().free_intervals(monday(), &[], 540), vec![]);

    let intervals = engine().free_intervals(monday(), &[], 539);
    assert_eq!(intervals.len(), 1);
    assert_eq!(intervals[0].duration_minutes(), 540);
}

#[test]
fn returned_intervals_are_always_longer_than_requested() {
    let existing = vec![
        booking(monday(), time(8, 30), time(9, 30)),
        booking(monday(), time(10, 0), time(16, 30)),
    ];

    for duration in [10, 25, 30, 45] {
        for interval in engine().free_intervals(monday(), &existing, duration) {
            assert!(interval.duration_minutes() > duration);
        }
    }
}

#[test]
fn free_interval_query_is_idempotent() {
    let existing = vec![booking(monday(), time(10, 0), time(10, 30))];
    let engine = engine();

    let first = engine.free_intervals(monday(), &existing, 20);
    let second = engine.free_intervals(monday(), &existing, 20);

    assert_eq!(first, second);
}

#[test]
fn candidate_on_free_working_day_is_admissible() {
    let candidate = booking(monday(), time(9, 0), time(10, 0));

    assert!(engine().is_admissible(&candidate, &[]));
}

#[test]
fn candidate_between_existing_bookings_is_admissible() {
    let existing = vec![
        booking(monday(), time(8, 0), time(9, 0)),
        booking(monday(), time(12, 0), time(13, 0)),
    ];
    let candidate = booking(monday(), time(10, 0), time(11, 0));

    assert!(engine().is_admissible(&candidate, &existing));
}

#[rstest]
#[case(time(9, 0), time(9, 30))] // ends exactly at existing start
#[case(time(10, 0), time(10, 30))] // starts exactly at existing end
#[case(time(9, 40), time(9, 50))] // fully inside
#[case(time(9, 15), time(9, 45))] // starts before, ends inside
#[case(time(9, 45), time(10, 15))] // starts inside, ends after
fn candidate_touching_or_inside_existing_booking_conflicts(
    #[case] start: NaiveTime,
    #[case] end: NaiveTime,
) {
    let existing = vec![booking(monday(), time(9, 30), time(10, 0))];
    let candidate = booking(monday(), start, end);

    assert!(!engine().is_admissible(&candidate, &existing));
}

#[test]
fn enclosing_candidate_passes_the_overlap_check() {
    // Neither endpoint of the candidate lies within the existing booking, so
    // the closed-interval test does not flag it. Observed behavior, kept.
    let existing = vec![booking(monday(), time(9, 30), time(10, 0))];
    let candidate = booking(monday(), time(9, 0), time(11, 0));

    assert!(engine().is_admissible(&candidate, &existing));
}

#[rstest]
#[case(date(2025, 3, 15))] // Saturday
#[case(date(2025, 3, 16))] // Sunday
fn weekend_candidate_is_rejected_regardless_of_conflicts(#[case] weekend: NaiveDate) {
    let candidate = booking(weekend, time(9, 0), time(10, 0));

    assert!(!engine().is_admissible(&candidate, &[]));
}

#[rstest]
#[case(date(2025, 3, 10))]
#[case(date(2025, 3, 11))]
#[case(date(2025, 3, 12))]
#[case(date(2025, 3, 13))]
#[case(date(2025, 3, 14))]
fn weekday_candidates_are_not_rejected_for_the_date(#[case] weekday: NaiveDate) {
    let candidate = booking(weekday, time(9, 0), time(10, 0));

    assert!(engine().is_admissible(&candidate, &[]));
}

#[test]
fn candidate_longer_than_any_remaining_gap_is_rejected() {
    // Gaps left on the day: 60 minutes before and 420 after the block.
    let existing = vec![booking(monday(), time(9, 0), time(10, 0))];
    let candidate = booking(monday(), time(11, 0), time(18, 30));

    assert!(!engine().is_admissible(&candidate, &existing));
}

#[test]
fn zero_duration_candidate_is_not_rejected_by_the_gap_check() {
    // A degenerate interval trivially fits any positive gap. Observed
    // behavior, kept.
    let candidate = booking(monday(), time(9, 0), time(9, 0));

    assert!(engine().is_admissible(&candidate, &[]));
}

#[test]
fn engine_honors_injected_working_hours() {
    let hours = WorkingHours::new("09:00", "12:00").expect("valid hours");
    let engine = AvailabilityEngine::new(hours);

    let intervals = engine.free_intervals(monday(), &[], 60);

    assert_eq!(
        intervals,
        vec![FreeInterval::new(monday(), time(9, 0), time(12, 0))]
    );

    // The shortened day is a single 180-minute gap; a 200-minute candidate
    // no longer fits.
    let too_long = booking(monday(), time(9, 0), time(12, 20));
    assert!(!engine.is_admissible(&too_long, &[]));
}
