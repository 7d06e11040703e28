use chrono::{NaiveDate, NaiveTime};
use pretty_assertions::assert_eq;
use roombook_core::models::Booking;
use roombook_db::models::DbBooking;
use rstest::rstest;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).expect("valid time")
}

#[test]
fn test_row_converts_into_domain_booking() {
    let row = DbBooking {
        id: 42,
        title: "Sprint review".to_string(),
        date: date(2025, 3, 10),
        start_time: time(10, 0),
        end_time: time(11, 0),
    };

    let booking: Booking = row.into();

    assert_eq!(
        booking,
        Booking {
            id: Some(42),
            title: "Sprint review".to_string(),
            date: date(2025, 3, 10),
            start: time(10, 0),
            end: time(11, 0),
        }
    );
}

#[rstest]
#[case(time(9, 0), time(10, 0), 60)]
#[case(time(9, 0), time(9, 0), 0)]
fn test_row_times_carry_over_as_booking_duration(
    #[case] start_time: NaiveTime,
    #[case] end_time: NaiveTime,
    #[case] expected: i64,
) {
    let row = DbBooking {
        id: 1,
        title: "Planning".to_string(),
        date: date(2025, 3, 10),
        start_time,
        end_time,
    };

    let booking: Booking = row.into();

    assert_eq!(booking.duration_minutes(), expected);
}

#[test]
fn test_converted_row_always_carries_an_id() {
    let row = DbBooking {
        id: 7,
        title: "Retro".to_string(),
        date: date(2025, 3, 10),
        start_time: time(14, 0),
        end_time: time(15, 0),
    };

    let booking: Booking = row.into();

    assert_eq!(booking.id, Some(7));
}
