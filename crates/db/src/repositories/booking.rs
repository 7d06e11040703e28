//! Booking repository.
//!
//! Every function is generic over [`sqlx::PgExecutor`] so the same queries
//! run against the pool directly or inside a transaction. The admission flow
//! in the scheduling service uses the transactional path together with
//! [`lock_date`] to serialize read-check-insert sequences per date.

use chrono::{Datelike, NaiveDate};
use eyre::{Result, eyre};
use roombook_core::models::Booking;
use sqlx::PgExecutor;

use crate::models::DbBooking;

/// Bookings on one date, chronologically ordered along the day.
pub async fn list_by_date<'e>(
    executor: impl PgExecutor<'e>,
    date: NaiveDate,
) -> Result<Vec<DbBooking>> {
    let bookings = sqlx::query_as::<_, DbBooking>(
        r#"
        SELECT id, title, date, start_time, end_time
        FROM bookings
        WHERE date = $1
        ORDER BY start_time ASC
        "#,
    )
    .bind(date)
    .fetch_all(executor)
    .await?;

    Ok(bookings)
}

/// All bookings, ordered by date then start time.
pub async fn list_all<'e>(executor: impl PgExecutor<'e>) -> Result<Vec<DbBooking>> {
    let bookings = sqlx::query_as::<_, DbBooking>(
        r#"
        SELECT id, title, date, start_time, end_time
        FROM bookings
        ORDER BY date ASC, start_time ASC
        "#,
    )
    .fetch_all(executor)
    .await?;

    Ok(bookings)
}

pub async fn get_by_id<'e>(executor: impl PgExecutor<'e>, id: i64) -> Result<Option<DbBooking>> {
    let booking = sqlx::query_as::<_, DbBooking>(
        r#"
        SELECT id, title, date, start_time, end_time
        FROM bookings
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await?;

    Ok(booking)
}

/// Inserts a booking and returns the generated id.
///
/// A missing id means the storage layer broke its contract; that is surfaced
/// as an error rather than swallowed.
pub async fn insert<'e>(executor: impl PgExecutor<'e>, booking: &Booking) -> Result<i64> {
    let id = sqlx::query_scalar::<_, i64>(
        r#"
        INSERT INTO bookings (title, date, start_time, end_time)
        VALUES ($1, $2, $3, $4)
        RETURNING id
        "#,
    )
    .bind(&booking.title)
    .bind(booking.date)
    .bind(booking.start)
    .bind(booking.end)
    .fetch_optional(executor)
    .await?
    .ok_or_else(|| eyre!("Unable to retrieve the id of the newly inserted booking"))?;

    Ok(id)
}

/// Overwrites title, date and times of the booking with the given id.
/// Updating a missing id affects zero rows and is not an error here.
pub async fn update<'e>(executor: impl PgExecutor<'e>, id: i64, booking: &Booking) -> Result<()> {
    sqlx::query(
        r#"
        UPDATE bookings
        SET title = $2, date = $3, start_time = $4, end_time = $5
        WHERE id = $1
        "#,
    )
    .bind(id)
    .bind(&booking.title)
    .bind(booking.date)
    .bind(booking.start)
    .bind(booking.end)
    .execute(executor)
    .await?;

    Ok(())
}

pub async fn delete<'e>(executor: impl PgExecutor<'e>, id: i64) -> Result<()> {
    sqlx::query(
        r#"
        DELETE FROM bookings
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(executor)
    .await?;

    Ok(())
}

/// Takes a transaction-scoped advisory lock keyed on the date, serializing
/// concurrent admission checks for the same day. Released automatically at
/// commit or rollback; must be called inside a transaction.
pub async fn lock_date<'e>(executor: impl PgExecutor<'e>, date: NaiveDate) -> Result<()> {
    sqlx::query("SELECT pg_advisory_xact_lock($1)")
        .bind(i64::from(date.num_days_from_ce()))
        .execute(executor)
        .await?;

    Ok(())
}
