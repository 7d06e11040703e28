//! # Scheduling Service
//!
//! Orchestrates the availability engine against the booking repository:
//! loads the relevant day's bookings, applies the engine's decision, and
//! issues writes to storage.
//!
//! Admission is a read-check-insert sequence and would race under concurrent
//! writers to the same date, so `add` runs inside a transaction holding a
//! per-date advisory lock. The other operations go straight to the pool.

use chrono::NaiveDate;
use eyre::{Result, eyre};
use roombook_core::availability::AvailabilityEngine;
use roombook_core::models::{Booking, FreeInterval, WorkingHours};
use roombook_db::repositories::booking as booking_repo;
use sqlx::PgPool;
use tracing::debug;

pub struct BookingService {
    pool: PgPool,
    engine: AvailabilityEngine,
}

impl BookingService {
    pub fn new(pool: PgPool, working_hours: WorkingHours) -> Self {
        Self {
            pool,
            engine: AvailabilityEngine::new(working_hours),
        }
    }

    /// Admits and persists a candidate booking.
    ///
    /// Returns `Ok(None)` when the candidate is inadmissible; a refused
    /// booking is an expected outcome, not a fault. On success the booking is
    /// re-read from storage so the caller sees the assigned id.
    pub async fn add(&self, candidate: Booking) -> Result<Option<Booking>> {
        let mut tx = self.pool.begin().await?;

        // Serialize admission per date: two concurrent adds for the same day
        // must not both pass the conflict check before either insert commits.
        booking_repo::lock_date(&mut *tx, candidate.date).await?;

        let same_day: Vec<Booking> = booking_repo::list_by_date(&mut *tx, candidate.date)
            .await?
            .into_iter()
            .map(Into::into)
            .collect();

        if !self.engine.is_admissible(&candidate, &same_day) {
            debug!(date = %candidate.date, "candidate booking refused");
            tx.rollback().await?;
            return Ok(None);
        }

        let id = booking_repo::insert(&mut *tx, &candidate).await?;
        let created = booking_repo::get_by_id(&mut *tx, id)
            .await?
            .ok_or_else(|| eyre!("Inserted booking {id} could not be read back"))?;
        tx.commit().await?;

        debug!(id, date = %candidate.date, "booking created");
        Ok(Some(created.into()))
    }

    /// Every booking, ordered by date then start time.
    pub async fn all(&self) -> Result<Vec<Booking>> {
        let bookings = booking_repo::list_all(&self.pool).await?;
        Ok(bookings.into_iter().map(Into::into).collect())
    }

    /// A missing row is an empty result here, not an error.
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Booking>> {
        let booking = booking_repo::get_by_id(&self.pool, id).await?;
        Ok(booking.map(Into::into))
    }

    /// Free windows on `date` strictly longer than `duration_minutes`.
    pub async fn find_free_intervals(
        &self,
        date: NaiveDate,
        duration_minutes: i64,
    ) -> Result<Vec<FreeInterval>> {
        let same_day: Vec<Booking> = booking_repo::list_by_date(&self.pool, date)
            .await?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(self.engine.free_intervals(date, &same_day, duration_minutes))
    }

    /// Overwrites the booking with the given id.
    ///
    /// Deliberately does not re-run the admissibility check; updates are
    /// unvalidated in the source system this reimplements.
    pub async fn update(&self, id: i64, booking: Booking) -> Result<()> {
        booking_repo::update(&self.pool, id, &booking).await
    }

    /// Removes the booking by id. A missing id is indistinguishable from
    /// success at this layer.
    pub async fn delete(&self, id: i64) -> Result<()> {
        booking_repo::delete(&self.pool, id).await
    }
}
