use chrono::NaiveDate;
use mockall::mock;
use roombook_core::models::Booking;

use crate::models::DbBooking;

// Mock repository for testing
mock! {
    pub BookingRepo {
        pub async fn list_by_date(&self, date: NaiveDate) -> eyre::Result<Vec<DbBooking>>;

        pub async fn list_all(&self) -> eyre::Result<Vec<DbBooking>>;

        pub async fn get_by_id(&self, id: i64) -> eyre::Result<Option<DbBooking>>;

        pub async fn insert(&self, booking: Booking) -> eyre::Result<i64>;

        pub async fn update(&self, id: i64, booking: Booking) -> eyre::Result<()>;

        pub async fn delete(&self, id: i64) -> eyre::Result<()>;
    }
}
