pub mod booking;
pub mod interval;
pub mod working_hours;

pub use booking::Booking;
pub use interval::FreeInterval;
pub use working_hours::WorkingHours;
