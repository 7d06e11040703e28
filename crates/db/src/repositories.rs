pub mod booking;
