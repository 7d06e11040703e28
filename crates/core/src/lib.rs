//! # Roombook Core
//!
//! Pure domain logic for the meeting room scheduler. This crate holds the
//! booking and interval models, the working-hours configuration value, and
//! the availability engine that decides whether a candidate booking is
//! admissible and where the free gaps of a day are.
//!
//! Nothing in this crate performs I/O; the engine operates on booking lists
//! that the callers load from storage.

pub mod availability;
pub mod errors;
pub mod models;
