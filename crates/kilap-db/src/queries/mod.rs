//! Typed queries for each collection.
//!
//! Row types mirror the snake_case wire shape. Every read goes through
//! `from_document`, so a record with missing or mistyped fields is rejected
//! here instead of leaking partial data upward.

pub mod bookings;
pub mod services;
pub mod statuses;
pub mod testimonials;
