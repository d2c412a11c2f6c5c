//! Kilap Core Library
//!
//! Domain models and workflows for the shoe-cleaning booking service:
//! booking intake, status tracking, and the admin back-office.

pub mod admin;
pub mod booking;
pub mod dashboard;
pub mod error;
pub mod savings;
pub mod seed;
pub mod service;
pub mod testimonial;
pub mod tracking;

#[cfg(test)]
pub(crate) mod testing;

pub use booking::model::{Booking, BookingInput, OrderStatus};
pub use error::{KilapError, KilapResult};
pub use tracking::model::{StatusEntry, StatusHistory, TrackingInfo};

/// Wire format for timestamps: RFC 3339, UTC, fixed microsecond precision so
/// that lexical order matches chronological order.
pub(crate) fn wire_timestamp(at: chrono::DateTime<chrono::Utc>) -> String {
    at.to_rfc3339_opts(chrono::SecondsFormat::Micros, true)
}

pub(crate) fn parse_timestamp(
    field: &str,
    raw: &str,
) -> KilapResult<chrono::DateTime<chrono::Utc>> {
    chrono::DateTime::parse_from_rfc3339(raw)
        .map(|t| t.with_timezone(&chrono::Utc))
        .map_err(|e| KilapError::Malformed(format!("{} '{}': {}", field, raw, e)))
}
