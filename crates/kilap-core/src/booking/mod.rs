//! Booking intake.
//!
//! A booking is written as two records: the booking itself and its first
//! status log entry. The store offers no multi-record transaction, so a
//! failure of the second write is reported as `PartialFailure` and left for
//! `tracking::reconcile` to repair.

pub mod model;
pub mod order_number;

use chrono::Utc;
use kilap_db::queries::bookings::{self as queries, NewBookingRow};
use kilap_db::queries::statuses::{self as status_queries, NewStatusRow};
use kilap_db::{DocumentStore, StoreError};
use tracing::{info, instrument, warn};

use crate::error::{KilapError, KilapResult};
use model::{BookingInput, OrderStatus};

/// How many order numbers to draw before giving up on finding a free one.
pub const ORDER_NUMBER_ATTEMPTS: usize = 5;

/// Create a booking and its initial status record. Returns the order number.
pub async fn create_booking(store: &dyn DocumentStore, input: BookingInput) -> KilapResult<String> {
    let mut rng = fastrand::Rng::new();
    create_booking_with_rng(store, input, &mut rng).await
}

/// Same as [`create_booking`] with a caller-supplied random source.
#[instrument(skip(store, input, rng), fields(service_id = %input.service_id))]
pub async fn create_booking_with_rng(
    store: &dyn DocumentStore,
    input: BookingInput,
    rng: &mut fastrand::Rng,
) -> KilapResult<String> {
    input.validate()?;

    let order_number = free_order_number(store, rng).await?;
    let now = crate::wire_timestamp(Utc::now());
    let initial = OrderStatus::Received;

    let booking = queries::insert_booking(
        store,
        &NewBookingRow {
            order_number: order_number.clone(),
            name: input.name,
            phone: input.phone,
            service_id: input.service_id,
            date: input.date,
            address: input.address,
            status: initial.as_str().to_string(),
            created_at: now.clone(),
        },
    )
    .await?;

    let entry = NewStatusRow {
        booking_id: booking.id.clone(),
        status: initial.as_str().to_string(),
        timestamp: now,
    };
    if let Err(source) = status_queries::insert_status(store, &entry).await {
        warn!(booking_id = %booking.id, error = %source, "Initial status write failed");
        return Err(KilapError::PartialFailure {
            booking_id: booking.id,
            order_number: Some(order_number),
            step: "initial status record",
            source,
        });
    }

    info!(booking_id = %booking.id, order_number = %order_number, "Booking created");
    Ok(order_number)
}

/// Draw order numbers until one is not already taken.
async fn free_order_number(store: &dyn DocumentStore, rng: &mut fastrand::Rng) -> KilapResult<String> {
    for attempt in 1..=ORDER_NUMBER_ATTEMPTS {
        let candidate = order_number::generate(rng);
        if queries::get_booking_by_order_number(store, &candidate)
            .await?
            .is_none()
        {
            return Ok(candidate);
        }
        warn!(attempt, candidate = %candidate, "Order number collision");
    }
    Err(KilapError::Store(StoreError::OperationFailed(format!(
        "no free order number after {} attempts",
        ORDER_NUMBER_ATTEMPTS
    ))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{budi, FaultyStore, Op};
    use crate::tracking;
    use kilap_db::MemoryStore;

    #[tokio::test]
    async fn test_create_returns_well_formed_order_number() {
        let store = MemoryStore::new();
        let number = create_booking(&store, budi("svc-1")).await.unwrap();
        assert!(order_number::is_well_formed(&number));
    }

    #[tokio::test]
    async fn test_round_trip_through_lookup() {
        let store = MemoryStore::new();
        let input = budi("svc-1");
        let number = create_booking(&store, input.clone()).await.unwrap();

        let booking = tracking::lookup_by_order_number(&store, &number)
            .await
            .unwrap()
            .expect("booking should exist");
        assert_eq!(booking.name, input.name);
        assert_eq!(booking.phone, input.phone);
        assert_eq!(booking.service_id, input.service_id);
        assert_eq!(booking.date, input.date);
        assert_eq!(booking.address, input.address);
        assert_eq!(booking.status, OrderStatus::Received);
    }

    #[tokio::test]
    async fn test_new_booking_has_single_initial_status() {
        let store = MemoryStore::new();
        let number = create_booking(&store, budi("svc-1")).await.unwrap();
        let booking = tracking::lookup_by_order_number(&store, &number)
            .await
            .unwrap()
            .unwrap();

        let history = tracking::get_status_history(&store, &booking.id).await.unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history.ascending()[0].status, OrderStatus::Received);
    }

    #[tokio::test]
    async fn test_missing_field_fails_before_any_write() {
        let store = MemoryStore::new();
        let mut input = budi("svc-1");
        input.address.clear();

        let err = create_booking(&store, input).await.unwrap_err();
        assert!(matches!(err, KilapError::Validation(_)));
        assert_eq!(store.len("bookings").await, 0);
        assert_eq!(store.len("statuses").await, 0);
    }

    #[tokio::test]
    async fn test_collision_draws_again() {
        let store = MemoryStore::new();
        let taken = order_number::generate(&mut fastrand::Rng::with_seed(42));
        create_booking_with_rng(&store, budi("svc-1"), &mut fastrand::Rng::with_seed(42))
            .await
            .unwrap();

        let second = create_booking_with_rng(&store, budi("svc-2"), &mut fastrand::Rng::with_seed(42))
            .await
            .unwrap();
        assert_ne!(second, taken);
        assert_eq!(store.len("bookings").await, 2);
    }

    #[tokio::test]
    async fn test_status_write_failure_is_partial() {
        let store = FaultyStore::new();
        store.fail(Op::Insert, "statuses");

        let err = create_booking(&store, budi("svc-1")).await.unwrap_err();
        match err {
            KilapError::PartialFailure { order_number, booking_id, .. } => {
                let number = order_number.expect("order number reported");
                let booking = tracking::lookup_by_order_number(&store, &number)
                    .await
                    .unwrap()
                    .unwrap();
                assert_eq!(booking.id, booking_id);
            }
            other => panic!("expected partial failure, got {:?}", other),
        }
        assert_eq!(store.inner().len("statuses").await, 0);
    }

    #[tokio::test]
    async fn test_booking_write_failure_is_not_partial() {
        let store = FaultyStore::new();
        store.fail(Op::Insert, "bookings");

        let err = create_booking(&store, budi("svc-1")).await.unwrap_err();
        assert!(matches!(err, KilapError::Store(_)));
        assert!(!err.is_partial_failure());
    }
}
