//! Order tracking and status progression.

pub mod model;

use chrono::Utc;
use kilap_db::queries::bookings as booking_queries;
use kilap_db::queries::statuses::{self as queries, NewStatusRow};
use kilap_db::{Direction, DocumentStore, StoreResult};
use tracing::{info, instrument, warn};

use crate::booking::model::{Booking, OrderStatus};
use crate::error::{KilapError, KilapResult};
use model::{StatusEntry, StatusHistory, TrackingInfo};

pub use model::compute_progress;

/// Find a booking by its public order number. An unknown number is `Ok(None)`.
#[instrument(skip(store))]
pub async fn lookup_by_order_number(
    store: &dyn DocumentStore,
    order_number: &str,
) -> KilapResult<Option<Booking>> {
    let order_number = order_number.trim();
    if order_number.is_empty() {
        return Err(KilapError::validation("Order number is required"));
    }

    booking_queries::get_booking_by_order_number(store, order_number)
        .await?
        .map(Booking::from_row)
        .transpose()
}

/// Status log of a booking. One ascending fetch; callers pick the ordering.
pub async fn get_status_history(
    store: &dyn DocumentStore,
    booking_id: &str,
) -> KilapResult<StatusHistory> {
    let entries = queries::list_statuses(store, booking_id, Direction::Ascending)
        .await?
        .into_iter()
        .map(StatusEntry::from_row)
        .collect::<KilapResult<Vec<_>>>()?;
    Ok(StatusHistory::from_ascending(entries))
}

/// Booking, history and progress for one order number.
pub async fn track(store: &dyn DocumentStore, order_number: &str) -> KilapResult<Option<TrackingInfo>> {
    let Some(booking) = lookup_by_order_number(store, order_number).await? else {
        return Ok(None);
    };
    let history = get_status_history(store, &booking.id).await?;

    Ok(Some(TrackingInfo {
        progress: history.progress(),
        statuses: history.ascending().to_vec(),
        booking,
    }))
}

/// Set a booking's status and append the matching log entry.
///
/// Any status may follow any other, including moving backwards. Concurrent
/// calls for the same booking are last-write-wins on the booking record and
/// each appends its own log entry.
#[instrument(skip(store))]
pub async fn advance_status(
    store: &dyn DocumentStore,
    booking_id: &str,
    new_status: &str,
) -> KilapResult<StatusEntry> {
    let status: OrderStatus = new_status.parse()?;
    if booking_id.trim().is_empty() {
        return Err(KilapError::validation("Booking id is required"));
    }

    booking_queries::update_booking_status(store, booking_id, status.as_str())
        .await
        .map_err(|e| KilapError::from_store_lookup(e, format!("Booking {}", booking_id)))?;

    match append_status(store, booking_id, status).await {
        Ok(entry) => entry,
        Err(source) => {
            warn!(booking_id, error = %source, "Status append failed after booking update");
            Err(KilapError::PartialFailure {
                booking_id: booking_id.to_string(),
                order_number: None,
                step: "status log append",
                source,
            })
        }
    }
}

/// Repair a booking whose log does not end with its current status.
///
/// Appends one entry carrying `Booking.status` when the log is empty or its
/// newest entry names a different status. Returns whether an entry was
/// written. Running it again after a repair is a no-op.
#[instrument(skip(store))]
pub async fn reconcile(store: &dyn DocumentStore, booking_id: &str) -> KilapResult<bool> {
    let booking = booking_queries::get_booking(store, booking_id)
        .await?
        .map(Booking::from_row)
        .transpose()?
        .ok_or_else(|| KilapError::not_found(format!("Booking {}", booking_id)))?;

    let history = get_status_history(store, booking_id).await?;
    if history.latest().map(|e| e.status) == Some(booking.status) {
        return Ok(false);
    }

    append_status(store, booking_id, booking.status).await??;
    info!(booking_id, status = %booking.status, "Status log reconciled");
    Ok(true)
}

/// Write one log entry. The outer error is the store write; the inner one is
/// a stored row that fails to parse.
async fn append_status(
    store: &dyn DocumentStore,
    booking_id: &str,
    status: OrderStatus,
) -> StoreResult<KilapResult<StatusEntry>> {
    let row = NewStatusRow {
        booking_id: booking_id.to_string(),
        status: status.as_str().to_string(),
        timestamp: crate::wire_timestamp(Utc::now()),
    };

    let row = queries::insert_status(store, &row).await?;
    info!(booking_id, status = %status, "Status appended");
    Ok(StatusEntry::from_row(row))
}
