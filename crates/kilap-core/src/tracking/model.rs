//! Status log models.

use chrono::{DateTime, Utc};
use kilap_db::queries::statuses::StatusRow;
use serde::{Deserialize, Serialize};

use crate::booking::model::{Booking, OrderStatus};
use crate::error::{KilapError, KilapResult};

/// Number of named stages a booking passes through.
pub const STATUS_STAGES: usize = 4;

/// One entry of a booking's append-only status log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusEntry {
    pub id: String,
    pub booking_id: String,
    pub status: OrderStatus,
    pub timestamp: DateTime<Utc>,
}

impl StatusEntry {
    /// Create a StatusEntry from a database row.
    pub fn from_row(row: StatusRow) -> KilapResult<Self> {
        let status = row.status.parse::<OrderStatus>().map_err(|_| {
            KilapError::Malformed(format!(
                "status record {} has unknown status '{}'",
                row.id, row.status
            ))
        })?;
        let timestamp = crate::parse_timestamp("timestamp", &row.timestamp)?;

        Ok(Self {
            id: row.id,
            booking_id: row.booking_id,
            status,
            timestamp,
        })
    }
}

/// Status log of one booking, held oldest first. Both orderings are served
/// from the same fetch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatusHistory {
    entries: Vec<StatusEntry>,
}

impl StatusHistory {
    /// `entries` must already be sorted oldest first.
    pub fn from_ascending(entries: Vec<StatusEntry>) -> Self {
        Self { entries }
    }

    pub fn ascending(&self) -> &[StatusEntry] {
        &self.entries
    }

    pub fn newest_first(&self) -> Vec<StatusEntry> {
        self.entries.iter().rev().cloned().collect()
    }

    pub fn latest(&self) -> Option<&StatusEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn progress(&self) -> u8 {
        compute_progress(self.entries.as_slice())
    }
}

/// Progress percentage from the number of log entries alone.
///
/// This counts entries; it does not look at which stages they name. A
/// repeated or skipped stage therefore moves the figure as much as a real
/// step forward.
pub fn compute_progress<T>(statuses: &[T]) -> u8 {
    let ratio = statuses.len() as f64 / STATUS_STAGES as f64;
    (ratio * 100.0).round().min(100.0) as u8
}

/// Everything the public tracking page shows for one order number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingInfo {
    pub booking: Booking,
    /// Oldest first.
    pub statuses: Vec<StatusEntry>,
    pub progress: u8,
}
