//! Centralized error types for Kilap workflows.

use kilap_db::StoreError;
use thiserror::Error;

/// Main error type for Kilap operations.
#[derive(Error, Debug)]
pub enum KilapError {
    /// Missing or malformed input, rejected before any store call.
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// The store call itself failed (network, auth, quota, backend error).
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// A stored record does not fit the domain model.
    #[error("Malformed record: {0}")]
    Malformed(String),

    /// The first write of a two-step sequence landed but the second did not.
    #[error("Booking {booking_id} was saved but {step} failed: {source}")]
    PartialFailure {
        booking_id: String,
        order_number: Option<String>,
        step: &'static str,
        #[source]
        source: StoreError,
    },
}

/// Result type for Kilap operations.
pub type KilapResult<T> = Result<T, KilapError>;

impl KilapError {
    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a not found error.
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn is_partial_failure(&self) -> bool {
        matches!(self, Self::PartialFailure { .. })
    }

    /// Store errors that mean "no such record" become `NotFound`.
    pub(crate) fn from_store_lookup(err: StoreError, what: impl Into<String>) -> Self {
        match err {
            StoreError::NotFound(_) => Self::NotFound(what.into()),
            other => Self::Store(other),
        }
    }
}
