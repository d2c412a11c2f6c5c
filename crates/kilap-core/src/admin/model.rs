//! Admin back-office views.

use serde::{Deserialize, Serialize};

use crate::booking::model::{Booking, OrderStatus};
use crate::service::model::Service;
use crate::tracking::model::StatusEntry;

/// Booking list filter: exact status match in the store, free-text search
/// applied afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookingFilter {
    pub status: Option<OrderStatus>,
    pub search: Option<String>,
}

/// A booking joined with its service and its status log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDetail {
    pub booking: Booking,
    /// `None` when the referenced service no longer exists.
    pub service: Option<Service>,
    /// Newest first.
    pub statuses: Vec<StatusEntry>,
    pub progress: u8,
    pub whatsapp_link: String,
}
