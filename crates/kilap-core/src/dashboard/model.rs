//! Dashboard models.

use serde::{Deserialize, Serialize};

use crate::booking::model::Booking;

/// Headline counts and latest bookings for the admin dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_bookings: usize,
    /// Bookings not yet completed.
    pub active_bookings: usize,
    pub completed_bookings: usize,
    pub total_services: usize,
    pub recent: Vec<Booking>,
}
