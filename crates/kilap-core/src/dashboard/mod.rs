//! Admin dashboard.

pub mod model;

use kilap_db::queries::{bookings, services};
use kilap_db::DocumentStore;

use crate::booking::model::{Booking, OrderStatus};
use crate::error::KilapResult;
use model::DashboardSummary;

/// How many bookings the dashboard lists.
pub const RECENT_BOOKINGS: usize = 5;

pub async fn summary(store: &dyn DocumentStore) -> KilapResult<DashboardSummary> {
    let total_services = services::count_services(store).await?;
    let total_bookings = bookings::count_bookings(store, None).await?;
    let completed_bookings =
        bookings::count_bookings(store, Some(OrderStatus::Completed.as_str())).await?;
    let recent = bookings::list_bookings(store, None, Some(RECENT_BOOKINGS))
        .await?
        .into_iter()
        .map(Booking::from_row)
        .collect::<KilapResult<Vec<_>>>()?;

    Ok(DashboardSummary {
        total_bookings,
        active_bookings: total_bookings.saturating_sub(completed_bookings),
        completed_bookings,
        total_services,
        recent,
    })
}
