//! Admin booking management.
//!
//! Status changes go through `tracking::advance_status`; this module covers
//! listing, searching and the joined detail view.

pub mod model;

use kilap_db::queries::bookings as queries;
use kilap_db::queries::services as service_queries;
use kilap_db::DocumentStore;
use tracing::debug;

use crate::booking::model::Booking;
use crate::error::{KilapError, KilapResult};
use crate::service::model::Service;
use crate::tracking;
use model::{BookingDetail, BookingFilter};

/// Bookings newest first, filtered by status in the store and by search term
/// in memory.
pub async fn list_bookings(store: &dyn DocumentStore, filter: &BookingFilter) -> KilapResult<Vec<Booking>> {
    let status = filter.status.map(|s| s.as_str());
    let bookings = queries::list_bookings(store, status, None)
        .await?
        .into_iter()
        .map(Booking::from_row)
        .collect::<KilapResult<Vec<_>>>()?;

    debug!(count = bookings.len(), "Loaded bookings");
    Ok(match filter.search.as_deref() {
        Some(term) => search_bookings(bookings, term),
        None => bookings,
    })
}

/// Keep bookings whose name, order number or phone contains `term`.
pub fn search_bookings(bookings: Vec<Booking>, term: &str) -> Vec<Booking> {
    let term = term.trim();
    if term.is_empty() {
        return bookings;
    }
    bookings.into_iter().filter(|b| b.matches_search(term)).collect()
}

/// Get a booking by ID.
pub async fn get_booking(store: &dyn DocumentStore, id: &str) -> KilapResult<Booking> {
    queries::get_booking(store, id)
        .await?
        .map(Booking::from_row)
        .transpose()?
        .ok_or_else(|| KilapError::not_found(format!("Booking {}", id)))
}

/// Booking with its service and newest-first status log.
pub async fn booking_detail(store: &dyn DocumentStore, id: &str) -> KilapResult<BookingDetail> {
    let booking = get_booking(store, id).await?;
    let service = service_queries::get_service(store, &booking.service_id)
        .await?
        .map(Service::from_row);
    let history = tracking::get_status_history(store, &booking.id).await?;

    Ok(BookingDetail {
        whatsapp_link: booking.whatsapp_link(),
        service,
        statuses: history.newest_first(),
        progress: history.progress(),
        booking,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::create_booking;
    use crate::booking::model::{BookingInput, OrderStatus};
    use crate::service::{create_service, model::ServiceInput};
    use crate::testing::budi;
    use kilap_db::MemoryStore;

    fn customer(name: &str, phone: &str) -> BookingInput {
        BookingInput {
            name: name.to_string(),
            phone: phone.to_string(),
            ..budi("svc-1")
        }
    }

    fn listed(order_number: &str, name: &str, phone: &str) -> Booking {
        Booking {
            id: order_number.to_lowercase(),
            order_number: order_number.to_string(),
            name: name.to_string(),
            phone: phone.to_string(),
            service_id: "svc-1".to_string(),
            date: "2024-01-01".to_string(),
            address: "Jl. A".to_string(),
            status: OrderStatus::Received,
            created_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_search_by_phone() {
        let bookings = vec![
            listed("AB12CD34", "Budi", "081234567890"),
            listed("ZX98YW76", "Citra", "0899999999"),
        ];
        let found = search_bookings(bookings, "081");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].phone, "081234567890");
    }

    #[tokio::test]
    async fn test_list_applies_search_term() {
        let store = MemoryStore::new();
        create_booking(&store, customer("Budi", "0811")).await.unwrap();
        create_booking(&store, customer("Citra", "0822")).await.unwrap();

        let filter = BookingFilter {
            status: None,
            search: Some("citra".to_string()),
        };
        let found = list_bookings(&store, &filter).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Citra");
    }

    #[tokio::test]
    async fn test_status_filter() {
        let store = MemoryStore::new();
        let number = create_booking(&store, customer("Budi", "0811")).await.unwrap();
        create_booking(&store, customer("Citra", "0822")).await.unwrap();
        let done = tracking::lookup_by_order_number(&store, &number).await.unwrap().unwrap();
        tracking::advance_status(&store, &done.id, "Selesai").await.unwrap();

        let filter = BookingFilter {
            status: Some(OrderStatus::Completed),
            search: None,
        };
        let found = list_bookings(&store, &filter).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].order_number, number);

        let all = list_bookings(&store, &BookingFilter::default()).await.unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn test_search_by_order_number_ignores_case() {
        let store = MemoryStore::new();
        let number = create_booking(&store, customer("Budi", "0811")).await.unwrap();
        let all = list_bookings(&store, &BookingFilter::default()).await.unwrap();

        let found = search_bookings(all, &number.to_lowercase());
        assert_eq!(found.len(), 1);
    }

    #[tokio::test]
    async fn test_detail_joins_service_and_history() {
        let store = MemoryStore::new();
        let service = create_service(
            &store,
            ServiceInput {
                name: "Cuci Premium".to_string(),
                price: Some(50000),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        let number = create_booking(&store, budi(&service.id)).await.unwrap();
        let booking = tracking::lookup_by_order_number(&store, &number).await.unwrap().unwrap();
        tracking::advance_status(&store, &booking.id, "Dalam Proses Cuci").await.unwrap();

        let detail = booking_detail(&store, &booking.id).await.unwrap();
        assert_eq!(detail.service.map(|s| s.name), Some("Cuci Premium".to_string()));
        assert_eq!(detail.statuses.len(), 2);
        assert_eq!(detail.statuses[0].status, OrderStatus::Washing);
        assert_eq!(detail.progress, 50);
    }

    #[tokio::test]
    async fn test_detail_without_service() {
        let store = MemoryStore::new();
        let number = create_booking(&store, budi("deleted-service")).await.unwrap();
        let booking = tracking::lookup_by_order_number(&store, &number).await.unwrap().unwrap();

        let detail = booking_detail(&store, &booking.id).await.unwrap();
        assert!(detail.service.is_none());
    }

    #[tokio::test]
    async fn test_detail_unknown_booking() {
        let store = MemoryStore::new();
        assert!(matches!(
            booking_detail(&store, "missing").await,
            Err(KilapError::NotFound(_))
        ));
    }
}
