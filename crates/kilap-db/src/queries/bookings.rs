//! Booking queries.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::client::StoreResult;
use crate::store::{from_document, to_document, Direction, Document, DocumentStore, Query};

pub const COLLECTION: &str = "bookings";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingRow {
    pub id: String,
    pub order_number: String,
    pub name: String,
    pub phone: String,
    pub service_id: String,
    pub date: String,
    pub address: String,
    pub status: String,
    pub created_at: String,
}

/// A booking row before the store assigns its id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewBookingRow {
    pub order_number: String,
    pub name: String,
    pub phone: String,
    pub service_id: String,
    pub date: String,
    pub address: String,
    pub status: String,
    pub created_at: String,
}

pub async fn insert_booking(
    store: &dyn DocumentStore,
    row: &NewBookingRow,
) -> StoreResult<BookingRow> {
    let doc = store.insert(COLLECTION, to_document(row)?).await?;
    from_document(doc)
}

pub async fn get_booking(store: &dyn DocumentStore, id: &str) -> StoreResult<Option<BookingRow>> {
    store
        .get_one(COLLECTION, &Query::new().eq("id", id))
        .await?
        .map(from_document)
        .transpose()
}

pub async fn get_booking_by_order_number(
    store: &dyn DocumentStore,
    order_number: &str,
) -> StoreResult<Option<BookingRow>> {
    store
        .get_one(COLLECTION, &Query::new().eq("order_number", order_number))
        .await?
        .map(from_document)
        .transpose()
}

/// Bookings newest first, optionally restricted to one status.
pub async fn list_bookings(
    store: &dyn DocumentStore,
    status: Option<&str>,
    limit: Option<usize>,
) -> StoreResult<Vec<BookingRow>> {
    let mut query = Query::new().order_by("created_at", Direction::Descending);
    if let Some(status) = status {
        query = query.eq("status", status);
    }
    if let Some(limit) = limit {
        query = query.limit(limit);
    }
    store
        .query(COLLECTION, &query)
        .await?
        .into_iter()
        .map(from_document)
        .collect()
}

pub async fn update_booking_status(
    store: &dyn DocumentStore,
    id: &str,
    status: &str,
) -> StoreResult<()> {
    let mut fields = Document::new();
    fields.insert("status".to_string(), Value::String(status.to_string()));
    store.update(COLLECTION, id, fields).await
}

pub async fn count_bookings(store: &dyn DocumentStore, status: Option<&str>) -> StoreResult<usize> {
    let mut query = Query::new();
    if let Some(status) = status {
        query = query.eq("status", status);
    }
    store.count(COLLECTION, &query).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::StoreError;
    use crate::memory::MemoryStore;
    use serde_json::json;

    fn new_row(order_number: &str, status: &str, created_at: &str) -> NewBookingRow {
        NewBookingRow {
            order_number: order_number.to_string(),
            name: "Budi".to_string(),
            phone: "081234567890".to_string(),
            service_id: "svc-1".to_string(),
            date: "2024-01-01".to_string(),
            address: "Jl. A".to_string(),
            status: status.to_string(),
            created_at: created_at.to_string(),
        }
    }

    #[tokio::test]
    async fn test_lookup_by_order_number() {
        let store = MemoryStore::new();
        let created = insert_booking(&store, &new_row("AB12CD34", "Order Diterima", "2024-01-01T08:00:00.000000Z"))
            .await
            .unwrap();

        let found = get_booking_by_order_number(&store, "AB12CD34").await.unwrap();
        assert_eq!(found, Some(created));
        assert!(get_booking_by_order_number(&store, "XXXXXXXX").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_newest_first_with_status_filter() {
        let store = MemoryStore::new();
        insert_booking(&store, &new_row("AAAAAAAA", "Selesai", "2024-01-01T08:00:00.000000Z")).await.unwrap();
        insert_booking(&store, &new_row("BBBBBBBB", "Order Diterima", "2024-01-02T08:00:00.000000Z")).await.unwrap();
        insert_booking(&store, &new_row("CCCCCCCC", "Selesai", "2024-01-03T08:00:00.000000Z")).await.unwrap();

        let all = list_bookings(&store, None, None).await.unwrap();
        let numbers: Vec<_> = all.iter().map(|b| b.order_number.as_str()).collect();
        assert_eq!(numbers, vec!["CCCCCCCC", "BBBBBBBB", "AAAAAAAA"]);

        let done = list_bookings(&store, Some("Selesai"), Some(1)).await.unwrap();
        assert_eq!(done.len(), 1);
        assert_eq!(done[0].order_number, "CCCCCCCC");

        assert_eq!(count_bookings(&store, Some("Selesai")).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_malformed_row_is_rejected() {
        let store = MemoryStore::new();
        store
            .insert(COLLECTION, json!({"order_number": "AB12CD34"}).as_object().cloned().unwrap())
            .await
            .unwrap();

        let err = get_booking_by_order_number(&store, "AB12CD34").await.unwrap_err();
        assert!(matches!(err, StoreError::Serialization(_)));
    }
}
