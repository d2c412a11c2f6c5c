//! Status log queries. The log is append-only: there is no update or delete.

use serde::{Deserialize, Serialize};

use crate::client::StoreResult;
use crate::store::{from_document, to_document, Direction, DocumentStore, Query};

pub const COLLECTION: &str = "statuses";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusRow {
    pub id: String,
    pub booking_id: String,
    pub status: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewStatusRow {
    pub booking_id: String,
    pub status: String,
    pub timestamp: String,
}

pub async fn insert_status(store: &dyn DocumentStore, row: &NewStatusRow) -> StoreResult<StatusRow> {
    let doc = store.insert(COLLECTION, to_document(row)?).await?;
    from_document(doc)
}

/// Status log of one booking ordered by timestamp.
pub async fn list_statuses(
    store: &dyn DocumentStore,
    booking_id: &str,
    direction: Direction,
) -> StoreResult<Vec<StatusRow>> {
    let query = Query::new()
        .eq("booking_id", booking_id)
        .order_by("timestamp", direction);
    store
        .query(COLLECTION, &query)
        .await?
        .into_iter()
        .map(from_document)
        .collect()
}
