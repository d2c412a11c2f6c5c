//! Service catalogue queries.

use serde::{Deserialize, Serialize};

use crate::client::StoreResult;
use crate::store::{from_document, to_document, Direction, DocumentStore, Query};

pub const COLLECTION: &str = "services";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceRow {
    pub id: String,
    pub name: String,
    pub price: u64,
    pub description: String,
    pub image_url: String,
}

/// Writable fields of a service row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceFields {
    pub name: String,
    pub price: u64,
    pub description: String,
    pub image_url: String,
}

pub async fn list_services(store: &dyn DocumentStore) -> StoreResult<Vec<ServiceRow>> {
    let query = Query::new().order_by("name", Direction::Ascending);
    store
        .query(COLLECTION, &query)
        .await?
        .into_iter()
        .map(from_document)
        .collect()
}

pub async fn get_service(store: &dyn DocumentStore, id: &str) -> StoreResult<Option<ServiceRow>> {
    store
        .get_one(COLLECTION, &Query::new().eq("id", id))
        .await?
        .map(from_document)
        .transpose()
}

pub async fn insert_service(
    store: &dyn DocumentStore,
    fields: &ServiceFields,
) -> StoreResult<ServiceRow> {
    let doc = store.insert(COLLECTION, to_document(fields)?).await?;
    from_document(doc)
}

pub async fn update_service(
    store: &dyn DocumentStore,
    id: &str,
    fields: &ServiceFields,
) -> StoreResult<()> {
    store.update(COLLECTION, id, to_document(fields)?).await
}

pub async fn delete_service(store: &dyn DocumentStore, id: &str) -> StoreResult<()> {
    store.delete(COLLECTION, id).await
}

pub async fn count_services(store: &dyn DocumentStore) -> StoreResult<usize> {
    store.count(COLLECTION, &Query::new()).await
}
