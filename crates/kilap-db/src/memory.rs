//! In-memory document store.
//!
//! Keeps each collection in insertion order behind a tokio RwLock. Used as the
//! test double for workflows and by `kilap --memory` for local demos.

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::debug;

use crate::client::{StoreError, StoreResult};
use crate::store::{Document, DocumentStore, Query};

#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, Vec<Document>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records currently held in `collection`.
    pub async fn len(&self, collection: &str) -> usize {
        self.collections
            .read()
            .await
            .get(collection)
            .map_or(0, Vec::len)
    }
}

fn id_of(doc: &Document) -> Option<&str> {
    doc.get("id").and_then(Value::as_str)
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn query(&self, collection: &str, query: &Query) -> StoreResult<Vec<Document>> {
        let guard = self.collections.read().await;
        let docs = guard.get(collection).cloned().unwrap_or_default();
        Ok(query.apply(docs))
    }

    async fn insert(&self, collection: &str, mut record: Document) -> StoreResult<Document> {
        let id = uuid::Uuid::new_v4().to_string();
        record.insert("id".to_string(), Value::String(id.clone()));

        let mut guard = self.collections.write().await;
        guard
            .entry(collection.to_string())
            .or_default()
            .push(record.clone());
        debug!(collection, id = %id, "inserted record");
        Ok(record)
    }

    async fn update(&self, collection: &str, id: &str, fields: Document) -> StoreResult<()> {
        let mut guard = self.collections.write().await;
        let record = guard
            .get_mut(collection)
            .and_then(|docs| docs.iter_mut().find(|d| id_of(d) == Some(id)))
            .ok_or_else(|| StoreError::NotFound(format!("{}/{}", collection, id)))?;

        for (key, value) in fields {
            if key != "id" {
                record.insert(key, value);
            }
        }
        debug!(collection, id, "updated record");
        Ok(())
    }

    async fn delete(&self, collection: &str, id: &str) -> StoreResult<()> {
        let mut guard = self.collections.write().await;
        let docs = guard
            .get_mut(collection)
            .ok_or_else(|| StoreError::NotFound(format!("{}/{}", collection, id)))?;
        let before = docs.len();
        docs.retain(|d| id_of(d) != Some(id));
        if docs.len() == before {
            return Err(StoreError::NotFound(format!("{}/{}", collection, id)));
        }
        debug!(collection, id, "deleted record");
        Ok(())
    }
}
