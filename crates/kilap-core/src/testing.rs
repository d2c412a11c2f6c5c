//! Test doubles shared by the workflow tests.

use std::sync::Mutex;

use async_trait::async_trait;
use kilap_db::{Document, DocumentStore, MemoryStore, Query, StoreError, StoreResult};

use crate::booking::model::BookingInput;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Query,
    Insert,
    Update,
}

/// MemoryStore wrapper that fails chosen operations on chosen collections.
#[derive(Default)]
pub struct FaultyStore {
    inner: MemoryStore,
    failures: Mutex<Vec<(Op, &'static str)>>,
}

impl FaultyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn inner(&self) -> &MemoryStore {
        &self.inner
    }

    pub fn fail(&self, op: Op, collection: &'static str) {
        self.failures.lock().unwrap().push((op, collection));
    }

    pub fn heal(&self) {
        self.failures.lock().unwrap().clear();
    }

    fn check(&self, op: Op, collection: &str) -> StoreResult<()> {
        let failures = self.failures.lock().unwrap();
        if failures.iter().any(|(o, c)| *o == op && *c == collection) {
            return Err(StoreError::OperationFailed(format!(
                "injected {:?} failure on {}",
                op, collection
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for FaultyStore {
    async fn query(&self, collection: &str, query: &Query) -> StoreResult<Vec<Document>> {
        self.check(Op::Query, collection)?;
        self.inner.query(collection, query).await
    }

    async fn insert(&self, collection: &str, record: Document) -> StoreResult<Document> {
        self.check(Op::Insert, collection)?;
        self.inner.insert(collection, record).await
    }

    async fn update(&self, collection: &str, id: &str, fields: Document) -> StoreResult<()> {
        self.check(Op::Update, collection)?;
        self.inner.update(collection, id, fields).await
    }

    async fn delete(&self, collection: &str, id: &str) -> StoreResult<()> {
        self.inner.delete(collection, id).await
    }
}

/// A complete booking form for service `service_id`.
pub fn budi(service_id: &str) -> BookingInput {
    BookingInput {
        name: "Budi".to_string(),
        phone: "081234567890".to_string(),
        service_id: service_id.to_string(),
        date: "2024-01-01".to_string(),
        address: "Jl. A".to_string(),
    }
}
