//! The gateway contract shared by all backends.

use std::cmp::Ordering;
use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::client::{StoreError, StoreResult};

/// A single record as stored on the wire: a JSON object with snake_case keys.
pub type Document = Map<String, Value>;

/// Store handle passed explicitly into every workflow.
pub type SharedStore = Arc<dyn DocumentStore>;

/// Equality filter on a top-level field.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    Eq(String, Value),
}

impl Filter {
    fn matches(&self, doc: &Document) -> bool {
        match self {
            Filter::Eq(field, value) => doc.get(field) == Some(value),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderBy {
    pub field: String,
    pub direction: Direction,
}

/// Read directive: equality filters, one ordering key and an optional limit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    pub filters: Vec<Filter>,
    pub order: Option<OrderBy>,
    pub limit: Option<usize>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filters.push(Filter::Eq(field.into(), value.into()));
        self
    }

    pub fn order_by(mut self, field: impl Into<String>, direction: Direction) -> Self {
        self.order = Some(OrderBy {
            field: field.into(),
            direction,
        });
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// The id when this query is nothing but `id == <string>`.
    pub fn id_lookup(&self) -> Option<&str> {
        match self.filters.as_slice() {
            [Filter::Eq(field, Value::String(id))] if field == "id" => Some(id.as_str()),
            _ => None,
        }
    }

    /// Apply this query to records given in insertion order.
    ///
    /// Sorting is stable, so records with equal keys keep insertion order in
    /// both directions.
    pub fn apply(&self, docs: impl IntoIterator<Item = Document>) -> Vec<Document> {
        let mut out: Vec<Document> = docs
            .into_iter()
            .filter(|doc| self.filters.iter().all(|f| f.matches(doc)))
            .collect();

        if let Some(order) = &self.order {
            out.sort_by(|a, b| {
                let ord = compare_values(a.get(&order.field), b.get(&order.field));
                match order.direction {
                    Direction::Ascending => ord,
                    Direction::Descending => ord.reverse(),
                }
            });
        }

        if let Some(limit) = self.limit {
            out.truncate(limit);
        }
        out
    }
}

/// Total order over optional JSON values: missing < null < bool < number < string.
fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    fn rank(v: Option<&Value>) -> u8 {
        match v {
            None => 0,
            Some(Value::Null) => 1,
            Some(Value::Bool(_)) => 2,
            Some(Value::Number(_)) => 3,
            Some(Value::String(_)) => 4,
            Some(_) => 5,
        }
    }

    match (a, b) {
        (Some(Value::Bool(x)), Some(Value::Bool(y))) => x.cmp(y),
        (Some(Value::Number(x)), Some(Value::Number(y))) => {
            let x = x.as_f64().unwrap_or(f64::NAN);
            let y = y.as_f64().unwrap_or(f64::NAN);
            x.partial_cmp(&y).unwrap_or(Ordering::Equal)
        }
        (Some(Value::String(x)), Some(Value::String(y))) => x.cmp(y),
        _ => rank(a).cmp(&rank(b)),
    }
}

/// Remote document store contract.
///
/// Every call may fail with a transport error that callers must surface.
/// Single-record lookups report absence as `Ok(None)`, not as an error.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Records of `collection` matching `query`, in the requested order.
    async fn query(&self, collection: &str, query: &Query) -> StoreResult<Vec<Document>>;

    /// Store a new record. The backend assigns `id` and returns the stored record.
    async fn insert(&self, collection: &str, record: Document) -> StoreResult<Document>;

    /// Shallow-merge `fields` into the record with `id`.
    async fn update(&self, collection: &str, id: &str, fields: Document) -> StoreResult<()>;

    async fn delete(&self, collection: &str, id: &str) -> StoreResult<()>;

    /// First record matching `query`, or `None`.
    async fn get_one(&self, collection: &str, query: &Query) -> StoreResult<Option<Document>> {
        let query = Query {
            limit: Some(1),
            ..query.clone()
        };
        Ok(self.query(collection, &query).await?.into_iter().next())
    }

    async fn count(&self, collection: &str, query: &Query) -> StoreResult<usize> {
        Ok(self.query(collection, query).await?.len())
    }
}

/// Serialize a row into a wire document.
pub fn to_document<T: Serialize>(row: &T) -> StoreResult<Document> {
    match serde_json::to_value(row)? {
        Value::Object(map) => Ok(map),
        other => Err(StoreError::OperationFailed(format!(
            "expected a JSON object, got {}",
            other
        ))),
    }
}

/// Parse a wire document into a typed row, failing on any shape mismatch.
pub fn from_document<T: DeserializeOwned>(doc: Document) -> StoreResult<T> {
    Ok(serde_json::from_value(Value::Object(doc))?)
}
