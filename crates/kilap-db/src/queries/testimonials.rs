//! Customer testimonial queries.

use serde::{Deserialize, Serialize};

use crate::client::StoreResult;
use crate::store::{from_document, to_document, Direction, DocumentStore, Query};

pub const COLLECTION: &str = "testimonials";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestimonialRow {
    pub id: String,
    pub name: String,
    pub image: String,
    pub rating: f64,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestimonialFields {
    pub name: String,
    pub image: String,
    pub rating: f64,
    pub text: String,
}

/// Testimonials, highest rated first.
pub async fn list_testimonials(store: &dyn DocumentStore) -> StoreResult<Vec<TestimonialRow>> {
    let query = Query::new().order_by("rating", Direction::Descending);
    store
        .query(COLLECTION, &query)
        .await?
        .into_iter()
        .map(from_document)
        .collect()
}

pub async fn insert_testimonial(
    store: &dyn DocumentStore,
    fields: &TestimonialFields,
) -> StoreResult<TestimonialRow> {
    let doc = store.insert(COLLECTION, to_document(fields)?).await?;
    from_document(doc)
}
