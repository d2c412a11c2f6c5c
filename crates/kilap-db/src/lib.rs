//! Kilap Data Layer
//!
//! Document-store gateway used by every workflow. Records live in named
//! collections and are read back through equality filters, a single ordering
//! key and an optional limit. Two backends are provided: Redis for deployments
//! and an in-memory store for tests and local demos.

pub mod client;
pub mod memory;
pub mod queries;
pub mod redis_store;
pub mod store;

pub use client::{init_pool, RedisPool, StoreError, StoreResult};
pub use memory::MemoryStore;
pub use queries::bookings;
pub use queries::services;
pub use queries::statuses;
pub use queries::testimonials;
pub use redis_store::RedisStore;
pub use store::{Direction, Document, DocumentStore, Filter, OrderBy, Query, SharedStore};
