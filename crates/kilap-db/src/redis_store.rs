//! Redis-backed document store.
//!
//! Key layout per collection:
//! - `kilap:{collection}:{id}` hash, field `data` holds the record JSON
//! - `kilap:{collection}:all` sorted set of ids scored by insertion sequence
//! - `kilap:{collection}:seq` insertion counter
//!
//! Filters, ordering and limits are evaluated client-side after loading the
//! collection in insertion order.

use async_trait::async_trait;
use redis::AsyncCommands;
use serde_json::Value;
use tracing::debug;

use crate::client::{init_pool, RedisPool, StoreError, StoreResult};
use crate::store::{Document, DocumentStore, Query};

#[derive(Clone)]
pub struct RedisStore {
    pool: RedisPool,
}

impl RedisStore {
    pub fn new(pool: RedisPool) -> Self {
        Self { pool }
    }

    /// Connect to the Redis server at `redis_url`.
    pub async fn connect(redis_url: &str) -> StoreResult<Self> {
        Ok(Self::new(init_pool(redis_url).await?))
    }

    fn record_key(collection: &str, id: &str) -> String {
        format!("kilap:{}:{}", collection, id)
    }

    fn index_key(collection: &str) -> String {
        format!("kilap:{}:all", collection)
    }

    fn seq_key(collection: &str) -> String {
        format!("kilap:{}:seq", collection)
    }

    async fn load(&self, collection: &str, id: &str) -> StoreResult<Option<Document>> {
        let mut conn = self.pool.clone();
        let json: Option<String> = conn.hget(Self::record_key(collection, id), "data").await?;
        match json {
            Some(j) => Ok(Some(serde_json::from_str(&j)?)),
            None => Ok(None),
        }
    }

    async fn save(&self, collection: &str, id: &str, record: &Document) -> StoreResult<()> {
        let mut conn = self.pool.clone();
        let json = serde_json::to_string(record)?;
        conn.hset::<_, _, _, ()>(Self::record_key(collection, id), "data", json)
            .await?;
        Ok(())
    }

    async fn load_all(&self, collection: &str) -> StoreResult<Vec<Document>> {
        let mut conn = self.pool.clone();
        let ids: Vec<String> = conn.zrange(Self::index_key(collection), 0, -1).await?;
        let mut docs = Vec::with_capacity(ids.len());
        for id in ids {
            if let Some(doc) = self.load(collection, &id).await? {
                docs.push(doc);
            }
        }
        Ok(docs)
    }
}

#[async_trait]
impl DocumentStore for RedisStore {
    async fn query(&self, collection: &str, query: &Query) -> StoreResult<Vec<Document>> {
        debug!(collection, filters = query.filters.len(), "redis query");
        let docs = self.load_all(collection).await?;
        Ok(query.apply(docs))
    }

    /// Lookups by id read the one record instead of the whole collection.
    async fn get_one(&self, collection: &str, query: &Query) -> StoreResult<Option<Document>> {
        if let Some(id) = query.id_lookup() {
            debug!(collection, id, "redis get by id");
            return self.load(collection, id).await;
        }
        let query = Query {
            limit: Some(1),
            ..query.clone()
        };
        Ok(self.query(collection, &query).await?.into_iter().next())
    }

    async fn insert(&self, collection: &str, mut record: Document) -> StoreResult<Document> {
        let id = uuid::Uuid::new_v4().to_string();
        record.insert("id".to_string(), Value::String(id.clone()));

        let mut conn = self.pool.clone();
        let seq: i64 = conn.incr(Self::seq_key(collection), 1).await?;
        self.save(collection, &id, &record).await?;
        conn.zadd::<_, _, _, ()>(Self::index_key(collection), &id, seq)
            .await?;

        debug!(collection, id = %id, "redis insert");
        Ok(record)
    }

    async fn update(&self, collection: &str, id: &str, fields: Document) -> StoreResult<()> {
        let mut record = self
            .load(collection, id)
            .await?
            .ok_or_else(|| StoreError::NotFound(format!("{}/{}", collection, id)))?;

        for (key, value) in fields {
            if key != "id" {
                record.insert(key, value);
            }
        }
        self.save(collection, id, &record).await?;
        debug!(collection, id, "redis update");
        Ok(())
    }

    async fn delete(&self, collection: &str, id: &str) -> StoreResult<()> {
        let mut conn = self.pool.clone();
        let removed: i64 = conn.del(Self::record_key(collection, id)).await?;
        if removed == 0 {
            return Err(StoreError::NotFound(format!("{}/{}", collection, id)));
        }
        conn.zrem::<_, _, ()>(Self::index_key(collection), id).await?;
        debug!(collection, id, "redis delete");
        Ok(())
    }
}
