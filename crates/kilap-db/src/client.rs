//! Store errors and the Redis connection used by `RedisStore`.

use redis::aio::ConnectionManager;
use thiserror::Error;

/// Errors raised by a document store.
///
/// Every variant is a failed call. Absence on a lookup is not an error: the
/// gateway returns `Ok(None)` for that.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Network, auth or server-side failure talking to Redis.
    #[error("Redis connection error: {0}")]
    Connection(#[from] redis::RedisError),

    /// A record did not match the row shape it was read as.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// `update` or `delete` addressed an id the collection does not hold.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The backend refused the write, or a caller gave up after retrying.
    #[error("Operation failed: {0}")]
    OperationFailed(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Shared Redis handle. Cloning is cheap; each store call clones one to get
/// a mutable connection.
pub type RedisPool = ConnectionManager;

/// Open the connection behind `--redis-url` / `REDIS_URL`.
pub async fn init_pool(redis_url: &str) -> StoreResult<RedisPool> {
    let client = redis::Client::open(redis_url)?;
    Ok(ConnectionManager::new(client).await?)
}
