//! Store trait and error types.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during store operations.
///
/// Unlike a cache, the store is the system of record: errors are never
/// swallowed, they propagate to the request boundary.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Store connection error: {0}")]
    Connection(String),

    #[error("Store operation error: {0}")]
    Operation(String),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Capability trait for the external key-value store.
///
/// The engines treat the store as an injected capability, never a
/// singleton, so tests can substitute [`crate::infrastructure::store::InMemoryStore`]
/// or a mock. Implementations must be thread-safe; the engines perform no
/// in-process synchronization and rely on the store's per-operation
/// atomicity.
///
/// # Implementations
///
/// - [`crate::infrastructure::store::RedisStore`] - Redis with TTL support
/// - [`crate::infrastructure::store::InMemoryStore`] - in-memory substitute
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait KvStore: Send + Sync {
    /// Retrieves the value stored under `key`.
    ///
    /// Returns `Ok(None)` when the key does not exist or has expired.
    async fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Stores `value` under `key` with a time-to-live in seconds.
    ///
    /// Overwrites any existing value and resets the TTL.
    async fn set_ex(&self, key: &str, value: &str, ttl_seconds: u64) -> StoreResult<()>;

    /// Atomically increments the integer stored under `key` by one.
    ///
    /// A missing key is created with value 1 (Redis `INCR` semantics).
    /// Returns the value after the increment.
    async fn incr(&self, key: &str) -> StoreResult<i64>;

    /// Remaining time-to-live of `key` in seconds.
    ///
    /// Returns `-2` when the key does not exist and `-1` when it exists
    /// without an expiry (Redis `TTL` semantics).
    async fn ttl(&self, key: &str) -> StoreResult<i64>;

    /// Returns `true` if `key` exists and has not expired.
    async fn exists(&self, key: &str) -> StoreResult<bool>;

    /// Checks if the store backend is reachable.
    ///
    /// Used by the health endpoint to report store status.
    async fn health_check(&self) -> bool;
}
