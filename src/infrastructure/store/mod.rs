//! Key-value store adapter.
//!
//! All persistent state lives in an external key-value store, exposed to
//! the engines as the [`KvStore`] capability with two implementations:
//!
//! - [`RedisStore`] - Production Redis-backed store
//! - [`InMemoryStore`] - TTL-honoring in-memory store for tests and
//!   local development

mod memory_store;
mod redis_store;
mod service;

pub use memory_store::InMemoryStore;
pub use redis_store::RedisStore;
pub use service::{KvStore, StoreError, StoreResult};

#[cfg(test)]
pub use service::MockKvStore;
