//! In-memory store implementation.
//!
//! Honors the same TTL semantics as Redis, which makes it a drop-in
//! substitute in integration tests and local development without a
//! running Redis instance.

use super::service::{KvStore, StoreError, StoreResult};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

struct Entry {
    value: String,
    expires_at: Option<Instant>,
}

impl Entry {
    fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|deadline| Instant::now() >= deadline)
    }
}

/// In-memory key-value store with per-key expiry.
///
/// Expired entries are purged lazily on access. No background sweeper is
/// needed for test-sized data sets.
#[derive(Default)]
pub struct InMemoryStore {
    entries: RwLock<HashMap<String, Entry>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves a key's expiry into the past, simulating TTL lapse.
    ///
    /// Only meaningful in tests; Redis expires keys on its own clock.
    pub fn force_expire(&self, key: &str) {
        let mut entries = self.entries.write().expect("store lock poisoned");

        if let Some(entry) = entries.get_mut(key) {
            entry.expires_at = Some(Instant::now() - Duration::from_secs(1));
        }
    }

    /// Removes an expired entry and reports whether a live one remains.
    fn purge_if_expired(entries: &mut HashMap<String, Entry>, key: &str) -> bool {
        match entries.get(key) {
            Some(entry) if entry.is_expired() => {
                entries.remove(key);
                false
            }
            Some(_) => true,
            None => false,
        }
    }

    fn lock(&self) -> StoreResult<std::sync::RwLockWriteGuard<'_, HashMap<String, Entry>>> {
        self.entries
            .write()
            .map_err(|_| StoreError::Operation("store lock poisoned".to_string()))
    }
}

#[async_trait]
impl KvStore for InMemoryStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let mut entries = self.lock()?;

        if !Self::purge_if_expired(&mut entries, key) {
            return Ok(None);
        }

        Ok(entries.get(key).map(|e| e.value.clone()))
    }

    async fn set_ex(&self, key: &str, value: &str, ttl_seconds: u64) -> StoreResult<()> {
        let mut entries = self.lock()?;

        entries.insert(
            key.to_string(),
            Entry {
                value: value.to_string(),
                expires_at: Some(Instant::now() + Duration::from_secs(ttl_seconds)),
            },
        );

        Ok(())
    }

    async fn incr(&self, key: &str) -> StoreResult<i64> {
        let mut entries = self.lock()?;

        if !Self::purge_if_expired(&mut entries, key) {
            // Redis INCR creates a missing key with value 1 and no expiry
            entries.insert(
                key.to_string(),
                Entry {
                    value: "1".to_string(),
                    expires_at: None,
                },
            );
            return Ok(1);
        }

        let entry = entries.get_mut(key).expect("checked above");
        let current: i64 = entry.value.parse().map_err(|_| {
            StoreError::Operation(format!("value at '{}' is not an integer", key))
        })?;

        let next = current + 1;
        entry.value = next.to_string();

        Ok(next)
    }

    async fn ttl(&self, key: &str) -> StoreResult<i64> {
        let mut entries = self.lock()?;

        if !Self::purge_if_expired(&mut entries, key) {
            return Ok(-2);
        }

        match entries.get(key).and_then(|e| e.expires_at) {
            Some(deadline) => {
                let remaining = deadline.saturating_duration_since(Instant::now());
                Ok(remaining.as_secs_f64().ceil() as i64)
            }
            None => Ok(-1),
        }
    }

    async fn exists(&self, key: &str) -> StoreResult<bool> {
        let mut entries = self.lock()?;
        Ok(Self::purge_if_expired(&mut entries, key))
    }

    async fn health_check(&self) -> bool {
        true
    }
}
