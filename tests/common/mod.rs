#![allow(dead_code)]

use std::sync::Arc;

use snip::application::services::{clicks_key, url_key};
use snip::config::Config;
use snip::infrastructure::store::{InMemoryStore, KvStore};
use snip::state::AppState;

pub const TEST_BASE_URL: &str = "http://sho.rt";

pub fn test_config() -> Config {
    Config {
        redis_url: "redis://localhost:6379".to_string(),
        base_url: TEST_BASE_URL.to_string(),
        listen_addr: "127.0.0.1:0".to_string(),
        log_level: "info".to_string(),
        log_format: "text".to_string(),
        default_expiry_days: 30,
        max_expiry_days: 365,
    }
}

/// Builds an [`AppState`] backed by an in-memory store.
///
/// The store handle is returned alongside for direct seeding and
/// inspection of keys.
pub fn create_test_state() -> (AppState, Arc<InMemoryStore>) {
    let store = Arc::new(InMemoryStore::new());
    let state = AppState::new(store.clone(), &test_config());

    (state, store)
}

/// Seeds a live mapping the way the shortening engine writes it.
pub async fn create_test_mapping(store: &InMemoryStore, code: &str, url: &str, ttl_seconds: u64) {
    store.set_ex(&url_key(code), url, ttl_seconds).await.unwrap();
    store.set_ex(&clicks_key(code), "0", ttl_seconds).await.unwrap();
}

/// Expires both keys of a mapping, simulating TTL lapse in the store.
pub fn expire_test_mapping(store: &InMemoryStore, code: &str) {
    store.force_expire(&url_key(code));
    store.force_expire(&clicks_key(code));
}

/// Reads the click counter straight from the store.
pub async fn read_clicks(store: &InMemoryStore, code: &str) -> i64 {
    store
        .get(&clicks_key(code))
        .await
        .unwrap()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(0)
}
