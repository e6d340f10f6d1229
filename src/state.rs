//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::{ResolverService, ShortenerService};
use crate::config::Config;
use crate::infrastructure::store::KvStore;

#[derive(Clone)]
pub struct AppState {
    pub shortener: Arc<ShortenerService>,
    pub resolver: Arc<ResolverService>,
    /// Kept alongside the services for the health endpoint's store probe.
    pub store: Arc<dyn KvStore>,
}

impl AppState {
    /// Wires the engines to a store implementation.
    pub fn new(store: Arc<dyn KvStore>, config: &Config) -> Self {
        let shortener = Arc::new(ShortenerService::new(
            store.clone(),
            config.base_url.clone(),
            config.default_expiry_days,
            config.max_expiry_days,
        ));

        let resolver = Arc::new(ResolverService::new(store.clone()));

        Self {
            shortener,
            resolver,
            store,
        }
    }
}
