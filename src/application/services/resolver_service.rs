//! Resolution and analytics engine: the read path.

use std::sync::Arc;

use crate::error::AppError;
use crate::infrastructure::store::KvStore;

use super::{clicks_key, format_expires_in, url_key};

/// Click and expiry statistics for a live short link.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkStats {
    pub short_code: String,
    pub long_url: String,
    pub clicks: i64,
    pub expires_in: String,
}

/// Service for resolving short codes and computing analytics.
pub struct ResolverService {
    store: Arc<dyn KvStore>,
}

impl ResolverService {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self { store }
    }

    /// Resolves a short code to its original URL, counting the click.
    ///
    /// The increment happens only after a successful lookup; a not-found
    /// resolution never touches the counter. A failed increment is a
    /// failed resolution: counter errors are surfaced, not hidden.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when the code never existed or has
    /// expired.
    pub async fn resolve(&self, short_code: &str) -> Result<String, AppError> {
        match self.store.get(&url_key(short_code)).await? {
            Some(long_url) => {
                self.store.incr(&clicks_key(short_code)).await?;

                tracing::debug!("Resolved '{}' to '{}'", short_code, long_url);

                Ok(long_url)
            }
            None => Err(AppError::NotFound(format!(
                "Short URL '{}' not found or expired",
                short_code
            ))),
        }
    }

    /// Computes analytics for a short code.
    ///
    /// Reads the URL record, click counter, and remaining TTL
    /// concurrently. A missing or unparseable counter reads as zero
    /// clicks, never as an error; the URL record alone decides
    /// existence.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when the URL record is absent,
    /// regardless of stale counter data.
    pub async fn analytics(&self, short_code: &str) -> Result<LinkStats, AppError> {
        let url_k = url_key(short_code);
        let clicks_k = clicks_key(short_code);

        let (url_result, clicks_result, ttl_result) = tokio::join!(
            self.store.get(&url_k),
            self.store.get(&clicks_k),
            self.store.ttl(&url_k),
        );

        let Some(long_url) = url_result? else {
            return Err(AppError::NotFound(format!(
                "Short URL '{}' not found or expired",
                short_code
            )));
        };

        let clicks = clicks_result?
            .and_then(|raw| raw.parse::<i64>().ok())
            .unwrap_or(0);

        let expires_in = format_expires_in(ttl_result?);

        Ok(LinkStats {
            short_code: short_code.to_string(),
            long_url,
            clicks,
            expires_in,
        })
    }
}
