//! Shortening engine: the write path.

use std::sync::Arc;

use crate::error::AppError;
use crate::infrastructure::store::KvStore;
use crate::utils::code_generator::generate_code;
use crate::utils::retry::retry_bounded;
use crate::utils::url_validator::is_valid_url;

use super::{clicks_key, url_key};

/// Collision retry bound for code generation.
const MAX_CODE_ATTEMPTS: usize = 5;

const SECONDS_PER_DAY: u64 = 86_400;

/// A freshly created short link.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortenedLink {
    pub short_code: String,
    pub short_url: String,
    pub long_url: String,
    pub expires_in: String,
}

/// Service for creating short links.
///
/// Orchestrates URL validation, collision-checked code generation, and
/// dual-key persistence (URL record plus click counter) with matching
/// expiry.
pub struct ShortenerService {
    store: Arc<dyn KvStore>,
    base_url: String,
    default_expiry_days: u32,
    max_expiry_days: u32,
}

impl ShortenerService {
    pub fn new(
        store: Arc<dyn KvStore>,
        base_url: String,
        default_expiry_days: u32,
        max_expiry_days: u32,
    ) -> Self {
        Self {
            store,
            base_url,
            default_expiry_days,
            max_expiry_days,
        }
    }

    /// Shortens `long_url`, expiring after `expiry_days` (configured
    /// default when `None`).
    ///
    /// # Persistence
    ///
    /// Writes two keys with the same TTL: `url:{code}` holding the
    /// original URL and `clicks:{code}` initialized to `"0"`. The two
    /// writes are not transactional; a crash between them leaves a URL
    /// record without a counter, which analytics reads as zero clicks.
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] when the URL is malformed or
    ///   `expiry_days` is zero or above the configured maximum
    /// - [`AppError::CodeExhausted`] when all generation attempts
    ///   collided; the caller may retry the whole request
    /// - [`AppError::StoreUnavailable`] / [`AppError::Internal`] on
    ///   store failures
    pub async fn shorten(
        &self,
        long_url: String,
        expiry_days: Option<u32>,
    ) -> Result<ShortenedLink, AppError> {
        if !is_valid_url(&long_url) {
            return Err(AppError::Validation("Invalid URL provided".to_string()));
        }

        let days = expiry_days.unwrap_or(self.default_expiry_days);
        if days == 0 || days > self.max_expiry_days {
            return Err(AppError::Validation(format!(
                "expiryDays must be between 1 and {}",
                self.max_expiry_days
            )));
        }

        let short_code = self.generate_unique_code().await?;
        let expiry_seconds = u64::from(days) * SECONDS_PER_DAY;

        self.store
            .set_ex(&url_key(&short_code), &long_url, expiry_seconds)
            .await?;

        // Counter expiry mirrors the URL record's expiry
        self.store
            .set_ex(&clicks_key(&short_code), "0", expiry_seconds)
            .await?;

        tracing::info!("Shortened URL to '{}' (expires in {} days)", short_code, days);

        let short_url = format!("{}/{}", self.base_url.trim_end_matches('/'), short_code);

        Ok(ShortenedLink {
            short_code,
            short_url,
            long_url,
            expires_in: format!("{} days", days),
        })
    }

    /// Generates a code that does not currently exist in the store.
    ///
    /// The existence check and the later write are separate store calls,
    /// so two concurrent requests can in principle both pass the check
    /// for the same code. The code space (62^7) keeps that window
    /// negligible rather than eliminated.
    async fn generate_unique_code(&self) -> Result<String, AppError> {
        let candidate = retry_bounded(MAX_CODE_ATTEMPTS, || async {
            let code = generate_code();

            if self.store.exists(&url_key(&code)).await? {
                tracing::debug!("Short code collision on '{}', retrying", code);
                Ok::<_, AppError>(None)
            } else {
                Ok(Some(code))
            }
        })
        .await?;

        candidate.ok_or(AppError::CodeExhausted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::store::{MockKvStore, StoreError};
    use crate::utils::code_generator::CODE_LENGTH;

    fn service(store: MockKvStore) -> ShortenerService {
        ShortenerService::new(Arc::new(store), "http://sho.rt".to_string(), 30, 365)
    }

    #[tokio::test]
    async fn test_shorten_success() {
        let mut store = MockKvStore::new();

        store
            .expect_exists()
            .withf(|key| key.starts_with("url:"))
            .times(1)
            .returning(|_| Ok(false));

        store
            .expect_set_ex()
            .withf(|key, _, ttl| key.starts_with("url:") && *ttl == 7 * 86_400)
            .times(1)
            .returning(|_, _, _| Ok(()));

        store
            .expect_set_ex()
            .withf(|key, value, ttl| {
                key.starts_with("clicks:") && value == "0" && *ttl == 7 * 86_400
            })
            .times(1)
            .returning(|_, _, _| Ok(()));

        let result = service(store)
            .shorten("https://example.com/path".to_string(), Some(7))
            .await
            .unwrap();

        assert_eq!(result.short_code.len(), CODE_LENGTH);
        assert_eq!(result.long_url, "https://example.com/path");
        assert_eq!(result.expires_in, "7 days");
        assert_eq!(
            result.short_url,
            format!("http://sho.rt/{}", result.short_code)
        );
    }

    #[tokio::test]
    async fn test_shorten_uses_default_expiry() {
        let mut store = MockKvStore::new();

        store.expect_exists().returning(|_| Ok(false));

        store
            .expect_set_ex()
            .withf(|_, _, ttl| *ttl == 30 * 86_400)
            .times(2)
            .returning(|_, _, _| Ok(()));

        let result = service(store)
            .shorten("https://example.com".to_string(), None)
            .await
            .unwrap();

        assert_eq!(result.expires_in, "30 days");
    }

    #[tokio::test]
    async fn test_shorten_rejects_invalid_url() {
        let mut store = MockKvStore::new();

        // Validation failure happens before any store work
        store.expect_exists().times(0);
        store.expect_set_ex().times(0);

        let result = service(store).shorten("not-a-url".to_string(), Some(30)).await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_shorten_rejects_zero_expiry() {
        let result = service(MockKvStore::new())
            .shorten("https://example.com".to_string(), Some(0))
            .await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_shorten_rejects_expiry_above_maximum() {
        let result = service(MockKvStore::new())
            .shorten("https://example.com".to_string(), Some(366))
            .await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_shorten_retries_on_collision() {
        let mut store = MockKvStore::new();

        let mut hits = 0;
        store.expect_exists().times(3).returning(move |_| {
            hits += 1;
            Ok(hits < 3)
        });

        store.expect_set_ex().times(2).returning(|_, _, _| Ok(()));

        let result = service(store)
            .shorten("https://example.com".to_string(), Some(1))
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_shorten_exhausts_after_five_collisions() {
        let mut store = MockKvStore::new();

        store.expect_exists().times(5).returning(|_| Ok(true));
        store.expect_set_ex().times(0);

        let result = service(store)
            .shorten("https://example.com".to_string(), Some(1))
            .await;

        assert!(matches!(result, Err(AppError::CodeExhausted)));
    }

    #[tokio::test]
    async fn test_shorten_surfaces_store_failure() {
        let mut store = MockKvStore::new();

        store
            .expect_exists()
            .times(1)
            .returning(|_| Err(StoreError::Connection("refused".to_string())));

        let result = service(store)
            .shorten("https://example.com".to_string(), Some(1))
            .await;

        assert!(matches!(result, Err(AppError::StoreUnavailable(_))));
    }
}
