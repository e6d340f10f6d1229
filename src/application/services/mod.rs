//! Business logic services.
//!
//! - [`ShortenerService`] - write path: validation, code generation,
//!   dual-key persistence with matching expiry
//! - [`ResolverService`] - read path: resolution with click tracking,
//!   and analytics

mod resolver_service;
mod shortener_service;

pub use resolver_service::{LinkStats, ResolverService};
pub use shortener_service::{ShortenedLink, ShortenerService};

/// Key family for URL records.
const URL_PREFIX: &str = "url:";

/// Key family for click counters.
const CLICKS_PREFIX: &str = "clicks:";

/// Store key holding the original URL for `code`.
pub fn url_key(code: &str) -> String {
    format!("{}{}", URL_PREFIX, code)
}

/// Store key holding the click counter for `code`.
pub fn clicks_key(code: &str) -> String {
    format!("{}{}", CLICKS_PREFIX, code)
}

/// Renders a remaining TTL as a whole-day duration string.
///
/// Days are rounded up, so any live mapping reports at least "1 days".
/// A non-positive TTL (expired, or a key without expiry was never
/// written by us) reports "expired".
fn format_expires_in(ttl_seconds: i64) -> String {
    if ttl_seconds > 0 {
        format!("{} days", (ttl_seconds as u64).div_ceil(86_400))
    } else {
        "expired".to_string()
    }
}
