//! Syntactic URL validation.
//!
//! A submitted URL must be a well-formed absolute HTTP(S) URL before any
//! storage work happens. Validation is purely syntactic; no network I/O.

use url::Url;

/// Returns `true` if `candidate` is a well-formed absolute URL with an
/// `http` or `https` scheme and a host.
///
/// Rejects relative URLs, empty input, and non-HTTP(S) schemes such as
/// `javascript:`, `data:`, `file:`, and `mailto:`.
///
/// # Examples
///
/// ```
/// use snip::utils::url_validator::is_valid_url;
///
/// assert!(is_valid_url("https://example.com/path?q=1"));
/// assert!(!is_valid_url("example.com"));
/// assert!(!is_valid_url("ftp://example.com/file.txt"));
/// ```
pub fn is_valid_url(candidate: &str) -> bool {
    match Url::parse(candidate) {
        Ok(url) => matches!(url.scheme(), "http" | "https") && url.has_host(),
        Err(_) => false,
    }
}
