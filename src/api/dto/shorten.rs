//! DTOs for the link shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::application::services::ShortenedLink;

/// Request to shorten a URL.
///
/// `expiryDays` is optional; the configured default (30) applies when it
/// is omitted. Full URL validation happens in the shortening engine, the
/// DTO only rejects an empty field early.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ShortenRequest {
    /// The original URL to shorten (must be valid HTTP/HTTPS).
    #[validate(length(min = 1, message = "URL is required"))]
    pub url: String,

    /// Days until the mapping expires.
    pub expiry_days: Option<u32>,
}

/// Payload of a successful shorten response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenData {
    pub short_code: String,
    pub short_url: String,
    pub long_url: String,
    pub expires_in: String,
}

impl From<ShortenedLink> for ShortenData {
    fn from(link: ShortenedLink) -> Self {
        Self {
            short_code: link.short_code,
            short_url: link.short_url,
            long_url: link.long_url,
            expires_in: link.expires_in,
        }
    }
}
