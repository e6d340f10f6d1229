//! DTOs for the analytics endpoint.

use serde::Serialize;

use crate::application::services::LinkStats;

/// Payload of a successful analytics response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsData {
    pub short_code: String,
    pub long_url: String,
    pub clicks: i64,
    pub expires_in: String,
}

impl From<LinkStats> for AnalyticsData {
    fn from(stats: LinkStats) -> Self {
        Self {
            short_code: stats.short_code,
            long_url: stats.long_url,
            clicks: stats.clicks,
            expires_in: stats.expires_in,
        }
    }
}
