//! Handler for link analytics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::ApiResponse;
use crate::api::dto::analytics::AnalyticsData;
use crate::error::AppError;
use crate::state::AppState;

/// Retrieves click count and remaining lifetime for a short link.
///
/// # Endpoint
///
/// `GET /api/analytics/{code}`
///
/// # Response
///
/// ```json
/// {
///   "success": true,
///   "data": {
///     "shortCode": "aZ3kp9Q",
///     "longUrl": "https://example.com/path",
///     "clicks": 3,
///     "expiresIn": "7 days"
///   }
/// }
/// ```
///
/// # Errors
///
/// Returns 404 Not Found when the code doesn't exist or has expired.
pub async fn analytics_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<ApiResponse<AnalyticsData>>, AppError> {
    let stats = state.resolver.analytics(&code).await?;

    Ok(Json(ApiResponse::new(AnalyticsData::from(stats))))
}
