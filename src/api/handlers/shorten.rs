//! Handler for the link shortening endpoint.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::ApiResponse;
use crate::api::dto::shorten::{ShortenData, ShortenRequest};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a shortened URL.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com/path",
///   "expiryDays": 7
/// }
/// ```
///
/// # Response
///
/// `201 Created`:
///
/// ```json
/// {
///   "success": true,
///   "data": {
///     "shortCode": "aZ3kp9Q",
///     "shortUrl": "http://localhost:3000/aZ3kp9Q",
///     "longUrl": "https://example.com/path",
///     "expiresIn": "7 days"
///   }
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request when the URL fails validation or when code
/// generation exhausted its collision retries (the latter is transient;
/// the client may simply retry).
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ShortenData>>), AppError> {
    payload.validate()?;

    let link = state
        .shortener
        .shorten(payload.url, payload.expiry_days)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(ShortenData::from(link))),
    ))
}
