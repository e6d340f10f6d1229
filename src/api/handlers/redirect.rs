//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::Redirect,
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// Resolution increments the click counter as a side effect; a failed
/// increment fails the request rather than being silently dropped.
///
/// # Errors
///
/// Returns 404 Not Found when the short code doesn't exist or has expired.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    debug!("Redirect requested for code '{}'", code);

    let long_url = state.resolver.resolve(&code).await?;

    Ok(Redirect::temporary(&long_url))
}
