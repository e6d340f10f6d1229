//! API route configuration.

use crate::api::handlers::{analytics_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// JSON API routes, nested under `/api`.
///
/// # Endpoints
///
/// - `POST /shorten`           - Create a shortened URL
/// - `GET  /analytics/{code}`  - Click count and remaining lifetime
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/analytics/{code}", get(analytics_handler))
}
