//! # snip
//!
//! A small URL shortening service built with Axum and Redis.
//!
//! ## Architecture
//!
//! - **Application Layer** ([`application`]) - Shortening and resolution engines
//! - **Infrastructure Layer** ([`infrastructure`]) - Key-value store adapter
//! - **API Layer** ([`api`]) - REST API handlers, DTOs, and middleware
//!
//! All state lives in the external key-value store; the engines hold no
//! in-process mutable state and rely on the store's per-operation
//! atomicity. Each mapping is written as two keys with matching expiry:
//! `url:{code}` for the original URL and `clicks:{code}` for the access
//! counter.
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional; defaults to redis://localhost:6379
//! export REDIS_URL="redis://localhost:6379"
//! export BASE_URL="https://sho.rt"
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See the [`config`] module for available options.

pub mod api;
pub mod application;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{
        LinkStats, ResolverService, ShortenedLink, ShortenerService,
    };
    pub use crate::error::AppError;
    pub use crate::infrastructure::store::{InMemoryStore, KvStore, RedisStore};
    pub use crate::state::AppState;
}
