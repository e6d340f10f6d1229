//! Utility functions for code generation, URL validation, and retries.
//!
//! This module provides helper functions used across the application:
//!
//! - [`code_generator`] - Random short code generation
//! - [`url_validator`] - Syntactic URL validation
//! - [`retry`] - Bounded retry combinator for collision handling

pub mod code_generator;
pub mod retry;
pub mod url_validator;
