//! HTTP middleware for request processing.
//!
//! Provides identifier validation, CORS, and observability middleware.

pub mod cors;
pub mod tracing;
pub mod validate_id;
