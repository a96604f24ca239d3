//! Utility functions used across the application.
//!
//! - [`id`] - Identifier format checks

pub mod id;
