//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization. Request shape
//! (required fields and their types) is enforced by deserialization.

pub mod health;
pub mod repository;
