//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde with camelCase field names, and request bodies are
//! checked with `validator` before reaching the service.

pub mod analytics;
pub mod health;
pub mod link;
pub mod pagination;
pub mod shorten;
