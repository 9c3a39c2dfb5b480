//! Domain layer containing business entities and store contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Store trait definitions (link store, visit store)
//! - [`error`] - Store and service error enums
//! - [`expiration`] - Parsing of caller-supplied expiration values
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Repository traits define contracts implemented by the infrastructure layer
//! - Business logic lives in services (see [`crate::application::services`])
//!
//! # Redirect Flow
//!
//! 1. HTTP handler resolves the client IP and calls `LinkService::resolve`
//! 2. The link is looked up and its expiry evaluated lazily
//! 3. [`repositories::VisitRepository::record_redirect`] bumps the counter and
//!    appends the visit row in one atomic write

pub mod entities;
pub mod error;
pub mod expiration;
pub mod repositories;
