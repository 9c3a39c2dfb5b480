//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx. Queries are
//! bound at runtime, and the schema lives in `migrations/`.
//!
//! # Repositories
//!
//! - [`PgLinkRepository`] - Link storage, click counters and paged listing
//! - [`PgVisitRepository`] - Visit rows for analytics

pub mod pg_link_repository;
pub mod pg_visit_repository;

pub use pg_link_repository::PgLinkRepository;
pub use pg_visit_repository::PgVisitRepository;
