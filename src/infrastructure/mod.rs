//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete store implementations.
//!
//! # Modules
//!
//! - [`memory`] - In-process stores, used for `STORAGE_BACKEND=memory` and tests
//! - [`persistence`] - PostgreSQL repository implementations

pub mod memory;
pub mod persistence;
