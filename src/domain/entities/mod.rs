//! Core domain entities representing the business data model.
//!
//! # Entity Types
//!
//! - [`Link`] - A shortened URL mapping with its click counter
//! - [`Visit`] - One recorded redirect through a link
//!
//! Creation inputs use separate structs (`NewLink`) so store-assigned fields
//! such as ids and timestamps never come from callers.

pub mod link;
pub mod visit;

pub use link::{Link, ListOrder, NewLink};
pub use visit::Visit;
