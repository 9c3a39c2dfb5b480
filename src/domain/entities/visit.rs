//! Visit entity representing a single recorded redirect.

use chrono::{DateTime, Utc};

/// One successful redirect through a short link.
///
/// A visit belongs to the link identified by `link_id` and is removed together
/// with it. `ip_address` is `"unknown"` when the client address could not be
/// determined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Visit {
    pub id: i64,
    pub link_id: i64,
    pub ip_address: String,
    pub visited_at: DateTime<Utc>,
}
