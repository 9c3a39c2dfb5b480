//! Pagination query parameters and the paged link listing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};

use crate::application::services::LinkPage;
use crate::domain::entities::Link;

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 10;

/// Pagination query parameters.
///
/// Uses `serde_with` to parse numbers from query strings. Out-of-range values
/// are coerced by the service rather than rejected; non-numeric values are
/// rejected.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page: Option<i64>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub limit: Option<i64>,
}

impl ListQuery {
    /// Returns `(page, limit)` with defaults applied.
    pub fn page_and_limit(&self) -> (i64, i64) {
        (
            self.page.unwrap_or(DEFAULT_PAGE),
            self.limit.unwrap_or(DEFAULT_LIMIT),
        )
    }
}

/// One page of links.
#[derive(Debug, Serialize)]
pub struct LinkListResponse {
    pub items: Vec<LinkListItem>,
    pub total: i64,
    pub page: i64,
    pub limit: i64,
}

/// Listing entry. `expiresAt` is always present, `null` when unset.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkListItem {
    pub id: i64,
    pub short_url: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub click_count: i64,
    pub expires_at: Option<DateTime<Utc>>,
}

impl From<Link> for LinkListItem {
    fn from(link: Link) -> Self {
        Self {
            id: link.id,
            short_url: link.short_code,
            original_url: link.original_url,
            created_at: link.created_at,
            click_count: link.click_count,
            expires_at: link.expires_at,
        }
    }
}

impl From<LinkPage> for LinkListResponse {
    fn from(page: LinkPage) -> Self {
        Self {
            items: page.items.into_iter().map(LinkListItem::from).collect(),
            total: page.total,
            page: page.page,
            limit: page.limit,
        }
    }
}
