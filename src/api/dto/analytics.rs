//! DTOs for link analytics endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::application::services::LinkAnalytics;
use crate::domain::entities::Visit;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsResponse {
    pub click_count: i64,
    pub recent_visitors: Vec<VisitorItem>,
}

/// One recorded visit.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitorItem {
    pub ip_address: String,
    pub visited_at: DateTime<Utc>,
}

impl From<Visit> for VisitorItem {
    fn from(visit: Visit) -> Self {
        Self {
            ip_address: visit.ip_address,
            visited_at: visit.visited_at,
        }
    }
}

impl From<LinkAnalytics> for AnalyticsResponse {
    fn from(analytics: LinkAnalytics) -> Self {
        Self {
            click_count: analytics.click_count,
            recent_visitors: analytics
                .recent_visitors
                .into_iter()
                .map(VisitorItem::from)
                .collect(),
        }
    }
}
