//! Link creation, redirect tracking and analytics service.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::domain::entities::{Link, ListOrder, NewLink, Visit};
use crate::domain::error::{LinkError, StoreError};
use crate::domain::expiration::parse_expiration;
use crate::domain::repositories::{LinkRepository, VisitRepository};
use crate::utils::code_generator::{CODE_LENGTH, check_alias, generate_code};

/// Attempts made to find a free generated code before giving up.
pub const MAX_CODE_ATTEMPTS: usize = 5;

/// Number of visits returned by [`LinkService::analytics`].
pub const RECENT_VISITORS_LIMIT: i64 = 5;

/// Upper bound for the page size of [`LinkService::list_all`].
pub const MAX_PAGE_LIMIT: i64 = 100;

/// Click counter and latest visits of a link.
#[derive(Debug, Clone)]
pub struct LinkAnalytics {
    pub click_count: i64,
    /// At most [`RECENT_VISITORS_LIMIT`] visits, newest first.
    pub recent_visitors: Vec<Visit>,
}

/// One page of links with the overall link count.
#[derive(Debug, Clone)]
pub struct LinkPage {
    pub items: Vec<Link>,
    pub total: i64,
    pub page: i64,
    pub limit: i64,
}

/// Service orchestrating the link store and the visit store.
///
/// Holds no locks of its own: uniqueness of short codes and click counter
/// increments are delegated to the stores, so any number of requests may call
/// into the same instance concurrently.
pub struct LinkService<L, V>
where
    L: LinkRepository + ?Sized,
    V: VisitRepository + ?Sized,
{
    link_repository: Arc<L>,
    visit_repository: Arc<V>,
}

impl<L, V> LinkService<L, V>
where
    L: LinkRepository + ?Sized,
    V: VisitRepository + ?Sized,
{
    /// Creates a new link service.
    pub fn new(link_repository: Arc<L>, visit_repository: Arc<V>) -> Self {
        Self {
            link_repository,
            visit_repository,
        }
    }

    /// Creates a short link and returns the stored record.
    ///
    /// # Code Selection
    ///
    /// - A non-empty `alias` is used verbatim after the alias checks
    /// - Otherwise an 8-character random code is generated, retrying on collisions
    ///   up to [`MAX_CODE_ATTEMPTS`] times
    ///
    /// Empty `alias` and `expires_at` strings count as absent. An expiry in the
    /// past is accepted; such a link never redirects.
    ///
    /// # Errors
    ///
    /// - [`LinkError::InvalidAlias`] if the alias is too long, uses characters
    ///   outside `[A-Za-z0-9_-]`, or is reserved
    /// - [`LinkError::AliasTaken`] if the alias is in use, including when a
    ///   concurrent request claims it between the check and the insert
    /// - [`LinkError::InvalidExpiration`] if `expires_at` cannot be parsed
    /// - [`LinkError::CodeGenerationExhausted`] if every generated code collided
    pub async fn shorten(
        &self,
        original_url: String,
        alias: Option<String>,
        expires_at: Option<String>,
    ) -> Result<Link, LinkError> {
        let alias = alias.filter(|a| !a.is_empty());

        if let Some(alias) = &alias {
            check_alias(alias).map_err(|reason| LinkError::InvalidAlias {
                alias: alias.clone(),
                reason,
            })?;

            if self.link_repository.find_by_code(alias).await?.is_some() {
                return Err(LinkError::AliasTaken {
                    alias: alias.clone(),
                });
            }
        }

        let expires_at = expires_at
            .as_deref()
            .filter(|value| !value.trim().is_empty())
            .map(parse_expiration)
            .transpose()?;

        let link = match alias {
            Some(alias) => self.create_with_alias(original_url, alias, expires_at).await?,
            None => self.create_with_generated_code(original_url, expires_at).await?,
        };

        metrics::counter!("links_created_total").increment(1);
        info!(code = %link.short_code, alias = link.is_alias, "Short link created");

        Ok(link)
    }

    /// Resolves a code for a redirect and records the visit.
    ///
    /// On success the link's click count has been incremented and a visit
    /// stamped with `ip_address` has been stored, in a single store write.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::NotFound`] if the code is unknown, the link has
    /// expired, or the link was deleted while the redirect was in flight.
    /// Expired links are left in place. Any other store failure is returned as
    /// [`LinkError::Storage`] and the redirect counts as failed.
    pub async fn resolve(&self, code: &str, ip_address: &str) -> Result<String, LinkError> {
        let Some(link) = self.link_repository.find_by_code(code).await? else {
            debug!(code, "Unknown short code");
            metrics::counter!("redirects_not_found_total").increment(1);
            return Err(LinkError::not_found(code));
        };

        if link.is_expired_at(Utc::now()) {
            debug!(code, "Link expired");
            metrics::counter!("redirects_not_found_total").increment(1);
            return Err(LinkError::not_found(code));
        }

        self.visit_repository
            .record_redirect(link.id, ip_address)
            .await
            .map_err(|e| missing_as_not_found(e, code))?;

        metrics::counter!("redirects_total").increment(1);
        debug!(code, ip_address, "Redirect recorded");

        Ok(link.original_url)
    }

    /// Returns a link by code without evaluating its expiry.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::NotFound`] if the code is unknown.
    pub async fn info(&self, code: &str) -> Result<Link, LinkError> {
        self.find_existing(code).await
    }

    /// Deletes a link together with all of its visits.
    ///
    /// Visits are removed first so no visit outlives its link.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::NotFound`] if the code is unknown or the link was
    /// deleted concurrently.
    pub async fn delete_link(&self, code: &str) -> Result<(), LinkError> {
        let link = self.find_existing(code).await?;

        let removed_visits = self
            .visit_repository
            .delete_all_for_link(link.id)
            .await?;

        self.link_repository
            .delete(link.id)
            .await
            .map_err(|e| missing_as_not_found(e, code))?;

        metrics::counter!("links_deleted_total").increment(1);
        info!(code, removed_visits, "Short link deleted");

        Ok(())
    }

    /// Returns the stored click count and the latest visits of a link.
    ///
    /// The click count is the link's own counter, not a count of visit rows.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::NotFound`] if the code is unknown.
    pub async fn analytics(&self, code: &str) -> Result<LinkAnalytics, LinkError> {
        let link = self.find_existing(code).await?;

        let recent_visitors = self
            .visit_repository
            .recent_visits(link.id, RECENT_VISITORS_LIMIT)
            .await?;

        Ok(LinkAnalytics {
            click_count: link.click_count,
            recent_visitors,
        })
    }

    /// Number of visit rows stored for a link.
    ///
    /// Redirects write the counter and the visit together, so this matches the
    /// click count for links created through the service.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::NotFound`] if the code is unknown.
    pub async fn visit_log_len(&self, code: &str) -> Result<i64, LinkError> {
        let link = self.find_existing(code).await?;
        Ok(self.visit_repository.count_for_link(link.id).await?)
    }

    /// Lists links newest first.
    ///
    /// `page` is raised to at least 1 and `limit` clamped into `1..=100`; the
    /// returned page carries the coerced values.
    pub async fn list_all(&self, page: i64, limit: i64) -> Result<LinkPage, LinkError> {
        self.list_page(page, limit, ListOrder::NewestFirst).await
    }

    /// Lists links in the given order, with the same coercion as [`Self::list_all`].
    pub async fn list_page(
        &self,
        page: i64,
        limit: i64,
        order: ListOrder,
    ) -> Result<LinkPage, LinkError> {
        let page = page.max(1);
        let limit = limit.clamp(1, MAX_PAGE_LIMIT);
        let offset = (page - 1).saturating_mul(limit);

        let (items, total) = tokio::try_join!(
            self.link_repository.list_page(offset, limit, order),
            self.link_repository.count()
        )?;

        Ok(LinkPage {
            items,
            total,
            page,
            limit,
        })
    }

    /// Counts all stored links.
    pub async fn total_links(&self) -> Result<i64, LinkError> {
        Ok(self.link_repository.count().await?)
    }

    async fn find_existing(&self, code: &str) -> Result<Link, LinkError> {
        self.link_repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| LinkError::not_found(code))
    }

    async fn create_with_alias(
        &self,
        original_url: String,
        alias: String,
        expires_at: Option<DateTime<Utc>>,
    ) -> Result<Link, LinkError> {
        let new_link = NewLink {
            short_code: alias.clone(),
            original_url,
            is_alias: true,
            expires_at,
        };

        match self.link_repository.create(new_link).await {
            Ok(link) => Ok(link),
            Err(StoreError::Conflict) => {
                warn!(alias = %alias, "Alias claimed concurrently");
                Err(LinkError::AliasTaken { alias })
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn create_with_generated_code(
        &self,
        original_url: String,
        expires_at: Option<DateTime<Utc>>,
    ) -> Result<Link, LinkError> {
        for attempt in 1..=MAX_CODE_ATTEMPTS {
            let new_link = NewLink {
                short_code: generate_code(CODE_LENGTH),
                original_url: original_url.clone(),
                is_alias: false,
                expires_at,
            };

            match self.link_repository.create(new_link).await {
                Ok(link) => return Ok(link),
                Err(StoreError::Conflict) => {
                    warn!(attempt, "Generated short code collided, retrying");
                }
                Err(e) => return Err(e.into()),
            }
        }

        Err(LinkError::CodeGenerationExhausted {
            attempts: MAX_CODE_ATTEMPTS,
        })
    }
}

/// Maps a store `NotFound` raised mid-operation to the caller-facing not-found error.
fn missing_as_not_found(e: StoreError, code: &str) -> LinkError {
    match e {
        StoreError::NotFound => LinkError::not_found(code),
        other => other.into(),
    }
}
