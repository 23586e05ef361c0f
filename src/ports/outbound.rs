//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{DomainError, PublishReceipt, RawDocument};
use chrono::NaiveDate;

/// Daily-report search gateway (the wiki service).
#[async_trait::async_trait]
pub trait SearchPort: Send + Sync {
    /// Fetch the caller's own daily reports created on or after `since`,
    /// ascending by creation time, at most `limit` posts.
    ///
    /// Only the title and Markdown body survive the adapter boundary.
    async fn find_daily_reports(
        &self,
        since: NaiveDate,
        limit: u8,
    ) -> Result<Vec<RawDocument>, DomainError>;
}

/// Blog publishing gateway (the AtomPub service).
#[async_trait::async_trait]
pub trait PublishPort: Send + Sync {
    /// Create a blog entry. `draft` controls whether it stays unpublished.
    async fn post_entry(
        &self,
        title: &str,
        body_md: &str,
        draft: bool,
    ) -> Result<PublishReceipt, DomainError>;
}
