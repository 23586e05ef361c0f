//! Weekly digest pipeline: window -> search -> extract -> assemble -> draft.
//!
//! Strictly sequential, fail fast: one malformed report aborts the run
//! before anything is published. There is no partial-success mode.

use crate::domain::{
    DomainError, ExtractedEntry, PublishReceipt, build_digest, extract_headline, extract_remarks,
    week_start,
};
use crate::ports::{PublishPort, SearchPort};
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::{debug, info};

/// At most one work week of daily reports per run.
const MAX_POSTS: u8 = 5;

/// Digest service. Coordinates the search and publish collaborators.
pub struct DigestService {
    search: Arc<dyn SearchPort>,
    publish: Arc<dyn PublishPort>,
}

impl DigestService {
    pub fn new(search: Arc<dyn SearchPort>, publish: Arc<dyn PublishPort>) -> Self {
        Self { search, publish }
    }

    /// Run the pipeline once for the week containing `today`.
    ///
    /// `today` is injected so the window stays off the wall clock in tests.
    /// Exactly one search call and at most one publish call happen per run;
    /// the publish attempt is never retried.
    pub async fn run(&self, today: NaiveDate) -> Result<PublishReceipt, DomainError> {
        let since = week_start(today);
        info!(since = %since, "searching this week's daily reports");

        let documents = self.search.find_daily_reports(since, MAX_POSTS).await?;
        info!(count = documents.len(), "daily reports fetched");

        let mut entries = Vec::with_capacity(documents.len());
        for document in &documents {
            let headline = extract_headline(&document.full_name)?;
            let remarks = extract_remarks(&document.body_md)?;
            debug!(headline = %headline, remarks_len = remarks.len(), "extracted entry");
            entries.push(ExtractedEntry { headline, remarks });
        }

        let digest = build_digest(&entries, today);
        info!(title = %digest.title, body_len = digest.body.len(), "publishing draft digest");

        let receipt = self
            .publish
            .post_entry(&digest.title, &digest.body, true)
            .await?;
        info!(status = receipt.status, entry_url = ?receipt.entry_url, "draft created");

        Ok(receipt)
    }
}
