//! Domain entities. Pure data structures for the core business.
//!
//! No HTTP/wire types here — these are mapped from adapters.

/// One fetched daily-report post, projected down to the two fields the
/// pipeline reads. Everything else in the search response is discarded at
/// the adapter boundary.
#[derive(Debug, Clone)]
pub struct RawDocument {
    /// Path-like post title, e.g. `日報/2019/10/07 (月) :sp:`.
    pub full_name: String,
    /// Full Markdown body of the post.
    pub body_md: String,
}

/// Headline and remarks derived 1:1 from a daily report.
///
/// Neither field contains the raw marker tokens; `remarks` is trimmed and
/// may be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedEntry {
    pub headline: String,
    pub remarks: String,
}

/// The assembled weekly digest. Built once per run, published once.
#[derive(Debug, Clone)]
pub struct Digest {
    pub title: String,
    pub body: String,
}

/// Publish collaborator's success payload.
#[derive(Debug, Clone)]
pub struct PublishReceipt {
    pub status: u16,
    /// URI of the created entry (`Location` header), when the service returns one.
    pub entry_url: Option<String>,
}
