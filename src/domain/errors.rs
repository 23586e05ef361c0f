//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these. Every variant is fatal to
//! the run: nothing is published after a failure.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    /// Post title lacks the daily-report segment or the closing sentinel.
    #[error("headline marker not found in post title: {0}")]
    MissingHeadlineMarker(String),

    /// Post body lacks the work-section heading anywhere.
    #[error("work-section marker not found in post body: {}", snippet(.0))]
    MissingSectionMarker(String),

    #[error("search error: {0}")]
    Search(String),

    #[error("publish error: {0}")]
    Publish(String),
}

/// Leading slice of the offending body for the error message.
fn snippet(body: &str) -> String {
    body.chars().take(80).collect()
}
