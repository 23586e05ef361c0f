//! Port traits. API boundaries for the hexagon.
//!
//! Outbound only: the application calls into infrastructure; the single
//! entry point is `main` running the pipeline once.

pub mod outbound;

pub use outbound::{PublishPort, SearchPort};
