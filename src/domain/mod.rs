//! Core domain layer. No external I/O dependencies.
//!
//! Entities and the extraction/assembly rules live here. Dependencies flow inward.

pub mod digest;
pub mod entities;
pub mod errors;
pub mod extract;
pub mod week;

pub use digest::build_digest;
pub use entities::{Digest, ExtractedEntry, PublishReceipt, RawDocument};
pub use errors::DomainError;
pub use extract::{extract_headline, extract_remarks};
pub use week::week_start;
