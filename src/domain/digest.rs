//! Digest assembly: ordered entries into one draft-ready Markdown document.

use crate::domain::entities::{Digest, ExtractedEntry};
use chrono::NaiveDate;

/// Opening line of every weekly digest.
const PREAMBLE: &str = "今週の所感です。";

/// Blocks render as separate Markdown paragraphs; the blog expects CRLF.
const BLOCK_SEPARATOR: &str = "\r\n\r\n";

/// Assemble the weekly digest from the extracted entries, in input order.
///
/// Each entry becomes a `###` heading followed by its remarks verbatim
/// (possibly empty, possibly multi-line). With no entries the body is the
/// preamble alone.
pub fn build_digest(entries: &[ExtractedEntry], today: NaiveDate) -> Digest {
    let mut blocks = vec![PREAMBLE.to_string()];
    for entry in entries {
        blocks.push(format!("### {}", entry.headline));
        blocks.push(entry.remarks.clone());
    }

    Digest {
        title: format!("[自動投稿][日記]所感週報 {}", today.format("%Y-%m-%d")),
        body: blocks.join(BLOCK_SEPARATOR),
    }
}
