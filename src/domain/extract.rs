//! Marker-based extraction of headline and remarks from a daily report.
//!
//! Daily reports share a fixed template: a path-like title ending in the
//! `:sp:` sentinel, and a body whose free-text remarks precede the
//! `## 本日の作業内容` heading. Matching is first-occurrence and
//! case-sensitive; a report that breaks the template fails the whole run.

use crate::domain::errors::DomainError;
use regex::Regex;
use std::sync::OnceLock;

/// Heading that opens the work log; everything before it is the remarks.
const WORK_SECTION_MARKER: &str = "## 本日の作業内容";

/// Captures the title payload between the category segment and the sentinel.
fn headline_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"日報/(.*) :sp:").unwrap())
}

/// Matches the provenance line esa inserts when a post is copied from a template.
fn provenance_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"Copied from: \[.*\]\(.*\)\r\n").unwrap())
}

/// Derive the digest headline from a post's `full_name`.
///
/// Captures the payload between `日報/` and ` :sp:`, then repairs the `)/`
/// escaping artifact a slash directly after a closing parenthesis leaves in
/// nested category names.
pub fn extract_headline(full_name: &str) -> Result<String, DomainError> {
    let captures = headline_regex()
        .captures(full_name)
        .ok_or_else(|| DomainError::MissingHeadlineMarker(full_name.to_string()))?;
    Ok(captures[1].replace(")/", ") "))
}

/// Isolate the remarks section of a post body.
///
/// Takes everything strictly before the first work-section heading, strips
/// provenance lines, and trims. The remarks may legitimately be empty.
pub fn extract_remarks(body_md: &str) -> Result<String, DomainError> {
    let end = body_md
        .find(WORK_SECTION_MARKER)
        .ok_or_else(|| DomainError::MissingSectionMarker(body_md.to_string()))?;
    let remarks = provenance_regex().replace_all(&body_md[..end], "");
    Ok(remarks.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_headline() {
        let full_name = "reports/日報/2019/10/07 (月) :sp:";
        assert_eq!(extract_headline(full_name).unwrap(), "2019/10/07 (月)");
    }

    #[test]
    fn test_extract_headline_repairs_slash_after_paren() {
        let full_name = "日報/チーム (A)/2019/10/08 (火) :sp:";
        assert_eq!(
            extract_headline(full_name).unwrap(),
            "チーム (A) 2019/10/08 (火)"
        );
    }

    #[test]
    fn test_extract_headline_missing_sentinel() {
        let err = extract_headline("日報/2019/10/07 (月)").unwrap_err();
        assert!(matches!(err, DomainError::MissingHeadlineMarker(_)));
    }

    #[test]
    fn test_extract_headline_missing_category() {
        let err = extract_headline("memo/2019/10/07 (月) :sp:").unwrap_err();
        assert!(matches!(err, DomainError::MissingHeadlineMarker(_)));
    }

    #[test]
    fn test_extract_remarks_strips_provenance_and_work_log() {
        let body =
            "Copied from: [日報テンプレート](/posts/123)\r\n今日は集中できた。\n\n## 本日の作業内容\n- レビュー対応";
        assert_eq!(extract_remarks(body).unwrap(), "今日は集中できた。");
    }

    #[test]
    fn test_extract_remarks_without_provenance_line() {
        let body = "Hello\n## 本日の作業内容\nwork...";
        assert_eq!(extract_remarks(body).unwrap(), "Hello");
    }

    #[test]
    fn test_extract_remarks_keeps_multiline_text() {
        let body = "一行目\n\n二行目\n## 本日の作業内容\n- task";
        assert_eq!(extract_remarks(body).unwrap(), "一行目\n\n二行目");
    }

    #[test]
    fn test_extract_remarks_may_be_empty() {
        let body = "Copied from: [日報](/posts/1)\r\n## 本日の作業内容\n- task";
        assert_eq!(extract_remarks(body).unwrap(), "");
    }

    #[test]
    fn test_extract_remarks_stops_at_first_marker() {
        let body = "前半のみ\n## 本日の作業内容\n後半にも ## 本日の作業内容 が現れる";
        assert_eq!(extract_remarks(body).unwrap(), "前半のみ");
    }

    #[test]
    fn test_extract_remarks_missing_marker() {
        let err = extract_remarks("ただのメモ").unwrap_err();
        assert!(matches!(err, DomainError::MissingSectionMarker(_)));
    }
}
