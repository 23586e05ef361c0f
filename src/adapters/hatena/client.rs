//! Hatena Blog client. Creates entries via the AtomPub collection endpoint.

use crate::adapters::hatena::wsse;
use crate::domain::{DomainError, PublishReceipt};
use crate::ports::PublishPort;
use reqwest::Client;
use tracing::{debug, warn};

/// Hatena Blog AtomPub adapter.
///
/// The entry collection URI is derived from the account and blog domain:
/// `https://blog.hatena.ne.jp/{username}/{blog_domain}/atom/entry`.
/// Requires the AtomPub API key from the blog's settings page.
pub struct HatenaAdapter {
    client: Client,
    username: String,
    blog_domain: String,
    api_key: String,
}

impl HatenaAdapter {
    pub fn new(username: String, blog_domain: String, api_key: String) -> Self {
        Self {
            client: Client::new(),
            username,
            blog_domain,
            api_key,
        }
    }

    fn entry_collection_url(&self) -> String {
        format!(
            "https://blog.hatena.ne.jp/{}/{}/atom/entry",
            self.username, self.blog_domain
        )
    }
}

/// Serialize one Atom entry document. Content is text-typed; the blog
/// renders it with its configured syntax (Markdown here).
fn entry_xml(title: &str, body_md: &str, draft: bool) -> String {
    format!(
        concat!(
            "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n",
            "<entry xmlns=\"http://www.w3.org/2005/Atom\"\n",
            "       xmlns:app=\"http://www.w3.org/2007/app\">\n",
            "  <title>{title}</title>\n",
            "  <content type=\"text\">{content}</content>\n",
            "  <app:control><app:draft>{draft}</app:draft></app:control>\n",
            "</entry>\n"
        ),
        title = escape_xml(title),
        content = escape_xml(body_md),
        draft = if draft { "yes" } else { "no" },
    )
}

/// Minimal XML text escaping for the entry payload.
fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[async_trait::async_trait]
impl PublishPort for HatenaAdapter {
    async fn post_entry(
        &self,
        title: &str,
        body_md: &str,
        draft: bool,
    ) -> Result<PublishReceipt, DomainError> {
        let url = self.entry_collection_url();
        let xml = entry_xml(title, body_md, draft);
        debug!(url = %url, draft, xml_len = xml.len(), "posting atom entry");

        let response = self
            .client
            .post(&url)
            .header("X-WSSE", wsse::header_value(&self.username, &self.api_key))
            .header("Content-Type", "application/xml")
            .body(xml)
            .send()
            .await
            .map_err(|e| DomainError::Publish(format!("request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %text, "hatena API returned error");
            return Err(DomainError::Publish(format!(
                "hatena API error {}: {}",
                status,
                text.chars().take(200).collect::<String>()
            )));
        }

        let entry_url = response
            .headers()
            .get(reqwest::header::LOCATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        Ok(PublishReceipt {
            status: status.as_u16(),
            entry_url,
        })
    }
}
