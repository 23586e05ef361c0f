//! esa.io client. Searches the team's posts via the REST API.

use crate::domain::{DomainError, RawDocument};
use crate::ports::SearchPort;
use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

const ESA_API_BASE: &str = "https://api.esa.io/v1";

/// Category daily reports are filed under.
const DAILY_REPORT_CATEGORY: &str = "日報";

/// esa.io API adapter for searching daily-report posts.
///
/// Requires a personal access token with read scope and the team name
/// (the subdomain of `<team>.esa.io`). `screen_name` restricts the search
/// to the caller's own posts.
pub struct EsaAdapter {
    client: Client,
    access_token: String,
    team: String,
    screen_name: String,
}

impl EsaAdapter {
    pub fn new(access_token: String, team: String, screen_name: String) -> Self {
        Self {
            client: Client::new(),
            access_token,
            team,
            screen_name,
        }
    }

    /// Search query: own posts, daily-report category, created in the window.
    fn query(&self, since: NaiveDate) -> String {
        format!(
            "@{} in:\"{}\" created:>={}",
            self.screen_name,
            DAILY_REPORT_CATEGORY,
            since.format("%Y-%m-%d")
        )
    }
}

/// Response shape of `GET /v1/teams/:team/posts`. Fields the pipeline does
/// not read are dropped at deserialization.
#[derive(Deserialize)]
struct PostsResponse {
    posts: Vec<Post>,
}

#[derive(Deserialize)]
struct Post {
    full_name: String,
    body_md: String,
}

#[async_trait::async_trait]
impl SearchPort for EsaAdapter {
    async fn find_daily_reports(
        &self,
        since: NaiveDate,
        limit: u8,
    ) -> Result<Vec<RawDocument>, DomainError> {
        let url = format!("{}/teams/{}/posts", ESA_API_BASE, self.team);
        let query = self.query(since);
        let per_page = limit.to_string();
        debug!(url = %url, query = %query, "searching posts");

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.access_token)
            .query(&[
                ("q", query.as_str()),
                ("sort", "created"),
                ("order", "asc"),
                ("per_page", per_page.as_str()),
            ])
            .send()
            .await
            .map_err(|e| DomainError::Search(format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %text, "esa API returned error");
            return Err(DomainError::Search(format!(
                "esa API error {}: {}",
                status,
                text.chars().take(200).collect::<String>()
            )));
        }

        let parsed: PostsResponse = response
            .json()
            .await
            .map_err(|e| DomainError::Search(format!("failed to parse posts response: {}", e)))?;

        Ok(parsed
            .posts
            .into_iter()
            .map(|post| RawDocument {
                full_name: post.full_name,
                body_md: post.body_md,
            })
            .collect())
    }
}
