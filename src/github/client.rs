//! GitHub REST client for repository search.
//!
//! Unauthenticated. One GET per page, no retry, no cache.

use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::StatusCode;

use super::provider::{SearchError, SearchPage, SearchProvider};
use super::types::SearchResponse;

pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// `User-Agent` sent when none is configured. GitHub rejects requests without one.
pub fn default_user_agent() -> String {
    format!("ghsearch/{}", env!("CARGO_PKG_VERSION"))
}

pub struct GithubClient {
    base_url: String,
    user_agent: String,
    per_page: Option<u32>,
    client: reqwest::Client,
}

impl GithubClient {
    pub fn new(base_url: Option<String>) -> Self {
        let base_url = base_url.unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            user_agent: default_user_agent(),
            per_page: None,
            client: reqwest::Client::new(),
        }
    }

    pub fn with_user_agent(mut self, user_agent: String) -> Self {
        self.user_agent = user_agent;
        self
    }

    pub fn with_per_page(mut self, per_page: Option<u32>) -> Self {
        self.per_page = per_page;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl SearchProvider for GithubClient {
    fn name(&self) -> &str {
        "github"
    }

    async fn search(&self, query: &str, page: u32) -> Result<SearchPage, SearchError> {
        let mut params = vec![("q", query.to_string()), ("page", page.to_string())];
        if let Some(per_page) = self.per_page {
            params.push(("per_page", per_page.to_string()));
        }

        info!("GitHub search request: q={:?}, page={}", query, page);

        let response = self
            .client
            .get(format!("{}/search/repositories", self.base_url))
            .query(&params)
            .header(reqwest::header::USER_AGENT, &self.user_agent)
            .header(reqwest::header::ACCEPT, "application/vnd.github+json")
            .send()
            .await
            .map_err(|e| SearchError::Network(e.to_string()))?;

        let status = response.status();
        debug!("GitHub response status: {}", status);

        if status == StatusCode::FORBIDDEN {
            let reset = response
                .headers()
                .get("x-ratelimit-reset")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse::<u64>().ok());
            return Err(SearchError::RateLimited { reset });
        }

        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("GitHub API error: {} - {}", status.as_u16(), message);
            return Err(SearchError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| SearchError::Network(e.to_string()))?;
        let parsed: SearchResponse =
            serde_json::from_str(&body).map_err(|e| SearchError::Parse(e.to_string()))?;

        let repos = parsed.full_names();
        debug!(
            "GitHub page {}: {} of {} items usable (total_count={:?})",
            page,
            repos.len(),
            parsed.items.len(),
            parsed.total_count
        );

        Ok(SearchPage::fetched(repos, page))
    }
}
