use std::fmt;

use async_trait::async_trait;

/// Errors that can occur while fetching one page of search results.
/// None of these reach the UI; the coordinator turns every one into an empty page.
#[derive(Debug)]
pub enum SearchError {
    /// Transport-level failure (DNS, connection refused, body read).
    Network(String),
    /// HTTP 403. `reset` is the epoch second from `x-ratelimit-reset`, when sent.
    RateLimited { reset: Option<u64> },
    /// Any other non-success status.
    Api { status: u16, message: String },
    /// Body was not an object with an `items` array.
    Parse(String),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::Network(msg) => write!(f, "network error: {msg}"),
            SearchError::RateLimited { reset: Some(reset) } => {
                write!(f, "rate limit exceeded (resets at epoch {reset})")
            }
            SearchError::RateLimited { reset: None } => write!(f, "rate limit exceeded"),
            SearchError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            SearchError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for SearchError {}

/// One page of results, already reduced to repository full names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPage {
    pub repos: Vec<String>,
    pub next_page: Option<u32>,
}

impl SearchPage {
    /// Builds a page fetched as `page`. An empty page ends pagination.
    pub fn fetched(repos: Vec<String>, page: u32) -> Self {
        let next_page = if repos.is_empty() { None } else { Some(page + 1) };
        Self { repos, next_page }
    }

    pub fn empty() -> Self {
        Self::default()
    }
}

#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Returns the name of the provider.
    fn name(&self) -> &str;

    /// Fetches one page of repositories matching `query`. Pages start at 1.
    async fn search(&self, query: &str, page: u32) -> Result<SearchPage, SearchError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetched_page_points_to_next() {
        let page = SearchPage::fetched(vec!["a/b".to_string()], 4);
        assert_eq!(page.next_page, Some(5));
    }

    #[test]
    fn test_fetched_empty_page_ends_pagination() {
        let page = SearchPage::fetched(Vec::new(), 4);
        assert_eq!(page, SearchPage::empty());
    }

    #[test]
    fn test_rate_limit_display() {
        let err = SearchError::RateLimited { reset: Some(1700000000) };
        assert_eq!(
            err.to_string(),
            "rate limit exceeded (resets at epoch 1700000000)"
        );
    }
}
