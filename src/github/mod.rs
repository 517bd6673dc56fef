//! # GitHub Search
//!
//! The one outbound call the app makes, behind the `SearchProvider` trait so
//! the coordinator can run against a fake in tests.

pub mod client;
pub mod provider;
pub mod types;

pub use client::{DEFAULT_API_URL, GithubClient};
pub use provider::{SearchError, SearchPage, SearchProvider};

use std::sync::Arc;

use log::{debug, warn};

use crate::core::config::ResolvedConfig;

/// Build the GitHub client described by a resolved config.
pub fn build_provider(config: &ResolvedConfig) -> Arc<dyn SearchProvider> {
    Arc::new(
        GithubClient::new(Some(config.api_url.clone()))
            .with_user_agent(config.user_agent.clone())
            .with_per_page(config.per_page),
    )
}

/// Runs the search effect for `(query, page)`.
///
/// Never fails: a missing query returns an empty page without any I/O, and
/// every provider error is logged and collapsed into an empty page.
pub async fn search_or_empty(
    provider: &dyn SearchProvider,
    query: Option<&str>,
    page: u32,
) -> SearchPage {
    let Some(query) = query else {
        return SearchPage::empty();
    };

    match provider.search(query, page).await {
        Ok(result) => result,
        Err(SearchError::RateLimited { reset }) => {
            match reset {
                Some(reset) => warn!(
                    "GitHub API rate limit exceeded (resets at epoch {}). Wait and try again.",
                    reset
                ),
                None => {
                    warn!("GitHub API rate limit exceeded. Wait for 60 seconds and try again.")
                }
            }
            SearchPage::empty()
        }
        Err(e) => {
            debug!(
                "Search via {} failed for {:?} page {}: {}",
                provider.name(),
                query,
                page,
                e
            );
            SearchPage::empty()
        }
    }
}
