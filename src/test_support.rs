//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Semaphore;
use tokio::sync::mpsc::{UnboundedReceiver, unbounded_channel};

use crate::core::coordinator::{Coordinator, EffectOutcome};
use crate::github::{SearchError, SearchPage, SearchProvider};

/// Builds `count` distinct names like `owner/repo-0`.
pub fn repo_names(prefix: &str, count: usize) -> Vec<String> {
    (0..count).map(|i| format!("{prefix}/repo-{i}")).collect()
}

/// Serves canned pages: page `n` returns `pages[n - 1]`, anything past the end is empty.
pub struct StaticProvider {
    pages: Vec<SearchPage>,
    calls: Mutex<Vec<(String, u32)>>,
}

impl StaticProvider {
    /// Pages built the way the real client builds them (`next_page = page + 1` unless empty).
    pub fn new(pages: Vec<Vec<&str>>) -> Self {
        let pages = pages
            .into_iter()
            .enumerate()
            .map(|(i, names)| {
                SearchPage::fetched(names.into_iter().map(String::from).collect(), i as u32 + 1)
            })
            .collect();
        Self::from_pages(pages)
    }

    pub fn from_pages(pages: Vec<SearchPage>) -> Self {
        Self {
            pages,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<(String, u32)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl SearchProvider for StaticProvider {
    fn name(&self) -> &str {
        "static"
    }

    async fn search(&self, query: &str, page: u32) -> Result<SearchPage, SearchError> {
        self.calls.lock().unwrap().push((query.to_string(), page));
        Ok(self
            .pages
            .get(page as usize - 1)
            .cloned()
            .unwrap_or_default())
    }
}

/// Holds every request until a permit is released, so tests can keep
/// effects in flight. Page `n` of `query` yields the single name `query/p{n}`.
pub struct GatedProvider {
    gate: Semaphore,
    calls: Mutex<Vec<(String, u32)>>,
}

impl GatedProvider {
    pub fn new() -> Self {
        Self {
            gate: Semaphore::new(0),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Lets `n` waiting (or future) requests complete.
    pub fn release(&self, n: usize) {
        self.gate.add_permits(n);
    }

    pub fn calls(&self) -> Vec<(String, u32)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl SearchProvider for GatedProvider {
    fn name(&self) -> &str {
        "gated"
    }

    async fn search(&self, query: &str, page: u32) -> Result<SearchPage, SearchError> {
        self.calls.lock().unwrap().push((query.to_string(), page));
        let permit = self
            .gate
            .acquire()
            .await
            .map_err(|e| SearchError::Network(e.to_string()))?;
        permit.forget();
        Ok(SearchPage::fetched(vec![format!("{query}/p{page}")], page))
    }
}

/// Fails every request with a fresh error from `make_error`.
pub struct FailingProvider {
    make_error: fn() -> SearchError,
}

impl FailingProvider {
    pub fn new(make_error: fn() -> SearchError) -> Self {
        Self { make_error }
    }
}

#[async_trait]
impl SearchProvider for FailingProvider {
    fn name(&self) -> &str {
        "failing"
    }

    async fn search(&self, _query: &str, _page: u32) -> Result<SearchPage, SearchError> {
        Err((self.make_error)())
    }
}

/// Creates a coordinator wired to a fresh outcome channel.
pub fn test_coordinator(
    provider: Arc<dyn SearchProvider>,
) -> (Coordinator, UnboundedReceiver<EffectOutcome>) {
    let (tx, rx) = unbounded_channel();
    (Coordinator::new(provider, tx), rx)
}
