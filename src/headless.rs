//! # Headless Adapter
//!
//! Drives the same coordinator as the TUI without a terminal: one query,
//! then up to `pages - 1` follow-up pages, stopping early at the end of
//! results. Used by `--print`.

use std::sync::Arc;

use log::info;
use tokio::sync::mpsc::unbounded_channel;

use crate::core::{Action, Coordinator, SearchState};
use crate::github::SearchProvider;
use crate::tui::components::search_bar::normalize_query;

/// Runs `query` to completion and returns the final state.
pub async fn collect(provider: Arc<dyn SearchProvider>, query: &str, pages: u32) -> SearchState {
    let (tx, mut rx) = unbounded_channel();
    let mut coordinator = Coordinator::new(provider, tx);

    let Some(query) = normalize_query(query) else {
        return coordinator.state().clone();
    };

    let mut started = coordinator.dispatch(Action::UpdateQuery(Some(query)));
    let mut fetched = 0;
    while started {
        let Some(outcome) = rx.recv().await else {
            break;
        };
        coordinator.complete(outcome);
        fetched += 1;
        started = fetched < pages && coordinator.dispatch(Action::LoadNextPage);
    }

    info!(
        "Headless run finished: {} page(s), {} repositories",
        fetched,
        coordinator.state().repos.len()
    );
    coordinator.state().clone()
}
