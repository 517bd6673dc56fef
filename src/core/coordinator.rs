//! # Effect Coordinator
//!
//! Turns `Action`s into `Mutation`s and owns every in-flight search.
//!
//! ```text
//!   dispatch(Action) ──► immediate mutations ──► reduce()
//!          │
//!          └──► tokio task: search_or_empty() ──► EffectOutcome ──► channel
//!                                                                      │
//!   complete(EffectOutcome) ◄──────────────────── event loop ◄─────────┘
//!          │
//!          └──► generation check ──► SetRepos / AppendRepos ──► reduce()
//! ```
//!
//! ## Cancellation
//!
//! Every search is tagged with the generation current at spawn time.
//! `UpdateQuery` bumps the generation and aborts all tracked tasks, so a
//! superseded search either never reports back or reports with a stale
//! generation and is dropped in `complete()`. The query always wins over
//! pagination. `LoadNextPage` is refused until the new query's first page has
//! landed, since `next_page` still belongs to the old query until then.
//!
//! ## Loading flag on cancel
//!
//! When a query change tears down an in-flight pagination fetch, the trailing
//! `SetLoadingNextPage(false)` never runs. With `reset_loading_on_query`
//! (the default) the coordinator applies it itself at cancel time. Turning it
//! off keeps the flag as-is, which blocks pagination until something else
//! clears it.

use std::sync::Arc;

use log::{debug, info};
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::AbortHandle;

use crate::core::action::{Action, Mutation, reduce};
use crate::core::state::SearchState;
use crate::github::{SearchPage, SearchProvider, search_or_empty};

/// How a finished search is folded into the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectKind {
    /// First page of a new query: replaces the list.
    Replace,
    /// Follow-up page: appends, then clears the loading flag.
    Append,
}

/// A finished search, sent back to the event loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectOutcome {
    pub generation: u64,
    pub kind: EffectKind,
    pub page: SearchPage,
}

pub struct Coordinator {
    state: SearchState,
    provider: Arc<dyn SearchProvider>,
    tx: UnboundedSender<EffectOutcome>,
    generation: u64,
    in_flight: Vec<AbortHandle>,
    /// A first-page search for the current query has not reported back yet.
    searching: bool,
    reset_loading_on_query: bool,
}

impl Coordinator {
    pub fn new(provider: Arc<dyn SearchProvider>, tx: UnboundedSender<EffectOutcome>) -> Self {
        Self {
            state: SearchState::default(),
            provider,
            tx,
            generation: 0,
            in_flight: Vec::new(),
            searching: false,
            reset_loading_on_query: true,
        }
    }

    pub fn with_reset_loading_on_query(mut self, reset: bool) -> Self {
        self.reset_loading_on_query = reset;
        self
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// True until the first page of the current query has been applied.
    pub fn is_searching(&self) -> bool {
        self.searching
    }

    /// True while at least one search task has not finished yet.
    pub fn is_busy(&mut self) -> bool {
        self.in_flight.retain(|handle| !handle.is_finished());
        !self.in_flight.is_empty()
    }

    /// Handles one intent. Returns `true` if a search was started.
    pub fn dispatch(&mut self, action: Action) -> bool {
        info!("Dispatch: {:?}", action);
        match action {
            Action::UpdateQuery(query) => {
                self.cancel_in_flight();
                self.apply(Mutation::SetQuery(query.clone()));
                self.spawn_search(EffectKind::Replace, query, 1);
                true
            }
            Action::LoadNextPage => {
                // next_page still belongs to the previous query until page 1 lands
                if self.searching {
                    debug!("LoadNextPage ignored: first page of the query still pending");
                    return false;
                }
                if self.state.is_loading_next_page {
                    debug!("LoadNextPage ignored: page fetch already in flight");
                    return false;
                }
                let Some(page) = self.state.next_page else {
                    debug!("LoadNextPage ignored: no more pages");
                    return false;
                };
                self.apply(Mutation::SetLoadingNextPage(true));
                let query = self.state.query.clone();
                self.spawn_search(EffectKind::Append, query, page);
                true
            }
        }
    }

    /// Folds a finished search into the state. Returns `false` if it was stale.
    pub fn complete(&mut self, outcome: EffectOutcome) -> bool {
        if outcome.generation != self.generation {
            debug!(
                "Discarding stale {:?} outcome (generation {} != {})",
                outcome.kind, outcome.generation, self.generation
            );
            return false;
        }

        let SearchPage { repos, next_page } = outcome.page;
        match outcome.kind {
            EffectKind::Replace => {
                self.searching = false;
                self.apply(Mutation::SetRepos { repos, next_page });
            }
            EffectKind::Append => {
                self.apply(Mutation::AppendRepos { repos, next_page });
                self.apply(Mutation::SetLoadingNextPage(false));
            }
        }
        self.in_flight.retain(|handle| !handle.is_finished());
        true
    }

    fn apply(&mut self, mutation: Mutation) {
        debug!("Apply: {:?}", mutation);
        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, mutation);
    }

    fn cancel_in_flight(&mut self) {
        self.generation += 1;
        self.searching = false;
        let aborted = self.in_flight.len();
        for handle in self.in_flight.drain(..) {
            handle.abort();
        }
        if aborted > 0 {
            debug!("Aborted {} in-flight search(es)", aborted);
        }
        if self.reset_loading_on_query && self.state.is_loading_next_page {
            self.apply(Mutation::SetLoadingNextPage(false));
        }
    }

    fn spawn_search(&mut self, kind: EffectKind, query: Option<String>, page: u32) {
        let provider = self.provider.clone();
        let tx = self.tx.clone();
        let generation = self.generation;
        if kind == EffectKind::Replace {
            self.searching = true;
        }

        let handle = tokio::spawn(async move {
            let page = search_or_empty(provider.as_ref(), query.as_deref(), page).await;
            if tx.send(EffectOutcome { generation, kind, page }).is_err() {
                debug!("Search outcome dropped: receiver closed");
            }
        });
        self.in_flight.push(handle.abort_handle());
    }
}

impl Drop for Coordinator {
    fn drop(&mut self) {
        for handle in self.in_flight.drain(..) {
            handle.abort();
        }
    }
}
