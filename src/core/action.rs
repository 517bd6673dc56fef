//! # Actions and Mutations
//!
//! Everything the user asks for becomes an `Action`.
//! Text settles in the search bar? That's `Action::UpdateQuery(Some(text))`.
//! List scrolled near the bottom? That's `Action::LoadNextPage`.
//!
//! Actions never touch state directly. The coordinator turns them into
//! `Mutation`s (some immediately, some after a search finishes), and
//! `reduce()` applies each mutation to produce the next snapshot.
//!
//! ```text
//! Action  →  Coordinator  →  Mutation  →  reduce()  →  New State
//! ```
//!
//! `reduce()` is pure, so every transition is testable with a plain
//! `assert_eq!(reduce(state, mutation), expected)`.

use crate::core::state::SearchState;

/// User intents accepted by the coordinator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// The committed search text changed. `None` means the bar was cleared.
    UpdateQuery(Option<String>),
    /// The list was scrolled close enough to the end to want more results.
    LoadNextPage,
}

impl Action {
    pub fn is_update_query(&self) -> bool {
        matches!(self, Action::UpdateQuery(_))
    }
}

/// Internal units of change. Only the coordinator produces these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    SetQuery(Option<String>),
    /// Replace the whole result list.
    SetRepos {
        repos: Vec<String>,
        next_page: Option<u32>,
    },
    /// Append one page to the result list.
    AppendRepos {
        repos: Vec<String>,
        next_page: Option<u32>,
    },
    SetLoadingNextPage(bool),
}

/// Applies one mutation. Fields not named by the mutation pass through untouched.
pub fn reduce(state: SearchState, mutation: Mutation) -> SearchState {
    match mutation {
        Mutation::SetQuery(query) => SearchState { query, ..state },
        Mutation::SetRepos { repos, next_page } => SearchState {
            repos,
            next_page,
            ..state
        },
        Mutation::AppendRepos { repos, next_page } => {
            let mut accumulated = state.repos;
            accumulated.extend(repos);
            SearchState {
                repos: accumulated,
                next_page,
                ..state
            }
        }
        Mutation::SetLoadingNextPage(is_loading_next_page) => SearchState {
            is_loading_next_page,
            ..state
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn populated() -> SearchState {
        SearchState {
            query: Some("rust".to_string()),
            repos: names(&["a/one", "b/two"]),
            next_page: Some(2),
            is_loading_next_page: true,
        }
    }

    #[test]
    fn test_set_query_only_touches_query() {
        let before = populated();
        let after = reduce(before.clone(), Mutation::SetQuery(Some("tokio".to_string())));

        assert_eq!(after.query.as_deref(), Some("tokio"));
        assert_eq!(after.repos, before.repos);
        assert_eq!(after.next_page, before.next_page);
        assert_eq!(after.is_loading_next_page, before.is_loading_next_page);
    }

    #[test]
    fn test_set_query_none_clears_query() {
        let after = reduce(populated(), Mutation::SetQuery(None));
        assert!(after.query.is_none());
        assert_eq!(after.repos.len(), 2);
    }

    #[test]
    fn test_set_repos_replaces_list_and_page() {
        let before = populated();
        let after = reduce(
            before.clone(),
            Mutation::SetRepos {
                repos: names(&["c/three"]),
                next_page: None,
            },
        );

        assert_eq!(after.repos, names(&["c/three"]));
        assert_eq!(after.next_page, None);
        assert_eq!(after.query, before.query);
        assert_eq!(after.is_loading_next_page, before.is_loading_next_page);
    }

    #[test]
    fn test_append_repos_keeps_order_and_duplicates() {
        let before = populated();
        let after = reduce(
            before.clone(),
            Mutation::AppendRepos {
                repos: names(&["b/two", "c/three"]),
                next_page: Some(3),
            },
        );

        assert_eq!(after.repos, names(&["a/one", "b/two", "b/two", "c/three"]));
        assert_eq!(after.next_page, Some(3));
        assert_eq!(after.query, before.query);
        assert_eq!(after.is_loading_next_page, before.is_loading_next_page);
    }

    #[test]
    fn test_set_loading_only_touches_flag() {
        let before = populated();
        let after = reduce(before.clone(), Mutation::SetLoadingNextPage(false));

        assert!(!after.is_loading_next_page);
        assert_eq!(after.query, before.query);
        assert_eq!(after.repos, before.repos);
        assert_eq!(after.next_page, before.next_page);
    }

    #[test]
    fn test_mutations_apply_in_order() {
        let state = [
            Mutation::SetQuery(Some("q".to_string())),
            Mutation::SetRepos {
                repos: names(&["a/a", "b/b"]),
                next_page: Some(2),
            },
            Mutation::SetLoadingNextPage(true),
            Mutation::AppendRepos {
                repos: names(&["c/c", "d/d"]),
                next_page: None,
            },
            Mutation::SetLoadingNextPage(false),
        ]
        .into_iter()
        .fold(SearchState::default(), reduce);

        assert_eq!(state.repos, names(&["a/a", "b/b", "c/c", "d/d"]));
        assert_eq!(state.next_page, None);
        assert!(!state.is_loading_next_page);
    }

    #[test]
    fn test_is_update_query() {
        assert!(Action::UpdateQuery(None).is_update_query());
        assert!(!Action::LoadNextPage.is_update_query());
    }
}
