//! # Search State
//!
//! Everything the search screen knows, in one snapshot:
//!
//! ```text
//! SearchState
//! ├── query: Option<String>        // last committed search text
//! ├── repos: Vec<String>           // accumulated full names, page order
//! ├── next_page: Option<u32>       // None = no more pages / no search yet
//! └── is_loading_next_page: bool   // pagination fetch in flight
//! ```
//!
//! A snapshot is never edited in place by the UI. The only way to get a new
//! one is `reduce(state, mutation)` in action.rs.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    pub query: Option<String>,
    /// Duplicates across pages are kept as-is.
    pub repos: Vec<String>,
    pub next_page: Option<u32>,
    pub is_loading_next_page: bool,
}

impl SearchState {
    /// True when a `LoadNextPage` intent would actually start a fetch.
    pub fn can_load_next_page(&self) -> bool {
        !self.is_loading_next_page && self.next_page.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        let state = SearchState::default();
        assert!(state.query.is_none());
        assert!(state.repos.is_empty());
        assert!(state.next_page.is_none());
        assert!(!state.is_loading_next_page);
        assert!(!state.can_load_next_page());
    }

    #[test]
    fn test_can_load_next_page_requires_both_guards() {
        let mut state = SearchState {
            next_page: Some(2),
            ..Default::default()
        };
        assert!(state.can_load_next_page());

        state.is_loading_next_page = true;
        assert!(!state.can_load_next_page());
    }
}
