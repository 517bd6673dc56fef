//! # TUI Components
//!
//! ## Stateless Components (Props-Based Rendering)
//!
//! - `StatusBar`: query summary, activity indicator and transient message
//!
//! ## Stateful Components (Event-Driven)
//!
//! - `SearchBar`: query text field, emits `SearchBarEvent`
//! - `ResultList` / `ResultListState`: scrollable repository list, emits
//!   `ResultListEvent` and records its visible window for paging
//!
//! Components receive external data as props, never by reaching into the
//! core state themselves:
//!
//! ```rust,ignore
//! ResultList { state: &mut tui.results, repos: &state.repos, focused }.render(frame, area);
//! ```

pub mod result_list;
pub mod search_bar;
pub mod status_bar;

pub use result_list::{ResultList, ResultListEvent, ResultListState};
pub use search_bar::{SearchBar, SearchBarEvent};
pub use status_bar::StatusBar;
