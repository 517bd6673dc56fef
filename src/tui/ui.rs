use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::core::SearchState;
use crate::tui::component::Component;
use crate::tui::components::{ResultList, StatusBar};
use crate::tui::{Focus, TuiState};

/// Status line, search bar, then the result list filling the rest.
pub fn draw_ui(frame: &mut Frame, state: &SearchState, searching: bool, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Length(3), Min(0)]);
    let [status_area, search_area, list_area] = layout.areas(frame.area());

    StatusBar {
        query: state.query.as_deref(),
        result_count: state.repos.len(),
        next_page: state.next_page,
        searching,
        loading_more: state.is_loading_next_page,
        message: &tui.status_message,
    }
    .render(frame, status_area);

    tui.search_bar.focused = tui.focus == Focus::SearchBar;
    tui.search_bar.render(frame, search_area);

    ResultList {
        state: &mut tui.results,
        repos: &state.repos,
        focused: tui.focus == Focus::Results,
    }
    .render(frame, list_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_draws_all_regions() {
        let backend = TestBackend::new(60, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        let state = SearchState {
            query: Some("tokio".to_string()),
            repos: vec!["tokio-rs/tokio".to_string(), "tokio-rs/axum".to_string()],
            next_page: Some(2),
            is_loading_next_page: false,
        };
        let mut tui = TuiState::new(Some("tokio"));

        terminal
            .draw(|f| draw_ui(f, &state, false, &mut tui))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer.content().iter().map(|c| c.symbol()).collect::<String>();
        assert!(text.contains("next page 2"));
        assert!(text.contains("tokio-rs/axum"));
        assert!(text.contains("Repositories (2)"));
        assert_eq!(tui.results.viewport.content_height, 2);
        assert!(tui.results.viewport.is_near_bottom(3));
    }
}
