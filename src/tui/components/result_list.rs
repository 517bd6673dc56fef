//! # ResultList Component
//!
//! Scrollable list of repository full names.
//!
//! `ResultListState` lives in `TuiState` and survives between frames;
//! `ResultList` is created each frame with borrowed state and props. After
//! rendering, the state holds the visible window (`viewport`) that the event
//! loop uses for near-bottom detection.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, List, ListItem, ListState};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::scroll::Viewport;

/// Events emitted by the result list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultListEvent {
    /// Enter on the row at this index.
    Open(usize),
}

/// Persistent selection and scroll state.
#[derive(Default)]
pub struct ResultListState {
    pub list_state: ListState,
    /// Number of rows as of the last sync
    len: usize,
    /// Visible window as of the last render
    pub viewport: Viewport,
}

impl ResultListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps the selection valid for a list of `len` rows.
    pub fn sync_len(&mut self, len: usize) {
        self.len = len;
        match self.list_state.selected() {
            _ if len == 0 => self.list_state.select(None),
            None => self.list_state.select(Some(0)),
            Some(i) if i >= len => self.list_state.select(Some(len - 1)),
            Some(_) => {}
        }
    }

    /// Back to the top, e.g. when a new query replaces the list.
    pub fn reset(&mut self) {
        self.list_state = ListState::default();
        self.viewport = Viewport::default();
        self.sync_len(self.len);
    }

    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected().filter(|&i| i < self.len)
    }

    fn page_size(&self) -> usize {
        self.viewport.height.max(1)
    }

    fn move_by(&mut self, delta: isize) {
        if self.len == 0 {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0) as isize;
        let target = (current + delta).clamp(0, self.len as isize - 1);
        self.list_state.select(Some(target as usize));
    }
}

impl EventHandler for ResultListState {
    type Event = ResultListEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::CursorUp | TuiEvent::ScrollUp => self.move_by(-1),
            TuiEvent::CursorDown | TuiEvent::ScrollDown => self.move_by(1),
            TuiEvent::PageUp => self.move_by(-(self.page_size() as isize)),
            TuiEvent::PageDown => self.move_by(self.page_size() as isize),
            TuiEvent::CursorHome => self.move_by(isize::MIN / 2),
            TuiEvent::CursorEnd => self.move_by(isize::MAX / 2),
            TuiEvent::Submit => return self.selected().map(ResultListEvent::Open),
            _ => {}
        }
        None
    }
}

/// Transient render wrapper.
pub struct ResultList<'a> {
    pub state: &'a mut ResultListState,
    pub repos: &'a [String],
    pub focused: bool,
}

impl Component for ResultList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.state.sync_len(self.repos.len());

        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().add_modifier(Modifier::DIM)
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(format!("Repositories ({})", self.repos.len()));

        let items: Vec<ListItem> = self
            .repos
            .iter()
            .map(|name| ListItem::new(name.as_str()))
            .collect();

        let highlight = if self.focused {
            Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };
        let list = List::new(items)
            .block(block)
            .highlight_style(highlight)
            .highlight_symbol("› ");

        frame.render_stateful_widget(list, area, &mut self.state.list_state);

        self.state.viewport = Viewport {
            offset: self.state.list_state.offset(),
            height: area.height.saturating_sub(2) as usize,
            content_height: self.repos.len(),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn names(count: usize) -> Vec<String> {
        (0..count).map(|i| format!("owner/repo-{i}")).collect()
    }

    #[test]
    fn test_sync_len_selects_first_row() {
        let mut state = ResultListState::new();
        state.sync_len(0);
        assert_eq!(state.selected(), None);

        state.sync_len(3);
        assert_eq!(state.selected(), Some(0));
    }

    #[test]
    fn test_navigation_clamps() {
        let mut state = ResultListState::new();
        state.sync_len(3);

        state.handle_event(&TuiEvent::CursorUp);
        assert_eq!(state.selected(), Some(0));

        state.handle_event(&TuiEvent::CursorEnd);
        assert_eq!(state.selected(), Some(2));

        state.handle_event(&TuiEvent::ScrollDown);
        assert_eq!(state.selected(), Some(2));

        state.handle_event(&TuiEvent::CursorHome);
        assert_eq!(state.selected(), Some(0));
    }

    #[test]
    fn test_submit_opens_selected() {
        let mut state = ResultListState::new();
        assert_eq!(state.handle_event(&TuiEvent::Submit), None);

        state.sync_len(5);
        state.handle_event(&TuiEvent::CursorDown);
        assert_eq!(
            state.handle_event(&TuiEvent::Submit),
            Some(ResultListEvent::Open(1))
        );
    }

    #[test]
    fn test_shrinking_list_clamps_selection() {
        let mut state = ResultListState::new();
        state.sync_len(10);
        state.handle_event(&TuiEvent::CursorEnd);
        state.sync_len(4);
        assert_eq!(state.selected(), Some(3));
    }

    #[test]
    fn test_render_records_viewport() {
        let backend = TestBackend::new(40, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        let repos = names(30);
        let mut state = ResultListState::new();

        terminal
            .draw(|f| {
                ResultList {
                    state: &mut state,
                    repos: &repos,
                    focused: true,
                }
                .render(f, f.area())
            })
            .unwrap();

        assert_eq!(
            state.viewport,
            Viewport {
                offset: 0,
                height: 10,
                content_height: 30,
            }
        );
        assert!(!state.viewport.is_near_bottom(3));

        let buffer = terminal.backend().buffer();
        let text = buffer.content().iter().map(|c| c.symbol()).collect::<String>();
        assert!(text.contains("Repositories (30)"));
        assert!(text.contains("owner/repo-0"));
    }

    #[test]
    fn test_scrolling_to_end_reaches_bottom() {
        let backend = TestBackend::new(40, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        let repos = names(30);
        let mut state = ResultListState::new();
        state.sync_len(repos.len());
        state.handle_event(&TuiEvent::CursorEnd);

        terminal
            .draw(|f| {
                ResultList {
                    state: &mut state,
                    repos: &repos,
                    focused: true,
                }
                .render(f, f.area())
            })
            .unwrap();

        assert_eq!(state.viewport.offset, 20);
        assert!(state.viewport.is_near_bottom(3));
    }
}
