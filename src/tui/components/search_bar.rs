//! # SearchBar Component
//!
//! Single-line text field for the query.
//!
//! ## Responsibilities
//!
//! - Capture text input (typing, paste, backspace, delete)
//! - Cursor movement (left/right/home/end)
//! - Report every edit as the new query, with blank text normalized to `None`
//! - Report Enter so the caller can skip the debounce delay
//!
//! The buffer and cursor are internal state; `focused` is a prop.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// High-level events emitted by the SearchBar
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchBarEvent {
    /// Text changed. `None` when the bar is blank.
    Changed(Option<String>),
    /// Enter pressed: search now.
    Commit,
}

pub struct SearchBar {
    /// Text buffer (Internal State)
    pub buffer: String,
    /// Cursor as byte offset into `buffer`
    cursor: usize,
    /// Whether keystrokes go here (Prop)
    pub focused: bool,
}

impl Default for SearchBar {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchBar {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            cursor: 0,
            focused: true,
        }
    }

    /// Pre-fills the bar, e.g. from `--query`.
    pub fn with_text(text: &str) -> Self {
        Self {
            buffer: text.to_string(),
            cursor: text.len(),
            focused: true,
        }
    }

    /// The committed form of the current text.
    pub fn query(&self) -> Option<String> {
        normalize_query(&self.buffer)
    }

    fn changed(&self) -> Option<SearchBarEvent> {
        Some(SearchBarEvent::Changed(self.query()))
    }

    fn prev_boundary(&self) -> usize {
        self.buffer[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    fn next_boundary(&self) -> usize {
        self.buffer[self.cursor..]
            .chars()
            .next()
            .map(|c| self.cursor + c.len_utf8())
            .unwrap_or(self.buffer.len())
    }
}

/// Trims the text; blank text means "no query".
pub fn normalize_query(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

impl Component for SearchBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let inner_width = area.width.saturating_sub(2);
        let cursor_col = self.buffer[..self.cursor].width() as u16;
        // Keep the cursor inside the box on long queries
        let scroll_x = cursor_col.saturating_sub(inner_width.saturating_sub(1));

        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().add_modifier(Modifier::DIM)
        };

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title("Search GitHub repositories");

        let input = Paragraph::new(self.buffer.as_str())
            .block(block)
            .scroll((0, scroll_x));
        frame.render_widget(input, area);

        if self.focused {
            frame.set_cursor_position((area.x + 1 + cursor_col - scroll_x, area.y + 1));
        }
    }
}

impl EventHandler for SearchBar {
    type Event = SearchBarEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                self.changed()
            }
            TuiEvent::Paste(text) => {
                // Single-line field: fold newlines into spaces
                let text = text.replace(['\r', '\n'], " ");
                self.buffer.insert_str(self.cursor, &text);
                self.cursor += text.len();
                self.changed()
            }
            TuiEvent::Backspace => {
                if self.cursor == 0 {
                    return None;
                }
                let prev = self.prev_boundary();
                self.buffer.drain(prev..self.cursor);
                self.cursor = prev;
                self.changed()
            }
            TuiEvent::Delete => {
                if self.cursor >= self.buffer.len() {
                    return None;
                }
                let next = self.next_boundary();
                self.buffer.drain(self.cursor..next);
                self.changed()
            }
            TuiEvent::CursorLeft => {
                self.cursor = self.prev_boundary();
                None
            }
            TuiEvent::CursorRight => {
                self.cursor = self.next_boundary();
                None
            }
            TuiEvent::CursorHome => {
                self.cursor = 0;
                None
            }
            TuiEvent::CursorEnd => {
                self.cursor = self.buffer.len();
                None
            }
            TuiEvent::Submit => Some(SearchBarEvent::Commit),
            _ => None,
        }
    }
}
