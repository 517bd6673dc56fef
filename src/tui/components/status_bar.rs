//! # StatusBar Component
//!
//! One-line summary at the top of the screen. Purely presentational: every
//! field is a prop copied out of the core state each frame.
//!
//! Priority order, left to right, so narrow terminals keep the useful part:
//!
//! 1. `ghsearch`
//! 2. activity (`searching…` / `loading more…`) or the current page hint
//! 3. a transient message (e.g. the last opened URL)

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::tui::component::Component;

pub struct StatusBar<'a> {
    pub query: Option<&'a str>,
    pub result_count: usize,
    pub next_page: Option<u32>,
    pub searching: bool,
    pub loading_more: bool,
    pub message: &'a str,
}

impl StatusBar<'_> {
    pub fn text(&self) -> String {
        let mut parts = vec!["ghsearch".to_string()];

        match self.query {
            None => parts.push("type to search".to_string()),
            Some(_) if self.searching => parts.push("searching…".to_string()),
            Some(_) if self.loading_more => parts.push("loading more…".to_string()),
            Some(query) => {
                let pages = match self.next_page {
                    Some(page) => format!("next page {page}"),
                    None => "end of results".to_string(),
                };
                parts.push(format!("{query:?}: {} | {pages}", self.result_count));
            }
        }

        if !self.message.is_empty() {
            parts.push(self.message.to_string());
        }
        parts.join(" | ")
    }
}

impl Component for StatusBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = if self.searching || self.loading_more {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        frame.render_widget(Line::from(Span::styled(self.text(), style)), area);
    }
}
