//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI, and
//! translates keyboard and scroll events into `core::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Loop
//!
//! Each turn of the loop:
//!
//! 1. Draws if something changed, then checks whether the list is near its
//!    end and dispatches `LoadNextPage` if another page can be fetched.
//! 2. Waits for terminal input. The wait is cut short by a pending debounced
//!    query and kept short while searches are in flight.
//! 3. Routes input to the focused component.
//! 4. Releases the debounced query as `UpdateQuery` once it has settled.
//! 5. Drains finished searches from the outcome channel into the coordinator.

mod browser;
pub mod component;
pub mod components;
pub mod debounce;
pub mod event;
pub mod scroll;
mod ui;

pub use browser::repo_url;

use log::{debug, info, warn};
use std::io::stdout;
use std::time::{Duration, Instant};

use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;
use ratatui::DefaultTerminal;
use tokio::sync::mpsc::{UnboundedReceiver, unbounded_channel};

use crate::core::config::ResolvedConfig;
use crate::core::{Action, Coordinator, EffectKind, EffectOutcome};
use crate::github::build_provider;
use crate::tui::component::EventHandler;
use crate::tui::components::{ResultListEvent, ResultListState, SearchBar, SearchBarEvent};
use crate::tui::debounce::Debouncer;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const IDLE_POLL: Duration = Duration::from_millis(500);
const BUSY_POLL: Duration = Duration::from_millis(50);

/// Which component receives editing and navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    SearchBar,
    Results,
}

/// TUI-specific presentation state (not part of the core search state)
pub struct TuiState {
    pub search_bar: SearchBar,
    pub results: ResultListState,
    pub focus: Focus,
    /// Transient message shown in the status bar
    pub status_message: String,
}

impl TuiState {
    pub fn new(initial_query: Option<&str>) -> Self {
        Self {
            search_bar: initial_query.map(SearchBar::with_text).unwrap_or_default(),
            results: ResultListState::new(),
            focus: Focus::SearchBar, // User expects to type immediately
            status_message: String::new(),
        }
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::SearchBar => Focus::Results,
            Focus::Results => Focus::SearchBar,
        };
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, EnableBracketedPaste)?;
        info!("Terminal modes enabled (mouse, bracketed paste)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, DisableBracketedPaste);
    }
}

/// Everything the loop mutates, bundled so handlers can borrow it as one.
struct Session {
    coordinator: Coordinator,
    outcomes: UnboundedReceiver<EffectOutcome>,
    tui: TuiState,
    debouncer: Debouncer<Option<String>>,
    scroll_threshold: usize,
}

pub fn run(config: &ResolvedConfig, initial_query: Option<String>) -> std::io::Result<()> {
    let (tx, outcomes) = unbounded_channel();
    let coordinator = Coordinator::new(build_provider(config), tx)
        .with_reset_loading_on_query(config.reset_loading_on_query);

    let mut session = Session {
        coordinator,
        outcomes,
        tui: TuiState::new(initial_query.as_deref()),
        debouncer: Debouncer::new(Duration::from_millis(config.debounce_ms)),
        scroll_threshold: config.scroll_threshold_rows as usize,
    };

    if let Some(query) = session.tui.search_bar.query() {
        session.coordinator.dispatch(Action::UpdateQuery(Some(query)));
    }

    let mut terminal = ratatui::init();
    let result = match TerminalModeGuard::new() {
        Ok(_guard) => event_loop(&mut terminal, &mut session),
        Err(e) => {
            warn!("Failed to enable terminal modes: {}", e);
            event_loop(&mut terminal, &mut session)
        }
    };
    ratatui::restore();

    info!(
        "Exiting with {} results for {:?}",
        session.coordinator.state().repos.len(),
        session.coordinator.state().query
    );
    result
}

fn event_loop(terminal: &mut DefaultTerminal, session: &mut Session) -> std::io::Result<()> {
    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            let state = session.coordinator.state();
            let searching = session.coordinator.is_searching();
            let tui = &mut session.tui;
            terminal.draw(|f| ui::draw_ui(f, state, searching, tui))?;
            needs_redraw = false;

            if session.load_next_page_if_wanted() {
                needs_redraw = true;
            }
        }

        // Short waits while results are pending, otherwise until the debounce fires
        let now = Instant::now();
        let mut timeout = if session.coordinator.is_busy() {
            BUSY_POLL
        } else {
            IDLE_POLL
        };
        if let Some(remaining) = session.debouncer.time_until_ready(now) {
            timeout = timeout.min(remaining);
        }
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            match event {
                // Resize just needs a redraw (already flagged above)
                TuiEvent::Resize => {}
                TuiEvent::ForceQuit => return Ok(()),
                TuiEvent::ToggleFocus => session.tui.toggle_focus(),
                _ => session.handle_event(event),
            }
        }

        if let Some(query) = session.debouncer.poll(Instant::now()) {
            session.update_query(query);
            needs_redraw = true;
        }

        // Handle finished searches
        while let Ok(outcome) = session.outcomes.try_recv() {
            needs_redraw = true;
            session.apply_outcome(outcome);
        }
    }
}

impl Session {
    fn handle_event(&mut self, event: TuiEvent) {
        match self.tui.focus {
            Focus::SearchBar => match event {
                // The list stays navigable while typing
                TuiEvent::CursorUp
                | TuiEvent::CursorDown
                | TuiEvent::PageUp
                | TuiEvent::PageDown
                | TuiEvent::ScrollUp
                | TuiEvent::ScrollDown => {
                    self.tui.results.handle_event(&event);
                }
                TuiEvent::Escape => self.tui.focus = Focus::Results,
                _ => self.handle_search_bar_event(&event),
            },
            Focus::Results => match event {
                TuiEvent::Escape => self.tui.focus = Focus::SearchBar,
                // Typing auto-switches to the search bar and forwards the event
                TuiEvent::InputChar(_) | TuiEvent::Paste(_) | TuiEvent::Backspace => {
                    self.tui.focus = Focus::SearchBar;
                    self.handle_search_bar_event(&event);
                }
                _ => {
                    let opened = self.tui.results.handle_event(&event);
                    if let Some(ResultListEvent::Open(index)) = opened {
                        self.open_result(index);
                    }
                }
            },
        }
    }

    fn handle_search_bar_event(&mut self, event: &TuiEvent) {
        match self.tui.search_bar.handle_event(event) {
            Some(SearchBarEvent::Changed(query)) => {
                self.debouncer.push(query, Instant::now());
            }
            Some(SearchBarEvent::Commit) => match self.debouncer.flush() {
                Some(query) => self.update_query(query),
                None => self.tui.focus = Focus::Results,
            },
            None => {}
        }
    }

    fn update_query(&mut self, query: Option<String>) {
        self.tui.status_message.clear();
        self.coordinator.dispatch(Action::UpdateQuery(query));
    }

    fn apply_outcome(&mut self, outcome: EffectOutcome) {
        debug!(
            "Event loop received {:?} outcome with {} repos",
            outcome.kind,
            outcome.page.repos.len()
        );
        let replaced = outcome.kind == EffectKind::Replace;
        if self.coordinator.complete(outcome) && replaced {
            self.tui.results.reset();
        }
    }

    /// Near the end of the list, with a page available and no first-page search pending.
    fn wants_next_page(&self) -> bool {
        self.tui.results.viewport.is_near_bottom(self.scroll_threshold)
            && self.coordinator.state().can_load_next_page()
            && !self.coordinator.is_searching()
    }

    /// Dispatches `LoadNextPage` when the list has scrolled near its end.
    fn load_next_page_if_wanted(&mut self) -> bool {
        self.wants_next_page() && self.coordinator.dispatch(Action::LoadNextPage)
    }

    fn open_result(&mut self, index: usize) {
        let Some(full_name) = self.coordinator.state().repos.get(index) else {
            return;
        };
        self.tui.status_message = match browser::open_repo(full_name) {
            Ok(url) => format!("Opened {url}"),
            Err(e) => format!("Open failed: {e}"),
        };
    }
}
