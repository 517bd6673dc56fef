//! # Core Application Logic
//!
//! The search-and-paginate cycle, independent of any terminal code.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • SearchState          │
//!                    │  • Action / Mutation    │
//!                    │  • reduce()             │
//!                    │  • Coordinator          │
//!                    └───────────┬─────────────┘
//!                                │
//!                  ┌─────────────┴─────────────┐
//!                  ▼                           ▼
//!           ┌────────────┐              ┌────────────┐
//!           │    TUI     │              │  --print   │
//!           │  Adapter   │              │  (stdout)  │
//!           │ (ratatui)  │              │            │
//!           └────────────┘              └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: `SearchState`, the immutable snapshot
//! - [`action`]: `Action`, `Mutation` and the pure `reduce()`
//! - [`coordinator`]: intent handling, search tasks and cancellation
//! - [`config`]: settings with file/env/CLI overrides

pub mod action;
pub mod config;
pub mod coordinator;
pub mod state;

pub use action::{Action, Mutation, reduce};
pub use coordinator::{Coordinator, EffectKind, EffectOutcome};
pub use state::SearchState;
