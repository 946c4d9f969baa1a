//! # lapwatch - terminal stopwatch
//!
//! A single-screen stopwatch with start/stop, lap recording and a scrollable
//! lap list, built with Ratatui on an Elm-like architecture.
//!
//! ## Architecture Overview
//!
//! - **State** (`core::state`): explicit application state
//! - **Message** (`core::msg`): events that can change the state
//! - **Update** (`core::update`): functions that transform state and return commands
//! - **Command** (`core::cmd`): side effects (ticker scheduling, rendering, resize)
//! - **View** (`presentation::components`): rendering based on current state
//!
//! ## Example Usage
//!
//! ```rust
//! use lapwatch::core::{
//!     msg::{stopwatch::StopwatchMsg, Msg},
//!     state::AppState,
//!     update::{update_with_context, UpdateContext},
//! };
//! use lapwatch::infrastructure::clock::ManualClock;
//!
//! let clock = ManualClock::new(10_000);
//! let ctx = UpdateContext { clock: &clock };
//!
//! let (state, _cmds) = update_with_context(
//!     Msg::Stopwatch(StopwatchMsg::ToggleRun),
//!     AppState::default(),
//!     &ctx,
//! );
//! clock.advance(1_500);
//! let (state, _cmds) = update_with_context(
//!     Msg::Stopwatch(StopwatchMsg::TickerFired { session: 0 }),
//!     state,
//!     &ctx,
//! );
//!
//! assert!(state.stopwatch.is_running());
//! assert_eq!(state.stopwatch.elapsed_ms(), 1_500);
//! ```

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod presentation;
pub mod utils;

pub use crate::core::{cmd, msg, raw_msg, state, translator, update};
