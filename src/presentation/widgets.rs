//! Reusable UI widgets
//!
//! Stateless ratatui widgets composed by the stopwatch component.

pub mod control_button;
pub mod lap_row;
pub mod status_bar;
pub mod timer_display;
