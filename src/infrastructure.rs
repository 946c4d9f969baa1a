//! Infrastructure layer
//!
//! Host integrations the stopwatch depends on:
//! - Terminal backends and event sources
//! - Wall clock
//! - Periodic callback scheduler
//! - Configuration and CLI argument processing

pub mod cli;
pub mod clock;
pub mod config;
pub mod ticker;
pub mod tui;
