//! Integration layer
//!
//! Wires the core update loop to the host:
//! - Runtime owning state, queues and the command executor
//! - Renderer drawing components from state
//! - AppRunner driving events, updates and rendering

pub mod app_runner;
pub mod renderer;
pub mod runtime;
