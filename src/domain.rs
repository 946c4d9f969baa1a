//! Domain logic
//!
//! This module contains stopwatch-independent building blocks:
//! - Colon-notation duration formatting

pub mod duration;
