//! Event loop module
//!
//! This module contains the loop that ticks the countdown and applies user
//! commands.

pub mod event_loop;

// Re-export main functions
pub use event_loop::{handle_line, run_event_loop, ExitReason};
