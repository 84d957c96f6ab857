//! Pomodoro Timer - A terminal countdown for the pomodoro technique
//!
//! This library provides the wall-clock countdown, its display template, the
//! notification sound and the event loop that ties them together.

pub mod config;
pub mod display;
pub mod error;
pub mod input;
pub mod sound;
pub mod startup;
pub mod state;
pub mod status;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use sound::{Alert, Sound};
pub use state::{AppState, Phase, TickOutcome, TimerState, Trigger};
pub use tasks::{run_event_loop, ExitReason};
pub use utils::signals::shutdown_signal;
