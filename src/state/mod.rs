//! State management module
//!
//! This module contains the countdown timer, the preset intervals and the
//! application state that ties them to the display and the alert.

pub mod app_state;
pub mod presets;
pub mod timer_state;

// Re-export main types
pub use app_state::AppState;
pub use presets::{Presets, Trigger, DEFAULT_BREAK_SECONDS, DEFAULT_WORK_SECONDS};
pub use timer_state::{Phase, TickOutcome, TimerState};
