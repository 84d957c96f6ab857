//! Utility functions module
//!
//! This module contains the clock sources and signal handling used by the
//! event loop.

pub mod clock;
pub mod signals;

// Re-export main items
pub use clock::{Clock, ManualClock, SystemClock};
pub use signals::{register_shutdown_signals, shutdown_signal};
