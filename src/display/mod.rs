//! Presentation module
//!
//! This module formats the remaining time and draws it on the terminal.

pub mod screen;
pub mod template;

// Re-export main types
pub use screen::{Screen, TerminalScreen};
pub use template::{Template, DEFAULT_TEMPLATE};
