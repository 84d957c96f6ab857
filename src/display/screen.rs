//! Where the remaining time is drawn

use std::io::{self, Write};
use tracing::debug;

/// Sink for the displayed text
pub trait Screen {
    fn set_text(&mut self, text: &str);
}

/// Redraws a single status line on a terminal
pub struct TerminalScreen<W: Write = io::Stdout> {
    out: W,
    width: usize,
}

impl TerminalScreen {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalScreen<W> {
    pub fn new(out: W) -> Self {
        Self { out, width: 0 }
    }

    /// Print a block of text (help, status) above the status line
    pub fn print_block(&mut self, block: &str) {
        let width = self.width;
        let result = write!(self.out, "\r{:width$}\r{}\n", "", block)
            .and_then(|_| self.out.flush());
        if let Err(e) = result {
            debug!("Failed to write to terminal: {}", e);
        }
        self.width = 0;
    }

    /// End the status line so the shell prompt starts on a fresh one
    pub fn finish(&mut self) {
        if self.width > 0 {
            if let Err(e) = writeln!(self.out).and_then(|_| self.out.flush()) {
                debug!("Failed to write to terminal: {}", e);
            }
            self.width = 0;
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Screen for TerminalScreen<W> {
    fn set_text(&mut self, text: &str) {
        let len = text.chars().count();
        // pad over whatever the previous, possibly longer, line left behind
        let pad = self.width.saturating_sub(len);
        let result = write!(self.out, "\r{}{:pad$}", text, "").and_then(|_| self.out.flush());
        if let Err(e) = result {
            debug!("Failed to write to terminal: {}", e);
        }
        self.width = len;
    }
}
