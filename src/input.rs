//! Line commands read from the terminal

use std::io::BufRead;
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::state::Trigger;

pub const HELP: &str = "\
Commands:
  work   (w)       start a work interval
  break  (b)       start a break interval
  status (s)       print the timer status as JSON
  help   (h, ?)    show this help
  quit   (q)       exit";

/// A command typed by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start(Trigger),
    Status,
    Help,
    Quit,
}

impl Command {
    /// Parse one input line. `Ok(None)` means the line was blank.
    pub fn parse(line: &str) -> Result<Option<Self>, String> {
        let command = match line.trim().to_lowercase().as_str() {
            "" => return Ok(None),
            "work" | "w" => Command::Start(Trigger::Work),
            "break" | "b" => Command::Start(Trigger::Break),
            "status" | "s" => Command::Status,
            "help" | "h" | "?" => Command::Help,
            "quit" | "q" | "exit" => Command::Quit,
            other => return Err(format!("Unknown command '{}'", other)),
        };
        Ok(Some(command))
    }
}

/// Read stdin lines on a dedicated thread and forward them to the event loop.
///
/// Blocking terminal reads stay off the runtime so shutdown never waits on
/// a pending read. The channel closes at end of input.
pub fn spawn_stdin_reader() -> mpsc::UnboundedReceiver<String> {
    let (tx, rx) = mpsc::unbounded_channel();
    let spawned = std::thread::Builder::new()
        .name("stdin-reader".to_string())
        .spawn(move || {
            for line in std::io::stdin().lock().lines() {
                match line {
                    Ok(line) => {
                        if tx.send(line).is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        warn!("Failed to read input: {}", e);
                        break;
                    }
                }
            }
            debug!("Input reader finished");
        });

    if let Err(e) = spawned {
        warn!("Failed to start input reader, commands are disabled: {}", e);
    }
    rx
}
