//! The single-threaded loop that owns the timer

use std::{future::Future, io::Write, time::Duration};
use tokio::{
    sync::mpsc,
    time::{interval, MissedTickBehavior},
};
use tracing::{debug, info, warn};

use crate::{
    display::{Screen, TerminalScreen},
    input::{Command, HELP},
    sound::Alert,
    state::AppState,
    utils::Clock,
};

/// Why the event loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// The user typed `quit`
    Quit,
    /// A shutdown signal arrived
    Signal,
}

/// Drive the countdown until the user quits or a shutdown signal arrives.
///
/// Ticks, input lines and the shutdown future are all polled on the calling
/// task, so the state has exactly one mutator. A closed input channel only
/// stops command handling; the countdown carries on.
pub async fn run_event_loop<C, W, A, F>(
    app: &mut AppState<C>,
    screen: &mut TerminalScreen<W>,
    alert: &mut A,
    mut input: mpsc::UnboundedReceiver<String>,
    tick_every: Duration,
    shutdown: F,
) -> ExitReason
where
    C: Clock,
    W: Write,
    A: Alert,
    F: Future<Output = ()>,
{
    info!("Starting event loop, ticking every {}ms", tick_every.as_millis());

    let mut ticker = interval(tick_every);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut input_open = true;
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = &mut shutdown => {
                return ExitReason::Signal;
            }

            _ = ticker.tick() => {
                app.tick(screen, alert);
            }

            line = input.recv(), if input_open => {
                match line {
                    Some(line) => {
                        if let Some(reason) = handle_line(app, screen, &line) {
                            return reason;
                        }
                    }
                    None => {
                        debug!("Input closed, countdown continues until shutdown");
                        input_open = false;
                    }
                }
            }
        }
    }
}

/// Apply one line of user input
pub fn handle_line<C: Clock, W: Write>(
    app: &mut AppState<C>,
    screen: &mut TerminalScreen<W>,
    line: &str,
) -> Option<ExitReason> {
    match Command::parse(line) {
        Ok(Some(Command::Start(trigger))) => app.trigger(trigger, screen),
        Ok(Some(Command::Status)) => match app.status().to_json() {
            Ok(json) => {
                screen.print_block(&json);
                screen.set_text(&app.display_text());
            }
            Err(e) => warn!("Failed to serialize status: {}", e),
        },
        Ok(Some(Command::Help)) => {
            screen.print_block(HELP);
            screen.set_text(&app.display_text());
        }
        Ok(Some(Command::Quit)) => {
            info!("Quit requested");
            return Some(ExitReason::Quit);
        }
        Ok(None) => {}
        Err(message) => {
            warn!("{}", message);
            screen.print_block(HELP);
            screen.set_text(&app.display_text());
        }
    }
    None
}
