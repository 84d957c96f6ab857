//! Signal handling for graceful shutdown

use signal_hook_tokio::Signals;
use futures::stream::StreamExt;
use tracing::info;

/// Signals that close the timer, the terminal equivalent of closing its window
pub const SHUTDOWN_SIGNALS: [i32; 3] = [
    signal_hook::consts::SIGTERM,
    signal_hook::consts::SIGINT,
    signal_hook::consts::SIGHUP,
];

/// Register the shutdown signal handlers
pub fn register_shutdown_signals() -> std::io::Result<Signals> {
    Signals::new(SHUTDOWN_SIGNALS)
}

/// Wait for the first shutdown signal (SIGTERM, SIGINT, SIGHUP)
pub async fn shutdown_signal(mut signals: Signals) {
    if let Some(signal) = signals.next().await {
        info!("Received signal: {}", signal);
    }
}
