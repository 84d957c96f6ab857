//! Pomodoro Timer - A terminal countdown for the pomodoro technique
//!
//! This is the main entry point for the pomodoro-timer application.

use tracing::{error, info};

use pomodoro_timer::{
    config::Config,
    display::{Screen, TerminalScreen},
    input::{spawn_stdin_reader, HELP},
    startup::open_resources,
    state::AppState,
    tasks::run_event_loop,
    utils::shutdown_signal,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Logs go to stderr so they never land on the countdown line
    tracing_subscriber::fmt()
        .with_env_filter(format!("pomodoro_timer={}", config.log_level()))
        .with_writer(std::io::stderr)
        .init();

    info!("Starting pomodoro-timer v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Configuration: work={}s, break={}s, template={:?}, tick={}ms",
        config.work, config.break_duration, config.template.as_str(), config.tick_ms
    );

    let (signals, mut sound) =
        match open_resources(config.sound.as_deref(), config.player.as_deref()).await {
            Ok(resources) => resources,
            Err(e) => {
                error!("{} [{}]", e, e.error_code());
                std::process::exit(1);
            }
        };
    let signals_handle = signals.handle();

    let mut app = AppState::new(config.presets(), config.template.clone());
    let mut screen = TerminalScreen::stdout();
    screen.print_block(HELP);
    screen.set_text(&app.display_text());

    if let Some(trigger) = config.autostart {
        app.trigger(trigger, &mut screen);
    }

    let reason = run_event_loop(
        &mut app,
        &mut screen,
        &mut sound,
        spawn_stdin_reader(),
        config.tick_interval(),
        shutdown_signal(signals),
    )
    .await;

    screen.finish();
    signals_handle.close();
    info!("Closing: {:?}", reason);

    if let Err(e) = sound.close().await {
        error!("{} [{}]", e, e.error_code());
    }

    info!(
        "Shutdown complete after {} completed interval(s)",
        app.completed_intervals()
    );
    Ok(())
}
