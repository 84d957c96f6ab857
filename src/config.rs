//! Configuration and CLI argument handling

use std::{path::PathBuf, time::Duration};
use clap::Parser;

use crate::{
    display::{Template, DEFAULT_TEMPLATE},
    error::DurationError,
    state::{Presets, Trigger},
};

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "pomodoro-timer")]
#[command(about = "A terminal pomodoro countdown timer with an audible alert")]
#[command(version)]
pub struct Config {
    /// Work interval (seconds, or e.g. 25m, 1m30s)
    #[arg(short, long, default_value = "1500", value_parser = parse_duration)]
    pub work: u64,

    /// Break interval (seconds, or e.g. 5m, 90s)
    #[arg(short = 'b', long = "break", default_value = "300", value_parser = parse_duration)]
    pub break_duration: u64,

    /// Notification sound file [default: built-in bell]
    #[arg(short, long)]
    pub sound: Option<PathBuf>,

    /// Audio player command; the sound file is appended as its last argument
    #[arg(long)]
    pub player: Option<String>,

    /// Display template taking {minutes} and {seconds}
    #[arg(short = 'f', long, default_value = DEFAULT_TEMPLATE)]
    pub template: Template,

    /// Tick cadence in milliseconds
    #[arg(long, default_value = "500", value_parser = clap::value_parser!(u64).range(1..=1000))]
    pub tick_ms: u64,

    /// Start an interval right after launch
    #[arg(long, value_enum)]
    pub autostart: Option<Trigger>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// The durations bound to the work and break triggers
    pub fn presets(&self) -> Presets {
        Presets::new(self.work, self.break_duration)
    }

    /// How often the countdown is polled
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}

/// Parse a duration given as bare seconds or as h/m/s components such as `1m30s`
pub fn parse_duration(input: &str) -> Result<u64, DurationError> {
    let input = input.trim().to_lowercase();
    if input.is_empty() {
        return Err(DurationError::Empty);
    }

    if let Ok(seconds) = input.parse::<u64>() {
        return Ok(seconds);
    }

    let mut total_seconds = 0u64;
    let mut current_number = String::new();

    for ch in input.chars() {
        if ch.is_ascii_digit() {
            current_number.push(ch);
        } else if matches!(ch, 'h' | 'm' | 's') {
            if current_number.is_empty() {
                return Err(DurationError::MissingNumber(ch));
            }
            let number: u64 = current_number.parse().map_err(|_| DurationError::Overflow)?;
            let unit = match ch {
                'h' => 3600,
                'm' => 60,
                _ => 1,
            };
            total_seconds = number
                .checked_mul(unit)
                .and_then(|seconds| total_seconds.checked_add(seconds))
                .ok_or(DurationError::Overflow)?;
            current_number.clear();
        } else if !ch.is_whitespace() {
            return Err(DurationError::InvalidCharacter(ch));
        }
    }

    if !current_number.is_empty() {
        return Err(DurationError::MissingUnit(input));
    }

    Ok(total_seconds)
}
