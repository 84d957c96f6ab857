//! Acquiring the resources the event loop needs

use std::path::Path;
use signal_hook_tokio::Signals;
use thiserror::Error;

use crate::{error::SoundError, sound::Sound, utils::register_shutdown_signals};

/// A resource that could not be set up before the timer starts
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Failed to register shutdown signals")]
    Signals(#[source] std::io::Error),

    #[error(transparent)]
    Sound(#[from] SoundError),
}

impl StartupError {
    pub fn error_code(&self) -> &'static str {
        match self {
            StartupError::Signals(_) => "startup.signals_failed",
            StartupError::Sound(e) => e.error_code(),
        }
    }
}

/// Register the shutdown signals, then load the notification sound.
///
/// A signal registration failure returns before any sound is loaded.
pub async fn open_resources(
    sound: Option<&Path>,
    player: Option<&str>,
) -> Result<(Signals, Sound), StartupError> {
    let signals = register_shutdown_signals().map_err(StartupError::Signals)?;
    let sound = Sound::open(sound, player).await?;
    Ok((signals, sound))
}
