//! External audio player selection

use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, info, warn};

use crate::error::SoundError;

/// Players tried, in order, when none is configured
pub const PLAYER_CANDIDATES: [&str; 3] = ["paplay", "aplay", "afplay"];

/// How the notification is made audible
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Backend {
    /// Run a player program with the sound file as its last argument
    Command { program: String, args: Vec<String> },
    /// Ring the terminal bell
    Bell,
}

impl Backend {
    /// Build a command backend from a command line such as `"mpv --no-video"`
    pub fn command(command_line: &str) -> Option<Self> {
        let mut parts = command_line.split_whitespace().map(str::to_string);
        let program = parts.next()?;
        Some(Backend::Command {
            program,
            args: parts.collect(),
        })
    }

    /// Pick the audio backend.
    ///
    /// A configured player must be runnable; otherwise the first available
    /// candidate is used, falling back to the terminal bell.
    pub async fn select(player: Option<&str>) -> Result<Self, SoundError> {
        if let Some(command_line) = player {
            let backend = Self::command(command_line).ok_or_else(|| SoundError::PlayerUnavailable {
                program: command_line.to_string(),
                message: "empty player command".to_string(),
            })?;
            if let Backend::Command { program, .. } = &backend {
                check_player_available(program).await?;
            }
            return Ok(backend);
        }

        for candidate in PLAYER_CANDIDATES {
            match check_player_available(candidate).await {
                Ok(()) => {
                    return Ok(Backend::Command {
                        program: candidate.to_string(),
                        args: Vec::new(),
                    })
                }
                Err(e) => debug!("{}", e),
            }
        }

        warn!("No audio player found (tried {:?}), using the terminal bell", PLAYER_CANDIDATES);
        Ok(Backend::Bell)
    }

    pub fn describe(&self) -> String {
        match self {
            Backend::Command { program, .. } => program.clone(),
            Backend::Bell => "terminal bell".to_string(),
        }
    }
}

/// Check that a player program can be spawned
pub async fn check_player_available(program: &str) -> Result<(), SoundError> {
    Command::new(program)
        .arg("--version")
        .stdin(Stdio::null())
        .output()
        .await
        .map_err(|e| SoundError::PlayerUnavailable {
            program: program.to_string(),
            message: e.to_string(),
        })?;

    info!("{} is available", program);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_line_is_split_into_program_and_args() {
        assert_eq!(
            Backend::command("mpv --no-video  --volume=50"),
            Some(Backend::Command {
                program: "mpv".to_string(),
                args: vec!["--no-video".to_string(), "--volume=50".to_string()],
            })
        );
        assert_eq!(Backend::command("   "), None);
    }

    #[tokio::test]
    async fn configured_player_must_exist() {
        let err = Backend::select(Some("no-such-player-7f3a")).await.unwrap_err();
        assert_eq!(err.error_code(), "sound.player_unavailable");
        assert!(!err.is_resource_error());
    }

    #[tokio::test]
    async fn configured_player_is_used_when_runnable() {
        let backend = Backend::select(Some("sh -c true")).await.unwrap();
        assert_eq!(backend.describe(), "sh");
    }

    #[tokio::test]
    async fn blank_player_is_rejected() {
        assert!(Backend::select(Some("")).await.is_err());
    }

    #[tokio::test]
    async fn auto_detection_always_yields_a_backend() {
        assert!(Backend::select(None).await.is_ok());
    }
}
