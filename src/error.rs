//! Error types for startup configuration and the sound resource

use std::path::PathBuf;
use thiserror::Error;

/// A display template that cannot be used
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("unknown placeholder '{{{name}}}' (expected {{minutes}} or {{seconds}})")]
    UnknownPlaceholder { name: String },

    #[error("unclosed '{{' at byte {position}")]
    Unclosed { position: usize },

    #[error("unmatched '}}' at byte {position} (write '}}}}' for a literal brace)")]
    StrayClose { position: usize },
}

/// A duration option that cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DurationError {
    #[error("duration is empty")]
    Empty,

    #[error("invalid character '{0}' in duration (use forms like 300, 25m, 1m30s)")]
    InvalidCharacter(char),

    #[error("unit '{0}' has no number in front of it")]
    MissingNumber(char),

    #[error("'{0}' must end with a unit: h, m or s")]
    MissingUnit(String),

    #[error("duration is too large")]
    Overflow,
}

/// Failures of the notification sound and the audio backend
#[derive(Debug, Error)]
pub enum SoundError {
    #[error("Failed to read sound file '{}'", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to unpack the bundled sound")]
    Bundled(#[source] std::io::Error),

    #[error("Sound file '{}' is empty", .path.display())]
    Empty { path: PathBuf },

    #[error("Sound file '{}' is not a recognised audio format", .path.display())]
    UnknownFormat { path: PathBuf },

    #[error("Audio player '{program}' is not available: {message}")]
    PlayerUnavailable { program: String, message: String },

    #[error("Failed to release the sound ({count} problem(s)): {message}")]
    Teardown { count: usize, message: String },
}

impl SoundError {
    pub fn error_code(&self) -> &'static str {
        match self {
            SoundError::Read { .. } => "sound.read_failed",
            SoundError::Bundled(_) => "sound.bundled_unpack_failed",
            SoundError::Empty { .. } => "sound.empty_file",
            SoundError::UnknownFormat { .. } => "sound.unknown_format",
            SoundError::PlayerUnavailable { .. } => "sound.player_unavailable",
            SoundError::Teardown { .. } => "sound.teardown_failed",
        }
    }

    /// Whether the error comes from the sound file rather than the audio backend
    pub fn is_resource_error(&self) -> bool {
        matches!(
            self,
            SoundError::Read { .. }
                | SoundError::Bundled(_)
                | SoundError::Empty { .. }
                | SoundError::UnknownFormat { .. }
        )
    }
}
