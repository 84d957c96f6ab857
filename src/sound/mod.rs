//! Notification sound module
//!
//! This module loads the notification sound at startup, plays it when an
//! interval runs out and releases it at shutdown.

pub mod format;
pub mod player;

use std::{
    io::Write,
    path::{Path, PathBuf},
    process::Stdio,
};
use tempfile::TempPath;
use tokio::process::{Child, Command};
use tracing::{debug, info, warn};

use crate::error::SoundError;
pub use format::AudioFormat;
pub use player::{check_player_available, Backend, PLAYER_CANDIDATES};

/// Bell sound compiled into the binary, used when no sound file is configured
pub const BUNDLED_SOUND: &[u8] = include_bytes!("../../assets/bell.wav");

/// Something that can announce the end of an interval
pub trait Alert {
    /// Start the notification and return without waiting for it
    fn play(&mut self);
}

/// A loaded notification sound and the players it has started
#[derive(Debug)]
pub struct Sound {
    path: PathBuf,
    format: AudioFormat,
    backend: Backend,
    players: Vec<Child>,
    // keeps the unpacked bundled sound on disk until the sound is closed
    bundled: Option<TempPath>,
}

impl Sound {
    /// Load the sound file and pick an audio backend for it
    pub async fn load(path: impl Into<PathBuf>, player: Option<&str>) -> Result<Self, SoundError> {
        let path = path.into();
        let format = read_sound_file(&path).await?;
        let backend = Backend::select(player).await?;

        info!(
            "Loaded {} sound {} (player: {})",
            format,
            path.display(),
            backend.describe()
        );
        Ok(Self::with_backend(path, format, backend))
    }

    /// Load the bundled bell.
    ///
    /// Players need a file path, so the embedded bytes are unpacked to a
    /// temporary file that lives as long as the sound.
    pub async fn load_bundled(player: Option<&str>) -> Result<Self, SoundError> {
        let temp_path = unpack_bundled_sound().map_err(SoundError::Bundled)?;
        let mut sound = Self::load(temp_path.to_path_buf(), player).await?;
        sound.bundled = Some(temp_path);
        Ok(sound)
    }

    /// Load the configured sound file, or the bundled bell when there is none
    pub async fn open(path: Option<&Path>, player: Option<&str>) -> Result<Self, SoundError> {
        match path {
            Some(path) => Self::load(path, player).await,
            None => Self::load_bundled(player).await,
        }
    }

    /// Use an already validated sound file with a given backend
    pub fn with_backend(path: PathBuf, format: AudioFormat, backend: Backend) -> Self {
        Self {
            path,
            format,
            backend,
            players: Vec::new(),
            bundled: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> AudioFormat {
        self.format
    }

    pub fn backend(&self) -> &Backend {
        &self.backend
    }

    /// Number of players that have not been seen to exit yet
    pub fn active_players(&mut self) -> usize {
        self.reap_finished();
        self.players.len()
    }

    /// Stop any player still running and release the sound
    pub async fn close(mut self) -> Result<(), SoundError> {
        self.reap_finished();

        let mut failures = Vec::new();
        if !self.players.is_empty() {
            info!("Stopping {} running player(s)", self.players.len());
        }
        for mut child in self.players.drain(..) {
            if let Err(e) = child.start_kill() {
                failures.push(e.to_string());
                continue;
            }
            if let Err(e) = child.wait().await {
                failures.push(e.to_string());
            }
        }

        // players are gone, so the unpacked bell can be removed
        if let Some(temp_path) = self.bundled.take() {
            if let Err(e) = temp_path.close() {
                failures.push(format!("failed to remove bundled sound: {}", e));
            }
        }

        if failures.is_empty() {
            debug!("Sound released");
            Ok(())
        } else {
            Err(SoundError::Teardown {
                count: failures.len(),
                message: failures.join("; "),
            })
        }
    }

    fn reap_finished(&mut self) {
        self.players.retain_mut(|child| match child.try_wait() {
            Ok(Some(status)) => {
                debug!("Player exited with {}", status);
                false
            }
            Ok(None) => true,
            Err(e) => {
                warn!("Failed to poll player: {}", e);
                false
            }
        });
    }

    fn spawn_player(&self, program: &str, args: &[String]) -> std::io::Result<Child> {
        Command::new(program)
            .args(args)
            .arg(&self.path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
    }
}

impl Alert for Sound {
    fn play(&mut self) {
        self.reap_finished();

        if let Backend::Command { program, args } = &self.backend {
            match self.spawn_player(program, args) {
                Ok(child) => {
                    debug!("Started {} (pid {:?})", program, child.id());
                    self.players.push(child);
                    return;
                }
                Err(e) => warn!("Failed to start {}: {}, ringing the bell instead", program, e),
            }
        }

        ring_bell();
    }
}

/// Read the sound file and check it holds a known audio format
pub async fn read_sound_file(path: &Path) -> Result<AudioFormat, SoundError> {
    let bytes = tokio::fs::read(path).await.map_err(|source| SoundError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    if bytes.is_empty() {
        return Err(SoundError::Empty {
            path: path.to_path_buf(),
        });
    }

    AudioFormat::detect(&bytes).ok_or_else(|| SoundError::UnknownFormat {
        path: path.to_path_buf(),
    })
}

fn unpack_bundled_sound() -> std::io::Result<TempPath> {
    let mut file = tempfile::Builder::new()
        .prefix("pomodoro-bell-")
        .suffix(".wav")
        .tempfile()?;
    file.write_all(BUNDLED_SOUND)?;
    file.flush()?;
    Ok(file.into_temp_path())
}

fn ring_bell() {
    let mut stdout = std::io::stdout();
    if let Err(e) = stdout.write_all(b"\x07").and_then(|_| stdout.flush()) {
        debug!("Failed to ring the bell: {}", e);
    }
}
