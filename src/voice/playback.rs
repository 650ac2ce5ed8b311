//! Audio playback via an external player subprocess
//!
//! Synthesized replies land on disk as MP3 and are handed to a local player
//! binary. Playback runs to completion before the loop continues, so the
//! conversation stays strictly turn-based.

use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;

use crate::{Error, Result};

/// Default player invocation: decode-and-exit, no window
const DEFAULT_PLAYER: &str = "ffplay";
const DEFAULT_PLAYER_ARGS: &[&str] = &["-nodisp", "-autoexit"];

/// Short pre-roll so the audio device settles before the clip starts
const PRE_ROLL: Duration = Duration::from_millis(50);

/// Plays audio files through an external player binary
pub struct Player {
    program: PathBuf,
    args: Vec<String>,
}

impl Player {
    /// Create a player using the default command (`ffplay`)
    ///
    /// # Errors
    ///
    /// Returns error if the player binary cannot be found on PATH
    pub fn new() -> Result<Self> {
        Self::with_command(DEFAULT_PLAYER)
    }

    /// Create a player using a specific command name
    ///
    /// `ffplay` gets its no-display flags; any other command is invoked with
    /// the file path as its only argument.
    ///
    /// # Errors
    ///
    /// Returns error if the player binary cannot be found on PATH
    pub fn with_command(command: &str) -> Result<Self> {
        let program = which::which(command)
            .map_err(|_| Error::Config(format!("audio player not found: {command}")))?;

        let args = if command == DEFAULT_PLAYER {
            DEFAULT_PLAYER_ARGS.iter().map(ToString::to_string).collect()
        } else {
            Vec::new()
        };

        tracing::debug!(player = %program.display(), "audio player initialized");

        Ok(Self { program, args })
    }

    /// Play an audio file, blocking until the player exits
    ///
    /// The player's exit status is logged but not checked.
    ///
    /// # Errors
    ///
    /// Returns error if the player process cannot be spawned
    pub async fn play(&self, path: &Path) -> Result<()> {
        tokio::time::sleep(PRE_ROLL).await;

        let status = Command::new(&self.program)
            .args(&self.args)
            .arg(path)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map_err(|e| {
                Error::Audio(format!(
                    "failed to run player {}: {e}",
                    self.program.display()
                ))
            })?;

        tracing::debug!(code = ?status.code(), file = %path.display(), "playback complete");
        Ok(())
    }
}
