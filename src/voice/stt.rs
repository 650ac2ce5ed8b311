//! Speech-to-text via a local whisper.cpp binary
//!
//! The engine is invoked as a subprocess against a WAV file on disk and
//! writes the transcript to a `<input>.txt` sidecar file. That filesystem
//! convention is isolated behind [`SpeechRecognizer`] so the engine could be
//! swapped for an in-process model without touching the conversation loop.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::{Error, Result};

/// Literal substring corrections applied to every transcript, in order.
/// The recognition model consistently mis-hears the studio's name.
const CORRECTIONS: &[(&str, &str)] = &[("Sacks", "Sachs"), ("Sax", "Sachs")];

/// Transcribes recorded speech to text
#[async_trait]
pub trait SpeechRecognizer: Send + Sync {
    /// Transcribe the WAV file at `wav_path`, returning cleaned text
    ///
    /// # Errors
    ///
    /// Returns error if the engine fails or produces no transcript
    async fn transcribe(&self, wav_path: &Path) -> Result<String>;
}

/// Recognition engine backed by the whisper.cpp CLI
pub struct WhisperCli {
    binary: PathBuf,
    model: PathBuf,
}

impl WhisperCli {
    /// Create a new engine handle
    ///
    /// # Errors
    ///
    /// Returns error if the model file does not exist
    pub fn new(binary: PathBuf, model: PathBuf) -> Result<Self> {
        if !model.exists() {
            return Err(Error::Config(format!(
                "recognition model not found: {}",
                model.display()
            )));
        }

        tracing::debug!(
            binary = %binary.display(),
            model = %model.display(),
            "recognition engine initialized"
        );

        Ok(Self { binary, model })
    }

    /// Sidecar transcript path the engine writes next to the input file
    fn sidecar_path(wav_path: &Path) -> PathBuf {
        let mut os: OsString = wav_path.as_os_str().to_os_string();
        os.push(".txt");
        PathBuf::from(os)
    }
}

#[async_trait]
impl SpeechRecognizer for WhisperCli {
    async fn transcribe(&self, wav_path: &Path) -> Result<String> {
        tracing::debug!(wav = %wav_path.display(), "starting transcription");

        let status = Command::new(&self.binary)
            .arg("-m")
            .arg(&self.model)
            .arg("-f")
            .arg(wav_path)
            .arg("-otxt")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map_err(|e| {
                Error::Stt(format!(
                    "failed to run {}: {e}",
                    self.binary.display()
                ))
            })?;

        // The sidecar read below is what decides success
        tracing::debug!(code = ?status.code(), "recognition engine exited");

        let sidecar = Self::sidecar_path(wav_path);
        let raw = tokio::fs::read_to_string(&sidecar).await.map_err(|e| {
            Error::Stt(format!(
                "missing transcript output {}: {e}",
                sidecar.display()
            ))
        })?;

        let text = correct_transcript(raw.trim());
        tracing::info!(transcript = %text, "transcription complete");
        Ok(text)
    }
}

/// Apply the fixed literal transcript corrections
#[must_use]
pub fn correct_transcript(text: &str) -> String {
    let mut out = text.to_string();
    for (from, to) in CORRECTIONS {
        out = out.replace(from, to);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corrections() {
        assert_eq!(correct_transcript("Sax is here"), "Sachs is here");
        assert_eq!(correct_transcript("Sacks is here"), "Sachs is here");
        assert_eq!(correct_transcript("Tom Sachs is here"), "Tom Sachs is here");
        assert_eq!(correct_transcript("no change"), "no change");
    }

    #[test]
    fn test_sidecar_path() {
        let sidecar = WhisperCli::sidecar_path(Path::new("/tmp/scratch/turn.wav"));
        assert_eq!(sidecar, PathBuf::from("/tmp/scratch/turn.wav.txt"));
    }
}
