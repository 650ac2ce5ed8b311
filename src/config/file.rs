//! TOML configuration file loading
//!
//! Supports `~/.config/hal/config.toml` as a persistent config source.
//! All fields are optional — the file is a partial overlay on top of defaults.

use std::path::PathBuf;

use serde::Deserialize;

/// Top-level TOML configuration file schema
#[derive(Debug, Default, Deserialize)]
pub struct HalConfigFile {
    /// Completion (cognition) configuration
    #[serde(default)]
    pub completion: CompletionFileConfig,

    /// Voice/audio configuration
    #[serde(default)]
    pub voice: VoiceFileConfig,

    /// Local speech recognition configuration
    #[serde(default)]
    pub audition: AuditionFileConfig,

    /// API keys for external services
    #[serde(default)]
    pub api_keys: ApiKeysFileConfig,

    /// Conversation loop configuration
    #[serde(default)]
    pub session: SessionFileConfig,
}

/// Completion-related configuration
#[derive(Debug, Default, Deserialize)]
pub struct CompletionFileConfig {
    /// Model identifier (e.g. "gpt-3.5-turbo-instruct")
    pub model: Option<String>,

    /// Max output tokens per reply
    pub max_tokens: Option<u32>,
}

/// Voice processing configuration
#[derive(Debug, Default, Deserialize)]
pub struct VoiceFileConfig {
    /// RMS energy threshold for speech detection
    pub energy_threshold: Option<f32>,

    /// Pause duration marking end of utterance, in seconds
    pub pause_secs: Option<f32>,

    /// TTS model (e.g. "tts-1")
    pub tts_model: Option<String>,

    /// TTS voice identifier (e.g. "alloy")
    pub tts_voice: Option<String>,

    /// TTS speed multiplier
    pub tts_speed: Option<f32>,

    /// Audio player command (e.g. "ffplay")
    pub player: Option<String>,
}

/// Local recognition engine configuration
#[derive(Debug, Default, Deserialize)]
pub struct AuditionFileConfig {
    /// Path to the whisper.cpp binary
    pub binary: Option<String>,

    /// Path to the ggml model file
    pub model: Option<String>,
}

/// API keys configuration
#[derive(Debug, Default, Deserialize)]
pub struct ApiKeysFileConfig {
    pub openai: Option<String>,
}

/// Conversation loop configuration
#[derive(Debug, Default, Deserialize)]
pub struct SessionFileConfig {
    /// Case-insensitive keyword that ends the conversation
    pub termination_keyword: Option<String>,

    /// Fixed farewell phrase spoken before exit
    pub farewell: Option<String>,
}

/// Load the TOML config file from the standard path
///
/// Returns `HalConfigFile::default()` if the file doesn't exist or can't be parsed.
#[must_use]
pub fn load_config_file() -> HalConfigFile {
    let Some(path) = config_file_path() else {
        return HalConfigFile::default();
    };

    if !path.exists() {
        return HalConfigFile::default();
    }

    match std::fs::read_to_string(&path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(config) => {
                tracing::info!(path = %path.display(), "loaded config file");
                config
            }
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "failed to parse config file, using defaults"
                );
                HalConfigFile::default()
            }
        },
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "failed to read config file"
            );
            HalConfigFile::default()
        }
    }
}

/// Return the config file path: `~/.config/hal/config.toml`
#[must_use]
pub fn config_file_path() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|d| d.config_dir().join("hal").join("config.toml"))
}
