//! Configuration management for the HAL voice loop

pub mod file;

use std::path::PathBuf;

use crate::voice::vad::{DEFAULT_ENERGY_THRESHOLD, DEFAULT_PAUSE_SECS};

/// Default whisper.cpp binary location, relative to the working directory
const DEFAULT_AUDITION_BINARY: &str = "audition/main";

/// Default ggml model location
const DEFAULT_AUDITION_MODEL: &str = "audition/models/ggml-base.en.bin";

/// Keyword that ends the conversation when heard in any casing
const DEFAULT_TERMINATION_KEYWORD: &str = "terminate";

/// Farewell spoken before shutdown
const DEFAULT_FAREWELL: &str = "Taking all systems offline.";

/// Resolved runtime configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Voice configuration
    pub voice: VoiceConfig,

    /// Local recognition engine configuration
    pub audition: AuditionConfig,

    /// Completion configuration
    pub completion: CompletionConfig,

    /// API keys
    pub api_keys: ApiKeys,

    /// Conversation loop configuration
    pub session: SessionConfig,
}

/// Voice processing configuration
#[derive(Debug, Clone)]
pub struct VoiceConfig {
    /// RMS energy threshold for speech detection (fixed, not adaptive)
    pub energy_threshold: f32,

    /// Pause duration marking end of utterance, in seconds
    pub pause_secs: f32,

    /// TTS model
    pub tts_model: String,

    /// TTS voice identifier
    pub tts_voice: String,

    /// TTS speed multiplier
    pub tts_speed: f32,

    /// Audio player command
    pub player: String,
}

/// Local recognition engine configuration
#[derive(Debug, Clone)]
pub struct AuditionConfig {
    /// Path to the whisper.cpp binary
    pub binary: PathBuf,

    /// Path to the ggml model file
    pub model: PathBuf,
}

/// Completion configuration
#[derive(Debug, Clone)]
pub struct CompletionConfig {
    /// Model identifier
    pub model: String,

    /// Max output tokens per reply
    pub max_tokens: u32,
}

/// API keys for external services
#[derive(Debug, Clone, Default)]
pub struct ApiKeys {
    /// `OpenAI` API key (completions and TTS)
    pub openai: Option<String>,
}

impl ApiKeys {
    /// The `OpenAI` key, or empty string if unset
    ///
    /// Component constructors reject the empty key with a configuration
    /// error, which is where a missing credential surfaces.
    #[must_use]
    pub fn openai_or_empty(&self) -> String {
        self.openai.clone().unwrap_or_default()
    }
}

/// Conversation loop configuration
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Case-insensitive keyword that ends the conversation
    pub termination_keyword: String,

    /// Fixed farewell phrase spoken before exit
    pub farewell: String,
}

impl Config {
    /// Load configuration: env > TOML file > defaults
    ///
    /// A missing or malformed config file falls back to defaults; a missing
    /// API key surfaces later, when components are constructed.
    #[must_use]
    pub fn load() -> Self {
        let fc = file::load_config_file();

        let api_keys = ApiKeys {
            openai: std::env::var("OPENAI_API_KEY").ok().or(fc.api_keys.openai),
        };

        let voice = VoiceConfig {
            energy_threshold: fc
                .voice
                .energy_threshold
                .unwrap_or(DEFAULT_ENERGY_THRESHOLD),
            pause_secs: fc.voice.pause_secs.unwrap_or(DEFAULT_PAUSE_SECS),
            tts_model: fc.voice.tts_model.unwrap_or_else(|| "tts-1".to_string()),
            tts_voice: fc.voice.tts_voice.unwrap_or_else(|| "alloy".to_string()),
            tts_speed: fc.voice.tts_speed.unwrap_or(1.0),
            player: fc.voice.player.unwrap_or_else(|| "ffplay".to_string()),
        };

        let audition = AuditionConfig {
            binary: std::env::var("HAL_AUDITION_BINARY")
                .ok()
                .or(fc.audition.binary)
                .map_or_else(|| PathBuf::from(DEFAULT_AUDITION_BINARY), PathBuf::from),
            model: std::env::var("HAL_AUDITION_MODEL")
                .ok()
                .or(fc.audition.model)
                .map_or_else(|| PathBuf::from(DEFAULT_AUDITION_MODEL), PathBuf::from),
        };

        let completion = CompletionConfig {
            model: fc
                .completion
                .model
                .unwrap_or_else(|| "gpt-3.5-turbo-instruct".to_string()),
            max_tokens: fc.completion.max_tokens.unwrap_or(150),
        };

        let session = SessionConfig {
            termination_keyword: fc
                .session
                .termination_keyword
                .unwrap_or_else(|| DEFAULT_TERMINATION_KEYWORD.to_string()),
            farewell: fc
                .session
                .farewell
                .unwrap_or_else(|| DEFAULT_FAREWELL.to_string()),
        };

        Self {
            voice,
            audition,
            completion,
            api_keys,
            session,
        }
    }
}
