//! HAL - a voice-driven conversational loop
//!
//! This library provides the pieces of a speaking chatbot:
//! - Audio capture and utterance segmentation (microphone + energy VAD)
//! - Local speech recognition via a whisper.cpp subprocess
//! - Cognition via a remote completion API over a growing chat log
//! - Speech via a remote TTS API and an external audio player
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                      Session                          │
//! │  LISTENING → TRANSCRIBING → RESPONDING → SPEAKING …  │
//! └──────┬───────────┬───────────────┬───────────┬───────┘
//!        │           │               │           │
//!   AudioCapture  WhisperCli  CompletionClient  TextToSpeech
//!   (cpal + VAD)  (subprocess)   (remote API)   (remote API)
//!                                                   │
//!                                                Player
//!                                             (subprocess)
//! ```

pub mod banner;
pub mod completion;
pub mod config;
pub mod error;
pub mod session;
pub mod transcript;
pub mod voice;

pub use completion::CompletionClient;
pub use config::Config;
pub use error::{Error, Result};
pub use session::{Session, TurnAction, plan_turn};
pub use transcript::{ChatLog, Speaker, Turn};
