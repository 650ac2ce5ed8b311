//! Voice processing module
//!
//! Handles audio capture, utterance segmentation, local speech recognition,
//! remote speech synthesis, and playback through an external player.

mod capture;
mod playback;
mod stt;
mod tts;
pub mod vad;

pub use capture::{AudioCapture, SAMPLE_RATE, samples_to_wav};
pub use playback::Player;
pub use stt::{SpeechRecognizer, WhisperCli, correct_transcript};
pub use tts::TextToSpeech;
pub use vad::{DetectorState, UtteranceDetector};
