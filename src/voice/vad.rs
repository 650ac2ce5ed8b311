//! Utterance segmentation
//!
//! Splits the microphone stream into finite utterances using fixed-threshold
//! energy detection: speech starts when RMS energy crosses the threshold and
//! ends after a pause of sustained silence. The threshold does not adapt.

use crate::voice::SAMPLE_RATE;

/// Default RMS energy threshold to consider speech
pub const DEFAULT_ENERGY_THRESHOLD: f32 = 0.03;

/// Default pause duration marking end of utterance, in seconds
pub const DEFAULT_PAUSE_SECS: f32 = 0.8;

/// Minimum duration of speech to count as an utterance (in samples at 16kHz)
const MIN_SPEECH_SAMPLES: usize = 4800; // 0.3 seconds

/// State of the utterance detector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectorState {
    /// Waiting for speech
    Idle,
    /// Detected speech, accumulating until a pause
    Listening,
}

/// Segments audio into utterances by energy and pause detection
pub struct UtteranceDetector {
    energy_threshold: f32,
    pause_samples: usize,
    state: DetectorState,
    speech_buffer: Vec<f32>,
    speech_counter: usize,
    silence_counter: usize,
}

impl UtteranceDetector {
    /// Create a detector with the given energy threshold and pause duration
    #[must_use]
    pub fn new(energy_threshold: f32, pause_secs: f32) -> Self {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        #[allow(clippy::cast_precision_loss)]
        let pause_samples = (pause_secs * SAMPLE_RATE as f32) as usize;

        tracing::debug!(
            energy_threshold,
            pause_secs,
            "utterance detector initialized"
        );

        Self {
            energy_threshold,
            pause_samples,
            state: DetectorState::Idle,
            speech_buffer: Vec::new(),
            speech_counter: 0,
            silence_counter: 0,
        }
    }

    /// Process audio samples
    ///
    /// Returns true when an utterance is complete: enough speech was heard
    /// and a pause of the configured duration followed it.
    pub fn process(&mut self, samples: &[f32]) -> bool {
        let energy = calculate_energy(samples);
        let is_speech = energy > self.energy_threshold;

        match self.state {
            DetectorState::Idle => {
                if is_speech {
                    self.state = DetectorState::Listening;
                    self.speech_buffer.clear();
                    self.speech_buffer.extend_from_slice(samples);
                    self.speech_counter = samples.len();
                    self.silence_counter = 0;
                    tracing::trace!(energy, "speech detected, listening");
                }
            }
            DetectorState::Listening => {
                self.speech_buffer.extend_from_slice(samples);

                if is_speech {
                    self.speech_counter += samples.len();
                    self.silence_counter = 0;
                } else {
                    self.silence_counter += samples.len();
                }

                tracing::trace!(
                    buffer_len = self.speech_buffer.len(),
                    speech = self.speech_counter,
                    silence = self.silence_counter,
                    is_speech,
                    energy,
                    "listening state"
                );

                if self.silence_counter > self.pause_samples
                    && self.speech_counter > MIN_SPEECH_SAMPLES
                {
                    tracing::debug!(
                        samples = self.speech_buffer.len(),
                        "utterance complete"
                    );
                    return true;
                }

                // Too much silence without enough speech: a false start
                if self.silence_counter > self.pause_samples * 2 {
                    tracing::trace!("false start - resetting");
                    self.reset();
                }
            }
        }

        false
    }

    /// Take the accumulated utterance, clearing the buffer
    pub fn take_utterance(&mut self) -> Vec<f32> {
        let samples = std::mem::take(&mut self.speech_buffer);
        self.reset();
        samples
    }

    /// Get the accumulated speech buffer
    #[must_use]
    pub fn speech_buffer(&self) -> &[f32] {
        &self.speech_buffer
    }

    /// Reset detector to idle state
    pub fn reset(&mut self) {
        self.state = DetectorState::Idle;
        self.speech_buffer.clear();
        self.speech_counter = 0;
        self.silence_counter = 0;
    }

    /// Get current state
    #[must_use]
    pub const fn state(&self) -> DetectorState {
        self.state
    }
}

/// Calculate RMS energy of audio samples
#[allow(clippy::cast_precision_loss)]
fn calculate_energy(samples: &[f32]) -> f32 {
    if samples.is_empty() {
        return 0.0;
    }

    let sum_squares: f32 = samples.iter().map(|s| s * s).sum();
    (sum_squares / samples.len() as f32).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_energy_calculation() {
        let silence = vec![0.0f32; 100];
        assert!(calculate_energy(&silence) < 0.001);

        let loud = vec![0.5f32; 100];
        assert!(calculate_energy(&loud) > 0.4);
    }

    #[test]
    fn test_idle_until_speech() {
        let mut detector =
            UtteranceDetector::new(DEFAULT_ENERGY_THRESHOLD, DEFAULT_PAUSE_SECS);

        let silence = vec![0.0f32; 1600];
        assert!(!detector.process(&silence));
        assert_eq!(detector.state(), DetectorState::Idle);

        let speech = vec![0.5f32; 1600];
        detector.process(&speech);
        assert_eq!(detector.state(), DetectorState::Listening);
    }
}
