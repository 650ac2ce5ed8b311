//! The conversation loop
//!
//! [`Session`] owns every collaborator — microphone, utterance detector,
//! recognition engine, synthesizer, player, completion client — plus the
//! chat log and a scratch directory for per-turn audio artifacts. One turn
//! moves through LISTENING → TRANSCRIBING → (TERMINATING | RESPONDING) →
//! SPEAKING and back to LISTENING; hearing the termination keyword is the
//! only exit.
//!
//! Every component failure propagates out of [`Session::run`] and ends the
//! process with a nonzero status. That "fatal on any error" policy is
//! deliberate: there is no retry tier and no partial-turn rollback of the
//! chat log.

use tempfile::TempDir;

use crate::completion::CompletionClient;
use crate::config::Config;
use crate::transcript::ChatLog;
use crate::voice::{
    AudioCapture, Player, SAMPLE_RATE, SpeechRecognizer, TextToSpeech, UtteranceDetector,
    WhisperCli, samples_to_wav,
};
use crate::Result;

/// Recorded utterance file name inside the scratch directory
const TURN_WAV: &str = "turn.wav";

/// Synthesized reply file name inside the scratch directory
const REPLY_MP3: &str = "reply.mp3";

/// What to do with a transcribed utterance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnAction {
    /// Speak the farewell and exit the loop
    Terminate,
    /// Query cognition and speak the reply
    Respond,
}

/// Decide the action for a transcript: case-insensitive substring match on
/// the termination keyword anywhere in the text
#[must_use]
pub fn plan_turn(transcript: &str, termination_keyword: &str) -> TurnAction {
    if transcript
        .to_lowercase()
        .contains(&termination_keyword.to_lowercase())
    {
        TurnAction::Terminate
    } else {
        TurnAction::Respond
    }
}

/// The conversational orchestrator
pub struct Session {
    capture: AudioCapture,
    detector: UtteranceDetector,
    recognizer: Box<dyn SpeechRecognizer>,
    synthesizer: TextToSpeech,
    player: Player,
    completion: CompletionClient,
    chat_log: ChatLog,
    scratch: TempDir,
    termination_keyword: String,
    farewell: String,
}

impl Session {
    /// Initialize every collaborator from configuration
    ///
    /// This is the explicit lifecycle step: a missing API key, absent
    /// recognition model, or missing player binary surfaces here, before
    /// the first turn.
    ///
    /// # Errors
    ///
    /// Returns error if any component fails to initialize
    pub fn new(config: &Config) -> Result<Self> {
        let api_key = config.api_keys.openai_or_empty();

        let capture = AudioCapture::new()?;
        let detector = UtteranceDetector::new(
            config.voice.energy_threshold,
            config.voice.pause_secs,
        );
        let recognizer = WhisperCli::new(
            config.audition.binary.clone(),
            config.audition.model.clone(),
        )?;
        let synthesizer = TextToSpeech::new(
            api_key.clone(),
            config.voice.tts_voice.clone(),
            config.voice.tts_model.clone(),
            config.voice.tts_speed,
        )?;
        let player = Player::with_command(&config.voice.player)?;
        let completion = CompletionClient::new(
            api_key,
            config.completion.model.clone(),
            config.completion.max_tokens,
        )?;

        let scratch = TempDir::new()?;
        tracing::debug!(scratch = %scratch.path().display(), "session scratch directory");

        Ok(Self {
            capture,
            detector,
            recognizer: Box::new(recognizer),
            synthesizer,
            player,
            completion,
            chat_log: ChatLog::new(),
            scratch,
            termination_keyword: config.session.termination_keyword.clone(),
            farewell: config.session.farewell.clone(),
        })
    }

    /// Run the conversation loop until the termination keyword is heard
    ///
    /// # Errors
    ///
    /// Returns error on any component failure; the caller decides what a
    /// failure means (in practice: process exit)
    #[allow(clippy::future_not_send)]
    pub async fn run(&mut self) -> Result<()> {
        loop {
            let transcript = self.listen_and_transcribe().await?;
            if transcript.is_empty() {
                continue;
            }
            println!("{transcript}");

            match plan_turn(&transcript, &self.termination_keyword) {
                TurnAction::Terminate => {
                    tracing::info!("termination keyword heard");
                    let farewell = self.farewell.clone();
                    self.speak(&farewell).await?;
                    break;
                }
                TurnAction::Respond => {
                    let prompt = self.chat_log.render_prompt(&transcript);
                    let answer = self.completion.complete(&prompt).await?;
                    println!(">>> {answer}");

                    self.speak(&answer).await?;
                    self.chat_log.push_exchange(&transcript, &answer);
                }
            }
        }

        self.capture.stop();
        Ok(())
    }

    /// The conversation so far
    #[must_use]
    pub fn chat_log(&self) -> &ChatLog {
        &self.chat_log
    }

    /// Capture one utterance and transcribe it
    async fn listen_and_transcribe(&mut self) -> Result<String> {
        let samples = self.capture.listen(&mut self.detector).await?;
        let wav = samples_to_wav(&samples, SAMPLE_RATE)?;

        let wav_path = self.scratch.path().join(TURN_WAV);
        tokio::fs::write(&wav_path, &wav).await?;

        self.recognizer.transcribe(&wav_path).await
    }

    /// Synthesize text and play it through the external player
    ///
    /// Capture is stopped for the duration: no barge-in, strictly
    /// turn-based.
    async fn speak(&mut self, text: &str) -> Result<()> {
        self.capture.stop();

        let audio = self.synthesizer.synthesize(text).await?;
        let mp3_path = self.scratch.path().join(REPLY_MP3);
        tokio::fs::write(&mp3_path, &audio).await?;

        self.player.play(&mp3_path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_turn_termination_any_case() {
        assert_eq!(plan_turn("terminate", "terminate"), TurnAction::Terminate);
        assert_eq!(plan_turn("Terminate", "terminate"), TurnAction::Terminate);
        assert_eq!(
            plan_turn("TERMINATE now", "terminate"),
            TurnAction::Terminate
        );
        assert_eq!(
            plan_turn("please terminate the session", "terminate"),
            TurnAction::Terminate
        );
    }

    #[test]
    fn test_plan_turn_respond() {
        assert_eq!(plan_turn("hello there", "terminate"), TurnAction::Respond);
        assert_eq!(plan_turn("", "terminate"), TurnAction::Respond);
    }

    #[test]
    fn test_plan_turn_matches_inside_words() {
        // Substring match: "terminator" contains "terminate"
        assert_eq!(
            plan_turn("the terminator is a movie", "terminate"),
            TurnAction::Terminate
        );
    }
}
