//! Conversation transcript (the chat log)
//!
//! The chat log is the only conversational memory HAL has: an append-only
//! sequence of turns rendered as a flat text block and replayed verbatim as
//! the prompt prefix of every completion call. It grows for the life of the
//! process; there is no eviction or summarization.

use std::fmt;

/// Speaker label used in the rendered transcript and as completion stop
/// sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    /// The person at the microphone
    Human,
    /// The machine
    Hal,
}

impl Speaker {
    /// Transcript label for this speaker
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Human => "Human",
            Self::Hal => "HAL",
        }
    }
}

impl fmt::Display for Speaker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One attributed line of the conversation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub speaker: Speaker,
    pub text: String,
}

/// Append-only conversation log, seeded with a fixed priming preamble
#[derive(Debug, Clone)]
pub struct ChatLog {
    preamble: String,
    turns: Vec<Turn>,
}

/// Priming text for the completion model. The greeting exchange anchors the
/// `Human:`/`HAL:` turn format the model is expected to continue.
pub const PREAMBLE: &str = "The following is a transcript of a conversation \
between a human and a fully consious machine intelligence named HAL reliably \
passes the turing test. HAL always answers questions truthfully and fully and \
is fully aware of its own existence.\n\nHuman: Hello.\nHAL: Hello.\n";

impl ChatLog {
    /// Create a chat log seeded with the standard preamble
    #[must_use]
    pub fn new() -> Self {
        Self::with_preamble(PREAMBLE)
    }

    /// Create a chat log with a custom preamble
    #[must_use]
    pub fn with_preamble(preamble: &str) -> Self {
        Self {
            preamble: preamble.to_string(),
            turns: Vec::new(),
        }
    }

    /// Append one turn verbatim
    pub fn push(&mut self, speaker: Speaker, text: &str) {
        self.turns.push(Turn {
            speaker,
            text: text.to_string(),
        });
    }

    /// Append a completed exchange: the human turn, then the machine turn
    pub fn push_exchange(&mut self, human: &str, hal: &str) {
        self.push(Speaker::Human, human);
        self.push(Speaker::Hal, hal);
    }

    /// All turns in chronological order
    #[must_use]
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// Number of turns recorded (two per completed exchange)
    #[must_use]
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Render the full log as the flat text block used as prompt prefix
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = self.preamble.clone();
        for turn in &self.turns {
            out.push_str(turn.speaker.label());
            out.push_str(": ");
            out.push_str(&turn.text);
            out.push('\n');
        }
        out
    }

    /// Render the prompt for a new human utterance, ending on the open
    /// `HAL:` label the model is asked to complete
    #[must_use]
    pub fn render_prompt(&self, utterance: &str) -> String {
        format!("{}Human: {utterance}\nHAL:", self.render())
    }
}

impl Default for ChatLog {
    fn default() -> Self {
        Self::new()
    }
}
