//! Remote completion API (cognition)
//!
//! One call per conversational turn: the accumulated chat log plus the new
//! human utterance goes up as a raw prompt, a single completion choice comes
//! back. Sampling parameters are fixed; the stop sequences are the speaker
//! labels so the model cannot continue the conversation on its own.

use crate::{Error, Result};

/// Stop sequences: speaker labels (and the common mis-completion "Humans:")
pub const STOP_SEQUENCES: &[&str] = &["Human:", "Humans:", "HAL:"];

const TEMPERATURE: f32 = 0.95;
const TOP_P: f32 = 1.0;
const FREQUENCY_PENALTY: f32 = 0.0;
const PRESENCE_PENALTY: f32 = 0.6;
const BEST_OF: u32 = 1;

#[derive(serde::Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    temperature: f32,
    top_p: f32,
    frequency_penalty: f32,
    presence_penalty: f32,
    best_of: u32,
    max_tokens: u32,
    stop: &'a [&'a str],
}

#[derive(serde::Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoice>,
}

#[derive(serde::Deserialize)]
struct CompletionChoice {
    text: String,
}

/// Client for the remote completion endpoint
pub struct CompletionClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
    max_tokens: u32,
}

impl CompletionClient {
    /// Create a new completion client
    ///
    /// # Errors
    ///
    /// Returns error if API key is missing
    pub fn new(api_key: String, model: String, max_tokens: u32) -> Result<Self> {
        if api_key.is_empty() {
            return Err(Error::Config(
                "OpenAI API key required for completions".to_string(),
            ));
        }

        Ok(Self {
            client: reqwest::Client::new(),
            api_key,
            model,
            max_tokens,
        })
    }

    /// Request a single completion for the given prompt
    ///
    /// Returns the first choice's text, trimmed.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the response has no choices
    pub async fn complete(&self, prompt: &str) -> Result<String> {
        tracing::debug!(prompt_len = prompt.len(), "requesting completion");

        let request = CompletionRequest {
            model: &self.model,
            prompt,
            temperature: TEMPERATURE,
            top_p: TOP_P,
            frequency_penalty: FREQUENCY_PENALTY,
            presence_penalty: PRESENCE_PENALTY,
            best_of: BEST_OF,
            max_tokens: self.max_tokens,
            stop: STOP_SEQUENCES,
        };

        let response = self
            .client
            .post("https://api.openai.com/v1/completions")
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        if !status.is_success() {
            tracing::error!(status = %status, body = %body, "completion API error");
            return Err(Error::Completion(format!(
                "completion API error {status}: {body}"
            )));
        }

        let result: CompletionResponse = serde_json::from_str(&body).map_err(|e| {
            tracing::error!(error = %e, body = %body, "failed to parse completion response");
            e
        })?;

        let answer = result
            .choices
            .first()
            .map(|c| c.text.trim().to_string())
            .ok_or_else(|| {
                Error::Completion("completion response contained no choices".to_string())
            })?;

        tracing::debug!(answer_len = answer.len(), "completion received");
        Ok(answer)
    }
}
