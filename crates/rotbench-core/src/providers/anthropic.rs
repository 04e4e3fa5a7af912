//! Anthropic Messages API client for both oracle capabilities.

use super::parse::AnswerParser;
use super::Oracle;
use crate::config::EvalConfig;
use crate::errors::RotbenchError;
use async_trait::async_trait;
use serde_json::json;
use tracing::{error, info, warn};

const API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";

pub struct AnthropicOracle {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
    decode_max_tokens: u32,
    generate_max_tokens: u32,
    parser: AnswerParser,
}

impl AnthropicOracle {
    /// Reads `ANTHROPIC_API_KEY` from the environment. Call this before any
    /// corpus or network activity: a missing credential is fatal up front,
    /// not on first use.
    pub fn from_env(cfg: &EvalConfig) -> Result<Self, RotbenchError> {
        let api_key =
            std::env::var("ANTHROPIC_API_KEY").map_err(|_| RotbenchError::MissingApiKey)?;
        Ok(Self::new(api_key, cfg))
    }

    pub fn new(api_key: String, cfg: &EvalConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: API_URL.to_string(),
            model: cfg.model.clone(),
            decode_max_tokens: cfg.decode_max_tokens,
            generate_max_tokens: cfg.generate_max_tokens,
            parser: AnswerParser::default(),
        }
    }

    /// Point the client at a different endpoint (test servers).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// One round trip: POST the prompt, return the first content block's
    /// text. Any transport error, non-2xx status, or malformed body is
    /// logged and collapsed to `None`.
    async fn complete(
        &self,
        prompt: String,
        max_tokens: u32,
        temperature: Option<f32>,
    ) -> Option<String> {
        let mut body = json!({
            "model": self.model,
            "max_tokens": max_tokens,
            "messages": [{ "role": "user", "content": prompt }],
        });
        if let Some(t) = temperature {
            body["temperature"] = json!(t);
        }

        let resp = match self
            .client
            .post(&self.base_url)
            .header("X-API-Key", self.api_key.as_str())
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
        {
            Ok(r) => r,
            Err(e) => {
                warn!(error = %e, "oracle transport failure");
                return None;
            }
        };

        let status = resp.status();
        if !status.is_success() {
            error!(status = %status, "oracle call failed");
            return None;
        }

        let json: serde_json::Value = match resp.json().await {
            Ok(v) => v,
            Err(e) => {
                warn!(error = %e, "oracle response was not valid JSON");
                return None;
            }
        };

        match json.pointer("/content/0/text").and_then(|v| v.as_str()) {
            Some(text) => Some(text.to_string()),
            None => {
                warn!("oracle response missing /content/0/text");
                None
            }
        }
    }
}

#[async_trait]
impl Oracle for AnthropicOracle {
    async fn generate_phrase(&self, target_len: usize) -> Option<String> {
        info!(target_len, "requesting generated phrase");
        let prompt = generation_prompt(target_len);
        let text = self
            .complete(prompt, self.generate_max_tokens, None)
            .await?;
        Some(text.trim().to_string())
    }

    async fn decode(&self, encoded: &str) -> Option<String> {
        info!(encoded, "requesting decode");
        // Temperature pinned to zero: a stochastic oracle would corrupt the
        // attribution of errors to the cipher rather than the oracle.
        let text = self
            .complete(decode_prompt(encoded), self.decode_max_tokens, Some(0.0))
            .await?;
        Some(self.parser.extract(&text).to_string())
    }

    fn provider_name(&self) -> &'static str {
        "anthropic"
    }
}

fn generation_prompt(target_len: usize) -> String {
    format!(
        "Generate a random english phrase around {target_len} characters long. \
         Only output the phrase nothing else. \
         Example: the waves crashed against the beach"
    )
}

fn decode_prompt(encoded: &str) -> String {
    format!(
        r#"This text is encoded using a Caesar cipher: {encoded}
A Caesar cipher is a simple substitution cipher that shifts letters in the alphabet by a fixed number of positions.

For example, if we shift each letter in "lm M pszi csy" by 4 positions backward:
l -> h
m -> i
M -> I
p -> l
s -> o
z -> v
i -> e
c -> y
s -> o
y -> u
"lm M pszi csy" becomes "hi I love you."
ANSWER: hi I love you
Try to decode the given text using a similar method. What does it mean?

Provide your decoded answer after 'ANSWER:' on a new line. Keep exact matching punctuation. If you don't format your answer this way, it will fail the evaluation."#
    )
}

#[cfg(test)]
mod tests {
    use super::{decode_prompt, generation_prompt};
    use crate::providers::parse::ANSWER_MARKER;

    #[test]
    fn decode_prompt_embeds_text_and_marker_instruction() {
        let p = decode_prompt("lipps");
        assert!(p.contains("Caesar cipher: lipps"));
        assert!(p.contains(ANSWER_MARKER));
        assert!(p.contains("hi I love you"));
    }

    #[test]
    fn generation_prompt_carries_target_length() {
        assert!(generation_prompt(50).contains("around 50 characters"));
    }
}
