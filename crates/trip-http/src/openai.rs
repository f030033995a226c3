//! OpenAI chat completions as a [`SuggestionOracle`].

use log::debug;
use serde::Deserialize;
use serde_json::json;

use trip_core::TripConfig;
use trip_intent::{OracleError, SuggestionOracle};

use crate::agent::{build_agent, describe, read_json};

pub const CHAT_COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const MODEL: &str = "gpt-3.5-turbo";
pub const SYSTEM_PROMPT: &str = "You are an assistant that helps with driving suggestions.";
pub const MAX_TOKENS: u32 = 100;

pub struct OpenAiOracle {
    agent:   ureq::Agent,
    api_key: String,
}

impl OpenAiOracle {
    pub fn new(api_key: impl Into<String>, config: &TripConfig) -> Self {
        Self {
            agent:   build_agent(config.request_timeout()),
            api_key: api_key.into(),
        }
    }

    pub(crate) fn payload(&self, prompt: &str) -> serde_json::Value {
        json!({
            "model": MODEL,
            "max_tokens": MAX_TOKENS,
            "messages": [
                { "role": "system", "content": SYSTEM_PROMPT },
                { "role": "user", "content": prompt },
            ],
        })
    }
}

impl SuggestionOracle for OpenAiOracle {
    fn suggest(&self, prompt: &str) -> Result<String, OracleError> {
        debug!("asking {MODEL} for a suggestion");
        let response = self
            .agent
            .post(CHAT_COMPLETIONS_URL)
            .set("Content-Type", "application/json")
            .set("Authorization", &format!("Bearer {}", self.api_key))
            .set("Accept", "application/json")
            .send_json(self.payload(prompt))
            .map_err(|e| OracleError::Request(describe("chat completions", e)))?;
        let reply: ChatReply = read_json(response.into_reader())
            .map_err(|e| OracleError::Request(format!("chat completions reply: {e}")))?;
        reply.into_text()
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatReply {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    #[serde(default)]
    content: Option<String>,
}

impl ChatReply {
    /// Trimmed content of the first choice.
    pub(crate) fn into_text(self) -> Result<String, OracleError> {
        self.choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty())
            .ok_or(OracleError::EmptyReply)
    }
}
