//! Chat payloads and transcript entries.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Substituted when the backend answers without a `reply` field.
pub const NO_REPLY_PLACEHOLDER: &str = "No response received.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

impl ChatRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Response of `POST /api/chat`. Unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply: Option<String>,
}

impl ChatReply {
    /// The reply text, or [`NO_REPLY_PLACEHOLDER`] when absent or empty.
    pub fn text(&self) -> &str {
        self.reply
            .as_deref()
            .filter(|r| !r.is_empty())
            .unwrap_or(NO_REPLY_PLACEHOLDER)
    }

    pub fn into_text(self) -> String {
        match self.reply {
            Some(r) if !r.is_empty() => r,
            _ => NO_REPLY_PLACEHOLDER.to_string(),
        }
    }
}

/// Who wrote a transcript line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sender {
    You,
    #[serde(rename = "AI")]
    Ai,
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sender::You => f.write_str("You"),
            Sender::Ai => f.write_str("AI"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
}

impl ChatMessage {
    pub fn you(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::You,
            text: text.into(),
        }
    }

    pub fn ai(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::Ai,
            text: text.into(),
        }
    }
}

impl fmt::Display for ChatMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.sender, self.text)
    }
}
