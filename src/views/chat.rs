use super::{Generation, Phase};
use crate::types::{ChatMessage, ChatReply};
use crate::{ApiClient, Result};
use tracing::{debug, warn};

/// AI line appended when the chat call fails.
pub const UNREACHABLE_REPLY: &str = "Error: Unable to reach server.";

/// Chat page: append-only transcript plus an input buffer.
#[derive(Debug)]
pub struct ChatView {
    client: ApiClient,
    messages: Vec<ChatMessage>,
    input: String,
    phase: Phase,
    /// Sends begun but not yet settled.
    in_flight: usize,
    generation: Generation,
}

impl ChatView {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            messages: Vec::new(),
            input: String::new(),
            phase: Phase::Idle,
            in_flight: 0,
            generation: Generation::default(),
        }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Send the current input. Blank input is ignored and issues no request.
    ///
    /// The user's line is in the transcript before the request starts; the AI line
    /// follows once it settles.
    pub async fn send(&mut self) {
        let Some(text) = self.begin_send() else {
            return;
        };
        let result = self.client.chat_with_ai(&text).await;
        self.finish_send(result);
    }

    /// Convenience for `set_input` followed by `send`.
    pub async fn send_message(&mut self, text: impl Into<String>) {
        self.set_input(text);
        self.send().await;
    }

    /// Take the input, append it as a `You` line and return the text to send.
    pub fn begin_send(&mut self) -> Option<String> {
        if self.input.trim().is_empty() {
            return None;
        }
        let text = std::mem::take(&mut self.input);
        self.messages.push(ChatMessage::you(text.clone()));
        self.in_flight += 1;
        self.phase = Phase::Pending;
        Some(text)
    }

    /// Append the AI line for a settled call. Ignored once the view is unmounted.
    ///
    /// The view stays pending while any other send is still outstanding; the
    /// last one to settle decides the final phase.
    pub fn finish_send(&mut self, result: Result<ChatReply>) {
        self.in_flight = self.in_flight.saturating_sub(1);
        if !self.generation.is_mounted() {
            debug!("dropping chat reply for unmounted view");
            return;
        }
        let settled = match result {
            Ok(reply) => {
                self.messages.push(ChatMessage::ai(reply.into_text()));
                Phase::Success
            }
            Err(e) => {
                warn!(error = %e, "chat request failed");
                self.messages.push(ChatMessage::ai(UNREACHABLE_REPLY));
                Phase::Failure(UNREACHABLE_REPLY.to_string())
            }
        };
        if self.in_flight == 0 {
            self.phase = settled;
        }
    }

    pub fn unmount(&mut self) {
        self.generation.unmount();
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }
}
