use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::application::ChatClient;
use crate::domain::{ChatMessage, ChatRole, DomainError};

enum MockBehavior {
    /// Answer with a fixed prefix followed by the user's text.
    Echo,
    Reply(String),
    Fail(String),
}

/// Offline [`ChatClient`] that records every call.
///
/// Used by `--mock-llm` for running without network access and by tests that
/// need to assert how often, and with what messages, the model was called.
pub struct MockChatClient {
    behavior: MockBehavior,
    delay: Option<Duration>,
    calls: Mutex<Vec<Vec<ChatMessage>>>,
}

impl MockChatClient {
    pub fn new() -> Self {
        Self::with_behavior(MockBehavior::Echo)
    }

    pub fn with_reply(reply: impl Into<String>) -> Self {
        Self::with_behavior(MockBehavior::Reply(reply.into()))
    }

    pub fn failing(reason: impl Into<String>) -> Self {
        Self::with_behavior(MockBehavior::Fail(reason.into()))
    }

    fn with_behavior(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            delay: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> Vec<Vec<ChatMessage>> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().map(|c| c.len()).unwrap_or_default()
    }
}

impl Default for MockChatClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatClient for MockChatClient {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, DomainError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(messages.to_vec());
        }

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        debug!("MockChatClient: received {} messages", messages.len());

        match &self.behavior {
            MockBehavior::Echo => {
                let user = messages
                    .iter()
                    .rev()
                    .find(|m| m.role() == ChatRole::User)
                    .map(|m| m.content())
                    .unwrap_or_default();
                Ok(format!("[mock] {user}"))
            }
            MockBehavior::Reply(reply) => Ok(reply.clone()),
            MockBehavior::Fail(reason) => Err(DomainError::llm(reason.clone())),
        }
    }

    fn model_name(&self) -> &str {
        "mock-chat"
    }
}
