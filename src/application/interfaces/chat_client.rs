use async_trait::async_trait;

use crate::domain::{ChatMessage, DomainError};

/// An interface for sending a chat-style message list to an LLM and receiving
/// the assistant's text.
///
/// Implementors encapsulate transport, serialization, and vendor-specific API
/// details. A client holding no credential refuses with
/// [`DomainError::ConfigurationError`] before sending anything. Every other
/// failure (transport, authentication, provider-side, or an empty/malformed
/// reply) is reported as [`DomainError::LlmError`].
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Send the ordered messages and return the text of the single completion.
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, DomainError>;

    fn model_name(&self) -> &str;
}
