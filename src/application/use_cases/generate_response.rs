use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::application::ChatClient;
use crate::domain::{
    select_instruction, ConversationRequest, ConversationResponse, Credential, DomainError,
    ExpertCategory,
};

/// Builds the two-message conversation for a category and asks the LLM once.
///
/// The call is single-attempt. Without a timeout it waits for as long as the
/// underlying client does; [`GenerateResponseUseCase::with_timeout`] bounds it.
pub struct GenerateResponseUseCase {
    chat_client: Arc<dyn ChatClient>,
    credential: Credential,
    timeout: Option<Duration>,
}

impl GenerateResponseUseCase {
    pub fn new(chat_client: Arc<dyn ChatClient>, credential: Credential) -> Self {
        Self {
            chat_client,
            credential,
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build_request(user_text: &str, category: &ExpertCategory) -> ConversationRequest {
        ConversationRequest::new(select_instruction(category), user_text)
    }

    pub async fn execute(
        &self,
        user_text: &str,
        category: &ExpertCategory,
    ) -> Result<ConversationResponse, DomainError> {
        // Never reach the network with an empty key.
        if !self.credential.is_configured() {
            return Err(DomainError::configuration(format!(
                "{} is not set",
                crate::domain::API_KEY_NAME
            )));
        }

        let request = Self::build_request(user_text, category);
        let messages = request.messages();

        info!(
            "Consulting {} as '{}' ({} chars)",
            self.chat_client.model_name(),
            category,
            user_text.chars().count()
        );
        let start_time = Instant::now();

        let call = self.chat_client.complete(&messages);
        let text = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, call).await.map_err(|_| {
                warn!("LLM call exceeded {:?}", limit);
                DomainError::llm(format!("request timed out after {}s", limit.as_secs()))
            })??,
            None => call.await?,
        };

        if text.is_empty() {
            return Err(DomainError::llm("model returned an empty response"));
        }

        debug!(
            "LLM answered in {:?} ({} chars)",
            start_time.elapsed(),
            text.chars().count()
        );

        Ok(ConversationResponse::new(text))
    }
}
