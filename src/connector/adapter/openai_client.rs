use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::application::ChatClient;
use crate::domain::{ChatMessage, Credential, DomainError};

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com";
const COMPLETIONS_PATH: &str = "/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

#[derive(serde::Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    temperature: f32,
    messages: &'a [ChatMessage],
}

#[derive(Deserialize)]
struct ApiResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// HTTP client for the OpenAI Chat Completions API (and compatible endpoints).
///
/// Implements [`ChatClient`] so the use cases stay decoupled from transport and
/// serialization details. The credential is injected at construction; nothing
/// is read from the environment here.
///
/// ```text
/// POST {base_url}/v1/chat/completions
/// Authorization: Bearer <OPENAI_API_KEY>
/// {"model": "gpt-4o-mini", "temperature": 0.7, "messages": [...]}
/// ```
pub struct OpenAiClient {
    client: reqwest::Client,
    credential: Credential,
    model: String,
    temperature: f32,
    /// Full endpoint URL (base + COMPLETIONS_PATH).
    url: String,
}

impl OpenAiClient {
    pub fn new(credential: Credential, base_url: impl Into<String>) -> Self {
        let base: String = base_url.into();
        let url = format!("{}{}", base.trim_end_matches('/'), COMPLETIONS_PATH);
        Self {
            client: reqwest::Client::new(),
            credential,
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            url,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn temperature(&self) -> f32 {
        self.temperature
    }

    /// Pull the completion text out of a response body.
    fn extract_text(body: &str) -> Result<String, DomainError> {
        let api_response: ApiResponse = serde_json::from_str(body)
            .map_err(|e| DomainError::llm(format!("OpenAiClient: failed to parse response: {e}")))?;

        let text = api_response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .unwrap_or_default();

        if text.is_empty() {
            return Err(DomainError::llm("OpenAiClient: response contained no completion text"));
        }

        Ok(text)
    }
}

#[async_trait]
impl ChatClient for OpenAiClient {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, DomainError> {
        if !self.credential.is_configured() {
            return Err(DomainError::configuration("OpenAiClient: API key is empty"));
        }

        let request = ApiRequest {
            model: &self.model,
            temperature: self.temperature,
            messages,
        };

        debug!("OpenAiClient: POST {} ({} messages)", self.url, messages.len());

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(self.credential.token())
            .json(&request)
            .send()
            .await
            .map_err(|e| DomainError::llm(format!("OpenAiClient: request failed: {e}")))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| DomainError::llm(format!("OpenAiClient: failed to read response: {e}")))?;

        if !status.is_success() {
            warn!("OpenAiClient: API returned {status}: {body}");
            return Err(DomainError::llm(format!("OpenAiClient: API returned {status}")));
        }

        Self::extract_text(&body)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CredentialSource;

    #[test]
    fn url_joins_base_and_path() {
        let client = OpenAiClient::new(
            Credential::new("sk", CredentialSource::Environment),
            "http://localhost:9999/",
        );
        assert_eq!(client.url(), "http://localhost:9999/v1/chat/completions");
        assert_eq!(client.model_name(), "gpt-4o-mini");
        assert_eq!(client.temperature(), 0.7);
    }

    #[test]
    fn extract_text_takes_first_choice() {
        let body = r#"{"choices":[{"index":0,"message":{"role":"assistant","content":"答え"}}]}"#;
        assert_eq!(OpenAiClient::extract_text(body).unwrap(), "答え");
    }

    #[test]
    fn extract_text_rejects_missing_choices() {
        let err = OpenAiClient::extract_text(r#"{"choices":[]}"#).unwrap_err();
        assert!(err.is_llm_error());

        let err = OpenAiClient::extract_text(r#"{"id":"x"}"#).unwrap_err();
        assert!(err.is_llm_error());
    }

    #[test]
    fn extract_text_rejects_null_content_and_garbage() {
        let body = r#"{"choices":[{"message":{"role":"assistant","content":null}}]}"#;
        assert!(OpenAiClient::extract_text(body).unwrap_err().is_llm_error());
        assert!(OpenAiClient::extract_text("<html>").unwrap_err().is_llm_error());
    }

    #[tokio::test]
    async fn empty_credential_fails_without_sending() {
        // Port 9 (discard) would fail differently if a request were attempted.
        let client = OpenAiClient::new(Credential::empty(), "http://127.0.0.1:9");
        let err = client
            .complete(&[ChatMessage::user("hi")])
            .await
            .unwrap_err();
        assert!(err.is_configuration_error());
    }
}
