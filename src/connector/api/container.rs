use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::application::{ChatClient, GenerateResponseUseCase, SubmitConsultationUseCase};
use crate::connector::config::{load_env_file, ConfigLoader};
use crate::domain::{Credential, StartupBanner, Submission, ViewState, API_KEY_NAME};
use crate::{MockChatClient, OpenAiClient, TomlSecretStore, DEFAULT_BASE_URL};

const BASE_URL_VAR: &str = "OPENAI_BASE_URL";

pub struct ContainerConfig {
    /// dotenv file loaded into the environment before the key is resolved.
    pub env_file: PathBuf,
    /// TOML secret store consulted when the environment has no key.
    pub secrets_file: PathBuf,
    /// Root of the OpenAI-compatible API. Falls back to `OPENAI_BASE_URL`,
    /// then to the public OpenAI endpoint.
    pub base_url: Option<String>,
    /// Upper bound on a single LLM call. `None` waits indefinitely.
    pub timeout: Option<Duration>,
    pub mock_llm: bool,
}

/// Wires the resolved credential, the chat client and the use cases.
///
/// Built once at startup; everything it hands out is read-only afterwards.
pub struct Container {
    credential: Credential,
    base_url: String,
    chat_client: Arc<dyn ChatClient>,
    config: ContainerConfig,
}

impl Container {
    pub fn new(config: ContainerConfig) -> Result<Self> {
        load_env_file(&config.env_file);

        let secret_store = TomlSecretStore::load(&config.secrets_file).with_context(|| {
            format!(
                "Failed to load secrets from {}",
                config.secrets_file.display()
            )
        })?;
        let loader = ConfigLoader::load_credential(&secret_store);
        if loader.is_configured() {
            info!("{} resolved from {}", API_KEY_NAME, loader.credential().source());
        } else {
            warn!("{} is not set in the environment or secret store", API_KEY_NAME);
        }
        let credential = loader.into_credential();
        let base_url = config
            .base_url
            .clone()
            .or_else(|| std::env::var(BASE_URL_VAR).ok().filter(|v| !v.is_empty()))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let chat_client: Arc<dyn ChatClient> = if config.mock_llm {
            debug!("Using mock chat client");
            Arc::new(MockChatClient::new())
        } else {
            debug!("Using OpenAI chat client at {}", base_url);
            Arc::new(OpenAiClient::new(credential.clone(), &base_url))
        };

        Ok(Self {
            credential,
            base_url,
            chat_client,
            config,
        })
    }

    /// Assemble a container around an already-built client.
    pub fn with_chat_client(
        credential: Credential,
        chat_client: Arc<dyn ChatClient>,
        config: ContainerConfig,
    ) -> Self {
        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self {
            credential,
            base_url,
            chat_client,
            config,
        }
    }

    pub fn generate_use_case(&self) -> GenerateResponseUseCase {
        GenerateResponseUseCase::new(self.chat_client.clone(), self.credential.clone())
            .with_timeout(self.config.timeout)
    }

    /// Run one submission through validation and the LLM.
    pub async fn submit(&self, submission: &Submission) -> ViewState {
        let generator = self.generate_use_case();
        SubmitConsultationUseCase::new(&generator)
            .execute(submission)
            .await
    }

    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    pub fn banner(&self) -> StartupBanner {
        StartupBanner::for_credential(&self.credential)
    }

    pub fn model_name(&self) -> &str {
        self.chat_client.model_name()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn secrets_file(&self) -> &std::path::Path {
        &self.config.secrets_file
    }
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            env_file: PathBuf::from(".env"),
            secrets_file: PathBuf::from(crate::DEFAULT_SECRETS_FILE),
            base_url: None,
            timeout: None,
            mock_llm: false,
        }
    }
}
