pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use application::{
    ChatClient, GenerateResponseUseCase, SecretStore, SubmitConsultationUseCase,
};

pub use cli::{Commands, ExpertArg};

pub use connector::{
    MockChatClient, OpenAiClient, TomlSecretStore, DEFAULT_BASE_URL, DEFAULT_MODEL,
    DEFAULT_SECRETS_FILE, DEFAULT_TEMPERATURE,
};

pub use domain::{
    select_instruction, ChatMessage, ChatRole, ConversationRequest, ConversationResponse,
    Credential, CredentialSource, DomainError, ExpertCategory, StartupBanner, Submission,
    ViewState,
};
