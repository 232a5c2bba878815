use serde::Serialize;

/// Name of the environment variable (and secret-store key) holding the API key.
pub const API_KEY_NAME: &str = "OPENAI_API_KEY";

/// Where a [`Credential`] was resolved from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CredentialSource {
    Environment,
    SecretStore,
    Missing,
}

impl CredentialSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            CredentialSource::Environment => "environment",
            CredentialSource::SecretStore => "secret_store",
            CredentialSource::Missing => "missing",
        }
    }
}

impl std::fmt::Display for CredentialSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The API key used to authenticate outbound LLM requests.
///
/// Resolved once at startup and never mutated afterwards. An empty credential
/// is the "not configured" state; callers check [`Credential::is_configured`]
/// before attempting a request.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    token: String,
    source: CredentialSource,
}

impl Credential {
    pub fn new(token: impl Into<String>, source: CredentialSource) -> Self {
        let token = token.into();
        let source = if token.is_empty() {
            CredentialSource::Missing
        } else {
            source
        };
        Self { token, source }
    }

    pub fn empty() -> Self {
        Self {
            token: String::new(),
            source: CredentialSource::Missing,
        }
    }

    pub fn is_configured(&self) -> bool {
        !self.token.is_empty()
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn source(&self) -> CredentialSource {
        self.source
    }
}

// Never print the token itself.
impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("configured", &self.is_configured())
            .field("source", &self.source)
            .finish()
    }
}
