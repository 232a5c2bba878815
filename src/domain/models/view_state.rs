use serde::Serialize;

use super::Credential;

pub const MISSING_CREDENTIAL_MESSAGE: &str = "❌ `OPENAI_API_KEY` が環境変数として設定されていません。.env ファイルに OPENAI_API_KEY=... を記述して、アプリを再起動してください。";
pub const CONFIGURED_MESSAGE: &str = "✅ OpenAI APIキーが正常に読み込まれています。";
pub const EMPTY_INPUT_WARNING: &str = "相談内容を入力してください。";
pub const LLM_FAILURE_PREFIX: &str = "LLM の呼び出しに失敗しました";

/// The banner shown above the form, decided once from the resolved credential.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StartupBanner {
    Configured,
    MissingCredential,
}

impl StartupBanner {
    pub fn for_credential(credential: &Credential) -> Self {
        if credential.is_configured() {
            StartupBanner::Configured
        } else {
            StartupBanner::MissingCredential
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            StartupBanner::Configured => CONFIGURED_MESSAGE,
            StartupBanner::MissingCredential => MISSING_CREDENTIAL_MESSAGE,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, StartupBanner::MissingCredential)
    }
}

/// Outcome of one interaction with the form.
///
/// `Idle` is the state before any submission. A submission moves through the
/// in-flight LLM call and lands in exactly one of the other variants; nothing
/// is carried over to the next interaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ViewState {
    Idle,
    Answer { text: String },
    ValidationWarning { message: String },
    ConfigurationError { message: String },
    Error { message: String },
}

impl ViewState {
    pub fn answer(text: impl Into<String>) -> Self {
        ViewState::Answer { text: text.into() }
    }

    pub fn validation_warning() -> Self {
        ViewState::ValidationWarning {
            message: EMPTY_INPUT_WARNING.to_string(),
        }
    }

    pub fn configuration_error() -> Self {
        ViewState::ConfigurationError {
            message: MISSING_CREDENTIAL_MESSAGE.to_string(),
        }
    }

    pub fn error(detail: impl std::fmt::Display) -> Self {
        ViewState::Error {
            message: format!("{LLM_FAILURE_PREFIX}: {detail}"),
        }
    }

    pub fn answer_text(&self) -> Option<&str> {
        match self {
            ViewState::Answer { text } => Some(text),
            _ => None,
        }
    }
}
