use tracing::{debug, warn};

use crate::application::GenerateResponseUseCase;
use crate::domain::{DomainError, Submission, ViewState};

/// Handles one explicit submit action and decides what the page shows next.
///
/// Never fails: every outcome, including LLM errors, becomes a [`ViewState`]
/// so the form stays usable for the next submission.
pub struct SubmitConsultationUseCase<'a> {
    generator: &'a GenerateResponseUseCase,
}

impl<'a> SubmitConsultationUseCase<'a> {
    pub fn new(generator: &'a GenerateResponseUseCase) -> Self {
        Self { generator }
    }

    pub async fn execute(&self, submission: &Submission) -> ViewState {
        let outcome = match submission.validate() {
            Ok(()) => {
                self.generator
                    .execute(&submission.content, &submission.expert)
                    .await
            }
            Err(e) => Err(e),
        };

        match outcome {
            Ok(response) => ViewState::answer(response.into_text()),
            Err(DomainError::ValidationError(msg)) => {
                debug!("Rejected submission: {}", msg);
                ViewState::validation_warning()
            }
            Err(DomainError::ConfigurationError(msg)) => {
                warn!("Submission refused: {}", msg);
                ViewState::configuration_error()
            }
            Err(e) => {
                warn!("Consultation failed: {}", e);
                ViewState::error(e)
            }
        }
    }
}
